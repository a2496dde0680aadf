//! The `pathwise validate` command.

use std::path::PathBuf;

use anyhow::Result;

use pathwise_core::parser::{self, ValidationWarning};
use pathwise_core::path::LearningPath;

fn print_warnings(warnings: &[ValidationWarning]) {
    for w in warnings {
        let prefix = w
            .subject
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }
}

pub fn execute(catalog_path: PathBuf, path_file: Option<PathBuf>) -> Result<()> {
    let catalogs = if catalog_path.is_dir() {
        parser::load_catalog_directory(&catalog_path)?
    } else {
        vec![parser::parse_catalog(&catalog_path)?]
    };

    let mut total_warnings = 0;

    for catalog in &catalogs {
        println!("Catalog: {} ({} assets)", catalog.name, catalog.len());
        let warnings = parser::validate_catalog(catalog);
        print_warnings(&warnings);
        total_warnings += warnings.len();
    }

    if let Some(path_file) = path_file {
        let merged = parser::load_catalog(&catalog_path)?;
        let path = LearningPath::load_json(&path_file)?;
        println!("Path: {} ({} items)", path.learner_id, path.items.len());
        let warnings = parser::validate_path(&path, &merged);
        print_warnings(&warnings);
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All files valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
