//! The `pathwise reorder` command.

use std::path::PathBuf;

use anyhow::Result;

use pathwise_core::model::LearningStyle;
use pathwise_core::reorder::reorder_for_preference;

use super::{load_inputs, write_path};

pub fn execute(
    path_file: PathBuf,
    preference: Option<LearningStyle>,
    catalog: Option<PathBuf>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut inputs = load_inputs(&path_file, catalog, config_path.as_deref())?;

    let preference = preference.unwrap_or(inputs.path.preference);
    inputs.path.items = reorder_for_preference(
        &inputs.path.items,
        preference,
        &inputs.catalog,
        &inputs.config.reorder,
    );

    println!("Reordered for {preference} preference:");
    for (i, item) in inputs.path.items.iter().enumerate() {
        println!("  {}. {} ({}, {})", i + 1, item.asset_id, item.id, item.status);
    }

    let written = write_path(&inputs.path, &path_file, output.as_deref())?;
    eprintln!("Path written to: {}", written.display());
    Ok(())
}
