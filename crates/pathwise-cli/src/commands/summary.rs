//! The `pathwise summary` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use pathwise_core::catalog::Catalog;
use pathwise_core::statistics::summarize;

use super::load_inputs;

pub fn execute(
    path_file: PathBuf,
    catalog: Option<PathBuf>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let inputs = load_inputs(&path_file, catalog, config_path.as_deref())?;
    let summary = summarize(&inputs.path.items, &inputs.catalog);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Item", "Asset", "Difficulty", "Status", "Score"]);
    for (i, item) in inputs.path.items.iter().enumerate() {
        let (title, difficulty) = match inputs.catalog.asset(&item.asset_id) {
            Some(asset) => (asset.title.clone(), asset.difficulty.to_string()),
            None => (format!("{} (unknown)", item.asset_id), "-".to_string()),
        };
        let mut status = item.status.to_string();
        if item.is_remedial() {
            status.push_str(" (remedial)");
        }
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&item.id),
            Cell::new(title),
            Cell::new(difficulty),
            Cell::new(status),
            Cell::new(item.score.map(|s| s.to_string()).unwrap_or_else(|| "-".into())),
        ]);
    }

    println!("Learner: {} ({})", inputs.path.learner_id, inputs.path.preference);
    println!("{table}");
    println!(
        "{}/{} completed ({:.1}%), {} failed, {} remedial, {} min learned",
        summary.completed,
        summary.total,
        summary.completion_rate * 100.0,
        summary.failed,
        summary.remedial,
        summary.minutes_learned,
    );
    if let Some(avg) = summary.average_score {
        println!("Average score: {avg:.1}");
    }

    Ok(())
}
