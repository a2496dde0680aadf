//! The `pathwise evaluate` command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json::json;

use pathwise_core::engine::{AdaptiveEngine, Adjustment, Evaluation};
use pathwise_core::model::Score;
use pathwise_core::path::LearningPath;

use super::{load_inputs, write_path};

pub fn execute(
    path_file: PathBuf,
    item: String,
    score: u32,
    catalog: Option<PathBuf>,
    output: Option<PathBuf>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let score = Score::new(score)?;
    let mut inputs = load_inputs(&path_file, catalog, config_path.as_deref())?;

    let engine = AdaptiveEngine::new(inputs.config.engine.clone());
    let eval = engine.evaluate_performance(
        &inputs.path.items,
        &item,
        score,
        &inputs.path.learner_id,
        &inputs.catalog,
    );

    finish(eval, &mut inputs.path, &path_file, output, &format)
}

/// Print an evaluation and persist its path unless it was rejected.
pub(crate) fn finish(
    eval: Evaluation,
    path: &mut LearningPath,
    path_file: &Path,
    output: Option<PathBuf>,
    format: &str,
) -> Result<()> {
    match format {
        "json" => {
            let summary = json!({
                "outcome": eval.outcome,
                "message": eval.message,
                "adjustment": eval.adjustment,
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        _ => {
            println!("[{}] {}", eval.outcome, eval.message);
            match &eval.adjustment {
                Adjustment::Remedial { item_id, asset_id } => {
                    println!("  inserted {item_id} ({asset_id})");
                }
                Adjustment::Skipped { item_id, asset_id } => {
                    println!("  skipped {item_id} ({asset_id})");
                }
                Adjustment::Advanced => {}
                Adjustment::Rejected { error } => {
                    eprintln!("  path unchanged: {error}");
                }
            }
        }
    }

    if eval.is_rejected() {
        return Ok(());
    }

    path.items = eval.path;
    let written = write_path(path, path_file, output.as_deref())?;
    eprintln!("Path written to: {}", written.display());
    Ok(())
}
