//! The `pathwise record` command.

use std::path::PathBuf;

use anyhow::Result;

use pathwise_core::engine::AdaptiveEngine;
use pathwise_core::model::Score;
use pathwise_core::progress::record_attempt;

use super::evaluate::finish;
use super::load_inputs;

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
    let today = chrono::Local::now().date_naive();
    let eval = record_attempt(
        &engine,
        &inputs.path.items,
        &item,
        score,
        &inputs.path.learner_id,
        &inputs.catalog,
        &inputs.config.attempts,
        today,
    );

    finish(eval, &mut inputs.path, &path_file, output, &format)
}
