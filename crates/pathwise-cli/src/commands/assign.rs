//! The `pathwise assign` command.

use std::path::PathBuf;

use anyhow::Result;

use pathwise_core::assign::{assign_assets, SkipReason};
use pathwise_core::model::Provenance;

use super::{load_inputs, write_path};

pub fn execute(
    path_file: PathBuf,
    assets: String,
    self_assigned: bool,
    catalog: Option<PathBuf>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let asset_ids: Vec<String> = assets
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    anyhow::ensure!(!asset_ids.is_empty(), "--assets must name at least one asset");

    let mut inputs = load_inputs(&path_file, catalog, config_path.as_deref())?;

    let provenance = if self_assigned {
        Provenance::SelfAssigned
    } else {
        Provenance::Admin
    };
    let today = chrono::Local::now().date_naive();
    let outcome = assign_assets(
        &inputs.path.items,
        &inputs.path.learner_id,
        &asset_ids,
        provenance,
        &inputs.catalog,
        today,
    );

    println!("Assigned {} item(s)", outcome.added.len());
    for (asset_id, reason) in &outcome.skipped {
        let why = match reason {
            SkipReason::AlreadyAssigned => "already assigned",
            SkipReason::UnknownAsset => "not in catalog",
        };
        println!("  skipped {asset_id}: {why}");
    }

    inputs.path.items = outcome.path;
    let written = write_path(&inputs.path, &path_file, output.as_deref())?;
    eprintln!("Path written to: {}", written.display());
    Ok(())
}
