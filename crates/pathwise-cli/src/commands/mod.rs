pub mod assign;
pub mod evaluate;
pub mod init;
pub mod record;
pub mod reorder;
pub mod summary;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use pathwise_core::catalog::InMemoryCatalog;
use pathwise_core::config::{load_config_from, PathwiseConfig};
use pathwise_core::parser;
use pathwise_core::path::LearningPath;

/// Config, catalog, and learner path loaded for a command.
pub struct Inputs {
    pub config: PathwiseConfig,
    pub catalog: InMemoryCatalog,
    pub path: LearningPath,
}

/// Load the config, resolve the catalog (flag first, then config), and read
/// the learner path.
pub fn load_inputs(
    path: &Path,
    catalog: Option<PathBuf>,
    config_path: Option<&Path>,
) -> Result<Inputs> {
    let config = load_config_from(config_path)?;

    let catalog_path = catalog.or_else(|| config.catalog.clone()).context(
        "no catalog given: pass --catalog or set `catalog` in pathwise.toml",
    )?;
    let catalog = parser::load_catalog(&catalog_path)?;
    tracing::debug!(
        catalog = %catalog_path.display(),
        assets = catalog.len(),
        "loaded catalog"
    );
    let path = LearningPath::load_json(path)?;

    Ok(Inputs {
        config,
        catalog,
        path,
    })
}

/// Write the path to `output`, or back over the input file.
pub fn write_path(path: &LearningPath, input: &Path, output: Option<&Path>) -> Result<PathBuf> {
    let target = output.unwrap_or(input).to_path_buf();
    path.save_json(&target)?;
    Ok(target)
}
