//! TOML catalog parser.
//!
//! Loads content catalogs from TOML files and directories, and validates
//! catalogs and learner paths against each other.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::catalog::{Catalog, InMemoryCatalog};
use crate::model::{Asset, ContentKind, Difficulty};
use crate::path::LearningPath;

/// Intermediate TOML structure for parsing catalog files.
#[derive(Debug, Deserialize)]
struct TomlCatalogFile {
    catalog: TomlCatalogHeader,
    #[serde(default)]
    assets: Vec<TomlAsset>,
}

#[derive(Debug, Deserialize)]
struct TomlCatalogHeader {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct TomlAsset {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(alias = "type")]
    kind: String,
    difficulty: String,
    #[serde(default)]
    topic: String,
    #[serde(default)]
    tags: Vec<String>,
    duration_minutes: u32,
    #[serde(default)]
    learning_objectives: Vec<String>,
}

/// Parse a single TOML file into a catalog.
pub fn parse_catalog(path: &Path) -> Result<InMemoryCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;

    parse_catalog_str(&content, path)
}

/// Parse a TOML string into a catalog (useful for testing).
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<InMemoryCatalog> {
    let parsed: TomlCatalogFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let assets = parsed
        .assets
        .into_iter()
        .map(|a| {
            let kind: ContentKind = a
                .kind
                .parse()
                .map_err(|e: String| anyhow::anyhow!("asset {}: {}", a.id, e))?;
            let difficulty: Difficulty = a
                .difficulty
                .parse()
                .map_err(|e: String| anyhow::anyhow!("asset {}: {}", a.id, e))?;

            Ok(Asset {
                id: a.id,
                title: a.title,
                description: a.description,
                kind,
                difficulty,
                topic: a.topic,
                tags: a.tags,
                duration_minutes: a.duration_minutes,
                learning_objectives: a.learning_objectives,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let catalog = InMemoryCatalog::new(parsed.catalog.id, parsed.catalog.name, assets)
        .with_context(|| format!("invalid catalog: {}", source_path.display()))?;
    Ok(catalog)
}

/// Recursively load all `.toml` catalog files from a directory.
pub fn load_catalog_directory(dir: &Path) -> Result<Vec<InMemoryCatalog>> {
    let mut catalogs = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            catalogs.extend(load_catalog_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_catalog(&path) {
                Ok(catalog) => catalogs.push(catalog),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(catalogs)
}

/// Load a catalog from a file, or merge every catalog in a directory.
pub fn load_catalog(path: &Path) -> Result<InMemoryCatalog> {
    if !path.is_dir() {
        return parse_catalog(path);
    }
    let mut merged = InMemoryCatalog::default();
    for catalog in load_catalog_directory(path)? {
        let name = catalog.name.clone();
        merged
            .merge(catalog)
            .with_context(|| format!("failed to merge catalog '{name}'"))?;
    }
    Ok(merged)
}

/// A warning from catalog or path validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The asset or item ID (if applicable).
    pub subject: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a catalog for common issues.
pub fn validate_catalog(catalog: &InMemoryCatalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for asset in catalog.assets() {
        if asset.title.trim().is_empty() {
            warnings.push(ValidationWarning {
                subject: Some(asset.id.clone()),
                message: "title is empty".into(),
            });
        }
        if asset.duration_minutes == 0 {
            warnings.push(ValidationWarning {
                subject: Some(asset.id.clone()),
                message: "duration_minutes is zero".into(),
            });
        }
        if asset.tags.is_empty() {
            warnings.push(ValidationWarning {
                subject: Some(asset.id.clone()),
                message: "asset has no tags and can never be matched for remediation".into(),
            });
        }
    }

    warnings
}

/// Validate a learner path against a catalog.
pub fn validate_path(path: &LearningPath, catalog: &dyn Catalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen_ids = HashSet::new();
    let mut seen_assets = HashSet::new();
    for item in &path.items {
        if !seen_ids.insert(&item.id) {
            warnings.push(ValidationWarning {
                subject: Some(item.id.clone()),
                message: format!("duplicate item ID: {}", item.id),
            });
        }
        if !seen_assets.insert(&item.asset_id) {
            warnings.push(ValidationWarning {
                subject: Some(item.id.clone()),
                message: format!("asset {} is assigned more than once", item.asset_id),
            });
        }
        if catalog.asset(&item.asset_id).is_none() {
            warnings.push(ValidationWarning {
                subject: Some(item.id.clone()),
                message: format!("unknown asset: {}", item.asset_id),
            });
        }
        if item.learner_id != path.learner_id {
            warnings.push(ValidationWarning {
                subject: Some(item.id.clone()),
                message: format!(
                    "item belongs to learner {} but path is for {}",
                    item.learner_id, path.learner_id
                ),
            });
        }
    }

    warnings
}
