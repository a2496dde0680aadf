//! A learner's ordered path with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{LearningStyle, PathItem};

/// One learner's ordered queue of path items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    /// The learner the path belongs to.
    pub learner_id: String,
    /// Stated content preference, used by reordering.
    pub preference: LearningStyle,
    #[serde(default)]
    pub items: Vec<PathItem>,
}

impl LearningPath {
    pub fn new(learner_id: impl Into<String>, preference: LearningStyle) -> Self {
        Self {
            learner_id: learner_id.into(),
            preference,
            items: Vec::new(),
        }
    }

    /// Save the path as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize path")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write path to {}", path.display()))?;
        Ok(())
    }

    /// Load a path from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read path from {}", path.display()))?;
        let parsed: LearningPath = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse path JSON: {}", path.display()))?;
        Ok(parsed)
    }
}
