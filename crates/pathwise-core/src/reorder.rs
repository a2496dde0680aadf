//! Preference-based path reordering.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::model::{ContentKind, LearningStyle, PathItem};

/// Controls how learning styles map to content kinds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderPolicy {
    /// Map the hands-on style to sandbox content. Off by default, in which
    /// case a hands-on preference leaves the path order unchanged.
    #[serde(default)]
    pub hands_on_sandbox: bool,
}

impl ReorderPolicy {
    /// The content kind a learning style prefers, if any.
    pub fn preferred_kind(&self, style: LearningStyle) -> Option<ContentKind> {
        match style {
            LearningStyle::Visual => Some(ContentKind::Video),
            LearningStyle::Text => Some(ContentKind::Document),
            LearningStyle::HandsOn if self.hands_on_sandbox => Some(ContentKind::Sandbox),
            LearningStyle::HandsOn => None,
        }
    }
}

/// Move items whose asset kind matches `preference` ahead of the rest.
///
/// This is a stable partition: relative order inside the matching and the
/// non-matching groups is kept exactly. Items whose asset does not resolve
/// count as non-matching.
pub fn reorder_for_preference(
    path: &[PathItem],
    preference: LearningStyle,
    catalog: &dyn Catalog,
    policy: &ReorderPolicy,
) -> Vec<PathItem> {
    let mut sorted = path.to_vec();
    let Some(kind) = policy.preferred_kind(preference) else {
        return sorted;
    };

    // `sort_by_key` is stable.
    sorted.sort_by_key(|item| {
        let matches = catalog
            .asset(&item.asset_id)
            .is_some_and(|asset| asset.kind == kind);
        !matches
    });

    tracing::debug!(%preference, items = sorted.len(), "reordered path for preference");
    sorted
}
