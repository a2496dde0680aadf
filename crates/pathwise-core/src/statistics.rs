//! Progress statistics for a learner's path.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::model::{PathItem, Status};

/// Aggregate progress over one path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathSummary {
    pub total: usize,
    pub locked: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub failed: usize,
    /// Items the engine inserted as remediation.
    pub remedial: usize,
    /// Items whose learner skipped the following item.
    pub fast_tracked: usize,
    /// Completed items over total items (0.0 for an empty path).
    pub completion_rate: f64,
    /// Mean score over items that have one.
    pub average_score: Option<f64>,
    /// Sum of catalog durations over completed items.
    pub minutes_learned: u64,
}

/// Summarize progress on a path.
pub fn summarize(items: &[PathItem], catalog: &dyn Catalog) -> PathSummary {
    let mut summary = PathSummary {
        total: items.len(),
        ..PathSummary::default()
    };

    let mut score_sum = 0u64;
    let mut scored = 0u64;

    for item in items {
        match item.status {
            Status::Locked => summary.locked += 1,
            Status::Pending => summary.pending += 1,
            Status::InProgress => summary.in_progress += 1,
            Status::Completed => {
                summary.completed += 1;
                if let Some(asset) = catalog.asset(&item.asset_id) {
                    summary.minutes_learned += asset.duration_minutes as u64;
                }
            }
            Status::Failed => summary.failed += 1,
        }
        if item.is_remedial() {
            summary.remedial += 1;
        }
        if item.fast_tracked {
            summary.fast_tracked += 1;
        }
        if let Some(score) = item.score {
            score_sum += score.value() as u64;
            scored += 1;
        }
    }

    if summary.total > 0 {
        summary.completion_rate = summary.completed as f64 / summary.total as f64;
    }
    if scored > 0 {
        summary.average_score = Some(score_sum as f64 / scored as f64);
    }

    summary
}
