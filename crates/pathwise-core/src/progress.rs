//! Attempt recording on top of the engine.
//!
//! The engine always reports a completed item as `Completed`. The training
//! application layers its own bookkeeping over that: the score is stored, the
//! attempt counted, a sub-pass-mark attempt is flagged `Failed`, and the next
//! locked item opens up.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::engine::{AdaptiveEngine, Adjustment, Evaluation};
use crate::model::{PathItem, Score, Status};

/// Bookkeeping rules applied after each engine pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptPolicy {
    /// Scores below this mark the item `Failed`.
    #[serde(default = "default_pass_mark")]
    pub pass_mark: u8,
    /// Unlock the first locked item after the completed one.
    #[serde(default = "default_true")]
    pub unlock_next: bool,
}

fn default_pass_mark() -> u8 {
    70
}

fn default_true() -> bool {
    true
}

impl Default for AttemptPolicy {
    fn default() -> Self {
        Self {
            pass_mark: default_pass_mark(),
            unlock_next: true,
        }
    }
}

/// Run the engine for a quiz attempt and apply attempt bookkeeping.
///
/// Rejected evaluations are returned as-is.
#[allow(clippy::too_many_arguments)]
pub fn record_attempt(
    engine: &AdaptiveEngine,
    path: &[PathItem],
    item_id: &str,
    score: Score,
    learner_id: &str,
    catalog: &dyn Catalog,
    policy: &AttemptPolicy,
    today: NaiveDate,
) -> Evaluation {
    let mut eval = engine.evaluate_performance(path, item_id, score, learner_id, catalog);
    if eval.is_rejected() {
        return eval;
    }

    let Some(index) = eval.path.iter().position(|i| i.id == item_id) else {
        return eval;
    };

    let passed = score.value() >= policy.pass_mark;
    {
        let item = &mut eval.path[index];
        item.score = Some(score);
        item.attempts += 1;
        if passed {
            item.completed_on = Some(today);
        } else {
            item.status = Status::Failed;
        }
    }

    if let Adjustment::Remedial { item_id: remedial_id, .. } = &eval.adjustment {
        if let Some(remedial) = eval.path.iter_mut().find(|i| &i.id == remedial_id) {
            remedial.assigned_on = Some(today);
        }
    }

    if policy.unlock_next {
        if let Some(unlocked) = unlock_next(&mut eval.path, index) {
            tracing::debug!(item_id = %unlocked, "unlocked next item");
        }
    }

    tracing::info!(
        item_id,
        score = score.value(),
        passed,
        outcome = %eval.outcome,
        "recorded attempt"
    );
    eval
}

/// Set the first `Locked` item after position `after` to `Pending`.
///
/// Returns the id of the unlocked item.
pub fn unlock_next(items: &mut [PathItem], after: usize) -> Option<String> {
    let next = items
        .iter_mut()
        .skip(after + 1)
        .find(|i| i.status == Status::Locked)?;
    next.status = Status::Pending;
    Some(next.id.clone())
}
