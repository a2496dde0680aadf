//! Adaptive sequencing engine.
//!
//! Given a learner's path and the quiz score on a just-completed item, the
//! engine marks the item completed and then may rewrite the rest of the path:
//! a poor score splices a beginner-level remedial item in right after it, an
//! excellent score drops the next intermediate-level item. The input path is
//! never mutated; a new path is returned along with a display message.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::error::EngineError;
use crate::model::{Asset, Difficulty, Outcome, PathItem, Provenance, Score, Status};

/// Message returned when the completed item is not in the path.
pub const MSG_ITEM_NOT_FOUND: &str = "Error updating path";
/// Message returned when the completed item's asset is not in the catalog.
pub const MSG_ASSET_NOT_FOUND: &str = "Asset not found";
/// Message returned when neither branch changes the path.
pub const MSG_ADVANCE: &str = "Module completed. Moving to next step in your path.";

/// Score thresholds and difficulty targets for the two rule branches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Scores strictly below this trigger remediation.
    #[serde(default = "default_remedial_below")]
    pub remedial_below: u8,
    /// Scores strictly above this trigger a fast-track skip.
    #[serde(default = "default_fast_track_above")]
    pub fast_track_above: u8,
    /// Difficulty a remedial asset must have.
    #[serde(default = "default_remedial_difficulty")]
    pub remedial_difficulty: Difficulty,
    /// Difficulty of the next item that a fast-track may skip.
    #[serde(default = "default_skip_difficulty")]
    pub skip_difficulty: Difficulty,
}

fn default_remedial_below() -> u8 {
    60
}
fn default_fast_track_above() -> u8 {
    90
}
fn default_remedial_difficulty() -> Difficulty {
    Difficulty::Beginner
}
fn default_skip_difficulty() -> Difficulty {
    Difficulty::Intermediate
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            remedial_below: default_remedial_below(),
            fast_track_above: default_fast_track_above(),
            remedial_difficulty: default_remedial_difficulty(),
            skip_difficulty: default_skip_difficulty(),
        }
    }
}

impl EngineConfig {
    /// Reject threshold pairs under which one score could satisfy both
    /// branches.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.remedial_below > self.fast_track_above {
            return Err(EngineError::InvalidThresholds {
                remedial_below: self.remedial_below,
                fast_track_above: self.fast_track_above,
            });
        }
        Ok(())
    }
}

/// What an evaluation did to the path, beyond marking the item completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Adjustment {
    /// A remedial item was inserted right after the completed one.
    Remedial { item_id: String, asset_id: String },
    /// The next item was removed from the path.
    Skipped { item_id: String, asset_id: String },
    /// Nothing beyond the completion mark.
    Advanced,
    /// The evaluation could not be applied; the path is returned unchanged.
    Rejected {
        #[serde(serialize_with = "serialize_error")]
        error: EngineError,
    },
}

fn serialize_error<S: serde::Serializer>(err: &EngineError, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&err.to_string())
}

/// The result of one engine pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// The updated path.
    pub path: Vec<PathItem>,
    /// Human-readable narrative for the learner.
    pub message: String,
    pub outcome: Outcome,
    pub adjustment: Adjustment,
}

impl Evaluation {
    fn rejected(path: &[PathItem], message: &str, error: EngineError) -> Self {
        Self {
            path: path.to_vec(),
            message: message.to_string(),
            outcome: Outcome::Neutral,
            adjustment: Adjustment::Rejected { error },
        }
    }

    /// The error behind a no-op evaluation, if any.
    pub fn error(&self) -> Option<&EngineError> {
        match &self.adjustment {
            Adjustment::Rejected { error } => Some(error),
            _ => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.error().is_some()
    }
}

/// The adaptive sequencing engine.
#[derive(Debug, Clone, Default)]
pub struct AdaptiveEngine {
    config: EngineConfig,
}

impl AdaptiveEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Evaluate a completed item and return the rewritten path.
    ///
    /// The completed item is always reported `Completed`; a poor score is
    /// signalled only through the remedial insertion and the message. Missing
    /// items or assets yield the input path unchanged with a neutral outcome
    /// and an [`Adjustment::Rejected`].
    pub fn evaluate_performance(
        &self,
        path: &[PathItem],
        completed_item_id: &str,
        score: Score,
        learner_id: &str,
        catalog: &dyn Catalog,
    ) -> Evaluation {
        let Some(index) = path.iter().position(|item| item.id == completed_item_id) else {
            tracing::warn!(item_id = completed_item_id, "completed item not in path");
            return Evaluation::rejected(
                path,
                MSG_ITEM_NOT_FOUND,
                EngineError::AssignmentNotFound(completed_item_id.to_string()),
            );
        };

        let asset_id = &path[index].asset_id;
        let Some(completed_asset) = catalog.asset(asset_id) else {
            tracing::warn!(item_id = completed_item_id, asset_id = %asset_id, "asset not in catalog");
            return Evaluation::rejected(
                path,
                MSG_ASSET_NOT_FOUND,
                EngineError::AssetNotFound(asset_id.clone()),
            );
        };

        let mut updated = path.to_vec();
        updated[index].status = Status::Completed;

        let score = score.value();

        if score < self.config.remedial_below {
            match self.find_remedial(path, completed_asset, catalog) {
                Some(remedial) => {
                    let item = PathItem::new(
                        format!("remedial-{}", Uuid::new_v4()),
                        learner_id,
                        remedial.id.clone(),
                        Status::Pending,
                        Provenance::Engine,
                    );
                    tracing::info!(
                        item_id = completed_item_id,
                        score,
                        remedial_asset = %remedial.id,
                        "inserting remedial item"
                    );
                    let adjustment = Adjustment::Remedial {
                        item_id: item.id.clone(),
                        asset_id: remedial.id.clone(),
                    };
                    updated.insert(index + 1, item);
                    return Evaluation {
                        path: updated,
                        message: format!(
                            "Adaptive Engine: We noticed you struggled with {}. We've added \"{}\" to reinforce the concepts.",
                            completed_asset.title, remedial.title
                        ),
                        outcome: Outcome::Negative,
                        adjustment,
                    };
                }
                None => {
                    tracing::info!(
                        item_id = completed_item_id,
                        score,
                        "no remedial candidate in catalog"
                    );
                }
            }
        }

        if score > self.config.fast_track_above {
            let next = updated
                .get(index + 1)
                .and_then(|item| catalog.asset(&item.asset_id));
            if let Some(next_asset) = next {
                if next_asset.difficulty == self.config.skip_difficulty {
                    let skipped = updated.remove(index + 1);
                    updated[index].fast_tracked = true;
                    tracing::info!(
                        item_id = completed_item_id,
                        score,
                        skipped_item = %skipped.id,
                        "fast-tracking past next item"
                    );
                    return Evaluation {
                        path: updated,
                        message: format!(
                            "Adaptive Engine: Outstanding performance! You've demonstrated mastery. We're skipping \"{}\" to accelerate your growth.",
                            next_asset.title
                        ),
                        outcome: Outcome::Positive,
                        adjustment: Adjustment::Skipped {
                            item_id: skipped.id,
                            asset_id: skipped.asset_id,
                        },
                    };
                }
            }
        }

        Evaluation {
            path: updated,
            message: MSG_ADVANCE.to_string(),
            outcome: Outcome::Neutral,
            adjustment: Adjustment::Advanced,
        }
    }

    /// First catalog asset at the remedial difficulty that shares a tag with
    /// `completed` and is not already assigned anywhere in `path`.
    fn find_remedial<'c>(
        &self,
        path: &[PathItem],
        completed: &Asset,
        catalog: &'c dyn Catalog,
    ) -> Option<&'c Asset> {
        catalog.assets().iter().find(|candidate| {
            candidate.difficulty == self.config.remedial_difficulty
                && candidate.id != completed.id
                && candidate.shares_tag(completed)
                && !path.iter().any(|item| item.asset_id == candidate.id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::model::ContentKind;

    fn asset(id: &str, difficulty: Difficulty, tags: &[&str]) -> Asset {
        Asset {
            id: id.into(),
            title: format!("Title {id}"),
            description: String::new(),
            kind: ContentKind::Video,
            difficulty,
            topic: "React".into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            duration_minutes: 10,
            learning_objectives: vec![],
        }
    }

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::from_assets(vec![
            asset("html", Difficulty::Beginner, &["react", "frontend"]),
            asset("react", Difficulty::Intermediate, &["react", "ui"]),
            asset("react-adv", Difficulty::Advanced, &["react", "patterns"]),
            asset("docker", Difficulty::Intermediate, &["docker"]),
            asset("aws", Difficulty::Beginner, &["aws", "cloud"]),
        ])
        .unwrap()
    }

    fn item(id: &str, asset_id: &str) -> PathItem {
        PathItem::new(id, "u1", asset_id, Status::Pending, Provenance::Admin)
    }

    fn score(v: u32) -> Score {
        Score::new(v).unwrap()
    }

    #[test]
    fn low_score_inserts_remedial_after_completed_item() {
        let path = vec![item("p1", "react"), item("p2", "docker")];
        let eval = AdaptiveEngine::default().evaluate_performance(
            &path,
            "p1",
            score(40),
            "u1",
            &catalog(),
        );

        assert_eq!(eval.outcome, Outcome::Negative);
        assert_eq!(eval.path.len(), 3);
        assert_eq!(eval.path[0].status, Status::Completed);
        let remedial = &eval.path[1];
        assert_eq!(remedial.asset_id, "html");
        assert_eq!(remedial.status, Status::Pending);
        assert_eq!(remedial.provenance, Provenance::Engine);
        assert_eq!(remedial.learner_id, "u1");
        assert!(remedial.id.starts_with("remedial-"));
        assert_eq!(eval.path[2].id, "p2");
        assert!(eval.message.contains("Title react"));
        assert!(eval.message.contains("\"Title html\""));
        assert!(matches!(eval.adjustment, Adjustment::Remedial { ref asset_id, .. } if asset_id == "html"));
        // Input untouched.
        assert_eq!(path[0].status, Status::Pending);
    }

    #[test]
    fn remedial_skips_assets_already_on_path() {
        let path = vec![item("p1", "react"), item("p2", "html")];
        let eval = AdaptiveEngine::default().evaluate_performance(
            &path,
            "p1",
            score(10),
            "u1",
            &catalog(),
        );
        assert_eq!(eval.outcome, Outcome::Neutral);
        assert_eq!(eval.adjustment, Adjustment::Advanced);
        assert_eq!(eval.path.len(), 2);
        assert_eq!(eval.message, MSG_ADVANCE);
    }

    #[test]
    fn remedial_never_targets_completed_asset() {
        // "html" is itself beginner and tagged; it must not remediate itself.
        let path = vec![item("p1", "html")];
        let eval = AdaptiveEngine::default().evaluate_performance(
            &path,
            "p1",
            score(0),
            "u1",
            &catalog(),
        );
        assert_eq!(eval.path.len(), 1);
        assert_eq!(eval.outcome, Outcome::Neutral);
    }

    #[test]
    fn threshold_boundaries_are_strict() {
        let engine = AdaptiveEngine::default();
        let path = vec![item("p1", "html"), item("p2", "react")];

        let at_sixty = engine.evaluate_performance(&path, "p1", score(60), "u1", &catalog());
        assert_eq!(at_sixty.adjustment, Adjustment::Advanced);

        let at_ninety = engine.evaluate_performance(&path, "p1", score(90), "u1", &catalog());
        assert_eq!(at_ninety.adjustment, Adjustment::Advanced);
        assert_eq!(at_ninety.path.len(), 2);

        let above = engine.evaluate_performance(&path, "p1", score(91), "u1", &catalog());
        assert_eq!(above.outcome, Outcome::Positive);
    }

    #[test]
    fn high_score_skips_next_intermediate_item() {
        let path = vec![
            item("p1", "html"),
            item("p2", "react"),
            item("p3", "docker"),
        ];
        let eval = AdaptiveEngine::default().evaluate_performance(
            &path,
            "p1",
            score(95),
            "u1",
            &catalog(),
        );
        assert_eq!(eval.outcome, Outcome::Positive);
        let ids: Vec<&str> = eval.path.iter().map(|i| i.id.as_str()).collect();
        // Only one item ahead is ever skipped.
        assert_eq!(ids, vec!["p1", "p3"]);
        assert!(eval.path[0].fast_tracked);
        assert!(eval.message.contains("\"Title react\""));
        assert_eq!(
            eval.adjustment,
            Adjustment::Skipped {
                item_id: "p2".into(),
                asset_id: "react".into()
            }
        );
    }

    #[test]
    fn high_score_keeps_non_intermediate_next_item() {
        let path = vec![item("p1", "html"), item("p2", "react-adv")];
        let eval = AdaptiveEngine::default().evaluate_performance(
            &path,
            "p1",
            score(100),
            "u1",
            &catalog(),
        );
        assert_eq!(eval.outcome, Outcome::Neutral);
        assert_eq!(eval.path.len(), 2);
        assert!(!eval.path[0].fast_tracked);
    }

    #[test]
    fn high_score_on_last_item_is_neutral() {
        let path = vec![item("p1", "react")];
        let eval = AdaptiveEngine::default().evaluate_performance(
            &path,
            "p1",
            score(99),
            "u1",
            &catalog(),
        );
        assert_eq!(eval.outcome, Outcome::Neutral);
        assert_eq!(eval.path[0].status, Status::Completed);
    }

    #[test]
    fn unknown_item_is_rejected_unchanged() {
        let path = vec![item("p1", "react")];
        let eval = AdaptiveEngine::default().evaluate_performance(
            &path,
            "nope",
            score(20),
            "u1",
            &catalog(),
        );
        assert_eq!(eval.path, path);
        assert_eq!(eval.outcome, Outcome::Neutral);
        assert_eq!(eval.message, MSG_ITEM_NOT_FOUND);
        assert_eq!(
            eval.error(),
            Some(&EngineError::AssignmentNotFound("nope".into()))
        );
    }

    #[test]
    fn unknown_asset_is_rejected_unchanged() {
        let path = vec![item("p1", "ghost")];
        let eval = AdaptiveEngine::default().evaluate_performance(
            &path,
            "p1",
            score(20),
            "u1",
            &catalog(),
        );
        assert_eq!(eval.path, path);
        assert_eq!(eval.path[0].status, Status::Pending);
        assert_eq!(eval.message, MSG_ASSET_NOT_FOUND);
        assert!(eval.error().is_some_and(|e| e.is_data_error()));
    }

    #[test]
    fn custom_thresholds() {
        let engine = AdaptiveEngine::new(EngineConfig {
            remedial_below: 75,
            ..EngineConfig::default()
        });
        let path = vec![item("p1", "react")];
        let eval = engine.evaluate_performance(&path, "p1", score(70), "u1", &catalog());
        assert_eq!(eval.outcome, Outcome::Negative);
    }

    #[test]
    fn config_validation() {
        assert!(EngineConfig::default().validate().is_ok());
        let bad = EngineConfig {
            remedial_below: 95,
            fast_track_above: 90,
            ..EngineConfig::default()
        };
        assert!(matches!(
            bad.validate(),
            Err(EngineError::InvalidThresholds { .. })
        ));
    }

    #[test]
    fn config_from_partial_toml() {
        let config: EngineConfig = toml::from_str("remedial_below = 50").unwrap();
        assert_eq!(config.remedial_below, 50);
        assert_eq!(config.fast_track_above, 90);
        assert_eq!(config.skip_difficulty, Difficulty::Intermediate);
    }
}
