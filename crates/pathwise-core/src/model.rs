//! Core data model types for pathwise.
//!
//! Assets are immutable catalog reference data; path items track one
//! learner's relationship to one asset and are what the engine rewrites.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// How hard an asset is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "beginner"),
            Difficulty::Intermediate => write!(f, "intermediate"),
            Difficulty::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// The medium an asset is delivered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Video,
    #[serde(rename = "doc", alias = "document")]
    Document,
    Sandbox,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Video => write!(f, "video"),
            ContentKind::Document => write!(f, "doc"),
            ContentKind::Sandbox => write!(f, "sandbox"),
        }
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "video" => Ok(ContentKind::Video),
            "doc" | "document" => Ok(ContentKind::Document),
            "sandbox" => Ok(ContentKind::Sandbox),
            other => Err(format!("unknown content kind: {other}")),
        }
    }
}

/// A learner's stated content preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LearningStyle {
    #[serde(rename = "visual")]
    Visual,
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "hands-on", alias = "hands_on", alias = "handson")]
    HandsOn,
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LearningStyle::Visual => write!(f, "visual"),
            LearningStyle::Text => write!(f, "text"),
            LearningStyle::HandsOn => write!(f, "hands-on"),
        }
    }
}

impl FromStr for LearningStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "visual" => Ok(LearningStyle::Visual),
            "text" => Ok(LearningStyle::Text),
            "hands-on" | "hands_on" | "handson" => Ok(LearningStyle::HandsOn),
            other => Err(format!("unknown learning style: {other}")),
        }
    }
}

/// Lifecycle state of a path item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Locked,
    Pending,
    InProgress,
    Completed,
    Failed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Locked => write!(f, "locked"),
            Status::Pending => write!(f, "pending"),
            Status::InProgress => write!(f, "in-progress"),
            Status::Completed => write!(f, "completed"),
            Status::Failed => write!(f, "failed"),
        }
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "locked" => Ok(Status::Locked),
            "pending" => Ok(Status::Pending),
            "in-progress" | "in_progress" | "inprogress" => Ok(Status::InProgress),
            "completed" => Ok(Status::Completed),
            "failed" => Ok(Status::Failed),
            other => Err(format!("unknown status: {other}")),
        }
    }
}

/// Who put an item on a learner's path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provenance {
    #[default]
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "self")]
    SelfAssigned,
    #[serde(rename = "engine")]
    Engine,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Admin => write!(f, "admin"),
            Provenance::SelfAssigned => write!(f, "self"),
            Provenance::Engine => write!(f, "engine"),
        }
    }
}

/// Classification of an engine evaluation, for display tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Neutral,
    Positive,
    Negative,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Neutral => write!(f, "neutral"),
            Outcome::Positive => write!(f, "positive"),
            Outcome::Negative => write!(f, "negative"),
        }
    }
}

/// A quiz score, guaranteed to lie in 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Score(u8);

impl Score {
    pub const MAX: u32 = 100;

    pub fn new(value: u32) -> Result<Self, EngineError> {
        if value > Self::MAX {
            return Err(EngineError::ScoreOutOfRange(value));
        }
        Ok(Score(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u32> for Score {
    type Error = EngineError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Score::new(value)
    }
}

impl From<Score> for u32 {
    fn from(score: Score) -> Self {
        score.0 as u32
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalogued unit of learning content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Delivery medium.
    pub kind: ContentKind,
    pub difficulty: Difficulty,
    /// Free-text category (e.g. "Cloud").
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub duration_minutes: u32,
    #[serde(default)]
    pub learning_objectives: Vec<String>,
}

impl Asset {
    /// Returns `true` if the two assets have at least one tag in common.
    pub fn shares_tag(&self, other: &Asset) -> bool {
        self.tags.iter().any(|t| other.tags.contains(t))
    }
}

/// One learner's assignment to one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    /// Unique item identifier.
    pub id: String,
    /// Learner this item belongs to.
    pub learner_id: String,
    /// Catalog asset being studied.
    pub asset_id: String,
    pub status: Status,
    /// Most recent quiz score, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
    #[serde(default)]
    pub provenance: Provenance,
    /// Set when the learner skipped the following item on an excellent score.
    #[serde(default)]
    pub fast_tracked: bool,
    #[serde(default)]
    pub attempts: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_on: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_on: Option<NaiveDate>,
}

impl PathItem {
    /// A fresh item with no attempts and no score.
    pub fn new(
        id: impl Into<String>,
        learner_id: impl Into<String>,
        asset_id: impl Into<String>,
        status: Status,
        provenance: Provenance,
    ) -> Self {
        Self {
            id: id.into(),
            learner_id: learner_id.into(),
            asset_id: asset_id.into(),
            status,
            score: None,
            provenance,
            fast_tracked: false,
            attempts: 0,
            assigned_on: None,
            completed_on: None,
        }
    }

    /// Returns `true` if the engine created this item as remediation.
    pub fn is_remedial(&self) -> bool {
        self.provenance == Provenance::Engine
    }
}
