//! Adding catalog assets to a learner's path.

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::model::{PathItem, Provenance, Status};

/// Why an asset was not added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The learner already has an item for this asset.
    AlreadyAssigned,
    /// The asset id does not resolve in the catalog.
    UnknownAsset,
}

/// Result of an assignment pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentOutcome {
    /// The path with new items appended.
    pub path: Vec<PathItem>,
    /// Ids of the newly created items.
    pub added: Vec<String>,
    /// Asset ids that were not added, with the reason.
    pub skipped: Vec<(String, SkipReason)>,
}

/// Append an item for each asset not already on the path.
///
/// Admin and engine assignments start `Pending`; a learner who picks up
/// content themselves starts it `InProgress`.
pub fn assign_assets(
    path: &[PathItem],
    learner_id: &str,
    asset_ids: &[String],
    provenance: Provenance,
    catalog: &dyn Catalog,
    today: NaiveDate,
) -> AssignmentOutcome {
    let mut updated = path.to_vec();
    let mut added = Vec::new();
    let mut skipped = Vec::new();

    let status = match provenance {
        Provenance::SelfAssigned => Status::InProgress,
        Provenance::Admin | Provenance::Engine => Status::Pending,
    };

    for asset_id in asset_ids {
        if catalog.asset(asset_id).is_none() {
            tracing::warn!(asset_id = %asset_id, "cannot assign unknown asset");
            skipped.push((asset_id.clone(), SkipReason::UnknownAsset));
            continue;
        }
        if updated.iter().any(|i| &i.asset_id == asset_id) {
            skipped.push((asset_id.clone(), SkipReason::AlreadyAssigned));
            continue;
        }

        let mut item = PathItem::new(
            format!("as-{}", Uuid::new_v4()),
            learner_id,
            asset_id.clone(),
            status,
            provenance,
        );
        item.assigned_on = Some(today);
        added.push(item.id.clone());
        updated.push(item);
    }

    tracing::info!(
        learner_id,
        added = added.len(),
        skipped = skipped.len(),
        %provenance,
        "assigned assets"
    );

    AssignmentOutcome {
        path: updated,
        added,
        skipped,
    }
}
