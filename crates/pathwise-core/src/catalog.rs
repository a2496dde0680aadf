//! Content catalog lookup.
//!
//! The engine never reaches for shared global content; every evaluation is
//! handed a [`Catalog`] explicitly.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::model::Asset;

/// Read-only access to catalogued assets.
pub trait Catalog {
    /// Resolve an asset by id.
    fn asset(&self, id: &str) -> Option<&Asset>;

    /// All assets, in catalog order. Remedial search walks this order and
    /// takes the first match.
    fn assets(&self) -> &[Asset];
}

/// A catalog held in memory, indexed by asset id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "CatalogRepr", into = "CatalogRepr")]
pub struct InMemoryCatalog {
    pub id: String,
    pub name: String,
    assets: Vec<Asset>,
    index: HashMap<String, usize>,
}

#[derive(Serialize, Deserialize)]
struct CatalogRepr {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    assets: Vec<Asset>,
}

impl TryFrom<CatalogRepr> for InMemoryCatalog {
    type Error = EngineError;

    fn try_from(repr: CatalogRepr) -> Result<Self, Self::Error> {
        Self::new(repr.id, repr.name, repr.assets)
    }
}

impl From<InMemoryCatalog> for CatalogRepr {
    fn from(catalog: InMemoryCatalog) -> Self {
        Self {
            id: catalog.id,
            name: catalog.name,
            assets: catalog.assets,
        }
    }
}

// Last occurrence wins on duplicates; `InMemoryCatalog::new` rejects them.
impl InMemoryCatalog {
    /// Build a catalog, rejecting duplicate asset ids.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        assets: Vec<Asset>,
    ) -> Result<Self, EngineError> {
        let mut index = HashMap::with_capacity(assets.len());
        for (i, asset) in assets.iter().enumerate() {
            if index.insert(asset.id.clone(), i).is_some() {
                return Err(EngineError::DuplicateAsset(asset.id.clone()));
            }
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            assets,
            index,
        })
    }

    /// Build an unnamed catalog from a list of assets.
    pub fn from_assets(assets: Vec<Asset>) -> Result<Self, EngineError> {
        Self::new(String::new(), String::new(), assets)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Append another catalog's assets, rejecting ids already present.
    pub fn merge(&mut self, other: InMemoryCatalog) -> Result<(), EngineError> {
        for asset in other.assets {
            if self.index.contains_key(&asset.id) {
                return Err(EngineError::DuplicateAsset(asset.id));
            }
            self.index.insert(asset.id.clone(), self.assets.len());
            self.assets.push(asset);
        }
        Ok(())
    }
}

impl Catalog for InMemoryCatalog {
    fn asset(&self, id: &str) -> Option<&Asset> {
        self.index.get(id).map(|&i| &self.assets[i])
    }

    fn assets(&self) -> &[Asset] {
        &self.assets
    }
}
