//! JSON fixture store standing in for the entity loader.
//!
//! A fixture file holds the related entities that may be named on the
//! creation path, plus the reference data shown by the editor:
//!
//! ```json
//! {
//!   "entities": [{"bbid": "w-1", "type": "Work", "defaultAlias": {...}}],
//!   "relationshipTypes": [{"id": 10, "label": "Contains"}]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use bbz_editor::{EntityFetcher, FetchError, ReferenceData};
use bbz_model::{EntityType, RelatedEntity};
use serde::Deserialize;
use tracing::{debug, trace};

use crate::pipeline::read_json;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FixtureFile {
    #[serde(default)]
    entities: Vec<RelatedEntity>,
    #[serde(flatten)]
    reference: ReferenceData,
}

#[derive(Debug, Clone, Default)]
pub struct FixtureStore {
    entities: BTreeMap<String, RelatedEntity>,
    reference: ReferenceData,
}

impl FixtureStore {
    /// Load a fixture file. A bbid listed twice keeps its last entry.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let file: FixtureFile = read_json(path)?;
        let store = Self::new(file.entities, file.reference);
        debug!(
            path = %path.display(),
            entities = store.len(),
            "loaded fixtures"
        );
        Ok(store)
    }

    pub fn new(entities: Vec<RelatedEntity>, reference: ReferenceData) -> Self {
        Self {
            entities: entities
                .into_iter()
                .map(|entity| (entity.bbid.clone(), entity))
                .collect(),
            reference,
        }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl EntityFetcher for FixtureStore {
    async fn fetch(
        &self,
        entity_type: EntityType,
        bbid: &str,
    ) -> Result<Option<RelatedEntity>, FetchError> {
        trace!(%entity_type, bbid, "fixture lookup");
        Ok(self.entities.get(bbid).cloned())
    }
}
