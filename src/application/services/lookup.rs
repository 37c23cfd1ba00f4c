//! Lookup service
//!
//! Runs the load-then-filter pipeline for one request.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::application::services::dataset::DatasetService;
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::{filter_controls, CatalogMetadata, Control, Query};

/// Output of one lookup: the matching controls plus what the presenter needs.
#[derive(Debug, Clone)]
pub struct LookupResult {
    /// Dataset file the catalog came from
    pub data_path: PathBuf,
    pub metadata: CatalogMetadata,
    /// Matching controls sorted by `control_id` (not truncated)
    pub matches: Vec<Control>,
    /// Number of controls in the catalog
    pub total: usize,
}

/// Service combining dataset loading and filtering.
pub struct LookupService {
    dataset: DatasetService,
}

impl LookupService {
    /// Create a new lookup service.
    pub fn new(dataset: DatasetService) -> Self {
        Self { dataset }
    }

    /// Resolve the dataset, load it, and filter it with `query`.
    #[instrument(skip(self, settings))]
    pub fn lookup(
        &self,
        data: Option<&Path>,
        settings: &Settings,
        query: &Query,
    ) -> ApplicationResult<LookupResult> {
        let sources = self.dataset.sources(data, settings);
        let data_path = self.dataset.resolve(&sources)?;
        let catalog = self.dataset.load(&data_path)?;

        let matches: Vec<Control> = filter_controls(&catalog.controls, query)
            .into_iter()
            .cloned()
            .collect();
        info!(
            "lookup: {} of {} controls matched",
            matches.len(),
            catalog.controls.len()
        );
        debug!("lookup: query={:?}", query);

        Ok(LookupResult {
            data_path,
            total: catalog.controls.len(),
            metadata: catalog.metadata,
            matches,
        })
    }
}
