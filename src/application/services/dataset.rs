//! Dataset service
//!
//! Resolves which MASVS dataset file to use and parses it into a [`Catalog`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::{bundled_data_path, Settings, DATA_ENV_VAR, DATA_FILENAME};
use crate::domain::{Catalog, CatalogMetadata, Control};
use crate::infrastructure::traits::FileSystem;
use crate::util::path::expand_user;

const MISSING_CONTROLS: &str = "Invalid MASVS JSON: missing 'controls' list.";

/// Candidate dataset locations, in priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSources {
    /// `--data` argument
    pub explicit: Option<PathBuf>,
    /// `MASVS_JSON` value
    pub env: Option<PathBuf>,
    /// Location next to the installed binary
    pub bundled: Option<PathBuf>,
}

/// Service for locating and loading the control catalog.
pub struct DatasetService {
    fs: Arc<dyn FileSystem>,
}

impl DatasetService {
    /// Create a new dataset service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Collect candidate locations from the CLI argument, settings and the binary location.
    pub fn sources(&self, explicit: Option<&Path>, settings: &Settings) -> DataSources {
        let bundled = self
            .fs
            .current_exe()
            .ok()
            .and_then(|exe| bundled_data_path(&exe));
        DataSources {
            explicit: explicit.map(Path::to_path_buf),
            env: settings.data_path.clone(),
            bundled,
        }
    }

    /// Pick the dataset path; the first configured source wins and must exist.
    ///
    /// An explicit or environment path that does not name a file is an error,
    /// even if a lower-priority source would resolve.
    #[instrument(skip(self))]
    pub fn resolve(&self, sources: &DataSources) -> ApplicationResult<PathBuf> {
        if let Some(explicit) = &sources.explicit {
            let path = expand_user(explicit);
            if !self.fs.is_file(&path) {
                return Err(ApplicationError::FileNotFound(format!(
                    "--data file does not exist: {}",
                    path.display()
                )));
            }
            debug!("resolve: using --data {}", path.display());
            return Ok(path);
        }

        if let Some(env) = &sources.env {
            let path = expand_user(env);
            if !self.fs.is_file(&path) {
                return Err(ApplicationError::FileNotFound(format!(
                    "{} file does not exist: {}",
                    DATA_ENV_VAR,
                    path.display()
                )));
            }
            debug!("resolve: using {} {}", DATA_ENV_VAR, path.display());
            return Ok(path);
        }

        if let Some(bundled) = &sources.bundled {
            if self.fs.is_file(bundled) {
                debug!("resolve: using bundled {}", bundled.display());
                return Ok(bundled.clone());
            }
            debug!("resolve: no bundled dataset at {}", bundled.display());
        }

        Err(ApplicationError::FileNotFound(format!(
            "Unable to find MASVS dataset. Pass --data <path>, set {}, or bundle {}.",
            DATA_ENV_VAR, DATA_FILENAME
        )))
    }

    /// Read and parse the dataset at `path`.
    #[instrument(skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<Catalog> {
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read dataset", path)?;
        let catalog = parse_catalog(&content, path)?;
        debug!("load: {} controls", catalog.controls.len());
        Ok(catalog)
    }
}

/// Parse dataset text into a catalog.
///
/// `controls` must be a list of objects. `metadata` degrades to empty when
/// absent or not an object.
pub fn parse_catalog(content: &str, path: &Path) -> ApplicationResult<Catalog> {
    let payload: Value = serde_json::from_str(content).map_err(|source| ApplicationError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let items = match payload.get("controls") {
        Some(Value::Array(items)) => items,
        _ => return Err(ApplicationError::Schema(MISSING_CONTROLS.to_string())),
    };

    let controls = items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            if !item.is_object() {
                return Err(ApplicationError::Schema(format!(
                    "Invalid MASVS JSON: control at index {} is not an object.",
                    idx
                )));
            }
            Control::deserialize(item).map_err(|e| {
                ApplicationError::Schema(format!(
                    "Invalid MASVS JSON: control at index {}: {}",
                    idx, e
                ))
            })
        })
        .collect::<ApplicationResult<Vec<_>>>()?;

    let metadata = payload
        .get("metadata")
        .and_then(Value::as_object)
        .map(CatalogMetadata::from_map)
        .unwrap_or_default();

    Ok(Catalog { controls, metadata })
}
