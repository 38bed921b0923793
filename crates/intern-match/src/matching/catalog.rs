use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::domain::InternshipRecord;

/// Anything able to produce the internship catalog at startup.
pub trait CatalogSource: Send + Sync {
    fn describe(&self) -> String;
    fn load(&self) -> Result<Vec<InternshipRecord>, CatalogError>;
}

/// Catalog read failures. Callers normally degrade these to an empty catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog file {path} could not be read: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog file {path} is not a JSON array of internships: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// JSON file holding an array of internship objects.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileCatalog {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<InternshipRecord>, CatalogError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| CatalogError::Unreadable {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| CatalogError::Malformed {
            path: self.path.clone(),
            source,
        })
    }
}

/// Immutable catalog snapshot shared by every request.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Arc<[InternshipRecord]>,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    pub fn new(records: Vec<InternshipRecord>) -> Self {
        Self {
            records: records.into(),
            loaded_at: Utc::now(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Load from `source`, falling back to an empty catalog when it is missing or malformed.
    pub fn load_or_empty<S>(source: &S) -> Self
    where
        S: CatalogSource + ?Sized,
    {
        match source.load() {
            Ok(records) => {
                info!(
                    source = %source.describe(),
                    internships = records.len(),
                    "internship catalog loaded"
                );
                Self::new(records)
            }
            Err(err) => {
                warn!(
                    source = %source.describe(),
                    error = %err,
                    "internship catalog unavailable; serving empty catalog"
                );
                Self::empty()
            }
        }
    }

    pub fn records(&self) -> &[InternshipRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}
