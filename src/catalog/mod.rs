//! Device catalog source.
//!
//! The catalog is a read-only JSON array of devices loaded once at startup,
//! either from a configured file or from the bundled sample.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use device_types::Device;
use thiserror::Error;
use tracing::{debug, info};

/// Sample catalog compiled into the binary.
const BUNDLED_CATALOG: &str = include_str!("../../data/devices.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate device id: {0}")]
    DuplicateId(String),
}

/// Immutable device list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    devices: Vec<Device>,
}

impl Catalog {
    pub fn new(devices: Vec<Device>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        if let Some(dup) = devices.iter().find(|d| !ids.insert(d.id.as_str())) {
            return Err(CatalogError::DuplicateId(dup.id.clone()));
        }
        Ok(Self { devices })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::new(serde_json::from_str(json)?)
    }

    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub async fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CatalogError::NotFound(path.to_path_buf())
            } else {
                CatalogError::Read {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        debug!(path = %path.display(), bytes = json.len(), "Read catalog file");
        Self::from_json(&json)
    }

    /// Load from `path` when configured, otherwise the bundled sample.
    pub async fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = match path {
            Some(path) => Self::from_file(path).await?,
            None => Self::bundled()?,
        };
        info!(
            devices = catalog.len(),
            source = %path.map(|p| p.display().to_string()).unwrap_or_else(|| "bundled".into()),
            "Device catalog loaded"
        );
        Ok(catalog)
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.devices().iter().any(|d| d.line.id == "protect"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let devices = vec![
            Device::new("x", "Camera", "L1", "Protect"),
            Device::new("x", "Switch", "L2", "Network"),
        ];
        match Catalog::new(devices) {
            Err(CatalogError::DuplicateId(id)) => assert_eq!(id, "x"),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"d1","product":{{"name":"Camera Pro"}},"line":{{"id":"L1","name":"Protect"}}}}]"#
        )
        .unwrap();

        let catalog = Catalog::load(Some(file.path())).await.unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.devices()[0].product.name, "Camera Pro");
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = Catalog::load(Some(&path)).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(p) if p == path));
    }

    #[tokio::test]
    async fn test_load_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = Catalog::load(Some(file.path())).await.unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[tokio::test]
    async fn test_load_defaults_to_bundled() {
        let catalog = Catalog::load(None).await.unwrap();
        assert_eq!(catalog.len(), Catalog::bundled().unwrap().len());
    }
}
