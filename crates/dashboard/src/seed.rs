//! Product seed loading.
//!
//! The dashboard ships with an embedded catalog; a JSON file with the same
//! shape can replace it at startup.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use stockboard_inventory::{InventoryViewModel, LoadOutcome, ProductRecord};

const EMBEDDED_SEED: &str = include_str!("../data/products.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed seed data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the product list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    Embedded,
    File(PathBuf),
}

impl fmt::Display for SeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedSource::Embedded => f.write_str("embedded catalog"),
            SeedSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub fn parse_records(json: &str) -> Result<Vec<ProductRecord>, SeedError> {
    Ok(serde_json::from_str(json)?)
}

pub fn embedded_records() -> Result<Vec<ProductRecord>, SeedError> {
    parse_records(EMBEDDED_SEED)
}

pub fn read_records(path: &Path) -> Result<Vec<ProductRecord>, SeedError> {
    let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&json)
}

/// Read the seed and build the view model. Invalid records are rejected, not fatal.
pub fn load(source: &SeedSource) -> Result<LoadOutcome, SeedError> {
    let records = match source {
        SeedSource::Embedded => embedded_records()?,
        SeedSource::File(path) => read_records(path)?,
    };
    tracing::debug!(%source, records = records.len(), "seed read");
    Ok(InventoryViewModel::load(records))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn embedded_catalog_loads_cleanly() {
        let outcome = load(&SeedSource::Embedded).unwrap();
        assert!(outcome.rejected.is_empty());

        let summary = outcome.view_model.summary();
        assert_eq!(summary.total_products, 12);
        assert_eq!(summary.low_stock, 3);
        assert_eq!(summary.vendors, 8);
    }

    #[test]
    fn file_seed_rejects_bad_capacity_but_keeps_the_rest() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"name": "Kept", "vendor": "V", "stock": 1, "maxStock": 10, "category": "Oils", "icon": "🌿"}},
                {{"name": "Broken", "vendor": "V", "stock": 1, "maxStock": 0, "category": "Oils", "icon": "🌿"}}
            ]"#
        )
        .unwrap();

        let outcome = load(&SeedSource::File(file.path().to_path_buf())).unwrap();
        assert_eq!(outcome.view_model.total_products(), 1);
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].name, "Broken");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = load(&SeedSource::File(path.clone())).unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_records("[{\"name\": 1}]").unwrap_err();
        assert!(matches!(err, SeedError::Parse(_)));
    }
}
