use crate::core::catalog::Catalog;
use crate::domain::model::{Document, DocumentRecord};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Documents to load into the catalog, read from a TOML file:
///
/// ```toml
/// [[documents]]
/// type = "Book"
/// title = "1984"
/// year = 1949
/// author = "George Orwell"
///
/// [[documents]]
/// type = "Magazine"
/// title = "Science & Vie"
/// year = 2023
/// issue_number = 456
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub documents: Vec<DocumentRecord>,
}

impl SeedConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn into_catalog(self) -> Catalog {
        self.documents.into_iter().map(Document::from).collect()
    }
}
