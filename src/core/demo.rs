use crate::config::seed::SeedConfig;
use crate::core::catalog::Catalog;
use crate::domain::model::Document;
use crate::domain::ports::{Clock, ConfigProvider};
use crate::utils::error::Result;
use std::io::Write;
use std::path::PathBuf;

/// The catalog used when no seed file is configured.
pub fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add(Document::book("1984", 1949, "George Orwell"));
    catalog.add(Document::magazine("Science & Vie", 2023, 456));
    catalog.add(Document::book("Le Petit Prince", 1943, "Antoine de Saint-Exupéry"));
    catalog
}

/// Populates a catalog, lists it, searches it and exports it.
pub struct CatalogDemo<C: ConfigProvider, K: Clock> {
    config: C,
    clock: K,
}

impl<C: ConfigProvider, K: Clock> CatalogDemo<C, K> {
    pub fn new(config: C, clock: K) -> Self {
        Self { config, clock }
    }

    pub fn build_catalog(&self) -> Result<Catalog> {
        match self.config.seed_file() {
            Some(seed_path) => {
                tracing::info!("Loading documents from {}", seed_path);
                Ok(SeedConfig::from_file(seed_path)?.into_catalog())
            }
            None => {
                tracing::debug!("No seed file configured, using sample documents");
                Ok(sample_catalog())
            }
        }
    }

    /// Runs every step, writing console lines to `out`. Returns the export
    /// path.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<PathBuf> {
        let catalog = self.build_catalog()?;
        tracing::info!("Catalog holds {} documents", catalog.len());

        writeln!(out)?;
        writeln!(out, "Documents:")?;
        for line in catalog.list_all() {
            writeln!(out, "{}", line)?;
        }

        let query = self.config.search_query();
        writeln!(out)?;
        writeln!(out, "Searching for title '{}':", query)?;
        match catalog.find_by_title(query) {
            Some(doc) => {
                let recent = doc.is_recent(&self.clock);
                tracing::debug!("Found {} '{}', recent: {}", doc.kind_name(), doc.title, recent);
                writeln!(out, "{}", doc)?;
                writeln!(out, "Recent: {}", if recent { "Yes" } else { "No" })?;
            }
            None => {
                tracing::debug!("No document titled '{}'", query);
                writeln!(out, "Document not found.")?;
            }
        }

        let output_path = PathBuf::from(self.config.output_path());
        catalog.export_json(&output_path)?;
        writeln!(out, "Catalog saved to {}", output_path.display())?;

        Ok(output_path)
    }
}
