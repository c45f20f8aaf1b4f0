use crate::domain::model::{Document, DocumentRecord};
use crate::utils::error::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Ordered, append-only collection of documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    documents: Vec<Document>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, document: Document) {
        tracing::debug!("Adding {}: {}", document.kind_name(), document.title);
        self.documents.push(document);
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    /// One display line per document, in insertion order.
    pub fn list_all(&self) -> Vec<String> {
        self.documents.iter().map(Document::display).collect()
    }

    /// Case-insensitive exact title match; the earliest entry wins.
    pub fn find_by_title(&self, title: &str) -> Option<&Document> {
        let wanted = title.to_lowercase();
        self.documents
            .iter()
            .find(|doc| doc.title.to_lowercase() == wanted)
    }

    pub fn to_records(&self) -> Vec<DocumentRecord> {
        self.documents.iter().map(Document::to_record).collect()
    }

    /// Writes the catalog as an indented JSON array. Non-ASCII text is kept
    /// as-is.
    pub fn export_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let records = self.to_records();
        let mut writer = BufWriter::new(File::create(path)?);
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        records.serialize(&mut serializer)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        tracing::info!("Exported {} documents to {}", records.len(), path.display());
        Ok(())
    }
}

impl FromIterator<Document> for Catalog {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Self {
            documents: iter.into_iter().collect(),
        }
    }
}

impl Extend<Document> for Catalog {
    fn extend<I: IntoIterator<Item = Document>>(&mut self, iter: I) {
        for document in iter {
            self.add(document);
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
