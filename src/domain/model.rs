use crate::domain::ports::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A document counts as recent when it is at most this many years old.
pub const RECENT_WINDOW_YEARS: i32 = 5;

/// Kind-specific part of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentKind {
    Book { author: String },
    Magazine { issue_number: i64 },
}

/// One catalog entry: the shared fields plus its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub year: i32,
    pub kind: DocumentKind,
}

/// Serialized form of a document, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DocumentRecord {
    Book {
        title: String,
        year: i32,
        author: String,
    },
    Magazine {
        title: String,
        year: i32,
        issue_number: i64,
    },
}

impl Document {
    pub fn book(title: impl Into<String>, year: i32, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year,
            kind: DocumentKind::Book {
                author: author.into(),
            },
        }
    }

    pub fn magazine(title: impl Into<String>, year: i32, issue_number: i64) -> Self {
        Self {
            title: title.into(),
            year,
            kind: DocumentKind::Magazine { issue_number },
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            DocumentKind::Book { .. } => "Book",
            DocumentKind::Magazine { .. } => "Magazine",
        }
    }

    /// Human-readable one-line description.
    pub fn display(&self) -> String {
        self.to_string()
    }

    pub fn is_recent(&self, clock: &dyn Clock) -> bool {
        self.is_recent_in(clock.current_year())
    }

    pub fn is_recent_in(&self, current_year: i32) -> bool {
        // widened so any pair of i32 years subtracts without overflow
        i64::from(current_year) - i64::from(self.year) <= i64::from(RECENT_WINDOW_YEARS)
    }

    pub fn to_record(&self) -> DocumentRecord {
        match &self.kind {
            DocumentKind::Book { author } => DocumentRecord::Book {
                title: self.title.clone(),
                year: self.year,
                author: author.clone(),
            },
            DocumentKind::Magazine { issue_number } => DocumentRecord::Magazine {
                title: self.title.clone(),
                year: self.year,
                issue_number: *issue_number,
            },
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DocumentKind::Book { author } => {
                write!(f, "Book: {} by {} ({})", self.title, author, self.year)
            }
            DocumentKind::Magazine { issue_number } => write!(
                f,
                "Magazine: {} No. {} ({})",
                self.title, issue_number, self.year
            ),
        }
    }
}

impl From<DocumentRecord> for Document {
    fn from(record: DocumentRecord) -> Self {
        match record {
            DocumentRecord::Book {
                title,
                year,
                author,
            } => Document::book(title, year, author),
            DocumentRecord::Magazine {
                title,
                year,
                issue_number,
            } => Document::magazine(title, year, issue_number),
        }
    }
}

impl DocumentRecord {
    pub fn kind_name(&self) -> &'static str {
        match self {
            DocumentRecord::Book { .. } => "Book",
            DocumentRecord::Magazine { .. } => "Magazine",
        }
    }
}
