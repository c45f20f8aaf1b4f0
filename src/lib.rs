pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::seed::SeedConfig;
pub use core::{catalog::Catalog, demo::CatalogDemo};
pub use domain::model::{Document, DocumentKind, DocumentRecord};
pub use domain::ports::{Clock, ConfigProvider, FixedClock, SystemClock};
pub use utils::error::{CatalogError, Result};
