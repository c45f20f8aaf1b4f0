use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_target, validate_non_empty_string, validate_path, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "doc-catalog")]
#[command(about = "A small catalog of books and magazines")]
pub struct CliConfig {
    #[arg(long, default_value = "bibliotheque.json", help = "Where to write the JSON export")]
    pub output_path: String,

    #[arg(long, default_value = "1984", help = "Title to look up (case-insensitive)")]
    pub search: String,

    #[arg(long, help = "TOML file listing the documents to load")]
    pub seed: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn search_query(&self) -> &str {
        &self.search
    }

    fn seed_file(&self) -> Option<&str> {
        self.seed.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_file_target("output_path", &self.output_path)?;
        validate_non_empty_string("search", &self.search)?;
        if let Some(seed) = &self.seed {
            validate_path("seed", seed)?;
        }
        Ok(())
    }
}
