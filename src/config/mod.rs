pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, OutputFormat, TableShape};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const MAX_WORDS_PER_PHRASE: usize = 16;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "table-datagen")]
#[command(about = "Generates random HTML table data as a TypeScript module")]
pub struct CliConfig {
    #[arg(
        long,
        default_value = crate::domain::model::DEFAULT_SOURCE_URL,
        help = "Plaintext word list, one word per line"
    )]
    pub source_url: String,

    #[arg(long, default_value = crate::domain::model::DEFAULT_OUTPUT_PATH)]
    pub output_path: String,

    #[arg(long, default_value_t = crate::domain::model::DEFAULT_ROWS)]
    pub rows: usize,

    #[arg(long, default_value_t = crate::domain::model::DEFAULT_COLS)]
    pub cols: usize,

    #[arg(long, default_value_t = crate::domain::model::DEFAULT_WORDS_PER_PHRASE)]
    pub words_per_phrase: usize,

    #[arg(long, help = "Seed for reproducible output")]
    pub seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Typescript)]
    pub format: OutputFormat,

    #[arg(long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn source_url(&self) -> &str {
        &self.source_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn shape(&self) -> TableShape {
        TableShape {
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn words_per_phrase(&self) -> usize {
        self.words_per_phrase
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source_url", &self.source_url)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_positive_number("rows", self.rows, 1)?;
        validation::validate_positive_number("cols", self.cols, 1)?;
        validation::validate_range(
            "words_per_phrase",
            self.words_per_phrase,
            1,
            MAX_WORDS_PER_PHRASE,
        )?;
        Ok(())
    }
}
