use crate::domain::model::{Grid, TableShape, WordList};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `export const` declarations for a TypeScript module
    #[default]
    Typescript,
    /// `{"rows", "cols", "data"}` object
    Json,
}

pub trait ConfigProvider: Send + Sync {
    fn source_url(&self) -> &str;
    fn output_path(&self) -> &str;
    fn shape(&self) -> TableShape;
    fn words_per_phrase(&self) -> usize;
    fn seed(&self) -> Option<u64>;
    fn output_format(&self) -> OutputFormat;
}

/// Source of every random decision made while building a table.
pub trait Chooser {
    /// Returns an index in `0..n`. `n` must be non-zero.
    fn pick(&mut self, n: usize) -> usize;

    /// `k` independent picks from `0..n`, with replacement.
    fn pick_many(&mut self, n: usize, k: usize) -> Vec<usize> {
        (0..k).map(|_| self.pick(n)).collect()
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<WordList>;
    async fn transform(&mut self, words: WordList) -> Result<Grid>;
    async fn load(&self, grid: Grid) -> Result<String>;
}
