use crate::core::chooser::RngChooser;
use crate::core::emitter;
use crate::core::fetcher::fetch_word_list;
use crate::core::{Chooser, ConfigProvider, Pipeline, Storage};
use crate::domain::model::{DataModule, Grid, WordList, Wrapper};
use crate::domain::services::synthesize_grid;
use crate::utils::error::Result;
use rand_chacha::ChaCha8Rng;
use reqwest::Client;

pub struct TablePipeline<S: Storage, C: ConfigProvider, R: Chooser> {
    pub(crate) storage: S,
    pub(crate) config: C,
    pub(crate) client: Client,
    pub(crate) chooser: R,
}

impl<S: Storage, C: ConfigProvider> TablePipeline<S, C, RngChooser<ChaCha8Rng>> {
    pub fn new(storage: S, config: C) -> Self {
        let chooser = RngChooser::seeded(config.seed());
        Self::with_chooser(storage, config, chooser)
    }
}

impl<S: Storage, C: ConfigProvider, R: Chooser> TablePipeline<S, C, R> {
    pub fn with_chooser(storage: S, config: C, chooser: R) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
            chooser,
        }
    }
}

#[async_trait::async_trait]
impl<S, C, R> Pipeline for TablePipeline<S, C, R>
where
    S: Storage,
    C: ConfigProvider,
    R: Chooser + Send + Sync,
{
    async fn extract(&self) -> Result<WordList> {
        fetch_word_list(&self.client, self.config.source_url()).await
    }

    async fn transform(&mut self, words: WordList) -> Result<Grid> {
        let shape = self.config.shape();
        let words_per_phrase = self.config.words_per_phrase();
        tracing::debug!(
            "Building {} x {} grid, {} words per phrase",
            shape.rows,
            shape.cols,
            words_per_phrase
        );

        let (grid, tally) = synthesize_grid(&words, shape, words_per_phrase, &mut self.chooser);

        for wrapper in Wrapper::ALL {
            tracing::debug!(
                "{:?}: {} of {} cells",
                wrapper,
                tally.count(wrapper),
                tally.total()
            );
        }
        Ok(grid)
    }

    async fn load(&self, grid: Grid) -> Result<String> {
        let output_path = self.config.output_path().to_string();
        let format = self.config.output_format();

        let text = emitter::render(&DataModule::from(grid), format)?;
        tracing::debug!(
            "Writing {:?} module ({} bytes) to {}",
            format,
            text.len(),
            output_path
        );
        self.storage.write_file(&output_path, text.as_bytes()).await?;

        Ok(output_path)
    }
}
