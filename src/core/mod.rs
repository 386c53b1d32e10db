pub mod chooser;
pub mod emitter;
pub mod engine;
pub mod fetcher;
pub mod pipeline;

pub use crate::domain::model::{DataModule, Grid, TableShape, WordList, Wrapper};
pub use crate::domain::ports::{Chooser, ConfigProvider, OutputFormat, Pipeline, Storage};
pub use crate::utils::error::Result;
