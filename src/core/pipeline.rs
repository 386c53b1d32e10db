pub use crate::app::pipelines::table_pipeline::TablePipeline;
