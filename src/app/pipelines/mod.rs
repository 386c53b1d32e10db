pub mod table_pipeline;
