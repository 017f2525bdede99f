pub mod logger;
pub mod matrix_pipeline;
