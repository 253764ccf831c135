pub mod loader;
pub mod summary_model;
