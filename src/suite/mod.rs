pub mod client_join;
pub mod duration;
pub mod suite_data;
pub mod suite_model;
pub mod timestamp;
