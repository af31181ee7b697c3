pub mod categories;
pub mod config;
pub mod curation;
pub mod pipeline;
pub mod store;
pub mod wikipedia;
