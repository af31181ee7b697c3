pub mod client;
pub mod errors;
pub mod source;
pub mod types;

pub use client::WikipediaClient;
pub use errors::WikiError;
pub use source::ArticleSource;
pub use types::{Article, ArticleLookup};
