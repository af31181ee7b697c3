use async_trait::async_trait;

use crate::wikipedia::{errors::WikiError, types::ArticleLookup};

/// Where articles come from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Titles matching a topic, best match first.
    async fn search(&self, topic: &str, limit: usize) -> Result<Vec<String>, WikiError>;

    /// Full text of one article, or why there is none.
    async fn fetch(&self, title: &str) -> Result<ArticleLookup, WikiError>;
}
