use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

use crate::wikipedia::{
    errors::WikiError,
    source::ArticleSource,
    types::{ApiResponse, ArticleLookup, PagesQuery, SearchQuery},
};

const USER_AGENT: &str = "FactsmithBot/0.1 (+https://factsmith.example.com)";

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .user_agent(USER_AGENT)
        .build()
        .expect("Failed to build HTTP client")
});

/// MediaWiki Action API client.
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    api_url: Url,
}

impl WikipediaClient {
    pub fn new(api_url: &str) -> Result<Self, WikiError> {
        Ok(Self {
            api_url: Url::parse(api_url)?,
        })
    }

    async fn query<Q: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<Q, WikiError> {
        let response = HTTP_CLIENT
            .get(self.api_url.clone())
            .query(&[("action", "query"), ("format", "json"), ("formatversion", "2")])
            .query(params)
            .send()
            .await
            .map_err(WikiError::from_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(WikiError::from_status(status));
        }

        let body: ApiResponse<Q> = response
            .json()
            .await
            .map_err(|e| WikiError::Decode(e.to_string()))?;

        if let Some(error) = body.error {
            return Err(WikiError::Api {
                code: error.code,
                info: error.info,
            });
        }

        body.query
            .ok_or_else(|| WikiError::Decode("response has no query section".to_string()))
    }
}

#[async_trait]
impl ArticleSource for WikipediaClient {
    #[instrument(skip(self))]
    async fn search(&self, topic: &str, limit: usize) -> Result<Vec<String>, WikiError> {
        let limit = limit.to_string();
        let query: SearchQuery = self
            .query(&[
                ("list", "search"),
                ("srsearch", topic),
                ("srlimit", limit.as_str()),
                ("srprop", ""),
            ])
            .await?;

        let titles: Vec<String> = query.search.into_iter().map(|hit| hit.title).collect();
        debug!(results = titles.len(), "Search completed");
        Ok(titles)
    }

    #[instrument(skip(self))]
    async fn fetch(&self, title: &str) -> Result<ArticleLookup, WikiError> {
        let query: PagesQuery = self
            .query(&[
                ("prop", "extracts|info|pageprops|links"),
                ("titles", title),
                ("explaintext", "1"),
                ("inprop", "url"),
                ("ppprop", "disambiguation"),
                ("plnamespace", "0"),
                ("pllimit", "max"),
                ("redirects", "1"),
            ])
            .await?;

        let lookup = query
            .pages
            .into_iter()
            .next()
            .map(|page| page.into_lookup())
            .unwrap_or(ArticleLookup::NotFound);
        Ok(lookup)
    }
}
