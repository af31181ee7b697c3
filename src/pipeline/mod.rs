//! Run-level orchestration: discover articles per category, curate them, and
//! hand the resulting facts to a sink.
//!
//! Work is strictly sequential. Failures are contained at the smallest unit
//! they occur in (article, fact, category) and logged; nothing short of
//! cancellation stops a run.

pub mod retry;


pub use retry::{RetryPolicy, calculate_backoff_delay, with_retry};

use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

use crate::categories::{Category, CategoryLookup, CategoryProfile, CategoryRegistry};
use crate::curation::{self, Fact, FactAssembler};
use crate::store::FactSink;
use crate::wikipedia::{Article, ArticleLookup, ArticleSource};

/// Pacing and retry knobs for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub search_results_per_topic: usize,
    pub topic_delay: Duration,
    pub article_delay: Duration,
    pub category_delay: Duration,
    pub retry: RetryPolicy,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            search_results_per_topic: 3,
            topic_delay: Duration::from_millis(500),
            article_delay: Duration::from_millis(1000),
            category_delay: Duration::from_millis(2000),
            retry: RetryPolicy::default(),
        }
    }
}

/// Counters across a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Facts handed to the sink.
    pub processed: usize,
    /// Facts the sink accepted.
    pub saved: usize,
}

pub struct Curator {
    source: Arc<dyn ArticleSource>,
    sink: Arc<dyn FactSink>,
    assembler: FactAssembler,
    registry: CategoryRegistry,
    settings: RunSettings,
    shutdown_token: CancellationToken,
    stats: RunStats,
}

impl Curator {
    pub fn new(
        source: Arc<dyn ArticleSource>,
        sink: Arc<dyn FactSink>,
        settings: RunSettings,
    ) -> Self {
        Self {
            source,
            sink,
            assembler: FactAssembler::with_defaults(),
            registry: CategoryRegistry::new(),
            settings,
            shutdown_token: CancellationToken::new(),
            stats: RunStats::default(),
        }
    }

    /// Token that stops the run before the next article when cancelled.
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown_token.clone()
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Curate every named category; unknown names are skipped.
    /// Returns the number of facts saved.
    pub async fn run_all<S: AsRef<str>>(
        &mut self,
        categories: &[S],
        max_articles_per_category: usize,
    ) -> usize {
        let names: Vec<&str> = categories.iter().map(AsRef::as_ref).collect();
        info!("Starting curation for categories: {:?}", names);
        info!("Max articles per category: {}", max_articles_per_category);

        let mut total_saved = 0;
        for (i, name) in names.iter().enumerate() {
            if self.shutdown_token.is_cancelled() {
                warn!("Run cancelled, skipping remaining categories");
                break;
            }

            let category = match self.registry.lookup(name) {
                CategoryLookup::Known(profile) => profile.category,
                CategoryLookup::Unknown => {
                    warn!("Unknown category: {}", name);
                    continue;
                }
            };

            total_saved += self
                .run_category(category, max_articles_per_category)
                .await;

            if i + 1 < names.len() {
                self.pause(self.settings.category_delay).await;
            }
        }

        info!(
            "Curation completed. Total facts processed: {}",
            self.stats.processed
        );
        info!("Total facts saved: {}", self.stats.saved);
        total_saved
    }

    /// Curate one category. Returns the number of facts saved.
    #[instrument(skip_all, fields(category = %category, max_articles))]
    pub async fn run_category(&mut self, category: Category, max_articles: usize) -> usize {
        info!("Starting category");
        let profile = *self.registry.profile(category);

        let titles = self.discover_articles(&profile, max_articles).await;
        info!("Found {} articles", titles.len());

        let mut saved = 0;
        for (i, title) in titles.iter().enumerate() {
            if self.shutdown_token.is_cancelled() {
                warn!("Run cancelled, stopping category");
                break;
            }

            for fact in self.curate_article(title, &profile).await {
                match self.sink.put(&fact).await {
                    Ok(id) => {
                        debug!(id = %id, title = %fact.title, "Fact saved");
                        saved += 1;
                        self.stats.saved += 1;
                    }
                    Err(e) => error!("Error saving fact from {}: {}", title, e),
                }
                self.stats.processed += 1;
            }

            if i + 1 < titles.len() {
                self.pause(self.settings.article_delay).await;
            }
        }

        info!("Saved {} facts", saved);
        saved
    }

    /// Article titles for a category: searches its first `max_articles`
    /// topics and keeps unseen titles until `max_articles` are collected.
    pub async fn discover_articles(
        &self,
        profile: &CategoryProfile,
        max_articles: usize,
    ) -> Vec<String> {
        let mut titles: Vec<String> = Vec::new();
        let limit = self.settings.search_results_per_topic;

        for topic in profile.topics.iter().take(max_articles) {
            if titles.len() >= max_articles || self.shutdown_token.is_cancelled() {
                break;
            }

            let source = &self.source;
            match with_retry(self.settings.retry, "search", || source.search(topic, limit)).await
            {
                Ok(results) => {
                    for result in results {
                        if titles.len() < max_articles && !titles.contains(&result) {
                            titles.push(result);
                        }
                    }
                }
                Err(e) => warn!("Error searching for topic '{}': {}", topic, e),
            }

            self.pause(self.settings.topic_delay).await;
        }

        titles
    }

    /// Facts from one article; empty when the article cannot be resolved.
    #[instrument(skip(self, profile))]
    pub async fn curate_article(&self, title: &str, profile: &CategoryProfile) -> Vec<Fact> {
        let Some(article) = self.resolve_article(title).await else {
            return Vec::new();
        };

        let facts = curation::curate_article(
            &self.assembler,
            &article.content,
            &article.title,
            &article.url,
            profile,
        );
        debug!(facts = facts.len(), "Article curated");
        facts
    }

    /// Fetch an article, following a disambiguation page to its first
    /// option once.
    async fn resolve_article(&self, title: &str) -> Option<Article> {
        match self.fetch(title).await {
            Ok(ArticleLookup::Found(article)) => Some(article),
            Ok(ArticleLookup::Disambiguation(options)) => {
                let Some(alternative) = options.first() else {
                    warn!("Could not resolve disambiguation for: {}", title);
                    return None;
                };
                match self.fetch(alternative).await {
                    Ok(ArticleLookup::Found(article)) => {
                        info!("Resolved disambiguation {} -> {}", title, article.title);
                        Some(article)
                    }
                    _ => {
                        warn!("Could not resolve disambiguation for: {}", title);
                        None
                    }
                }
            }
            Ok(ArticleLookup::NotFound) => {
                warn!("Page not found: {}", title);
                None
            }
            Err(e) => {
                error!("Error fetching {}: {}", title, e);
                None
            }
        }
    }

    async fn fetch(&self, title: &str) -> Result<ArticleLookup, crate::wikipedia::WikiError> {
        let source = &self.source;
        with_retry(self.settings.retry, "fetch", || source.fetch(title)).await
    }

    /// Sleep for a throttling delay, waking early on cancellation.
    async fn pause(&self, delay: Duration) {
        if delay.is_zero() {
            return;
        }
        tokio::select! {
            _ = self.shutdown_token.cancelled() => {}
            _ = tokio::time::sleep(delay) => {}
        }
    }
}
