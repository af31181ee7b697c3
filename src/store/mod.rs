//! Persistence for finished facts.
//!
//! Sinks own everything the curation pipeline does not produce: record ids,
//! timestamps and engagement counters.

pub mod jsonl;
pub mod postgres;

pub use jsonl::JsonlFactSink;
pub use postgres::PgFactSink;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::curation::Fact;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FactSink: Send + Sync {
    /// Store a fact, returning the id it was stored under.
    async fn put(&self, fact: &Fact) -> Result<String, StoreError>;
}

/// A fact as persisted, with storage-owned fields filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFact {
    pub id: String,
    #[serde(flatten)]
    pub fact: Fact,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub views: i64,
    pub likes: i64,
    pub shares: i64,
    pub dislikes: i64,
}

impl StoredFact {
    pub fn new(fact: Fact) -> Self {
        let now = Utc::now();
        Self {
            id: new_fact_id(now),
            fact,
            created_at: now,
            updated_at: now,
            views: 0,
            likes: 0,
            shares: 0,
            dislikes: 0,
        }
    }
}

/// `fact_<unix seconds>_<first 8 hex digits of a v4 uuid>`
pub fn new_fact_id(now: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("fact_{}_{}", now.timestamp(), &suffix[..8])
}
