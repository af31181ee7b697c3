use async_trait::async_trait;
use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::{debug, info};

use crate::curation::Fact;
use crate::store::{FactSink, StoreError, StoredFact};

/// Stores facts in a PostgreSQL `facts` table.
#[derive(Clone)]
pub struct PgFactSink {
    pool: PgPool,
}

impl PgFactSink {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect and bring the schema up to date.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Connected to fact database");

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl FactSink for PgFactSink {
    async fn put(&self, fact: &Fact) -> Result<String, StoreError> {
        let stored = StoredFact::new(fact.clone());

        sqlx::query(
            r#"
            INSERT INTO facts
                  (id, title, content, category, tags, difficulty, reading_time,
                   source, source_url, popularity, views, likes, shares, dislikes,
                   created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            "#,
        )
        .bind(&stored.id)
        .bind(&stored.fact.title)
        .bind(&stored.fact.content)
        .bind(stored.fact.category.name())
        .bind(&stored.fact.tags)
        .bind(stored.fact.difficulty.as_str())
        .bind(stored.fact.reading_time as i32)
        .bind(&stored.fact.source)
        .bind(&stored.fact.source_url)
        .bind(stored.fact.popularity as i16)
        .bind(stored.views)
        .bind(stored.likes)
        .bind(stored.shares)
        .bind(stored.dislikes)
        .bind(stored.created_at)
        .bind(stored.updated_at)
        .execute(&self.pool)
        .await?;

        debug!(id = %stored.id, "Fact inserted");
        Ok(stored.id)
    }
}
