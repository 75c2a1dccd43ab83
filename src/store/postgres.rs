//! PostgreSQL-backed item storage.
//!
//! Expects `items(id BIGSERIAL PRIMARY KEY, name TEXT)` to exist; the service never creates or alters it.

use super::ItemStore;
use crate::config::StoreConfig;
use crate::model::Item;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open the pool and verify the database answers. Any error here should end the process.
    pub async fn connect(config: &StoreConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await?;
        let store = Self::new(pool);
        store.ping().await?;
        Ok(store)
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn list(&self) -> Result<Vec<Item>, sqlx::Error> {
        let sql = "SELECT id, name FROM items";
        tracing::debug!(sql = %sql, "query");
        sqlx::query_as::<_, Item>(sql).fetch_all(&self.pool).await
    }

    async fn insert(&self, name: &str) -> Result<i64, sqlx::Error> {
        let sql = "INSERT INTO items (name) VALUES ($1) RETURNING id";
        tracing::debug!(sql = %sql, name = %name, "query");
        sqlx::query_scalar::<_, i64>(sql)
            .bind(name)
            .fetch_one(&self.pool)
            .await
    }

    async fn fetch(&self, id: i64) -> Result<Option<Item>, sqlx::Error> {
        let sql = "SELECT id, name FROM items WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Item>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn update(&self, id: i64, name: &str) -> Result<(), sqlx::Error> {
        let sql = "UPDATE items SET name = $1 WHERE id = $2";
        tracing::debug!(sql = %sql, id, name = %name, "query");
        sqlx::query(sql).bind(name).bind(id).execute(&self.pool).await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), sqlx::Error> {
        let sql = "DELETE FROM items WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query(sql).bind(id).execute(&self.pool).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
