//! Storage handle for the `items` table. Each method issues exactly one statement.

mod memory;
mod postgres;

pub use memory::MemoryItemStore;
pub use postgres::PgItemStore;

use crate::config::{StoreConfig, StoreKind};
use crate::model::Item;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All rows in storage-engine order.
    async fn list(&self) -> Result<Vec<Item>, sqlx::Error>;

    /// Insert a row and return the id the engine assigned.
    async fn insert(&self, name: &str) -> Result<i64, sqlx::Error>;

    async fn fetch(&self, id: i64) -> Result<Option<Item>, sqlx::Error>;

    /// Rename the row with `id`. Succeeds even when no row matches.
    async fn update(&self, id: i64, name: &str) -> Result<(), sqlx::Error>;

    /// Remove the row with `id`. Succeeds even when no row matches.
    async fn delete(&self, id: i64) -> Result<(), sqlx::Error>;

    /// Liveness round trip.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// Open the configured backend. For PostgreSQL this connects and runs the liveness check.
pub async fn open(config: &StoreConfig) -> Result<Arc<dyn ItemStore>, sqlx::Error> {
    let store: Arc<dyn ItemStore> = match config.kind {
        StoreKind::Postgres => Arc::new(PgItemStore::connect(config).await?),
        StoreKind::Memory => Arc::new(MemoryItemStore::new()),
    };
    Ok(store)
}
