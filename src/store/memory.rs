//! In-process item storage for tests and database-less runs.

use super::ItemStore;
use crate::model::Item;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// Ids start at 1 and are never reused, like an auto-increment column.
#[derive(Debug, Default)]
pub struct MemoryItemStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    rows: BTreeMap<i64, String>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn rows(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn list(&self) -> Result<Vec<Item>, sqlx::Error> {
        Ok(self
            .rows()
            .rows
            .iter()
            .map(|(id, name)| Item { id: *id, name: name.clone() })
            .collect())
    }

    async fn insert(&self, name: &str) -> Result<i64, sqlx::Error> {
        let mut inner = self.rows();
        inner.last_id += 1;
        let id = inner.last_id;
        inner.rows.insert(id, name.to_string());
        Ok(id)
    }

    async fn fetch(&self, id: i64) -> Result<Option<Item>, sqlx::Error> {
        Ok(self
            .rows()
            .rows
            .get(&id)
            .map(|name| Item { id, name: name.clone() }))
    }

    async fn update(&self, id: i64, name: &str) -> Result<(), sqlx::Error> {
        if let Some(existing) = self.rows().rows.get_mut(&id) {
            *existing = name.to_string();
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), sqlx::Error> {
        self.rows().rows.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}
