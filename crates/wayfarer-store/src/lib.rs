//! # wayfarer-store
//!
//! Process-local storage for [`Record`] types.
//!
//! Each [`MemoryStore`] keeps its records in insertion order behind a
//! `tokio::sync::RwLock`. Every mutation (create, merge-update, modify,
//! delete) runs inside one write-lock critical section, so concurrent updates
//! cannot lose each other's changes and generated IDs stay unique. Nothing is
//! persisted; a restart starts empty.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tokio::sync::RwLock;
use wayfarer_core::errors::CoreError;
use wayfarer_core::ids::next_unique_id;
use wayfarer_core::record::{Record, merge_shallow};

/// Shared, cloneable handle to one record collection.
#[derive(Debug)]
pub struct MemoryStore<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

fn not_found<T: Record>(id: &str) -> CoreError {
    CoreError::NotFound {
        entity: T::KIND,
        id: id.to_string(),
    }
}

impl<T: Record> MemoryStore<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new record, assigning its ID and timestamps.
    ///
    /// The ID is the creation time in milliseconds, stepped forward past any ID
    /// already in the store.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the record lacks a required field.
    pub async fn create(&self, mut record: T) -> Result<T, CoreError> {
        record.validate()?;
        let mut records = self.records.write().await;
        let now = Utc::now();
        let id = next_unique_id(now, |candidate| {
            records.iter().any(|r| r.id() == candidate)
        });
        record.assign_identity(id, now);
        records.push(record.clone());
        tracing::debug!(kind = T::KIND.as_str(), id = record.id(), "record created");
        Ok(record)
    }

    /// All records in insertion order.
    pub async fn list(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no record has this ID.
    pub async fn get(&self, id: &str) -> Result<T, CoreError> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| not_found::<T>(id))
    }

    /// Shallow-merge `patch` into the stored record and refresh `updatedAt`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] for an unknown ID, or
    /// [`CoreError::Validation`] if the patch is malformed or the merged record
    /// lacks a required field. The stored record is unchanged on error.
    pub async fn update(&self, id: &str, patch: Value) -> Result<T, CoreError> {
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| not_found::<T>(id))?;
        let mut merged = merge_shallow(slot, patch)?;
        merged.touch(Utc::now());
        *slot = merged.clone();
        tracing::debug!(kind = T::KIND.as_str(), id, "record updated");
        Ok(merged)
    }

    /// Apply `change` to the stored record inside the write lock and refresh
    /// `updatedAt`.
    ///
    /// `change` sees the record as it is now, so edits that landed while the
    /// caller was waiting on something else are kept.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] for an unknown ID, or
    /// [`CoreError::Validation`] if the changed record lacks a required field.
    /// The stored record is unchanged on error.
    pub async fn modify(&self, id: &str, change: impl FnOnce(&mut T)) -> Result<T, CoreError> {
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| not_found::<T>(id))?;
        let mut modified = slot.clone();
        change(&mut modified);
        modified.validate()?;
        modified.touch(Utc::now());
        *slot = modified.clone();
        tracing::debug!(kind = T::KIND.as_str(), id, "record modified");
        Ok(modified)
    }

    /// Remove a record, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no record has this ID; the store is
    /// left unchanged.
    pub async fn delete(&self, id: &str) -> Result<T, CoreError> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| not_found::<T>(id))?;
        let removed = records.remove(index);
        tracing::debug!(kind = T::KIND.as_str(), id, "record deleted");
        Ok(removed)
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}
