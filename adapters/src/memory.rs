//! In-memory credential store.
//!
//! Keeps records in a map guarded by a tokio `RwLock`. Uniqueness is checked
//! and the record inserted under a single write guard, mirroring the unique
//! key of the SQL backend.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::StoreError;
use crate::models::{CredentialRecord, NewCredential, Role};
use crate::CredentialStore;

#[derive(Default)]
struct Inner {
    next_id: u64,
    records: HashMap<(Role, String), CredentialRecord>,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records across both roles.
    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn insert(&self, credential: NewCredential) -> Result<CredentialRecord, StoreError> {
        let mut inner = self.inner.write().await;
        let key = (credential.role, credential.email.clone());
        if inner.records.contains_key(&key) {
            return Err(StoreError::Duplicate);
        }

        inner.next_id += 1;
        let record = credential.with_id(inner.next_id);
        inner.records.insert(key, record.clone());
        log::debug!("stored {} account id={}", record.role, record.id);
        Ok(record)
    }

    async fn find_by_email(
        &self,
        role: Role,
        email: &str,
    ) -> Result<Option<CredentialRecord>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.records.get(&(role, email.to_string())).cloned())
    }
}
