//! Core `adapters` crate for abstracting credential storage.
//!
//! This crate defines the `CredentialStore` trait, which outlines the two
//! operations the authentication flows need from durable storage (persist a
//! credential record, look one up by email), and provides the concrete
//! implementations (MySQL, in-memory).

pub mod errors;
pub mod memory;
pub mod models;
pub mod mysql;

use async_trait::async_trait;

pub use errors::StoreError;
pub use memory::MemoryStore;
pub use models::{CredentialRecord, NewCredential, Role};
pub use mysql::MySqlStore;

/// Durable mapping from `(role, email)` to a credential record.
///
/// Implementations must enforce email uniqueness within a role and report a
/// violation as [`StoreError::Duplicate`]. Roles are independent namespaces.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Persists a new record and returns it with its store-assigned id.
    async fn insert(&self, credential: NewCredential) -> Result<CredentialRecord, StoreError>;

    /// Looks up a record by exact (case-sensitive) email within `role`.
    async fn find_by_email(
        &self,
        role: Role,
        email: &str,
    ) -> Result<Option<CredentialRecord>, StoreError>;
}
