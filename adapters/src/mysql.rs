//! MySQL-backed credential store.
//!
//! Both roles share one `accounts` table; the composite unique key on
//! `(email, role)` keeps the namespaces disjoint and is the only guard against
//! concurrent duplicate registrations. Emails use a NO PAD binary collation
//! so comparisons are exact: case and trailing spaces both count.

use async_trait::async_trait;
use sqlx::mysql::MySqlPool;
use sqlx::FromRow;

use crate::errors::StoreError;
use crate::models::{CredentialRecord, NewCredential, Role};
use crate::CredentialStore;

const CREATE_ACCOUNTS: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
    username VARCHAR(255) NOT NULL,
    email VARCHAR(255) COLLATE utf8mb4_0900_bin NOT NULL,
    password_hash VARCHAR(255) NOT NULL,
    role VARCHAR(16) NOT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
    UNIQUE KEY uq_accounts_email_role (email, role)
) DEFAULT CHARSET = utf8mb4
"#;

#[derive(Debug, FromRow)]
struct AccountRow {
    id: u64,
    username: String,
    email: String,
    password_hash: String,
    role: String,
}

impl TryFrom<AccountRow> for CredentialRecord {
    type Error = StoreError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        Ok(CredentialRecord {
            id: row.id,
            username: row.username,
            email: row.email,
            password_hash: row.password_hash,
            role: row.role.parse()?,
        })
    }
}

#[derive(Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Creates the `accounts` table when it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        log::info!("ensuring accounts table exists");
        sqlx::query(CREATE_ACCOUNTS).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for MySqlStore {
    async fn insert(&self, credential: NewCredential) -> Result<CredentialRecord, StoreError> {
        let result = sqlx::query(
            "INSERT INTO accounts (username, email, password_hash, role) VALUES (?, ?, ?, ?)",
        )
        .bind(&credential.username)
        .bind(&credential.email)
        .bind(&credential.password_hash)
        .bind(credential.role.as_str())
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_id();
        log::debug!("inserted {} account id={}", credential.role, id);
        Ok(credential.with_id(id))
    }

    async fn find_by_email(
        &self,
        role: Role,
        email: &str,
    ) -> Result<Option<CredentialRecord>, StoreError> {
        let row: Option<AccountRow> = sqlx::query_as(
            "SELECT id, username, email, password_hash, role FROM accounts WHERE email = ? AND role = ?",
        )
        .bind(email)
        .bind(role.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(CredentialRecord::try_from).transpose()
    }
}
