//! Custom error types specific to the `adapters` crate.
//!
//! These errors cover connection, query and row-decoding failures inside a
//! store backend, plus the uniqueness violation the registration flow turns
//! into a conflict.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("a record with this email already exists")]
    Duplicate,

    #[error("store connection error: {0}")]
    Connection(String),

    #[error("store query error: {0}")]
    Query(String),

    #[error("corrupt record: {0}")]
    Corrupt(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                StoreError::Duplicate
            }
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => StoreError::Connection(err.to_string()),
            other => StoreError::Query(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::{DatabaseError, ErrorKind};
    use std::error::Error as StdError;
    use std::fmt;

    #[derive(Debug)]
    struct FakeDbError {
        unique: bool,
    }

    impl fmt::Display for FakeDbError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Duplicate entry 'a@x.com-standard' for key 'uq_accounts_email_role'")
        }
    }

    impl StdError for FakeDbError {}

    impl DatabaseError for FakeDbError {
        fn message(&self) -> &str {
            "Duplicate entry"
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            if self.unique {
                ErrorKind::UniqueViolation
            } else {
                ErrorKind::Other
            }
        }
    }

    #[test]
    fn unique_violation_is_duplicate() {
        let err = sqlx::Error::Database(Box::new(FakeDbError { unique: true }));
        assert!(matches!(StoreError::from(err), StoreError::Duplicate));
    }

    #[test]
    fn other_database_errors_are_query_errors() {
        let err = sqlx::Error::Database(Box::new(FakeDbError { unique: false }));
        assert!(matches!(StoreError::from(err), StoreError::Query(_)));
    }

    #[test]
    fn pool_and_io_failures_are_connection_errors() {
        assert!(matches!(
            StoreError::from(sqlx::Error::PoolTimedOut),
            StoreError::Connection(_)
        ));
        assert!(matches!(
            StoreError::from(sqlx::Error::PoolClosed),
            StoreError::Connection(_)
        ));
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert!(matches!(
            StoreError::from(sqlx::Error::Io(io)),
            StoreError::Connection(_)
        ));
    }

    #[test]
    fn row_not_found_is_a_query_error() {
        assert!(matches!(
            StoreError::from(sqlx::Error::RowNotFound),
            StoreError::Query(_)
        ));
    }
}
