//! Module for database connection setup.
//!
//! This module initializes the MySQL connection pool from `DatabaseConfig`.
//! The pool is created once in `main`, handed to the credential store, and
//! closed during shutdown.

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};

use crate::config::DatabaseConfig;

pub async fn connect(config: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    let options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name);

    tracing::info!(
        "Connecting to database {}@{}:{}/{}",
        config.user,
        config.host,
        config.port,
        config.name
    );

    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
}
