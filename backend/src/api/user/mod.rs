//! Module for user profile API endpoints.
//!
//! This module handles account information that is distinct from the core
//! authentication process, such as looking up a user's display name.

pub mod handlers;
pub mod routes;
