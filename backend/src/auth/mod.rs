//! Authentication module for managing accounts, sessions, and access control.
//!
//! This module provides registration, sign-in, stateless session tokens and the
//! middleware that guards protected routes.

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod routes;
pub mod service;
pub mod token;

// Re-exports for convenience
pub use errors::AuthResult;
pub use middleware::{require_auth, AuthUser};
pub use password::PasswordHasher;
pub use routes::auth_router;
pub use service::AuthService;
pub use token::TokenIssuer;
