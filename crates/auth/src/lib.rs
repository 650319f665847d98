//! Credential adapters for quizhive.
//!
//! Binds the core's `PasswordHasher` port to Argon2. Token encoding and
//! the request-scoped identity provider live with the transport layer.

pub mod password;

pub use password::Argon2PasswordHasher;
