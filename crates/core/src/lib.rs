//! Core business logic for quizhive.
//!
//! The orchestration core of the platform: domain entities and value
//! objects, the persistence/auth/cache ports the core consumes, the access
//! service that centralizes authorization decisions, and one service per
//! aggregate carrying the command and query use cases.
//!
//! Everything here is transport- and storage-agnostic: inbound requests
//! arrive as plain input records, outbound data leaves as plain DTOs, and
//! all I/O goes through the trait ports in [`interfaces`].

pub mod access;
pub mod cache_keys;
pub mod entities;
pub mod interfaces;
pub mod services;

pub use access::AccessService;
pub use services::*;
