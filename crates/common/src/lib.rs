//! Common utilities and shared types for quizhive.
//!
//! This crate provides foundational components used across all quizhive
//! crates:
//!
//! - **Configuration**: Application settings via [`Config`]
//! - **Error handling**: Unified error types via [`AppError`] and [`AppResult`]
//! - **Pagination**: Offset/limit/order options via [`Pagination`]
//!
//! # Example
//!
//! ```no_run
//! use quizhive_common::{AppResult, Config};
//!
//! fn example() -> AppResult<()> {
//!     let config = Config::load()?;
//!     println!("redis at {}", config.redis.url);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod pagination;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use pagination::{Pagination, SortOrder};
