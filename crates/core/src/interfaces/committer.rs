//! Transaction boundary port.

use async_trait::async_trait;
use quizhive_common::AppResult;

/// The single durability boundary of a request.
///
/// Gateway writes accumulate in the request's transaction scope; nothing is
/// visible to other requests until `commit` returns. A request abandoned
/// before the commit leaves no partial state behind.
#[async_trait]
pub trait Committer: Send + Sync {
    /// Atomically flush all pending writes.
    async fn commit(&self) -> AppResult<()>;
}
