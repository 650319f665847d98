//! Pagination primitives shared by all read-side ports.

use serde::{Deserialize, Serialize};

/// Sort direction for paginated listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

/// Offset/limit pagination options.
///
/// These are the only recognized options; readers accept no free-form sort
/// fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Number of records to skip.
    #[serde(default)]
    pub offset: u64,
    /// Maximum number of records to return.
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// Sort direction.
    #[serde(default)]
    pub order: SortOrder,
}

const fn default_limit() -> u64 {
    20
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: default_limit(),
            order: SortOrder::Asc,
        }
    }
}

impl Pagination {
    /// Create pagination options with an explicit window.
    #[must_use]
    pub const fn new(offset: u64, limit: u64, order: SortOrder) -> Self {
        Self {
            offset,
            limit,
            order,
        }
    }
}
