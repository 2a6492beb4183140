//! Error types for oxblend

use thiserror::Error;

/// Result type for oxblend operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in oxblend operations
///
/// Table allocation is the only recoverable failure in this crate. Every
/// query operation is a total function over its declared input domain.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Failed to allocate one of the blend lookup tables
    #[error("Table allocation failed: could not reserve {requested} bytes")]
    TableAllocation { requested: usize },
}
