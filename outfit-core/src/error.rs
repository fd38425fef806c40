//! Error types for the outfit planner.

use thiserror::Error;

/// Errors that can occur in outfit planner operations.
///
/// The wizard itself never fails: an incomplete outfit is simply not
/// committed. These cover configuration and catalog lookups.
#[derive(Error, Debug)]
pub enum OutfitError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown category '{0}'. Expected tops, bottoms or accessories")]
    UnknownCategory(String),

    #[error("No {category} at position {position}")]
    UnknownItem { category: String, position: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for outfit planner operations.
pub type OutfitResult<T> = Result<T, OutfitError>;
