use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
pub enum PlanarIndexError {
    /// An argument failed validation. Raised before any node is created or
    /// modified, so a failed call never leaves the tree partially mutated.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
