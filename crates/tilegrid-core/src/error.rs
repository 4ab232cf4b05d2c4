//! Error type shared by the tile-grid crates.

/// Errors raised when constructing tile-grid values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeomError {
    /// A column/row/size argument violates a structural invariant.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl GeomError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Convenience alias used by fallible constructors.
pub type Result<T> = std::result::Result<T, GeomError>;
