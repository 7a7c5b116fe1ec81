/// Convenience result type used across the menu engine.
pub type TitleGridResult<T> = Result<T, TitleGridError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum TitleGridError {
    /// Invalid configuration values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Unreadable or malformed title catalog.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Catalog holds more titles than the grid can place.
    #[error("catalog holds {len} titles but the grid capacity is {capacity}")]
    CapacityExceeded {
        /// Number of titles offered by the catalog.
        len: usize,
        /// Maximum number of titles the grid accepts.
        capacity: usize,
    },

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TitleGridError {
    /// Build a [`TitleGridError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TitleGridError::Catalog`] value.
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Build a [`TitleGridError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
