use thiserror::Error;

/// Reasons a submitted incident draft is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a title")]
    EmptyTitle,

    #[error("Please enter a description")]
    EmptyDescription,

    #[error("Invalid reported_at timestamp: {0}")]
    InvalidTimestamp(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Incident store lock poisoned")]
    Poisoned,

    #[error("Duplicate incident id: {0}")]
    DuplicateId(u64),

    #[error("Incident id space exhausted")]
    IdsExhausted,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: u64,
        max: u64,
        value: u64,
    },
}
