#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serde JSON error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    #[error("field `{field}` already exists on this payload")]
    DuplicateField { field: String },

    #[error("payment method `{existing}` is already attached; cannot attach `{rejected}`")]
    ConflictingVariant {
        existing: &'static str,
        rejected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
