use crate::validation::ValidationError;

/// Failures reported by the submit operations.
///
/// Neither variant is fatal: a rejected submission leaves the stores
/// untouched and the caller may retry with corrected input, and a store
/// failure leaves the validation outcome standing.
#[derive(Debug, thiserror::Error)]
pub enum PrescriptionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("failed to persist entry: {0}")]
    Store(#[from] oculog_store::StoreError),
}

pub type PrescriptionResult<T> = std::result::Result<T, PrescriptionError>;
