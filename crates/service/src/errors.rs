use thiserror::Error;

/// The single domain failure: a lookup by id that found nothing.
/// Everything else (empty filters, unknown sort keys, absent pagination)
/// is a default-behavior branch, not an error.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }
}
