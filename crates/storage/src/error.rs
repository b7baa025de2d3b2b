use thiserror::Error;

/// Errors surfaced by the storage layer.
///
/// "No rows found" is never an error here: by-id lookups return `Option`
/// and searches return an empty `Vec`. The only failure mode is the
/// underlying query going wrong, which aborts the pipeline that issued it.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database query failed: {0}")]
    Database(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;
