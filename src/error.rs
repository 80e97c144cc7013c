use thiserror::Error;

use crate::services::store::RecordKind;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("MONGO_URI must be set")]
    MissingUri,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),
    /// Failure reported by a backend other than the MongoDB driver.
    #[error("{0}")]
    Message(String),
}

/// Any failure while resetting the database.
#[derive(Error, Debug)]
pub enum ResetError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to connect to database: {0}")]
    Connect(#[source] StoreError),
    #[error("failed to delete {kind}: {source}")]
    Delete {
        kind: RecordKind,
        #[source]
        source: StoreError,
    },
}
