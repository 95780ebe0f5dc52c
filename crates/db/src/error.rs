use std::path::PathBuf;

use crate::store::Collection;

/// Failures raised by a [`RecordStore`](crate::RecordStore) implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on data file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Malformed record in {collection}: {reason}")]
    Corrupt {
        collection: Collection,
        reason: String,
    },
}

impl StoreError {
    pub(crate) fn corrupt(collection: Collection, reason: impl Into<String>) -> Self {
        Self::Corrupt {
            collection,
            reason: reason.into(),
        }
    }
}
