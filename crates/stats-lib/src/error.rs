//! Error type for stats queries

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the stats query operations.
///
/// Each variant carries the failing step's own error; nothing is retried.
#[derive(Debug, Error)]
pub enum StatsError {
    /// The server address cannot be turned into an endpoint.
    #[error("invalid server address {address:?}: {reason}")]
    InvalidAddress { address: String, reason: String },

    /// The connection could not be established.
    #[error(transparent)]
    Connect(#[from] tonic::transport::Error),

    /// The remote call failed.
    #[error(transparent)]
    Rpc(#[from] tonic::Status),

    /// An absent message was handed to the result writer.
    #[error("nil value: no result to write")]
    NilValue,

    #[error(transparent)]
    Serialize(#[from] serde_json::Error),

    /// Writing an output file failed.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, StatsError>;
