// src/error.rs - Error taxonomy for the consensus and wire-protocol core
use thiserror::Error;

/// Result type alias used throughout this crate.
pub type Result<T> = std::result::Result<T, CreativeError>;

/// Top-level error type for consensus, network, and parser operations.
#[derive(Error, Debug)]
pub enum CreativeError {
    #[error("unknown network: {0}")]
    UnknownNetwork(String),

    #[error("consensus error: {0}")]
    Consensus(String),

    #[error("codec error: {0}")]
    Codec(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),
}

impl CreativeError {
    pub fn consensus<S: Into<String>>(msg: S) -> Self {
        CreativeError::Consensus(msg.into())
    }

    pub fn codec<S: Into<String>>(msg: S) -> Self {
        CreativeError::Codec(msg.into())
    }

    pub fn network<S: Into<String>>(msg: S) -> Self {
        CreativeError::Network(msg.into())
    }
}
