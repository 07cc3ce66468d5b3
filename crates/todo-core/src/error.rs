//! Error Types

use thiserror::Error;

use crate::model::TodoId;

/// Stored value could not be turned into a valid collection
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("stored value is not valid JSON: {0}")]
    Syntax(#[source] serde_json::Error),
    #[error("stored value is not an array")]
    NotAnArray,
    #[error("stored entry has the wrong shape: {0}")]
    Shape(#[source] serde_json::Error),
    #[error("duplicate todo id {0}")]
    DuplicateId(TodoId),
    #[error("failed to encode todos: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Storage slot failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Persistence bridge lifecycle violations and write failures
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("bridge already hydrated")]
    AlreadyHydrated,
    #[error("bridge is not ready (phase: {0:?})")]
    NotReady(crate::bridge::BridgePhase),
    #[error(transparent)]
    Encode(#[from] DecodeError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
