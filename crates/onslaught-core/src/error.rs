//! Spawn-time error types.
//!
//! Runtime faults inside the tick loop are handled locally and never
//! surfaced as errors; only the spawn boundary can reject a request.

use thiserror::Error;

use crate::enums::ActorKind;

/// Why a spawn request was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpawnError {
    /// No profile registered for the requested kind.
    #[error("no profile registered for actor kind {0:?}")]
    UnknownKind(ActorKind),
    /// Spawn position contained NaN or infinite components.
    #[error("spawn position is not finite")]
    InvalidPosition,
}
