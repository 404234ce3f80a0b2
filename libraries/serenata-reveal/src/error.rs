//! Error types for the reveal flow

use crate::sequencer::RevealPhase;
use serenata_core::SerenataError;
use thiserror::Error;

/// Result type for reveal operations
pub type Result<T> = std::result::Result<T, RevealError>;

/// Reveal errors
///
/// Everything that can go wrong while loading funnels into `NotFound` or
/// `Core`; both end in the terminal error phase with the message surfaced.
/// There is no automatic retry, a full reload starts over.
#[derive(Debug, Error)]
pub enum RevealError {
    /// The link resolves to no usable song
    #[error("Song not found: {0}")]
    NotFound(String),

    /// A phase transition that the reveal sequence does not allow
    #[error("Invalid reveal transition: {from:?} -> {to:?}")]
    InvalidTransition {
        /// Phase the sequencer was in
        from: RevealPhase,
        /// Phase that was requested
        to: RevealPhase,
    },

    /// Song index outside the current set
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// The page was torn down; pending work must not run
    #[error("Reveal cancelled")]
    Cancelled,

    /// Error bubbled up from core or the store
    #[error(transparent)]
    Core(#[from] SerenataError),
}
