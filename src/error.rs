//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
///
/// The two variants are distinct so callers can branch on them, e.g. stop
/// dealing entirely versus reshuffling a discard pile back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The deck has no cards at all.
    #[error("deck is out of cards")]
    OutOfCards,
    /// The deck has cards, but fewer than requested.
    #[error("deck doesn't have enough cards")]
    OutOfLength,
}
