//! A standard 52-card playing-card deck with optional `no_std` support.
//!
//! The crate provides a [`Deck`] type that owns an ordered sequence of
//! [`Card`] values, with operations to fill, shuffle, draw from the front,
//! pull out specific cards, and add cards back.
//!
//! # Example
//!
//! ```
//! use deckrs::{Deck, Rank, Suit};
//!
//! let mut deck = Deck::new();
//! deck.init();
//! deck.shuffle();
//!
//! let hand = deck.draw(2)?;
//! assert_eq!(hand.len(), 2);
//!
//! let ace = deck.sharp(Some(Suit::Spades), Some(Rank::Ace));
//! # let _ = ace;
//! # Ok::<(), deckrs::DrawError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::DrawError;
