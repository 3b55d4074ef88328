//! The deck and its operations.

use alloc::vec::Vec;

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DrawError;

/// An ordered, mutable sequence of cards.
///
/// A deck starts empty. [`Deck::init`] fills it with the standard 52 cards,
/// [`Deck::shuffle`] randomizes it, and [`Deck::draw`] deals from the front.
/// Order is the draw order; duplicates are allowed since [`Deck::append`]
/// accepts arbitrary cards.
///
/// # Example
///
/// ```
/// use deckrs::Deck;
///
/// let mut deck = Deck::new();
/// deck.init();
/// deck.shuffle();
/// let hand = deck.draw(5)?;
/// assert_eq!(hand.len(), 5);
/// assert_eq!(deck.len(), 47);
/// # Ok::<(), deckrs::DrawError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Deck {
    /// Cards in the deck, front first.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a new empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Fills the deck with the standard 52 cards.
    ///
    /// Cards are laid out suit-major in the order Clubs, Diamonds, Hearts,
    /// Spades, with ranks Two through Ace within each suit. Any existing
    /// contents are replaced, never merged.
    pub fn init(&mut self) {
        self.cards.clear();
        self.cards.reserve(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::new(suit, rank));
            }
        }
    }

    /// Shuffles the deck in place.
    ///
    /// Every call seeds a fresh generator from OS entropy, so repeated
    /// shuffles across process runs never reproduce an order.
    ///
    /// A deck with fewer than two cards is left as-is.
    #[cfg(feature = "std")]
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut ChaCha8Rng::from_os_rng());
    }

    /// Shuffles the deck in place with a deterministic generator seeded from
    /// `seed`.
    ///
    /// The same seed on the same deck contents always produces the same
    /// order, which makes dealing reproducible in tests.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        self.shuffle_with(&mut ChaCha8Rng::seed_from_u64(seed));
    }

    /// Shuffles the deck in place using the given generator.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the first `n` cards, preserving their order.
    ///
    /// Drawing zero cards from a non-empty deck succeeds and returns an
    /// empty vec.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::OutOfCards`] if the deck is empty, regardless of
    /// `n`, and [`DrawError::OutOfLength`] if the deck holds fewer than `n`
    /// cards.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, DrawError> {
        if self.cards.is_empty() {
            return Err(DrawError::OutOfCards);
        }
        if self.cards.len() < n {
            return Err(DrawError::OutOfLength);
        }

        Ok(self.cards.drain(..n).collect())
    }

    /// Removes and returns the first card matching the filter.
    ///
    /// A `None` filter component matches anything: `sharp(None, None)`
    /// removes the front card, `sharp(Some(suit), None)` the first card of
    /// that suit, and so on. The relative order of the remaining cards is
    /// preserved.
    ///
    /// Returns `None` when no card matches; that is a normal outcome, not an
    /// error.
    pub fn sharp(&mut self, suit: Option<Suit>, rank: Option<Rank>) -> Option<Card> {
        let index = self.cards.iter().position(|card| {
            suit.is_none_or(|suit| card.suit == suit) && rank.is_none_or(|rank| card.rank == rank)
        })?;

        Some(self.cards.remove(index))
    }

    /// Appends cards to the tail of the deck, preserving their order.
    ///
    /// No validation is performed: duplicates of cards already in the deck
    /// are accepted as-is.
    pub fn append(&mut self, cards: &[Card]) {
        self.cards.extend_from_slice(cards);
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards in the deck, front first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
