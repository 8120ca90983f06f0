use super::card::Card;
use super::hand::Hand;
use crate::Error;
use rand::Rng;

/// The residual deck: every card not yet assigned to a seat, the board, or the muck.
///
/// Wraps a [`Hand`] of the remaining cards. Iteration order is ascending card
/// index, so exhaustive enumeration is reproducible and random draws have a
/// stable index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh 52-card deck.
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }
    /// Builds the deck left over once `assigned` cards are dealt.
    /// Fails on the first card that appears twice.
    pub fn residual(assigned: &[Card]) -> Result<Self, Error> {
        let mut deck = Self::new();
        for card in assigned {
            if !deck.contains(card) {
                return Err(Error::DuplicateCard(*card));
            }
            deck.0.remove(*card);
        }
        Ok(deck)
    }
    /// Removes every card in `hand` from the deck.
    pub fn remove(&mut self, hand: Hand) {
        self.0 = self.0.minus(hand);
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// Tests whether a card is still in the deck.
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// The cards that have left the deck, as a mask for [`HandIterator`].
    ///
    /// [`HandIterator`]: super::hands::HandIterator
    pub fn dealt(&self) -> Hand {
        self.0.complement()
    }
    /// Remaining cards in ascending index order.
    pub fn cards(&self) -> Vec<Card> {
        Vec::from(self.0)
    }
    /// Draws and removes a uniformly random card from the deck.
    ///
    /// Selects the i-th set bit by clearing the lowest bit i times.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Card {
        let n = self.0.size();
        assert!(n > 0, "draw from an empty deck");
        let i = rng.random_range(0..n);
        let mut bits = u64::from(self.0);
        for _ in 0..i {
            bits &= bits - 1;
        }
        let card = Card::from(bits.trailing_zeros() as u8);
        self.0.remove(card);
        card
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}
