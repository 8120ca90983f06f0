use super::card::Card;
use super::suit::Suit;
use crate::Error;

/// Hand represents an unordered set of Cards.
///
/// Stored as a u64 where only the 52 LSBs are used, one bit per card.
/// A single word for the full set means no heap allocation, O(1) union,
/// difference and membership, and a deterministic ascending iteration order.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
    /// union of two disjoint sets
    pub fn add(lhs: Self, rhs: Self) -> Self {
        debug_assert!(lhs.0 & rhs.0 == 0);
        Self(lhs.0 | rhs.0)
    }
    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn minus(&self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
    pub fn overlap(&self, other: Self) -> Self {
        Self(self.0 & other.0)
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    /// the subset of this hand in one suit
    pub fn of(&self, suit: &Suit) -> Hand {
        Self(self.0 & u64::from(*suit))
    }
    pub fn insert(&mut self, card: Card) {
        self.0 |= u64::from(card);
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
    pub fn lowest(&self) -> Option<Card> {
        match self.0 {
            0 => None,
            n => Some(Card::from(n.trailing_zeros() as u8)),
        }
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        let card = self.lowest()?;
        self.remove(card);
        Some(card)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.size(), Some(self.size()))
    }
}

/// u64 isomorphism
/// we SUM/OR the cards to get the bitstring
/// [2c, Ts, Jc, Js]
/// xxxxxxxxxxxx 0000000000001001100000000000000000000000000000000001
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        Self(cards.iter().map(|c| u64::from(*c)).fold(0u64, |a, b| a | b))
    }
}
impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self(iter.into_iter().map(u64::from).fold(0u64, |a, b| a | b))
    }
}

/// one-way conversion to u16 Rank masks
/// zero-allocation, zero iteration. just shredding bits
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        let mut x = u64::from(h);
        x |= x >> 1;
        x |= x >> 2;
        x &= 0x1111111111111;
        let mut y = u64::default();
        y |= (x >> 00) & 0x0001;
        y |= (x >> 03) & 0x0002;
        y |= (x >> 06) & 0x0004;
        y |= (x >> 09) & 0x0008;
        y |= (x >> 12) & 0x0010;
        y |= (x >> 15) & 0x0020;
        y |= (x >> 18) & 0x0040;
        y |= (x >> 21) & 0x0080;
        y |= (x >> 24) & 0x0100;
        y |= (x >> 27) & 0x0200;
        y |= (x >> 30) & 0x0400;
        y |= (x >> 33) & 0x0800;
        y |= (x >> 36) & 0x1000;
        y as u16
    }
}

/// str isomorphism, duplicates collapse into the set
impl TryFrom<&str> for Hand {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Card::parse(s).map(|cards| Self::from(cards.as_slice()))
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.into_iter().map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}
