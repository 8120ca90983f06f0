use crate::Capacity;
use crate::Error;
use crate::HOLE_SIZE;
use crate::cards::Card;
use crate::cards::Hand;

/// One player's hole cards.
///
/// Zero, one or both cards may be known. Missing cards are unknown slots that
/// the engine deals from the residual deck on every completion.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Seat(Hand);

impl Seat {
    pub fn unknown() -> Self {
        Self(Hand::empty())
    }
    pub fn known(&self) -> Hand {
        self.0
    }
    /// unknown slots left to deal
    pub fn missing(&self) -> usize {
        HOLE_SIZE - self.0.size()
    }
    pub fn is_complete(&self) -> bool {
        self.missing() == 0
    }
}

impl From<Hand> for Seat {
    fn from(hand: Hand) -> Self {
        debug_assert!(hand.size() <= HOLE_SIZE);
        Self(hand)
    }
}

/// Known cards, at most two of them, each once.
impl TryFrom<&[Card]> for Seat {
    type Error = Error;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        if cards.len() > HOLE_SIZE {
            return Err(Capacity::Hole(cards.len()).into());
        }
        let mut hand = Hand::empty();
        for card in cards {
            if hand.contains(card) {
                return Err(Error::DuplicateCard(*card));
            }
            hand.insert(*card);
        }
        Ok(Self(hand))
    }
}

/// Seat notation: `"As|Kd"`, `"As Kd"`, `"As|?"`, `"?|?"` or `""`.
/// A `?` token stands for an unknown card.
impl TryFrom<&str> for Seat {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let tokens = s
            .split(|c: char| c == '|' || c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect::<Vec<&str>>();
        if tokens.len() > HOLE_SIZE {
            return Err(Capacity::Hole(tokens.len()).into());
        }
        let cards = tokens
            .into_iter()
            .filter(|t| *t != "?")
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, Error>>()?;
        Self::try_from(cards.as_slice())
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut tokens = self.0.into_iter().map(|c| c.to_string()).collect::<Vec<_>>();
        tokens.resize(HOLE_SIZE, String::from("?"));
        write!(f, "{}", tokens.join("|"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_notations() {
        let full = Seat::try_from("As|Kd").unwrap();
        assert!(full.is_complete());
        assert_eq!(full, Seat::try_from("Kd As").unwrap());
        assert_eq!(Seat::try_from("As|?").unwrap().missing(), 1);
        assert_eq!(Seat::try_from("?|?").unwrap(), Seat::unknown());
        assert_eq!(Seat::try_from("").unwrap().missing(), 2);
    }

    #[test]
    fn displays_unknowns() {
        assert_eq!(Seat::try_from("Kd As").unwrap().to_string(), "Kd|As");
        assert_eq!(Seat::try_from("?|Th").unwrap().to_string(), "Th|?");
        assert_eq!(Seat::unknown().to_string(), "?|?");
    }

    #[test]
    fn rejects_bad_seats() {
        assert_eq!(
            Seat::try_from("As Kd Qh"),
            Err(Error::Capacity(Capacity::Hole(3)))
        );
        assert_eq!(
            Seat::try_from("As|As"),
            Err(Error::DuplicateCard(Card::try_from("As").unwrap()))
        );
        assert_eq!(
            Seat::try_from("As|1x"),
            Err(Error::InvalidCard(String::from("1x")))
        );
    }
}
