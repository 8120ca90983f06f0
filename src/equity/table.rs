use super::seat::Seat;
use crate::BOARD_SIZE;
use crate::Capacity;
use crate::Error;
use crate::MAX_PLAYERS;
use crate::MIN_PLAYERS;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::choose;

/// A validated deal: seats, board and dead cards that fit one deck.
///
/// Every bound is checked here, before any enumeration starts. Once built, the
/// unknown slots can always be dealt from the residual deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    seats: Vec<Seat>,
    board: Hand,
    dead: Hand,
    deck: Deck,
}

impl Table {
    pub fn new(seats: Vec<Seat>, board: &[Card], dead: &[Card]) -> Result<Self, Error> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&seats.len()) {
            return Err(Capacity::Players(seats.len()).into());
        }
        if board.len() > BOARD_SIZE {
            return Err(Capacity::Board(board.len()).into());
        }
        let assigned = seats
            .iter()
            .flat_map(|seat| seat.known())
            .chain(board.iter().copied())
            .chain(dead.iter().copied())
            .collect::<Vec<Card>>();
        let deck = Deck::residual(&assigned)?;
        let this = Self {
            board: Hand::from(board),
            dead: Hand::from(dead),
            deck,
            seats,
        };
        match this.slots() {
            slots if slots > deck.size() => Err(Capacity::Deck {
                slots,
                cards: deck.size(),
            }
            .into()),
            _ => Ok(this),
        }
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn board(&self) -> Hand {
        self.board
    }
    pub fn dead(&self) -> Hand {
        self.dead
    }
    pub fn deck(&self) -> Deck {
        self.deck
    }
    /// unknown cards across the board and every seat
    pub fn slots(&self) -> usize {
        Self::groups(&self.seats, self.board).into_iter().sum()
    }
    /// distinct completions an exhaustive run visits
    pub fn combinations(&self) -> u64 {
        Self::count(&self.seats, self.board, self.deck)
    }

    /// Unknown slot counts, board first, then one entry per seat.
    pub fn groups(seats: &[Seat], board: Hand) -> Vec<usize> {
        std::iter::once(BOARD_SIZE.saturating_sub(board.size()))
            .chain(seats.iter().map(Seat::missing))
            .collect()
    }
    /// Product of binomials over the slot groups, each drawn from what the
    /// previous groups left behind. Saturates at `u64::MAX`.
    pub fn count(seats: &[Seat], board: Hand, deck: Deck) -> u64 {
        Self::groups(seats, board)
            .into_iter()
            .scan(deck.size() as u64, |left, k| {
                let n = *left;
                *left = left.saturating_sub(k as u64);
                Some(choose(n, k as u64))
            })
            .fold(1u64, |a, b| a.saturating_mul(b))
    }
}
