use super::seat::Seat;
use super::tally::Tally;
use crate::BOARD_SIZE;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::HandIterator;
use rayon::prelude::*;

/// Where a group of unknown cards lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Board,
    Seat(usize),
}

/// The fixed part of every completion plus the unknown slots to fill.
///
/// Groups are ordered board first, then seats in table order. Empty groups are
/// dropped, so a deal with no unknown cards has no groups and exactly one
/// completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    board: Hand,
    holes: Vec<Hand>,
    groups: Vec<(Slot, usize)>,
}

impl Deal {
    pub fn new(seats: &[Seat], board: Hand) -> Self {
        let groups = std::iter::once((Slot::Board, BOARD_SIZE.saturating_sub(board.size())))
            .chain(seats.iter().enumerate().map(|(i, s)| (Slot::Seat(i), s.missing())))
            .filter(|(_, k)| *k > 0)
            .collect();
        Self {
            board,
            holes: seats.iter().map(Seat::known).collect(),
            groups,
        }
    }
    pub fn seats(&self) -> usize {
        self.holes.len()
    }
    /// unknown cards per completion
    pub fn slots(&self) -> usize {
        self.groups.iter().map(|(_, k)| k).sum()
    }
    pub fn holes(&self) -> &[Hand] {
        &self.holes
    }

    /// Resets `board` and `holes` to the known cards, then deals `cards` into
    /// the slot groups in order.
    pub fn fill<I>(&self, cards: I, board: &mut Hand, holes: &mut [Hand])
    where
        I: IntoIterator<Item = Card>,
    {
        *board = self.board;
        holes.copy_from_slice(&self.holes);
        let mut cards = cards.into_iter();
        for &(slot, k) in self.groups.iter() {
            let fill = cards.by_ref().take(k).collect::<Hand>();
            Self::place(slot, fill, board, holes);
        }
    }

    /// Every assignment of residual cards to the unknown slots, each exactly once.
    ///
    /// Combinations of the first group are split across rayon tasks. Each task
    /// walks the remaining groups depth-first, masking out whatever the outer
    /// groups already took, and folds into a private [`Tally`].
    pub fn exhaust(&self, deck: Deck) -> Tally {
        let n = self.seats();
        let dealt = deck.dealt();
        match self.groups.split_first() {
            None => {
                let mut tally = Tally::from(n);
                tally.witness(self.board, &self.holes);
                tally
            }
            Some((&(slot, k), rest)) => HandIterator::from((k, dealt))
                .collect::<Vec<Hand>>()
                .into_par_iter()
                .fold(
                    || (Tally::from(n), self.holes.clone()),
                    |(mut tally, mut holes), fill| {
                        let mut board = self.board;
                        holes.copy_from_slice(&self.holes);
                        Self::place(slot, fill, &mut board, &mut holes);
                        self.descend(rest, Hand::add(dealt, fill), board, &mut holes, &mut tally);
                        (tally, holes)
                    },
                )
                .map(|(tally, _)| tally)
                .reduce(|| Tally::from(n), Tally::merge),
        }
    }

    fn descend(
        &self,
        groups: &[(Slot, usize)],
        dealt: Hand,
        board: Hand,
        holes: &mut [Hand],
        tally: &mut Tally,
    ) {
        match groups.split_first() {
            None => tally.witness(board, holes),
            Some((&(Slot::Board, k), rest)) => {
                for fill in HandIterator::from((k, dealt)) {
                    self.descend(rest, Hand::add(dealt, fill), Hand::add(board, fill), holes, tally);
                }
            }
            Some((&(Slot::Seat(i), k), rest)) => {
                let known = holes[i];
                for fill in HandIterator::from((k, dealt)) {
                    holes[i] = Hand::add(known, fill);
                    self.descend(rest, Hand::add(dealt, fill), board, holes, tally);
                }
                holes[i] = known;
            }
        }
    }

    fn place(slot: Slot, fill: Hand, board: &mut Hand, holes: &mut [Hand]) {
        match slot {
            Slot::Board => *board = Hand::add(*board, fill),
            Slot::Seat(i) => holes[i] = Hand::add(holes[i], fill),
        }
    }
}
