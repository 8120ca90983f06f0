use super::mode::Mode;
use super::seat::Seat;
use super::table::Table;
use super::tally::Record;
use super::tally::Tally;
use crate::BOARD_SIZE;
use crate::Probability;
use crate::cards::Category;
use crate::cards::Hand;
use crate::cards::Strength;
use std::time::Duration;

/// A made hand: the strength of a fully known seat on a complete board, and
/// the five cards that make it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Made {
    pub strength: Strength,
    pub cards: Hand,
}

impl From<Hand> for Made {
    fn from(seven: Hand) -> Self {
        Self {
            strength: Strength::from(seven),
            cards: Strength::best_five(seven),
        }
    }
}

/// One seat's share of the run.
#[derive(Debug, Clone, PartialEq)]
pub struct Equity {
    seat: Seat,
    win: Probability,
    tie: Probability,
    loss: Probability,
    equity: Probability,
    categories: [Probability; Category::COUNT],
    made: Option<Made>,
}

impl Equity {
    pub fn seat(&self) -> Seat {
        self.seat
    }
    pub fn win(&self) -> Probability {
        self.win
    }
    pub fn tie(&self) -> Probability {
        self.tie
    }
    pub fn loss(&self) -> Probability {
        self.loss
    }
    /// expected share of the pot, splits counted exactly
    pub fn equity(&self) -> Probability {
        self.equity
    }
    pub fn category(&self, category: Category) -> Probability {
        self.categories[category.index()]
    }
    pub fn categories(&self) -> impl Iterator<Item = (Category, Probability)> + '_ {
        Category::all().into_iter().map(|c| (c, self.category(c)))
    }
    pub fn made(&self) -> Option<Made> {
        self.made
    }
}

impl From<(&Record, u64)> for Equity {
    fn from((record, total): (&Record, u64)) -> Self {
        let p = |n: f64| match total {
            0 => 0.,
            t => n / t as f64,
        };
        let mut categories = [0.; Category::COUNT];
        for category in Category::all() {
            categories[category.index()] = p(record.category(category) as f64);
        }
        Self {
            seat: Seat::unknown(),
            win: p(record.wins() as f64),
            tie: p(record.ties() as f64),
            loss: p(record.losses() as f64),
            equity: p(record.shares()),
            categories,
            made: None,
        }
    }
}

/// Probabilities derived from a finished [`Tally`], plus run metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    players: Vec<Equity>,
    iterations: u64,
    mode: Mode,
    ties: Probability,
    elapsed: Duration,
}

impl From<(Tally, Mode, Duration)> for Report {
    fn from((tally, mode, elapsed): (Tally, Mode, Duration)) -> Self {
        let total = tally.total();
        Self {
            players: tally
                .seats()
                .iter()
                .map(|record| Equity::from((record, total)))
                .collect(),
            iterations: total,
            ties: match total {
                0 => 0.,
                t => tally.splits() as f64 / t as f64,
            },
            mode,
            elapsed,
        }
    }
}

impl Report {
    /// Attaches each seat's cards and, on a complete board, its made hand.
    pub fn reveal(mut self, table: &Table) -> Self {
        let river = table.board().size() == BOARD_SIZE;
        for (equity, seat) in self.players.iter_mut().zip(table.seats()) {
            equity.seat = *seat;
            equity.made = (river && seat.is_complete())
                .then(|| Made::from(Hand::add(table.board(), seat.known())));
        }
        self
    }
    pub fn players(&self) -> &[Equity] {
        &self.players
    }
    pub fn iterations(&self) -> u64 {
        self.iterations
    }
    /// the mode actually used, never `Auto`
    pub fn mode(&self) -> Mode {
        self.mode
    }
    /// fraction of completions that ended in a split pot
    pub fn ties(&self) -> Probability {
        self.ties
    }
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "{:<8}{:>9}{:>9}{:>9}{:>9}  {}",
            "seat", "win", "tie", "loss", "equity", "made"
        )?;
        for equity in self.players.iter() {
            writeln!(
                f,
                "{:<8}{:>8.3}%{:>8.3}%{:>8.3}%{:>8.3}%  {}",
                equity.seat.to_string(),
                equity.win * 100.,
                equity.tie * 100.,
                equity.loss * 100.,
                equity.equity * 100.,
                equity
                    .made
                    .map(|m| format!("{} ({})", m.strength.category(), m.cards))
                    .unwrap_or_default(),
            )?;
        }
        write!(
            f,
            "{} iterations, {}, split pots {:.3}%, {:.3}s",
            self.iterations,
            self.mode,
            self.ties * 100.,
            self.elapsed.as_secs_f64()
        )
    }
}
