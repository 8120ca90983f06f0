use crate::MAX_PLAYERS;
use crate::cards::Category;
use crate::cards::Hand;
use crate::cards::Strength;

/// Raw outcome counts for one seat.
///
/// `ties[k]` counts completions where this seat split the pot in a group of
/// `k` players, so the exact split share is recoverable without floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    wins: u64,
    ties: [u64; MAX_PLAYERS + 1],
    losses: u64,
    categories: [u64; Category::COUNT],
}

impl Default for Record {
    fn default() -> Self {
        Self {
            wins: 0,
            ties: [0; MAX_PLAYERS + 1],
            losses: 0,
            categories: [0; Category::COUNT],
        }
    }
}

impl Record {
    pub fn wins(&self) -> u64 {
        self.wins
    }
    pub fn losses(&self) -> u64 {
        self.losses
    }
    /// completions ending in any split
    pub fn ties(&self) -> u64 {
        self.ties.iter().sum()
    }
    /// splits in a group of exactly `k` players
    pub fn ties_of(&self, k: usize) -> u64 {
        self.ties.get(k).copied().unwrap_or(0)
    }
    /// pots won, counting a k-way split as 1/k
    pub fn shares(&self) -> f64 {
        self.ties
            .iter()
            .enumerate()
            .skip(2)
            .map(|(k, n)| *n as f64 / k as f64)
            .sum::<f64>()
            + self.wins as f64
    }
    pub fn category(&self, category: Category) -> u64 {
        self.categories[category.index()]
    }
    fn merge(mut self, other: Self) -> Self {
        self.wins += other.wins;
        self.losses += other.losses;
        self.ties
            .iter_mut()
            .zip(other.ties)
            .for_each(|(a, b)| *a += b);
        self.categories
            .iter_mut()
            .zip(other.categories)
            .for_each(|(a, b)| *a += b);
        self
    }
}

/// Outcome counters for a whole run, one [`Record`] per seat.
///
/// Each parallel task folds completions into its own `Tally`. Tallies are then
/// combined once with [`Tally::merge`], which only sums counters, so the result
/// does not depend on how work was split across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    seats: Vec<Record>,
    total: u64,
    splits: u64,
}

impl From<usize> for Tally {
    fn from(n: usize) -> Self {
        Self {
            seats: vec![Record::default(); n],
            total: 0,
            splits: 0,
        }
    }
}

impl Tally {
    pub fn total(&self) -> u64 {
        self.total
    }
    /// completions where two or more seats shared the best hand
    pub fn splits(&self) -> u64 {
        self.splits
    }
    pub fn seats(&self) -> &[Record] {
        &self.seats
    }
    pub fn merge(self, other: Self) -> Self {
        debug_assert!(self.seats.len() == other.seats.len());
        Self {
            seats: self
                .seats
                .into_iter()
                .zip(other.seats)
                .map(|(a, b)| a.merge(b))
                .collect(),
            total: self.total + other.total,
            splits: self.splits + other.splits,
        }
    }

    /// Showdown of one completed deal: five board cards and two cards per seat.
    pub fn witness(&mut self, board: Hand, holes: &[Hand]) {
        debug_assert!(holes.len() == self.seats.len());
        debug_assert!(holes.len() <= MAX_PLAYERS);
        let mut strengths = [None::<Strength>; MAX_PLAYERS];
        for (slot, hole) in strengths.iter_mut().zip(holes) {
            *slot = Some(Strength::from(Hand::add(board, *hole)));
        }
        let strengths = &strengths[..holes.len()];
        let best = strengths.iter().flatten().max().copied();
        let winners = strengths.iter().filter(|s| **s == best).count();
        for (record, strength) in self.seats.iter_mut().zip(strengths.iter().flatten()) {
            record.categories[strength.category().index()] += 1;
            match Some(*strength) == best {
                false => record.losses += 1,
                true if winners == 1 => record.wins += 1,
                true => record.ties[winners] += 1,
            }
        }
        self.total += 1;
        if winners > 1 {
            self.splits += 1;
        }
    }
}
