use super::engine::Engine;
use super::seat::Seat;
use crate::BOARD_SIZE;
use crate::Capacity;
use crate::Error;
use crate::HOLE_SIZE;
use crate::Probability;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::HandIterator;
use rayon::prelude::*;
use std::time::Duration;
use std::time::Instant;

/// Fewest board cards a showdown percentage is defined for.
const MIN_STREET: usize = 3;

/// How often a known hand is a favourite against a random holding.
///
/// Every opponent hole pair left in the deck is played heads-up against the
/// hero. The showdown percentage is the fraction of those holdings against
/// which the hero's win rate, rounded to a tenth of a percent, exceeds 50%.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Showdown {
    hero: Seat,
    board: Hand,
    deck: Deck,
}

/// Outcome of a [`Showdown`] run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    pub favourite: Probability,
    pub holdings: u64,
    pub elapsed: Duration,
}

impl Showdown {
    pub fn new(hero: &[Card], board: &[Card]) -> Result<Self, Error> {
        if hero.len() != HOLE_SIZE {
            return Err(Capacity::Hero(hero.len()).into());
        }
        if !(MIN_STREET..=BOARD_SIZE).contains(&board.len()) {
            return Err(Capacity::Street(board.len()).into());
        }
        let assigned = hero.iter().chain(board).copied().collect::<Vec<Card>>();
        Ok(Self {
            deck: Deck::residual(&assigned)?,
            hero: Seat::try_from(hero)?,
            board: Hand::from(board),
        })
    }

    /// Plays every opponent holding in parallel. Sampled runs draw
    /// `showdown_samples` completions each, seeded per holding when a seed is set.
    pub fn run(&self, engine: &Engine) -> Verdict {
        let start = Instant::now();
        let config = *engine.config();
        let config = config.with_samples(config.showdown_samples);
        let holdings = HandIterator::from((HOLE_SIZE, self.deck.dealt())).collect::<Vec<Hand>>();
        let favourite = holdings
            .par_iter()
            .enumerate()
            .filter(|(i, villain)| {
                let seed = config.seed.map(|s| s.wrapping_add(*i as u64));
                let engine = Engine::from(config.with_seed(seed));
                let seats = [self.hero, Seat::from(**villain)];
                let mut deck = self.deck;
                deck.remove(**villain);
                let mode = engine.resolve(&seats, self.board, deck);
                let tally = engine.enumerate(&seats, self.board, deck, mode);
                favours(tally.seats()[0].wins(), tally.total())
            })
            .count();
        let verdict = Verdict {
            favourite: match holdings.len() {
                0 => 0.,
                n => favourite as f64 / n as f64,
            },
            holdings: holdings.len() as u64,
            elapsed: start.elapsed(),
        };
        log::debug!(
            "{} on {}: favourite against {} of {} holdings",
            self.hero,
            self.board,
            favourite,
            holdings.len()
        );
        verdict
    }
}

/// Win rate as a percentage rounded to one place, strictly above one half.
fn favours(wins: u64, total: u64) -> bool {
    match total {
        0 => false,
        n => (wins as f64 / n as f64 * 1000.).round() / 10. > 50.,
    }
}
