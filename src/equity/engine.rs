use super::config::Config;
use super::dealing::Deal;
use super::mode::Mode;
use super::report::Report;
use super::sampler::Sampler;
use super::seat::Seat;
use super::table::Table;
use super::tally::Tally;
use crate::cards::Deck;
use crate::cards::Hand;
use std::time::Instant;

/// Drives completions of a deal and tabulates the showdowns.
///
/// The engine owns no state beyond its [`Config`]; each call is an independent
/// run over the seats, board and residual deck it is handed.
#[derive(Debug, Default, Clone, Copy)]
pub struct Engine {
    config: Config,
}

impl From<Config> for Engine {
    fn from(config: Config) -> Self {
        Self { config }
    }
}

impl Engine {
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The mode a run over this deal will use.
    ///
    /// Exhaustive walks never stop early, so a forced exhaustive run over the
    /// limit samples instead whenever a deadline is configured.
    pub fn resolve(&self, seats: &[Seat], board: Hand, deck: Deck) -> Mode {
        let combinations = Table::count(seats, board, deck);
        let limit = self.config.exhaustive_limit;
        let mode = match self.config.mode.resolve(combinations, limit) {
            Mode::Exhaustive if combinations > limit && self.config.deadline.is_some() => {
                log::warn!(
                    "exhaustive run over {} combinations (limit {}) cannot honour the deadline, sampling instead",
                    combinations,
                    limit
                );
                Mode::Sampling
            }
            Mode::Exhaustive if combinations > limit => {
                log::warn!("forced exhaustive run over {} combinations (limit {})", combinations, limit);
                Mode::Exhaustive
            }
            mode => mode,
        };
        log::debug!("{} combinations -> {}", combinations, mode);
        mode
    }

    /// Tallies completions of every unknown slot under `mode`.
    ///
    /// Accepts 1..=`MAX_PLAYERS` seats; a lone seat wins every completion.
    /// `Mode::Auto` is resolved here against the configured limit.
    pub fn enumerate(&self, seats: &[Seat], board: Hand, deck: Deck, mode: Mode) -> Tally {
        assert!(
            (1..=crate::MAX_PLAYERS).contains(&seats.len()),
            "{} seats, expected 1..={}",
            seats.len(),
            crate::MAX_PLAYERS
        );
        let deal = Deal::new(seats, board);
        match mode {
            Mode::Auto => self.enumerate(seats, board, deck, self.resolve(seats, board, deck)),
            Mode::Exhaustive => deal.exhaust(deck),
            Mode::Sampling => {
                let seed = self.config.seed.unwrap_or_else(rand::random::<u64>);
                let deadline = self.config.deadline.map(|d| Instant::now() + d);
                log::debug!("sampling {} completions with seed {}", self.config.samples, seed);
                let tally = Sampler::new(&deal, deck, seed)
                    .with_chunk(self.config.chunk)
                    .with_deadline(deadline)
                    .sample(self.config.samples);
                if tally.total() < self.config.samples {
                    log::warn!(
                        "deadline reached after {} of {} samples",
                        tally.total(),
                        self.config.samples
                    );
                }
                tally
            }
        }
    }

    /// Full run over a validated table: mode selection, enumeration, aggregation.
    pub fn run(&self, table: &Table) -> Report {
        let start = Instant::now();
        let mode = self.resolve(table.seats(), table.board(), table.deck());
        let tally = self.enumerate(table.seats(), table.board(), table.deck(), mode);
        let report = Report::from((tally, mode, start.elapsed())).reveal(table);
        log::debug!(
            "{} seats, {} iterations, {} in {:.3}s",
            table.seats().len(),
            report.iterations(),
            report.mode(),
            report.elapsed().as_secs_f64()
        );
        report
    }
}
