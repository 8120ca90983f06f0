use super::dealing::Deal;
use super::tally::Tally;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hand;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use std::time::Instant;

/// Uniform random completions of a [`Deal`], drawn without replacement.
///
/// Samples run in fixed-size chunks. Chunk `c` owns a [`SmallRng`] seeded from
/// `(seed, c)`, so a given seed reproduces the same tally whatever the size of
/// the thread pool. A deadline is checked before each chunk starts; chunks that
/// start late contribute nothing and the tally reports what actually ran.
pub struct Sampler<'a> {
    deal: &'a Deal,
    cards: Vec<Card>,
    chunk: u64,
    seed: u64,
    deadline: Option<Instant>,
}

impl<'a> Sampler<'a> {
    pub fn new(deal: &'a Deal, deck: Deck, seed: u64) -> Self {
        Self {
            deal,
            cards: deck.cards(),
            chunk: crate::SAMPLE_CHUNK,
            seed,
            deadline: None,
        }
    }
    pub fn with_chunk(self, chunk: u64) -> Self {
        Self {
            chunk: chunk.max(1),
            ..self
        }
    }
    pub fn with_deadline(self, deadline: Option<Instant>) -> Self {
        Self { deadline, ..self }
    }

    pub fn sample(&self, samples: u64) -> Tally {
        let n = self.deal.seats();
        (0..samples.div_ceil(self.chunk))
            .into_par_iter()
            .map(|c| match self.expired() {
                true => Tally::from(n),
                false => self.run(c, self.chunk.min(samples - c * self.chunk)),
            })
            .reduce(|| Tally::from(n), Tally::merge)
    }

    fn run(&self, index: u64, size: u64) -> Tally {
        let ref mut rng = SmallRng::seed_from_u64(self.derive(index));
        let ref mut cards = self.cards.clone();
        let slots = self.deal.slots();
        let mut tally = Tally::from(self.deal.seats());
        let mut board = Hand::empty();
        let mut holes = self.deal.holes().to_vec();
        for _ in 0..size {
            let (drawn, _) = cards.partial_shuffle(rng, slots);
            self.deal.fill(drawn.iter().copied(), &mut board, &mut holes);
            tally.witness(board, &holes);
        }
        tally
    }

    /// chunk seed; `seed_from_u64` expands it into unrelated streams
    fn derive(&self, index: u64) -> u64 {
        self.seed ^ index.wrapping_add(1).wrapping_mul(0x9E3779B97F4A7C15)
    }

    fn expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}
