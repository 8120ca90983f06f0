use super::category::Category;
use super::evaluator::Evaluator;
use super::hand::Hand;
use super::hands::HandIterator;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;

/// A fully-evaluated hand strength for comparison.
///
/// Combines a [`Ranking`] (hand category like flush or two pair) with
/// [`Kickers`] (tie-breaking cards). Ordering is lexicographic: ranking
/// first, then kickers. Two hands with equal strength split the pot,
/// whatever their suits.
///
/// Constructed from a [`Hand`] by running the [`Evaluator`].
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.value
    }
    pub fn kickers(&self) -> Kickers {
        self.kicks
    }
    pub fn category(&self) -> Category {
        self.value.category()
    }
    /// every rank that decides ties within the category, most significant first
    pub fn tiebreaks(&self) -> Vec<Rank> {
        let mut ranks = self.value.ranks();
        ranks.extend(Vec::<Rank>::from(self.kicks));
        ranks
    }
    /// the five cards of a 5 to 7 card hand that make its strength
    pub fn best_five(hand: Hand) -> Hand {
        let strength = Self::from(hand);
        HandIterator::from((5, hand.complement()))
            .find(|five| Self::from(*five) == strength)
            .unwrap_or(hand)
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<Evaluator> for Strength {
    fn from(e: Evaluator) -> Self {
        let value = e.find_ranking();
        let kicks = e.find_kickers(value);
        Self::from((value, kicks))
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self { value, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{:>5}", self.value, self.kicks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::cards::Deck;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rand::seq::SliceRandom;

    fn strength(cards: &str) -> Strength {
        Strength::from(Hand::try_from(cards).unwrap())
    }

    #[test]
    fn permutation_invariant() {
        let ref mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..256 {
            let mut deck = Deck::new();
            let mut cards = (0..7).map(|_| deck.draw(rng)).collect::<Vec<Card>>();
            let expected = Strength::from(cards.iter().copied().collect::<Hand>());
            cards.shuffle(rng);
            let shuffled = Strength::from(Hand::from(cards.as_slice()));
            assert_eq!(expected, shuffled);
        }
    }

    #[test]
    fn wheel_below_six_high_straight() {
        let wheel = strength("As 2h 3d 4c 5s 9h Kd");
        let six = strength("2h 3d 4c 5s 6h 9c Kd");
        assert_eq!(wheel.ranking(), Ranking::Straight(Rank::Five));
        assert_eq!(six.ranking(), Ranking::Straight(Rank::Six));
        assert!(wheel < six);
    }

    #[test]
    fn straight_flush_beats_everything_else() {
        let steel = strength("As 2s 3s 4s 5s");
        let ref mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..512 {
            let mut deck = Deck::new();
            let hand = (0..7).map(|_| deck.draw(rng)).collect::<Hand>();
            let other = Strength::from(hand);
            if other.category() != Category::StraightFlush {
                assert!(steel > other, "{} vs {}", steel, other);
            }
        }
        assert!(steel > strength("Ah Ad Ac As Kh Kd Ks"));
    }

    #[test]
    fn suits_never_break_ties() {
        let a = strength("As Ks Qd Jd Td 2c 3c");
        let b = strength("Ah Kh Qd Jd Td 2c 3c");
        assert_eq!(a, b);
        assert_eq!(a.ranking(), Ranking::Straight(Rank::Ace));
    }

    #[test]
    fn kickers_decide_within_category() {
        let a = strength("As Ah Kd Qc 9s 4h 2d");
        let b = strength("Ac Ad Kh Qs 8s 4c 2c");
        assert!(a > b);
        assert_eq!(a.tiebreaks(), vec![Rank::Ace, Rank::King, Rank::Queen, Rank::Nine]);
    }

    #[test]
    fn best_five_cards() {
        let hand = Hand::try_from("As Ah Kd Qc Js 3h 2d").unwrap();
        let five = Strength::best_five(hand);
        assert_eq!(five, Hand::try_from("As Ah Kd Qc Js").unwrap());
        let flush = Hand::try_from("Ah Kh 9h 5h 3h 2h Qs").unwrap();
        let five = Strength::best_five(flush);
        assert_eq!(five, Hand::try_from("Ah Kh 9h 5h 3h").unwrap());
    }

    #[test]
    fn best_five_only() {
        let a = strength("As Ah Kd Qc Js 3h 2d");
        let b = strength("Ac Ad Kh Qs Jc 4c 3c");
        assert_eq!(a, b);
    }
}
