use super::category::Category;
use super::rank::Rank;

/// A poker hand's value, without kickers.
///
/// Variants are declared weakest first so the derived `Ord` ranks categories,
/// then the defining ranks within a category. The [`Kickers`] break what is left.
///
/// [`Kickers`]: super::kicks::Kickers
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard(Rank),        // 4 kickers
    OnePair(Rank),         // 3 kickers
    TwoPair(Rank, Rank),   // 1 kickers
    ThreeOAK(Rank),        // 2 kickers
    Straight(Rank),        // 0 kickers
    Flush(Rank),           // 4 kickers
    FullHouse(Rank, Rank), // 0 kickers
    FourOAK(Rank),         // 1 kickers
    StraightFlush(Rank),   // 0 kickers
}

impl Ranking {
    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard(_) | Ranking::Flush(_) => 4,
            Ranking::OnePair(_) => 3,
            Ranking::ThreeOAK(_) => 2,
            Ranking::FourOAK(_) | Ranking::TwoPair(_, _) => 1,
            Ranking::Straight(_) | Ranking::FullHouse(_, _) | Ranking::StraightFlush(_) => 0,
        }
    }
    /// ranks excluded from kicker selection
    pub fn mask(&self) -> u16 {
        match *self {
            Ranking::TwoPair(hi, lo) | Ranking::FullHouse(hi, lo) => {
                !(u16::from(hi) | u16::from(lo))
            }
            Ranking::HighCard(hi)
            | Ranking::OnePair(hi)
            | Ranking::ThreeOAK(hi)
            | Ranking::Straight(hi)
            | Ranking::Flush(hi)
            | Ranking::FourOAK(hi)
            | Ranking::StraightFlush(hi) => !u16::from(hi),
        }
    }
    /// the ranks that define this hand, most significant first
    pub fn ranks(&self) -> Vec<Rank> {
        match *self {
            Ranking::TwoPair(hi, lo) | Ranking::FullHouse(hi, lo) => vec![hi, lo],
            Ranking::HighCard(hi)
            | Ranking::OnePair(hi)
            | Ranking::ThreeOAK(hi)
            | Ranking::Straight(hi)
            | Ranking::Flush(hi)
            | Ranking::FourOAK(hi)
            | Ranking::StraightFlush(hi) => vec![hi],
        }
    }
    pub fn category(&self) -> Category {
        match self {
            Ranking::HighCard(_) => Category::HighCard,
            Ranking::OnePair(_) => Category::OnePair,
            Ranking::TwoPair(_, _) => Category::TwoPair,
            Ranking::ThreeOAK(_) => Category::ThreeOAK,
            Ranking::Straight(_) => Category::Straight,
            Ranking::Flush(_) => Category::Flush,
            Ranking::FullHouse(_, _) => Category::FullHouse,
            Ranking::FourOAK(_) => Category::FourOAK,
            Ranking::StraightFlush(_) => Category::StraightFlush,
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::FullHouse(r1, r2) => write!(f, "FullHouse     {}{}", r1, r2),
            Ranking::TwoPair(r1, r2) => write!(f, "TwoPair       {}{}", r1, r2),
            Ranking::HighCard(r) => write!(f, "HighCard      {} ", r),
            Ranking::OnePair(r) => write!(f, "OnePair       {} ", r),
            Ranking::ThreeOAK(r) => write!(f, "ThreeOfAKind  {} ", r),
            Ranking::Straight(r) => write!(f, "Straight      {} ", r),
            Ranking::FourOAK(r) => write!(f, "FourOfAKind   {} ", r),
            Ranking::Flush(r) => write!(f, "Flush         {} ", r),
            Ranking::StraightFlush(r) => write!(f, "StraightFlush {} ", r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_outrank_ranks() {
        assert!(Ranking::OnePair(Rank::Two) > Ranking::HighCard(Rank::Ace));
        assert!(Ranking::Flush(Rank::Seven) > Ranking::Straight(Rank::Ace));
        assert!(Ranking::FullHouse(Rank::Two, Rank::Three) > Ranking::Flush(Rank::Ace));
        assert!(Ranking::StraightFlush(Rank::Five) > Ranking::FourOAK(Rank::Ace));
    }

    #[test]
    fn ranks_break_ties_within_category() {
        assert!(Ranking::TwoPair(Rank::Ace, Rank::Two) > Ranking::TwoPair(Rank::King, Rank::Queen));
        assert!(Ranking::FullHouse(Rank::Three, Rank::Two) > Ranking::FullHouse(Rank::Two, Rank::Ace));
        assert!(Ranking::Straight(Rank::Six) > Ranking::Straight(Rank::Five));
    }
}
