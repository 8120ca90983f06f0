use super::rank::Rank;

/// A hand's kicker cards, as a u16 rank mask.
///
/// Kickers are distinct ranks, and within one [`Ranking`] their count is fixed,
/// so comparing masks numerically is the same as comparing the ranks
/// lexicographically from highest to lowest.
///
/// [`Ranking`]: super::ranking::Ranking
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(u16);

impl Kickers {
    /// keeps the `n` highest ranks of a mask
    pub fn top(mut ranks: u16, n: usize) -> Self {
        while ranks.count_ones() as usize > n {
            ranks &= ranks - 1;
        }
        Self(ranks)
    }
}

/// u16 isomorphism
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u16> for Kickers {
    fn from(n: u16) -> Self {
        Self(n & Rank::mask())
    }
}

/// Vec<Rank> isomorphism, highest rank first
///
/// [K, 9, 2]
/// xxx 0100010000001
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        Rank::all()
            .into_iter()
            .rev()
            .filter(|r| k.0 & u16::from(*r) != 0)
            .collect()
    }
}
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks.iter().map(|r| u16::from(*r)).fold(0u16, |a, b| a | b))
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Vec::<Rank>::from(*self) {
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_keeps_highest() {
        let kicks = Kickers::top(0b_1000100010011, 3);
        assert_eq!(Vec::<Rank>::from(kicks), vec![Rank::Ace, Rank::Ten, Rank::Six]);
    }

    #[test]
    fn mask_order_is_lexicographic() {
        let a = Kickers::from(vec![Rank::King, Rank::Three]);
        let b = Kickers::from(vec![Rank::Queen, Rank::Jack]);
        assert!(a > b);
    }
}
