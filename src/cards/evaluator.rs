use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use super::suit::Suit;

const WHEEL: u16 = 0b_1000000001111;
const LOWEST_STRAIGHT_RANK: Rank = Rank::Five;

/// A histogram evaluator for a 5 to 7 card hand.
///
/// Rank counts and per-suit rank masks are built once from the Hand. Every
/// category check and every kicker selection then reads those histograms with
/// bitwise operations, so the best five cards are found without enumerating
/// the C(7,5) subsets.
pub struct Evaluator {
    ranks: u16,
    pairs: u16,
    trips: u16,
    quads: u16,
    suits: [u16; 4],
}

impl From<Hand> for Evaluator {
    fn from(hand: Hand) -> Self {
        debug_assert!(hand.size() > 0);
        let mut counts = [0u8; 13];
        let mut suits = [0u16; 4];
        for card in hand {
            counts[card.rank() as usize] += 1;
            suits[card.suit() as usize] |= u16::from(card.rank());
        }
        let mut this = Self {
            ranks: 0,
            pairs: 0,
            trips: 0,
            quads: 0,
            suits,
        };
        for (i, n) in counts.into_iter().enumerate() {
            let bit = 1u16 << i;
            match n {
                0 => continue,
                1 => {}
                2 => this.pairs |= bit,
                3 => this.trips |= bit,
                _ => this.quads |= bit,
            }
            this.ranks |= bit;
        }
        this
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .unwrap_or_else(|| self.find_1_oak())
    }
    pub fn find_kickers(&self, ranking: Ranking) -> Kickers {
        match ranking.n_kickers() {
            0 => Kickers::default(),
            n => {
                let pool = match ranking {
                    Ranking::Flush(_) => self.flush_ranks().unwrap_or_default(),
                    _ => self.ranks,
                };
                Kickers::top(pool & ranking.mask(), n)
            }
        }
    }

    fn find_1_oak(&self) -> Ranking {
        Ranking::HighCard(Rank::from(self.ranks))
    }
    fn find_2_oak(&self) -> Option<Ranking> {
        self.pairs
            .ne(&0)
            .then(|| Ranking::OnePair(Rank::from(self.pairs)))
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        (self.pairs.count_ones() >= 2).then(|| {
            let hi = Rank::from(self.pairs);
            let lo = Rank::from(self.pairs & !u16::from(hi));
            Ranking::TwoPair(hi, lo)
        })
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.trips
            .ne(&0)
            .then(|| Ranking::ThreeOAK(Rank::from(self.trips)))
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.quads
            .ne(&0)
            .then(|| Ranking::FourOAK(Rank::from(self.quads)))
    }
    /// a second set of trips plays as the pair
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        match self.trips {
            0 => None,
            trips => {
                let triple = Rank::from(trips);
                let paired = (trips & !u16::from(triple)) | self.pairs;
                match paired {
                    0 => None,
                    paired => Some(Ranking::FullHouse(triple, Rank::from(paired))),
                }
            }
        }
    }
    fn find_straight(&self) -> Option<Ranking> {
        Self::find_rank_of_straight(self.ranks).map(Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.flush_ranks()
            .map(|ranks| Ranking::Flush(Rank::from(ranks)))
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.flush_ranks()
            .and_then(Self::find_rank_of_straight)
            .map(Ranking::StraightFlush)
    }

    /// ranks of the (at most one, with seven cards) suit holding five or more cards
    fn flush_ranks(&self) -> Option<u16> {
        Suit::all()
            .into_iter()
            .map(|s| self.suits[s as usize])
            .find(|ranks| ranks.count_ones() >= 5)
    }
    /// bit i survives the shifts iff ranks i-4..=i are all present
    fn find_rank_of_straight(ranks: u16) -> Option<Rank> {
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if WHEEL == (WHEEL & ranks) {
            Some(LOWEST_STRAIGHT_RANK)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(cards: &str) -> (Ranking, Kickers) {
        let eval = Evaluator::from(Hand::try_from(cards).unwrap());
        let ranking = eval.find_ranking();
        let kickers = eval.find_kickers(ranking);
        (ranking, kickers)
    }

    #[rustfmt::skip]
    #[test]
    fn high_card() {
        let (ranking, kickers) = evaluate("As Kh Qd Jc 9s");
        assert_eq!(ranking, Ranking::HighCard(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]));
    }

    #[test]
    fn one_pair() {
        let (ranking, kickers) = evaluate("As Ah Kd Qc Js");
        assert_eq!(ranking, Ranking::OnePair(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack]));
    }

    #[test]
    fn two_pair() {
        let (ranking, kickers) = evaluate("As Ah Kd Kc Qs");
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn three_oak() {
        let (ranking, kickers) = evaluate("As Ah Ad Kc Qs");
        assert_eq!(ranking, Ranking::ThreeOAK(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen]));
    }

    #[test]
    fn straight() {
        let (ranking, kickers) = evaluate("Ts Jh Qd Kc As");
        assert_eq!(ranking, Ranking::Straight(Rank::Ace));
        assert_eq!(kickers, Kickers::default());
    }

    #[test]
    fn flush() {
        let (ranking, kickers) = evaluate("As Ks Qs Js 9s");
        assert_eq!(ranking, Ranking::Flush(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]));
    }

    #[test]
    fn full_house() {
        let (ranking, kickers) = evaluate("2s 2h 2d 3c 3s");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Two, Rank::Three));
        assert_eq!(kickers, Kickers::default());
    }

    #[test]
    fn four_oak() {
        let (ranking, kickers) = evaluate("As Ah Ad Ac Ks");
        assert_eq!(ranking, Ranking::FourOAK(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King]));
    }

    #[test]
    fn straight_flush() {
        let (ranking, _) = evaluate("Ts Js Qs Ks As");
        assert_eq!(ranking, Ranking::StraightFlush(Rank::Ace));
    }

    #[test]
    fn wheel_straight() {
        let (ranking, kickers) = evaluate("As 2h 3d 4c 5s");
        assert_eq!(ranking, Ranking::Straight(Rank::Five));
        assert_eq!(kickers, Kickers::default());
    }

    #[test]
    fn wheel_straight_flush() {
        let (ranking, _) = evaluate("As 2s 3s 4s 5s");
        assert_eq!(ranking, Ranking::StraightFlush(Rank::Five));
    }

    #[test]
    fn seven_card_hand() {
        let (ranking, kickers) = evaluate("As Ah Kd Kc Qs Jh 9d");
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn flush_over_straight() {
        let (ranking, kickers) = evaluate("4h 6h 7h 8h 9h Ts 2h");
        assert_eq!(ranking, Ranking::Flush(Rank::Nine));
        assert_eq!(kickers, Kickers::from(vec![Rank::Eight, Rank::Seven, Rank::Six, Rank::Four]));
    }

    #[test]
    fn flush_kickers_ignore_offsuit_ranks() {
        let (ranking, kickers) = evaluate("Ah Kh 9h 5h 2h Qs Jd");
        assert_eq!(ranking, Ranking::Flush(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Nine, Rank::Five, Rank::Two]));
    }

    #[test]
    fn six_card_flush_keeps_top_five() {
        let (ranking, kickers) = evaluate("Ah Kh 9h 5h 3h 2h Qs");
        assert_eq!(ranking, Ranking::Flush(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Nine, Rank::Five, Rank::Three]));
    }

    #[test]
    fn full_house_over_flush() {
        let (ranking, _) = evaluate("Kh Ah Ad As Ks Qs Js");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Ace, Rank::King));
    }

    #[test]
    fn four_oak_over_full_house() {
        let (ranking, kickers) = evaluate("As Ah Ad Ac Ks Kh Qd");
        assert_eq!(ranking, Ranking::FourOAK(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King]));
    }

    #[test]
    fn straight_flush_over_trips() {
        let (ranking, _) = evaluate("9s Ts Js Qs Ks Kh Kd");
        assert_eq!(ranking, Ranking::StraightFlush(Rank::King));
    }

    #[test]
    fn straight_and_flush_apart_is_flush() {
        let (ranking, _) = evaluate("2s 3s 4s 5d 6s 9s Kc");
        assert_eq!(ranking, Ranking::Flush(Rank::Nine));
    }

    #[test]
    fn low_straight() {
        let (ranking, _) = evaluate("As 2s 3h 4d 5c 6s");
        assert_eq!(ranking, Ranking::Straight(Rank::Six));
    }

    #[test]
    fn three_pair() {
        let (ranking, kickers) = evaluate("As Ah Kd Kc Qs Qh Jd");
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn two_three_oak() {
        let (ranking, _) = evaluate("As Ah Ad Kc Ks Kh Qd");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Ace, Rank::King));
    }

    #[test]
    fn trips_with_two_pairs() {
        let (ranking, _) = evaluate("2s 2h 2d 3c 3s 4c 4d");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Two, Rank::Four));
    }

    #[test]
    fn quads_kicker_from_trips() {
        let (ranking, kickers) = evaluate("7s 7h 7d 7c 3s 3h 3d");
        assert_eq!(ranking, Ranking::FourOAK(Rank::Seven));
        assert_eq!(kickers, Kickers::from(vec![Rank::Three]));
    }
}
