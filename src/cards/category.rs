/// The nine hand classes, weakest first.
///
/// A lossy projection of [`Ranking`] used to bucket outcomes for statistics.
///
/// [`Ranking`]: super::ranking::Ranking
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOAK = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOAK = 7,
    StraightFlush = 8,
}

impl Category {
    pub const COUNT: usize = 9;

    pub const fn all() -> [Self; Self::COUNT] {
        [
            Self::HighCard,
            Self::OnePair,
            Self::TwoPair,
            Self::ThreeOAK,
            Self::Straight,
            Self::Flush,
            Self::FullHouse,
            Self::FourOAK,
            Self::StraightFlush,
        ]
    }
    pub const fn index(&self) -> usize {
        *self as usize
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::HighCard => "High Card",
            Self::OnePair => "Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOAK => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOAK => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
