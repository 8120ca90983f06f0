use crate::cards::Card;

/// Input errors raised while assembling a table, before any enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid card: {0:?}")]
    InvalidCard(String),
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
    #[error("capacity exceeded: {0}")]
    Capacity(Capacity),
}

/// Table bounds that a request can overrun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    Players(usize),
    Board(usize),
    Hole(usize),
    Hero(usize),
    Street(usize),
    Deck { slots: usize, cards: usize },
    Samples { samples: u64, max: u64 },
}

impl std::fmt::Display for Capacity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Players(n) => write!(
                f,
                "{} players, expected {}..={}",
                n,
                crate::MIN_PLAYERS,
                crate::MAX_PLAYERS
            ),
            Self::Board(n) => write!(f, "{} board cards, expected at most 5", n),
            Self::Hole(n) => write!(f, "{} hole cards, expected at most 2", n),
            Self::Hero(n) => write!(f, "{} hero cards, expected exactly 2", n),
            Self::Street(n) => write!(f, "{} board cards, expected 3..=5", n),
            Self::Deck { slots, cards } => {
                write!(f, "{} unknown cards to deal from {} remaining", slots, cards)
            }
            Self::Samples { samples, max } => {
                write!(f, "{} samples, expected 1..={}", samples, max)
            }
        }
    }
}

impl From<Capacity> for Error {
    fn from(c: Capacity) -> Self {
        Self::Capacity(c)
    }
}

impl Error {
    /// Short machine-friendly name, used by the REST boundary.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidCard(_) => "InvalidCard",
            Self::DuplicateCard(_) => "DuplicateCard",
            Self::Capacity(_) => "CapacityExceeded",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
