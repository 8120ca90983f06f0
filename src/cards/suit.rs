/// Card suit. Suits carry no ranking power.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    pub const fn all() -> [Self; 4] {
        [Self::Club, Self::Diamond, Self::Heart, Self::Spade]
    }
    pub const fn symbol(&self) -> char {
        match self {
            Self::Club => 'c',
            Self::Diamond => 'd',
            Self::Heart => 'h',
            Self::Spade => 's',
        }
    }
}

impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Club,
            1 => Suit::Diamond,
            2 => Suit::Heart,
            3 => Suit::Spade,
            _ => panic!("invalid suit u8: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u64 injection
/// every card of this suit, as a 52-bit set
/// c
/// xxxxxxxxxxxx 0001000100010001000100010001000100010001000100010001
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        0x0001111111111111 << u8::from(s)
    }
}

/// accepts letters in either case and the four suit glyphs
impl TryFrom<char> for Suit {
    type Error = char;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'c' | 'C' | '♣' | '♧' => Ok(Suit::Club),
            'd' | 'D' | '♦' | '♢' => Ok(Suit::Diamond),
            'h' | 'H' | '♥' | '♡' => Ok(Suit::Heart),
            's' | 'S' | '♠' | '♤' => Ok(Suit::Spade),
            _ => Err(c),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
