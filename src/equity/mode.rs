/// How completions of the unknown cards are produced.
///
/// `Auto` resolves to one of the other two before a run starts, so a finished
/// [`Report`] only ever carries `Exhaustive` or `Sampling`.
///
/// [`Report`]: super::report::Report
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Auto,
    Exhaustive,
    Sampling,
}

impl Mode {
    /// the automatic policy: enumerate everything while it stays affordable
    pub fn resolve(self, combinations: u64, limit: u64) -> Self {
        match self {
            Self::Auto if combinations <= limit => Self::Exhaustive,
            Self::Auto => Self::Sampling,
            forced => forced,
        }
    }
}

impl TryFrom<&str> for Mode {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "exhaustive" | "exact" => Ok(Self::Exhaustive),
            "sampling" | "sample" | "monte-carlo" => Ok(Self::Sampling),
            _ => Err(format!("unknown mode {:?}", s)),
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Exhaustive => write!(f, "exhaustive"),
            Self::Sampling => write!(f, "sampling"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_respects_limit() {
        assert_eq!(Mode::Auto.resolve(1_712_304, 2_000_000), Mode::Exhaustive);
        assert_eq!(Mode::Auto.resolve(2_000_001, 2_000_000), Mode::Sampling);
    }

    #[test]
    fn forced_modes_ignore_limit() {
        assert_eq!(Mode::Exhaustive.resolve(u64::MAX, 0), Mode::Exhaustive);
        assert_eq!(Mode::Sampling.resolve(1, 2_000_000), Mode::Sampling);
    }

    #[test]
    fn parses_aliases() {
        assert_eq!(Mode::try_from("Exact"), Ok(Mode::Exhaustive));
        assert_eq!("sampling".parse::<Mode>(), Ok(Mode::Sampling));
        assert!(Mode::try_from("fast").is_err());
    }
}
