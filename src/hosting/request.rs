use crate::Capacity;
use crate::Error;
use crate::cards::Card;
use crate::equity::Config;
use crate::equity::Mode;
use crate::equity::Seat;
use crate::equity::Showdown;
use crate::equity::Table;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinRequest {
    pub players: Vec<String>,
    #[serde(default)]
    pub board: Vec<String>,
    #[serde(default, alias = "excludes")]
    pub dead: Vec<String>,
    #[serde(default)]
    pub mode: Option<Mode>,
    #[serde(default)]
    pub exact: bool,
    #[serde(default, alias = "simulations")]
    pub samples: Option<u64>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub scale: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowdownRequest {
    #[serde(alias = "hero")]
    pub player: Vec<String>,
    pub board: Vec<String>,
    #[serde(default)]
    pub mode: Option<Mode>,
    #[serde(default)]
    pub exact: bool,
    #[serde(default, alias = "simulations")]
    pub samples: Option<u64>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub scale: Option<u32>,
}

impl WinRequest {
    pub fn table(&self) -> Result<Table, Error> {
        let seats = self
            .players
            .iter()
            .map(|s| Seat::try_from(s.as_str()))
            .collect::<Result<Vec<Seat>, Error>>()?;
        Table::new(seats, &cards(&self.board)?, &cards(&self.dead)?)
    }
    pub fn config(&self, base: Config) -> Result<Config, Error> {
        let base = base
            .with_mode(mode(self.mode, self.exact, base.mode))
            .with_seed(self.seed.or(base.seed));
        match self.samples {
            Some(n) => Ok(base.with_samples(bounded(n, crate::MAX_SAMPLE_COUNT)?)),
            None => Ok(base),
        }
    }
}

impl ShowdownRequest {
    pub fn showdown(&self) -> Result<Showdown, Error> {
        Showdown::new(&cards(&self.player)?, &cards(&self.board)?)
    }
    pub fn config(&self, base: Config) -> Result<Config, Error> {
        let base = base
            .with_mode(mode(self.mode, self.exact, base.mode))
            .with_seed(self.seed.or(base.seed));
        match self.samples {
            Some(n) => Ok(Config {
                showdown_samples: bounded(n, crate::MAX_SHOWDOWN_SAMPLE_COUNT)?,
                ..base
            }),
            None => Ok(base),
        }
    }
}

/// each entry is one card, though `"As Kd"` style entries are accepted too
fn cards(tokens: &[String]) -> Result<Vec<Card>, Error> {
    tokens
        .iter()
        .map(|s| Card::parse(s))
        .collect::<Result<Vec<Vec<Card>>, Error>>()
        .map(|cards| cards.into_iter().flatten().collect())
}

fn bounded(samples: u64, max: u64) -> Result<u64, Error> {
    match (1..=max).contains(&samples) {
        true => Ok(samples),
        false => Err(Capacity::Samples { samples, max }.into()),
    }
}

/// `exact: true` forces an exhaustive run unless a mode is named explicitly
fn mode(mode: Option<Mode>, exact: bool, default: Mode) -> Mode {
    match (mode, exact) {
        (Some(mode), _) => mode,
        (None, true) => Mode::Exhaustive,
        (None, false) => default,
    }
}
