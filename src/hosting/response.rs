use crate::Error;
use crate::Probability;
use crate::cards::Card;
use crate::cards::Category;
use crate::equity::Equity;
use crate::equity::Made;
use crate::equity::Mode;
use crate::equity::Report;
use crate::equity::Verdict;
use serde::Serialize;
use std::collections::BTreeMap;

/// Optional decimal places. Present means percentages rounded to that many
/// places, absent means raw probabilities.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Scale(pub Option<u32>);

impl Scale {
    pub fn apply(&self, p: Probability) -> Probability {
        match self.0 {
            None => p,
            Some(places) => {
                let factor = 10f64.powi(places.min(12) as i32);
                (p * 100. * factor).round() / factor
            }
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandRank {
    pub name: String,
    pub rank: usize,
    pub cards: Vec<Card>,
}

impl From<Made> for HandRank {
    fn from(made: Made) -> Self {
        Self {
            name: made.strength.category().label().to_string(),
            rank: made.strength.category().index(),
            cards: Vec::from(made.cards),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub cards: String,
    pub win_probability: Probability,
    pub tie_probability: Probability,
    pub equity: Probability,
    pub category_frequencies: BTreeMap<Category, Probability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hand_rank: Option<HandRank>,
}

impl From<(&Equity, Scale)> for PlayerResponse {
    fn from((equity, scale): (&Equity, Scale)) -> Self {
        Self {
            cards: equity.seat().to_string(),
            win_probability: scale.apply(equity.win()),
            tie_probability: scale.apply(equity.tie()),
            equity: scale.apply(equity.equity()),
            category_frequencies: equity
                .categories()
                .map(|(c, p)| (c, scale.apply(p)))
                .collect(),
            hand_rank: equity.made().map(HandRank::from),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WinResponse {
    pub players: Vec<PlayerResponse>,
    pub tie_probability: Probability,
    pub iterations_run: u64,
    pub mode_used: Mode,
    pub operation_time: f64,
}

impl From<(Report, Scale)> for WinResponse {
    fn from((report, scale): (Report, Scale)) -> Self {
        Self {
            players: report
                .players()
                .iter()
                .map(|e| PlayerResponse::from((e, scale)))
                .collect(),
            tie_probability: scale.apply(report.ties()),
            iterations_run: report.iterations(),
            mode_used: report.mode(),
            operation_time: report.elapsed().as_secs_f64(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowdownResponse {
    pub showdown_probability: Probability,
    pub holdings: u64,
    pub operation_time: f64,
}

impl From<(Verdict, Scale)> for ShowdownResponse {
    fn from((verdict, scale): (Verdict, Scale)) -> Self {
        Self {
            showdown_probability: scale.apply(verdict.favourite),
            holdings: verdict.holdings,
            operation_time: verdict.elapsed.as_secs_f64(),
        }
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct Problem {
    pub code: u16,
    pub name: String,
    pub description: String,
}

impl From<&Error> for Problem {
    fn from(e: &Error) -> Self {
        Self {
            code: 400,
            name: e.name().to_string(),
            description: e.to_string(),
        }
    }
}

impl Problem {
    pub fn new(code: u16, name: &str, description: impl std::fmt::Display) -> Self {
        Self {
            code,
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Hand;
    use crate::equity::Tally;
    use std::time::Duration;

    #[test]
    fn scale_rounds_percentages() {
        assert_eq!(Scale(None).apply(0.123456), 0.123456);
        assert_eq!(Scale(Some(2)).apply(0.123456), 12.35);
        assert_eq!(Scale(Some(0)).apply(0.5), 50.);
    }

    #[test]
    fn serializes_camel_case() {
        let mut tally = Tally::from(2);
        let board = Hand::try_from("2c 7d 9h Jc Qs").unwrap();
        tally.witness(board, &[Hand::try_from("As Ah").unwrap(), Hand::try_from("Ks Kh").unwrap()]);
        let report = Report::from((tally, Mode::Exhaustive, Duration::ZERO));
        let json = serde_json::to_value(WinResponse::from((report, Scale(Some(1))))).unwrap();
        assert_eq!(json["modeUsed"], "exhaustive");
        assert_eq!(json["iterationsRun"], 1);
        assert_eq!(json["players"][0]["winProbability"], 100.0);
        assert_eq!(json["players"][1]["categoryFrequencies"]["onePair"], 100.0);
        assert!(json["players"][0].get("handRank").is_none());
    }

    #[test]
    fn problem_names_errors() {
        let problem = Problem::from(&Error::InvalidCard(String::from("Zz")));
        assert_eq!(problem.code, 400);
        assert_eq!(problem.name, "InvalidCard");
        assert_eq!(problem.description, "invalid card: \"Zz\"");
    }
}
