use crate::cards::Card;
use crate::equity::Config;
use crate::equity::Engine;
use crate::equity::Mode;
use crate::equity::Seat;
use crate::equity::Showdown;
use crate::equity::Table;
use crate::hosting::BIND_ADDR;
use crate::hosting::Server;
use clap::Parser;
use clap::Subcommand;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about = "Texas Hold'em equity calculator", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
    #[arg(long, global = true, help = "auto, exhaustive or sampling")]
    pub mode: Option<Mode>,
    #[arg(long, global = true, help = "completions to draw when sampling")]
    pub samples: Option<u64>,
    #[arg(long, global = true, help = "seed for reproducible sampling")]
    pub seed: Option<u64>,
    #[arg(long, global = true, help = "largest combination count enumerated exhaustively")]
    pub limit: Option<u64>,
    #[arg(long, global = true, help = "rayon worker threads")]
    pub workers: Option<usize>,
    #[arg(long = "deadline-ms", global = true, help = "stop sampling after this many milliseconds")]
    pub deadline_ms: Option<u64>,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(
        about = "Win, tie and equity for each seat, e.g. `equity 'As|Ah' 'Ks|?' '?|?'`",
        alias = "eq"
    )]
    Equity {
        #[arg(required = true)]
        players: Vec<String>,
        #[arg(long, default_value = "")]
        board: String,
        #[arg(long, default_value = "")]
        dead: String,
    },
    #[command(
        about = "Fraction of opponent holdings a known hand is favourite against",
        alias = "sd"
    )]
    Showdown {
        #[arg(required = true)]
        hero: String,
        #[arg(long, required = true)]
        board: String,
    },
    #[command(about = "Serve the REST endpoints")]
    Serve {
        #[arg(long, help = "listen address, falls back to BIND_ADDR")]
        bind: Option<String>,
    },
}

impl Args {
    /// Environment overrides first, then command line flags.
    pub fn config(&self) -> Config {
        let config = Config::from_env();
        let config = Config {
            workers: self.workers.or(config.workers),
            ..config
        }
        .with_mode(self.mode.unwrap_or(config.mode))
        .with_limit(self.limit.unwrap_or(config.exhaustive_limit))
        .with_seed(self.seed.or(config.seed))
        .with_deadline(self.deadline_ms.map(Duration::from_millis).or(config.deadline));
        match self.samples {
            Some(n) => config.with_samples(n),
            None => config,
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let config = self.config();
        crate::pool(config.workers)?;
        match self.command {
            Command::Equity {
                players,
                board,
                dead,
            } => {
                let seats = players
                    .iter()
                    .map(|s| Seat::try_from(s.as_str()))
                    .collect::<Result<Vec<Seat>, _>>()?;
                let table = Table::new(seats, &Card::parse(&board)?, &Card::parse(&dead)?)?;
                let report = Engine::from(config).run(&table);
                Ok(println!("{}", report))
            }
            Command::Showdown { hero, board } => {
                let showdown = Showdown::new(&Card::parse(&hero)?, &Card::parse(&board)?)?;
                let verdict = showdown.run(&Engine::from(config));
                Ok(println!(
                    "favourite against {:.3}% of {} holdings ({:.3}s)",
                    verdict.favourite * 100.,
                    verdict.holdings,
                    verdict.elapsed.as_secs_f64()
                ))
            }
            Command::Serve { bind } => {
                let bind = bind
                    .or_else(|| std::env::var("BIND_ADDR").ok())
                    .unwrap_or_else(|| BIND_ADDR.to_string());
                Ok(Server::run(config, bind).await?)
            }
        }
    }
}
