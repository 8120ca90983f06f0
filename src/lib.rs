//! Texas Hold'em equity calculator.
//!
//! Cards and hand evaluation live in [`cards`], enumeration and aggregation in
//! [`equity`]. The REST boundary in [`hosting`] and the command line in [`cli`]
//! are compiled with the `server` feature.
pub mod cards;
pub mod equity;
pub mod error;

#[cfg(feature = "server")]
pub mod cli;
#[cfg(feature = "server")]
pub mod hosting;

pub use error::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Win, tie and equity shares of a pot.
pub type Probability = f64;

// ============================================================================
// TABLE BOUNDS
// ============================================================================
/// Fewest seats a request may carry.
pub const MIN_PLAYERS: usize = 2;
/// Most seats a request may carry.
pub const MAX_PLAYERS: usize = 10;
/// Community cards on a complete board.
pub const BOARD_SIZE: usize = 5;
/// Hole cards dealt to each seat.
pub const HOLE_SIZE: usize = 2;

// ============================================================================
// ENUMERATION POLICY
// ============================================================================
/// Largest combination count enumerated exhaustively under the automatic policy.
pub const EXHAUSTIVE_LIMIT: u64 = 2_000_000;
/// Completions drawn when sampling, unless a request asks for another count.
pub const SAMPLE_COUNT: u64 = 200_000;
/// Completions drawn per opponent holding when a showdown percentage samples.
pub const SHOWDOWN_SAMPLE_COUNT: u64 = 250;
/// Most completions a request may ask to sample.
pub const MAX_SAMPLE_COUNT: u64 = 10_000_000;
/// Most completions per opponent holding a showdown request may ask to sample.
pub const MAX_SHOWDOWN_SAMPLE_COUNT: u64 = 990;
/// Samples per parallel task. Each chunk owns an RNG derived from (seed, chunk).
pub const SAMPLE_CHUNK: u64 = 4_096;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Size the global rayon pool once, before any enumeration runs.
/// Falls back to one thread per core when `workers` is unset.
#[cfg(feature = "server")]
pub fn pool(workers: Option<usize>) -> anyhow::Result<()> {
    let n = workers.unwrap_or_else(num_cpus::get).max(1);
    rayon::ThreadPoolBuilder::new()
        .num_threads(n)
        .build_global()
        .map_err(|e| anyhow::anyhow!("rayon pool: {}", e))
        .inspect(|_| log::info!("enumerating on {} threads", n))
}
