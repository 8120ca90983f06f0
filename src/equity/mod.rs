pub mod config;
pub use config::*;

pub mod dealing;
pub use dealing::*;

pub mod engine;
pub use engine::*;

pub mod mode;
pub use mode::*;

pub mod report;
pub use report::*;

pub mod sampler;
pub use sampler::*;

pub mod seat;
pub use seat::*;

pub mod showdown;
pub use showdown::*;

pub mod table;
pub use table::*;

pub mod tally;
pub use tally::*;
