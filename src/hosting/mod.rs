//! REST boundary: validates request shape, dispatches to the engine and
//! serializes results.
pub mod request;
pub mod response;
pub mod server;

pub use request::*;
pub use response::*;
pub use server::*;
