//! Jobboard CLI library
//!
//! Command implementations behind the `jobboard` binary, kept in a library so
//! they can be tested without spawning the process.

pub mod categories;
pub mod cli;
pub mod replay;
pub mod script;
pub mod table;

pub use cli::{Cli, Commands};
