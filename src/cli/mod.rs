//! CLI module - argument parsing and config file

mod args;
mod config;

pub use args::*;
pub use config::*;
