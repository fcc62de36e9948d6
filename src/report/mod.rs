//! Report module - orchestration, console tables and JSON export

pub mod export;
pub mod generator;
pub mod summary;

pub use export::*;
pub use generator::*;
pub use summary::*;
