//! Pipeline module - the analysis steps behind the report

pub mod categorical;
pub mod correlation;
pub mod loader;
pub mod missing;
pub mod numeric;
pub mod selection;

pub use categorical::*;
pub use correlation::*;
pub use loader::*;
pub use missing::*;
pub use numeric::*;
pub use selection::*;
