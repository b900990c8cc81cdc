/// Utility modules
pub mod logging;
pub mod sanitization;

pub use logging::*;
pub use sanitization::*;
