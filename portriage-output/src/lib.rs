pub mod json;
pub mod summary;
pub mod traits;

pub use json::JsonFormatter;
pub use summary::RiskTally;
pub use traits::{OutputError, ReportFormatter};
