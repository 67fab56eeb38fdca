pub mod engine;
pub mod provider;

pub use engine::{AssessOptions, AssessmentEngine, EngineError, assess_host, assess_hosts};
pub use provider::{ProbeError, ScanProvider};
