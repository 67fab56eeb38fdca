pub mod assessment;
pub mod host;
pub mod observation;
pub mod ports;

pub use assessment::{HostAssessment, InferenceStrategy, RiskFinding, RiskTier};
pub use host::{HostProbe, HostSignals, OsMatch};
pub use observation::{PortObservation, PortState, Protocol};
pub use ports::{AuditPorts, DEFAULT_AUDIT_SPEC, PortSpecError};
