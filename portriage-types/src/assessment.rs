use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse severity of an exposed service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskTier::Low => write!(f, "low"),
            RiskTier::Medium => write!(f, "medium"),
            RiskTier::High => write!(f, "high"),
        }
    }
}

/// One classified open port: risk tier, what the exposure is, and how to
/// close it. Derived deterministically from a single port observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFinding {
    pub port: u16,
    pub service: String,
    pub risk: RiskTier,
    pub info: String,
    pub remediation: String,
}

/// Which device-inference rule set produced a label.
///
/// The two strategies encode different confidence models (a fast scan has no
/// OS probe or hostname resolution to lean on) and are deliberately kept
/// separate; callers pick one based on which signals their scan profile
/// actually populates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InferenceStrategy {
    /// Vendor keywords, then open-port heuristics. Default label "Workstation".
    #[default]
    FastScan,
    /// Resolved hostname, then vendor, then OS match. Default "Unknown Device".
    FullScan,
}

impl fmt::Display for InferenceStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferenceStrategy::FastScan => write!(f, "fast-scan"),
            InferenceStrategy::FullScan => write!(f, "full-scan"),
        }
    }
}

/// The top-level output unit: one assessed host.
///
/// Serializes to the report schema `{"ip", "type", "vulns"}`. The strategy
/// that produced `device_type` is carried in-memory so callers can tell a
/// low-confidence fast-scan label from a full-scan one, but it is not part
/// of the wire schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostAssessment {
    pub ip: String,
    #[serde(rename = "type")]
    pub device_type: String,
    pub vulns: Vec<RiskFinding>,
    #[serde(skip)]
    pub strategy: InferenceStrategy,
}
