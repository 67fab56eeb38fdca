use serde::{Deserialize, Serialize};
use std::fmt;

/// The state of a scanned port, following nmap conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortState {
    Open,
    Closed,
    Filtered,
}

impl fmt::Display for PortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortState::Open => write!(f, "open"),
            PortState::Closed => write!(f, "closed"),
            PortState::Filtered => write!(f, "filtered"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Tcp,
    Udp,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Tcp => write!(f, "tcp"),
            Protocol::Udp => write!(f, "udp"),
        }
    }
}

/// A single port result reported by the scanning engine.
///
/// The service name comes straight from the scanner's service table and may
/// be empty when the scanner could not name the port.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortObservation {
    pub port: u16,
    pub protocol: Protocol,
    #[serde(default)]
    pub service: String,
    pub state: PortState,
}

impl PortObservation {
    pub fn open(port: u16, protocol: Protocol, service: impl Into<String>) -> Self {
        Self {
            port,
            protocol,
            service: service.into(),
            state: PortState::Open,
        }
    }

    /// Only open observations reach the risk classifier.
    pub fn is_open(&self) -> bool {
        self.state == PortState::Open
    }
}
