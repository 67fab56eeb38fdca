use async_trait::async_trait;
use portriage_types::HostProbe;

/// The external scanning engine, seen from the assessment side.
///
/// The provider owns everything network-shaped: probing, service naming,
/// OS detection, hostname resolution. Assessment only consumes the probe
/// records it returns, so any failure here surfaces before classification
/// ever runs.
#[async_trait]
pub trait ScanProvider: Send + Sync {
    /// Probe the given targets and return one record per responding host,
    /// in discovery order.
    async fn probe_hosts(&self, targets: &[String]) -> Result<Vec<HostProbe>, ProbeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("host unreachable: {host}")]
    Unreachable { host: String },
    #[error("probe timed out for host {host}")]
    Timeout { host: String },
    #[error("insufficient privileges: {0}")]
    PermissionDenied(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
