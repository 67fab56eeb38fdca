use std::collections::BTreeSet;

/// The port specification an audit scan covers by default: the well-known
/// range plus the higher-numbered services the risk table knows about
/// (MySQL, HTTP-alt, ADB, RTSP, IPP).
pub const DEFAULT_AUDIT_SPEC: &str = "20-1024,3306,8080,5555,554,631";

/// A parsed nmap-style port specification like "80,443,1000-2000".
///
/// Callers hand the expanded list to the scanning engine; the classifier
/// itself never sees this type.
#[derive(Debug, Clone)]
pub struct AuditPorts {
    ranges: Vec<(u16, u16)>,
}

impl AuditPorts {
    /// Parse a comma-separated list of ports and inclusive ranges.
    pub fn parse(input: &str) -> Result<Self, PortSpecError> {
        let mut ranges = Vec::new();
        for part in input.split(',') {
            ranges.push(parse_part(part.trim())?);
        }
        if ranges.is_empty() {
            return Err(PortSpecError::Empty);
        }
        Ok(Self { ranges })
    }

    /// The default audit specification used when the caller gives none.
    pub fn default_audit() -> Self {
        // DEFAULT_AUDIT_SPEC always parses; the fallback is never taken.
        Self::parse(DEFAULT_AUDIT_SPEC).unwrap_or(Self { ranges: vec![(20, 1024)] })
    }

    /// Expand into a sorted, deduplicated list of port numbers.
    pub fn expand(&self) -> Vec<u16> {
        let mut set = BTreeSet::new();
        for &(start, end) in &self.ranges {
            set.extend(start..=end);
        }
        set.into_iter().collect()
    }

    pub fn contains(&self, port: u16) -> bool {
        self.ranges.iter().any(|&(s, e)| (s..=e).contains(&port))
    }
}

fn parse_part(part: &str) -> Result<(u16, u16), PortSpecError> {
    let (start, end) = match part.split_once('-') {
        Some((a, b)) => (parse_port(a)?, parse_port(b)?),
        None => {
            let p = parse_port(part)?;
            (p, p)
        }
    };
    if start > end {
        return Err(PortSpecError::InvalidRange(start, end));
    }
    Ok((start, end))
}

fn parse_port(s: &str) -> Result<u16, PortSpecError> {
    let port: u16 = s
        .trim()
        .parse()
        .map_err(|_| PortSpecError::InvalidPort(s.trim().to_string()))?;
    if port == 0 {
        return Err(PortSpecError::InvalidPort("0 (ports are 1-65535)".into()));
    }
    Ok(port)
}

#[derive(Debug, thiserror::Error)]
pub enum PortSpecError {
    #[error("invalid port: {0}")]
    InvalidPort(String),
    #[error("invalid range: {0}-{1} (start > end)")]
    InvalidRange(u16, u16),
    #[error("empty port specification")]
    Empty,
}
