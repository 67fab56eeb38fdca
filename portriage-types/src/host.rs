use crate::observation::PortObservation;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One OS-detection candidate supplied by the scanning engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OsMatch {
    pub name: String,
    /// Match confidence 0-100, when the scanner reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<u8>,
}

/// Everything the scanning engine reports for a single host.
///
/// This is the raw collaborator record: port observations in discovery order
/// plus whatever fingerprint data the scan profile produced. All fingerprint
/// fields are optional; a fast scan typically populates none of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostProbe {
    pub ip: String,
    #[serde(default)]
    pub observations: Vec<PortObservation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
    /// OUI vendor lookup keyed by MAC address. May be empty, and may contain
    /// entries for MACs other than `mac` (e.g. a gateway seen on the path).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub vendor_by_mac: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub os_matches: Vec<OsMatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
}

impl HostProbe {
    pub fn new(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            observations: Vec::new(),
            mac: None,
            vendor_by_mac: BTreeMap::new(),
            os_matches: Vec::new(),
            hostname: None,
        }
    }
}

/// Per-host signals aggregated from a [`HostProbe`], ready for device-type
/// inference. Every field that a scan profile can fail to produce is optional;
/// inference must stay total over any combination of absences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostSignals {
    pub ip: String,
    pub vendor: Option<String>,
    pub mac: Option<String>,
    pub open_ports: BTreeSet<u16>,
    pub os_match: Option<String>,
    /// Resolved hostname, already filtered: never empty, never the bare IP
    /// literal (a "resolved" name equal to the IP counts as unresolved).
    pub resolved_hostname: Option<String>,
}

impl HostSignals {
    /// Signals for a host about which nothing is known beyond its address.
    pub fn bare(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            vendor: None,
            mac: None,
            open_ports: BTreeSet::new(),
            os_match: None,
            resolved_hostname: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_optional_fields_skipped_in_json() {
        let probe = HostProbe::new("192.168.1.10");
        let json = serde_json::to_string(&probe).unwrap();
        assert!(!json.contains("mac"));
        assert!(!json.contains("vendor_by_mac"));
        assert!(!json.contains("os_matches"));
        assert!(!json.contains("hostname"));
    }

    #[test]
    fn probe_deserializes_from_minimal_json() {
        let json = r#"{"ip":"10.0.0.1","observations":[]}"#;
        let probe: HostProbe = serde_json::from_str(json).unwrap();
        assert_eq!(probe.ip, "10.0.0.1");
        assert!(probe.vendor_by_mac.is_empty());
        assert!(probe.hostname.is_none());
    }

    #[test]
    fn bare_signals_have_no_optional_data() {
        let signals = HostSignals::bare("10.0.0.1");
        assert!(signals.vendor.is_none());
        assert!(signals.open_ports.is_empty());
        assert!(signals.resolved_hostname.is_none());
    }
}
