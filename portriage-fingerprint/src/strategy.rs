use portriage_types::{HostSignals, InferenceStrategy};

/// Vendor keyword table for the fast-scan rule set. Case-insensitive
/// substring match against the OUI vendor string, first hit wins, in this
/// order.
pub const VENDOR_KEYWORDS: &[(&str, &str)] = &[
    ("apple", "Apple Device"),
    ("espressif", "Smart Home (IoT)"),
    ("raspberry", "Raspberry Pi"),
    ("canon", "Printer"),
    ("hp", "Printer"),
    ("epson", "Printer"),
    ("synology", "NAS Server"),
];

/// Infer a device label from aggregated signals.
///
/// Total and deterministic: always returns a non-empty label, whichever
/// strategy runs and however sparse the signals are.
pub fn infer(signals: &HostSignals, strategy: InferenceStrategy) -> String {
    match strategy {
        InferenceStrategy::FastScan => infer_fast(signals),
        InferenceStrategy::FullScan => infer_full(signals),
    }
}

/// Fast-scan rules: vendor keywords first, then open-port heuristics in
/// strict priority order. Short-circuits on the first match rather than
/// voting.
fn infer_fast(signals: &HostSignals) -> String {
    if let Some(vendor) = &signals.vendor {
        let vendor = vendor.to_lowercase();
        for (keyword, label) in VENDOR_KEYWORDS {
            if vendor.contains(keyword) {
                return (*label).to_string();
            }
        }
    }

    let ports = &signals.open_ports;
    if ports.contains(&631) {
        return "Printer".to_string();
    }
    if ports.contains(&554) {
        return "IoT Camera".to_string();
    }
    if ports.contains(&53) {
        return "Router/Gateway".to_string();
    }
    if ports.contains(&3389) {
        return "Windows PC".to_string();
    }
    if ports.contains(&22) && !ports.contains(&80) {
        return "Linux Server".to_string();
    }
    if ports.contains(&80) || ports.contains(&443) {
        return "Web Server".to_string();
    }

    "Workstation".to_string()
}

/// Full-scan rules: a resolved hostname beats everything (it is the one
/// signal the owner chose), then vendor, then the OS match.
fn infer_full(signals: &HostSignals) -> String {
    if let Some(hostname) = &signals.resolved_hostname {
        return hostname.clone();
    }
    if let Some(vendor) = &signals.vendor {
        return format!("{vendor} Device");
    }
    if let Some(os) = &signals.os_match {
        return os.clone();
    }
    "Unknown Device".to_string()
}
