use portriage_types::{HostProbe, HostSignals, OsMatch};

/// Aggregate a raw probe record into the signals inference runs on.
///
/// Every fingerprint field can be absent; this never fails. Hostname and
/// vendor are normalized here so the strategies stay simple lookups.
pub fn gather_signals(probe: &HostProbe) -> HostSignals {
    HostSignals {
        ip: probe.ip.clone(),
        vendor: resolve_vendor(probe),
        mac: probe.mac.clone(),
        open_ports: probe
            .observations
            .iter()
            .filter(|o| o.is_open())
            .map(|o| o.port)
            .collect(),
        os_match: best_os_match(&probe.os_matches),
        resolved_hostname: resolved_hostname(probe),
    }
}

/// Pick the vendor string out of the OUI lookup.
///
/// Prefers the entry for the host's own MAC; falls back to the first entry
/// in key order when the MAC is missing or unkeyed (the scanner sometimes
/// reports the vendor under a neighboring MAC, e.g. the gateway's).
fn resolve_vendor(probe: &HostProbe) -> Option<String> {
    if probe.vendor_by_mac.is_empty() {
        return None;
    }
    if let Some(mac) = &probe.mac
        && let Some(vendor) = probe.vendor_by_mac.get(mac)
    {
        return Some(vendor.clone());
    }
    probe.vendor_by_mac.values().next().cloned()
}

/// The best OS candidate: highest reported accuracy, earliest on ties or
/// when no candidate carries an accuracy at all.
fn best_os_match(matches: &[OsMatch]) -> Option<String> {
    let mut best: Option<&OsMatch> = None;
    for candidate in matches {
        let better = match best {
            None => true,
            Some(b) => candidate.accuracy.unwrap_or(0) > b.accuracy.unwrap_or(0),
        };
        if better {
            best = Some(candidate);
        }
    }
    best.map(|m| m.name.clone())
}

/// A hostname counts as resolved only if it is non-empty and not simply the
/// IP literal echoed back.
fn resolved_hostname(probe: &HostProbe) -> Option<String> {
    probe
        .hostname
        .as_deref()
        .map(str::trim)
        .filter(|h| !h.is_empty() && *h != probe.ip)
        .map(str::to_string)
}
