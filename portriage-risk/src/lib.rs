// ---------------------------------------------------------------------------
// Port risk classification
// ---------------------------------------------------------------------------
//
// Maps an open port to a risk tier, a description of the exposure, and
// remediation advice. Pure lookup against a static table; total over all
// port numbers.

pub mod rules;

pub use rules::{DEFAULT_REMEDIATION, RISK_RULES, RiskRule};

use portriage_types::{RiskFinding, RiskTier};
use std::collections::HashMap;
use std::sync::LazyLock;

static RULE_INDEX: LazyLock<HashMap<u16, &'static RiskRule>> =
    LazyLock::new(|| RISK_RULES.iter().map(|r| (r.port, r)).collect());

/// Classify one open port.
///
/// Lookup is exact-match on the port number; `service` only feeds the
/// fallback description for ports the table does not know. Never fails:
/// unknown ports get the generic low-risk finding.
pub fn classify(port: u16, service: &str) -> RiskFinding {
    match RULE_INDEX.get(&port) {
        Some(rule) => RiskFinding {
            port,
            service: service.to_string(),
            risk: rule.risk,
            info: rule.info.to_string(),
            remediation: rule.remediation.to_string(),
        },
        None => RiskFinding {
            port,
            service: service.to_string(),
            risk: RiskTier::Low,
            info: format!("Standard {service} service"),
            remediation: DEFAULT_REMEDIATION.to_string(),
        },
    }
}

/// The table's risk tier for a port, if it has an entry.
pub fn table_risk(port: u16) -> Option<RiskTier> {
    RULE_INDEX.get(&port).map(|r| r.risk)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_no_conflicting_entries() {
        // A duplicate port would collapse in the index; equal lengths prove
        // every port appears exactly once.
        assert_eq!(RULE_INDEX.len(), RISK_RULES.len());
    }

    #[test]
    fn canonical_tiers() {
        let expect: &[(u16, RiskTier)] = &[
            (21, RiskTier::High),
            (23, RiskTier::High),
            (445, RiskTier::High),
            (3389, RiskTier::High),
            (5900, RiskTier::High),
            (80, RiskTier::Medium),
            (8080, RiskTier::Medium),
            (3306, RiskTier::Medium),
            (5432, RiskTier::Medium),
            (25, RiskTier::Medium),
            (554, RiskTier::Medium),
            (5555, RiskTier::Medium),
            (22, RiskTier::Low),
            (443, RiskTier::Low),
            (53, RiskTier::Low),
            (631, RiskTier::Low),
        ];
        for &(port, tier) in expect {
            assert_eq!(classify(port, "x").risk, tier, "port {port}");
        }
    }

    #[test]
    fn tier_independent_of_service_name() {
        assert_eq!(classify(23, "telnet").risk, RiskTier::High);
        assert_eq!(classify(23, "").risk, RiskTier::High);
        assert_eq!(classify(23, "http").risk, RiskTier::High);
    }

    #[test]
    fn unknown_port_gets_generic_default() {
        let finding = classify(9999, "svc");
        assert_eq!(finding.risk, RiskTier::Low);
        assert_eq!(finding.info, "Standard svc service");
        assert_eq!(finding.remediation, "Ensure service is patched and updated.");
    }

    #[test]
    fn unknown_port_empty_service_still_total() {
        let finding = classify(40000, "");
        assert_eq!(finding.risk, RiskTier::Low);
        assert_eq!(finding.info, "Standard  service");
    }

    #[test]
    fn classify_is_deterministic() {
        let a = classify(445, "microsoft-ds");
        let b = classify(445, "microsoft-ds");
        assert_eq!(a, b);
    }

    #[test]
    fn telnet_and_ftp_texts_match_catalog() {
        let telnet = classify(23, "telnet");
        assert_eq!(telnet.info, "Telnet: Unencrypted remote access. Passwords visible!");
        assert_eq!(telnet.remediation, "CRITICAL: Disable immediately. Use SSH (Port 22).");

        let ftp = classify(21, "ftp");
        assert_eq!(ftp.info, "FTP: Insecure file transfer. Data sent in cleartext.");
        assert_eq!(ftp.remediation, "Disable FTP. Use SFTP (Port 22) or FTPS instead.");
    }

    #[test]
    fn http_alt_shares_http_entry() {
        let http = classify(80, "http");
        let alt = classify(8080, "http-proxy");
        assert_eq!(http.risk, alt.risk);
        assert_eq!(http.info, alt.info);
        assert_eq!(http.remediation, alt.remediation);
    }

    #[test]
    fn table_risk_lookup() {
        assert_eq!(table_risk(21), Some(RiskTier::High));
        assert_eq!(table_risk(9999), None);
    }
}
