use portriage_types::RiskTier;

/// One entry in the port risk table.
#[derive(Debug, Clone, Copy)]
pub struct RiskRule {
    pub port: u16,
    pub risk: RiskTier,
    pub info: &'static str,
    pub remediation: &'static str,
}

const fn rule(port: u16, risk: RiskTier, info: &'static str, remediation: &'static str) -> RiskRule {
    RiskRule {
        port,
        risk,
        info,
        remediation,
    }
}

/// The canonical port risk table, single source of truth for classification.
///
/// Adding a port is a one-line entry here; `classify` and every report stay
/// in sync automatically. A test asserts no port appears twice, which is the
/// only way the table can be malformed.
pub const RISK_RULES: &[RiskRule] = &[
    rule(
        21,
        RiskTier::High,
        "FTP: Insecure file transfer. Data sent in cleartext.",
        "Disable FTP. Use SFTP (Port 22) or FTPS instead.",
    ),
    rule(
        23,
        RiskTier::High,
        "Telnet: Unencrypted remote access. Passwords visible!",
        "CRITICAL: Disable immediately. Use SSH (Port 22).",
    ),
    rule(
        445,
        RiskTier::High,
        "SMB: Windows File Sharing. Vulnerable to Ransomware.",
        "Block Port 445 on Firewall. Disable SMBv1 protocol.",
    ),
    rule(
        3389,
        RiskTier::High,
        "RDP: Windows Remote Desktop exposed to internet.",
        "Place behind a VPN or restrict access via Firewall.",
    ),
    rule(
        5900,
        RiskTier::High,
        "VNC: Remote Desktop. Often has weak passwords.",
        "Tunnel VNC through SSH or use a VPN.",
    ),
    rule(
        80,
        RiskTier::Medium,
        "HTTP: Web traffic is unencrypted.",
        "Enforce HTTPS (Port 443) with a valid SSL certificate.",
    ),
    rule(
        8080,
        RiskTier::Medium,
        "HTTP: Web traffic is unencrypted.",
        "Enforce HTTPS (Port 443) with a valid SSL certificate.",
    ),
    rule(
        3306,
        RiskTier::Medium,
        "MySQL: Database listening on network.",
        "Bind to localhost (127.0.0.1) or restrict IP access.",
    ),
    rule(
        5432,
        RiskTier::Medium,
        "PostgreSQL: Database listening on network.",
        "Configure pg_hba.conf to restrict remote connections.",
    ),
    rule(
        25,
        RiskTier::Medium,
        "SMTP: Email Relay. Can be used for spam.",
        "Disable open relay configuration.",
    ),
    rule(
        554,
        RiskTier::Medium,
        "RTSP: Camera stream. Often has weak/default credentials.",
        "Update camera firmware and set a strong password.",
    ),
    rule(
        5555,
        RiskTier::Medium,
        "ADB: Android Debug Bridge exposed.",
        "Disable 'Wireless Debugging' on the Android device.",
    ),
    rule(
        22,
        RiskTier::Low,
        "SSH: Secure remote access.",
        "Use Key-based authentication and disable root login.",
    ),
    rule(
        443,
        RiskTier::Low,
        "HTTPS: Secure encrypted web traffic.",
        "Ensure TLS 1.2/1.3 is enabled.",
    ),
    rule(
        53,
        RiskTier::Low,
        "DNS: Domain Name Service.",
        "Ensure recursion is disabled if not public.",
    ),
    rule(
        631,
        RiskTier::Low,
        "IPP: Internet Printing Protocol.",
        "Restrict access to local network only.",
    ),
];

/// Remediation text for ports not in the table.
pub const DEFAULT_REMEDIATION: &str = "Ensure service is patched and updated.";
