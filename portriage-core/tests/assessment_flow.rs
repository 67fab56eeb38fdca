// End-to-end assessment flow: a canned provider standing in for the external
// scanning engine, driven through the engine, rendered through the JSON
// formatter.

use async_trait::async_trait;
use portriage_core::{AssessOptions, AssessmentEngine, EngineError, ProbeError, ScanProvider};
use portriage_output::{JsonFormatter, ReportFormatter, RiskTally};
use portriage_types::{HostProbe, InferenceStrategy, OsMatch, PortObservation, Protocol};

/// Provider double that returns a fixed set of probe records.
struct CannedProvider {
    probes: Vec<HostProbe>,
}

#[async_trait]
impl ScanProvider for CannedProvider {
    async fn probe_hosts(&self, _targets: &[String]) -> Result<Vec<HostProbe>, ProbeError> {
        Ok(self.probes.clone())
    }
}

/// Provider double that always fails, for error passthrough.
struct DeadProvider;

#[async_trait]
impl ScanProvider for DeadProvider {
    async fn probe_hosts(&self, targets: &[String]) -> Result<Vec<HostProbe>, ProbeError> {
        Err(ProbeError::Unreachable {
            host: targets.first().cloned().unwrap_or_default(),
        })
    }
}

fn lab_network() -> Vec<HostProbe> {
    let mut server = HostProbe::new("192.168.1.15");
    server.observations = vec![
        PortObservation::open(22, Protocol::Tcp, "ssh"),
        PortObservation::open(80, Protocol::Tcp, "http"),
        PortObservation::open(3306, Protocol::Tcp, "mysql"),
    ];
    server.hostname = Some("web01.lan".into());
    server.os_matches = vec![OsMatch {
        name: "Ubuntu 20.04".into(),
        accuracy: Some(94),
    }];

    let mut quiet = HostProbe::new("192.168.1.100");
    quiet.hostname = Some("192.168.1.100".into()); // unresolved: echoes the IP

    let mut gateway = HostProbe::new("192.168.1.1");
    gateway.observations = vec![
        PortObservation::open(53, Protocol::Udp, "domain"),
        PortObservation::open(23, Protocol::Tcp, "telnet"),
    ];
    gateway.mac = Some("84:16:F9:12:34:56".into());
    gateway
        .vendor_by_mac
        .insert("84:16:F9:12:34:56".into(), "TP-Link Technologies".into());

    vec![server, quiet, gateway]
}

#[tokio::test]
async fn fast_scan_report_end_to_end() {
    let provider = CannedProvider {
        probes: lab_network(),
    };
    let targets = vec!["192.168.1.0/24".to_string()];
    let report = AssessmentEngine::run(&provider, &targets, AssessOptions::default())
        .await
        .unwrap();

    assert_eq!(report.len(), 3);
    // 22+80 open: the web rule wins over the SSH-only rule.
    assert_eq!(report[0].device_type, "Web Server");
    assert_eq!(report[1].device_type, "Workstation");
    // Port 53 open marks the gateway before any other rule fires.
    assert_eq!(report[2].device_type, "Router/Gateway");

    let tally = RiskTally::of(&report);
    // telnet=high; http+mysql=medium; ssh+dns=low
    assert_eq!(tally, RiskTally { high: 1, medium: 2, low: 2 });
}

#[tokio::test]
async fn full_scan_prefers_hostname_then_vendor_then_os() {
    let provider = CannedProvider {
        probes: lab_network(),
    };
    let targets = vec!["192.168.1.0/24".to_string()];
    let options = AssessOptions {
        strategy: InferenceStrategy::FullScan,
    };
    let report = AssessmentEngine::run(&provider, &targets, options).await.unwrap();

    assert_eq!(report[0].device_type, "web01.lan");
    // Hostname equal to the IP literal counts as unresolved, and this host
    // has no vendor or OS signal either.
    assert_eq!(report[1].device_type, "Unknown Device");
    assert_eq!(report[2].device_type, "TP-Link Technologies Device");
    assert!(report.iter().all(|a| a.strategy == InferenceStrategy::FullScan));
}

#[tokio::test]
async fn report_serializes_to_documented_schema() {
    let provider = CannedProvider {
        probes: lab_network(),
    };
    let targets = vec!["192.168.1.0/24".to_string()];
    let report = AssessmentEngine::run(&provider, &targets, AssessOptions::default())
        .await
        .unwrap();

    let json = JsonFormatter.format(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let hosts = value.as_array().unwrap();
    assert_eq!(hosts.len(), 3);
    assert_eq!(hosts[0]["ip"], "192.168.1.15");
    assert_eq!(hosts[0]["type"], "Web Server");

    let vulns = hosts[2]["vulns"].as_array().unwrap();
    let telnet = vulns.iter().find(|v| v["port"] == 23).unwrap();
    assert_eq!(telnet["risk"], "high");
    assert_eq!(
        telnet["remediation"],
        "CRITICAL: Disable immediately. Use SSH (Port 22)."
    );
}

#[tokio::test]
async fn provider_failure_surfaces_before_assessment() {
    let targets = vec!["10.9.9.9".to_string()];
    let err = AssessmentEngine::run(&DeadProvider, &targets, AssessOptions::default())
        .await
        .unwrap_err();
    match err {
        EngineError::Probe(ProbeError::Unreachable { host }) => assert_eq!(host, "10.9.9.9"),
        other => panic!("expected unreachable error, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_target_list_is_rejected() {
    let provider = CannedProvider { probes: vec![] };
    let err = AssessmentEngine::run(&provider, &[], AssessOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::NoTargets));
}
