// ---------------------------------------------------------------------------
// Assessment assembly
// ---------------------------------------------------------------------------
//
// Walks the probe records a scan provider returns, classifies every open
// port, infers a device label per host, and assembles the report in
// discovery order. All the decision logic lives in portriage-risk and
// portriage-fingerprint; this is the glue around them.

use std::collections::BTreeSet;

use portriage_fingerprint::{gather_signals, infer};
use portriage_risk::classify;
use portriage_types::{HostAssessment, HostProbe, InferenceStrategy};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::provider::{ProbeError, ScanProvider};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no targets specified")]
    NoTargets,
    #[error(transparent)]
    Probe(#[from] ProbeError),
}

/// Options for an assessment run.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssessOptions {
    /// Which device-inference rule set to apply. Pick [`InferenceStrategy::FullScan`]
    /// only when the provider actually populates OS and hostname signals.
    pub strategy: InferenceStrategy,
}

pub struct AssessmentEngine;

impl AssessmentEngine {
    /// Probe the targets through the provider, then assemble assessments.
    ///
    /// Provider failures (unreachable, timeout, privileges) pass through
    /// untouched; once probing succeeds, assembly cannot fail.
    pub async fn run(
        provider: &dyn ScanProvider,
        targets: &[String],
        options: AssessOptions,
    ) -> Result<Vec<HostAssessment>, EngineError> {
        if targets.is_empty() {
            return Err(EngineError::NoTargets);
        }

        info!(targets = targets.len(), "starting probe");
        let probes = provider.probe_hosts(targets).await?;
        info!(
            hosts = probes.len(),
            strategy = %options.strategy,
            "probe complete, assembling assessments"
        );

        Ok(assess_hosts(&probes, options.strategy))
    }
}

/// Assess already-collected probe records, preserving their order.
///
/// Each host is independent; callers that need parallelism can split the
/// slice freely as long as they reassemble in discovery order.
pub fn assess_hosts(probes: &[HostProbe], strategy: InferenceStrategy) -> Vec<HostAssessment> {
    probes.iter().map(|p| assess_host(p, strategy)).collect()
}

/// Assess a single host: one finding per open port+protocol, one device
/// label. Total; a host with no open ports yields an empty findings list
/// and still gets a label.
pub fn assess_host(probe: &HostProbe, strategy: InferenceStrategy) -> HostAssessment {
    let mut vulns = Vec::new();
    let mut seen = BTreeSet::new();

    for obs in &probe.observations {
        if !obs.is_open() {
            continue;
        }
        // Providers should report each open port+protocol once; drop repeats
        // rather than emit duplicate findings.
        if !seen.insert((obs.port, obs.protocol)) {
            warn!(
                ip = %probe.ip,
                port = obs.port,
                protocol = %obs.protocol,
                "duplicate open-port observation ignored"
            );
            continue;
        }
        vulns.push(classify(obs.port, &obs.service));
    }

    let signals = gather_signals(probe);
    let device_type = infer(&signals, strategy);
    debug!(ip = %probe.ip, device_type = %device_type, findings = vulns.len(), "host assessed");

    HostAssessment {
        ip: probe.ip.clone(),
        device_type,
        vulns,
        strategy,
    }
}
