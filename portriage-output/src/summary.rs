use portriage_types::{HostAssessment, RiskTier};

/// Finding counts per risk tier across a whole report, for dashboards and
/// summary lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskTally {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl RiskTally {
    pub fn of(report: &[HostAssessment]) -> Self {
        let mut tally = Self::default();
        for host in report {
            for finding in &host.vulns {
                match finding.risk {
                    RiskTier::High => tally.high += 1,
                    RiskTier::Medium => tally.medium += 1,
                    RiskTier::Low => tally.low += 1,
                }
            }
        }
        tally
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}
