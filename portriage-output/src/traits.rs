use portriage_types::HostAssessment;

/// Trait for formatting an ordered assessment report for emission.
pub trait ReportFormatter: Send + Sync {
    fn format(&self, report: &[HostAssessment]) -> Result<String, OutputError>;
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("formatting error: {0}")]
    FormatError(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
