use log::{error, warn};

use super::{Diagnostic, DiagnosticKind, DiagnosticSink};

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&self, diagnostic: &Diagnostic) {
        match diagnostic.kind {
            DiagnosticKind::InvalidId => {
                warn!("Rejected recipe lookup: {}", diagnostic.message)
            }
            DiagnosticKind::FetchFailed | DiagnosticKind::DecodeFailed => {
                error!("Error fetching recipe: {}", diagnostic.message)
            }
        }
    }
}
