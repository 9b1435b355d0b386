mod log_sink;
mod recording;

pub use log_sink::LogSink;
pub use recording::RecordingSink;

use crate::error::RecipeError;

/// What went wrong while loading a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    InvalidId,
    FetchFailed,
    DecodeFailed,
}

/// A single failure report emitted by the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub recipe_id: String,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    /// Build a diagnostic for a load error. Plain "not found" is not a failure
    /// and yields `None`.
    pub fn from_error(recipe_id: &str, error: &RecipeError) -> Option<Self> {
        let kind = match error {
            RecipeError::InvalidId => DiagnosticKind::InvalidId,
            RecipeError::FetchFailed { .. } => DiagnosticKind::FetchFailed,
            RecipeError::DecodeFailed { .. } => DiagnosticKind::DecodeFailed,
            _ => return None,
        };

        Some(Diagnostic {
            recipe_id: recipe_id.to_string(),
            kind,
            message: error.to_string(),
        })
    }
}

/// Injected destination for loader diagnostics
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, diagnostic: &Diagnostic);
}
