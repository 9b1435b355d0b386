use std::sync::Arc;

use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::loader::RecipeLoader;
use crate::services::RecipeService;
use crate::view::FallbackPolicy;
use crate::RecipeError;

/// Builder for configuring a [`RecipeLoader`]
#[derive(Default)]
pub struct RecipeLoaderBuilder {
    service: Option<Arc<dyn RecipeService>>,
    diagnostics: Option<Arc<dyn DiagnosticSink>>,
    fallback: FallbackPolicy,
}

impl RecipeLoaderBuilder {
    /// Set the service records are fetched from
    ///
    /// # Example
    /// ```
    /// use recipe_view::{InMemoryRecipeService, RecipeLoader};
    ///
    /// let builder = RecipeLoader::builder()
    ///     .service(InMemoryRecipeService::default());
    /// ```
    pub fn service(mut self, service: impl RecipeService + 'static) -> Self {
        self.service = Some(Arc::new(service));
        self
    }

    /// Set a service that is already shared with other owners
    pub fn shared_service(mut self, service: Arc<dyn RecipeService>) -> Self {
        self.service = Some(service);
        self
    }

    /// Set where load failures are reported
    ///
    /// Defaults to [`LogSink`], which writes through the `log` facade.
    ///
    /// # Example
    /// ```
    /// use recipe_view::{InMemoryRecipeService, RecipeLoader, RecordingSink};
    ///
    /// let sink = RecordingSink::new();
    /// let builder = RecipeLoader::builder()
    ///     .service(InMemoryRecipeService::default())
    ///     .diagnostics(sink.clone());
    /// ```
    pub fn diagnostics(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.diagnostics = Some(Arc::new(sink));
        self
    }

    /// Set the message rendered when a recipe cannot be shown
    pub fn fallback(mut self, policy: FallbackPolicy) -> Self {
        self.fallback = policy;
        self
    }

    /// Build the loader
    ///
    /// # Errors
    /// Returns `RecipeError::BuilderError` if no service was specified
    pub fn build(self) -> Result<RecipeLoader, RecipeError> {
        let service = self.service.ok_or_else(|| {
            RecipeError::BuilderError("No recipe service specified. Use .service()".to_string())
        })?;
        let diagnostics = self
            .diagnostics
            .unwrap_or_else(|| Arc::new(LogSink) as Arc<dyn DiagnosticSink>);

        Ok(RecipeLoader::new(service, diagnostics, self.fallback))
    }
}
