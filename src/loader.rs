use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::builder::RecipeLoaderBuilder;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::RecipeError;
use crate::model::Recipe;
use crate::services::RecipeService;
use crate::view::{render_page, FallbackPolicy};

/// Result of [`RecipeLoader::load`]. Every failure collapses into `NotFound`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Found(Recipe),
    NotFound,
}

impl LoadOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, LoadOutcome::Found(_))
    }

    pub fn into_option(self) -> Option<Recipe> {
        match self {
            LoadOutcome::Found(recipe) => Some(recipe),
            LoadOutcome::NotFound => None,
        }
    }
}

/// Fetches recipe records and decodes them into [`Recipe`] view models.
///
/// The loader keeps no per-request state, so a single instance (or its clones)
/// can serve any number of concurrent loads.
#[derive(Clone)]
pub struct RecipeLoader {
    service: Arc<dyn RecipeService>,
    diagnostics: Arc<dyn DiagnosticSink>,
    fallback: FallbackPolicy,
}

impl RecipeLoader {
    pub fn new(
        service: Arc<dyn RecipeService>,
        diagnostics: Arc<dyn DiagnosticSink>,
        fallback: FallbackPolicy,
    ) -> Self {
        Self {
            service,
            diagnostics,
            fallback,
        }
    }

    /// Creates a new builder for a loader
    ///
    /// # Example
    /// ```
    /// use recipe_view::{InMemoryRecipeService, RecipeLoader};
    ///
    /// let loader = RecipeLoader::builder()
    ///     .service(InMemoryRecipeService::default())
    ///     .build();
    /// assert!(loader.is_ok());
    /// ```
    pub fn builder() -> RecipeLoaderBuilder {
        RecipeLoaderBuilder::default()
    }

    pub fn fallback(&self) -> FallbackPolicy {
        self.fallback
    }

    /// Load a recipe, keeping the reason for any failure.
    ///
    /// An empty id is rejected without calling the service; any other id is
    /// passed through as given. Failures other than a plain "not found" are
    /// reported to the diagnostics sink before being returned.
    pub async fn try_load(&self, id: &str) -> Result<Recipe, RecipeError> {
        let result = self.fetch_and_decode(id).await;

        if let Err(err) = &result {
            match Diagnostic::from_error(id, err) {
                Some(diagnostic) => self.diagnostics.record(&diagnostic),
                None => debug!("Recipe {} not found", id),
            }
        }

        result
    }

    /// Load a recipe, treating every failure as "not found".
    pub async fn load(&self, id: &str) -> LoadOutcome {
        match self.try_load(id).await {
            Ok(recipe) => LoadOutcome::Found(recipe),
            Err(_) => LoadOutcome::NotFound,
        }
    }

    /// Load a recipe and render it as plain text, or the fallback message.
    pub async fn render(&self, id: &str) -> String {
        render_page(&self.try_load(id).await, self.fallback)
    }

    async fn fetch_and_decode(&self, id: &str) -> Result<Recipe, RecipeError> {
        if id.is_empty() {
            return Err(RecipeError::InvalidId);
        }

        debug!(
            "Loading recipe {} from {}",
            id,
            self.service.service_name()
        );

        let record = self
            .service
            .get_recipe(id)
            .await
            .map_err(|source| RecipeError::FetchFailed {
                id: id.to_string(),
                source,
            })?
            .ok_or_else(|| RecipeError::NotFound { id: id.to_string() })?;

        record
            .into_recipe()
            .map_err(|err| RecipeError::DecodeFailed {
                id: id.to_string(),
                field: err.field,
                source: err.source,
            })
    }
}

impl fmt::Debug for RecipeLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecipeLoader")
            .field("service", &self.service.service_name())
            .field("fallback", &self.fallback)
            .finish()
    }
}
