//! Recipe detail loading.
//!
//! Fetches a recipe document from a data service, decodes its ingredient and
//! instruction lists, and projects it into display-ready rows.
//!
//! # Quick Start
//!
//! ```
//! use recipe_view::{InMemoryRecipeService, LoadOutcome, RecipeLoader};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = InMemoryRecipeService::from_json(
//!     r#"[{"$id": "r1", "title": "Soup", "servings": 2,
//!          "ingredients": "[{\"name\":\"Salt\",\"amount\":\"1\",\"unit\":\"tsp\"}]",
//!          "instructions": "[\"Boil water\"]"}]"#,
//! )?;
//! let loader = RecipeLoader::builder().service(service).build()?;
//!
//! match loader.load("r1").await {
//!     LoadOutcome::Found(recipe) => assert_eq!(recipe.instructions, vec!["Boil water"]),
//!     LoadOutcome::NotFound => unreachable!(),
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod loader;
pub mod model;
pub mod services;
pub mod view;

pub use builder::RecipeLoaderBuilder;
pub use config::ServiceConfig;
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, LogSink, RecordingSink};
pub use error::{RecipeError, RecordField, ServiceError};
pub use loader::{LoadOutcome, RecipeLoader};
pub use model::{ActionTarget, EncodedField, Ingredient, Recipe, RecipeRecord};
pub use services::{AppwriteRecipeService, InMemoryRecipeService, RecipeService};
pub use view::{render_page, FallbackPolicy, IngredientRow, InstructionStep, RecipeView};

/// Build a loader backed by the Appwrite service described in `config`,
/// reporting failures through the `log` facade.
pub fn appwrite_loader(config: &ServiceConfig) -> Result<RecipeLoader, RecipeError> {
    let service = AppwriteRecipeService::new(config)?;
    RecipeLoader::builder()
        .service(service)
        .fallback(config.fallback)
        .build()
}

/// Load a recipe using configuration from `config.toml` and the environment.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let outcome = recipe_view::load_recipe("r1").await?;
/// println!("found: {}", outcome.is_found());
/// # Ok(())
/// # }
/// ```
pub async fn load_recipe(id: &str) -> Result<LoadOutcome, RecipeError> {
    let config = ServiceConfig::load()?;
    let loader = appwrite_loader(&config)?;
    Ok(loader.load(id).await)
}
