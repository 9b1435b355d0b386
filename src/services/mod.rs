mod appwrite;
mod memory;

pub use appwrite::AppwriteRecipeService;
pub use memory::InMemoryRecipeService;

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::model::RecipeRecord;

/// Source of recipe documents
#[async_trait]
pub trait RecipeService: Send + Sync {
    /// Get the service name (e.g., "appwrite", "memory")
    fn service_name(&self) -> &str;

    /// Fetch the record with this id. `Ok(None)` means the service has no
    /// such record; `Err` means the lookup itself failed.
    async fn get_recipe(&self, id: &str) -> Result<Option<RecipeRecord>, ServiceError>;
}
