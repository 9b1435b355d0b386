use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use crate::error::ServiceError;
use crate::model::RecipeRecord;
use crate::services::RecipeService;

/// Serves records from memory, keyed by their document id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecipeService {
    records: Arc<HashMap<String, RecipeRecord>>,
}

impl InMemoryRecipeService {
    /// Records without an id cannot be looked up and are skipped.
    pub fn new(records: impl IntoIterator<Item = RecipeRecord>) -> Self {
        let mut by_id = HashMap::new();
        for record in records {
            match record.id.clone() {
                Some(id) => {
                    by_id.insert(id, record);
                }
                None => warn!("Skipping recipe '{}' without an id", record.title),
            }
        }

        Self {
            records: Arc::new(by_id),
        }
    }

    /// Parse a JSON array of recipe documents.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let records: Vec<RecipeRecord> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, ServiceError> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await?;
        let service = Self::from_json(&contents)?;
        debug!("Loaded {} recipes from {}", service.len(), path.display());
        Ok(service)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl RecipeService for InMemoryRecipeService {
    fn service_name(&self) -> &str {
        "memory"
    }

    async fn get_recipe(&self, id: &str) -> Result<Option<RecipeRecord>, ServiceError> {
        Ok(self.records.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORDS: &str = r#"
    [
        {
            "$id": "r1",
            "title": "Soup",
            "ingredients": "[]",
            "instructions": "[]"
        },
        {
            "title": "Orphan",
            "ingredients": "[]",
            "instructions": "[]"
        }
    ]
    "#;

    #[tokio::test]
    async fn test_get_existing_recipe() {
        let service = InMemoryRecipeService::from_json(RECORDS).unwrap();

        let record = service.get_recipe("r1").await.unwrap().unwrap();
        assert_eq!(record.title, "Soup");
    }

    #[tokio::test]
    async fn test_get_missing_recipe() {
        let service = InMemoryRecipeService::from_json(RECORDS).unwrap();

        assert!(service.get_recipe("missing").await.unwrap().is_none());
    }

    #[test]
    fn test_records_without_id_are_skipped() {
        let service = InMemoryRecipeService::from_json(RECORDS).unwrap();
        assert_eq!(service.len(), 1);
    }

    #[tokio::test]
    async fn test_from_file_missing_path() {
        let result = InMemoryRecipeService::from_file("/nonexistent/recipes.json").await;
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_service() {
        let service = InMemoryRecipeService::default();
        assert!(service.is_empty());
        assert_eq!(service.service_name(), "memory");
    }
}
