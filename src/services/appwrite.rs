use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode, Url};

use crate::config::ServiceConfig;
use crate::error::{RecipeError, ServiceError};
use crate::model::RecipeRecord;
use crate::services::RecipeService;

/// Reads recipe documents through the Appwrite databases REST API.
pub struct AppwriteRecipeService {
    client: Client,
    endpoint: Url,
    project_id: String,
    database_id: String,
    collection_id: String,
    api_key: Option<String>,
}

impl AppwriteRecipeService {
    /// Create a new service from configuration
    pub fn new(config: &ServiceConfig) -> Result<Self, RecipeError> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            RecipeError::BuilderError(format!("Invalid endpoint '{}': {}", config.endpoint, e))
        })?;
        if endpoint.cannot_be_a_base() {
            return Err(RecipeError::BuilderError(format!(
                "Endpoint '{}' cannot be used as a base URL",
                config.endpoint
            )));
        }

        if config.timeout == 0 {
            return Err(RecipeError::BuilderError(
                "Request timeout must be at least one second".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(concat!("recipe-view/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            project_id: config.project_id.clone(),
            database_id: config.database_id.clone(),
            collection_id: config.collection_id.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn document_url(&self, id: &str) -> Result<Url, ServiceError> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| "Endpoint cannot be used as a base URL")?
            .pop_if_empty()
            .extend([
                "databases",
                self.database_id.as_str(),
                "collections",
                self.collection_id.as_str(),
                "documents",
                id,
            ]);
        Ok(url)
    }
}

#[async_trait]
impl RecipeService for AppwriteRecipeService {
    fn service_name(&self) -> &str {
        "appwrite"
    }

    async fn get_recipe(&self, id: &str) -> Result<Option<RecipeRecord>, ServiceError> {
        let url = self.document_url(id)?;
        debug!("GET {}", url);

        let mut request = self
            .client
            .get(url)
            .header("X-Appwrite-Project", &self.project_id);
        if let Some(api_key) = &self.api_key {
            request = request.header("X-Appwrite-Key", api_key);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            debug!("Recipe {} not found in collection {}", id, self.collection_id);
            return Ok(None);
        }
        if !status.is_success() {
            return Err(format!("Recipe service responded with status: {}", status).into());
        }

        let record: RecipeRecord = response.json().await?;
        Ok(Some(record))
    }
}
