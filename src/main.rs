use std::env;

use log::debug;

use recipe_view::{appwrite_loader, InMemoryRecipeService, RecipeLoader, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get the recipe id and optional records file from command-line arguments
    let args: Vec<String> = env::args().collect();
    let id = args
        .get(1)
        .ok_or("Usage: recipe-view <recipe-id> [records.json]")?;

    let loader = match args.get(2) {
        Some(path) => {
            debug!("Reading recipes from {}", path);
            let service = InMemoryRecipeService::from_file(path)
                .await
                .map_err(|e| format!("Failed to read {}: {}", path, e))?;
            RecipeLoader::builder().service(service).build()?
        }
        None => {
            let config = ServiceConfig::load()?;
            appwrite_loader(&config)?
        }
    };

    println!("{}", loader.render(id).await);

    Ok(())
}
