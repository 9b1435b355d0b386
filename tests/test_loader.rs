use recipe_view::{
    render_page, DiagnosticKind, FallbackPolicy, InMemoryRecipeService, Ingredient, LoadOutcome,
    RecipeLoader, RecipeView, RecordingSink,
};

const RECORDS: &str = r#"
[
    {
        "$id": "r1",
        "title": "Soup",
        "description": "Warm",
        "image": "/i.jpg",
        "time": "20m",
        "servings": 2,
        "ingredients": "[{\"name\":\"Salt\",\"amount\":\"1\",\"unit\":\"tsp\"}]",
        "instructions": "[\"Boil water\"]"
    },
    {
        "$id": "r2",
        "title": "Broken",
        "servings": 1,
        "ingredients": "not json",
        "instructions": "[]"
    },
    {
        "$id": "r3",
        "title": "Stew",
        "description": "Hearty",
        "image": "/stew.jpg",
        "time": "2h",
        "servings": 6,
        "ingredients": [
            {"name": "Beef", "amount": "1", "unit": "kg"},
            {"name": "Carrots", "amount": 4},
            {"name": "Stock", "amount": "500", "unit": "ml"}
        ],
        "instructions": ["Brown the beef", "Add everything else", "Simmer"],
        "userId": "chef-1"
    }
]
"#;

fn loader() -> (RecipeLoader, RecordingSink) {
    let sink = RecordingSink::new();
    let loader = RecipeLoader::builder()
        .service(InMemoryRecipeService::from_json(RECORDS).unwrap())
        .diagnostics(sink.clone())
        .build()
        .unwrap();
    (loader, sink)
}

#[tokio::test]
async fn test_soup_example() {
    let (loader, sink) = loader();

    let recipe = match loader.load("r1").await {
        LoadOutcome::Found(recipe) => recipe,
        LoadOutcome::NotFound => panic!("Expected r1 to load"),
    };

    assert_eq!(recipe.id.as_deref(), Some("r1"));
    assert_eq!(recipe.title, "Soup");
    assert_eq!(recipe.description, "Warm");
    assert_eq!(recipe.image, "/i.jpg");
    assert_eq!(recipe.time, "20m");
    assert_eq!(recipe.servings, 2);
    assert_eq!(recipe.ingredients, vec![Ingredient::new("Salt", "1", "tsp")]);
    assert_eq!(recipe.instructions, vec!["Boil water"]);
    assert!(sink.is_empty());
}

#[tokio::test]
async fn test_missing_example() {
    let (loader, sink) = loader();

    assert_eq!(loader.load("missing").await, LoadOutcome::NotFound);
    assert_eq!(loader.render("missing").await, "Recipe not found");
    assert!(sink.is_empty());
}

#[tokio::test]
async fn test_not_json_example() {
    let (loader, sink) = loader();

    assert_eq!(loader.load("r2").await, LoadOutcome::NotFound);

    let entries = sink.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].kind, DiagnosticKind::DecodeFailed);
    assert_eq!(entries[0].recipe_id, "r2");
    assert!(entries[0].message.contains("ingredients"));
}

#[tokio::test]
async fn test_structured_record_and_view() {
    let (loader, _sink) = loader();

    let recipe = loader.load("r3").await.into_option().unwrap();
    let view = RecipeView::from(&recipe);

    assert_eq!(view.servings_label, "6 servings");
    let quantities: Vec<&str> = view.ingredients.iter().map(|r| r.quantity.as_str()).collect();
    assert_eq!(quantities, vec!["1 kg", "4", "500 ml"]);
    let steps: Vec<(usize, &str)> = view
        .steps
        .iter()
        .map(|s| (s.number, s.text.as_str()))
        .collect();
    assert_eq!(
        steps,
        vec![
            (1, "Brown the beef"),
            (2, "Add everything else"),
            (3, "Simmer")
        ]
    );
    assert_eq!(view.actions.recipe_id, "r3");
    assert_eq!(view.actions.user_id, "chef-1");
}

#[tokio::test]
async fn test_absent_user_id_defaults_to_empty() {
    let (loader, _sink) = loader();

    let recipe = loader.load("r1").await.into_option().unwrap();
    let view = RecipeView::from(&recipe);

    assert_eq!(view.actions.recipe_id, "r1");
    assert_eq!(view.actions.user_id, "");
}

#[tokio::test]
async fn test_concurrent_loads_are_independent() {
    let (loader, sink) = loader();

    let (soup, broken, stew, missing) = tokio::join!(
        loader.load("r1"),
        loader.load("r2"),
        loader.load("r3"),
        loader.load("missing"),
    );

    assert!(soup.is_found());
    assert_eq!(broken, LoadOutcome::NotFound);
    assert!(stew.is_found());
    assert_eq!(missing, LoadOutcome::NotFound);
    assert_eq!(sink.entries().len(), 1);
}

#[tokio::test]
async fn test_loads_across_tasks() {
    let (loader, _sink) = loader();

    let handles: Vec<_> = ["r1", "r3", "r1", "r3"]
        .into_iter()
        .map(|id| {
            let loader = loader.clone();
            tokio::spawn(async move { loader.load(id).await.is_found() })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap());
    }
}

#[tokio::test]
async fn test_render_generic_policy() {
    let (loader, _sink) = loader();

    let result = loader.try_load("r2").await;
    assert_eq!(
        render_page(&result, FallbackPolicy::Generic),
        "Error loading recipe"
    );
}
