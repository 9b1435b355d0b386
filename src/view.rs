use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RecipeError;
use crate::model::{ActionTarget, Recipe};

/// Message shown in place of a recipe that could not be loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// "Recipe not found" for every failure
    #[default]
    NotFound,
    /// "Error loading recipe" for every failure
    Generic,
}

impl FallbackPolicy {
    pub fn message(&self) -> &'static str {
        match self {
            FallbackPolicy::NotFound => "Recipe not found",
            FallbackPolicy::Generic => "Error loading recipe",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientRow {
    pub name: String,
    /// Amount and unit, e.g. "1 tsp"
    pub quantity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstructionStep {
    /// 1-based position
    pub number: usize,
    pub text: String,
}

/// The fields of a recipe page, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeView {
    pub title: String,
    pub description: String,
    pub time: String,
    pub servings_label: String,
    pub image: ImageRef,
    pub ingredients: Vec<IngredientRow>,
    pub steps: Vec<InstructionStep>,
    pub actions: ActionTarget,
}

impl From<&Recipe> for RecipeView {
    fn from(recipe: &Recipe) -> Self {
        RecipeView {
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            time: recipe.time.clone(),
            servings_label: format!("{} servings", recipe.servings),
            image: ImageRef {
                src: recipe.image.clone(),
                alt: recipe.title.clone(),
            },
            ingredients: recipe
                .ingredients
                .iter()
                .map(|ingredient| IngredientRow {
                    name: ingredient.name.clone(),
                    quantity: format!("{} {}", ingredient.amount, ingredient.unit)
                        .trim()
                        .to_string(),
                })
                .collect(),
            steps: recipe
                .instructions
                .iter()
                .enumerate()
                .map(|(index, text)| InstructionStep {
                    number: index + 1,
                    text: text.clone(),
                })
                .collect(),
            actions: recipe.action_target(),
        }
    }
}

impl fmt::Display for RecipeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
        }
        writeln!(f)?;
        writeln!(f, "Time: {}", self.time)?;
        writeln!(f, "Serves: {}", self.servings_label)?;
        if !self.image.src.is_empty() {
            writeln!(f, "Image: {}", self.image.src)?;
        }

        writeln!(f)?;
        writeln!(f, "Ingredients")?;
        for row in &self.ingredients {
            if row.quantity.is_empty() {
                writeln!(f, "  - {}", row.name)?;
            } else {
                writeln!(f, "  - {} ({})", row.name, row.quantity)?;
            }
        }

        writeln!(f)?;
        write!(f, "Instructions")?;
        for step in &self.steps {
            write!(f, "\n  {}. {}", step.number, step.text)?;
        }
        Ok(())
    }
}

/// Render a load result as plain text. Any error renders the fallback message
/// alone; a partially decoded recipe is never shown.
pub fn render_page(result: &Result<Recipe, RecipeError>, policy: FallbackPolicy) -> String {
    match result {
        Ok(recipe) => RecipeView::from(recipe).to_string(),
        Err(_) => policy.message().to_string(),
    }
}
