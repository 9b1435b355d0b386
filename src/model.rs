use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::error::RecordField;

/// A recipe document as returned by the data service, before decoding.
///
/// Missing and `null` scalar attributes both read as empty. The id is taken
/// from `$id`, falling back to a plain `id` key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(from = "RecordDocument")]
pub struct RecipeRecord {
    /// Document id assigned by the store
    #[serde(rename = "$id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub image: String,
    pub time: String,
    pub servings: u32,
    pub ingredients: EncodedField,
    pub instructions: EncodedField,
    /// Owner of the recipe; absent on legacy and anonymous records
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

// Wire shape of a document; unknown `$`-prefixed metadata is ignored.
#[derive(Deserialize)]
struct RecordDocument {
    #[serde(rename = "$id", default)]
    document_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    servings: u32,
    #[serde(default)]
    ingredients: EncodedField,
    #[serde(default)]
    instructions: EncodedField,
    #[serde(rename = "userId", default)]
    user_id: Option<String>,
}

impl From<RecordDocument> for RecipeRecord {
    fn from(document: RecordDocument) -> Self {
        RecipeRecord {
            id: document.document_id.or(document.id),
            title: document.title,
            description: document.description,
            image: document.image,
            time: document.time,
            servings: document.servings,
            ingredients: document.ingredients,
            instructions: document.instructions,
            user_id: document.user_id,
        }
    }
}

// Unset optional attributes come back from the store as explicit nulls.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A list field stored either as a JSON-encoded string or as a nested array.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum EncodedField {
    /// Legacy form: the list serialized into a string
    Json(String),
    /// Any other JSON value, checked when decoded
    Structured(Value),
}

impl Default for EncodedField {
    fn default() -> Self {
        EncodedField::Structured(Value::Null)
    }
}

impl EncodedField {
    /// Encode a list into the legacy string form.
    pub fn encode<T: Serialize>(items: &[T]) -> Result<Self, serde_json::Error> {
        serde_json::to_string(items).map(EncodedField::Json)
    }

    pub fn decode<T: DeserializeOwned>(&self) -> Result<Vec<T>, serde_json::Error> {
        match self {
            EncodedField::Json(text) => serde_json::from_str(text),
            EncodedField::Structured(value) => Vec::<T>::deserialize(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub amount: String,
    #[serde(default)]
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            unit: unit.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

// Hand-entered amounts are sometimes stored as bare numbers.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Text(text)) => text,
        Some(TextOrNumber::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

/// Fully decoded recipe, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub image: String,
    pub time: String,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub user_id: Option<String>,
}

/// Identifiers handed to the edit/delete action component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActionTarget {
    pub recipe_id: String,
    pub user_id: String,
}

impl Recipe {
    pub fn action_target(&self) -> ActionTarget {
        ActionTarget {
            recipe_id: self.id.clone().unwrap_or_default(),
            user_id: self.user_id.clone().unwrap_or_default(),
        }
    }
}

/// A list field of a record did not decode.
#[derive(Debug, Error)]
#[error("invalid {field}: {source}")]
pub struct FieldDecodeError {
    pub field: RecordField,
    #[source]
    pub source: serde_json::Error,
}

impl TryFrom<RecipeRecord> for Recipe {
    type Error = FieldDecodeError;

    fn try_from(record: RecipeRecord) -> Result<Self, Self::Error> {
        let ingredients = record
            .ingredients
            .decode::<Ingredient>()
            .map_err(|source| FieldDecodeError {
                field: RecordField::Ingredients,
                source,
            })?;
        let instructions = record
            .instructions
            .decode::<String>()
            .map_err(|source| FieldDecodeError {
                field: RecordField::Instructions,
                source,
            })?;

        Ok(Recipe {
            id: record.id,
            title: record.title,
            description: record.description,
            image: record.image,
            time: record.time,
            servings: record.servings,
            ingredients,
            instructions,
            user_id: record.user_id,
        })
    }
}

impl RecipeRecord {
    /// Decode the list fields and project the record into a [`Recipe`].
    pub fn into_recipe(self) -> Result<Recipe, FieldDecodeError> {
        Recipe::try_from(self)
    }
}
