use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::Difficulty;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::{
    db::{IngredientModel, LabelModel, RecipeModel},
    ingredient::NewIngredient,
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewRecipe {
    pub title: String,
    pub description: Option<String>,
    pub instructions: String,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub servings: Option<i32>,
    pub difficulty: Option<Difficulty>,
    pub is_published: bool,
    pub ingredients: Vec<NewIngredient>,
    /// Raw label names, normalized before they are stored.
    pub labels: Vec<String>,
}

/// Partial recipe update; only `Some` fields are written.
///
/// Ownership, timestamps and statistics cannot be changed through this type.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RecipeChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub servings: Option<i32>,
    pub difficulty: Option<Difficulty>,
}

/// Lightweight projection used by listings and search results.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RecipeSummary {
    pub id: i32,
    pub chef_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub thumbnail_url: Option<String>,
    pub view_count: i64,
    pub favorites_count: i64,
    pub rating_count: i64,
    pub average_rating: Decimal,
    pub created_at: NaiveDateTime,
}

impl From<RecipeModel> for RecipeSummary {
    fn from(recipe: RecipeModel) -> Self {
        Self {
            id: recipe.id,
            chef_id: recipe.chef_id,
            title: recipe.title,
            description: recipe.description,
            difficulty: recipe.difficulty,
            prep_time: recipe.prep_time,
            cook_time: recipe.cook_time,
            thumbnail_url: recipe.thumbnail_url,
            view_count: recipe.view_count,
            favorites_count: recipe.favorites_count,
            rating_count: recipe.rating_count,
            average_rating: recipe.average_rating,
            created_at: recipe.created_at,
        }
    }
}

/// A recipe with its ingredients and labels, as seen by one reader.
#[derive(Clone, Debug, PartialEq)]
pub struct RecipeDetails {
    pub recipe: RecipeModel,
    /// Ordered by display order.
    pub ingredients: Vec<IngredientModel>,
    /// Ordered by name.
    pub labels: Vec<LabelModel>,
    /// Always `false` for anonymous readers.
    pub is_favorite: bool,
}

/// Ordering applied to recipe listings. Ties are broken by descending id.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecipeSort {
    #[default]
    Newest,
    Oldest,
    TopRated,
    MostViewed,
    MostFavorited,
    Title,
}

/// Image references stored on a recipe.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageUrls {
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
}

impl ImageUrls {
    pub fn of(recipe: &RecipeModel) -> Self {
        Self {
            image_url: recipe.image_url.clone(),
            thumbnail_url: recipe.thumbnail_url.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.image_url.is_none() && self.thumbnail_url.is_none()
    }
}
