use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::error::{domain_error_response, ErrorKind};

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Recipe not found with id: {0}")]
    NotFound(i32),
    #[error("User {user_id} is not allowed to modify recipe {recipe_id}")]
    NotOwner { recipe_id: i32, user_id: i32 },
    #[error("Ingredient not found with id: {ingredient_id} for recipe id: {recipe_id}")]
    IngredientNotFound { ingredient_id: i32, recipe_id: i32 },
}

impl RecipeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) | Self::IngredientNotFound { .. } => ErrorKind::NotFound,
            Self::NotOwner { .. } => ErrorKind::Unauthorized,
        }
    }
}

impl IntoResponse for RecipeError {
    fn into_response(self) -> Response {
        domain_error_response(self.kind(), self)
    }
}
