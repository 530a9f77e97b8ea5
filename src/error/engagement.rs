use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::error::{domain_error_response, ErrorKind};

#[derive(Error, Debug)]
pub enum EngagementError {
    #[error("Recipe {recipe_id} is already in the favorites of user {user_id}")]
    AlreadyFavorited { user_id: i32, recipe_id: i32 },
    #[error("Favorite not found for user {user_id} and recipe {recipe_id}")]
    FavoriteNotFound { user_id: i32, recipe_id: i32 },
    #[error("User {user_id} has already rated recipe {recipe_id}")]
    AlreadyRated { user_id: i32, recipe_id: i32 },
    #[error("Rating not found for user {user_id} and recipe {recipe_id}")]
    RatingNotFound { user_id: i32, recipe_id: i32 },
    #[error("You cannot rate your own recipe (recipe {recipe_id})")]
    SelfRating { recipe_id: i32 },
    #[error("Rating score must be between 1 and 5, got {0}")]
    InvalidScore(i32),
    #[error("Review must be at most {max} characters, got {actual}")]
    ReviewTooLong { max: usize, actual: usize },
}

impl EngagementError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AlreadyFavorited { .. } | Self::AlreadyRated { .. } | Self::SelfRating { .. } => {
                ErrorKind::Conflict
            }
            Self::FavoriteNotFound { .. } | Self::RatingNotFound { .. } => ErrorKind::NotFound,
            Self::InvalidScore(_) | Self::ReviewTooLong { .. } => ErrorKind::InvalidArgument,
        }
    }
}

impl IntoResponse for EngagementError {
    fn into_response(self) -> Response {
        domain_error_response(self.kind(), self)
    }
}
