mod list_user_favorites;

use super::*;

use crate::{
    error::{engagement::EngagementError, recipe::RecipeError, Error},
    service::engagement::favorite::FavoriteService,
};
