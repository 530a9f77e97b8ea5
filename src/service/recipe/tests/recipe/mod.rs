mod delete;
mod search;

use super::*;

use crate::{
    error::{recipe::RecipeError, Error},
    service::recipe::RecipeService,
};
