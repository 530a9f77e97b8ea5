//! Database model type aliases.
//!
//! Shorthand for the `entity` crate's models, used throughout repositories and services.

/// Type alias for user database model.
pub type UserModel = entity::user::Model;

/// Type alias for recipe database model.
///
/// Carries the four denormalized aggregates (`view_count`, `favorites_count`,
/// `rating_count`, `average_rating`) next to the recipe content.
pub type RecipeModel = entity::recipe::Model;

/// Type alias for ingredient database model.
pub type IngredientModel = entity::ingredient::Model;

/// Type alias for label database model.
pub type LabelModel = entity::label::Model;

/// Type alias for favorite database model.
pub type FavoriteModel = entity::favorite::Model;

/// Type alias for rating database model.
pub type RatingModel = entity::rating::Model;

/// Type alias for recipe view database model.
pub type RecipeViewModel = entity::recipe_view::Model;
