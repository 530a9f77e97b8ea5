pub use super::favorite::Entity as Favorite;
pub use super::ingredient::Entity as Ingredient;
pub use super::label::Entity as Label;
pub use super::rating::Entity as Rating;
pub use super::recipe::Entity as Recipe;
pub use super::recipe_label::Entity as RecipeLabel;
pub use super::recipe_view::Entity as RecipeView;
pub use super::user::Entity as User;
