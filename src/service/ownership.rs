//! Recipe ownership checks.

use sea_orm::ConnectionTrait;

use crate::{
    data::recipe::RecipeRepository,
    error::{recipe::RecipeError, Error},
    model::{db::RecipeModel, user::ActingUser},
};

/// Fails unless the acting user created the recipe.
///
/// Roles are not considered, an admin is treated like any other user.
pub fn assert_owner(recipe: &RecipeModel, user: &ActingUser) -> Result<(), RecipeError> {
    if recipe.chef_id != user.id {
        return Err(RecipeError::NotOwner {
            recipe_id: recipe.id,
            user_id: user.id,
        });
    }

    Ok(())
}

/// Fetches a recipe or fails with [`RecipeError::NotFound`].
pub(crate) async fn require_recipe<C: ConnectionTrait>(
    db: &C,
    recipe_id: i32,
) -> Result<RecipeModel, Error> {
    RecipeRepository::new(db)
        .get(recipe_id)
        .await?
        .ok_or_else(|| RecipeError::NotFound(recipe_id).into())
}

/// Fetches and locks a recipe the acting user may modify.
///
/// Called with a transaction, the row lock is held until it ends, so the recipe cannot be
/// deleted between this check and the caller's writes.
///
/// # Returns
/// - `Ok(RecipeModel)` - The recipe, owned by `user`
/// - `Err(Error::RecipeError(RecipeError::NotFound))` - No recipe with that id
/// - `Err(Error::RecipeError(RecipeError::NotOwner))` - The recipe belongs to someone else
pub(crate) async fn require_owned_recipe<C: ConnectionTrait>(
    db: &C,
    recipe_id: i32,
    user: &ActingUser,
) -> Result<RecipeModel, Error> {
    let recipe = RecipeRepository::new(db)
        .get_for_update(recipe_id)
        .await?
        .ok_or(RecipeError::NotFound(recipe_id))?;
    assert_owner(&recipe, user)?;

    Ok(recipe)
}
