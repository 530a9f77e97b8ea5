use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::ingredient::IngredientRepository,
    error::{recipe::RecipeError, Error},
    model::{
        db::IngredientModel,
        ingredient::{IngredientChanges, NewIngredient},
        user::ActingUser,
    },
    service::ownership::{require_owned_recipe, require_recipe},
};

/// Service for the ingredient list of a recipe.
///
/// Mutations require the acting user to be the recipe's chef, and an ingredient is only
/// reachable through the recipe it belongs to.
pub struct IngredientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IngredientService<'a> {
    /// Creates a new instance of IngredientService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ingredients of a recipe ordered by display order. Public.
    pub async fn list_ingredients(&self, recipe_id: i32) -> Result<Vec<IngredientModel>, Error> {
        require_recipe(self.db, recipe_id).await?;

        let ingredients = IngredientRepository::new(self.db)
            .find_by_recipe(recipe_id)
            .await?;

        Ok(ingredients)
    }

    /// Adds an ingredient, appended after the last one when no display order is given.
    pub async fn add_ingredient(
        &self,
        user: &ActingUser,
        recipe_id: i32,
        ingredient: NewIngredient,
    ) -> Result<IngredientModel, Error> {
        let txn = self.db.begin().await?;

        require_owned_recipe(&txn, recipe_id, user).await?;

        let ingredient = IngredientRepository::new(&txn)
            .create(recipe_id, &ingredient)
            .await?;

        txn.commit().await?;

        Ok(ingredient)
    }

    /// Applies a partial update to one ingredient of the recipe.
    ///
    /// # Returns
    /// - `Ok(IngredientModel)` - The updated ingredient
    /// - `Err(Error::RecipeError(RecipeError::IngredientNotFound))` - No such ingredient on
    ///   this recipe
    /// - `Err(Error::RecipeError(_))` - Recipe missing or not owned by the user
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_ingredient(
        &self,
        user: &ActingUser,
        recipe_id: i32,
        ingredient_id: i32,
        changes: IngredientChanges,
    ) -> Result<IngredientModel, Error> {
        let txn = self.db.begin().await?;

        require_owned_recipe(&txn, recipe_id, user).await?;

        let ingredient_repo = IngredientRepository::new(&txn);
        let ingredient = ingredient_repo
            .get_for_recipe(recipe_id, ingredient_id)
            .await?
            .ok_or(RecipeError::IngredientNotFound {
                ingredient_id,
                recipe_id,
            })?;

        let ingredient = ingredient_repo.update(ingredient, changes).await?;

        txn.commit().await?;

        Ok(ingredient)
    }

    pub async fn delete_ingredient(
        &self,
        user: &ActingUser,
        recipe_id: i32,
        ingredient_id: i32,
    ) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        require_owned_recipe(&txn, recipe_id, user).await?;

        let ingredient_repo = IngredientRepository::new(&txn);
        if ingredient_repo
            .get_for_recipe(recipe_id, ingredient_id)
            .await?
            .is_none()
        {
            return Err(RecipeError::IngredientNotFound {
                ingredient_id,
                recipe_id,
            }
            .into());
        }

        ingredient_repo.delete(ingredient_id).await?;

        txn.commit().await?;

        Ok(())
    }
}
