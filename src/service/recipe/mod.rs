//! Recipe service layer.
//!
//! Lifecycle of recipes (create, read, update, delete, publish), search, image references,
//! and the nested label and ingredient services. Every mutation is restricted to the recipe's
//! chef through [`ownership`](crate::service::ownership).

pub mod ingredient;
pub mod label;

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        engagement::{EngagementKind, EngagementPayload, EngagementRepository, InsertOutcome},
        ingredient::IngredientRepository,
        label::LabelRepository,
        recipe::{search::RecipeSearch, RecipeRepository},
        statistics::StatisticsAggregator,
    },
    error::Error,
    model::{
        db::RecipeModel,
        page::{Page, PageRequest},
        recipe::{ImageUrls, NewRecipe, RecipeChanges, RecipeDetails, RecipeSort, RecipeSummary},
        user::ActingUser,
    },
    service::{
        ownership::{require_owned_recipe, require_recipe},
        recipe::label::normalize_label_names,
    },
};

/// Service for the recipe lifecycle.
pub struct RecipeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecipeService<'a> {
    /// Creates a new instance of RecipeService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    ///
    /// # Returns
    /// - `RecipeService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a recipe owned by the acting user, together with its ingredients and labels.
    ///
    /// Label names are normalized and deduplicated; labels that do not exist yet are created.
    /// Everything is written in one transaction.
    ///
    /// # Arguments
    /// - `user` - The chef of the new recipe
    /// - `new_recipe` - Recipe content, ingredients and raw label names
    ///
    /// # Returns
    /// - `Ok(RecipeDetails)` - The stored recipe with ingredients and labels
    /// - `Err(Error::LabelError(LabelError::BlankName))` - A label name is blank
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(
        &self,
        user: &ActingUser,
        new_recipe: NewRecipe,
    ) -> Result<RecipeDetails, Error> {
        let label_names = normalize_label_names(&new_recipe.labels)?;

        let txn = self.db.begin().await?;

        let recipe = RecipeRepository::new(&txn).create(user.id, &new_recipe).await?;

        let ingredient_repo = IngredientRepository::new(&txn);
        for ingredient in &new_recipe.ingredients {
            ingredient_repo.create(recipe.id, ingredient).await?;
        }
        let ingredients = ingredient_repo.find_by_recipe(recipe.id).await?;

        let label_repo = LabelRepository::new(&txn);
        let labels = label_repo.get_or_create_many(&label_names).await?;
        let label_ids: Vec<i32> = labels.iter().map(|label| label.id).collect();
        label_repo.attach(recipe.id, &label_ids).await?;

        txn.commit().await?;

        tracing::info!(
            recipe_id = recipe.id,
            chef_id = user.id,
            "Created recipe \"{}\"",
            recipe.title
        );

        Ok(RecipeDetails {
            recipe,
            ingredients,
            labels,
            is_favorite: false,
        })
    }

    /// Reads a recipe with its ingredients and labels.
    ///
    /// Reads are public. For an authenticated reader the first read records a view and
    /// increments the recipe's view counter, later reads by the same user leave both
    /// untouched. Anonymous reads never record views.
    ///
    /// # Arguments
    /// - `recipe_id` - ID of the recipe to read
    /// - `reader` - The reading user, `None` for anonymous readers
    ///
    /// # Returns
    /// - `Ok(RecipeDetails)` - The recipe, `is_favorite` telling whether the reader favorited it
    /// - `Err(Error::RecipeError(RecipeError::NotFound))` - No recipe with that id
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_recipe(
        &self,
        recipe_id: i32,
        reader: Option<&ActingUser>,
    ) -> Result<RecipeDetails, Error> {
        let Some(reader) = reader else {
            let recipe = require_recipe(self.db, recipe_id).await?;
            let ingredients = IngredientRepository::new(self.db)
                .find_by_recipe(recipe_id)
                .await?;
            let labels = LabelRepository::new(self.db)
                .find_by_recipe(recipe_id)
                .await?;

            return Ok(RecipeDetails {
                recipe,
                ingredients,
                labels,
                is_favorite: false,
            });
        };

        let txn = self.db.begin().await?;

        let mut recipe = require_recipe(&txn, recipe_id).await?;

        let engagement_repo = EngagementRepository::new(&txn);
        let view = engagement_repo
            .try_insert(reader.id, recipe_id, EngagementPayload::View)
            .await?;
        if let InsertOutcome::Inserted(_) = view {
            StatisticsAggregator::new(&txn)
                .increment_views(recipe_id)
                .await?;
            recipe = require_recipe(&txn, recipe_id).await?;

            tracing::debug!(
                recipe_id = recipe_id,
                user_id = reader.id,
                "Recorded first view of recipe"
            );
        }

        let is_favorite = engagement_repo
            .find_by_user_and_recipe(EngagementKind::Favorite, reader.id, recipe_id)
            .await?
            .is_some();
        let ingredients = IngredientRepository::new(&txn)
            .find_by_recipe(recipe_id)
            .await?;
        let labels = LabelRepository::new(&txn).find_by_recipe(recipe_id).await?;

        txn.commit().await?;

        Ok(RecipeDetails {
            recipe,
            ingredients,
            labels,
            is_favorite,
        })
    }

    /// Applies a partial update to a recipe owned by the acting user.
    ///
    /// Only `Some` fields of `changes` are written. Ownership, timestamps and statistics are
    /// never modified here. The recipe row stays locked from the ownership check to the
    /// write, so a concurrent delete makes this fail with `NotFound`.
    ///
    /// # Returns
    /// - `Ok(RecipeModel)` - The updated recipe
    /// - `Err(Error::RecipeError(RecipeError::NotFound))` - No recipe with that id
    /// - `Err(Error::RecipeError(RecipeError::NotOwner))` - The user is not the chef
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update(
        &self,
        user: &ActingUser,
        recipe_id: i32,
        changes: RecipeChanges,
    ) -> Result<RecipeModel, Error> {
        let txn = self.db.begin().await?;

        let recipe = require_owned_recipe(&txn, recipe_id, user).await?;
        let recipe = RecipeRepository::new(&txn).update(recipe, changes).await?;

        txn.commit().await?;

        Ok(recipe)
    }

    /// Deletes a recipe together with everything that references it.
    ///
    /// Favorites, ratings, views, ingredients and label associations are removed before the
    /// recipe itself, all in one transaction. Labels stay available to other recipes.
    ///
    /// # Returns
    /// - `Ok(())` - The recipe and its dependents were removed
    /// - `Err(Error::RecipeError(RecipeError::NotFound))` - No recipe with that id
    /// - `Err(Error::RecipeError(RecipeError::NotOwner))` - The user is not the chef
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was removed
    pub async fn delete(&self, user: &ActingUser, recipe_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        require_owned_recipe(&txn, recipe_id, user).await?;

        let removed = EngagementRepository::new(&txn)
            .delete_all_for_recipe(recipe_id)
            .await?;
        IngredientRepository::new(&txn)
            .delete_all_for_recipe(recipe_id)
            .await?;
        LabelRepository::new(&txn).detach_all(recipe_id).await?;
        RecipeRepository::new(&txn).delete(recipe_id).await?;

        txn.commit().await?;

        tracing::info!(
            recipe_id = recipe_id,
            chef_id = user.id,
            favorites = removed.favorites,
            ratings = removed.ratings,
            views = removed.views,
            "Deleted recipe"
        );

        Ok(())
    }

    /// Publishes a recipe owned by the acting user.
    ///
    /// The publish timestamp is set on the first publication only. Publishing an already
    /// published recipe changes nothing but `updated_at`.
    pub async fn publish(&self, user: &ActingUser, recipe_id: i32) -> Result<RecipeModel, Error> {
        let txn = self.db.begin().await?;

        let recipe = require_owned_recipe(&txn, recipe_id, user).await?;
        let recipe = RecipeRepository::new(&txn).publish(recipe).await?;

        txn.commit().await?;

        tracing::info!(recipe_id = recipe.id, "Published recipe");

        Ok(recipe)
    }

    /// Searches recipes by keyword, labels, chef and difficulty.
    ///
    /// # Arguments
    /// - `search` - Filter criteria, absent criteria do not restrict the result
    /// - `sort` - Result ordering
    /// - `page` - Requested page
    ///
    /// # Returns
    /// - `Ok(Page<RecipeSummary>)` - Matching recipes, each at most once
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn search(
        &self,
        search: &RecipeSearch,
        sort: RecipeSort,
        page: PageRequest,
    ) -> Result<Page<RecipeSummary>, Error> {
        let (recipes, total_items) = RecipeRepository::new(self.db)
            .search(search, sort, page)
            .await?;

        Ok(Page::new(recipes, page, total_items).map(RecipeSummary::from))
    }

    /// Lists every recipe, equivalent to a search without criteria.
    pub async fn list_recipes(
        &self,
        sort: RecipeSort,
        page: PageRequest,
    ) -> Result<Page<RecipeSummary>, Error> {
        self.search(&RecipeSearch::new(), sort, page).await
    }

    /// Stores new image references on a recipe owned by the acting user.
    ///
    /// # Returns
    /// - `Ok(ImageUrls)` - The references that were replaced, for the storage to clean up
    /// - `Err(Error::RecipeError(_))` - Recipe missing or not owned by the user
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn set_images(
        &self,
        user: &ActingUser,
        recipe_id: i32,
        images: ImageUrls,
    ) -> Result<ImageUrls, Error> {
        let txn = self.db.begin().await?;

        let recipe = require_owned_recipe(&txn, recipe_id, user).await?;
        let previous = ImageUrls::of(&recipe);

        RecipeRepository::new(&txn).set_images(recipe, images).await?;

        txn.commit().await?;

        Ok(previous)
    }

    /// Removes both image references from a recipe owned by the acting user.
    ///
    /// Returns the removed references; both are `None` when the recipe had no images.
    pub async fn clear_images(
        &self,
        user: &ActingUser,
        recipe_id: i32,
    ) -> Result<ImageUrls, Error> {
        let txn = self.db.begin().await?;

        let recipe = require_owned_recipe(&txn, recipe_id, user).await?;
        let previous = ImageUrls::of(&recipe);

        if !previous.is_empty() {
            RecipeRepository::new(&txn)
                .set_images(recipe, ImageUrls::default())
                .await?;
        }

        txn.commit().await?;

        Ok(previous)
    }
}
