use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        engagement::{
            EngagementKind, EngagementPayload, EngagementRecord, EngagementRepository,
            InsertOutcome,
        },
        statistics::StatisticsAggregator,
    },
    error::{engagement::EngagementError, Error},
    model::{
        db::FavoriteModel,
        page::{Page, PageRequest},
        recipe::RecipeSummary,
        user::ActingUser,
    },
    service::ownership::require_recipe,
};

/// Service for users' favorite recipes.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of FavoriteService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    ///
    /// # Returns
    /// - `FavoriteService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a recipe to the acting user's favorites and increments its favorites counter.
    ///
    /// Of two concurrent calls for the same user and recipe exactly one succeeds; the other
    /// fails with `AlreadyFavorited` and the counter grows by one.
    ///
    /// # Arguments
    /// - `user` - The acting user
    /// - `recipe_id` - ID of the recipe to favorite
    ///
    /// # Returns
    /// - `Ok(FavoriteModel)` - The new favorite
    /// - `Err(Error::RecipeError(RecipeError::NotFound))` - No recipe with that id
    /// - `Err(Error::EngagementError(EngagementError::AlreadyFavorited))` - Already a favorite
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favorite(
        &self,
        user: &ActingUser,
        recipe_id: i32,
    ) -> Result<FavoriteModel, Error> {
        let txn = self.db.begin().await?;

        require_recipe(&txn, recipe_id).await?;

        let outcome = EngagementRepository::new(&txn)
            .try_insert(user.id, recipe_id, EngagementPayload::Favorite)
            .await?;
        let favorite = match outcome {
            InsertOutcome::Inserted(EngagementRecord::Favorite(favorite)) => favorite,
            InsertOutcome::AlreadyExists => {
                return Err(EngagementError::AlreadyFavorited {
                    user_id: user.id,
                    recipe_id,
                }
                .into())
            }
            InsertOutcome::Inserted(record) => {
                return Err(Error::InternalError(format!(
                    "Favorite insert for recipe {} returned {:?}",
                    recipe_id, record
                )))
            }
        };

        StatisticsAggregator::new(&txn)
            .increase_favorites(recipe_id)
            .await?;

        txn.commit().await?;

        Ok(favorite)
    }

    /// Removes a recipe from the acting user's favorites and decrements its counter.
    ///
    /// The counter never drops below zero.
    ///
    /// # Returns
    /// - `Ok(())` - The favorite was removed
    /// - `Err(Error::RecipeError(RecipeError::NotFound))` - No recipe with that id
    /// - `Err(Error::EngagementError(EngagementError::FavoriteNotFound))` - Not a favorite
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_favorite(&self, user: &ActingUser, recipe_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        require_recipe(&txn, recipe_id).await?;

        let result = EngagementRepository::new(&txn)
            .delete(EngagementKind::Favorite, user.id, recipe_id)
            .await?;
        if result.rows_affected == 0 {
            return Err(EngagementError::FavoriteNotFound {
                user_id: user.id,
                recipe_id,
            }
            .into());
        }

        StatisticsAggregator::new(&txn)
            .decrease_favorites(recipe_id)
            .await?;

        txn.commit().await?;

        Ok(())
    }

    /// Whether the user has favorited the recipe.
    pub async fn is_favorite(&self, user: &ActingUser, recipe_id: i32) -> Result<bool, Error> {
        let favorite = EngagementRepository::new(self.db)
            .find_by_user_and_recipe(EngagementKind::Favorite, user.id, recipe_id)
            .await?;

        Ok(favorite.is_some())
    }

    /// Recipes favorited by a user, most recently favorited first.
    pub async fn list_user_favorites(
        &self,
        user_id: i32,
        page: PageRequest,
    ) -> Result<Page<RecipeSummary>, Error> {
        let (recipes, total_items) = EngagementRepository::new(self.db)
            .find_favorites_by_user(user_id, page)
            .await?;

        Ok(Page::new(recipes, page, total_items).map(RecipeSummary::from))
    }
}
