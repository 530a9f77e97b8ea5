use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    data::{
        engagement::{
            EngagementKind, EngagementPayload, EngagementRecord, EngagementRepository,
            InsertOutcome,
        },
        recipe::RecipeRepository,
        statistics::StatisticsAggregator,
    },
    error::{engagement::EngagementError, recipe::RecipeError, Error},
    model::{
        db::{RatingModel, RecipeModel},
        engagement::{
            NewRating, RatingChanges, MAX_RATING_SCORE, MAX_REVIEW_LENGTH, MIN_RATING_SCORE,
        },
        page::{Page, PageRequest},
        user::ActingUser,
    },
    service::ownership::require_recipe,
};

fn validate_score(score: i32) -> Result<(), EngagementError> {
    if !(MIN_RATING_SCORE..=MAX_RATING_SCORE).contains(&score) {
        return Err(EngagementError::InvalidScore(score));
    }

    Ok(())
}

fn validate_review(review: Option<&str>) -> Result<(), EngagementError> {
    if let Some(review) = review {
        let length = review.chars().count();
        if length > MAX_REVIEW_LENGTH {
            return Err(EngagementError::ReviewTooLong {
                max: MAX_REVIEW_LENGTH,
                actual: length,
            });
        }
    }

    Ok(())
}

/// Locks the recipe row for the rest of the transaction.
///
/// Rating changes on one recipe are serialized by this lock, so each recomputation of the
/// rating statistics sees every rating committed before it.
async fn lock_recipe(txn: &DatabaseTransaction, recipe_id: i32) -> Result<RecipeModel, Error> {
    RecipeRepository::new(txn)
        .get_for_update(recipe_id)
        .await?
        .ok_or_else(|| RecipeError::NotFound(recipe_id).into())
}

/// Service for recipe ratings.
///
/// Every change to a rating recomputes the recipe's `rating_count` and `average_rating`
/// from the stored ratings in the same transaction.
pub struct RatingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RatingService<'a> {
    /// Creates a new instance of RatingService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Rates a recipe as the acting user.
    ///
    /// # Arguments
    /// - `user` - The acting user, must not be the recipe's chef
    /// - `recipe_id` - ID of the recipe to rate
    /// - `rating` - Score from 1 to 5 and an optional review
    ///
    /// # Returns
    /// - `Ok(RatingModel)` - The new rating
    /// - `Err(Error::EngagementError(EngagementError::InvalidScore))` - Score outside 1..=5
    /// - `Err(Error::EngagementError(EngagementError::ReviewTooLong))` - Review over 500 characters
    /// - `Err(Error::RecipeError(RecipeError::NotFound))` - No recipe with that id
    /// - `Err(Error::EngagementError(EngagementError::SelfRating))` - The user is the chef
    /// - `Err(Error::EngagementError(EngagementError::AlreadyRated))` - The user rated before
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_rating(
        &self,
        user: &ActingUser,
        recipe_id: i32,
        rating: NewRating,
    ) -> Result<RatingModel, Error> {
        validate_score(rating.score)?;
        validate_review(rating.review.as_deref())?;

        let txn = self.db.begin().await?;

        let recipe = lock_recipe(&txn, recipe_id).await?;
        if recipe.chef_id == user.id {
            return Err(EngagementError::SelfRating { recipe_id }.into());
        }

        let outcome = EngagementRepository::new(&txn)
            .try_insert(
                user.id,
                recipe_id,
                EngagementPayload::Rating {
                    score: rating.score,
                    review: rating.review,
                },
            )
            .await?;
        let rating = match outcome {
            InsertOutcome::Inserted(EngagementRecord::Rating(rating)) => rating,
            InsertOutcome::AlreadyExists => {
                return Err(EngagementError::AlreadyRated {
                    user_id: user.id,
                    recipe_id,
                }
                .into())
            }
            InsertOutcome::Inserted(record) => {
                return Err(Error::InternalError(format!(
                    "Rating insert for recipe {} returned {:?}",
                    recipe_id, record
                )))
            }
        };

        StatisticsAggregator::new(&txn)
            .recompute_rating_stats(recipe_id)
            .await?;

        txn.commit().await?;

        Ok(rating)
    }

    /// Changes score and/or review of the acting user's rating of a recipe.
    ///
    /// # Returns
    /// - `Ok(RatingModel)` - The updated rating
    /// - `Err(Error::EngagementError(EngagementError::RatingNotFound))` - The user has not
    ///   rated the recipe
    /// - `Err(_)` - Same validation and lookup failures as [`Self::add_rating`]
    pub async fn update_rating(
        &self,
        user: &ActingUser,
        recipe_id: i32,
        changes: RatingChanges,
    ) -> Result<RatingModel, Error> {
        if let Some(score) = changes.score {
            validate_score(score)?;
        }
        validate_review(changes.review.as_deref())?;

        let txn = self.db.begin().await?;

        lock_recipe(&txn, recipe_id).await?;

        let engagement_repo = EngagementRepository::new(&txn);
        let rating = engagement_repo
            .find_rating(user.id, recipe_id)
            .await?
            .ok_or(EngagementError::RatingNotFound {
                user_id: user.id,
                recipe_id,
            })?;
        let rating = engagement_repo.update_rating(rating, changes).await?;

        StatisticsAggregator::new(&txn)
            .recompute_rating_stats(recipe_id)
            .await?;

        txn.commit().await?;

        Ok(rating)
    }

    /// Deletes the acting user's rating of a recipe.
    ///
    /// # Returns
    /// - `Ok(())` - The rating was removed and the statistics recomputed
    /// - `Err(Error::RecipeError(RecipeError::NotFound))` - No recipe with that id
    /// - `Err(Error::EngagementError(EngagementError::RatingNotFound))` - No rating to delete
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete_rating(&self, user: &ActingUser, recipe_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        lock_recipe(&txn, recipe_id).await?;

        let result = EngagementRepository::new(&txn)
            .delete(EngagementKind::Rating, user.id, recipe_id)
            .await?;
        if result.rows_affected == 0 {
            return Err(EngagementError::RatingNotFound {
                user_id: user.id,
                recipe_id,
            }
            .into());
        }

        StatisticsAggregator::new(&txn)
            .recompute_rating_stats(recipe_id)
            .await?;

        txn.commit().await?;

        Ok(())
    }

    /// The acting user's rating of a recipe, if any.
    pub async fn get_user_rating(
        &self,
        user: &ActingUser,
        recipe_id: i32,
    ) -> Result<Option<RatingModel>, Error> {
        let rating = EngagementRepository::new(self.db)
            .find_rating(user.id, recipe_id)
            .await?;

        Ok(rating)
    }

    /// Ratings of a recipe, newest first. Public.
    pub async fn list_ratings(
        &self,
        recipe_id: i32,
        page: PageRequest,
    ) -> Result<Page<RatingModel>, Error> {
        require_recipe(self.db, recipe_id).await?;

        let (ratings, total_items) = EngagementRepository::new(self.db)
            .find_ratings_by_recipe(recipe_id, page)
            .await?;

        Ok(Page::new(ratings, page, total_items))
    }
}
