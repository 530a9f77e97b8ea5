//! Storage for favorites, ratings and recipe views.
//!
//! Each kind allows at most one row per (user, recipe), enforced by a unique index. Inserts
//! use `ON CONFLICT DO NOTHING` so a duplicate surfaces as [`InsertOutcome::AlreadyExists`]
//! instead of a constraint violation, which would abort the caller's transaction on
//! Postgres.


use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::{
    db::{FavoriteModel, RatingModel, RecipeModel, RecipeViewModel},
    engagement::RatingChanges,
    page::PageRequest,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngagementKind {
    Favorite,
    Rating,
    View,
}

/// Data for a new engagement row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngagementPayload {
    Favorite,
    Rating { score: i32, review: Option<String> },
    View,
}

impl EngagementPayload {
    pub fn kind(&self) -> EngagementKind {
        match self {
            Self::Favorite => EngagementKind::Favorite,
            Self::Rating { .. } => EngagementKind::Rating,
            Self::View => EngagementKind::View,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngagementRecord {
    Favorite(FavoriteModel),
    Rating(RatingModel),
    View(RecipeViewModel),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted(EngagementRecord),
    /// A row of the same kind already exists for the user and recipe; nothing was written.
    AlreadyExists,
}

/// Counts per kind removed by [`EngagementRepository::delete_all_for_recipe`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RemovedEngagement {
    pub favorites: u64,
    pub ratings: u64,
    pub views: u64,
}

pub struct EngagementRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EngagementRepository<'a, C> {
    /// Creates a new instance of [`EngagementRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an engagement row unless one of the same kind exists for the pair.
    ///
    /// # Returns
    /// - `Ok(InsertOutcome::Inserted(_))` - The row was written and read back
    /// - `Ok(InsertOutcome::AlreadyExists)` - A row already existed, nothing changed
    /// - `Err(DbErr)` - Any other storage failure, including a missing user or recipe
    pub async fn try_insert(
        &self,
        user_id: i32,
        recipe_id: i32,
        payload: EngagementPayload,
    ) -> Result<InsertOutcome, DbErr> {
        let kind = payload.kind();
        let now = Utc::now().naive_utc();

        let inserted = match payload {
            EngagementPayload::Favorite => {
                entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    recipe_id: ActiveValue::Set(recipe_id),
                    created_at: ActiveValue::Set(now),
                    ..Default::default()
                })
                .on_conflict(
                    OnConflict::columns([
                        entity::favorite::Column::UserId,
                        entity::favorite::Column::RecipeId,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(self.db)
                .await?
            }
            EngagementPayload::Rating { score, review } => {
                entity::prelude::Rating::insert(entity::rating::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    recipe_id: ActiveValue::Set(recipe_id),
                    score: ActiveValue::Set(score),
                    review: ActiveValue::Set(review),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                })
                .on_conflict(
                    OnConflict::columns([
                        entity::rating::Column::UserId,
                        entity::rating::Column::RecipeId,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(self.db)
                .await?
            }
            EngagementPayload::View => {
                entity::prelude::RecipeView::insert(entity::recipe_view::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    recipe_id: ActiveValue::Set(recipe_id),
                    viewed_at: ActiveValue::Set(now),
                    ..Default::default()
                })
                .on_conflict(
                    OnConflict::columns([
                        entity::recipe_view::Column::UserId,
                        entity::recipe_view::Column::RecipeId,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(self.db)
                .await?
            }
        };

        if inserted == 0 {
            return Ok(InsertOutcome::AlreadyExists);
        }

        match self.find_by_user_and_recipe(kind, user_id, recipe_id).await? {
            Some(record) => Ok(InsertOutcome::Inserted(record)),
            None => Err(DbErr::RecordNotFound(format!(
                "{:?} of user {} for recipe {} missing right after insert",
                kind, user_id, recipe_id
            ))),
        }
    }

    pub async fn find_by_user_and_recipe(
        &self,
        kind: EngagementKind,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<Option<EngagementRecord>, DbErr> {
        let record = match kind {
            EngagementKind::Favorite => entity::prelude::Favorite::find()
                .filter(entity::favorite::Column::UserId.eq(user_id))
                .filter(entity::favorite::Column::RecipeId.eq(recipe_id))
                .one(self.db)
                .await?
                .map(EngagementRecord::Favorite),
            EngagementKind::Rating => self
                .find_rating(user_id, recipe_id)
                .await?
                .map(EngagementRecord::Rating),
            EngagementKind::View => entity::prelude::RecipeView::find()
                .filter(entity::recipe_view::Column::UserId.eq(user_id))
                .filter(entity::recipe_view::Column::RecipeId.eq(recipe_id))
                .one(self.db)
                .await?
                .map(EngagementRecord::View),
        };

        Ok(record)
    }

    pub async fn find_rating(
        &self,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<Option<RatingModel>, DbErr> {
        entity::prelude::Rating::find()
            .filter(entity::rating::Column::UserId.eq(user_id))
            .filter(entity::rating::Column::RecipeId.eq(recipe_id))
            .one(self.db)
            .await
    }

    /// Deletes the user's row of the given kind for a recipe
    ///
    /// Returns OK regardless of the row existing, check
    /// [`DeleteResult::rows_affected`] for the outcome.
    pub async fn delete(
        &self,
        kind: EngagementKind,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        match kind {
            EngagementKind::Favorite => {
                entity::prelude::Favorite::delete_many()
                    .filter(entity::favorite::Column::UserId.eq(user_id))
                    .filter(entity::favorite::Column::RecipeId.eq(recipe_id))
                    .exec(self.db)
                    .await
            }
            EngagementKind::Rating => {
                entity::prelude::Rating::delete_many()
                    .filter(entity::rating::Column::UserId.eq(user_id))
                    .filter(entity::rating::Column::RecipeId.eq(recipe_id))
                    .exec(self.db)
                    .await
            }
            EngagementKind::View => {
                entity::prelude::RecipeView::delete_many()
                    .filter(entity::recipe_view::Column::UserId.eq(user_id))
                    .filter(entity::recipe_view::Column::RecipeId.eq(recipe_id))
                    .exec(self.db)
                    .await
            }
        }
    }

    /// Updates score and/or review of a rating in place. Id, user and recipe never change.
    pub async fn update_rating(
        &self,
        rating: RatingModel,
        changes: RatingChanges,
    ) -> Result<RatingModel, DbErr> {
        let mut rating_am = rating.into_active_model();

        if let Some(score) = changes.score {
            rating_am.score = ActiveValue::Set(score);
        }
        if let Some(review) = changes.review {
            rating_am.review = ActiveValue::Set(Some(review));
        }
        rating_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        rating_am.update(self.db).await
    }

    /// Removes every favorite, rating and view of a recipe.
    pub async fn delete_all_for_recipe(&self, recipe_id: i32) -> Result<RemovedEngagement, DbErr> {
        let favorites = entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::RecipeId.eq(recipe_id))
            .exec(self.db)
            .await?;
        let ratings = entity::prelude::Rating::delete_many()
            .filter(entity::rating::Column::RecipeId.eq(recipe_id))
            .exec(self.db)
            .await?;
        let views = entity::prelude::RecipeView::delete_many()
            .filter(entity::recipe_view::Column::RecipeId.eq(recipe_id))
            .exec(self.db)
            .await?;

        Ok(RemovedEngagement {
            favorites: favorites.rows_affected,
            ratings: ratings.rows_affected,
            views: views.rows_affected,
        })
    }

    /// Ratings of a recipe, newest first.
    ///
    /// # Returns
    /// - `Ok((ratings, total_items))` - The requested page and the recipe's rating count
    pub async fn find_ratings_by_recipe(
        &self,
        recipe_id: i32,
        page: PageRequest,
    ) -> Result<(Vec<RatingModel>, u64), DbErr> {
        let paginator = entity::prelude::Rating::find()
            .filter(entity::rating::Column::RecipeId.eq(recipe_id))
            .order_by_desc(entity::rating::Column::CreatedAt)
            .order_by_desc(entity::rating::Column::Id)
            .paginate(self.db, page.size());

        let total_items = paginator.num_items().await?;
        let ratings = paginator.fetch_page(page.page()).await?;

        Ok((ratings, total_items))
    }

    /// Recipes favorited by a user, most recently favorited first.
    pub async fn find_favorites_by_user(
        &self,
        user_id: i32,
        page: PageRequest,
    ) -> Result<(Vec<RecipeModel>, u64), DbErr> {
        let paginator = entity::prelude::Recipe::find()
            .inner_join(entity::favorite::Entity)
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_desc(entity::favorite::Column::CreatedAt)
            .order_by_desc(entity::favorite::Column::Id)
            .paginate(self.db, page.size());

        let total_items = paginator.num_items().await?;
        let recipes = paginator.fetch_page(page.page()).await?;

        Ok((recipes, total_items))
    }

    /// Number of rows of a kind for a recipe, the source of truth for its counters.
    pub async fn count_for_recipe(
        &self,
        kind: EngagementKind,
        recipe_id: i32,
    ) -> Result<u64, DbErr> {
        match kind {
            EngagementKind::Favorite => {
                entity::prelude::Favorite::find()
                    .filter(entity::favorite::Column::RecipeId.eq(recipe_id))
                    .count(self.db)
                    .await
            }
            EngagementKind::Rating => {
                entity::prelude::Rating::find()
                    .filter(entity::rating::Column::RecipeId.eq(recipe_id))
                    .count(self.db)
                    .await
            }
            EngagementKind::View => {
                entity::prelude::RecipeView::find()
                    .filter(entity::recipe_view::Column::RecipeId.eq(recipe_id))
                    .count(self.db)
                    .await
            }
        }
    }
}
