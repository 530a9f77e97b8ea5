//! Maintenance of the denormalized recipe statistics.
//!
//! Counters are only ever changed through single relative `UPDATE` statements scoped to one
//! recipe row, and the rating aggregates are recomputed from the `ratings` table in the same
//! transaction that changed a rating.

use migration::{CaseStatement, Expr, Func};
use rust_decimal::{Decimal, RoundingStrategy};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ExprTrait, QueryFilter, QuerySelect,
};

/// Fractional digits kept in `recipes.average_rating`.
pub const AVERAGE_RATING_SCALE: u32 = 1;

/// Rating count and mean of one recipe, mean rounded half-up to one decimal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatingStats {
    pub rating_count: i64,
    pub average_rating: Decimal,
}

impl RatingStats {
    /// Builds the statistics from the score sum and row count of a recipe's ratings.
    ///
    /// The mean is computed in decimal arithmetic and rounded away from zero at the
    /// midpoint, so `4.25` becomes `4.3`.
    pub fn from_totals(score_sum: i64, rating_count: i64) -> Self {
        if rating_count <= 0 {
            return Self {
                rating_count: 0,
                average_rating: Decimal::ZERO,
            };
        }

        let mean = Decimal::from(score_sum) / Decimal::from(rating_count);

        Self {
            rating_count,
            average_rating: mean.round_dp_with_strategy(
                AVERAGE_RATING_SCALE,
                RoundingStrategy::MidpointAwayFromZero,
            ),
        }
    }
}

pub struct StatisticsAggregator<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StatisticsAggregator<'a, C> {
    /// Creates a new instance of [`StatisticsAggregator`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds one to the recipe's view counter.
    ///
    /// # Returns
    /// - `Ok(true)` - The counter was incremented
    /// - `Ok(false)` - The recipe no longer exists, nothing changed
    pub async fn increment_views(&self, recipe_id: i32) -> Result<bool, DbErr> {
        self.add_to_counter(entity::recipe::Column::ViewCount, recipe_id)
            .await
    }

    /// Adds one to the recipe's favorites counter, see [`Self::increment_views`] for the
    /// returned value.
    pub async fn increase_favorites(&self, recipe_id: i32) -> Result<bool, DbErr> {
        self.add_to_counter(entity::recipe::Column::FavoritesCount, recipe_id)
            .await
    }

    /// Subtracts one from the recipe's favorites counter without going below zero.
    pub async fn decrease_favorites(&self, recipe_id: i32) -> Result<bool, DbErr> {
        let floored = CaseStatement::new()
            .case(
                entity::recipe::Column::FavoritesCount.gt(0),
                Expr::col(entity::recipe::Column::FavoritesCount).sub(1),
            )
            .finally(0);

        let result = entity::prelude::Recipe::update_many()
            .col_expr(
                entity::recipe::Column::FavoritesCount,
                Expr::value(floored),
            )
            .filter(entity::recipe::Column::Id.eq(recipe_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Recomputes `rating_count` and `average_rating` from the recipe's ratings.
    ///
    /// Must run in the transaction that changed the rating, after the recipe row was
    /// locked with [`RecipeRepository::get_for_update`](crate::data::recipe::RecipeRepository::get_for_update).
    /// Concurrent rating changes on the same recipe then apply one after another and the
    /// last writer always sees every committed rating.
    ///
    /// # Returns
    /// - `Ok(Some(stats))` - The written statistics
    /// - `Ok(None)` - The recipe no longer exists, nothing was written
    pub async fn recompute_rating_stats(
        &self,
        recipe_id: i32,
    ) -> Result<Option<RatingStats>, DbErr> {
        let totals = entity::prelude::Rating::find()
            .select_only()
            .column_as(
                Expr::expr(Func::sum(Expr::col(entity::rating::Column::Score))),
                "score_sum",
            )
            .column_as(
                Expr::expr(Func::count(Expr::col(entity::rating::Column::Id))),
                "rating_count",
            )
            .filter(entity::rating::Column::RecipeId.eq(recipe_id))
            .into_tuple::<(Option<i64>, i64)>()
            .one(self.db)
            .await?;

        let (score_sum, rating_count) = match totals {
            Some((score_sum, rating_count)) => (score_sum.unwrap_or(0), rating_count),
            None => (0, 0),
        };
        let stats = RatingStats::from_totals(score_sum, rating_count);

        let result = entity::prelude::Recipe::update_many()
            .col_expr(
                entity::recipe::Column::RatingCount,
                Expr::value(stats.rating_count),
            )
            .col_expr(
                entity::recipe::Column::AverageRating,
                Expr::value(stats.average_rating),
            )
            .filter(entity::recipe::Column::Id.eq(recipe_id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(stats))
    }

    async fn add_to_counter(
        &self,
        column: entity::recipe::Column,
        recipe_id: i32,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Recipe::update_many()
            .col_expr(column, Expr::col(column).add(1))
            .filter(entity::recipe::Column::Id.eq(recipe_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
