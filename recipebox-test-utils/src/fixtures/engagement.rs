//! Engagement fixtures.
//!
//! Rows are inserted as-is; recipe statistics are left untouched.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{FavoriteModel, RatingModel, RecipeViewModel},
    TestContext,
};

impl TestContext {
    pub fn engagement<'a>(&'a self) -> EngagementFixtures<'a> {
        EngagementFixtures { test: self }
    }
}

pub struct EngagementFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> EngagementFixtures<'a> {
    pub async fn insert_favorite(
        &self,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<FavoriteModel, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                recipe_id: ActiveValue::Set(recipe_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_rating(
        &self,
        user_id: i32,
        recipe_id: i32,
        score: i32,
    ) -> Result<RatingModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Rating::insert(entity::rating::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            recipe_id: ActiveValue::Set(recipe_id),
            score: ActiveValue::Set(score),
            review: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    pub async fn insert_view(
        &self,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<RecipeViewModel, TestError> {
        Ok(
            entity::prelude::RecipeView::insert(entity::recipe_view::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                recipe_id: ActiveValue::Set(recipe_id),
                viewed_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
