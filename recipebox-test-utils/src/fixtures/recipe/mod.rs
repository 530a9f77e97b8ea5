//! Recipe, label and ingredient fixture utilities.

pub mod factory;

use chrono::Utc;
use entity::sea_orm_active_enums::{Difficulty, IngredientUnit};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, IntoActiveModel};

use crate::{
    error::TestError,
    model::{IngredientModel, LabelModel, RecipeModel},
    TestContext,
};

impl TestContext {
    pub fn recipe<'a>(&'a self) -> RecipeFixtures<'a> {
        RecipeFixtures { test: self }
    }
}

pub struct RecipeFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> RecipeFixtures<'a> {
    /// Insert a published recipe with zeroed statistics and no description.
    pub async fn insert_recipe(
        &self,
        chef_id: i32,
        title: &str,
    ) -> Result<RecipeModel, TestError> {
        self.insert_recipe_with_details(chef_id, title, None, None)
            .await
    }

    pub async fn insert_recipe_with_details(
        &self,
        chef_id: i32,
        title: &str,
        description: Option<&str>,
        difficulty: Option<Difficulty>,
    ) -> Result<RecipeModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Recipe::insert(entity::recipe::ActiveModel {
            chef_id: ActiveValue::Set(chef_id),
            title: ActiveValue::Set(title.to_string()),
            description: ActiveValue::Set(description.map(str::to_string)),
            instructions: ActiveValue::Set("Mix everything and cook.".to_string()),
            prep_time: ActiveValue::Set(Some(10)),
            cook_time: ActiveValue::Set(Some(20)),
            servings: ActiveValue::Set(Some(2)),
            difficulty: ActiveValue::Set(difficulty),
            image_url: ActiveValue::Set(None),
            thumbnail_url: ActiveValue::Set(None),
            is_published: ActiveValue::Set(true),
            view_count: ActiveValue::Set(0),
            favorites_count: ActiveValue::Set(0),
            rating_count: ActiveValue::Set(0),
            average_rating: ActiveValue::Set(Decimal::ZERO),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            published_at: ActiveValue::Set(Some(now)),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    /// Reload a recipe, failing with [`TestError::MissingFixture`] when it was deleted.
    pub async fn get(&self, recipe_id: i32) -> Result<RecipeModel, TestError> {
        entity::prelude::Recipe::find_by_id(recipe_id)
            .one(&self.test.db)
            .await?
            .ok_or_else(|| TestError::MissingFixture(format!("recipe {}", recipe_id)))
    }

    /// Overwrite the denormalized statistics of a recipe without touching engagement rows.
    pub async fn set_statistics(
        &self,
        recipe: RecipeModel,
        view_count: i64,
        favorites_count: i64,
        rating_count: i64,
        average_rating: Decimal,
    ) -> Result<RecipeModel, TestError> {
        let mut recipe_am = recipe.into_active_model();
        recipe_am.view_count = ActiveValue::Set(view_count);
        recipe_am.favorites_count = ActiveValue::Set(favorites_count);
        recipe_am.rating_count = ActiveValue::Set(rating_count);
        recipe_am.average_rating = ActiveValue::Set(average_rating);

        Ok(recipe_am.update(&self.test.db).await?)
    }

    /// Overwrite the creation timestamp, used to control newest/oldest ordering.
    pub async fn set_created_at(
        &self,
        recipe: RecipeModel,
        created_at: chrono::NaiveDateTime,
    ) -> Result<RecipeModel, TestError> {
        let mut recipe_am = recipe.into_active_model();
        recipe_am.created_at = ActiveValue::Set(created_at);

        Ok(recipe_am.update(&self.test.db).await?)
    }

    pub async fn insert_label(&self, name: &str) -> Result<LabelModel, TestError> {
        Ok(entity::prelude::Label::insert(entity::label::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    pub async fn attach_label(&self, recipe_id: i32, label_id: i32) -> Result<(), TestError> {
        entity::prelude::RecipeLabel::insert(entity::recipe_label::ActiveModel {
            recipe_id: ActiveValue::Set(recipe_id),
            label_id: ActiveValue::Set(label_id),
        })
        .exec_without_returning(&self.test.db)
        .await?;

        Ok(())
    }

    /// Insert a new label and attach it to the recipe.
    pub async fn insert_recipe_label(
        &self,
        recipe_id: i32,
        name: &str,
    ) -> Result<LabelModel, TestError> {
        let label = self.insert_label(name).await?;
        self.attach_label(recipe_id, label.id).await?;

        Ok(label)
    }

    pub async fn insert_ingredient(
        &self,
        recipe_id: i32,
        name: &str,
        display_order: i32,
    ) -> Result<IngredientModel, TestError> {
        Ok(
            entity::prelude::Ingredient::insert(entity::ingredient::ActiveModel {
                recipe_id: ActiveValue::Set(recipe_id),
                name: ActiveValue::Set(name.to_string()),
                quantity: ActiveValue::Set(Decimal::ONE),
                unit: ActiveValue::Set(IngredientUnit::Piece),
                display_order: ActiveValue::Set(display_order),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
