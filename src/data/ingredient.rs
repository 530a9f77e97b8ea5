use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::{
    db::IngredientModel,
    ingredient::{IngredientChanges, NewIngredient},
};

pub struct IngredientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> IngredientRepository<'a, C> {
    /// Creates a new instance of [`IngredientRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an ingredient, appending it after the last one when no order is given.
    pub async fn create(
        &self,
        recipe_id: i32,
        ingredient: &NewIngredient,
    ) -> Result<IngredientModel, DbErr> {
        let display_order = match ingredient.display_order {
            Some(order) => order,
            None => self.next_display_order(recipe_id).await?,
        };

        let ingredient = entity::ingredient::ActiveModel {
            recipe_id: ActiveValue::Set(recipe_id),
            name: ActiveValue::Set(ingredient.name.clone()),
            quantity: ActiveValue::Set(ingredient.quantity),
            unit: ActiveValue::Set(ingredient.unit),
            display_order: ActiveValue::Set(display_order),
            ..Default::default()
        };

        ingredient.insert(self.db).await
    }

    async fn next_display_order(&self, recipe_id: i32) -> Result<i32, DbErr> {
        let last: Option<i32> = entity::prelude::Ingredient::find()
            .select_only()
            .column(entity::ingredient::Column::DisplayOrder)
            .filter(entity::ingredient::Column::RecipeId.eq(recipe_id))
            .order_by_desc(entity::ingredient::Column::DisplayOrder)
            .into_tuple::<i32>()
            .one(self.db)
            .await?;

        Ok(last.map_or(0, |order| order.saturating_add(1)))
    }

    /// Finds an ingredient only if it belongs to the given recipe.
    pub async fn get_for_recipe(
        &self,
        recipe_id: i32,
        ingredient_id: i32,
    ) -> Result<Option<IngredientModel>, DbErr> {
        entity::prelude::Ingredient::find_by_id(ingredient_id)
            .filter(entity::ingredient::Column::RecipeId.eq(recipe_id))
            .one(self.db)
            .await
    }

    /// Ingredients of a recipe ordered by display order.
    pub async fn find_by_recipe(&self, recipe_id: i32) -> Result<Vec<IngredientModel>, DbErr> {
        entity::prelude::Ingredient::find()
            .filter(entity::ingredient::Column::RecipeId.eq(recipe_id))
            .order_by_asc(entity::ingredient::Column::DisplayOrder)
            .order_by_asc(entity::ingredient::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        ingredient: IngredientModel,
        changes: IngredientChanges,
    ) -> Result<IngredientModel, DbErr> {
        if changes == IngredientChanges::default() {
            return Ok(ingredient);
        }

        let mut ingredient_am = ingredient.into_active_model();

        if let Some(name) = changes.name {
            ingredient_am.name = ActiveValue::Set(name);
        }
        if let Some(quantity) = changes.quantity {
            ingredient_am.quantity = ActiveValue::Set(quantity);
        }
        if let Some(unit) = changes.unit {
            ingredient_am.unit = ActiveValue::Set(unit);
        }
        if let Some(display_order) = changes.display_order {
            ingredient_am.display_order = ActiveValue::Set(display_order);
        }

        ingredient_am.update(self.db).await
    }

    pub async fn delete(&self, ingredient_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Ingredient::delete_by_id(ingredient_id)
            .exec(self.db)
            .await
    }

    pub async fn delete_all_for_recipe(&self, recipe_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Ingredient::delete_many()
            .filter(entity::ingredient::Column::RecipeId.eq(recipe_id))
            .exec(self.db)
            .await
    }
}
