pub mod search;

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QuerySelect,
};

use crate::{
    data::recipe::search::{apply_sort, RecipeSearch},
    model::{
        db::RecipeModel,
        page::PageRequest,
        recipe::{ImageUrls, NewRecipe, RecipeChanges, RecipeSort},
    },
};

pub struct RecipeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecipeRepository<'a, C> {
    /// Creates a new instance of [`RecipeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a recipe owned by `chef_id` with zeroed statistics.
    ///
    /// Ingredients and labels of [`NewRecipe`] are not touched here.
    pub async fn create(&self, chef_id: i32, recipe: &NewRecipe) -> Result<RecipeModel, DbErr> {
        let now = Utc::now().naive_utc();

        let recipe = entity::recipe::ActiveModel {
            chef_id: ActiveValue::Set(chef_id),
            title: ActiveValue::Set(recipe.title.clone()),
            description: ActiveValue::Set(recipe.description.clone()),
            instructions: ActiveValue::Set(recipe.instructions.clone()),
            prep_time: ActiveValue::Set(recipe.prep_time),
            cook_time: ActiveValue::Set(recipe.cook_time),
            servings: ActiveValue::Set(recipe.servings),
            difficulty: ActiveValue::Set(recipe.difficulty),
            image_url: ActiveValue::Set(None),
            thumbnail_url: ActiveValue::Set(None),
            is_published: ActiveValue::Set(recipe.is_published),
            view_count: ActiveValue::Set(0),
            favorites_count: ActiveValue::Set(0),
            rating_count: ActiveValue::Set(0),
            average_rating: ActiveValue::Set(Decimal::ZERO),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            published_at: ActiveValue::Set(recipe.is_published.then_some(now)),
            ..Default::default()
        };

        recipe.insert(self.db).await
    }

    pub async fn get(&self, recipe_id: i32) -> Result<Option<RecipeModel>, DbErr> {
        entity::prelude::Recipe::find_by_id(recipe_id)
            .one(self.db)
            .await
    }

    /// Fetches a recipe and takes a row-level write lock on it for the rest of the
    /// transaction (`SELECT ... FOR UPDATE`).
    ///
    /// Backends without row locks (SQLite) serialize writers at the transaction level
    /// instead, so the lock clause is omitted there.
    pub async fn get_for_update(&self, recipe_id: i32) -> Result<Option<RecipeModel>, DbErr> {
        entity::prelude::Recipe::find_by_id(recipe_id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// Applies the `Some` fields of `changes` to the recipe.
    ///
    /// Only changed columns and `updated_at` are written, so concurrent statistic updates
    /// on the same row are never overwritten with stale values.
    pub async fn update(
        &self,
        recipe: RecipeModel,
        changes: RecipeChanges,
    ) -> Result<RecipeModel, DbErr> {
        let mut recipe_am = recipe.into_active_model();

        if let Some(title) = changes.title {
            recipe_am.title = ActiveValue::Set(title);
        }
        if let Some(description) = changes.description {
            recipe_am.description = ActiveValue::Set(Some(description));
        }
        if let Some(instructions) = changes.instructions {
            recipe_am.instructions = ActiveValue::Set(instructions);
        }
        if let Some(prep_time) = changes.prep_time {
            recipe_am.prep_time = ActiveValue::Set(Some(prep_time));
        }
        if let Some(cook_time) = changes.cook_time {
            recipe_am.cook_time = ActiveValue::Set(Some(cook_time));
        }
        if let Some(servings) = changes.servings {
            recipe_am.servings = ActiveValue::Set(Some(servings));
        }
        if let Some(difficulty) = changes.difficulty {
            recipe_am.difficulty = ActiveValue::Set(Some(difficulty));
        }
        recipe_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        recipe_am.update(self.db).await
    }

    /// Marks the recipe as published.
    ///
    /// `published_at` keeps its first value when the recipe was published before.
    pub async fn publish(&self, recipe: RecipeModel) -> Result<RecipeModel, DbErr> {
        let now = Utc::now().naive_utc();
        let first_publication = recipe.published_at.is_none();

        let mut recipe_am = recipe.into_active_model();
        recipe_am.is_published = ActiveValue::Set(true);
        if first_publication {
            recipe_am.published_at = ActiveValue::Set(Some(now));
        }
        recipe_am.updated_at = ActiveValue::Set(now);

        recipe_am.update(self.db).await
    }

    /// Replaces both image references, `None` clearing the column.
    pub async fn set_images(
        &self,
        recipe: RecipeModel,
        images: ImageUrls,
    ) -> Result<RecipeModel, DbErr> {
        let mut recipe_am = recipe.into_active_model();
        recipe_am.image_url = ActiveValue::Set(images.image_url);
        recipe_am.thumbnail_url = ActiveValue::Set(images.thumbnail_url);
        recipe_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        recipe_am.update(self.db).await
    }

    /// Deletes a recipe row
    ///
    /// Returns OK regardless of the recipe existing, check
    /// [`DeleteResult::rows_affected`] for the outcome.
    pub async fn delete(&self, recipe_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Recipe::delete_by_id(recipe_id)
            .exec(self.db)
            .await
    }

    /// Fetches one page of recipes matching `search`, ordered by `sort`.
    ///
    /// # Returns
    /// - `Ok((recipes, total_items))` - The requested page and the number of matches overall
    pub async fn search(
        &self,
        search: &RecipeSearch,
        sort: RecipeSort,
        page: PageRequest,
    ) -> Result<(Vec<RecipeModel>, u64), DbErr> {
        let query = apply_sort(
            entity::prelude::Recipe::find().filter(search.build()),
            sort,
        );

        let paginator = query.paginate(self.db, page.size());
        let total_items = paginator.num_items().await?;
        let recipes = paginator.fetch_page(page.page()).await?;

        Ok((recipes, total_items))
    }
}
