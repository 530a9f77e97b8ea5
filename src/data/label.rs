use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::model::db::LabelModel;

pub struct LabelRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LabelRepository<'a, C> {
    /// Creates a new instance of [`LabelRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, label_id: i32) -> Result<Option<LabelModel>, DbErr> {
        entity::prelude::Label::find_by_id(label_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_names(&self, names: &[String]) -> Result<Vec<LabelModel>, DbErr> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Label::find()
            .filter(entity::label::Column::Name.is_in(names.iter().cloned()))
            .order_by_asc(entity::label::Column::Name)
            .all(self.db)
            .await
    }

    /// Returns the labels with the given (normalized) names, creating the missing ones.
    ///
    /// Creation skips names inserted concurrently by another writer, so two callers
    /// adding the same new label both succeed and share one row.
    pub async fn get_or_create_many(&self, names: &[String]) -> Result<Vec<LabelModel>, DbErr> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now().naive_utc();
        let labels = names.iter().map(|name| entity::label::ActiveModel {
            name: ActiveValue::Set(name.clone()),
            description: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        });

        entity::prelude::Label::insert_many(labels)
            .on_conflict(
                OnConflict::column(entity::label::Column::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        self.find_by_names(names).await
    }

    /// Associates labels with a recipe, ignoring associations that already exist.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of newly created associations
    pub async fn attach(&self, recipe_id: i32, label_ids: &[i32]) -> Result<u64, DbErr> {
        if label_ids.is_empty() {
            return Ok(0);
        }

        let associations = label_ids
            .iter()
            .map(|label_id| entity::recipe_label::ActiveModel {
                recipe_id: ActiveValue::Set(recipe_id),
                label_id: ActiveValue::Set(*label_id),
            });

        entity::prelude::RecipeLabel::insert_many(associations)
            .on_conflict(
                OnConflict::columns([
                    entity::recipe_label::Column::RecipeId,
                    entity::recipe_label::Column::LabelId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await
    }

    pub async fn detach(&self, recipe_id: i32, label_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::RecipeLabel::delete_many()
            .filter(entity::recipe_label::Column::RecipeId.eq(recipe_id))
            .filter(entity::recipe_label::Column::LabelId.eq(label_id))
            .exec(self.db)
            .await
    }

    /// Removes every label association of a recipe. Labels themselves are kept.
    pub async fn detach_all(&self, recipe_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::RecipeLabel::delete_many()
            .filter(entity::recipe_label::Column::RecipeId.eq(recipe_id))
            .exec(self.db)
            .await
    }

    /// Labels attached to a recipe, ordered by name.
    pub async fn find_by_recipe(&self, recipe_id: i32) -> Result<Vec<LabelModel>, DbErr> {
        entity::prelude::Label::find()
            .join(JoinType::InnerJoin, entity::label::Relation::RecipeLabel.def())
            .filter(entity::recipe_label::Column::RecipeId.eq(recipe_id))
            .order_by_asc(entity::label::Column::Name)
            .all(self.db)
            .await
    }
}
