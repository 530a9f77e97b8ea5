use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::Difficulty;

/// A recipe together with its denormalized engagement aggregates.
///
/// `view_count`, `favorites_count`, `rating_count` and `average_rating` are derived from the
/// `recipe_views`, `favorites` and `ratings` tables and only ever written through single
/// row-scoped update statements.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub chef_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub instructions: String,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub servings: Option<i32>,
    pub difficulty: Option<Difficulty>,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub is_published: bool,
    pub view_count: i64,
    pub favorites_count: i64,
    pub rating_count: i64,
    /// Mean rating score rounded half-up to one decimal place.
    #[sea_orm(column_type = "Decimal(Some((2, 1)))")]
    pub average_rating: Decimal,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub published_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ChefId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::ingredient::Entity")]
    Ingredient,
    #[sea_orm(has_many = "super::recipe_label::Entity")]
    RecipeLabel,
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
    #[sea_orm(has_many = "super::rating::Entity")]
    Rating,
    #[sea_orm(has_many = "super::recipe_view::Entity")]
    RecipeView,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ingredient.def()
    }
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

impl Related<super::rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rating.def()
    }
}

impl Related<super::recipe_view::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecipeView.def()
    }
}

impl Related<super::label::Entity> for Entity {
    fn to() -> RelationDef {
        super::recipe_label::Relation::Label.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::recipe_label::Relation::Recipe.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
