use sea_orm::entity::prelude::*;

/// A shared tag. `name` is stored normalized (trimmed, lowercase, spaces as hyphens).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "labels")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::recipe_label::Entity")]
    RecipeLabel,
}

impl Related<super::recipe::Entity> for Entity {
    fn to() -> RelationDef {
        super::recipe_label::Relation::Recipe.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::recipe_label::Relation::Label.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
