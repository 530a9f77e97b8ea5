use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261019_000001_users::Users, m20261019_000002_recipes::Recipes};

static IDX_RECIPE_VIEWS_USER_ID_RECIPE_ID: &str = "idx-recipe_views-user_id-recipe_id";
static FK_RECIPE_VIEWS_USER_ID: &str = "fk-recipe_views-user_id";
static FK_RECIPE_VIEWS_RECIPE_ID: &str = "fk-recipe_views-recipe_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RecipeViews::Table)
                    .if_not_exists()
                    .col(pk_auto(RecipeViews::Id))
                    .col(integer(RecipeViews::UserId))
                    .col(integer(RecipeViews::RecipeId))
                    .col(timestamp(RecipeViews::ViewedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RECIPE_VIEWS_USER_ID)
                            .from(RecipeViews::Table, RecipeViews::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RECIPE_VIEWS_RECIPE_ID)
                            .from(RecipeViews::Table, RecipeViews::RecipeId)
                            .to(Recipes::Table, Recipes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RECIPE_VIEWS_USER_ID_RECIPE_ID)
                    .table(RecipeViews::Table)
                    .col(RecipeViews::UserId)
                    .col(RecipeViews::RecipeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RECIPE_VIEWS_USER_ID_RECIPE_ID)
                    .table(RecipeViews::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RecipeViews::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum RecipeViews {
    Table,
    Id,
    UserId,
    RecipeId,
    ViewedAt,
}
