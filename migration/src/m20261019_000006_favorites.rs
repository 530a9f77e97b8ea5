use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261019_000001_users::Users, m20261019_000002_recipes::Recipes};

static IDX_FAVORITES_USER_ID_RECIPE_ID: &str = "idx-favorites-user_id-recipe_id";
static IDX_FAVORITES_RECIPE_ID: &str = "idx-favorites-recipe_id";
static FK_FAVORITES_USER_ID: &str = "fk-favorites-user_id";
static FK_FAVORITES_RECIPE_ID: &str = "fk-favorites-recipe_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorites::Id))
                    .col(integer(Favorites::UserId))
                    .col(integer(Favorites::RecipeId))
                    .col(timestamp(Favorites::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_USER_ID)
                            .from(Favorites::Table, Favorites::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_RECIPE_ID)
                            .from(Favorites::Table, Favorites::RecipeId)
                            .to(Recipes::Table, Recipes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITES_USER_ID_RECIPE_ID)
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .col(Favorites::RecipeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITES_RECIPE_ID)
                    .table(Favorites::Table)
                    .col(Favorites::RecipeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITES_RECIPE_ID)
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITES_USER_ID_RECIPE_ID)
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    Id,
    UserId,
    RecipeId,
    CreatedAt,
}
