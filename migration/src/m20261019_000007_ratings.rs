use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261019_000001_users::Users, m20261019_000002_recipes::Recipes};

static IDX_RATINGS_USER_ID_RECIPE_ID: &str = "idx-ratings-user_id-recipe_id";
static IDX_RATINGS_RECIPE_ID: &str = "idx-ratings-recipe_id";
static FK_RATINGS_USER_ID: &str = "fk-ratings-user_id";
static FK_RATINGS_RECIPE_ID: &str = "fk-ratings-recipe_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ratings::Table)
                    .if_not_exists()
                    .col(pk_auto(Ratings::Id))
                    .col(integer(Ratings::UserId))
                    .col(integer(Ratings::RecipeId))
                    .col(integer(Ratings::Score))
                    .col(string_len_null(Ratings::Review, 500))
                    .col(timestamp(Ratings::CreatedAt))
                    .col(timestamp(Ratings::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RATINGS_USER_ID)
                            .from(Ratings::Table, Ratings::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RATINGS_RECIPE_ID)
                            .from(Ratings::Table, Ratings::RecipeId)
                            .to(Recipes::Table, Recipes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RATINGS_USER_ID_RECIPE_ID)
                    .table(Ratings::Table)
                    .col(Ratings::UserId)
                    .col(Ratings::RecipeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RATINGS_RECIPE_ID)
                    .table(Ratings::Table)
                    .col(Ratings::RecipeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RATINGS_RECIPE_ID)
                    .table(Ratings::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RATINGS_USER_ID_RECIPE_ID)
                    .table(Ratings::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Ratings::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Ratings {
    Table,
    Id,
    UserId,
    RecipeId,
    Score,
    Review,
    CreatedAt,
    UpdatedAt,
}
