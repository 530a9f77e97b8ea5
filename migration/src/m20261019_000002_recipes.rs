use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000001_users::Users;

static IDX_RECIPES_CHEF_ID: &str = "idx-recipes-chef_id";
static IDX_RECIPES_CREATED_AT: &str = "idx-recipes-created_at";
static FK_RECIPES_CHEF_ID: &str = "fk-recipes-chef_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recipes::Table)
                    .if_not_exists()
                    .col(pk_auto(Recipes::Id))
                    .col(integer(Recipes::ChefId))
                    .col(string_len(Recipes::Title, 200))
                    .col(text_null(Recipes::Description))
                    .col(text(Recipes::Instructions))
                    .col(integer_null(Recipes::PrepTime))
                    .col(integer_null(Recipes::CookTime))
                    .col(integer_null(Recipes::Servings))
                    .col(string_len_null(Recipes::Difficulty, 20))
                    .col(string_len_null(Recipes::ImageUrl, 255))
                    .col(string_len_null(Recipes::ThumbnailUrl, 255))
                    .col(boolean(Recipes::IsPublished).default(true))
                    .col(big_integer(Recipes::ViewCount).default(0))
                    .col(big_integer(Recipes::FavoritesCount).default(0))
                    .col(big_integer(Recipes::RatingCount).default(0))
                    .col(decimal_len(Recipes::AverageRating, 2, 1).default(0))
                    .col(timestamp(Recipes::CreatedAt))
                    .col(timestamp(Recipes::UpdatedAt))
                    .col(timestamp_null(Recipes::PublishedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RECIPES_CHEF_ID)
                            .from(Recipes::Table, Recipes::ChefId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RECIPES_CHEF_ID)
                    .table(Recipes::Table)
                    .col(Recipes::ChefId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RECIPES_CREATED_AT)
                    .table(Recipes::Table)
                    .col(Recipes::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RECIPES_CREATED_AT)
                    .table(Recipes::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RECIPES_CHEF_ID)
                    .table(Recipes::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Recipes::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Recipes {
    Table,
    Id,
    ChefId,
    Title,
    Description,
    Instructions,
    PrepTime,
    CookTime,
    Servings,
    Difficulty,
    ImageUrl,
    ThumbnailUrl,
    IsPublished,
    ViewCount,
    FavoritesCount,
    RatingCount,
    AverageRating,
    CreatedAt,
    UpdatedAt,
    PublishedAt,
}
