use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261019_000002_recipes::Recipes;

static IDX_INGREDIENTS_RECIPE_ID: &str = "idx-ingredients-recipe_id";
static FK_INGREDIENTS_RECIPE_ID: &str = "fk-ingredients-recipe_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ingredients::Table)
                    .if_not_exists()
                    .col(pk_auto(Ingredients::Id))
                    .col(integer(Ingredients::RecipeId))
                    .col(string_len(Ingredients::Name, 100))
                    .col(decimal_len(Ingredients::Quantity, 10, 2))
                    .col(string_len(Ingredients::Unit, 30))
                    .col(integer(Ingredients::DisplayOrder))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_INGREDIENTS_RECIPE_ID)
                            .from(Ingredients::Table, Ingredients::RecipeId)
                            .to(Recipes::Table, Recipes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INGREDIENTS_RECIPE_ID)
                    .table(Ingredients::Table)
                    .col(Ingredients::RecipeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INGREDIENTS_RECIPE_ID)
                    .table(Ingredients::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Ingredients::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Ingredients {
    Table,
    Id,
    RecipeId,
    Name,
    Quantity,
    Unit,
    DisplayOrder,
}
