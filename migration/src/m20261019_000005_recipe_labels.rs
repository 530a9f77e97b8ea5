use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261019_000002_recipes::Recipes, m20261019_000004_labels::Labels};

static PK_RECIPE_LABELS: &str = "pk-recipe_labels";
static IDX_RECIPE_LABELS_LABEL_ID: &str = "idx-recipe_labels-label_id";
static FK_RECIPE_LABELS_RECIPE_ID: &str = "fk-recipe_labels-recipe_id";
static FK_RECIPE_LABELS_LABEL_ID: &str = "fk-recipe_labels-label_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RecipeLabels::Table)
                    .if_not_exists()
                    .col(integer(RecipeLabels::RecipeId))
                    .col(integer(RecipeLabels::LabelId))
                    .primary_key(
                        Index::create()
                            .name(PK_RECIPE_LABELS)
                            .col(RecipeLabels::RecipeId)
                            .col(RecipeLabels::LabelId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RECIPE_LABELS_RECIPE_ID)
                            .from(RecipeLabels::Table, RecipeLabels::RecipeId)
                            .to(Recipes::Table, Recipes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RECIPE_LABELS_LABEL_ID)
                            .from(RecipeLabels::Table, RecipeLabels::LabelId)
                            .to(Labels::Table, Labels::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RECIPE_LABELS_LABEL_ID)
                    .table(RecipeLabels::Table)
                    .col(RecipeLabels::LabelId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RECIPE_LABELS_LABEL_ID)
                    .table(RecipeLabels::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RecipeLabels::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum RecipeLabels {
    Table,
    RecipeId,
    LabelId,
}
