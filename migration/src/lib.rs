pub use sea_orm_migration::prelude::*;

mod m20261019_000001_users;
mod m20261019_000002_recipes;
mod m20261019_000003_ingredients;
mod m20261019_000004_labels;
mod m20261019_000005_recipe_labels;
mod m20261019_000006_favorites;
mod m20261019_000007_ratings;
mod m20261019_000008_recipe_views;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_users::Migration),
            Box::new(m20261019_000002_recipes::Migration),
            Box::new(m20261019_000003_ingredients::Migration),
            Box::new(m20261019_000004_labels::Migration),
            Box::new(m20261019_000005_recipe_labels::Migration),
            Box::new(m20261019_000006_favorites::Migration),
            Box::new(m20261019_000007_ratings::Migration),
            Box::new(m20261019_000008_recipe_views::Migration),
        ]
    }
}
