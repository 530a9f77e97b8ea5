use recipebox::{
    error::{recipe::RecipeError, Error},
    model::recipe::RecipeChanges,
    service::recipe::RecipeService,
};
use sea_orm::DatabaseConnection;

use super::*;

async fn rename(
    db: DatabaseConnection,
    chef: ActingUser,
    recipe_id: i32,
) -> Result<(), Error> {
    RecipeService::new(&db)
        .update(
            &chef,
            recipe_id,
            RecipeChanges {
                title: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .map(|_| ())
}

async fn delete(db: DatabaseConnection, chef: ActingUser, recipe_id: i32) -> Result<(), Error> {
    RecipeService::new(&db).delete(&chef, recipe_id).await
}

/// Expect an update racing a delete to either win or fail with NotFound
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn update_racing_delete_reports_not_found() -> Result<(), TestError> {
    let test = setup_with_readers(&[]).await?;
    let chef = acting(&test, "chef").await?;

    for title in ["Focaccia", "Ciabatta", "Grissini", "Panettone"] {
        let recipe = test.recipe().insert_recipe(chef.id, title).await?;

        let (deleted, updated) = tokio::join!(
            tokio::spawn(delete(test.db.clone(), chef, recipe.id)),
            tokio::spawn(rename(test.db.clone(), chef, recipe.id))
        );

        deleted.unwrap().unwrap();
        match updated.unwrap() {
            Ok(()) => {}
            Err(Error::RecipeError(RecipeError::NotFound(id))) => assert_eq!(id, recipe.id),
            Err(err) => panic!("update failed with {:?}", err),
        }
        assert!(matches!(
            test.recipe().get(recipe.id).await,
            Err(TestError::MissingFixture(_))
        ));
    }

    test.cleanup().await
}
