use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

/// Expect the recipe and every dependent row to be removed, labels kept
#[tokio::test]
async fn deletes_recipe_with_dependents() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("chef")
        .with_user("ann")
        .build()
        .await?;
    let chef = acting(&test, "chef").await?;
    let ann = test.find_user("ann").await?;

    let recipe_service = RecipeService::new(&test.db);
    let created = recipe_service.create(&chef, pancakes()).await.unwrap();
    let recipe_id = created.recipe.id;
    test.engagement().insert_favorite(ann.id, recipe_id).await?;
    test.engagement().insert_rating(ann.id, recipe_id, 5).await?;
    test.engagement().insert_view(ann.id, recipe_id).await?;

    let result = recipe_service.delete(&chef, recipe_id).await;

    assert!(result.is_ok());
    assert!(matches!(
        recipe_service.get_recipe(recipe_id, None).await,
        Err(Error::RecipeError(RecipeError::NotFound(_)))
    ));
    assert_eq!(entity::prelude::Favorite::find().count(&test.db).await?, 0);
    assert_eq!(entity::prelude::Rating::find().count(&test.db).await?, 0);
    assert_eq!(entity::prelude::RecipeView::find().count(&test.db).await?, 0);
    assert_eq!(entity::prelude::Ingredient::find().count(&test.db).await?, 0);
    assert_eq!(entity::prelude::RecipeLabel::find().count(&test.db).await?, 0);
    assert_eq!(entity::prelude::Label::find().count(&test.db).await?, 2);

    Ok(())
}

/// Expect Unauthorized for a non-owner and nothing removed
#[tokio::test]
async fn rejects_non_owner() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("chef")
        .with_user("ann")
        .build()
        .await?;
    let chef = acting(&test, "chef").await?;
    let ann = acting(&test, "ann").await?;

    let recipe_service = RecipeService::new(&test.db);
    let created = recipe_service.create(&chef, pancakes()).await.unwrap();
    let result = recipe_service.delete(&ann, created.recipe.id).await;

    assert!(matches!(
        result,
        Err(Error::RecipeError(RecipeError::NotOwner { .. }))
    ));
    assert_eq!(entity::prelude::Ingredient::find().count(&test.db).await?, 3);

    Ok(())
}

/// Expect NotFound for a recipe that does not exist
#[tokio::test]
async fn fails_for_nonexistent_recipe() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user("chef").build().await?;
    let chef = acting(&test, "chef").await?;

    let recipe_service = RecipeService::new(&test.db);
    let result = recipe_service.delete(&chef, 404).await;

    assert!(matches!(
        result,
        Err(Error::RecipeError(RecipeError::NotFound(404)))
    ));

    Ok(())
}
