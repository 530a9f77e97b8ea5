use recipebox::service::recipe::RecipeService;

use super::*;

/// Expect interleaved first reads by one user to record a single view
#[tokio::test]
async fn interleaved_first_reads_count_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("chef")
        .with_user("ann")
        .build()
        .await?;
    let chef = test.find_user("chef").await?;
    let ann = acting(&test, "ann").await?;
    let recipe = test.recipe().insert_recipe(chef.id, "Pavlova").await?;

    let recipe_service = RecipeService::new(&test.db);
    let (first, second) = tokio::join!(
        recipe_service.get_recipe(recipe.id, Some(&ann)),
        recipe_service.get_recipe(recipe.id, Some(&ann))
    );

    assert!(first.is_ok());
    assert!(second.is_ok());
    let recipe = test.recipe().get(recipe.id).await?;
    assert_eq!(recipe.view_count, 1);

    Ok(())
}
