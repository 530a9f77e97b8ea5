use crate::{
    error::{recipe::RecipeError, Error},
    model::ingredient::IngredientChanges,
    service::recipe::ingredient::IngredientService,
};

use super::*;

/// Expect new ingredients to be appended after the existing ones
#[tokio::test]
async fn appends_ingredients() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user("chef").build().await?;
    let chef = acting(&test, "chef").await?;
    let recipe = test.recipe().insert_recipe(chef.id, "Toast").await?;
    test.recipe().insert_ingredient(recipe.id, "Bread", 0).await?;

    let ingredient_service = IngredientService::new(&test.db);
    let butter = ingredient_service
        .add_ingredient(&chef, recipe.id, ingredient("Butter", 10, IngredientUnit::Gram))
        .await
        .unwrap();

    assert_eq!(butter.display_order, 1);
    let names: Vec<_> = ingredient_service
        .list_ingredients(recipe.id)
        .await
        .unwrap()
        .into_iter()
        .map(|ingredient| ingredient.name)
        .collect();
    assert_eq!(names, vec!["Bread", "Butter"]);

    Ok(())
}

/// Expect a partial update to change only the given fields
#[tokio::test]
async fn updates_ingredient() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user("chef").build().await?;
    let chef = acting(&test, "chef").await?;
    let recipe = test.recipe().insert_recipe(chef.id, "Toast").await?;
    let bread = test.recipe().insert_ingredient(recipe.id, "Bread", 0).await?;

    let ingredient_service = IngredientService::new(&test.db);
    let updated = ingredient_service
        .update_ingredient(
            &chef,
            recipe.id,
            bread.id,
            IngredientChanges {
                quantity: Some(Decimal::new(15, 1)),
                unit: Some(IngredientUnit::Slice),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Bread");
    assert_eq!(updated.quantity, Decimal::new(15, 1));
    assert_eq!(updated.unit, IngredientUnit::Slice);

    Ok(())
}

/// Expect NotFound for an ingredient of another recipe
#[tokio::test]
async fn rejects_ingredient_of_other_recipe() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user("chef").build().await?;
    let chef = acting(&test, "chef").await?;
    let recipe = test.recipe().insert_recipe(chef.id, "Toast").await?;
    let other = test.recipe().insert_recipe(chef.id, "Soup").await?;
    let carrot = test.recipe().insert_ingredient(other.id, "Carrot", 0).await?;

    let ingredient_service = IngredientService::new(&test.db);
    let result = ingredient_service
        .delete_ingredient(&chef, recipe.id, carrot.id)
        .await;

    assert!(matches!(
        result,
        Err(Error::RecipeError(RecipeError::IngredientNotFound { .. }))
    ));
    assert_eq!(
        ingredient_service.list_ingredients(other.id).await.unwrap().len(),
        1
    );

    Ok(())
}

/// Expect the chef to delete an ingredient and others to be rejected
#[tokio::test]
async fn deletes_only_for_owner() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("chef")
        .with_user("ann")
        .build()
        .await?;
    let chef = acting(&test, "chef").await?;
    let ann = acting(&test, "ann").await?;
    let recipe = test.recipe().insert_recipe(chef.id, "Toast").await?;
    let bread = test.recipe().insert_ingredient(recipe.id, "Bread", 0).await?;

    let ingredient_service = IngredientService::new(&test.db);
    let rejected = ingredient_service
        .delete_ingredient(&ann, recipe.id, bread.id)
        .await;
    let deleted = ingredient_service
        .delete_ingredient(&chef, recipe.id, bread.id)
        .await;

    assert!(matches!(
        rejected,
        Err(Error::RecipeError(RecipeError::NotOwner { .. }))
    ));
    assert!(deleted.is_ok());
    assert!(ingredient_service
        .list_ingredients(recipe.id)
        .await
        .unwrap()
        .is_empty());

    Ok(())
}
