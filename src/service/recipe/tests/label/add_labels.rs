use super::*;

/// Expect normalized labels to be created once and attached idempotently
#[tokio::test]
async fn attaches_normalized_labels() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("chef")
        .with_label("vegan")
        .build()
        .await?;
    let chef = acting(&test, "chef").await?;
    let vegan = test.find_label("vegan").await?;
    let recipe = test.recipe().insert_recipe(chef.id, "Dal").await?;

    let label_service = LabelService::new(&test.db);
    let first = label_service
        .add_labels(&chef, recipe.id, &names(&["Vegan", "One Pot", "one pot"]))
        .await;
    let second = label_service
        .add_labels(&chef, recipe.id, &names(&["VEGAN"]))
        .await;

    assert!(first.is_ok());
    let labels = second.unwrap();
    let label_names: Vec<_> = labels.iter().map(|label| label.name.as_str()).collect();
    assert_eq!(label_names, vec!["one-pot", "vegan"]);
    assert!(labels.iter().any(|label| label.id == vegan.id));

    Ok(())
}

/// Expect InvalidArgument for an empty list
#[tokio::test]
async fn rejects_empty_list() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user("chef").build().await?;
    let chef = acting(&test, "chef").await?;
    let recipe = test.recipe().insert_recipe(chef.id, "Dal").await?;

    let label_service = LabelService::new(&test.db);
    let result = label_service.add_labels(&chef, recipe.id, &[]).await;

    assert!(matches!(
        result,
        Err(Error::LabelError(LabelError::EmptyLabelList))
    ));

    Ok(())
}

/// Expect InvalidArgument for a blank name
#[tokio::test]
async fn rejects_blank_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user("chef").build().await?;
    let chef = acting(&test, "chef").await?;
    let recipe = test.recipe().insert_recipe(chef.id, "Dal").await?;

    let label_service = LabelService::new(&test.db);
    let result = label_service
        .add_labels(&chef, recipe.id, &names(&["spicy", " "]))
        .await;

    assert!(matches!(
        result,
        Err(Error::LabelError(LabelError::BlankName))
    ));
    assert!(label_service.list_labels(recipe.id).await.unwrap().is_empty());

    Ok(())
}

/// Expect Unauthorized for anyone but the chef
#[tokio::test]
async fn rejects_non_owner() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("chef")
        .with_user("ann")
        .build()
        .await?;
    let chef = test.find_user("chef").await?;
    let ann = acting(&test, "ann").await?;
    let recipe = test.recipe().insert_recipe(chef.id, "Dal").await?;

    let label_service = LabelService::new(&test.db);
    let result = label_service
        .add_labels(&ann, recipe.id, &names(&["vegan"]))
        .await;

    assert!(matches!(
        result,
        Err(Error::RecipeError(RecipeError::NotOwner { .. }))
    ));

    Ok(())
}
