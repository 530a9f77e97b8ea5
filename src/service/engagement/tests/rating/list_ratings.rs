use crate::model::page::PageRequest;

use super::*;

/// Expect every rating of the recipe in one page
#[tokio::test]
async fn lists_ratings_of_recipe() -> Result<(), TestError> {
    let (test, recipe) = setup_recipe_with_guests().await?;
    let ann = acting(&test, "ann").await?;
    let ben = acting(&test, "ben").await?;

    let rating_service = RatingService::new(&test.db);
    rating_service
        .add_rating(&ann, recipe.id, score(4))
        .await
        .unwrap();
    rating_service
        .add_rating(&ben, recipe.id, score(2))
        .await
        .unwrap();

    let page = rating_service
        .list_ratings(recipe.id, PageRequest::default())
        .await
        .unwrap();

    assert_eq!(page.total_items, 2);
    let mut scores: Vec<_> = page.items.iter().map(|rating| rating.score).collect();
    scores.sort();
    assert_eq!(scores, vec![2, 4]);

    Ok(())
}

/// Expect NotFound for a recipe that does not exist
#[tokio::test]
async fn fails_for_nonexistent_recipe() -> Result<(), TestError> {
    let (test, _) = setup_recipe_with_guests().await?;

    let rating_service = RatingService::new(&test.db);
    let result = rating_service
        .list_ratings(404, PageRequest::default())
        .await;

    assert!(matches!(
        result,
        Err(Error::RecipeError(RecipeError::NotFound(404)))
    ));

    Ok(())
}
