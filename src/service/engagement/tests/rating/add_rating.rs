use super::*;

/// Expect the first rating to set count 1 and the score as average
#[tokio::test]
async fn adds_rating_and_recomputes_statistics() -> Result<(), TestError> {
    let (test, recipe) = setup_recipe_with_guests().await?;
    let ann = acting(&test, "ann").await?;

    let rating_service = RatingService::new(&test.db);
    let result = rating_service
        .add_rating(
            &ann,
            recipe.id,
            NewRating {
                score: 4,
                review: Some("Lovely".to_string()),
            },
        )
        .await;

    assert!(result.is_ok());
    let rating = result.unwrap();
    assert_eq!(rating.score, 4);
    assert_eq!(rating.review.as_deref(), Some("Lovely"));
    let recipe = test.recipe().get(recipe.id).await?;
    assert_eq!(recipe.rating_count, 1);
    assert_eq!(recipe.average_rating, Decimal::from(4));

    Ok(())
}

/// Expect Conflict when the chef rates their own recipe, statistics untouched
#[tokio::test]
async fn rejects_self_rating() -> Result<(), TestError> {
    let (test, recipe) = setup_recipe_with_guests().await?;
    let chef = acting(&test, "chef").await?;

    let rating_service = RatingService::new(&test.db);
    let result = rating_service.add_rating(&chef, recipe.id, score(5)).await;

    assert!(matches!(
        result,
        Err(Error::EngagementError(EngagementError::SelfRating { .. }))
    ));
    let recipe = test.recipe().get(recipe.id).await?;
    assert_eq!(recipe.rating_count, 0);

    Ok(())
}

/// Expect Conflict on a second rating by the same user
#[tokio::test]
async fn rejects_second_rating() -> Result<(), TestError> {
    let (test, recipe) = setup_recipe_with_guests().await?;
    let ann = acting(&test, "ann").await?;

    let rating_service = RatingService::new(&test.db);
    rating_service
        .add_rating(&ann, recipe.id, score(3))
        .await
        .unwrap();
    let result = rating_service.add_rating(&ann, recipe.id, score(5)).await;

    assert!(matches!(
        result,
        Err(Error::EngagementError(EngagementError::AlreadyRated { .. }))
    ));
    let recipe = test.recipe().get(recipe.id).await?;
    assert_eq!(recipe.rating_count, 1);
    assert_eq!(recipe.average_rating, Decimal::from(3));

    Ok(())
}

/// Expect InvalidArgument for scores outside 1..=5 before any lookup
#[tokio::test]
async fn rejects_invalid_score() -> Result<(), TestError> {
    let (test, _) = setup_recipe_with_guests().await?;
    let ann = acting(&test, "ann").await?;

    let rating_service = RatingService::new(&test.db);
    let result = rating_service.add_rating(&ann, 404, score(0)).await;

    assert!(matches!(
        result,
        Err(Error::EngagementError(EngagementError::InvalidScore(0)))
    ));

    Ok(())
}

/// Expect NotFound for a recipe that does not exist
#[tokio::test]
async fn fails_for_nonexistent_recipe() -> Result<(), TestError> {
    let (test, _) = setup_recipe_with_guests().await?;
    let ann = acting(&test, "ann").await?;

    let rating_service = RatingService::new(&test.db);
    let result = rating_service.add_rating(&ann, 404, score(4)).await;

    assert!(matches!(
        result,
        Err(Error::RecipeError(RecipeError::NotFound(404)))
    ));

    Ok(())
}
