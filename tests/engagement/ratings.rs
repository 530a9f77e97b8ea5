use recipebox::{
    model::engagement::{NewRating, RatingChanges},
    service::engagement::rating::RatingService,
};
use rust_decimal::Decimal;

use super::*;

async fn assert_rating_stats(
    test: &TestContext,
    recipe_id: i32,
    rating_count: i64,
    average_tenths: i64,
) -> Result<(), TestError> {
    let recipe = test.recipe().get(recipe_id).await?;

    assert_eq!(recipe.rating_count, rating_count);
    assert_eq!(recipe.average_rating, Decimal::new(average_tenths, 1));

    Ok(())
}

/// Expect the statistics to track every rating change of two users
#[tokio::test]
async fn statistics_follow_rating_lifecycle() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("chef")
        .with_user("ann")
        .with_user("ben")
        .build()
        .await?;
    let chef = test.find_user("chef").await?;
    let ann = acting(&test, "ann").await?;
    let ben = acting(&test, "ben").await?;
    let recipe = test.recipe().insert_recipe(chef.id, "Tiramisu").await?;

    let rating_service = RatingService::new(&test.db);
    assert_rating_stats(&test, recipe.id, 0, 0).await?;

    rating_service
        .add_rating(
            &ann,
            recipe.id,
            NewRating {
                score: 4,
                review: None,
            },
        )
        .await
        .unwrap();
    assert_rating_stats(&test, recipe.id, 1, 40).await?;

    rating_service
        .add_rating(
            &ben,
            recipe.id,
            NewRating {
                score: 5,
                review: Some("Best I've had".to_string()),
            },
        )
        .await
        .unwrap();
    assert_rating_stats(&test, recipe.id, 2, 45).await?;

    rating_service
        .update_rating(
            &ann,
            recipe.id,
            RatingChanges {
                score: Some(2),
                review: None,
            },
        )
        .await
        .unwrap();
    assert_rating_stats(&test, recipe.id, 2, 35).await?;

    rating_service.delete_rating(&ann, recipe.id).await.unwrap();
    assert_rating_stats(&test, recipe.id, 1, 50).await?;

    Ok(())
}

/// Expect a mean of 4.25 to be stored as 4.3
#[tokio::test]
async fn rounds_average_half_up() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("chef")
        .with_user("u1")
        .with_user("u2")
        .with_user("u3")
        .with_user("u4")
        .build()
        .await?;
    let chef = test.find_user("chef").await?;
    let recipe = test.recipe().insert_recipe(chef.id, "Tiramisu").await?;

    let rating_service = RatingService::new(&test.db);
    for (username, score) in [("u1", 5), ("u2", 4), ("u3", 4), ("u4", 4)] {
        let user = acting(&test, username).await?;
        rating_service
            .add_rating(&user, recipe.id, NewRating { score, review: None })
            .await
            .unwrap();
    }

    assert_rating_stats(&test, recipe.id, 4, 43).await?;

    Ok(())
}
