use recipebox::{
    error::{engagement::EngagementError, Error},
    model::engagement::NewRating,
    service::{
        engagement::{favorite::FavoriteService, rating::RatingService},
        recipe::RecipeService,
    },
};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use super::*;

const READERS: [&str; 6] = ["ann", "ben", "cat", "dan", "eve", "fay"];

async fn add_favorite(
    db: DatabaseConnection,
    user: ActingUser,
    recipe_id: i32,
) -> Result<(), Error> {
    FavoriteService::new(&db)
        .add_favorite(&user, recipe_id)
        .await
        .map(|_| ())
}

async fn add_rating(
    db: DatabaseConnection,
    user: ActingUser,
    recipe_id: i32,
    score: i32,
) -> Result<(), Error> {
    RatingService::new(&db)
        .add_rating(&user, recipe_id, NewRating { score, review: None })
        .await
        .map(|_| ())
}

async fn read_recipe(
    db: DatabaseConnection,
    reader: ActingUser,
    recipe_id: i32,
) -> Result<(), Error> {
    RecipeService::new(&db)
        .get_recipe(recipe_id, Some(&reader))
        .await
        .map(|_| ())
}

/// Expect favorites of different users added in parallel to all be counted
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_favorites_of_different_users_all_count() -> Result<(), TestError> {
    let test = setup_with_readers(&READERS).await?;
    let chef = test.find_user("chef").await?;
    let readers = acting_all(&test, &READERS).await?;
    let recipe = test.recipe().insert_recipe(chef.id, "Lasagne").await?;

    let handles: Vec<_> = readers
        .into_iter()
        .map(|reader| tokio::spawn(add_favorite(test.db.clone(), reader, recipe.id)))
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let recipe = test.recipe().get(recipe.id).await?;
    assert_eq!(recipe.favorites_count, READERS.len() as i64);

    test.cleanup().await
}

/// Expect exactly one of two parallel favorites of the same pair to succeed
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_duplicate_favorite_counts_once() -> Result<(), TestError> {
    let test = setup_with_readers(&["ann"]).await?;
    let chef = test.find_user("chef").await?;
    let ann = acting(&test, "ann").await?;
    let recipe = test.recipe().insert_recipe(chef.id, "Lasagne").await?;

    let (first, second) = tokio::join!(
        tokio::spawn(add_favorite(test.db.clone(), ann, recipe.id)),
        tokio::spawn(add_favorite(test.db.clone(), ann, recipe.id))
    );
    let results = [first.unwrap(), second.unwrap()];

    assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 1);
    assert!(results.iter().any(|result| matches!(
        result,
        Err(Error::EngagementError(EngagementError::AlreadyFavorited { .. }))
    )));
    let recipe = test.recipe().get(recipe.id).await?;
    assert_eq!(recipe.favorites_count, 1);

    test.cleanup().await
}

/// Expect two parallel ratings to both be reflected in count and average
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_ratings_of_two_users_are_both_aggregated() -> Result<(), TestError> {
    let test = setup_with_readers(&["ann", "ben"]).await?;
    let chef = test.find_user("chef").await?;
    let ann = acting(&test, "ann").await?;
    let ben = acting(&test, "ben").await?;
    let recipe = test.recipe().insert_recipe(chef.id, "Risotto").await?;

    let (first, second) = tokio::join!(
        tokio::spawn(add_rating(test.db.clone(), ann, recipe.id, 4)),
        tokio::spawn(add_rating(test.db.clone(), ben, recipe.id, 5))
    );
    first.unwrap().unwrap();
    second.unwrap().unwrap();

    let recipe = test.recipe().get(recipe.id).await?;
    assert_eq!(recipe.rating_count, 2);
    assert_eq!(recipe.average_rating, Decimal::new(45, 1));

    test.cleanup().await
}

/// Expect the aggregate of many parallel ratings to equal the mean of the stored scores
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_ratings_match_stored_scores() -> Result<(), TestError> {
    let test = setup_with_readers(&READERS).await?;
    let chef = test.find_user("chef").await?;
    let readers = acting_all(&test, &READERS).await?;
    let recipe = test.recipe().insert_recipe(chef.id, "Risotto").await?;

    // 25 / 6 = 4.166..
    let scores = [5, 4, 4, 4, 3, 5];
    let handles: Vec<_> = readers
        .into_iter()
        .zip(scores)
        .map(|(reader, score)| tokio::spawn(add_rating(test.db.clone(), reader, recipe.id, score)))
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let recipe = test.recipe().get(recipe.id).await?;
    assert_eq!(recipe.rating_count, scores.len() as i64);
    assert_eq!(recipe.average_rating, Decimal::new(42, 1));

    test.cleanup().await
}

/// Expect parallel first reads by one user to record a single view
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_first_reads_count_once() -> Result<(), TestError> {
    let test = setup_with_readers(&["ann"]).await?;
    let chef = test.find_user("chef").await?;
    let ann = acting(&test, "ann").await?;
    let recipe = test.recipe().insert_recipe(chef.id, "Ramen").await?;

    let (first, second) = tokio::join!(
        tokio::spawn(read_recipe(test.db.clone(), ann, recipe.id)),
        tokio::spawn(read_recipe(test.db.clone(), ann, recipe.id))
    );
    first.unwrap().unwrap();
    second.unwrap().unwrap();

    let recipe = test.recipe().get(recipe.id).await?;
    assert_eq!(recipe.view_count, 1);

    test.cleanup().await
}
