use crate::model::page::PageRequest;

use super::*;

/// Expect a page of the user's favorites as summaries
#[tokio::test]
async fn lists_favorites_as_summaries() -> Result<(), TestError> {
    let (test, recipe) = setup_recipe_with_guests().await?;
    let chef = test.find_user("chef").await?;
    let second = test.recipe().insert_recipe(chef.id, "Menemen").await?;
    let ann = acting(&test, "ann").await?;

    let favorite_service = FavoriteService::new(&test.db);
    favorite_service.add_favorite(&ann, recipe.id).await.unwrap();
    favorite_service.add_favorite(&ann, second.id).await.unwrap();

    let page = favorite_service
        .list_user_favorites(ann.id, PageRequest::new(0, 1))
        .await
        .unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total_items, 2);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.items[0].favorites_count, 1);

    Ok(())
}
