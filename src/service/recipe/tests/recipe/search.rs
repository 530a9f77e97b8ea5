use entity::sea_orm_active_enums::Difficulty;

use crate::{
    data::recipe::search::RecipeSearch,
    model::{page::PageRequest, recipe::RecipeSort},
};

use super::*;

/// Expect a search without criteria to equal the full listing
#[tokio::test]
async fn unfiltered_search_lists_everything() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user("chef").build().await?;
    let chef = test.find_user("chef").await?;
    for title in ["Porridge", "Granola", "Muesli"] {
        test.recipe().insert_recipe(chef.id, title).await?;
    }

    let recipe_service = RecipeService::new(&test.db);
    let searched = recipe_service
        .search(&RecipeSearch::new(), RecipeSort::Title, PageRequest::default())
        .await
        .unwrap();
    let listed = recipe_service
        .list_recipes(RecipeSort::Title, PageRequest::default())
        .await
        .unwrap();

    assert_eq!(searched, listed);
    let titles: Vec<_> = listed.items.iter().map(|recipe| recipe.title.as_str()).collect();
    assert_eq!(titles, vec!["Granola", "Muesli", "Porridge"]);

    Ok(())
}

/// Expect combined criteria to narrow the page and its totals
#[tokio::test]
async fn combines_criteria() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("chef")
        .with_user("ann")
        .build()
        .await?;
    let chef = test.find_user("chef").await?;
    let ann = test.find_user("ann").await?;
    let match_recipe = test
        .recipe()
        .insert_recipe_with_details(chef.id, "Vegan Chili", None, Some(Difficulty::Easy))
        .await?;
    test.recipe()
        .insert_recipe_with_details(chef.id, "Beef Chili", None, Some(Difficulty::Hard))
        .await?;
    test.recipe()
        .insert_recipe_with_details(ann.id, "Chili Oil", None, Some(Difficulty::Easy))
        .await?;

    let search = RecipeSearch::new()
        .keyword("chili")
        .chef(chef.id)
        .difficulty(Difficulty::Easy);

    let recipe_service = RecipeService::new(&test.db);
    let page = recipe_service
        .search(&search, RecipeSort::default(), PageRequest::default())
        .await
        .unwrap();

    assert_eq!(page.total_items, 1);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.items[0].id, match_recipe.id);

    Ok(())
}
