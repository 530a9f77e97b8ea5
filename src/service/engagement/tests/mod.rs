mod favorite;

use recipebox_test_utils::prelude::*;
use rust_decimal::Decimal;

use crate::model::{db::RecipeModel, user::ActingUser};

/// Chef "chef" owning one recipe, plus the users "ann" and "ben".
async fn setup_recipe_with_guests() -> Result<(TestContext, RecipeModel), TestError> {
    let test = TestBuilder::new()
        .with_user("chef")
        .with_user("ann")
        .with_user("ben")
        .build()
        .await?;
    let chef = test.find_user("chef").await?;
    let recipe = test.recipe().insert_recipe(chef.id, "Shakshuka").await?;

    Ok((test, recipe))
}

async fn acting(test: &TestContext, username: &str) -> Result<ActingUser, TestError> {
    let user = test.find_user(username).await?;

    Ok(ActingUser::from(&user))
}
