mod ingredient;
mod label;
mod recipe;

use entity::sea_orm_active_enums::IngredientUnit;
use recipebox_test_utils::prelude::*;
use rust_decimal::Decimal;

use crate::model::{
    ingredient::NewIngredient, recipe::NewRecipe, user::ActingUser,
};

async fn acting(test: &TestContext, username: &str) -> Result<ActingUser, TestError> {
    let user = test.find_user(username).await?;

    Ok(ActingUser::from(&user))
}

fn ingredient(name: &str, quantity: i64, unit: IngredientUnit) -> NewIngredient {
    NewIngredient {
        name: name.to_string(),
        quantity: Decimal::from(quantity),
        unit,
        display_order: None,
    }
}

fn pancakes() -> NewRecipe {
    NewRecipe {
        title: "Pancakes".to_string(),
        description: Some("Fluffy breakfast pancakes".to_string()),
        instructions: "Whisk, rest, fry.".to_string(),
        prep_time: Some(10),
        cook_time: Some(15),
        servings: Some(4),
        difficulty: None,
        is_published: true,
        ingredients: vec![
            ingredient("Flour", 200, IngredientUnit::Gram),
            ingredient("Milk", 300, IngredientUnit::Milliliter),
            ingredient("Egg", 2, IngredientUnit::Piece),
        ],
        labels: vec!["Breakfast".to_string(), " Quick Meals ".to_string()],
    }
}
