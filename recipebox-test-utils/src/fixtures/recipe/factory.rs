//! Factory functions for generating in-memory recipe models.
//!
//! These don't touch the database and are meant for unit tests of pure conversions.

use chrono::Utc;
use rust_decimal::Decimal;

use crate::model::RecipeModel;

/// Create a published mock recipe model with zeroed statistics.
///
/// # Arguments
/// - `id` - Recipe record ID
/// - `chef_id` - Owning user ID
pub fn mock_recipe_model(id: i32, chef_id: i32) -> RecipeModel {
    let now = Utc::now().naive_utc();
    RecipeModel {
        id,
        chef_id,
        title: "Test Recipe".to_string(),
        description: Some("A recipe used in tests".to_string()),
        instructions: "Mix everything and cook.".to_string(),
        prep_time: Some(10),
        cook_time: Some(20),
        servings: Some(2),
        difficulty: None,
        image_url: None,
        thumbnail_url: None,
        is_published: true,
        view_count: 0,
        favorites_count: 0,
        rating_count: 0,
        average_rating: Decimal::ZERO,
        created_at: now,
        updated_at: now,
        published_at: Some(now),
    }
}
