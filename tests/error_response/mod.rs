//! HTTP status codes produced by service errors.

use axum::{http::StatusCode, response::IntoResponse};
use recipebox::{
    error::ErrorKind,
    model::{engagement::NewRating, recipe::RecipeChanges},
    service::{
        engagement::{favorite::FavoriteService, rating::RatingService},
        recipe::RecipeService,
    },
};
use recipebox_test_utils::prelude::*;

use crate::acting;

/// Expect each failure class to map onto its status code
#[tokio::test]
async fn service_errors_map_to_status_codes() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("chef")
        .with_user("ann")
        .build()
        .await?;
    let chef = acting(&test, "chef").await?;
    let ann = acting(&test, "ann").await?;
    let recipe = test.recipe().insert_recipe(chef.id, "Flan").await?;

    let recipe_service = RecipeService::new(&test.db);
    let favorite_service = FavoriteService::new(&test.db);
    let rating_service = RatingService::new(&test.db);

    let not_found = recipe_service.get_recipe(404, None).await.unwrap_err();
    let unauthorized = recipe_service
        .update(&ann, recipe.id, RecipeChanges::default())
        .await
        .unwrap_err();
    favorite_service.add_favorite(&ann, recipe.id).await.unwrap();
    let conflict = favorite_service
        .add_favorite(&ann, recipe.id)
        .await
        .unwrap_err();
    let self_rating = rating_service
        .add_rating(
            &chef,
            recipe.id,
            NewRating {
                score: 5,
                review: None,
            },
        )
        .await
        .unwrap_err();
    let invalid = rating_service
        .add_rating(
            &ann,
            recipe.id,
            NewRating {
                score: 7,
                review: None,
            },
        )
        .await
        .unwrap_err();

    let cases = [
        (not_found, ErrorKind::NotFound, StatusCode::NOT_FOUND),
        (unauthorized, ErrorKind::Unauthorized, StatusCode::FORBIDDEN),
        (conflict, ErrorKind::Conflict, StatusCode::CONFLICT),
        (self_rating, ErrorKind::Conflict, StatusCode::CONFLICT),
        (invalid, ErrorKind::InvalidArgument, StatusCode::BAD_REQUEST),
    ];
    for (error, kind, status) in cases {
        assert_eq!(error.kind(), kind);
        assert_eq!(error.into_response().status(), status);
    }

    Ok(())
}

/// Expect domain errors to carry their message and storage errors a generic one
#[tokio::test]
async fn response_bodies_hide_internal_details() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user("ann").build().await?;
    let ann = acting(&test, "ann").await?;

    let favorite_service = FavoriteService::new(&test.db);
    let not_found = favorite_service.remove_favorite(&ann, 404).await.unwrap_err();
    let internal = recipebox::error::Error::DbErr(sea_orm::DbErr::Custom(
        "connection refused by 10.0.0.5".to_string(),
    ));

    let not_found_body = response_json(not_found.into_response()).await;
    let internal_body = response_json(internal.into_response()).await;

    assert_eq!(not_found_body["error"], "Recipe not found with id: 404");
    assert_eq!(internal_body["error"], "Internal server error");

    Ok(())
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
