use serde::{Deserialize, Serialize};

pub const MIN_RATING_SCORE: i32 = 1;
pub const MAX_RATING_SCORE: i32 = 5;
pub const MAX_REVIEW_LENGTH: usize = 500;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NewRating {
    pub score: i32,
    pub review: Option<String>,
}

/// Partial rating update; only `Some` fields are written.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RatingChanges {
    pub score: Option<i32>,
    pub review: Option<String>,
}
