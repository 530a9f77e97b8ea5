use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[sea_orm(string_value = "USER")]
    User,
    #[sea_orm(string_value = "ADMIN")]
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    #[sea_orm(string_value = "EASY")]
    Easy,
    #[sea_orm(string_value = "MEDIUM")]
    Medium,
    #[sea_orm(string_value = "HARD")]
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(30))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IngredientUnit {
    #[sea_orm(string_value = "GRAM")]
    Gram,
    #[sea_orm(string_value = "KILOGRAM")]
    Kilogram,
    #[sea_orm(string_value = "MILLILITER")]
    Milliliter,
    #[sea_orm(string_value = "LITER")]
    Liter,
    #[sea_orm(string_value = "CUP")]
    Cup,
    #[sea_orm(string_value = "TABLESPOON")]
    Tablespoon,
    #[sea_orm(string_value = "TEASPOON")]
    Teaspoon,
    #[sea_orm(string_value = "PIECE")]
    Piece,
    #[sea_orm(string_value = "SLICE")]
    Slice,
    #[sea_orm(string_value = "PINCH")]
    Pinch,
    #[sea_orm(string_value = "OUNCE")]
    Ounce,
    #[sea_orm(string_value = "POUND")]
    Pound,
}
