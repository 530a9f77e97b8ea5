use entity::sea_orm_active_enums::IngredientUnit;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewIngredient {
    pub name: String,
    pub quantity: Decimal,
    pub unit: IngredientUnit,
    /// Position in the ingredient list; appended after the last ingredient when absent.
    pub display_order: Option<i32>,
}

/// Partial ingredient update; only `Some` fields are written.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct IngredientChanges {
    pub name: Option<String>,
    pub quantity: Option<Decimal>,
    pub unit: Option<IngredientUnit>,
    pub display_order: Option<i32>,
}
