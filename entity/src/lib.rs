//! Database entities for the recipebox schema.
//!
//! Tables are created by the `migration` crate; these models mirror them column for column.

pub mod prelude;

pub mod favorite;
pub mod ingredient;
pub mod label;
pub mod rating;
pub mod recipe;
pub mod recipe_label;
pub mod recipe_view;
pub mod sea_orm_active_enums;
pub mod user;
