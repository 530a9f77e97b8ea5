//! Test fixture modules for database record creation.
//!
//! Fixtures insert rows directly through the entity layer, bypassing the services under
//! test. Engagement fixtures in particular never touch the denormalized counters on the
//! recipe row, which lets tests seed inconsistent state on purpose.
//!
//! - `user` - User accounts
//! - `recipe` - Recipes, labels and ingredients
//! - `engagement` - Favorites, ratings and recipe views

pub mod engagement;
pub mod recipe;
pub mod user;
