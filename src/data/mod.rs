//! Repositories over the recipe tables.
//!
//! Every repository is generic over `ConnectionTrait`, so services can run the same calls
//! on a plain connection or inside a transaction.

pub mod engagement;
pub mod ingredient;
pub mod label;
pub mod recipe;
pub mod statistics;
pub mod user;
