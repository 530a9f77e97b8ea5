//! Models exchanged between the core and its callers.
//!
//! Includes database model aliases, the acting user supplied by the authentication
//! collaborator, recipe inputs and projections, pagination, and the error body.

pub mod api;
pub mod db;
pub mod engagement;
pub mod ingredient;
pub mod label;
pub mod page;
pub mod recipe;
pub mod user;
