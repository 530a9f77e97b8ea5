//! Business logic services.
//!
//! Services coordinate repositories for one use case each. Operations that touch more than
//! one row open a transaction on the shared connection, run every repository call on it and
//! commit only after all steps succeeded; returning early with an error drops the
//! transaction, which rolls it back.

pub mod engagement;
pub mod ownership;
pub mod recipe;
pub mod user;
