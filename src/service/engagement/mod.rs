//! Engagement service layer.
//!
//! Favorites and ratings change a recipe's denormalized statistics. Each operation writes
//! the engagement row and the matching statistics update in one transaction, so the stored
//! aggregates never drift from the rows they summarize.

pub mod favorite;
pub mod rating;

#[cfg(test)]
mod tests;
