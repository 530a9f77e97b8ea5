//! Recipe sharing core.
//!
//! Maintains denormalized engagement statistics (views, favorites, ratings) on recipe rows
//! under concurrent writers, enforces one engagement row per user and recipe, and composes
//! optional search filters into a single paginated query.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
