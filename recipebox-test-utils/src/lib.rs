pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::recipe::factory, test_setup_with_recipe_tables, TestBuilder, TestContext,
        TestError,
    };
}

/// Creates a [`TestContext`] backed by a fresh in-memory database with every migration applied.
///
/// Expands to an awaited expression, so it can only be used inside an async test body.
#[macro_export]
macro_rules! test_setup_with_recipe_tables {
    () => {{
        $crate::TestBuilder::new().build().await
    }};
}
