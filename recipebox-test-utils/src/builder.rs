//! Declarative test builder.
//!
//! The builder queues fixtures and executes them during the final `build()` call, after the
//! schema migrations have been applied.

use entity::sea_orm_active_enums::UserRole;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // (username, role)
    users: Vec<(String, UserRole)>,
    labels: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no fixtures configured.
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Insert a regular user with the given username.
    ///
    /// # Arguments
    /// - `username` - Unique username, used later with [`TestContext::find_user`]
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_user(mut self, username: impl Into<String>) -> Self {
        self.users.push((username.into(), UserRole::User));
        self
    }

    /// Insert an administrator with the given username.
    pub fn with_admin(mut self, username: impl Into<String>) -> Self {
        self.users.push((username.into(), UserRole::Admin));
        self
    }

    /// Insert a label with the given (already normalized) name.
    pub fn with_label(mut self, name: impl Into<String>) -> Self {
        self.labels.push(name.into());
        self
    }

    /// Build the test context.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Applies every schema migration
    /// 2. Inserts users
    /// 3. Inserts labels
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Migration or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let test = TestContext::new().await?;

        self.populate(test).await
    }

    /// Build the test context on a new schema of the Postgres test server.
    ///
    /// Runs the same steps as [`Self::build`]. The server is read from
    /// [`POSTGRES_URL_ENV`](crate::context::POSTGRES_URL_ENV); the caller drops the schema
    /// with [`TestContext::cleanup`].
    pub async fn build_postgres(self) -> Result<TestContext, TestError> {
        let test = TestContext::new_postgres().await?;

        self.populate(test).await
    }

    async fn populate(self, test: TestContext) -> Result<TestContext, TestError> {
        test.with_migrations().await?;

        for (username, role) in self.users {
            test.user().insert_user_with_role(&username, role).await?;
        }

        for name in self.labels {
            test.recipe().insert_label(&name).await?;
        }

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
