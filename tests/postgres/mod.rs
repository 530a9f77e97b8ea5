//! Concurrency of the engagement services on Postgres.
//!
//! Every call runs in a spawned task on its own pooled connection, so the transactions
//! overlap on the server and contend for the same unique indexes and recipe row locks.
//! Requires a Postgres server at `RECIPEBOX_TEST_DATABASE_URL`.

mod engagement;
mod lifecycle;

use recipebox::model::user::ActingUser;
use recipebox_test_utils::prelude::*;

use crate::acting;

/// Builds a Postgres context with a chef "chef" and the given readers.
async fn setup_with_readers(readers: &[&str]) -> Result<TestContext, TestError> {
    let mut builder = TestBuilder::new().with_user("chef");
    for reader in readers {
        builder = builder.with_user(*reader);
    }

    builder.build_postgres().await
}

async fn acting_all(test: &TestContext, usernames: &[&str]) -> Result<Vec<ActingUser>, TestError> {
    let mut users = Vec::with_capacity(usernames.len());
    for username in usernames {
        users.push(acting(test, username).await?);
    }

    Ok(users)
}
