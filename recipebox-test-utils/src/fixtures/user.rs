use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::UserModel, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { test: self }
    }
}

pub struct UserFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_user_with_role(
        &self,
        username: &str,
        role: UserRole,
    ) -> Result<UserModel, TestError> {
        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            role: ActiveValue::Set(role),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }
}
