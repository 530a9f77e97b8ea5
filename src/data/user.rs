use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QuerySelect,
};

use crate::model::db::UserModel;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Fetches a user and locks the row for the rest of the transaction.
    pub async fn get_for_update(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// Replaces the profile image reference, `None` clearing it.
    pub async fn set_profile_image(
        &self,
        user: UserModel,
        profile_image: Option<String>,
    ) -> Result<UserModel, DbErr> {
        let mut user_am = user.into_active_model();
        user_am.profile_image = ActiveValue::Set(profile_image);

        user_am.update(self.db).await
    }
}
