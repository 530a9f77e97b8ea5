use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    data::user::UserRepository,
    error::{user::UserError, Error},
    model::{db::UserModel, user::ActingUser},
};

async fn lock_user(txn: &DatabaseTransaction, user_id: i32) -> Result<UserModel, Error> {
    UserRepository::new(txn)
        .get_for_update(user_id)
        .await?
        .ok_or_else(|| UserError::NotFound(user_id).into())
}

/// Service for the acting user's own profile.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new avatar reference on the acting user.
    ///
    /// # Arguments
    /// - `user` - The acting user
    /// - `profile_image` - Opaque reference produced by the image storage
    ///
    /// # Returns
    /// - `Ok(Option<String>)` - The replaced reference, for the storage to clean up
    /// - `Err(Error::UserError(UserError::NotFound))` - The acting user is not persisted
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn set_avatar(
        &self,
        user: &ActingUser,
        profile_image: String,
    ) -> Result<Option<String>, Error> {
        let txn = self.db.begin().await?;

        let stored = lock_user(&txn, user.id).await?;
        let previous = stored.profile_image.clone();

        UserRepository::new(&txn)
            .set_profile_image(stored, Some(profile_image))
            .await?;

        txn.commit().await?;

        tracing::info!(user_id = user.id, "Updated avatar");

        Ok(previous)
    }

    /// Removes the avatar reference of the acting user.
    ///
    /// Returns the removed reference, `None` when the user had no avatar.
    pub async fn clear_avatar(&self, user: &ActingUser) -> Result<Option<String>, Error> {
        let txn = self.db.begin().await?;

        let stored = lock_user(&txn, user.id).await?;
        let previous = stored.profile_image.clone();

        if previous.is_some() {
            UserRepository::new(&txn)
                .set_profile_image(stored, None)
                .await?;
        }

        txn.commit().await?;

        Ok(previous)
    }
}
