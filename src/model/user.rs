use entity::sea_orm_active_enums::UserRole;
use serde::{Deserialize, Serialize};

use crate::model::db::UserModel;

/// Identity of the caller, resolved by the authentication layer.
///
/// The core trusts this value as given.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActingUser {
    pub id: i32,
    pub role: UserRole,
}

impl ActingUser {
    pub fn new(id: i32, role: UserRole) -> Self {
        Self { id, role }
    }
}

impl From<&UserModel> for ActingUser {
    fn from(user: &UserModel) -> Self {
        Self {
            id: user.id,
            role: user.role,
        }
    }
}
