//! Users, roles, and the authenticated actor.

use serde::{Deserialize, Serialize};

use crate::{Error, UserId};

/// Privilege level of a user.
///
/// Stored as a small integer; `0` is the administrative role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Member,
}

impl Role {
    /// The integer code persisted for this role.
    pub fn code(self) -> i16 {
        match self {
            Role::Admin => 0,
            Role::Member => 1,
        }
    }

    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }
}

impl TryFrom<i16> for Role {
    type Error = Error;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Role::Admin),
            1 => Ok(Role::Member),
            other => Err(Error::UnknownRole(other)),
        }
    }
}

/// A registered user as exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub profile_pic: Option<String>,
    pub role: Role,
}

/// A user about to be inserted. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub profile_pic: Option<String>,
    pub role: Role,
}

/// A user together with the stored password hash, used only for login.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub user: User,
    pub password_hash: String,
}

/// The authenticated party performing an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: UserId,
    pub role: Role,
}

impl Actor {
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    /// Whether this actor may delete a post owned by `owner`.
    pub fn may_delete_post_of(&self, owner: UserId) -> bool {
        self.role.is_admin() || self.user_id == owner
    }
}
