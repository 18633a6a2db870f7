use serde::{Deserialize, Serialize};

/// The only identity allowed to create, edit or delete posts.
pub const ADMIN_USER_ID: i32 = 1;

/// Static single-admin policy.
pub fn is_admin(user_id: i32) -> bool {
    user_id == ADMIN_USER_ID
}

/// User record - a registered reader who may comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub name: String,
}

/// A user about to be inserted; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub name: String,
}

impl NewUser {
    /// `password_hash` must already be hashed by a `PasswordService`.
    pub fn new(email: String, password_hash: String, name: String) -> Self {
        Self {
            email,
            password_hash,
            name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_id_one_is_admin() {
        assert!(is_admin(1));
        assert!(!is_admin(0));
        assert!(!is_admin(2));
        assert!(!is_admin(-1));
    }
}
