//! Per-request session state carried in the signed session cookie.

use serde::{Deserialize, Serialize};

use super::user::is_admin;
use crate::error::DomainError;

/// Session identity plus pending flash messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub user_id: Option<i32>,
    pub flashes: Vec<String>,
}

impl SessionData {
    pub fn for_user(user_id: i32) -> Self {
        Self {
            user_id: Some(user_id),
            flashes: Vec::new(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user_id.is_some_and(is_admin)
    }

    /// Identity of the logged-in user, or `Unauthenticated`.
    pub fn require_user(&self) -> Result<i32, DomainError> {
        self.user_id.ok_or(DomainError::Unauthenticated)
    }

    /// Identity of the admin. Anonymous and non-admin sessions are both `Forbidden`.
    pub fn require_admin(&self) -> Result<i32, DomainError> {
        match self.user_id {
            Some(id) if is_admin(id) => Ok(id),
            _ => Err(DomainError::Forbidden),
        }
    }

    pub fn login(&mut self, user_id: i32) {
        self.user_id = Some(user_id);
    }

    /// Drops the identity and anything queued for display.
    pub fn logout(&mut self) {
        *self = Self::default();
    }

    pub fn flash(&mut self, message: impl Into<String>) {
        self.flashes.push(message.into());
    }

    pub fn take_flashes(&mut self) -> Vec<String> {
        std::mem::take(&mut self.flashes)
    }

    /// True when there is nothing worth persisting in a cookie.
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.flashes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_session_is_forbidden_from_admin_actions() {
        let session = SessionData::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.require_admin(), Err(DomainError::Forbidden));
        assert_eq!(session.require_user(), Err(DomainError::Unauthenticated));
    }

    #[test]
    fn non_admin_user_is_forbidden() {
        let session = SessionData::for_user(2);
        assert!(session.is_authenticated());
        assert!(!session.is_admin());
        assert_eq!(session.require_user(), Ok(2));
        assert_eq!(session.require_admin(), Err(DomainError::Forbidden));
    }

    #[test]
    fn admin_passes_gate() {
        let session = SessionData::for_user(1);
        assert!(session.is_admin());
        assert_eq!(session.require_admin(), Ok(1));
    }

    #[test]
    fn flashes_are_one_shot() {
        let mut session = SessionData::default();
        session.flash("first");
        session.flash("second");
        assert!(!session.is_empty());

        assert_eq!(session.take_flashes(), vec!["first", "second"]);
        assert!(session.take_flashes().is_empty());
        assert!(session.is_empty());
    }

    #[test]
    fn logout_clears_identity_and_flashes() {
        let mut session = SessionData::for_user(3);
        session.flash("queued");
        session.logout();
        assert_eq!(session, SessionData::default());
    }
}
