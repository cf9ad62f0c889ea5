//! Identity stub
//!
//! STUB: there is no real authentication. `MockIdentity` accepts any
//! non-empty credentials and keeps the "logged in" user in memory, the way a
//! browser would keep it in local storage. It performs no verification and
//! must not be placed in front of anything that needs a trust decision. No
//! route uses it.

use std::sync::RwLock;

use crate::types::User;

/// Seam for a future identity system
pub trait IdentityProvider: Send + Sync {
    fn login(&self, email: &str, password: &str) -> Option<User>;
    fn register(&self, username: &str, email: &str, password: &str) -> Option<User>;
    fn logout(&self);
    fn current_user(&self) -> Option<User>;
}

/// Local-only placeholder identity
#[derive(Default)]
pub struct MockIdentity {
    current: RwLock<Option<User>>,
}

impl MockIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    /// A poisoned lock still holds a usable value; take it over
    fn set(&self, user: Option<User>) {
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = user;
    }
}

impl IdentityProvider for MockIdentity {
    fn login(&self, email: &str, password: &str) -> Option<User> {
        if email.is_empty() || password.is_empty() {
            return None;
        }
        let username = email.split('@').next().unwrap_or(email);
        let user = User::new(username, email);
        self.set(Some(user.clone()));
        Some(user)
    }

    fn register(&self, username: &str, email: &str, password: &str) -> Option<User> {
        if username.is_empty() || email.is_empty() || password.is_empty() {
            return None;
        }
        let user = User::new(username, email);
        self.set(Some(user.clone()));
        Some(user)
    }

    fn logout(&self) {
        self.set(None);
    }

    fn current_user(&self) -> Option<User> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
