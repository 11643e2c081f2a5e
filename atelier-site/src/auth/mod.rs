//! Demo admin login gate.
//!
//! A single hardcoded password with a simulated verification delay so the
//! login form can show its loading state. This is a portfolio demo, not an
//! authentication model.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Demo password for the admin panel.
const ADMIN_PASSWORD: &str = "admin123";

/// Artificial delay before the password check resolves.
const LOGIN_DELAY: Duration = Duration::from_millis(1000);

#[derive(Clone)]
pub struct AdminAuth {
    authenticated: Arc<AtomicBool>,
    delay: Duration,
}

impl AdminAuth {
    pub fn new() -> Self {
        Self {
            authenticated: Arc::new(AtomicBool::new(false)),
            delay: LOGIN_DELAY,
        }
    }

    /// Gate with a custom delay. Tests use short ones.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            authenticated: Arc::new(AtomicBool::new(false)),
            delay,
        }
    }

    /// Check the demo password. Returns whether the session is now
    /// authenticated.
    pub async fn login(&self, password: &str) -> bool {
        tokio::time::sleep(self.delay).await;
        let ok = password == ADMIN_PASSWORD;
        if ok {
            self.authenticated.store(true, Ordering::SeqCst);
        }
        ok
    }

    pub fn logout(&self) {
        self.authenticated.store(false, Ordering::SeqCst);
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }
}

impl Default for AdminAuth {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let auth = AdminAuth::with_delay(Duration::from_millis(1));
        assert!(!auth.login("letmein").await);
        assert!(!auth.is_authenticated());
    }

    #[tokio::test]
    async fn correct_password_authenticates_until_logout() {
        let auth = AdminAuth::with_delay(Duration::from_millis(1));
        assert!(auth.login("admin123").await);
        assert!(auth.is_authenticated());

        auth.logout();
        assert!(!auth.is_authenticated());
    }

    #[tokio::test]
    async fn failed_login_does_not_clear_an_existing_session() {
        let auth = AdminAuth::with_delay(Duration::from_millis(1));
        assert!(auth.login("admin123").await);
        assert!(!auth.login("typo").await);
        assert!(auth.is_authenticated());
    }
}
