use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::PushError;
use crate::platform::{Permission, PushPlatform};

/// Permission state as reported to callers. `Unsupported` is answered from
/// capability detection alone, without touching the permission API.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    Granted,
    Denied,
    Default,
    Unsupported,
}

impl From<Permission> for PermissionStatus {
    fn from(permission: Permission) -> Self {
        match permission {
            Permission::Granted => PermissionStatus::Granted,
            Permission::Denied => PermissionStatus::Denied,
            Permission::Default => PermissionStatus::Default,
        }
    }
}

/// Wraps the platform's notification-permission primitive.
///
/// Permission prompts are user-gated and must never be fired speculatively:
/// callers check [`status`](Self::status) first and only
/// [`request`](Self::request) while the decision is still `Default`. A
/// `Denied` state is final from the page's point of view; the user has to
/// change it in browser settings.
#[derive(Clone)]
pub struct PermissionGate {
    platform: Arc<dyn PushPlatform>,
}

impl PermissionGate {
    pub fn new(platform: Arc<dyn PushPlatform>) -> Self {
        Self { platform }
    }

    /// True iff the runtime exposes both a background-worker registration
    /// facility and a push-manager capability.
    pub fn is_supported(&self) -> bool {
        self.platform.supports_workers() && self.platform.supports_push()
    }

    /// Current permission state, re-queried from the platform. The user can
    /// flip the browser setting at any time, so nothing is cached here.
    pub async fn status(&self) -> PermissionStatus {
        if !self.is_supported() {
            return PermissionStatus::Unsupported;
        }
        self.platform.permission().await.into()
    }

    /// Prompt the user and return whether the decision was granted.
    /// Idempotent if the user already decided.
    pub async fn request(&self) -> Result<bool, PushError> {
        if !self.is_supported() {
            return Err(PushError::Unsupported);
        }
        let decision = self.platform.request_permission().await?;
        Ok(decision == Permission::Granted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::SimulatedPushPlatform;

    #[tokio::test]
    async fn unsupported_platform_short_circuits() {
        let gate = PermissionGate::new(Arc::new(SimulatedPushPlatform::unsupported()));
        assert!(!gate.is_supported());
        assert_eq!(gate.status().await, PermissionStatus::Unsupported);
        assert!(matches!(gate.request().await, Err(PushError::Unsupported)));
    }

    #[tokio::test]
    async fn request_resolves_the_default_state() {
        let gate = PermissionGate::new(Arc::new(SimulatedPushPlatform::new()));
        assert_eq!(gate.status().await, PermissionStatus::Default);
        assert!(gate.request().await.unwrap());
        assert_eq!(gate.status().await, PermissionStatus::Granted);
    }

    #[tokio::test]
    async fn denied_prompts_report_not_granted() {
        let platform = Arc::new(SimulatedPushPlatform::answering_prompts_with(
            Permission::Denied,
        ));
        let gate = PermissionGate::new(platform);
        assert!(!gate.request().await.unwrap());
        assert_eq!(gate.status().await, PermissionStatus::Denied);
    }

    #[tokio::test]
    async fn status_tracks_platform_changes() {
        let platform = Arc::new(SimulatedPushPlatform::with_permission(Permission::Granted));
        let gate = PermissionGate::new(platform.clone());
        assert_eq!(gate.status().await, PermissionStatus::Granted);

        // The user can flip the setting at any time; status must not cache
        platform.set_permission(Permission::Denied);
        assert_eq!(gate.status().await, PermissionStatus::Denied);
    }
}
