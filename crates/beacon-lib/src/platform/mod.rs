//! Platform capability surface for push notifications.
//!
//! Everything the push lifecycle needs from the host runtime (permission
//! prompts, background worker registration, the push manager, system
//! notification display) sits behind the [`PushPlatform`] trait so the core
//! can be driven by a real binding or an in-process simulation alike.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod simulated;

pub use simulated::SimulatedPushPlatform;

/// Notification permission decision, mirroring the platform tri-state.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Granted,
    Denied,
    Default,
}

/// Handle to a registered background worker.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkerRegistration {
    pub scope: String,
    pub script: String,
}

/// Encryption keys carried by a push subscription handle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SubscriptionKeys {
    pub p256dh: String,
    pub auth: String,
}

/// Opaque subscription handle issued by the platform push manager.
///
/// Contains at minimum the delivery endpoint and encryption keys. A real push
/// service would receive this from the page; here it only gates the locally
/// simulated notification.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PushSubscription {
    pub endpoint: String,
    pub keys: SubscriptionKeys,
}

/// Options supplied when creating a subscription.
#[derive(Debug, Clone)]
pub struct SubscribeOptions {
    pub user_visible_only: bool,
    /// Application server key, decoded from its base64url form into raw bytes.
    pub application_server_key: Vec<u8>,
}

/// Action button attached to a system notification.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NotificationAction {
    pub action: String,
    pub title: String,
    pub icon: String,
}

/// Display options for a system notification shown through a worker
/// registration.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NotificationOptions {
    pub body: String,
    pub icon: String,
    pub badge: String,
    pub vibrate: Vec<u32>,
    pub data: serde_json::Value,
    pub actions: Vec<NotificationAction>,
}

/// The injected platform capability object.
///
/// Production code would bind this to the real browser runtime; tests and the
/// headless demo bind [`SimulatedPushPlatform`]. Each async method is a
/// suspension point that may interleave with other UI work.
#[async_trait]
pub trait PushPlatform: Send + Sync {
    /// Whether the runtime exposes a background-worker registration facility.
    fn supports_workers(&self) -> bool;

    /// Whether the runtime exposes a push-manager capability.
    fn supports_push(&self) -> bool;

    /// Current notification permission decision.
    async fn permission(&self) -> Permission;

    /// Prompt the user for notification permission. Idempotent once the user
    /// has decided; the existing decision is returned without a prompt.
    async fn request_permission(&self) -> Result<Permission>;

    /// Register the background worker script served at `script`.
    async fn register_worker(&self, script: &str) -> Result<WorkerRegistration>;

    /// Resolves once the active worker is ready to take requests.
    async fn worker_ready(&self) -> Result<()>;

    /// Current worker registration, if any.
    async fn get_registration(&self) -> Result<Option<WorkerRegistration>>;

    /// Acquire a push subscription through the registration's push manager.
    async fn subscribe(
        &self,
        registration: &WorkerRegistration,
        options: SubscribeOptions,
    ) -> Result<PushSubscription>;

    /// Current subscription held by the registration, if any.
    async fn get_subscription(
        &self,
        registration: &WorkerRegistration,
    ) -> Result<Option<PushSubscription>>;

    /// Cancel the subscription at the platform level. Returns whether a
    /// subscription was actually cancelled.
    async fn unsubscribe(&self, subscription: &PushSubscription) -> Result<bool>;

    /// Show a system notification through the worker registration.
    async fn show_notification(
        &self,
        registration: &WorkerRegistration,
        title: &str,
        options: &NotificationOptions,
    ) -> Result<()>;
}
