//! In-process push platform.
//!
//! Nothing here talks to a real push service; the site's "push" is a locally
//! displayed notification. This binding models that in memory: permission
//! state, a single worker registration, at most one subscription, and a
//! record of every notification it displayed. Tests drive the failure
//! toggles; the demo binary runs it as-is.

use std::sync::Mutex;

use anyhow::{bail, Result};
use async_trait::async_trait;
use uuid::Uuid;

use super::{
    NotificationOptions, Permission, PushPlatform, PushSubscription, SubscribeOptions,
    SubscriptionKeys, WorkerRegistration,
};

/// A system notification the platform was asked to display.
#[derive(Debug, Clone)]
pub struct DisplayedNotification {
    pub title: String,
    pub options: NotificationOptions,
}

pub struct SimulatedPushPlatform {
    supports_workers: bool,
    supports_push: bool,
    /// Decision a permission prompt resolves to while the state is `Default`.
    prompt_answer: Permission,
    fail_registration: bool,
    fail_display: bool,
    stall_worker_ready: bool,
    permission: Mutex<Permission>,
    registration: Mutex<Option<WorkerRegistration>>,
    subscription: Mutex<Option<PushSubscription>>,
    displayed: Mutex<Vec<DisplayedNotification>>,
    subscribe_calls: Mutex<u32>,
}

impl SimulatedPushPlatform {
    /// Fully capable platform: permission undecided, prompts grant.
    pub fn new() -> Self {
        Self {
            supports_workers: true,
            supports_push: true,
            prompt_answer: Permission::Granted,
            fail_registration: false,
            fail_display: false,
            stall_worker_ready: false,
            permission: Mutex::new(Permission::Default),
            registration: Mutex::new(None),
            subscription: Mutex::new(None),
            displayed: Mutex::new(Vec::new()),
            subscribe_calls: Mutex::new(0),
        }
    }

    /// Platform without worker/push capabilities.
    pub fn unsupported() -> Self {
        Self {
            supports_workers: false,
            supports_push: false,
            ..Self::new()
        }
    }

    /// Platform whose permission is already decided.
    pub fn with_permission(permission: Permission) -> Self {
        let platform = Self::new();
        *platform.permission.lock().unwrap() = permission;
        platform
    }

    /// Prompts resolve to `answer` instead of granting.
    pub fn answering_prompts_with(answer: Permission) -> Self {
        Self {
            prompt_answer: answer,
            ..Self::new()
        }
    }

    /// Worker registration fails (e.g. the script cannot be fetched).
    pub fn failing_registration(mut self) -> Self {
        self.fail_registration = true;
        self
    }

    /// `show_notification` fails even with a live registration.
    pub fn failing_display(mut self) -> Self {
        self.fail_display = true;
        self
    }

    /// The worker never signals readiness.
    pub fn stalled_worker(mut self) -> Self {
        self.stall_worker_ready = true;
        self
    }

    /// Notifications displayed so far, oldest first.
    pub fn displayed(&self) -> Vec<DisplayedNotification> {
        self.displayed.lock().unwrap().clone()
    }

    /// How many times `subscribe` was attempted against the push manager.
    pub fn subscribe_calls(&self) -> u32 {
        *self.subscribe_calls.lock().unwrap()
    }

    pub fn set_permission(&self, permission: Permission) {
        *self.permission.lock().unwrap() = permission;
    }
}

impl Default for SimulatedPushPlatform {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PushPlatform for SimulatedPushPlatform {
    fn supports_workers(&self) -> bool {
        self.supports_workers
    }

    fn supports_push(&self) -> bool {
        self.supports_push
    }

    async fn permission(&self) -> Permission {
        *self.permission.lock().unwrap()
    }

    async fn request_permission(&self) -> Result<Permission> {
        let mut permission = self.permission.lock().unwrap();
        // Prompts only appear while the decision is still open.
        if *permission == Permission::Default {
            *permission = self.prompt_answer;
        }
        Ok(*permission)
    }

    async fn register_worker(&self, script: &str) -> Result<WorkerRegistration> {
        if !self.supports_workers {
            bail!("Service workers are not available");
        }
        if self.fail_registration {
            bail!("Failed to fetch worker script {}", script);
        }
        let registration = WorkerRegistration {
            scope: "/".to_string(),
            script: script.to_string(),
        };
        *self.registration.lock().unwrap() = Some(registration.clone());
        Ok(registration)
    }

    async fn worker_ready(&self) -> Result<()> {
        if self.stall_worker_ready {
            std::future::pending::<()>().await;
        }
        Ok(())
    }

    async fn get_registration(&self) -> Result<Option<WorkerRegistration>> {
        Ok(self.registration.lock().unwrap().clone())
    }

    async fn subscribe(
        &self,
        _registration: &WorkerRegistration,
        options: SubscribeOptions,
    ) -> Result<PushSubscription> {
        *self.subscribe_calls.lock().unwrap() += 1;
        if *self.permission.lock().unwrap() != Permission::Granted {
            bail!("Subscription refused: notification permission not granted");
        }
        if options.application_server_key.is_empty() {
            bail!("Subscription refused: missing application server key");
        }
        let subscription = PushSubscription {
            endpoint: format!("https://push.local/endpoint/{}", Uuid::new_v4()),
            keys: SubscriptionKeys {
                p256dh: Uuid::new_v4().simple().to_string(),
                auth: Uuid::new_v4().simple().to_string(),
            },
        };
        *self.subscription.lock().unwrap() = Some(subscription.clone());
        Ok(subscription)
    }

    async fn get_subscription(
        &self,
        _registration: &WorkerRegistration,
    ) -> Result<Option<PushSubscription>> {
        Ok(self.subscription.lock().unwrap().clone())
    }

    async fn unsubscribe(&self, subscription: &PushSubscription) -> Result<bool> {
        let mut current = self.subscription.lock().unwrap();
        match current.as_ref() {
            Some(active) if active.endpoint == subscription.endpoint => {
                *current = None;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn show_notification(
        &self,
        registration: &WorkerRegistration,
        title: &str,
        options: &NotificationOptions,
    ) -> Result<()> {
        if self.fail_display {
            bail!("Notification display rejected by platform");
        }
        if self.registration.lock().unwrap().as_ref() != Some(registration) {
            bail!("Unknown worker registration for scope {}", registration.scope);
        }
        log::info!("[system notification] {}: {}", title, options.body);
        self.displayed.lock().unwrap().push(DisplayedNotification {
            title: title.to_string(),
            options: options.clone(),
        });
        Ok(())
    }
}
