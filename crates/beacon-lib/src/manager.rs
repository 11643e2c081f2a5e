use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crate::error::PushError;
use crate::platform::PushPlatform;
use crate::push::{LocalNotifier, PermissionGate, PermissionStatus, SubscriptionManager};
use crate::storage::KeyValueStore;
use crate::toasts::{ToastAction, ToastKind, ToastQueue};

/// Route the blog-published toast's "Read Now" action points at.
pub const BLOG_ROUTE: &str = "/blog";

/// High-level notification operations used by presentation code.
///
/// Composes the toast queue, permission gate, subscription manager and local
/// notifier, and owns the session's notification preference state. Every
/// user-initiated push action resolves to exactly one toast; the toast is the
/// guaranteed channel and push is a best-effort mirror.
#[derive(Clone)]
pub struct NotificationManager {
    toasts: ToastQueue,
    gate: PermissionGate,
    subscriptions: SubscriptionManager,
    notifier: LocalNotifier,
    push_supported: bool,
    new_blog_count: Arc<AtomicU32>,
    // Serializes enable/disable so a disable cannot race ahead of an
    // in-flight enable and leave the platform mid-transition.
    transition: Arc<tokio::sync::Mutex<()>>,
}

impl NotificationManager {
    pub fn new(platform: Arc<dyn PushPlatform>, storage: Arc<dyn KeyValueStore>) -> Self {
        Self::with_toasts(platform, storage, ToastQueue::new())
    }

    /// Build around an existing toast queue (tests use short-TTL queues).
    pub fn with_toasts(
        platform: Arc<dyn PushPlatform>,
        storage: Arc<dyn KeyValueStore>,
        toasts: ToastQueue,
    ) -> Self {
        let gate = PermissionGate::new(platform.clone());
        let subscriptions = SubscriptionManager::new(platform.clone(), gate.clone(), storage);
        let notifier = LocalNotifier::new(platform, subscriptions.clone());
        let push_supported = gate.is_supported();

        Self {
            toasts,
            gate,
            subscriptions,
            notifier,
            push_supported,
            new_blog_count: Arc::new(AtomicU32::new(0)),
            transition: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    /// The in-app toast queue, for the display layer to render and dismiss.
    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    /// Capability detection result, computed once at startup.
    pub fn push_supported(&self) -> bool {
        self.push_supported
    }

    /// Whether push is currently enabled. Always re-derived from the platform
    /// subscription, never from a stored flag, so it cannot drift from the
    /// platform's ground truth.
    pub async fn is_push_enabled(&self) -> bool {
        self.subscriptions.is_subscribed().await
    }

    /// Startup check mirroring the page's mount sequence: derive the enabled
    /// state from the live subscription so the UI starts out consistent.
    pub async fn sync_push_state(&self) -> bool {
        let enabled = self.is_push_enabled().await;
        log::debug!("Push subscription active at startup: {}", enabled);
        enabled
    }

    /// Published posts since the blog section was last visited.
    pub fn new_blog_count(&self) -> u32 {
        self.new_blog_count.load(Ordering::SeqCst)
    }

    pub fn clear_blog_badge(&self) {
        self.new_blog_count.store(0, Ordering::SeqCst);
    }

    /// Announce a freshly published post.
    ///
    /// The success toast always appears and the badge always increments. When
    /// push is enabled the event is additionally mirrored as a system
    /// notification; a failure there is logged and swallowed.
    pub async fn notify_blog_published(&self, title: &str) {
        self.toasts.add_with_action(
            ToastKind::Success,
            "New Blog Post Published!",
            &format!("\"{}\" is now live on the blog.", title),
            Some("📝"),
            ToastAction {
                label: "Read Now".to_string(),
                target: BLOG_ROUTE.to_string(),
            },
        );
        self.new_blog_count.fetch_add(1, Ordering::SeqCst);

        if self.is_push_enabled().await {
            if let Err(e) = self
                .notifier
                .display(
                    "New Blog Post Published! 🎉",
                    &format!("\"{}\" is now available to read.", title),
                    "/favicon.ico",
                    "/favicon.ico",
                )
                .await
            {
                log::error!("Error sending push notification: {}", e);
            }
        }
    }

    /// Turn push notifications on. Resolves to exactly one toast: success, or
    /// an error classified from the failure.
    pub async fn enable_push(&self) {
        let _guard = self.transition.lock().await;

        // A denied permission is final from here; re-prompting is a no-op on
        // real platforms, so don't even start the subscribe path.
        if self.gate.status().await == PermissionStatus::Denied {
            self.toasts.add(
                ToastKind::Error,
                "Notifications Blocked",
                "Please enable notifications for this site in your browser settings, then try again.",
                Some("🚫"),
            );
            return;
        }

        match self.subscriptions.subscribe().await {
            Ok(_) => {
                self.toasts.add(
                    ToastKind::Success,
                    "Push Notifications Enabled!",
                    "You'll now receive notifications for new blog posts.",
                    Some("🔔"),
                );
            }
            Err(e) => {
                log::error!("Error enabling push notifications: {}", e);
                let (title, message) = classify_enable_error(&e);
                self.toasts.add(ToastKind::Error, title, message, Some("❌"));
            }
        }
    }

    /// Turn push notifications off. Unsubscribe failures are best-effort
    /// cleanup: logged, never surfaced (the next state query re-checks the
    /// platform anyway).
    pub async fn disable_push(&self) {
        let _guard = self.transition.lock().await;

        if let Err(e) = self.subscriptions.unsubscribe().await {
            log::error!("Error disabling push notifications: {}", e);
        }
        self.toasts.add(
            ToastKind::Info,
            "Push Notifications Disabled",
            "You won't receive push notifications anymore.",
            Some("🔕"),
        );
    }
}

fn classify_enable_error(error: &PushError) -> (&'static str, &'static str) {
    match error {
        PushError::PermissionDenied => (
            "Notifications Blocked",
            "Please enable notifications for this site in your browser settings, then try again.",
        ),
        PushError::Unsupported => (
            "Not Supported",
            "Push notifications are not supported in this browser.",
        ),
        _ => (
            "Push Notifications Failed",
            "Could not enable push notifications.",
        ),
    }
}
