use std::sync::Arc;

use serde_json::json;

use crate::error::PushError;
use crate::platform::{NotificationAction, NotificationOptions, PushPlatform};
use crate::push::subscription::SubscriptionManager;

/// Simulates an inbound push by displaying a system notification directly
/// through the active worker registration.
///
/// A real deployment would have a server deliver this via the push service;
/// here it only fires while the process is alive, which is exactly what the
/// original demo does.
#[derive(Clone)]
pub struct LocalNotifier {
    platform: Arc<dyn PushPlatform>,
    subscriptions: SubscriptionManager,
}

impl LocalNotifier {
    pub fn new(platform: Arc<dyn PushPlatform>, subscriptions: SubscriptionManager) -> Self {
        Self {
            platform,
            subscriptions,
        }
    }

    /// Show a system notification. Requires an active subscription; without
    /// one there is nothing to simulate a push against.
    pub async fn display(
        &self,
        title: &str,
        body: &str,
        icon: &str,
        badge: &str,
    ) -> Result<(), PushError> {
        if self.subscriptions.current_subscription().await?.is_none() {
            return Err(PushError::NoSubscription);
        }

        let registration = match self.platform.get_registration().await? {
            Some(registration) => registration,
            None => return Err(PushError::NoSubscription),
        };

        let options = NotificationOptions {
            body: body.to_string(),
            icon: icon.to_string(),
            badge: badge.to_string(),
            vibrate: vec![200, 100, 200],
            data: json!({
                "dateOfArrival": chrono::Utc::now().timestamp_millis(),
                "primaryKey": 1,
            }),
            actions: vec![
                NotificationAction {
                    action: "explore".to_string(),
                    title: "Read Now".to_string(),
                    icon: icon.to_string(),
                },
                NotificationAction {
                    action: "close".to_string(),
                    title: "Close".to_string(),
                    icon: icon.to_string(),
                },
            ],
        };

        self.platform
            .show_notification(&registration, title, &options)
            .await?;
        Ok(())
    }
}
