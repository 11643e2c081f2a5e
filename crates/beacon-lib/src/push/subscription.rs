use std::sync::Arc;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::PushError;
use crate::platform::{PushPlatform, PushSubscription, SubscribeOptions, WorkerRegistration};
use crate::push::permission::{PermissionGate, PermissionStatus};
use crate::storage::KeyValueStore;

/// Application-identifying key supplied when creating a subscription. A real
/// push service would use it to authenticate the server; here it is a fixed
/// placeholder.
pub const VAPID_PUBLIC_KEY: &str =
    "BEl62iUYgUivxIkv69yViEuiBIa40HuWukzpOCmnLEPTjdGCmfykXmqfzuFhRreUaGn1lQ1wUsrPmWVlI7A_Rvs";

/// Well-known path of the background worker script.
pub const WORKER_SCRIPT: &str = "/sw.js";

/// Storage key holding the serialized subscription snapshot. Demo continuity
/// only; the platform subscription is always authoritative.
pub const SUBSCRIPTION_CACHE_KEY: &str = "pushSubscription";

// The platform gives no upper bound on worker readiness; this port does.
const WORKER_READY_TIMEOUT: Duration = Duration::from_secs(10);

/// Owns the push subscription lifecycle: worker registration, subscribe,
/// unsubscribe, and the best-effort local snapshot of the handle.
#[derive(Clone)]
pub struct SubscriptionManager {
    platform: Arc<dyn PushPlatform>,
    gate: PermissionGate,
    storage: Arc<dyn KeyValueStore>,
    ready_timeout: Duration,
}

impl SubscriptionManager {
    pub fn new(
        platform: Arc<dyn PushPlatform>,
        gate: PermissionGate,
        storage: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            platform,
            gate,
            storage,
            ready_timeout: WORKER_READY_TIMEOUT,
        }
    }

    /// Override the worker-readiness bound. Tests use short timeouts.
    pub fn with_ready_timeout(mut self, timeout: Duration) -> Self {
        self.ready_timeout = timeout;
        self
    }

    /// Register the background worker. `None` when the platform is
    /// unsupported; a platform rejection is a registration failure.
    pub async fn register_worker(&self) -> Result<Option<WorkerRegistration>, PushError> {
        if !self.gate.is_supported() {
            return Ok(None);
        }
        let registration = self
            .platform
            .register_worker(WORKER_SCRIPT)
            .await
            .map_err(PushError::Registration)?;
        log::info!(
            "Background worker registered: scope {}, script {}",
            registration.scope,
            registration.script
        );
        Ok(Some(registration))
    }

    /// Acquire a push subscription.
    ///
    /// Fails fast on a denied permission without prompting; prompts only while
    /// the decision is still open. The snapshot write at the end is a cache,
    /// not part of the contract: its failure is logged and swallowed.
    pub async fn subscribe(&self) -> Result<PushSubscription, PushError> {
        match self.gate.status().await {
            PermissionStatus::Unsupported => return Err(PushError::Unsupported),
            PermissionStatus::Denied => return Err(PushError::PermissionDenied),
            PermissionStatus::Default => {
                if !self.gate.request().await? {
                    return Err(PushError::PermissionDenied);
                }
            }
            PermissionStatus::Granted => {}
        }

        let registration = match self.register_worker().await? {
            Some(registration) => registration,
            None => return Err(PushError::Unsupported),
        };

        tokio::time::timeout(self.ready_timeout, self.platform.worker_ready())
            .await
            .map_err(|_| PushError::Timeout)??;

        let subscription = self
            .platform
            .subscribe(
                &registration,
                SubscribeOptions {
                    user_visible_only: true,
                    application_server_key: decode_server_key(VAPID_PUBLIC_KEY)?,
                },
            )
            .await?;

        self.cache_snapshot(&subscription);

        Ok(subscription)
    }

    /// Cancel the current subscription, if any. Nothing to unsubscribe is not
    /// an error.
    pub async fn unsubscribe(&self) -> Result<(), PushError> {
        if !self.gate.is_supported() {
            return Ok(());
        }
        let registration = match self.platform.get_registration().await? {
            Some(registration) => registration,
            None => return Ok(()),
        };
        if let Some(subscription) = self.platform.get_subscription(&registration).await? {
            self.platform.unsubscribe(&subscription).await?;
            if let Err(e) = self.storage.remove(SUBSCRIPTION_CACHE_KEY) {
                log::warn!("Failed to drop cached push subscription: {}", e);
            }
        }
        Ok(())
    }

    /// Current subscription, always re-queried from the platform. The cached
    /// snapshot under [`SUBSCRIPTION_CACHE_KEY`] may be stale and is never
    /// consulted here.
    pub async fn current_subscription(&self) -> Result<Option<PushSubscription>, PushError> {
        if !self.gate.is_supported() {
            return Ok(None);
        }
        let registration = match self.platform.get_registration().await? {
            Some(registration) => registration,
            None => return Ok(None),
        };
        Ok(self.platform.get_subscription(&registration).await?)
    }

    pub async fn is_subscribed(&self) -> bool {
        match self.current_subscription().await {
            Ok(subscription) => subscription.is_some(),
            Err(e) => {
                log::error!("Error checking push subscription: {}", e);
                false
            }
        }
    }

    fn cache_snapshot(&self, subscription: &PushSubscription) {
        match serde_json::to_string(subscription) {
            Ok(json) => {
                if let Err(e) = self.storage.set(SUBSCRIPTION_CACHE_KEY, &json) {
                    log::warn!("Failed to cache push subscription: {}", e);
                }
            }
            Err(e) => log::warn!("Failed to serialize push subscription: {}", e),
        }
    }
}

/// Standard base64url decode of an application server key: `-`→`+`, `_`→`/`,
/// padded to a multiple of four, then decoded to raw bytes.
pub fn decode_server_key(key: &str) -> Result<Vec<u8>, PushError> {
    let padding = (4 - key.len() % 4) % 4;
    let mut base64 = key.replace('-', "+").replace('_', "/");
    base64.push_str(&"=".repeat(padding));
    STANDARD
        .decode(base64.as_bytes())
        .map_err(|e| PushError::Platform(anyhow::anyhow!("Invalid application server key: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vapid_key_decodes_to_a_65_byte_point() {
        let bytes = decode_server_key(VAPID_PUBLIC_KEY).unwrap();
        // Uncompressed P-256 public point: 0x04 marker + two 32-byte coordinates
        assert_eq!(bytes.len(), 65);
        assert_eq!(bytes[0], 0x04);
    }

    #[test]
    fn decode_pads_short_inputs() {
        assert_eq!(decode_server_key("AQ").unwrap(), vec![1]);
        assert_eq!(decode_server_key("AQI").unwrap(), vec![1, 2]);
        assert_eq!(decode_server_key("AQID").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn decode_maps_url_safe_alphabet() {
        // '-' and '_' are the base64url forms of '+' and '/'
        assert_eq!(decode_server_key("-_8").unwrap(), vec![0xfb, 0xff]);
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(decode_server_key("not base64!").is_err());
    }
}
