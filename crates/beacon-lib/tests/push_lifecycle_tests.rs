use std::sync::Arc;
use std::time::Duration;

use beacon_lib::error::PushError;
use beacon_lib::platform::{Permission, PushPlatform, SimulatedPushPlatform};
use beacon_lib::push::{
    LocalNotifier, PermissionGate, SubscriptionManager, SUBSCRIPTION_CACHE_KEY,
};
use beacon_lib::storage::{KeyValueStore, MemoryStore, StorageError};

fn manager_for(
    platform: Arc<SimulatedPushPlatform>,
    storage: Arc<dyn KeyValueStore>,
) -> SubscriptionManager {
    let gate = PermissionGate::new(platform.clone() as Arc<dyn PushPlatform>);
    SubscriptionManager::new(platform, gate, storage)
}

#[tokio::test]
async fn subscription_state_follows_subscribe_and_unsubscribe() {
    let platform = Arc::new(SimulatedPushPlatform::new());
    let manager = manager_for(platform, Arc::new(MemoryStore::new()));

    assert!(!manager.is_subscribed().await);

    let subscription = manager.subscribe().await.expect("subscribe should succeed");
    assert!(subscription.endpoint.starts_with("https://"));
    assert!(manager.is_subscribed().await);

    manager.unsubscribe().await.expect("unsubscribe should succeed");
    assert!(!manager.is_subscribed().await);
}

#[tokio::test]
async fn subscribe_caches_a_snapshot_and_unsubscribe_drops_it() {
    let platform = Arc::new(SimulatedPushPlatform::new());
    let storage = Arc::new(MemoryStore::new());
    let manager = manager_for(platform, storage.clone());

    let subscription = manager.subscribe().await.unwrap();

    let cached = storage
        .get(SUBSCRIPTION_CACHE_KEY)
        .unwrap()
        .expect("snapshot should be cached");
    assert!(cached.contains(&subscription.endpoint));

    manager.unsubscribe().await.unwrap();
    assert_eq!(storage.get(SUBSCRIPTION_CACHE_KEY).unwrap(), None);
}

#[tokio::test]
async fn stale_snapshot_is_never_trusted() {
    let platform = Arc::new(SimulatedPushPlatform::new());
    let storage = Arc::new(MemoryStore::new());
    // A leftover snapshot from an earlier session, no platform subscription
    storage
        .set(SUBSCRIPTION_CACHE_KEY, "{\"endpoint\":\"https://push.local/stale\"}")
        .unwrap();

    let manager = manager_for(platform, storage);
    assert_eq!(manager.current_subscription().await.unwrap(), None);
    assert!(!manager.is_subscribed().await);
}

#[tokio::test]
async fn denied_permission_fails_fast_without_touching_the_push_manager() {
    let platform = Arc::new(SimulatedPushPlatform::with_permission(Permission::Denied));
    let manager = manager_for(platform.clone(), Arc::new(MemoryStore::new()));

    let result = manager.subscribe().await;
    assert!(matches!(result, Err(PushError::PermissionDenied)));
    assert_eq!(platform.subscribe_calls(), 0);
}

#[tokio::test]
async fn declined_prompt_fails_the_subscribe() {
    let platform = Arc::new(SimulatedPushPlatform::answering_prompts_with(
        Permission::Denied,
    ));
    let manager = manager_for(platform.clone(), Arc::new(MemoryStore::new()));

    let result = manager.subscribe().await;
    assert!(matches!(result, Err(PushError::PermissionDenied)));
    assert_eq!(platform.subscribe_calls(), 0);
}

#[tokio::test]
async fn unsupported_platform_reports_unsupported() {
    let platform = Arc::new(SimulatedPushPlatform::unsupported());
    let manager = manager_for(platform, Arc::new(MemoryStore::new()));

    assert_eq!(manager.register_worker().await.unwrap(), None);
    assert!(matches!(manager.subscribe().await, Err(PushError::Unsupported)));
    // Unsubscribing on an unsupported platform is a quiet no-op
    manager.unsubscribe().await.unwrap();
}

#[tokio::test]
async fn failed_worker_registration_is_a_registration_error() {
    let platform = Arc::new(SimulatedPushPlatform::new().failing_registration());
    let manager = manager_for(platform, Arc::new(MemoryStore::new()));

    let result = manager.subscribe().await;
    assert!(matches!(result, Err(PushError::Registration(_))));
}

#[tokio::test]
async fn worker_that_never_readies_times_out() {
    let platform = Arc::new(SimulatedPushPlatform::new().stalled_worker());
    let manager = manager_for(platform, Arc::new(MemoryStore::new()))
        .with_ready_timeout(Duration::from_millis(50));

    let result = manager.subscribe().await;
    assert!(matches!(result, Err(PushError::Timeout)));
}

#[tokio::test]
async fn unsubscribe_with_nothing_active_is_a_no_op() {
    let platform = Arc::new(SimulatedPushPlatform::new());
    let manager = manager_for(platform, Arc::new(MemoryStore::new()));
    manager.unsubscribe().await.expect("nothing to unsubscribe is fine");
}

struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Read {
            key: key.to_string(),
            reason: "disk on fire".to_string(),
        })
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write {
            key: key.to_string(),
            reason: "disk on fire".to_string(),
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Err(StorageError::Write {
            key: key.to_string(),
            reason: "disk on fire".to_string(),
        })
    }
}

#[tokio::test]
async fn storage_failures_never_fail_the_subscription_ops() {
    let platform = Arc::new(SimulatedPushPlatform::new());
    let manager = manager_for(platform, Arc::new(FailingStore));

    // The snapshot is a cache; a dead store must not break subscribe
    manager.subscribe().await.expect("subscribe should survive a dead store");
    assert!(manager.is_subscribed().await);

    manager.unsubscribe().await.expect("unsubscribe should survive a dead store");
    assert!(!manager.is_subscribed().await);
}

#[tokio::test]
async fn local_notifier_requires_an_active_subscription() {
    let platform = Arc::new(SimulatedPushPlatform::new());
    let manager = manager_for(platform.clone(), Arc::new(MemoryStore::new()));
    let notifier = LocalNotifier::new(platform.clone(), manager.clone());

    let result = notifier.display("Hello", "world", "/favicon.ico", "/favicon.ico").await;
    assert!(matches!(result, Err(PushError::NoSubscription)));
    assert!(platform.displayed().is_empty());

    manager.subscribe().await.unwrap();
    notifier
        .display("Hello", "world", "/favicon.ico", "/favicon.ico")
        .await
        .expect("display should succeed with an active subscription");

    let displayed = platform.displayed();
    assert_eq!(displayed.len(), 1);
    assert_eq!(displayed[0].title, "Hello");
    assert_eq!(displayed[0].options.vibrate, vec![200, 100, 200]);
    assert_eq!(displayed[0].options.actions.len(), 2);
    assert_eq!(displayed[0].options.actions[0].title, "Read Now");
}
