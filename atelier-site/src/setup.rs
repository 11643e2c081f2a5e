use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use beacon_lib::manager::NotificationManager;
use beacon_lib::platform::{PushPlatform, SimulatedPushPlatform};
use beacon_lib::storage::{JsonFileStore, KeyValueStore};

use crate::auth::AdminAuth;
use crate::blog::BlogStore;
use crate::models::settings::{self, SiteSettings};

/// Everything the presentation layer talks to.
pub struct App {
    pub storage: Arc<dyn KeyValueStore>,
    pub notifications: NotificationManager,
    pub blog: BlogStore,
    pub auth: AdminAuth,
    pub settings: SiteSettings,
}

/// Wire the app against file-backed storage and the in-process push platform.
pub async fn init(data_dir: PathBuf) -> Result<App> {
    let storage: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::new(data_dir)?);
    let platform: Arc<dyn PushPlatform> = Arc::new(SimulatedPushPlatform::new());
    init_with(storage, platform).await
}

/// Same wiring with injected storage and platform. Tests hand in a memory
/// store and a configured fake.
pub async fn init_with(
    storage: Arc<dyn KeyValueStore>,
    platform: Arc<dyn PushPlatform>,
) -> Result<App> {
    let notifications = NotificationManager::new(platform, storage.clone());
    if !notifications.push_supported() {
        log::warn!("Push notifications are not supported on this platform");
    }
    // The startup sequence the page runs on mount: capability detection is
    // done above, then the enabled flag is derived from the live subscription.
    notifications.sync_push_state().await;

    let blog = BlogStore::load(storage.clone(), notifications.clone());
    let settings = settings::load(storage.as_ref());

    Ok(App {
        storage,
        notifications,
        blog,
        auth: AdminAuth::new(),
        settings,
    })
}
