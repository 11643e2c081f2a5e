//! Push subscription lifecycle over the injected platform capability.

mod display;
mod permission;
mod subscription;

pub use display::LocalNotifier;
pub use permission::{PermissionGate, PermissionStatus};
pub use subscription::{
    SubscriptionManager, SUBSCRIPTION_CACHE_KEY, VAPID_PUBLIC_KEY, WORKER_SCRIPT,
};
