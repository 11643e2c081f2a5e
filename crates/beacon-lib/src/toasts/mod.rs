//! In-app toast notifications.

mod models;
mod queue;

pub use models::{Toast, ToastAction, ToastKind};
pub use queue::{ToastQueue, DEFAULT_TOAST_TTL};
