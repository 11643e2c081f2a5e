use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use uuid::Uuid;

use super::models::{Toast, ToastAction, ToastKind};

/// How long a toast stays up before it is removed automatically.
pub const DEFAULT_TOAST_TTL: Duration = Duration::from_millis(5000);

/// Ephemeral in-app notification list.
///
/// Newest first; each toast expires after the queue's TTL unless dismissed
/// earlier. A manual dismissal cancels the pending expiry task so no timers
/// leak, and removal is idempotent either way.
#[derive(Clone)]
pub struct ToastQueue {
    toasts: Arc<Mutex<Vec<Toast>>>,
    expiry_tasks: Arc<Mutex<HashMap<String, JoinHandle<()>>>>,
    ttl: Duration,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TOAST_TTL)
    }

    /// Queue with a custom expiry delay. Tests use short delays.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            toasts: Arc::new(Mutex::new(Vec::new())),
            expiry_tasks: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    /// Add a toast and schedule its auto-removal. Returns the assigned id.
    pub fn add(&self, kind: ToastKind, title: &str, message: &str, icon: Option<&str>) -> String {
        self.push_toast(kind, title, message, icon, None)
    }

    /// Add a toast carrying a navigation action.
    pub fn add_with_action(
        &self,
        kind: ToastKind,
        title: &str,
        message: &str,
        icon: Option<&str>,
        action: ToastAction,
    ) -> String {
        self.push_toast(kind, title, message, icon, Some(action))
    }

    fn push_toast(
        &self,
        kind: ToastKind,
        title: &str,
        message: &str,
        icon: Option<&str>,
        action: Option<ToastAction>,
    ) -> String {
        let id = Uuid::new_v4().to_string();
        let toast = Toast {
            id: id.clone(),
            kind,
            title: title.to_string(),
            message: message.to_string(),
            icon: icon.map(|i| i.to_string()),
            action,
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        {
            let mut toasts = self.toasts.lock().unwrap();
            toasts.insert(0, toast);
        }

        self.schedule_expiry(id.clone());
        id
    }

    fn schedule_expiry(&self, id: String) {
        let queue = self.clone();
        let expired_id = id.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(queue.ttl).await;
            queue.expire(&expired_id);
        });
        self.expiry_tasks.lock().unwrap().insert(id, handle);
    }

    /// Removal driven by the expiry timer. The task has already run to this
    /// point, so its handle only needs to be forgotten, not aborted.
    fn expire(&self, id: &str) {
        self.expiry_tasks.lock().unwrap().remove(id);
        self.toasts.lock().unwrap().retain(|t| t.id != id);
    }

    /// Dismiss a toast. Unknown or already-removed ids are a no-op.
    pub fn remove(&self, id: &str) {
        if let Some(handle) = self.expiry_tasks.lock().unwrap().remove(id) {
            handle.abort();
        }
        self.toasts.lock().unwrap().retain(|t| t.id != id);
    }

    /// Active toasts, newest first.
    pub fn list(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.toasts.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.lock().unwrap().is_empty()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn lists_newest_first_with_unique_ids() {
        let queue = ToastQueue::new();
        let first = queue.add(ToastKind::Info, "First", "one", None);
        let second = queue.add(ToastKind::Success, "Second", "two", None);
        let third = queue.add(ToastKind::Error, "Third", "three", None);

        let titles: Vec<String> = queue.list().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["Third", "Second", "First"]);

        assert_ne!(first, second);
        assert_ne!(second, third);
        assert_ne!(first, third);
    }

    #[tokio::test]
    async fn toasts_expire_after_ttl() {
        let queue = ToastQueue::with_ttl(Duration::from_millis(50));
        queue.add(ToastKind::Info, "Ephemeral", "gone soon", None);
        assert_eq!(queue.len(), 1);

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(queue.is_empty(), "toast should have been auto-removed");
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let queue = ToastQueue::new();
        let keep = queue.add(ToastKind::Info, "Keep", "stays", None);
        let drop = queue.add(ToastKind::Info, "Drop", "goes", None);

        queue.remove(&drop);
        assert_eq!(queue.len(), 1);

        // Second removal of the same id changes nothing
        queue.remove(&drop);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.list()[0].id, keep);

        // Unknown ids are a no-op too
        queue.remove("not-a-real-id");
        assert_eq!(queue.len(), 1);
    }

    #[tokio::test]
    async fn manual_dismissal_cancels_the_expiry_task() {
        let queue = ToastQueue::with_ttl(Duration::from_millis(40));
        let early = queue.add(ToastKind::Warning, "Dismissed", "by hand", None);
        queue.remove(&early);
        assert!(queue.expiry_tasks.lock().unwrap().is_empty());

        // A toast added after the dismissal must survive the first one's
        // original deadline untouched.
        queue.add(ToastKind::Info, "Later", "still here", None);
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(queue.len(), 1);
    }

    #[tokio::test]
    async fn action_is_carried_on_the_toast() {
        let queue = ToastQueue::new();
        queue.add_with_action(
            ToastKind::Success,
            "New Blog Post Published!",
            "\"Hello\" is now live on the blog.",
            Some("📝"),
            ToastAction {
                label: "Read Now".to_string(),
                target: "/blog".to_string(),
            },
        );

        let toast = &queue.list()[0];
        let action = toast.action.as_ref().expect("action should be attached");
        assert_eq!(action.label, "Read Now");
        assert_eq!(action.target, "/blog");
    }
}
