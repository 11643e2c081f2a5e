use serde::{Deserialize, Serialize};

/// Severity of an in-app toast, driving the fallback glyph.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    /// Glyph shown when the toast carries no icon override.
    pub fn default_icon(&self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ️",
            ToastKind::Success => "✅",
            ToastKind::Warning => "⚠️",
            ToastKind::Error => "❌",
        }
    }
}

/// Navigation affordance attached by the emitting call.
///
/// The display layer renders whatever action is present instead of inferring
/// behavior from the toast's title text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ToastAction {
    pub label: String,
    pub target: String,
}

/// A transient, auto-expiring in-app message.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    pub icon: Option<String>,
    pub action: Option<ToastAction>,
    pub created_at: String,
}

impl Toast {
    /// Icon override if set, otherwise the kind-derived glyph.
    pub fn display_icon(&self) -> &str {
        self.icon.as_deref().unwrap_or(self.kind.default_icon())
    }
}
