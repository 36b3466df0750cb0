// =============================================================================
// Bexa Web - Toast Notification Service
// =============================================================================
// Table of Contents:
// 1. Notifier Capability
// 2. Toast Types
// 3. Toast Queue
// 4. Toast Hub (reactive, context-provided)
// =============================================================================

use leptos::prelude::*;
use uuid::Uuid;

/// How long a toast stays on screen before auto-dismissing.
pub const TOAST_DURATION_MS: u32 = 4000;

// -----------------------------------------------------------------------------
// 1. Notifier Capability
// -----------------------------------------------------------------------------

/// Minimal notification capability consumed by the rest of the app.
///
/// Components depend on these two methods rather than on the toast
/// implementation, so tests can substitute a recording notifier.
pub trait Notifier {
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
}

// -----------------------------------------------------------------------------
// 2. Toast Types
// -----------------------------------------------------------------------------

/// Toast severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
}

impl ToastLevel {
    pub fn class(&self) -> &'static str {
        match self {
            ToastLevel::Info => "toast toast-info",
            ToastLevel::Warning => "toast toast-warning",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Info => "ℹ",
            ToastLevel::Warning => "⚠",
        }
    }
}

/// A single on-screen notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub level: ToastLevel,
    pub message: String,
}

// -----------------------------------------------------------------------------
// 3. Toast Queue
// -----------------------------------------------------------------------------

/// Ordered queue of live toasts. Plain data, no reactivity.
#[derive(Debug, Default)]
pub struct ToastQueue {
    items: Vec<Toast>,
}

impl ToastQueue {
    /// Append a toast and return its id.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.items.push(Toast {
            id,
            level,
            message: message.into(),
        });
        id
    }

    /// Remove a toast by id. Unknown ids are a no-op.
    pub fn dismiss(&mut self, id: Uuid) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// -----------------------------------------------------------------------------
// 4. Toast Hub
// -----------------------------------------------------------------------------

/// Reactive toast store provided via Leptos context.
///
/// Pushing schedules an auto-dismiss timeout; the hub lives for the whole
/// app session, so the fire-and-forget timeout cannot outlive its store.
#[derive(Clone, Copy)]
pub struct ToastHub {
    queue: RwSignal<ToastQueue>,
}

impl ToastHub {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    /// Current toasts, oldest first.
    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|queue| queue.items().to_vec())
    }

    /// Push a toast and schedule its auto-dismiss.
    pub fn push(&self, level: ToastLevel, message: &str) {
        let id = self.queue.try_update(|queue| queue.push(level, message));
        if let Some(id) = id {
            let hub = *self;
            gloo_timers::callback::Timeout::new(TOAST_DURATION_MS, move || {
                hub.dismiss(id);
            })
            .forget();
        }
    }

    /// Dismiss a toast by id. Unknown ids are a no-op.
    pub fn dismiss(&self, id: Uuid) {
        let _ = self.queue.try_update(|queue| queue.dismiss(id));
    }
}

impl Default for ToastHub {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastHub {
    fn info(&self, message: &str) {
        self.push(ToastLevel::Info, message);
    }

    fn warning(&self, message: &str) {
        self.push(ToastLevel::Warning, message);
    }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut queue = ToastQueue::default();
        queue.push(ToastLevel::Info, "first");
        queue.push(ToastLevel::Warning, "second");
        queue.push(ToastLevel::Warning, "third");

        let messages: Vec<&str> = queue.items().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastLevel::Info, "first");
        let second = queue.push(ToastLevel::Warning, "second");

        queue.dismiss(first);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.items()[0].id, second);
    }

    #[test]
    fn test_dismiss_unknown_id_is_noop() {
        let mut queue = ToastQueue::default();
        queue.push(ToastLevel::Info, "only");

        queue.dismiss(Uuid::new_v4());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_level_classes() {
        assert_eq!(ToastLevel::Info.class(), "toast toast-info");
        assert_eq!(ToastLevel::Warning.class(), "toast toast-warning");
    }
}
