//! Toast Notifications
//!
//! Fixed-position, self-removing notifications. Each toast is independent:
//! no queue, no deduplication, no stacking offset.

use std::sync::Arc;
use std::time::Duration;

use super::dom::{ElementId, SharedDocument, lock_document};
use crate::constants::{TOAST_DISPLAY_MS, TOAST_FADE_MS};
use crate::domain::config::UiConfig;
use crate::services::scheduler::Scheduler;

/// Severity of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// Parse a kind name; anything unrecognized is informational
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => ToastKind::Success,
            "error" => ToastKind::Error,
            _ => ToastKind::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            ToastKind::Info => "#2563eb",   // Blue
            ToastKind::Success => "#10b981", // Green
            ToastKind::Error => "#ef4444",  // Red
        }
    }

    /// Class list applied to the toast element
    pub fn class_name(&self) -> String {
        format!("toast toast-{}", self.as_str())
    }
}

/// Display window and fade-out length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTimings {
    pub display: Duration,
    pub fade: Duration,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            display: Duration::from_millis(TOAST_DISPLAY_MS),
            fade: Duration::from_millis(TOAST_FADE_MS),
        }
    }
}

impl From<&UiConfig> for ToastTimings {
    fn from(config: &UiConfig) -> Self {
        Self {
            display: Duration::from_millis(config.toast_display_ms),
            fade: Duration::from_millis(config.toast_fade_ms),
        }
    }
}

fn toast_style(kind: ToastKind) -> [(&'static str, &'static str); 10] {
    [
        ("position", "fixed"),
        ("top", "20px"),
        ("right", "20px"),
        ("padding", "1rem 1.5rem"),
        ("background", kind.background()),
        ("color", "white"),
        ("border-radius", "0.5rem"),
        ("box-shadow", "0 10px 15px -3px rgba(0, 0, 0, 0.1)"),
        ("z-index", "1000"),
        ("animation", "slideIn 0.3s ease-out"),
    ]
}

/// Show a toast with the default 3000 ms display window and 300 ms fade
pub fn show_toast(
    document: &SharedDocument,
    scheduler: &Arc<dyn Scheduler>,
    message: &str,
    kind: ToastKind,
) -> ElementId {
    show_toast_with(document, scheduler, message, kind, ToastTimings::default())
}

/// Append a toast to `<body>`, fade it after `timings.display` and remove it
/// `timings.fade` later
pub fn show_toast_with(
    document: &SharedDocument,
    scheduler: &Arc<dyn Scheduler>,
    message: &str,
    kind: ToastKind,
    timings: ToastTimings,
) -> ElementId {
    let id = {
        let mut doc = lock_document(document);
        let tree = doc.tree_mut();
        let body = tree.body();
        let id = tree.append_new(body, "div", &kind.class_name());
        tree.set_text(id, message);
        for (property, value) in toast_style(kind) {
            tree.set_style(id, property, value);
        }
        id
    };
    tracing::debug!(kind = kind.as_str(), message, "Toast shown");

    let fade_animation = format!("fadeOut {}s ease-out", timings.fade.as_secs_f64());
    let doc = Arc::clone(document);
    let removal_scheduler = Arc::clone(scheduler);
    scheduler.schedule(
        timings.display,
        Box::new(move || {
            lock_document(&doc)
                .tree_mut()
                .set_style(id, "animation", &fade_animation);

            removal_scheduler.schedule(
                timings.fade,
                Box::new(move || {
                    lock_document(&doc).tree_mut().remove(id);
                }),
            );
        }),
    );

    id
}

/// Bundles the document, scheduler and timings toasts are shown with
#[derive(Clone)]
pub struct ToastNotifier {
    document: SharedDocument,
    scheduler: Arc<dyn Scheduler>,
    timings: ToastTimings,
}

impl ToastNotifier {
    pub fn new(document: SharedDocument, scheduler: Arc<dyn Scheduler>) -> Self {
        Self {
            document,
            scheduler,
            timings: ToastTimings::default(),
        }
    }

    /// Notifier using the toast timings from `ui`
    pub fn from_config(document: SharedDocument, scheduler: Arc<dyn Scheduler>, ui: &UiConfig) -> Self {
        Self::new(document, scheduler).with_timings(ToastTimings::from(ui))
    }

    pub fn with_timings(mut self, timings: ToastTimings) -> Self {
        self.timings = timings;
        self
    }

    pub fn show(&self, message: &str, kind: ToastKind) -> ElementId {
        show_toast_with(&self.document, &self.scheduler, message, kind, self.timings)
    }

    pub fn info(&self, message: &str) -> ElementId {
        self.show(message, ToastKind::Info)
    }

    pub fn success(&self, message: &str) -> ElementId {
        self.show(message, ToastKind::Success)
    }

    pub fn error(&self, message: &str) -> ElementId {
        self.show(message, ToastKind::Error)
    }
}
