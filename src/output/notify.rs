//! Toast notifications
//!
//! Short, non-blocking messages about the outcome of an action. They go to
//! stderr so stdout stays clean for `--format json`.

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    pub fn render(&self) -> String {
        match self.kind {
            ToastKind::Success => format!("{} {}", "✓".green(), self.message),
            ToastKind::Info => format!("{} {}", "→".cyan(), self.message),
            ToastKind::Error => format!("{} {}", "Error:".red().bold(), self.message),
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Writes toasts to stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, toast: Toast) {
        eprintln!("{}", toast.render());
    }
}

/// Keeps toasts for inspection in tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    toasts: parking_lot::Mutex<Vec<Toast>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().clone()
    }

    pub fn count(&self, kind: ToastKind) -> usize {
        self.toasts.lock().iter().filter(|t| t.kind == kind).count()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().push(toast);
    }
}
