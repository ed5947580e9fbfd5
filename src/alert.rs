//! Transient user-facing status messages
//!
//! Every controller owns an [`AlertQueue`]; operations append to it on
//! success or failure and a renderer drains it via index-based dismissal.

use serde::Serialize;

/// Severity of an alert, mapped to presentation styling by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Danger,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Danger => "danger",
        }
    }
}

/// A single status message. Alerts have no identity beyond their position
/// in the queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

/// Ordered list of alerts awaiting display.
#[derive(Debug, Default)]
pub struct AlertQueue {
    alerts: Vec<Alert>,
}

impl AlertQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an alert to the end of the queue.
    pub fn push(&mut self, kind: AlertKind, message: impl Into<String>) {
        self.alerts.push(Alert {
            kind,
            message: message.into(),
        });
    }

    /// Dismiss the alert at `index`, shifting later alerts left by one.
    /// Indices are only meaningful against the queue as it was at the
    /// moment of dismissal; an out-of-range index is ignored.
    pub fn close(&mut self, index: usize) {
        if index < self.alerts.len() {
            self.alerts.remove(index);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }

    pub fn as_slice(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}
