//! Toast notification descriptors
//!
//! The renderer owns the DOM and the hide timer; this module only decides
//! what a toast says and how it is styled.

use chrono::Utc;
use serde::Serialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Auto-hide delay for every toast
pub const TOAST_DELAY_MS: u64 = 5000;

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    /// Font Awesome icon class
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "fa-check-circle",
            ToastKind::Error => "fa-exclamation-circle",
            ToastKind::Warning => "fa-exclamation-triangle",
            ToastKind::Info => "fa-info-circle",
        }
    }

    /// Header background class
    pub fn header_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "bg-success",
            ToastKind::Error => "bg-danger",
            ToastKind::Warning => "bg-warning",
            ToastKind::Info => "bg-primary",
        }
    }

    /// Title used by the shorthand constructors
    pub fn default_title(&self) -> &'static str {
        match self {
            ToastKind::Success => "Success",
            ToastKind::Error => "Error",
            ToastKind::Warning => "Warning",
            ToastKind::Info => "Information",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToastKind::Success => write!(f, "success"),
            ToastKind::Error => write!(f, "error"),
            ToastKind::Warning => write!(f, "warning"),
            ToastKind::Info => write!(f, "info"),
        }
    }
}

impl FromStr for ToastKind {
    type Err = Infallible;

    /// `danger` is an alias for error; unknown kinds are info
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "success" => ToastKind::Success,
            "error" | "danger" => ToastKind::Error,
            "warning" => ToastKind::Warning,
            _ => ToastKind::Info,
        })
    }
}

/// A toast ready to be shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastSpec {
    /// Element id, `toast-<millis>`
    pub id: String,
    pub title: String,
    pub message: String,
    pub kind: ToastKind,
    pub icon: String,
    pub header_class: String,
    pub delay_ms: u64,
}

impl ToastSpec {
    pub fn new(title: impl Into<String>, message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            id: format!("toast-{}", Utc::now().timestamp_millis()),
            title: title.into(),
            message: message.into(),
            kind,
            icon: kind.icon().to_string(),
            header_class: kind.header_class().to_string(),
            delay_ms: TOAST_DELAY_MS,
        }
    }

    fn with_default_title(message: impl Into<String>, kind: ToastKind) -> Self {
        Self::new(kind.default_title(), message, kind)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::with_default_title(message, ToastKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_default_title(message, ToastKind::Error)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_default_title(message, ToastKind::Warning)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::with_default_title(message, ToastKind::Info)
    }
}
