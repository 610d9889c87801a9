//! Notice and error modeling for the desktop shell.

use shared::{
    error::ErrorCode,
    protocol::{Notice, NoticeKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    AddItem,
    DeleteItem,
    General,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_notice(context: UiErrorContext, notice: &Notice) -> Self {
        let category = match notice.code {
            Some(ErrorCode::MissingField | ErrorCode::InvalidPrice) => UiErrorCategory::Validation,
            None => UiErrorCategory::Unknown,
        };
        Self {
            category,
            context,
            message: notice.message.clone(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBannerSeverity {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub severity: StatusBannerSeverity,
    pub title: String,
    pub message: String,
}

impl StatusBanner {
    pub fn from_notice(context: UiErrorContext, notice: &Notice) -> Self {
        match notice.kind {
            NoticeKind::Success => Self {
                severity: StatusBannerSeverity::Success,
                title: notice.title.clone(),
                message: notice.message.clone(),
            },
            NoticeKind::Deleted => Self {
                severity: StatusBannerSeverity::Info,
                title: notice.title.clone(),
                message: notice.message.clone(),
            },
            NoticeKind::Error => {
                let err = UiError::from_notice(context, notice);
                tracing::debug!(
                    context = ?err.context(),
                    category = ?err.category(),
                    "surfacing error notice"
                );
                Self {
                    severity: StatusBannerSeverity::Error,
                    title: format!("{} error", err_label(err.category())),
                    message: err.message().to_string(),
                }
            }
        }
    }
}
