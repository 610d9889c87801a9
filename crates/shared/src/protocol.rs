use serde::{Deserialize, Serialize};

use crate::{
    domain::{Course, CourseAverage, MenuItem, MenuItemId},
    error::ErrorCode,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Home,
    Add,
    Filter,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Add, Tab::Filter];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Add => "Add",
            Tab::Filter => "Filter",
        }
    }
}

/// Discrete input accepted from the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum UserAction {
    SelectTab {
        tab: Tab,
    },
    SetName {
        value: String,
    },
    SetCourse {
        #[serde(default)]
        course: Option<Course>,
    },
    SetDescription {
        value: String,
    },
    SetPrice {
        value: String,
    },
    SubmitAddForm,
    DeleteItem {
        id: MenuItemId,
    },
    SetFilterCourse {
        #[serde(default)]
        course: Option<Course>,
    },
    DismissNotice,
}

impl UserAction {
    pub fn name(&self) -> &'static str {
        match self {
            UserAction::SelectTab { .. } => "select_tab",
            UserAction::SetName { .. } => "set_name",
            UserAction::SetCourse { .. } => "set_course",
            UserAction::SetDescription { .. } => "set_description",
            UserAction::SetPrice { .. } => "set_price",
            UserAction::SubmitAddForm => "submit_add_form",
            UserAction::DeleteItem { .. } => "delete_item",
            UserAction::SetFilterCourse { .. } => "set_filter_course",
            UserAction::DismissNotice => "dismiss_notice",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Deleted,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Success".to_string(),
            message: message.into(),
            code: None,
        }
    }

    pub fn deleted(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Deleted,
            title: "Deleted".to_string(),
            message: message.into(),
            code: None,
        }
    }

    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Error".to_string(),
            message: message.into(),
            code: Some(code),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<Course>,
    pub description: String,
    pub price: String,
}

/// Read-model handed to renderers after each action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    pub active_tab: Tab,
    pub total_items: usize,
    pub items: Vec<MenuItem>,
    pub averages: Vec<CourseAverage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_course: Option<Course>,
    pub filtered_items: Vec<MenuItem>,
    pub form: FormSnapshot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}
