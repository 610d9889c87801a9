//! Tab, form and filter state layered over a [`MenuStore`].

use shared::{
    domain::{Course, CourseAverage, MenuItem, MenuItemId},
    error::ValidationError,
    protocol::{FormSnapshot, Notice, Tab, UserAction, ViewSnapshot},
};
use tracing::{debug, info, warn};

use crate::store::MenuStore;

pub const ADDED_MESSAGE: &str = "Item added successfully!";
pub const REMOVED_MESSAGE: &str = "Item removed from menu";
pub const ALREADY_REMOVED_MESSAGE: &str = "Item was already removed";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddForm {
    pub name: String,
    pub course: Option<Course>,
    pub description: String,
    pub price: String,
}

impl AddForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            name: self.name.clone(),
            course: self.course,
            description: self.description.clone(),
            price: self.price.clone(),
        }
    }
}

/// Owns the store for one session and translates user actions into store
/// mutations. Derived views are recomputed on every read.
#[derive(Debug, Default)]
pub struct ViewController {
    store: MenuStore,
    active_tab: Tab,
    form: AddForm,
    filter_course: Option<Course>,
    notice: Option<Notice>,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: MenuStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    pub fn store(&self) -> &MenuStore {
        &self.store
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn form(&self) -> &AddForm {
        &self.form
    }

    pub fn filter_course(&self) -> Option<Course> {
        self.filter_course
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn select_tab(&mut self, tab: Tab) {
        debug!(from = ?self.active_tab, to = ?tab, "select tab");
        self.active_tab = tab;
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.form.name = value.into();
    }

    pub fn set_course(&mut self, course: Option<Course>) {
        self.form.course = course;
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.form.description = value.into();
    }

    pub fn set_price(&mut self, value: impl Into<String>) {
        self.form.price = value.into();
    }

    pub fn submit_add_form(&mut self) -> Result<MenuItem, ValidationError> {
        let result = self.store.add(
            &self.form.name,
            self.form.course,
            &self.form.description,
            &self.form.price,
        );
        match &result {
            Ok(item) => {
                info!(id = %item.id, name = %item.name, course = %item.course, price = item.price, "menu item added");
                self.form.clear();
                self.notice = Some(Notice::success(ADDED_MESSAGE));
            }
            Err(err) => {
                warn!(error = %err, "add form rejected");
                self.notice = Some(Notice::error(err.code(), err.to_string()));
            }
        }
        result
    }

    pub fn delete_item(&mut self, id: MenuItemId) -> bool {
        let removed = self.store.remove(id);
        if removed {
            info!(%id, "menu item removed");
            self.notice = Some(Notice::deleted(REMOVED_MESSAGE));
        } else {
            debug!(%id, "delete ignored for unknown item");
            self.notice = Some(Notice::deleted(ALREADY_REMOVED_MESSAGE));
        }
        removed
    }

    pub fn set_filter_course(&mut self, course: Option<Course>) {
        debug!(course = ?course, "set filter course");
        self.filter_course = course;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn apply(&mut self, action: UserAction) {
        debug!(action = action.name(), "apply user action");
        match action {
            UserAction::SelectTab { tab } => self.select_tab(tab),
            UserAction::SetName { value } => self.set_name(value),
            UserAction::SetCourse { course } => self.set_course(course),
            UserAction::SetDescription { value } => self.set_description(value),
            UserAction::SetPrice { value } => self.set_price(value),
            UserAction::SubmitAddForm => {
                // Outcome is surfaced through the notice.
                let _ = self.submit_add_form();
            }
            UserAction::DeleteItem { id } => {
                self.delete_item(id);
            }
            UserAction::SetFilterCourse { course } => self.set_filter_course(course),
            UserAction::DismissNotice => self.dismiss_notice(),
        }
    }

    pub fn filtered_items(&self) -> Vec<MenuItem> {
        self.store.filter(self.filter_course)
    }

    pub fn averages_by_course(&self) -> Vec<CourseAverage> {
        self.store.averages_by_course()
    }

    pub fn total_items(&self) -> usize {
        self.store.len()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            active_tab: self.active_tab,
            total_items: self.total_items(),
            items: self.store.items().to_vec(),
            averages: self.averages_by_course(),
            filter_course: self.filter_course,
            filtered_items: self.filtered_items(),
            form: self.form.snapshot(),
            notice: self.notice.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
