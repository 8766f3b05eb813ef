//! Application shell: owns the course list, the action selector and the
//! status banner, and routes submissions to the API.
//!
//! # Design
//! The list is a cache of the server's state. It is never patched locally;
//! every submission flips a refresh toggle and the list is reloaded wholesale
//! whenever the toggle differs from the value it had at the last load. That
//! includes failed mutations and `Read`, which reloads without calling the
//! API for anything else.

use crate::action::Action;
use crate::api::CourseApi;
use crate::http::Transport;
use crate::types::{Course, CourseDraft};

pub struct Shell<T> {
    api: CourseApi<T>,
    courses: Vec<Course>,
    selected_action: Action,
    selected_course: Option<Course>,
    status_message: Option<String>,
    refresh: bool,
    loaded_at: Option<bool>,
}

impl<T: Transport> Shell<T> {
    /// Builds an unloaded shell; call `mount` to fetch the first list.
    pub fn new(api: CourseApi<T>) -> Self {
        Self {
            api,
            courses: Vec::new(),
            selected_action: Action::default(),
            selected_course: None,
            status_message: None,
            refresh: false,
            loaded_at: None,
        }
    }

    pub fn api(&self) -> &CourseApi<T> {
        &self.api
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn selected_action(&self) -> Action {
        self.selected_action
    }

    pub fn selected_course(&self) -> Option<&Course> {
        self.selected_course.as_ref()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn mount(&mut self) {
        self.sync();
    }

    pub fn select_action(&mut self, action: Action) {
        self.selected_action = action;
    }

    /// Select a listed course for editing. Returns the selection; an id that
    /// is not in the current list clears it and says so in the banner.
    pub fn select_course(&mut self, id: i64) -> Option<&Course> {
        self.selected_course = self.courses.iter().find(|c| c.id == id).cloned();
        if self.selected_course.is_none() {
            self.status_message = Some(format!("No course with id {id}"));
        }
        self.selected_course.as_ref()
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Run the selected action against `draft`, update the status banner and
    /// reload the list.
    pub fn submit(&mut self, draft: CourseDraft) {
        let action = self.selected_action;
        // the body serializes a trimmed id, so the path must match it
        let id = draft.id.trim();
        let outcome = match action {
            Action::Create => self.api.create(&draft).map(|reply| reply.message),
            Action::Update => self.api.update(id, &draft).map(|reply| reply.message),
            Action::Delete => self.api.delete(id).map(|reply| reply.message),
            Action::Read => Ok(None),
        };

        self.status_message = match outcome {
            Ok(message) => message.or_else(|| action.default_message().map(str::to_string)),
            Err(e) => {
                tracing::warn!(%action, error = %e, "operation failed");
                Some(format!("Operation failed: {e}"))
            }
        };

        self.refresh = !self.refresh;
        self.sync();
    }

    fn sync(&mut self) {
        if self.loaded_at == Some(self.refresh) {
            return;
        }
        self.courses = self.api.list();
        self.loaded_at = Some(self.refresh);
        if let Some(selected) = &self.selected_course {
            let id = selected.id;
            self.selected_course = self.courses.iter().find(|c| c.id == id).cloned();
        }
        tracing::debug!(count = self.courses.len(), "course list reloaded");
    }
}
