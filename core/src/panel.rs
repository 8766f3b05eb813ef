//! Input panel: a local draft that is edited field by field and handed to
//! the shell on submit.

use crate::action::Action;
use crate::types::{Course, CourseDraft, DraftField};

#[derive(Debug, Clone, Default)]
pub struct InputPanel {
    draft: CourseDraft,
    action: Action,
}

impl InputPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &CourseDraft {
        &self.draft
    }

    /// Label for the submit button.
    pub fn action(&self) -> Action {
        self.action
    }

    pub fn set_action(&mut self, action: Action) {
        self.action = action;
    }

    /// Overwrite the whole draft from a selected course. `None` leaves the
    /// draft as it is.
    pub fn sync(&mut self, course: Option<&Course>) {
        if let Some(course) = course {
            self.draft = CourseDraft::from(course);
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    pub fn clear(&mut self) {
        self.draft = CourseDraft::default();
    }

    /// The draft goes out exactly as typed; nothing is checked here.
    pub fn submit(&self) -> CourseDraft {
        self.draft.clone()
    }
}
