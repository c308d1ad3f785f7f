//! Lesson creation form state for the admin chapter page.
//!
//! DESIGN
//! ======
//! Submission is an explicit machine (idle, submitting, succeeded, failed).
//! `begin_submit` is the only entry into the submitting phase and refuses
//! re-entry, so double clicks cannot start a second upload while one is in
//! flight.

#[cfg(test)]
#[path = "lesson_form_test.rs"]
mod lesson_form_test;

use crate::net::api::{FIELD_CLOSING_NOTE, FIELD_OPENING_NOTE};

/// Shown when the file picker closes without a selection.
pub const ERR_SELECT_LECTURE: &str = "select a lecture";

/// Shown when submit is pressed with no audio file attached.
pub const ERR_LECTURE_REQUIRED: &str = "please select a lecture";

/// Shown when submit is pressed with an empty note field.
pub const ERR_ALL_FIELDS_REQUIRED: &str = "please enter all fields";

/// Shown when the upload request fails for any reason.
pub const ERR_UPLOAD_FAILED: &str = "Something went wrong. Try again.";

/// Where the lesson submission currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    /// Editing; nothing sent yet, or an earlier attempt was corrected.
    #[default]
    Idle,
    /// Upload in flight; inputs and submit are locked.
    Submitting,
    /// Upload accepted; the success banner is visible.
    Succeeded,
    /// Upload rejected or unreachable; the error line is visible.
    Failed,
}

/// The audio file chosen for the lesson, as the form tracks it.
///
/// The live `web_sys::File` handle stays in the component layer; state only
/// carries what rendering and validation need.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LectureAttachment {
    pub file_name: String,
    /// Object URL for the inline audio preview.
    pub preview_url: String,
}

/// Form fields plus submission phase for one lesson creation dialog.
#[derive(Clone, Debug, Default)]
pub struct LessonFormState {
    pub opening_note: String,
    pub closing_note: String,
    pub lecture: Option<LectureAttachment>,
    pub phase: FormPhase,
    pub error: Option<String>,
}

impl LessonFormState {
    /// Routes a note edit by its input's form field name.
    ///
    /// Unrecognized field names are ignored.
    pub fn note_input(&mut self, field: &str, value: String) {
        match field {
            FIELD_OPENING_NOTE => self.opening_note = value,
            FIELD_CLOSING_NOTE => self.closing_note = value,
            _ => {}
        }
    }

    /// Records a picked audio file and clears any stale error.
    pub fn attach_lecture(&mut self, file_name: String, preview_url: String) {
        self.lecture = Some(LectureAttachment { file_name, preview_url });
        self.error = None;
    }

    /// Records that the picker closed without a file. Any earlier selection
    /// is kept; only the error line changes.
    pub fn flag_missing_selection(&mut self) {
        self.error = Some(ERR_SELECT_LECTURE.to_owned());
    }

    /// Checks required fields, lecture first.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.lecture.is_none() {
            return Err(ERR_LECTURE_REQUIRED);
        }
        if self.opening_note.is_empty() || self.closing_note.is_empty() {
            return Err(ERR_ALL_FIELDS_REQUIRED);
        }
        Ok(())
    }

    /// Attempts to enter the submitting phase.
    ///
    /// Returns `false` without side effects while an upload is already in
    /// flight, and `false` with the error line set when validation fails.
    /// Returns `true` once the caller owns the (single) in-flight upload.
    pub fn begin_submit(&mut self) -> bool {
        if self.phase == FormPhase::Submitting {
            return false;
        }
        match self.validate() {
            Err(message) => {
                self.error = Some(message.to_owned());
                false
            }
            Ok(()) => {
                self.error = None;
                self.phase = FormPhase::Submitting;
                true
            }
        }
    }

    /// Marks the in-flight upload as accepted.
    pub fn succeed(&mut self) {
        self.phase = FormPhase::Succeeded;
        self.error = None;
    }

    /// Marks the in-flight upload as failed with the generic retry message.
    pub fn fail(&mut self) {
        self.phase = FormPhase::Failed;
        self.error = Some(ERR_UPLOAD_FAILED.to_owned());
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }
}
