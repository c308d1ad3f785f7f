use super::*;

// =============================================================
// Helpers
// =============================================================

fn filled_form() -> LessonFormState {
    let mut form = LessonFormState {
        opening_note: "Welcome back.".to_owned(),
        closing_note: "See you next time.".to_owned(),
        ..LessonFormState::default()
    };
    form.attach_lecture("intro.mp3".to_owned(), "blob:preview-1".to_owned());
    form
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn form_starts_idle_and_empty() {
    let form = LessonFormState::default();
    assert_eq!(form.phase, FormPhase::Idle);
    assert!(form.opening_note.is_empty());
    assert!(form.closing_note.is_empty());
    assert!(form.lecture.is_none());
    assert!(form.error.is_none());
    assert!(!form.is_submitting());
}

// =============================================================
// Note routing
// =============================================================

#[test]
fn note_input_routes_by_field_name() {
    let mut form = LessonFormState::default();
    form.note_input(FIELD_OPENING_NOTE, "Welcome back.".to_owned());
    form.note_input(FIELD_CLOSING_NOTE, "See you next time.".to_owned());
    assert_eq!(form.opening_note, "Welcome back.");
    assert_eq!(form.closing_note, "See you next time.");
}

#[test]
fn note_input_ignores_unknown_field_names() {
    let mut form = LessonFormState::default();
    form.note_input("lectureTitle", "ignored".to_owned());
    assert!(form.opening_note.is_empty());
    assert!(form.closing_note.is_empty());
}

// =============================================================
// File selection
// =============================================================

#[test]
fn attach_lecture_stores_name_and_preview() {
    let mut form = LessonFormState::default();
    form.attach_lecture("intro.mp3".to_owned(), "blob:preview-1".to_owned());
    let attachment = form.lecture.unwrap();
    assert_eq!(attachment.file_name, "intro.mp3");
    assert_eq!(attachment.preview_url, "blob:preview-1");
}

#[test]
fn attach_lecture_clears_a_stale_error() {
    let mut form = LessonFormState::default();
    form.flag_missing_selection();
    form.attach_lecture("intro.mp3".to_owned(), "blob:preview-1".to_owned());
    assert!(form.error.is_none());
}

#[test]
fn missing_selection_sets_error_but_keeps_prior_file() {
    let mut form = filled_form();
    form.flag_missing_selection();
    assert_eq!(form.error.as_deref(), Some(ERR_SELECT_LECTURE));
    assert!(form.lecture.is_some());
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_requires_a_lecture_before_anything_else() {
    let form = LessonFormState {
        opening_note: "hello".to_owned(),
        closing_note: "bye".to_owned(),
        ..LessonFormState::default()
    };
    assert_eq!(form.validate(), Err(ERR_LECTURE_REQUIRED));
}

#[test]
fn missing_lecture_outranks_missing_notes() {
    let form = LessonFormState::default();
    assert_eq!(form.validate(), Err(ERR_LECTURE_REQUIRED));
}

#[test]
fn validate_requires_both_notes() {
    let mut form = filled_form();
    form.closing_note.clear();
    assert_eq!(form.validate(), Err(ERR_ALL_FIELDS_REQUIRED));

    let mut form = filled_form();
    form.opening_note.clear();
    assert_eq!(form.validate(), Err(ERR_ALL_FIELDS_REQUIRED));
}

#[test]
fn validate_accepts_a_complete_form() {
    assert_eq!(filled_form().validate(), Ok(()));
}

// =============================================================
// Submission machine
// =============================================================

#[test]
fn begin_submit_enters_submitting_on_a_complete_form() {
    let mut form = filled_form();
    assert!(form.begin_submit());
    assert_eq!(form.phase, FormPhase::Submitting);
    assert!(form.is_submitting());
    assert!(form.error.is_none());
}

#[test]
fn begin_submit_records_validation_error_and_stays_idle() {
    let mut form = LessonFormState::default();
    assert!(!form.begin_submit());
    assert_eq!(form.phase, FormPhase::Idle);
    assert_eq!(form.error.as_deref(), Some(ERR_LECTURE_REQUIRED));
}

#[test]
fn begin_submit_refuses_reentry_while_submitting() {
    let mut form = filled_form();
    assert!(form.begin_submit());
    assert!(!form.begin_submit());
    assert_eq!(form.phase, FormPhase::Submitting);
}

#[test]
fn succeed_clears_error_and_unlocks() {
    let mut form = filled_form();
    form.begin_submit();
    form.succeed();
    assert_eq!(form.phase, FormPhase::Succeeded);
    assert!(form.error.is_none());
    assert!(!form.is_submitting());
}

#[test]
fn fail_sets_generic_retry_message() {
    let mut form = filled_form();
    form.begin_submit();
    form.fail();
    assert_eq!(form.phase, FormPhase::Failed);
    assert_eq!(form.error.as_deref(), Some(ERR_UPLOAD_FAILED));
}

#[test]
fn a_failed_form_can_be_resubmitted() {
    let mut form = filled_form();
    form.begin_submit();
    form.fail();
    assert!(form.begin_submit());
    assert_eq!(form.phase, FormPhase::Submitting);
    assert!(form.error.is_none());
}
