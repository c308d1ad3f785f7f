use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_course(id: i64, title: &str) -> Course {
    Course {
        course_id: id,
        course_name: format!("course-{id}"),
        course_title: title.to_owned(),
        course_description: "A course.".to_owned(),
        created_at: "2025-03-01T09:00:00Z".to_owned(),
        lesson_number: 10,
        chapter_number: 2,
        enrolled_students: 25,
        last_visited: "yesterday".to_owned(),
        progress: 40,
        image_url: "https://example.com/cover.png".to_owned(),
        is_enrolled: true,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn catalog_starts_loading_with_no_courses() {
    let state = CatalogState::default();
    assert_eq!(state.phase, CatalogPhase::Loading);
    assert!(state.courses.is_empty());
    assert_eq!(state.reload_epoch, 0);
}

// =============================================================
// Fetch lifecycle
// =============================================================

#[test]
fn resolve_courses_moves_to_ready_in_server_order() {
    let mut state = CatalogState::default();
    state.begin_fetch();
    state.resolve_courses(vec![make_course(3, "Zig"), make_course(1, "Ada"), make_course(2, "Mu")]);
    assert_eq!(state.phase, CatalogPhase::Ready);
    let ids: Vec<i64> = state.courses.iter().map(|c| c.course_id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn reject_moves_to_failed() {
    let mut state = CatalogState::default();
    state.begin_fetch();
    state.reject();
    assert_eq!(state.phase, CatalogPhase::Failed);
}

#[test]
fn reject_keeps_previously_loaded_courses() {
    let mut state = CatalogState::default();
    state.resolve_courses(vec![make_course(1, "Ada")]);
    state.begin_fetch();
    state.reject();
    assert_eq!(state.phase, CatalogPhase::Failed);
    assert_eq!(state.courses.len(), 1);
}

#[test]
fn retry_after_failure_can_succeed() {
    let mut state = CatalogState::default();
    state.reject();
    state.request_reload();
    state.begin_fetch();
    assert_eq!(state.phase, CatalogPhase::Loading);
    state.resolve_courses(vec![make_course(5, "Nim")]);
    assert_eq!(state.phase, CatalogPhase::Ready);
    assert_eq!(state.courses[0].course_id, 5);
}

#[test]
fn resolve_replaces_earlier_page_entirely() {
    let mut state = CatalogState::default();
    state.resolve_courses(vec![make_course(1, "Ada"), make_course(2, "Mu")]);
    state.resolve_courses(vec![make_course(9, "Oz")]);
    assert_eq!(state.courses.len(), 1);
    assert_eq!(state.courses[0].course_id, 9);
}

// =============================================================
// Reload requests
// =============================================================

#[test]
fn each_reload_request_bumps_the_epoch() {
    let mut state = CatalogState::default();
    state.request_reload();
    state.request_reload();
    assert_eq!(state.reload_epoch, 2);
}

#[test]
fn phase_transitions_leave_the_epoch_alone() {
    let mut state = CatalogState::default();
    state.request_reload();
    state.begin_fetch();
    state.resolve_courses(vec![]);
    state.reject();
    assert_eq!(state.reload_epoch, 1);
}
