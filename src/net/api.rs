//! REST API helpers for the courseroom server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, sent with
//! credentials so the session cookie reaches the API origin.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs with plain-string diagnostics; the UI maps
//! any failure to a generic retry message and logs the detail.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Course;
use crate::config::PageWindow;
#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;

/// Multipart field carrying the note shown before the lecture.
pub const FIELD_OPENING_NOTE: &str = "openingNote";

/// Multipart field carrying the note shown after the lecture.
pub const FIELD_CLOSING_NOTE: &str = "closingNote";

/// Multipart field carrying the audio file.
pub const FIELD_LECTURE: &str = "lecture";

#[cfg(any(test, feature = "hydrate"))]
fn courses_endpoint(api_host: &str, window: PageWindow) -> String {
    let PageWindow { offset, limit } = window;
    format!("{api_host}/users/courses/{offset}/{limit}")
}

#[cfg(any(test, feature = "hydrate"))]
fn lecture_endpoint(api_host: &str, course_id: i64, chapter_id: i64) -> String {
    format!("{api_host}/admin/create-lecture/{course_id}/{chapter_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn courses_request_failed_message(status: u16) -> String {
    format!("course list request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn lecture_upload_failed_message(status: u16) -> String {
    format!("lecture upload failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct CoursesResponse {
    data: Vec<Course>,
}

/// Fetch one catalog page via `GET {api_host}/users/courses/{offset}/{limit}`.
///
/// Courses come back in server order. Only a 200 response counts as success.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-200 status, or the body does not parse.
pub async fn fetch_courses(api_host: &str, window: PageWindow) -> Result<Vec<Course>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = courses_endpoint(api_host, window);
        let resp = gloo_net::http::Request::get(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() != 200 {
            return Err(courses_request_failed_message(resp.status()));
        }
        let body: CoursesResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api_host, window);
        Err("not available on server".to_owned())
    }
}

/// Upload a new lesson via
/// `POST {api_host}/admin/create-lecture/{course_id}/{chapter_id}`.
///
/// The body is multipart form data with both notes and the audio file under
/// its original filename. Only a 200 response counts as success.
///
/// # Errors
///
/// Returns an error string if the form cannot be assembled, the request
/// fails, or the server responds with a non-200 status.
#[cfg(feature = "hydrate")]
pub async fn create_lecture(
    api_host: &str,
    course_id: i64,
    chapter_id: i64,
    opening_note: &str,
    closing_note: &str,
    lecture: &web_sys::File,
) -> Result<(), String> {
    let form_error = |_| "could not assemble upload form".to_owned();
    let form = web_sys::FormData::new().map_err(form_error)?;
    form.append_with_str(FIELD_OPENING_NOTE, opening_note).map_err(form_error)?;
    form.append_with_str(FIELD_CLOSING_NOTE, closing_note).map_err(form_error)?;
    form.append_with_blob_and_filename(FIELD_LECTURE, lecture, &lecture.name())
        .map_err(form_error)?;

    let url = lecture_endpoint(api_host, course_id, chapter_id);
    let resp = gloo_net::http::Request::post(&url)
        .credentials(web_sys::RequestCredentials::Include)
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if resp.status() != 200 {
        return Err(lecture_upload_failed_message(resp.status()));
    }
    Ok(())
}
