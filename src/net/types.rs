//! Shared wire DTOs for the courseroom API boundary.
//!
//! DESIGN
//! ======
//! Field names follow the server's camelCase JSON verbatim (via serde rename)
//! so fetch code stays schema-driven and never remaps keys by hand.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A course summary as returned by the catalog endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Unique course identifier.
    pub course_id: i64,
    /// Short machine-friendly name (e.g. `"rust-101"`).
    pub course_name: String,
    /// Human-readable title shown on cards.
    pub course_title: String,
    /// One-paragraph description shown on cards.
    pub course_description: String,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// Total number of lessons across all chapters.
    pub lesson_number: u32,
    /// Total number of chapters.
    pub chapter_number: u32,
    /// Number of currently enrolled students.
    pub enrolled_students: u32,
    /// Human-readable description of the viewer's last visit, if enrolled.
    pub last_visited: String,
    /// Completion percentage for the viewing student (0 to 100).
    pub progress: u8,
    /// Cover image URL.
    pub image_url: String,
    /// Whether the viewing student is enrolled in this course.
    pub is_enrolled: bool,
}

/// A chapter within a course outline, with its lessons.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// 1-based position within the course.
    pub num: u32,
    /// Chapter heading.
    pub name: String,
    /// Aggregate completion over the chapter's lessons.
    pub completed: CompletionStatus,
    /// Lessons in course order.
    pub lessons: Vec<Lesson>,
}

/// A single lesson row within a chapter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    /// Lesson heading.
    pub title: String,
    /// The viewing student's completion state for this lesson.
    pub completed: CompletionStatus,
}

/// Per-student completion state for a chapter or lesson.
///
/// The server derives this; the client only renders it and gates navigation
/// on it. Serialized lowercase (`"finished"`, `"ongoing"`, `"pending"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionStatus {
    /// All content consumed.
    Finished,
    /// Started but not finished; the next lesson to work on.
    Ongoing,
    /// Not yet reachable in the course sequence.
    Pending,
}

impl CompletionStatus {
    /// Whether a lesson in this state may be opened.
    ///
    /// Pending lessons are locked until the preceding content is done.
    pub fn is_navigable(self) -> bool {
        !matches!(self, Self::Pending)
    }
}
