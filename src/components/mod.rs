//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render catalog, outline, and admin surfaces while reading
//! shared configuration from Leptos context providers.

pub mod chapter_list;
pub mod course_card;
pub mod course_catalog;
pub mod lesson_form;
pub mod spinner;
