//! Client-side application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! State structs are plain data with named transitions; the owning component
//! holds each one behind an `RwSignal` and renders off its phase.

pub mod catalog;
pub mod lesson_form;
