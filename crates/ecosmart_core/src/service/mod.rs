//! Page behaviour services.
//!
//! # Responsibility
//! - Decide what each user interaction does, independent of the DOM.
//! - Keep host bindings down to reading inputs and applying outcomes.

pub mod forms;
pub mod scroll;
pub mod theme_service;
