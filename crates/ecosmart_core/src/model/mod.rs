//! Value types shared by page behaviours.
//!
//! # Responsibility
//! - Define the theme preference and counter target shapes.
//! - Own the parsing rules for raw attribute and storage strings.
//!
//! # Invariants
//! - Parsing never fails; malformed input maps onto a documented default.

pub mod counter_target;
pub mod theme;
