//! Frame-driven counter animation.
//!
//! # Responsibility
//! - Model each animated counter as an explicit state object.
//! - Advance all counters from one scheduler tick with injected time.
//!
//! # Invariants
//! - Counters never share clocks or state.
//! - A finished counter is never ticked again.

pub mod counter;
pub mod format;
