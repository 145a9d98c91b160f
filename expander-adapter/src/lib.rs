//! Adapter utilities for the `expander` crate.
//!
//! The `expander` crate is UI-agnostic and focuses on the visibility state machine and grid
//! geometry. This crate provides small, framework-neutral helpers for hosts that have no native
//! transition facility:
//!
//! - [`Stepper`]: the classic fixed-rate, four-step coarse ease-out
//! - [`Tween`]: a continuous eased alternative
//! - [`Driver`]: plays an expander's transitions on a clock and reports completions back
//!
//! This crate is intentionally framework-agnostic (no DOM/TUI bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod driver;
mod stepper;
mod tween;


pub use driver::{Driver, Interpolation, StyleUpdate};
pub use stepper::{STEPS, Stepper, TICK_MS};
pub use tween::{Easing, Tween};
