//! A headless expand/collapse engine for lists of sibling items.
//!
//! For adapter-level utilities (stepped and eased animation drivers), see the
//! `expander-adapter` crate.
//!
//! This crate owns the two pieces with real logic:
//! - a visibility controller ([`Expander`]) that moves a cursor over the collection and decides
//!   which items reveal or retract on each gesture,
//! - an [`Animator`] that places items in a uniform wrapping grid and plans each move.
//!
//! It is UI-agnostic. A host toolkit is expected to provide:
//! - layout queries (container width, reference item size, item offsets) via [`Layout`]
//! - a way to play [`Transition`] requests and report them back with [`Expander::complete`]
//! - the controls planned by [`plan_controls`], wired to [`Expander::toggle_item`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod animator;
mod controls;
mod error;
mod expander;
mod grid;
mod key;
mod layout;
mod options;
mod registry;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use animator::Animator;
pub use controls::{Binding, Control, control_actions, plan_controls};
pub use error::ExpanderError;
pub use expander::Expander;
pub use grid::{Cell, Grid};
pub use layout::{FlowLayout, Layout};
pub use options::{ControlOptions, ExpanderOptions};
pub use registry::{ID_PREFIX, Registry, WidgetId};
pub use state::ExpanderState;
pub use types::{
    Action, Align, Anchor, HorizontalEdge, ItemState, Motion, Point, Size, Ticket, Transition,
    TransitionIntent, VerticalEdge,
};

#[doc(hidden)]
pub use key::ContainerKey;

/// Class the host applies to items that are not active.
pub const HIDDEN_CLASS: &str = "hidden";

/// Marker class applied to a container's wrapper once initialized.
pub const INIT_CLASS: &str = "cs-expander-init";
