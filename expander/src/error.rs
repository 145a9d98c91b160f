use alloc::string::String;

use crate::{Action, WidgetId};

/// Errors reported while constructing or registering an expander.
///
/// Runtime operations never fail: degenerate geometry only degrades the animation.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ExpanderError {
    /// A custom control selector did not resolve to a host element.
    #[error("the {action} control selector `{selector}` matched no element")]
    ControlNotFound { action: Action, selector: String },
    /// `animation_duration` was negative, NaN, infinite or too large for a `Duration`.
    #[error("animation duration must be a finite, non-negative duration, got {0}s")]
    InvalidDuration(f32),
    /// `increase` was zero, so no interaction could ever reveal anything.
    #[error("increase step must be at least 1")]
    InvalidStep,
    /// The container already has a live expander.
    #[error("container is already initialized as `{0}`")]
    AlreadyInitialized(WidgetId),
}
