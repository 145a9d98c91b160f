use alloc::format;
use alloc::string::String;
use core::time::Duration;

use crate::{Action, Anchor, ExpanderError};

/// Selector and label for one control.
///
/// If `selector` differs from the default for its action, the control binds to an existing
/// host element; otherwise a control is created with `label` as its text.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlOptions {
    pub selector: String,
    pub label: String,
}

impl ControlOptions {
    pub fn new(selector: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            label: label.into(),
        }
    }

    /// The default selector/label pair for `action`.
    pub fn default_for(action: Action) -> Self {
        let label = match action {
            Action::Increase => "Increase Items",
            Action::Decrease => "Decrease Items",
            Action::Toggle => "Toggle Items",
            Action::Reset => "Collapse",
        };
        Self::new(format!(".cs-expander-{}-btn", action.key()), label)
    }
}

/// Configuration for [`crate::Expander`].
///
/// With `feature = "serde"`, missing fields deserialize to their defaults, so a partial user
/// record merges over the defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ExpanderOptions {
    /// Number of items initially shown. These are never hidden by decrease operations.
    pub show: usize,
    /// Number of items revealed per increase.
    pub increase: usize,
    /// Number of items retracted per decrease. `0` means "same as `increase`".
    pub decrease: usize,
    /// Show a single toggle control.
    pub toggle: bool,
    /// Show a control that collapses back to the initial state.
    pub resetable: bool,
    /// With `toggle`, drop the separate increase/decrease controls.
    pub unary: bool,
    /// Transition duration in seconds. Values up to `1.0` are recommended.
    pub animation_duration: f32,
    /// Style edges transition positions are written to.
    pub anchor: Anchor,

    pub increase_control: ControlOptions,
    pub decrease_control: ControlOptions,
    pub toggle_control: ControlOptions,
    pub reset_control: ControlOptions,
}

impl Default for ExpanderOptions {
    fn default() -> Self {
        Self {
            show: 4,
            increase: 3,
            decrease: 0,
            toggle: false,
            resetable: false,
            unary: false,
            animation_duration: 1.0,
            anchor: Anchor::default(),
            increase_control: ControlOptions::default_for(Action::Increase),
            decrease_control: ControlOptions::default_for(Action::Decrease),
            toggle_control: ControlOptions::default_for(Action::Toggle),
            reset_control: ControlOptions::default_for(Action::Reset),
        }
    }
}

impl ExpanderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_show(mut self, show: usize) -> Self {
        self.show = show;
        self
    }

    pub fn with_increase(mut self, increase: usize) -> Self {
        self.increase = increase;
        self
    }

    pub fn with_decrease(mut self, decrease: usize) -> Self {
        self.decrease = decrease;
        self
    }

    pub fn with_toggle(mut self, toggle: bool) -> Self {
        self.toggle = toggle;
        self
    }

    pub fn with_resetable(mut self, resetable: bool) -> Self {
        self.resetable = resetable;
        self
    }

    pub fn with_unary(mut self, unary: bool) -> Self {
        self.unary = unary;
        self
    }

    pub fn with_animation_duration(mut self, seconds: f32) -> Self {
        self.animation_duration = seconds;
        self
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_control(mut self, action: Action, control: ControlOptions) -> Self {
        *self.control_mut(action) = control;
        self
    }

    pub fn control(&self, action: Action) -> &ControlOptions {
        match action {
            Action::Increase => &self.increase_control,
            Action::Decrease => &self.decrease_control,
            Action::Toggle => &self.toggle_control,
            Action::Reset => &self.reset_control,
        }
    }

    fn control_mut(&mut self, action: Action) -> &mut ControlOptions {
        match action {
            Action::Increase => &mut self.increase_control,
            Action::Decrease => &mut self.decrease_control,
            Action::Toggle => &mut self.toggle_control,
            Action::Reset => &mut self.reset_control,
        }
    }

    /// The effective decrease step.
    pub fn decrease_step(&self) -> usize {
        if self.decrease == 0 {
            self.increase
        } else {
            self.decrease
        }
    }

    /// `animation_duration` as a [`Duration`].
    ///
    /// Fails for negative, non-finite or out-of-range values.
    pub fn duration(&self) -> Result<Duration, ExpanderError> {
        Duration::try_from_secs_f32(self.animation_duration)
            .map_err(|_| ExpanderError::InvalidDuration(self.animation_duration))
    }

    pub(crate) fn validate(&self) -> Result<(), ExpanderError> {
        self.duration()?;
        if self.increase == 0 {
            return Err(ExpanderError::InvalidStep);
        }
        Ok(())
    }

    /// Validates and resolves defaulted fields. `decrease` is resolved once, here.
    pub(crate) fn resolve(mut self) -> Result<Self, ExpanderError> {
        self.validate()?;
        self.decrease = self.decrease_step();
        Ok(self)
    }
}
