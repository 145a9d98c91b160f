use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::{Action, ControlOptions, ExpanderError, ExpanderOptions};

/// How a control reaches the host.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Binding {
    /// Bind to an element the page author already placed.
    Existing { selector: String },
    /// Create a new control inside the container's wrapper.
    Create { class: String, label: String },
}

/// One control the host must wire to [`crate::Expander::toggle_item`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Control {
    pub action: Action,
    pub binding: Binding,
}

/// Returns the controls enabled by `options`, in `toggle, increase, decrease, reset` order.
pub fn control_actions(options: &ExpanderOptions) -> Vec<Action> {
    let mut actions = Vec::with_capacity(4);
    if options.toggle {
        actions.push(Action::Toggle);
    }
    if !(options.unary && options.toggle) {
        actions.push(Action::Increase);
        actions.push(Action::Decrease);
    }
    if options.resetable {
        actions.push(Action::Reset);
    }
    actions
}

/// Plans the controls for `options`.
///
/// `exists(selector)` must report whether the host can find an element for a custom selector.
/// A custom selector that resolves to nothing is a configuration error.
pub fn plan_controls(
    options: &ExpanderOptions,
    mut exists: impl FnMut(&str) -> bool,
) -> Result<Vec<Control>, ExpanderError> {
    control_actions(options)
        .into_iter()
        .map(|action| {
            let configured = options.control(action);
            let default = ControlOptions::default_for(action);
            let binding = if configured.selector != default.selector {
                if !exists(&configured.selector) {
                    ewarn!(%action, selector = %configured.selector, "control selector matched no element");
                    return Err(ExpanderError::ControlNotFound {
                        action,
                        selector: configured.selector.clone(),
                    });
                }
                Binding::Existing {
                    selector: configured.selector.clone(),
                }
            } else {
                Binding::Create {
                    class: format!("cs-expander-{}-btn", action.key()),
                    label: configured.label.clone(),
                }
            };
            Ok(Control { action, binding })
        })
        .collect()
}
