use core::fmt;
use core::time::Duration;

/// A rendered size, in host pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// A position relative to the container's offset parent (aka `offsetTop`/`offsetLeft`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub top: f32,
    pub left: f32,
}

impl Point {
    pub const ORIGIN: Self = Self {
        top: 0.0,
        left: 0.0,
    };

    pub fn new(top: f32, left: f32) -> Self {
        Self { top, left }
    }

    /// Scales both axes independently by `factor`.
    pub fn scale(self, factor: f32) -> Self {
        Self {
            top: self.top * factor,
            left: self.left * factor,
        }
    }
}

/// Where a transition starts from when it is not a retraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    /// Start at the container origin. Used by the initial settle pass.
    #[default]
    Base,
    /// Start where the boundary item currently sits.
    End,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalEdge {
    #[default]
    Top,
    Bottom,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalEdge {
    #[default]
    Left,
    Right,
}

/// Which style edges a host writes transition positions to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anchor {
    pub vertical: VerticalEdge,
    pub horizontal: HorizontalEdge,
}

/// A user-facing control kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Increase,
    Decrease,
    Toggle,
    Reset,
}

impl Action {
    /// The key used in control class names and selectors (`cs-expander-{key}-btn`).
    pub fn key(self) -> &'static str {
        match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
            Self::Toggle => "toggle",
            Self::Reset => "reset",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The kind of move an item is making.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Motion {
    /// Initial placement of the always-visible items after a reset.
    Settle,
    /// A hidden item emerging from the boundary item.
    Reveal,
    /// A visible item collapsing into the boundary item. Hidden once complete.
    Retract,
}

impl Motion {
    pub(crate) fn intent(self, duration: Duration, anchor: Anchor) -> TransitionIntent {
        let (align, reverse) = match self {
            Self::Settle => (Align::Base, false),
            Self::Reveal => (Align::End, false),
            Self::Retract => (Align::End, true),
        };
        TransitionIntent {
            align,
            reverse,
            duration,
            anchor,
        }
    }
}

/// Logical visibility of one item. The host's "hidden" class is a projection of this.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemState {
    Visible,
    Hidden,
    Transitioning(Motion),
}

impl ItemState {
    /// Whether the item counts as active (i.e. it does not carry the hidden class).
    ///
    /// Retracting items stay active until their transition completes.
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn is_transitioning(self) -> bool {
        matches!(self, Self::Transitioning(_))
    }
}

/// Parameters for a single animated move.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionIntent {
    pub align: Align,
    pub reverse: bool,
    pub duration: Duration,
    pub anchor: Anchor,
}

/// Identifies one in-flight transition. Hand it back to [`crate::Expander::complete`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ticket {
    pub index: usize,
    pub(crate) seq: u64,
}

/// A declarative transition request for one item.
///
/// The host moves the item from `from` to `to` over `duration` (using its native transition
/// facility or the `expander-adapter` driver), then clears the inline position and reports the
/// ticket back.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub ticket: Ticket,
    pub motion: Motion,
    pub from: Point,
    pub to: Point,
    pub duration: Duration,
    pub anchor: Anchor,
}

impl Transition {
    pub fn index(&self) -> usize {
        self.ticket.index
    }

    /// Whether the host should apply the hidden class once the transition completes.
    pub fn hides_on_complete(&self) -> bool {
        self.motion == Motion::Retract
    }
}
