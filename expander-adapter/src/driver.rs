use alloc::vec::Vec;

use expander::{Action, Anchor, Expander, Layout, Point, Transition};

use crate::{Easing, Stepper, Tween};

/// How a [`Driver`] interpolates positions between a transition's endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Interpolation {
    /// Four 20ms steps, then hold for the transition duration before clearing.
    #[default]
    Stepped,
    /// A continuous tween over the transition duration.
    Eased(Easing),
}

/// A style write the host must project onto one item.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StyleUpdate {
    /// Position the item absolutely at `position` on the `anchor` edges. The item is active, so
    /// it must not carry the hidden class.
    Place {
        index: usize,
        anchor: Anchor,
        position: Point,
    },
    /// Drop inline positioning so the item returns to natural flow, and apply (`hide = true`) or
    /// remove the hidden class.
    Clear { index: usize, hide: bool },
}

#[derive(Clone, Copy, Debug)]
enum Curve {
    Stepped(Stepper),
    Eased(Tween),
}

#[derive(Clone, Copy, Debug)]
struct Running {
    transition: Transition,
    curve: Curve,
    finish_ms: u64,
    written: Option<Point>,
}

impl Running {
    fn sample(&self, now_ms: u64) -> Point {
        match self.curve {
            Curve::Stepped(s) => s.sample(now_ms),
            Curve::Eased(t) => t.sample(now_ms),
        }
    }
}

/// A framework-neutral driver that plays an [`Expander`]'s transitions.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_action` when a control is activated
/// - `tick(now_ms, ..)` each frame/timer tick, projecting the emitted [`StyleUpdate`]s
///
/// Completions are reported to the expander as transitions finish, so its gesture guard is
/// released exactly when the last item settles.
#[derive(Clone, Debug)]
pub struct Driver {
    expander: Expander,
    interpolation: Interpolation,
    running: Vec<Running>,
    queued: Vec<StyleUpdate>,
}

impl Driver {
    pub fn new(expander: Expander) -> Self {
        Self {
            expander,
            interpolation: Interpolation::default(),
            running: Vec::new(),
            queued: Vec::new(),
        }
    }

    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub fn expander(&self) -> &Expander {
        &self.expander
    }

    pub fn into_expander(self) -> Expander {
        self.expander
    }

    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    pub fn is_animating(&self) -> bool {
        !self.running.is_empty()
    }

    /// Collapses to the initial state and projects every item.
    pub fn initialize<L: Layout + ?Sized>(&mut self, layout: &L, now_ms: u64) {
        let transitions = self.expander.initialize(layout);
        self.reproject(transitions, now_ms);
    }

    /// Dispatches a control activation. Returns the number of transitions started.
    ///
    /// Gestures arriving while a previous one is still moving start nothing.
    pub fn on_action<L: Layout + ?Sized>(
        &mut self,
        action: Action,
        layout: &L,
        now_ms: u64,
    ) -> usize {
        let transitions = self.expander.toggle_item(action, layout);
        let started = transitions.len();
        if action == Action::Reset {
            self.reproject(transitions, now_ms);
        } else {
            for t in transitions {
                self.start(t, now_ms);
            }
        }
        adebug!(?action, started, running = self.running.len(), "Driver::on_action");
        started
    }

    /// Advances all running transitions and emits the style writes due by `now_ms`.
    ///
    /// Returns `true` while anything is still animating.
    pub fn tick(&mut self, now_ms: u64, mut emit: impl FnMut(StyleUpdate)) -> bool {
        for update in self.queued.drain(..) {
            emit(update);
        }

        let expander = &mut self.expander;
        self.running.retain_mut(|r| {
            if now_ms >= r.finish_ms {
                let index = r.transition.index();
                emit(StyleUpdate::Clear {
                    index,
                    hide: r.transition.hides_on_complete(),
                });
                expander.complete(r.transition.ticket);
                atrace!(index, now_ms, "transition finished");
                return false;
            }
            let position = r.sample(now_ms);
            if r.written != Some(position) {
                r.written = Some(position);
                emit(StyleUpdate::Place {
                    index: r.transition.index(),
                    anchor: r.transition.anchor,
                    position,
                });
            }
            true
        });

        self.is_animating()
    }

    /// Finishes every running transition immediately.
    pub fn finish(&mut self, emit: impl FnMut(StyleUpdate)) {
        let at = self.running.iter().map(|r| r.finish_ms).max().unwrap_or(0);
        self.tick(at, emit);
    }

    fn start(&mut self, transition: Transition, now_ms: u64) {
        // A newer transition for the same item supersedes the old one.
        self.running
            .retain(|r| r.transition.index() != transition.index());

        let duration_ms = transition.duration.as_millis() as u64;
        let (curve, finish_ms) = match self.interpolation {
            Interpolation::Stepped => {
                let s = Stepper::new(transition.from, transition.to, now_ms);
                (Curve::Stepped(s), s.end_ms().saturating_add(duration_ms))
            }
            Interpolation::Eased(easing) => {
                let t = Tween::new(transition.from, transition.to, now_ms, duration_ms, easing);
                (Curve::Eased(t), t.end_ms())
            }
        };

        self.queued.push(StyleUpdate::Place {
            index: transition.index(),
            anchor: transition.anchor,
            position: transition.from,
        });
        self.running.push(Running {
            transition,
            curve,
            finish_ms,
            written: Some(transition.from),
        });
    }

    /// Drops everything in flight and re-projects every item from the expander's state.
    fn reproject(&mut self, transitions: Vec<Transition>, now_ms: u64) {
        self.running.clear();
        self.queued.clear();
        for index in 0..self.expander.len() {
            let hide = self
                .expander
                .item_state(index)
                .is_some_and(|s| !s.is_active());
            self.queued.push(StyleUpdate::Clear { index, hide });
        }
        for t in transitions {
            self.start(t, now_ms);
        }
    }
}
