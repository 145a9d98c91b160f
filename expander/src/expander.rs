use alloc::vec;
use alloc::vec::Vec;
use core::time::Duration;

use crate::{
    Action, Animator, ExpanderError, ExpanderOptions, ExpanderState, ItemState, Layout, Motion,
    Ticket, Transition,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct InFlight {
    seq: u64,
    gated: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Item {
    state: ItemState,
    in_flight: Option<InFlight>,
}

impl Item {
    fn settled(state: ItemState) -> Self {
        Self {
            state,
            in_flight: None,
        }
    }
}

/// A headless expand/collapse controller.
///
/// Owns the visible/hidden partition of a fixed collection of items plus the cursor separating
/// settled-visible items from hidden ones. It holds no UI objects:
/// - layout is read through a [`Layout`] on every call that moves items,
/// - every move is returned as a [`Transition`] request for the host to play,
/// - the host reports finished transitions through [`Expander::complete`].
///
/// User gestures go through [`Expander::toggle_item`], which refuses new gestures until every
/// transition it started has completed.
#[derive(Clone, Debug)]
pub struct Expander {
    options: ExpanderOptions,
    duration: Duration,
    items: Vec<Item>,
    /// Cursor over the collection; `-1` when nothing is shown. Ranges over `-1..=len`.
    last: isize,
    pending: usize,
    moving: bool,
    next_seq: u64,
}

impl Expander {
    /// Creates a controller for `count` items, all initially visible.
    ///
    /// Call [`Expander::initialize`] once layout is available to collapse to the initial state.
    pub fn new(options: ExpanderOptions, count: usize) -> Result<Self, ExpanderError> {
        let options = options.resolve()?;
        let duration = options.duration()?;
        edebug!(
            count,
            show = options.show,
            increase = options.increase,
            decrease = options.decrease,
            "Expander::new"
        );
        Ok(Self {
            options,
            duration,
            items: vec![Item::settled(ItemState::Visible); count],
            last: count as isize - 1,
            pending: 0,
            moving: false,
            next_seq: 0,
        })
    }

    pub fn options(&self) -> &ExpanderOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The cursor: items up to and including it are on the visible side.
    ///
    /// Moves in whole steps, so once everything is revealed it may equal `len()`. Reads `0` when
    /// nothing is shown.
    pub fn last_index(&self) -> usize {
        self.last.max(0) as usize
    }

    /// Number of items on the visible side of the cursor.
    pub fn shown(&self) -> usize {
        ((self.last + 1).max(0) as usize).min(self.items.len())
    }

    /// Whether a gesture is in flight. While set, `toggle_item` ignores everything but reset.
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// Gesture transitions still awaiting completion.
    pub fn pending_transitions(&self) -> usize {
        self.pending
    }

    /// Whether no item is transitioning.
    pub fn is_settled(&self) -> bool {
        self.items.iter().all(|it| it.in_flight.is_none())
    }

    pub fn item_state(&self, index: usize) -> Option<ItemState> {
        self.items.get(index).map(|it| it.state)
    }

    pub fn for_each_active_item(&self, mut f: impl FnMut(usize)) {
        for (index, item) in self.items.iter().enumerate() {
            if item.state.is_active() {
                f(index);
            }
        }
    }

    pub fn get_active_items(&self) -> Vec<usize> {
        let mut out = Vec::new();
        self.for_each_active_item(|i| out.push(i));
        out
    }

    pub fn get_hidden_items(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, it)| !it.state.is_active())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn state(&self) -> ExpanderState {
        ExpanderState {
            last_index: self.last_index(),
            shown: self.shown(),
            moving: self.moving,
            items: self.items.iter().map(|it| it.state).collect(),
        }
    }

    /// Collapses to the initial state. Same as [`Expander::collapse`].
    pub fn initialize<L: Layout + ?Sized>(&mut self, layout: &L) -> Vec<Transition> {
        edebug!(count = self.items.len(), "Expander::initialize");
        self.collapse(layout)
    }

    /// Hard reset: hides every item at or past `show` and settles the rest into place.
    ///
    /// Always allowed. In-flight transitions are invalidated and the gesture guard is released.
    pub fn collapse<L: Layout + ?Sized>(&mut self, layout: &L) -> Vec<Transition> {
        let floor = self.floor();
        self.moving = false;
        self.pending = 0;

        let animator = Animator::new(layout);
        let intent = Motion::Settle.intent(self.duration, self.options.anchor);
        let mut out = Vec::with_capacity(floor.saturating_sub(1));
        for index in 0..self.items.len() {
            if index >= floor {
                self.items[index] = Item::settled(ItemState::Hidden);
                continue;
            }
            self.items[index] = Item::settled(ItemState::Visible);
            // The first item is the grid origin and never moves.
            if index > 0 {
                let ticket = self.begin(index, Motion::Settle, false);
                out.push(animator.transition(ticket, Motion::Settle, index, intent));
            }
        }
        self.last = floor as isize - 1;
        edebug!(last = self.last, settling = out.len(), "Expander::collapse");
        out
    }

    /// Reveals the next `increase` items. Not guarded; see [`Expander::toggle_item`].
    pub fn increase_item<L: Layout + ?Sized>(&mut self, layout: &L) -> Vec<Transition> {
        self.increase_item_by(layout, self.options.increase)
    }

    /// Reveals the hidden items in `(last_index, last_index + step]`; they emerge from the
    /// boundary item. The cursor then advances by the configured `increase`.
    pub fn increase_item_by<L: Layout + ?Sized>(
        &mut self,
        layout: &L,
        step: usize,
    ) -> Vec<Transition> {
        let out = self.reveal(layout, step, false);
        self.advance();
        out
    }

    /// Retracts the last `decrease` items. Not guarded; see [`Expander::toggle_item`].
    pub fn decrease_item<L: Layout + ?Sized>(&mut self, layout: &L) -> Vec<Transition> {
        self.decrease_item_by(layout, self.options.decrease)
    }

    /// Retreats the cursor by the configured `decrease`, then retracts the active items in
    /// `(last_index, last_index + step]` past `show`.
    ///
    /// The cursor never retreats below `show - 1`: such a decrease leaves it where it is, and
    /// only already hidden items sit above it. Retracting items stay active until their
    /// transition completes.
    pub fn decrease_item_by<L: Layout + ?Sized>(
        &mut self,
        layout: &L,
        step: usize,
    ) -> Vec<Transition> {
        self.retreat();
        self.retract(layout, step, false)
    }

    /// Single entry point for all controls.
    ///
    /// - `Reset` collapses unconditionally.
    /// - Anything else is ignored while a previous gesture is still moving.
    /// - `Toggle` fully collapses when items past `show` are shown, else reveals everything.
    pub fn toggle_item<L: Layout + ?Sized>(
        &mut self,
        action: Action,
        layout: &L,
    ) -> Vec<Transition> {
        let increase = self.options.increase;
        let decrease = self.options.decrease;
        match action {
            Action::Reset => self.collapse(layout),
            Action::Increase => self.guarded(action, |this| {
                let out = this.reveal(layout, increase, true);
                this.advance();
                out
            }),
            Action::Decrease => self.guarded(action, |this| {
                this.retreat();
                this.retract(layout, decrease, true)
            }),
            Action::Toggle => self.guarded(action, |this| {
                let len = this.items.len();
                if this.last > this.options.show as isize - 1 {
                    this.last = this.floor() as isize - 1;
                    this.retract(layout, len, true)
                } else {
                    let out = this.reveal(layout, len, true);
                    this.last = len as isize - 1;
                    out
                }
            }),
        }
    }

    /// Marks the transition behind `ticket` as finished.
    ///
    /// Returns `false` for tickets that were superseded or invalidated by a reset.
    pub fn complete(&mut self, ticket: Ticket) -> bool {
        let Some(item) = self.items.get_mut(ticket.index) else {
            return false;
        };
        let gated = match item.in_flight {
            Some(f) if f.seq == ticket.seq => f.gated,
            _ => {
                etrace!(index = ticket.index, "stale transition completion ignored");
                return false;
            }
        };
        item.in_flight = None;
        item.state = match item.state {
            ItemState::Transitioning(Motion::Retract) => ItemState::Hidden,
            _ => ItemState::Visible,
        };
        if gated {
            self.release();
        }
        true
    }

    /// Completes every in-flight transition immediately.
    ///
    /// For hosts that do not animate (or that were torn down mid-animation).
    pub fn finish_all(&mut self) {
        for index in 0..self.items.len() {
            if let Some(f) = self.items[index].in_flight {
                self.complete(Ticket { index, seq: f.seq });
            }
        }
    }

    fn floor(&self) -> usize {
        self.options.show.min(self.items.len())
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn guarded(
        &mut self,
        action: Action,
        run: impl FnOnce(&mut Self) -> Vec<Transition>,
    ) -> Vec<Transition> {
        if self.moving {
            etrace!(%action, pending = self.pending, "gesture ignored while moving");
            return Vec::new();
        }
        self.moving = true;
        let out = run(self);
        if self.pending == 0 {
            self.moving = false;
        }
        edebug!(
            %action,
            last = self.last,
            transitions = out.len(),
            "Expander::toggle_item"
        );
        out
    }

    /// Moves the cursor forward by `increase` while hidden items remain, never past `len`.
    fn advance(&mut self) {
        let len = self.items.len() as isize;
        if self.last + 1 < len {
            self.last = (self.last + self.options.increase as isize).min(len);
        }
    }

    /// Moves the cursor back by `decrease` unless that would cross `show - 1`.
    fn retreat(&mut self) {
        let target = self.last - self.options.decrease as isize;
        if target >= self.options.show as isize - 1 {
            self.last = target;
        } else {
            etrace!(last = self.last, "decrease refused at the show floor");
        }
    }

    /// Indices in `(last, last + step]` that exist.
    fn window(&self, step: usize) -> core::ops::Range<usize> {
        let start = (self.last + 1).max(0) as usize;
        let end = (self.last + 1)
            .saturating_add(step as isize)
            .clamp(0, self.items.len() as isize) as usize;
        start.min(end)..end
    }

    /// Index of the item new and departing items anchor to.
    fn boundary(&self) -> usize {
        (self.last.max(0) as usize).min(self.items.len().saturating_sub(1))
    }

    fn reveal<L: Layout + ?Sized>(
        &mut self,
        layout: &L,
        step: usize,
        gated: bool,
    ) -> Vec<Transition> {
        let window = self.window(step);
        if window.is_empty() {
            return Vec::new();
        }

        let boundary = self.boundary();
        let animator = Animator::new(layout);
        let intent = Motion::Reveal.intent(self.duration, self.options.anchor);
        let mut out = Vec::with_capacity(window.len());
        for index in window {
            if matches!(
                self.items[index].state,
                ItemState::Hidden | ItemState::Transitioning(Motion::Retract)
            ) {
                let ticket = self.begin(index, Motion::Reveal, gated);
                out.push(animator.transition(ticket, Motion::Reveal, boundary, intent));
            }
        }
        out
    }

    /// Retracts active items in `(last, last + step]` that are at or past `show`.
    fn retract<L: Layout + ?Sized>(
        &mut self,
        layout: &L,
        step: usize,
        gated: bool,
    ) -> Vec<Transition> {
        let window = self.window(step);
        let start = window.start.max(self.options.show);
        if start >= window.end {
            return Vec::new();
        }

        let boundary = self.boundary();
        let animator = Animator::new(layout);
        let intent = Motion::Retract.intent(self.duration, self.options.anchor);
        let mut out = Vec::with_capacity(window.end - start);
        for index in start..window.end {
            if matches!(
                self.items[index].state,
                ItemState::Visible | ItemState::Transitioning(Motion::Reveal | Motion::Settle)
            ) {
                let ticket = self.begin(index, Motion::Retract, gated);
                out.push(animator.transition(ticket, Motion::Retract, boundary, intent));
            }
        }
        out
    }

    fn begin(&mut self, index: usize, motion: Motion, gated: bool) -> Ticket {
        let seq = self.next_seq;
        self.next_seq += 1;

        let item = &mut self.items[index];
        let previous = item.in_flight.replace(InFlight { seq, gated });
        item.state = ItemState::Transitioning(motion);
        if previous.is_some_and(|p| p.gated) {
            self.release();
        }
        if gated {
            self.pending += 1;
        }
        Ticket { index, seq }
    }

    fn release(&mut self) {
        self.pending = self.pending.saturating_sub(1);
        if self.pending == 0 && self.moving {
            self.moving = false;
            etrace!("gesture guard released");
        }
    }
}
