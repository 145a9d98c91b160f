use crate::{Align, Grid, Layout, Motion, Point, Ticket, Transition, TransitionIntent};

/// Computes where one item moves from and to inside its container's wrapping grid.
///
/// An animator snapshots the grid geometry when it is created, so create one per gesture,
/// after the host has committed layout.
pub struct Animator<'a, L: ?Sized> {
    layout: &'a L,
    grid: Grid,
}

impl<'a, L: Layout + ?Sized> Animator<'a, L> {
    pub fn new(layout: &'a L) -> Self {
        let grid = Grid::new(layout.reference_size(), layout.container_width());
        if grid.is_degenerate() {
            ewarn!(
                unit_width = grid.unit.width,
                wrapper_width = grid.wrapper_width,
                "degenerate grid geometry, transition positions will not be finite"
            );
        }
        Self { layout, grid }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Returns `(from, to)` for the item at `index`, given the boundary item at `boundary`.
    ///
    /// - Retractions start at the item's natural slot and end at the boundary item.
    /// - `Align::Base` starts at the container origin and ends at the slot.
    /// - `Align::End` starts at the boundary item and ends at the slot.
    pub fn path(&self, index: usize, boundary: usize, intent: &TransitionIntent) -> (Point, Point) {
        let slot = self.grid.slot(index);
        if intent.reverse {
            return (slot, self.layout.offset_of(boundary));
        }
        match intent.align {
            Align::Base => (Point::ORIGIN, slot),
            Align::End => (self.layout.offset_of(boundary), slot),
        }
    }

    pub(crate) fn transition(
        &self,
        ticket: Ticket,
        motion: Motion,
        boundary: usize,
        intent: TransitionIntent,
    ) -> Transition {
        let (from, to) = self.path(ticket.index, boundary, &intent);
        Transition {
            ticket,
            motion,
            from,
            to,
            duration: intent.duration,
            anchor: intent.anchor,
        }
    }
}
