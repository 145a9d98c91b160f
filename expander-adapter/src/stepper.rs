use expander::Point;

/// Interval between stepped frames.
pub const TICK_MS: u64 = 20;

/// Number of stepped frames per transition.
pub const STEPS: u32 = 4;

/// A fixed-rate, coarse ease-out interpolation.
///
/// The item is placed at `from` when the transition starts. On each of the [`STEPS`] ticks it
/// moves to `to / pos`, with `pos` counting down 4, 3, 2, 1 independently per axis, so the last
/// tick lands exactly on `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stepper {
    pub from: Point,
    pub to: Point,
    pub start_ms: u64,
}

impl Stepper {
    pub fn new(from: Point, to: Point, start_ms: u64) -> Self {
        Self { from, to, start_ms }
    }

    /// Ticks that have fired by `now_ms`, in `0..=STEPS`.
    pub fn ticks_elapsed(&self, now_ms: u64) -> u32 {
        let ticks = now_ms.saturating_sub(self.start_ms) / TICK_MS;
        ticks.min(STEPS as u64) as u32
    }

    /// Position after `tick` ticks.
    pub fn frame(&self, tick: u32) -> Point {
        if tick == 0 {
            return self.from;
        }
        let pos = STEPS + 1 - tick.min(STEPS);
        self.to.scale(1.0 / pos as f32)
    }

    pub fn sample(&self, now_ms: u64) -> Point {
        self.frame(self.ticks_elapsed(now_ms))
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        self.ticks_elapsed(now_ms) == STEPS
    }

    /// When the last tick fires.
    pub fn end_ms(&self) -> u64 {
        self.start_ms.saturating_add(TICK_MS * STEPS as u64)
    }
}
