use crate::*;

use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start) as u64) as usize
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

fn grid_4x() -> FlowLayout {
    FlowLayout::new(
        Size {
            width: 100.0,
            height: 50.0,
        },
        400.0,
    )
}

fn mounted(options: ExpanderOptions, count: usize) -> Expander {
    let mut e = Expander::new(options, count).unwrap();
    e.initialize(&grid_4x());
    e.finish_all();
    e
}

fn indexes(ts: &[Transition]) -> Vec<usize> {
    ts.iter().map(|t| t.index()).collect()
}

fn range(start: usize, end: usize) -> Vec<usize> {
    (start..end).collect()
}

#[test]
fn initialize_hides_past_show_and_settles_the_rest() {
    let layout = grid_4x();
    let mut e = Expander::new(ExpanderOptions::new(), 10).unwrap();
    assert_eq!(e.get_active_items(), range(0, 10));

    let ts = e.initialize(&layout);
    assert_eq!(indexes(&ts), [1, 2, 3]);
    assert!(ts.iter().all(|t| t.motion == Motion::Settle));
    assert_eq!(ts[0].from, Point::ORIGIN);
    assert_eq!(ts[0].to, Point::new(0.0, 100.0));
    assert_eq!(e.last_index(), 3);
    assert!(!e.is_moving());

    assert_eq!(e.get_active_items(), range(0, 4));
    assert_eq!(e.get_hidden_items(), range(4, 10));
    assert_eq!(e.item_state(2), Some(ItemState::Transitioning(Motion::Settle)));

    for t in &ts {
        assert!(e.complete(t.ticket));
    }
    assert!(e.is_settled());
    assert_eq!(e.item_state(2), Some(ItemState::Visible));
}

#[test]
fn collapse_leaves_exactly_show_items_active() {
    let layout = grid_4x();
    for len in 0..12usize {
        for show in 0..14usize {
            let mut e = Expander::new(ExpanderOptions::new().with_show(show), len).unwrap();
            e.initialize(&layout);
            e.toggle_item(Action::Toggle, &layout);
            e.collapse(&layout);

            let expected = show.min(len);
            assert_eq!(e.get_active_items(), range(0, expected), "len={len} show={show}");
            assert_eq!(e.get_hidden_items(), range(expected, len), "len={len} show={show}");
            assert!(!e.is_moving());
        }
    }
}

#[test]
fn scenario_increase_reveals_next_step() {
    let layout = grid_4x();
    let mut e = mounted(ExpanderOptions::new().with_show(4).with_increase(3), 10);
    assert_eq!(e.last_index(), 3);

    let ts = e.toggle_item(Action::Increase, &layout);
    assert_eq!(indexes(&ts), [4, 5, 6]);
    assert_eq!(e.last_index(), 6);
    assert_eq!(e.get_active_items(), range(0, 7));

    // New items emerge from the boundary item (index 3) towards their own slot.
    assert!(ts.iter().all(|t| t.motion == Motion::Reveal));
    assert_eq!(ts[0].from, Point::new(0.0, 300.0));
    assert_eq!(ts[0].to, Point::new(50.0, 0.0));
    assert_eq!(ts[1].to, Point::new(50.0, 100.0));
}

#[test]
fn scenario_increase_until_exhausted_clamps_cursor() {
    let layout = grid_4x();
    let mut e = mounted(ExpanderOptions::new().with_show(4).with_increase(3), 10);

    for _ in 0..3 {
        e.toggle_item(Action::Increase, &layout);
        e.finish_all();
    }
    assert_eq!(e.last_index(), 9);
    assert_eq!(e.get_active_items(), range(0, 10));
    assert!(e.get_hidden_items().is_empty());

    // Nothing left to reveal.
    let ts = e.toggle_item(Action::Increase, &layout);
    assert!(ts.is_empty());
    assert_eq!(e.last_index(), 9);
    assert!(!e.is_moving());
}

#[test]
fn scenario_decrease_retracts_last_step() {
    let layout = grid_4x();
    let mut e = mounted(ExpanderOptions::new().with_show(4).with_decrease(3), 10);
    e.toggle_item(Action::Toggle, &layout);
    e.finish_all();
    assert_eq!(e.last_index(), 9);

    let ts = e.toggle_item(Action::Decrease, &layout);
    assert_eq!(indexes(&ts), [7, 8, 9]);
    assert_eq!(e.last_index(), 6);
    assert!(ts.iter().all(|t| t.hides_on_complete()));

    // Retracting from the natural slot into the new boundary item (index 6).
    assert_eq!(ts[0].from, Point::new(50.0, 300.0));
    assert_eq!(ts[0].to, Point::new(50.0, 200.0));

    // Still active until their transitions complete.
    assert_eq!(e.get_active_items(), range(0, 10));
    for t in &ts {
        assert!(e.complete(t.ticket));
    }
    assert_eq!(e.get_active_items(), range(0, 7));
    assert_eq!(e.get_hidden_items(), [7, 8, 9]);
}

#[test]
fn cursor_moves_in_whole_steps_past_the_last_item() {
    let layout = grid_4x();
    let mut e = mounted(ExpanderOptions::new().with_show(4).with_increase(3), 9);

    assert_eq!(indexes(&e.toggle_item(Action::Increase, &layout)), [4, 5, 6]);
    e.finish_all();
    assert_eq!(indexes(&e.toggle_item(Action::Increase, &layout)), [7, 8]);
    e.finish_all();
    assert_eq!(e.last_index(), 9);
    assert_eq!(e.shown(), 9);

    // Nothing hidden is left, so the cursor stays put.
    assert!(e.toggle_item(Action::Increase, &layout).is_empty());
    assert_eq!(e.last_index(), 9);

    let ts = e.toggle_item(Action::Decrease, &layout);
    assert_eq!(indexes(&ts), [7, 8]);
    assert_eq!(e.last_index(), 6);
    e.finish_all();
    assert_eq!(e.get_active_items(), range(0, 7));
}

#[test]
fn cursor_never_passes_collection_length() {
    let layout = grid_4x();
    let mut e = mounted(ExpanderOptions::new().with_show(4).with_increase(3), 11);
    for _ in 0..3 {
        e.toggle_item(Action::Increase, &layout);
        e.finish_all();
    }
    assert_eq!(e.last_index(), 11);
    assert_eq!(e.get_active_items(), range(0, 11));

    let ts = e.toggle_item(Action::Decrease, &layout);
    assert_eq!(indexes(&ts), [9, 10]);
    assert_eq!(e.last_index(), 8);
}

#[test]
fn decrease_past_show_is_refused() {
    let layout = grid_4x();
    let options = ExpanderOptions::new()
        .with_show(4)
        .with_increase(2)
        .with_decrease(3);
    let mut e = mounted(options, 10);

    assert_eq!(indexes(&e.toggle_item(Action::Increase, &layout)), [4, 5]);
    e.finish_all();
    assert_eq!(e.last_index(), 5);

    let before = e.state();
    assert!(e.toggle_item(Action::Decrease, &layout).is_empty());
    assert!(!e.is_moving());
    assert_eq!(e.state(), before);
    assert_eq!(e.get_active_items(), range(0, 6));

    // The toggle still collapses all the way back to `show`.
    assert_eq!(indexes(&e.toggle_item(Action::Toggle, &layout)), [4, 5]);
    assert_eq!(e.last_index(), 3);
}

#[test]
fn scenario_decrease_defaults_to_increase() {
    let e = Expander::new(ExpanderOptions::new().with_show(4).with_increase(5), 10).unwrap();
    assert_eq!(e.options().decrease, 5);

    let e = Expander::new(
        ExpanderOptions::new().with_increase(5).with_decrease(2),
        10,
    )
    .unwrap();
    assert_eq!(e.options().decrease, 2);
}

#[test]
fn scenario_toggle_expands_then_collapses() {
    let layout = grid_4x();
    let mut e = mounted(ExpanderOptions::new().with_show(4).with_toggle(true), 10);

    let ts = e.toggle_item(Action::Toggle, &layout);
    assert_eq!(indexes(&ts), range(4, 10));
    assert_eq!(e.last_index(), 9);
    e.finish_all();

    let ts = e.toggle_item(Action::Toggle, &layout);
    assert_eq!(indexes(&ts), range(4, 10));
    assert_eq!(e.last_index(), 3);
    e.finish_all();
    assert_eq!(e.get_active_items(), range(0, 4));
}

#[test]
fn toggle_collapses_to_configured_show() {
    let layout = grid_4x();
    let mut e = mounted(ExpanderOptions::new().with_show(6).with_toggle(true), 12);
    e.toggle_item(Action::Toggle, &layout);
    e.finish_all();
    e.toggle_item(Action::Toggle, &layout);
    e.finish_all();
    assert_eq!(e.last_index(), 5);
    assert_eq!(e.get_active_items(), range(0, 6));
}

#[test]
fn gestures_are_ignored_while_moving() {
    let layout = grid_4x();
    let mut e = mounted(ExpanderOptions::new(), 10);

    let first = e.toggle_item(Action::Increase, &layout);
    assert_eq!(first.len(), 3);
    assert!(e.is_moving());
    assert_eq!(e.pending_transitions(), 3);

    let before = e.state();
    assert!(e.toggle_item(Action::Increase, &layout).is_empty());
    assert!(e.toggle_item(Action::Decrease, &layout).is_empty());
    assert!(e.toggle_item(Action::Toggle, &layout).is_empty());
    assert_eq!(e.state(), before);
}

#[test]
fn guard_releases_when_last_transition_completes() {
    let layout = grid_4x();
    let mut e = mounted(ExpanderOptions::new(), 10);

    let ts = e.toggle_item(Action::Increase, &layout);
    assert!(e.complete(ts[0].ticket));
    assert!(e.complete(ts[2].ticket));
    assert!(e.is_moving());
    assert!(e.complete(ts[1].ticket));
    assert!(!e.is_moving());

    // A ticket only completes once.
    assert!(!e.complete(ts[1].ticket));
    assert_eq!(e.pending_transitions(), 0);
}

#[test]
fn reset_is_always_reachable_and_invalidates_tickets() {
    let layout = grid_4x();
    let mut e = mounted(ExpanderOptions::new().with_resetable(true), 10);

    let ts = e.toggle_item(Action::Increase, &layout);
    assert!(e.is_moving());

    let settle = e.toggle_item(Action::Reset, &layout);
    assert_eq!(indexes(&settle), [1, 2, 3]);
    assert!(!e.is_moving());
    assert_eq!(e.last_index(), 3);
    assert_eq!(e.get_hidden_items(), range(4, 10));

    for t in &ts {
        assert!(!e.complete(t.ticket));
    }
    assert_eq!(e.item_state(4), Some(ItemState::Hidden));
}

#[test]
fn settle_transitions_do_not_hold_the_guard() {
    let layout = grid_4x();
    let mut e = Expander::new(ExpanderOptions::new(), 10).unwrap();
    e.initialize(&layout);
    assert!(!e.is_settled());

    let ts = e.toggle_item(Action::Increase, &layout);
    assert_eq!(ts.len(), 3);
    assert_eq!(e.pending_transitions(), 3);
}

#[test]
fn show_covering_everything_makes_gestures_noops() {
    let layout = grid_4x();
    let mut e = mounted(ExpanderOptions::new().with_show(8), 5);
    assert_eq!(e.last_index(), 4);
    assert!(e.get_hidden_items().is_empty());

    for action in [Action::Increase, Action::Decrease, Action::Toggle] {
        assert!(e.toggle_item(action, &layout).is_empty());
        assert!(!e.is_moving());
        assert_eq!(e.last_index(), 4);
    }
}

#[test]
fn zero_show_starts_empty_and_reveals_from_the_first_item() {
    let layout = grid_4x();
    let mut e = mounted(ExpanderOptions::new().with_show(0), 6);
    assert!(e.get_active_items().is_empty());
    assert_eq!(e.last_index(), 0);

    let ts = e.toggle_item(Action::Increase, &layout);
    assert_eq!(indexes(&ts), [0, 1, 2]);
    assert_eq!(e.last_index(), 2);
}

#[test]
fn empty_collection_is_inert() {
    let layout = grid_4x();
    let mut e = mounted(ExpanderOptions::new(), 0);
    assert!(e.is_empty());
    for action in [Action::Increase, Action::Decrease, Action::Toggle, Action::Reset] {
        assert!(e.toggle_item(action, &layout).is_empty());
    }
    assert_eq!(e.last_index(), 0);
}

#[test]
fn direct_calls_supersede_in_flight_transitions() {
    let layout = grid_4x();
    let mut e = mounted(ExpanderOptions::new(), 10);

    let up = e.toggle_item(Action::Increase, &layout);
    let down = e.decrease_item(&layout);
    assert_eq!(indexes(&down), [4, 5, 6]);

    // The gesture's transitions were superseded, so the guard is free again.
    assert!(!e.is_moving());
    for t in &up {
        assert!(!e.complete(t.ticket));
    }
    for t in &down {
        assert!(e.complete(t.ticket));
    }
    assert_eq!(e.get_active_items(), range(0, 4));
}

#[test]
fn custom_increase_step_reveals_step_but_moves_cursor_by_increase() {
    let layout = grid_4x();
    let mut e = mounted(ExpanderOptions::new(), 10);
    let ts = e.increase_item_by(&layout, 5);
    assert_eq!(indexes(&ts), range(4, 9));
    // The cursor always moves by the configured step.
    assert_eq!(e.last_index(), 6);
    assert!(!e.is_moving());
}

#[test]
fn active_and_hidden_items_partition_the_collection() {
    let layout = grid_4x();
    let mut rng = Lcg::new(0x5eed);

    for _ in 0..200 {
        let len = rng.gen_range_usize(0, 20);
        let show = rng.gen_range_usize(0, 8);
        let increase = rng.gen_range_usize(1, 6);
        let decrease = rng.gen_range_usize(0, 6);
        let options = ExpanderOptions::new()
            .with_show(show)
            .with_increase(increase)
            .with_decrease(decrease);
        let mut e = Expander::new(options, len).unwrap();
        let mut in_flight = e.initialize(&layout);

        for _ in 0..30 {
            let action = match rng.gen_range_usize(0, 10) {
                0..=3 => Action::Increase,
                4..=7 => Action::Decrease,
                8 => Action::Toggle,
                _ => Action::Reset,
            };
            in_flight.extend(e.toggle_item(action, &layout));
            if rng.gen_bool() {
                for t in in_flight.drain(..) {
                    e.complete(t.ticket);
                }
            }

            let floor = show.min(len);
            assert!(floor.saturating_sub(1) <= e.last_index());
            assert!(e.last_index() <= len);

            let active = e.get_active_items();
            assert_eq!(active, e.get_active_items());
            let hidden = e.get_hidden_items();
            let mut all: Vec<usize> = active.iter().chain(hidden.iter()).copied().collect();
            all.sort_unstable();
            assert_eq!(all, range(0, len));
        }

        // Settled: the partition matches the cursor exactly.
        e.finish_all();
        assert!(e.is_settled());
        assert!(!e.is_moving());
        assert_eq!(e.get_active_items(), range(0, e.shown()));
    }
}

#[test]
fn grid_cells_wrap_on_exact_multiples() {
    let grid = Grid::new(
        Size {
            width: 100.0,
            height: 50.0,
        },
        300.0,
    );
    assert_eq!(grid.items_per_row(), 3.0);
    assert_eq!(grid.cell(0), Cell { row: 0.0, column: 0.0 });
    assert_eq!(grid.cell(2), Cell { row: 0.0, column: 2.0 });
    assert_eq!(grid.cell(3), Cell { row: 1.0, column: 0.0 });
    assert_eq!(grid.cell(6), Cell { row: 2.0, column: 0.0 });
    assert_eq!(grid.cell(7), Cell { row: 2.0, column: 1.0 });
    assert_eq!(grid.slot(7), Point::new(100.0, 100.0));
}

#[test]
fn grid_keeps_fractional_items_per_row() {
    let grid = Grid::new(
        Size {
            width: 100.0,
            height: 50.0,
        },
        350.0,
    );
    assert_eq!(grid.items_per_row(), 3.5);
    assert_eq!(grid.cell(3), Cell { row: 0.0, column: 3.0 });
    assert_eq!(grid.cell(4), Cell { row: 1.0, column: 0.5 });
    assert_eq!(grid.cell(7), Cell { row: 2.0, column: 0.0 });
    assert_eq!(grid.slot(4), Point::new(50.0, 50.0));
}

#[test]
fn degenerate_grid_yields_non_finite_positions() {
    let grid = Grid::new(
        Size {
            width: 0.0,
            height: 50.0,
        },
        0.0,
    );
    assert!(grid.is_degenerate());
    assert!(grid.slot(1).top.is_nan());

    let zero_width = Grid::new(
        Size {
            width: 0.0,
            height: 50.0,
        },
        400.0,
    );
    assert!(zero_width.is_degenerate());
    assert!(!grid_4x_grid().is_degenerate());
}

fn grid_4x_grid() -> Grid {
    Animator::new(&grid_4x()).grid()
}

#[test]
fn animator_paths_follow_intent() {
    let layout = grid_4x();
    let animator = Animator::new(&layout);
    let intent = |align, reverse| TransitionIntent {
        align,
        reverse,
        duration: Duration::from_millis(300),
        anchor: Anchor::default(),
    };

    assert_eq!(
        animator.path(5, 3, &intent(Align::Base, false)),
        (Point::ORIGIN, Point::new(50.0, 100.0))
    );
    assert_eq!(
        animator.path(5, 3, &intent(Align::End, false)),
        (Point::new(0.0, 300.0), Point::new(50.0, 100.0))
    );
    assert_eq!(
        animator.path(5, 3, &intent(Align::End, true)),
        (Point::new(50.0, 100.0), Point::new(0.0, 300.0))
    );
}

#[test]
fn transitions_carry_configured_duration_and_anchor() {
    let layout = grid_4x();
    let anchor = Anchor {
        vertical: VerticalEdge::Bottom,
        horizontal: HorizontalEdge::Right,
    };
    let mut e = mounted(
        ExpanderOptions::new()
            .with_animation_duration(0.5)
            .with_anchor(anchor),
        10,
    );
    let ts = e.toggle_item(Action::Increase, &layout);
    assert!(ts.iter().all(|t| t.duration == Duration::from_millis(500)));
    assert!(ts.iter().all(|t| t.anchor == anchor));
}

#[test]
fn options_are_validated() {
    assert_eq!(
        Expander::new(ExpanderOptions::new().with_animation_duration(-1.0), 3).unwrap_err(),
        ExpanderError::InvalidDuration(-1.0)
    );
    assert!(matches!(
        Expander::new(ExpanderOptions::new().with_animation_duration(f32::NAN), 3),
        Err(ExpanderError::InvalidDuration(_))
    ));
    assert_eq!(
        Expander::new(ExpanderOptions::new().with_animation_duration(1e20), 3).unwrap_err(),
        ExpanderError::InvalidDuration(1e20)
    );
    assert_eq!(
        ExpanderOptions::new().with_animation_duration(1e20).duration(),
        Err(ExpanderError::InvalidDuration(1e20))
    );
    assert_eq!(
        Expander::new(ExpanderOptions::new().with_increase(0), 3).unwrap_err(),
        ExpanderError::InvalidStep
    );
    assert!(Expander::new(ExpanderOptions::new().with_animation_duration(0.0), 3).is_ok());
}

#[test]
fn default_controls_are_created() {
    let controls = plan_controls(&ExpanderOptions::new(), |_| false).unwrap();
    assert_eq!(
        controls,
        [
            Control {
                action: Action::Increase,
                binding: Binding::Create {
                    class: String::from("cs-expander-increase-btn"),
                    label: String::from("Increase Items"),
                },
            },
            Control {
                action: Action::Decrease,
                binding: Binding::Create {
                    class: String::from("cs-expander-decrease-btn"),
                    label: String::from("Decrease Items"),
                },
            },
        ]
    );
}

#[test]
fn control_set_follows_flags() {
    let o = ExpanderOptions::new();
    assert_eq!(control_actions(&o), [Action::Increase, Action::Decrease]);
    assert_eq!(
        control_actions(&o.clone().with_toggle(true).with_resetable(true)),
        [Action::Toggle, Action::Increase, Action::Decrease, Action::Reset]
    );
    assert_eq!(
        control_actions(&o.clone().with_toggle(true).with_unary(true)),
        [Action::Toggle]
    );
    assert_eq!(
        control_actions(&o.with_unary(true)),
        [Action::Increase, Action::Decrease]
    );
}

#[test]
fn custom_control_selectors_must_resolve() {
    let options = ExpanderOptions::new()
        .with_control(Action::Increase, ControlOptions::new("#more", "More"));

    let controls = plan_controls(&options, |s| s == "#more").unwrap();
    assert_eq!(
        controls[0].binding,
        Binding::Existing {
            selector: String::from("#more"),
        }
    );

    let err = plan_controls(&options, |_| false).unwrap_err();
    assert_eq!(
        err,
        ExpanderError::ControlNotFound {
            action: Action::Increase,
            selector: String::from("#more"),
        }
    );
}

#[test]
fn created_controls_use_configured_labels() {
    let options = ExpanderOptions::new().with_control(
        Action::Decrease,
        ControlOptions::new(".cs-expander-decrease-btn", "Fewer"),
    );
    let controls = plan_controls(&options, |_| false).unwrap();
    assert_eq!(
        controls[1].binding,
        Binding::Create {
            class: String::from("cs-expander-decrease-btn"),
            label: String::from("Fewer"),
        }
    );
}

#[test]
fn registry_refuses_double_initialization() {
    let mut r = Registry::new();
    let a = r.register("#list-a").unwrap();
    let b = r.register("#list-b").unwrap();
    assert_ne!(a, b);
    assert_eq!(a.dom_id(), "cs-ew-1");
    assert_eq!(b.selector(), "#cs-ew-2");

    assert_eq!(
        r.register("#list-a").unwrap_err(),
        ExpanderError::AlreadyInitialized(a)
    );
    assert!(r.is_initialized(&"#list-a"));

    assert_eq!(r.unregister(&"#list-a"), Some(a));
    let again = r.register("#list-a").unwrap();
    assert_eq!(again.get(), 3);
    assert_eq!(r.len(), 2);
}

#[test]
fn state_snapshot_reflects_items() {
    let layout = grid_4x();
    let mut e = mounted(ExpanderOptions::new(), 6);
    e.toggle_item(Action::Increase, &layout);

    let s = e.state();
    assert_eq!(s.last_index, 6);
    assert_eq!(s.shown, 6);
    assert!(s.moving);
    assert_eq!(s.active_count(), 6);
    assert_eq!(s.items[4], ItemState::Transitioning(Motion::Reveal));
}
