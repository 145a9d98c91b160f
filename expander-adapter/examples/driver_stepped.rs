use expander::{Action, Expander, ExpanderOptions, FlowLayout, Size};
use expander_adapter::{Driver, StyleUpdate};

fn main() {
    // Example: a timer-driven host with no native transitions.
    //
    // An adapter would:
    // - forward control activations to on_action
    // - call tick(now_ms) from a timer / frame loop
    // - write each StyleUpdate to the real item (inline position, hidden class)
    let layout = FlowLayout::new(
        Size {
            width: 100.0,
            height: 50.0,
        },
        400.0,
    );
    let options = ExpanderOptions::new().with_animation_duration(0.2);
    let mut d = Driver::new(Expander::new(options, 10).expect("valid options"));
    d.initialize(&layout, 0);
    d.finish(|_| {});

    let started = d.on_action(Action::Increase, &layout, 1_000);
    println!("started={started}");

    let mut now_ms = 1_000u64;
    loop {
        let animating = d.tick(now_ms, |u| match u {
            StyleUpdate::Place {
                index, position, ..
            } => println!("t={now_ms} place #{index} at {position:?}"),
            StyleUpdate::Clear { index, hide } => {
                println!("t={now_ms} clear #{index} hide={hide}")
            }
        });
        if !animating {
            break;
        }
        now_ms += 10;
    }

    println!(
        "done: last_index={} moving={}",
        d.expander().last_index(),
        d.expander().is_moving()
    );
}
