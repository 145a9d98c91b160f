use expander::{Action, Expander, ExpanderOptions, FlowLayout, Registry, Size, plan_controls};

fn main() {
    // A 4-column grid of 120x80 cards in a 480px wide container.
    let layout = FlowLayout::new(
        Size {
            width: 120.0,
            height: 80.0,
        },
        480.0,
    );

    let mut registry = Registry::new();
    let id = registry.register("#gallery").expect("fresh container");

    let options = ExpanderOptions::new()
        .with_show(4)
        .with_increase(3)
        .with_toggle(true)
        .with_resetable(true);
    let controls = plan_controls(&options, |_| false).expect("default controls");
    println!("{id}: controls={controls:?}");

    let mut e = Expander::new(options, 10).expect("valid options");
    let settle = e.initialize(&layout);
    println!("settling {} items", settle.len());
    e.finish_all();

    for action in [Action::Increase, Action::Increase, Action::Toggle, Action::Toggle] {
        let ts = e.toggle_item(action, &layout);
        for t in &ts {
            println!(
                "  {:?} item {} {:?} -> {:?}",
                t.motion,
                t.index(),
                t.from,
                t.to
            );
        }
        // A host would play these and report each completion; finish them all at once here.
        e.finish_all();
        println!(
            "{action}: last_index={} active={:?}",
            e.last_index(),
            e.get_active_items()
        );
    }
}
