use super::*;

fn elements(n: usize) -> Vec<Element> {
    (0..n)
        .map(|i| Element::at(format!("e{i}"), i as f64, 0.0))
        .collect()
}

#[test]
fn default_order_is_layer_order() {
    let els = elements(3);
    let refs: Vec<&Element> = els.iter().collect();
    let plan = arrange(&refs, &[], &ModeFlags::default(), &ModeSettings::default());

    assert_eq!(plan.source, OrderSource::Layer);
    assert_eq!(plan.steps, vec![OrderStep::Draw(0), OrderStep::Draw(1), OrderStep::Draw(2)]);
}

#[test]
fn proximity_pauses_after_every_step_but_not_at_the_end() {
    let els = elements(6);
    let refs: Vec<&Element> = els.iter().collect();
    let modes = ModeFlags {
        proximity_mode: true,
        ..ModeFlags::default()
    };
    let mut settings = ModeSettings::default();
    settings.proximity_mode.step = 3;
    settings.proximity_mode.delay = 4;
    let plan = arrange(&refs, &[], &modes, &settings);

    assert_eq!(plan.source, OrderSource::Proximity);
    assert_eq!(
        plan.steps,
        vec![
            OrderStep::Draw(0),
            OrderStep::Draw(1),
            OrderStep::Draw(2),
            OrderStep::Delay(4),
            OrderStep::Draw(3),
            OrderStep::Draw(4),
            OrderStep::Draw(5),
        ]
    );
}

#[test]
fn spatial_animation_suppresses_proximity_pauses() {
    let els = elements(6);
    let refs: Vec<&Element> = els.iter().collect();
    let modes = ModeFlags {
        proximity_mode: true,
        rotate_mode: true,
        ..ModeFlags::default()
    };
    let mut settings = ModeSettings::default();
    settings.proximity_mode.step = 2;
    let plan = arrange(&refs, &[], &modes, &settings);
    assert!(plan.steps.iter().all(|s| matches!(s, OrderStep::Draw(_))));
}

#[test]
fn chain_wins_over_proximity() {
    let els = elements(4);
    let refs: Vec<&Element> = els.iter().collect();
    let modes = ModeFlags {
        proximity_mode: true,
        chain_mode: true,
        ..ModeFlags::default()
    };
    let chain = vec![ChainItem::group(["e2", "e0"]), ChainItem::delay(5)];
    let plan = arrange(&refs, &chain, &modes, &ModeSettings::default());

    assert_eq!(plan.source, OrderSource::Chain);
    let order: Vec<&str> = plan.order.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(order, vec!["e2", "e0", "e1", "e3"]);
    assert_eq!(
        plan.steps,
        vec![
            OrderStep::Group { number: 1, members: 2 },
            OrderStep::Draw(0),
            OrderStep::Draw(1),
            OrderStep::Delay(5),
            OrderStep::Draw(2),
            OrderStep::Draw(3),
        ]
    );
}

#[test]
fn animated_chain_keeps_only_the_order() {
    let els = elements(3);
    let refs: Vec<&Element> = els.iter().collect();
    let modes = ModeFlags {
        chain_mode: true,
        rainbow_mode: true,
        ..ModeFlags::default()
    };
    let chain = vec![ChainItem::group(["e1"]), ChainItem::delay(5)];
    let plan = arrange(&refs, &chain, &modes, &ModeSettings::default());
    assert_eq!(plan.steps, vec![OrderStep::Draw(0), OrderStep::Draw(1), OrderStep::Draw(2)]);
    assert_eq!(plan.order[0].id, "e1");
}
