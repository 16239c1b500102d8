use vizij_test_fixtures::scene::{DemoTween, Widget};
use vizij_test_fixtures::{clips, providers};
use vizij_tween_core::{ClipGroup, ClipValue, TweenClip, TweenRegistry, Value};

fn built() -> TweenRegistry {
    let registry = TweenRegistry::default();
    registry.rebuild(&providers::all());
    registry
}

#[test]
fn every_clip_fixture_parses() {
    for key in clips::keys() {
        let group: ClipGroup = clips::load(&key).unwrap();
        assert!(!group.clips.is_empty(), "{key}");
    }
}

#[test]
fn hidden_state_skips_commands_the_widget_lacks() {
    let registry = built();
    let group: ClipGroup = clips::load("widget-hidden").unwrap();
    assert_eq!(group.name, "Hidden");
    assert_eq!(group.delay, 0.1);

    let mut widget = Widget::default();
    let tweens = group.play(&registry, &mut widget);
    // Spin(float) has no factory for widgets.
    assert_eq!(tweens.len(), 2);
    assert_eq!(widget.started, 2);
    assert_eq!(group.span(), 1.0);
}

#[test]
fn visible_state_coerces_authored_values() {
    let registry = built();
    let group: ClipGroup = clips::load("widget-visible").unwrap();
    let mut widget = Widget::default();
    let tweens = group.play(&registry, &mut widget);

    let targets: Vec<Value> = tweens
        .iter()
        .map(|t| t.downcast_ref::<DemoTween>().unwrap().to.clone())
        .collect();
    assert_eq!(
        targets,
        vec![
            Value::Float(1.0),
            Value::Vec3([2.0, 2.0, 2.0]),
            Value::Color([1.0, 0.5, 0.0, 1.0]),
        ]
    );
}

#[test]
fn clip_built_in_code_round_trips_through_json() {
    let group = ClipGroup::new("Pressed")
        .with(TweenClip::new("Press(float)", Value::Float(0.9), 0.1))
        .with(TweenClip::new(
            "Tint(Color)",
            ClipValue::new().with(Value::Color([1.0, 0.0, 0.0, 1.0])),
            0.1,
        ));
    let json = serde_json::to_string(&group).unwrap();
    let back: ClipGroup = serde_json::from_str(&json).unwrap();
    assert_eq!(back, group);
}
