use std::sync::Arc;

use vizij_test_fixtures::providers::{self, WIDGET_TWEENS};
use vizij_test_fixtures::scene::{Button, Panel, Widget, BUTTON, CAMERA, LABEL, PANEL, WIDGET};
use vizij_tween_core::{
    CollisionKind, Config, ProviderModule, Reflect, ScanReport, TweenError, TweenRegistry,
    TypeHandle, ValueKind,
};

fn built() -> TweenRegistry {
    let registry = TweenRegistry::default();
    registry.rebuild(&providers::all());
    registry
}

#[test]
fn duplicate_name_keeps_first_registration() {
    let registry = built();
    let fade = registry
        .resolve_by_name(Widget::type_handle(), "Fade(float)")
        .expect("fade");
    assert_eq!(fade.provider, TypeHandle::of(&WIDGET_TWEENS));

    let report = registry.last_report();
    let dup = report
        .collisions
        .iter()
        .find(|c| c.kind == CollisionKind::Name)
        .expect("duplicate reported");
    assert_eq!(dup.key, "Fade(float)");
    assert_eq!(dup.kept, "demo::WidgetTweens::Fade");
    assert_eq!(dup.dropped, "demo::ExtraTweens::Fade");

    // The losing registration's binding path never made it in.
    assert!(registry
        .resolve_by_path(Widget::type_handle(), "alpha")
        .is_none());
}

#[test]
fn broken_and_unflagged_providers_do_not_stop_the_scan() {
    let registry = built();
    let report = registry.last_report();
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].member, "Pulse");
    assert!(matches!(
        report.skipped[0].reason,
        TweenError::MalformedProvider { .. }
    ));
    // hidden module is not a provider
    assert_eq!(report.providers, 6);
    assert!(registry
        .resolve_by_name(Widget::type_handle(), "Secret(float)")
        .is_none());
    // Fade, Move, Tint, Show, Button Fade, Press, Type, Zoom
    assert_eq!(report.registered, 8);
}

#[test]
fn subtype_inherits_and_overrides() {
    let registry = built();
    let button = Button::type_handle();

    let fade = registry.resolve_by_name(button, "Fade(float)").unwrap();
    assert_eq!(fade.target_type, button);

    let mv = registry.resolve_by_name(button, "Move(Vec3)").unwrap();
    assert_eq!(mv.target_type, Widget::type_handle());

    // Path entries follow the same rule.
    let by_path = registry.resolve_by_path(button, "opacity").unwrap();
    assert!(Arc::ptr_eq(&by_path, &fade));
    assert!(registry.resolve_by_path(button, "position").is_some());
}

#[test]
fn unregistered_subtype_is_initialized_on_demand() {
    let registry = built();
    let panel = Panel::type_handle();
    assert!(!registry.indexed_types().contains(&panel));
    assert_eq!(
        &*registry.names_for(panel),
        &["Fade(float)", "Move(Vec3)", "Show(bool)", "Tint(Color)"]
    );
    assert!(registry.indexed_types().contains(&panel));
}

#[test]
fn names_are_sorted_and_match_the_index() {
    let registry = built();
    for info in [&WIDGET, &BUTTON, &LABEL, &CAMERA] {
        let ty = TypeHandle::of(info);
        let names = registry.names_for(ty);
        let mut sorted = names.to_vec();
        sorted.sort();
        assert_eq!(names.to_vec(), sorted);
        for name in names.iter() {
            assert!(registry.resolve_by_name(ty, name).is_some(), "{ty}: {name}");
        }
    }
    assert_eq!(
        &*registry.names_for(TypeHandle::of(&BUTTON)),
        &[
            "Fade(float)",
            "Move(Vec3)",
            "Press(float)",
            "Show(bool)",
            "Tint(Color)",
        ]
    );
}

#[test]
fn binding_paths_index_only_the_first_segment() {
    let registry = built();
    let camera = TypeHandle::of(&CAMERA);
    assert!(registry.resolve_by_path(camera, "fov").is_some());
    assert!(registry.resolve_by_path(camera, "fov.value").is_none());

    let widget = Widget::type_handle();
    assert!(registry.resolve_by_path(widget, "position").is_some());
    assert!(registry.resolve_by_path(widget, "position.x").is_none());
}

#[test]
fn rebuild_replaces_rather_than_merges() {
    let registry = built();
    let label = TypeHandle::of(&LABEL);
    assert!(registry.resolve_by_name(label, "Type(string)").is_some());
    let before = registry.generation();

    registry.rebuild(&[providers::widget_tweens()]);
    assert_eq!(registry.generation(), before + 1);
    assert!(registry.resolve_by_name(label, "Type(string)").is_none());
    assert!(registry.resolve_by_name(label, "Fade(float)").is_some());
    assert!(registry.last_report().is_clean());
}

#[test]
fn component_types_follow_the_predicate() {
    let registry = built();
    let components: Vec<TypeHandle> = registry.indexed_component_types().to_vec();
    assert_eq!(
        components,
        vec![
            TypeHandle::of(&BUTTON),
            TypeHandle::of(&LABEL),
            TypeHandle::of(&WIDGET),
        ]
    );

    registry.rebuild_with(
        &providers::all(),
        ProviderModule::is_tween_provider,
        |ty| ty == TypeHandle::of(&CAMERA),
    );
    assert_eq!(
        registry.indexed_component_types().to_vec(),
        vec![TypeHandle::of(&CAMERA)]
    );
}

#[test]
fn custom_provider_predicate_can_admit_unflagged_modules() {
    let registry = TweenRegistry::default();
    registry.rebuild_with(&providers::all(), |_| true, |_| true);
    assert!(registry
        .resolve_by_name(Widget::type_handle(), "Secret(float)")
        .is_some());
}

#[test]
fn strict_config_never_grows_the_index() {
    let cfg = Config::from_json_str(&vizij_test_fixtures::configs::json("strict").unwrap()).unwrap();
    assert!(!cfg.lazy_type_init);
    let registry = TweenRegistry::new(cfg);
    registry.rebuild(&providers::all());

    let panel = TypeHandle::of(&PANEL);
    assert!(registry.resolve_by_name(panel, "Fade(float)").is_none());
    assert!(registry.names_for(panel).is_empty());
    assert!(!registry.indexed_types().contains(&panel));

    // Repeated queries for types outside the index leave the name cache empty.
    for ty in [
        panel,
        ValueKind::Float.type_handle(),
        ValueKind::Vec3.type_handle(),
    ] {
        assert!(registry.names_for(ty).is_empty());
        assert!(registry.names_for(ty).is_empty());
    }
    assert_eq!(registry.cached_name_lists(), 0);

    // Registered types are still filled from their ancestors.
    assert!(registry
        .resolve_by_name(TypeHandle::of(&BUTTON), "Show(bool)")
        .is_some());
}

#[test]
fn default_config_fixture_matches_default() {
    let cfg = Config::from_json_str(&vizij_test_fixtures::configs::json("default").unwrap()).unwrap();
    assert_eq!(cfg, Config::default());
}

#[test]
fn dispose_empties_the_registry() {
    let registry = built();
    registry.dispose();
    assert!(registry
        .resolve_by_name(Widget::type_handle(), "Fade(float)")
        .is_none());
    assert!(registry.indexed_component_types().is_empty());
    assert_eq!(*registry.last_report(), ScanReport::default());
}

#[test]
fn friendly_names_strip_the_engine_namespace() {
    let registry = TweenRegistry::default();
    assert_eq!(
        registry.friendly_name(vizij_tween_core::ValueKind::Vec3.type_handle()),
        "Vec3"
    );
    assert_eq!(
        registry.friendly_name(vizij_tween_core::ValueKind::Float.type_handle()),
        "float"
    );
    assert_eq!(registry.friendly_name(Widget::type_handle()), "demo::Widget");
}

#[test]
fn concurrent_lookups_survive_rebuilds() {
    let registry = built();
    let panel = Panel::type_handle();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..200 {
                    // Every published generation has widget factories, so an
                    // inherited lookup on the unseen subtype always resolves.
                    let fade = registry
                        .resolve_by_name(panel, "Fade(float)")
                        .expect("fade visible in every generation");
                    assert_eq!(fade.target_type, Widget::type_handle());
                    let names = registry.names_for(panel);
                    assert!(names.iter().any(|n| n == "Fade(float)"));
                }
            });
        }
        scope.spawn(|| {
            for i in 0..50 {
                if i % 2 == 0 {
                    registry.rebuild(&[providers::widget_tweens()]);
                } else {
                    registry.rebuild(&providers::all());
                }
            }
        });
    });

    assert_eq!(registry.generation(), 51);
    assert_eq!(registry.names_for(panel).len(), 4);
}
