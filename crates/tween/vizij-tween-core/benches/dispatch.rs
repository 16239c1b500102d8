use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vizij_test_fixtures::providers;
use vizij_test_fixtures::scene::{Button, Widget};
use vizij_tween_core::{ClipValue, Reflect, TweenRegistry};

fn rebuild_benchmark(c: &mut Criterion) {
    let modules = providers::all();
    let registry = TweenRegistry::default();
    c.bench_function("rebuild_all_providers", |b| {
        b.iter(|| black_box(registry.rebuild(black_box(&modules))))
    });
}

fn dispatch_benchmark(c: &mut Criterion) {
    let registry = TweenRegistry::default();
    registry.rebuild(&providers::all());
    let mut group = c.benchmark_group("dispatch");

    let mut widget = Widget::default();
    group.bench_function("by_name_direct", |b| {
        b.iter(|| registry.create_by_name(&mut widget, black_box("Fade(float)"), &0.5f32, 1.0))
    });

    let mut button = Button::default();
    group.bench_function("by_path_inherited", |b| {
        b.iter(|| registry.create_by_path(&mut button, black_box("tint"), &0.5f32, 1.0))
    });

    let value = ClipValue::new().with(1i32);
    group.bench_function("clip_value_coerced", |b| {
        b.iter(|| registry.create_by_name(&mut widget, black_box("Move(Vec3)"), &value, 1.0))
    });

    group.bench_function("miss", |b| {
        b.iter(|| registry.create_by_name(&mut widget, black_box("Nope(float)"), &0.5f32, 1.0))
    });
    group.finish();
}

fn enumeration_benchmark(c: &mut Criterion) {
    let registry = TweenRegistry::default();
    registry.rebuild(&providers::all());
    let ty = Button::type_handle();
    c.bench_function("names_for_cached", |b| {
        b.iter(|| black_box(registry.names_for(black_box(ty))))
    });
}

criterion_group!(
    benches,
    rebuild_benchmark,
    dispatch_benchmark,
    enumeration_benchmark
);
criterion_main!(benches);
