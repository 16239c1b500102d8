//! Demo provider modules.
//!
//! [`all`] is the candidate set most tests rebuild from. It deliberately
//! includes an unflagged module, a duplicate `Fade(float)` for widgets and a
//! malformed declaration, next to the well-formed providers.

use std::sync::Arc;

use vizij_tween_core::types::F32;
use vizij_tween_core::{
    CallArgs, FunctionDecl, ProviderModule, ReturnKind, TweenError, TypeHandle, TypeInfo,
    ValueKind,
};

use crate::scene::{Button, Camera, DemoTween, Label, Widget, BUTTON, CAMERA, WIDGET};

pub static WIDGET_TWEENS: TypeInfo = TypeInfo::new("demo::WidgetTweens");
pub static BUTTON_TWEENS: TypeInfo = TypeInfo::new("demo::ButtonTweens");
pub static LABEL_TWEENS: TypeInfo = TypeInfo::new("demo::LabelTweens");
pub static EXTRA_TWEENS: TypeInfo = TypeInfo::new("demo::ExtraTweens");
pub static HIDDEN_TWEENS: TypeInfo = TypeInfo::new("demo::HiddenTweens");
pub static BROKEN_TWEENS: TypeInfo = TypeInfo::new("demo::BrokenTweens");

/// Static factories for every widget: Fade, Move, Tint, Show.
pub fn widget_tweens() -> ProviderModule {
    ProviderModule::new(TypeHandle::of(&WIDGET_TWEENS))
        .with(
            FunctionDecl::static_triple::<Widget, _>("Fade", ValueKind::Float, |w, to, d| {
                w.started += 1;
                DemoTween::boxed("WidgetTweens::Fade", to, d)
            })
            .with_binding_path("opacity"),
        )
        .with(
            FunctionDecl::static_triple::<Widget, _>("Move", ValueKind::Vec3, |w, to, d| {
                w.started += 1;
                DemoTween::boxed("WidgetTweens::Move", to, d)
            })
            .with_binding_path("position.x"),
        )
        .with(
            FunctionDecl::static_triple::<Widget, _>("Tint", ValueKind::Color, |w, to, d| {
                w.started += 1;
                DemoTween::boxed("WidgetTweens::Tint", to, d)
            })
            .with_binding_path("tint"),
        )
        .with(FunctionDecl::static_triple::<Widget, _>(
            "Show",
            ValueKind::Bool,
            |w, to, d| {
                w.started += 1;
                DemoTween::boxed("WidgetTweens::Show", to, d)
            },
        ))
        .with(helper())
}

/// Button overrides `Fade(float)` and adds `Press(float)`.
pub fn button_tweens() -> ProviderModule {
    ProviderModule::new(TypeHandle::of(&BUTTON_TWEENS))
        .with(
            FunctionDecl::static_triple::<Button, _>("Fade", ValueKind::Float, |b, to, d| {
                b.widget.started += 1;
                DemoTween::boxed("ButtonTweens::Fade", to, d)
            })
            .with_binding_path("opacity"),
        )
        .with(
            FunctionDecl::static_triple::<Button, _>("Press", ValueKind::Float, |b, to, d| {
                b.widget.started += 1;
                DemoTween::boxed("ButtonTweens::Press", to, d)
            })
            .with_binding_path("pressed_scale"),
        )
}

pub fn label_tweens() -> ProviderModule {
    ProviderModule::new(TypeHandle::of(&LABEL_TWEENS)).with(
        FunctionDecl::static_triple::<Label, _>("Type", ValueKind::Text, |l, to, d| {
            l.widget.started += 1;
            DemoTween::boxed("LabelTweens::Type", to, d)
        })
        .with_binding_path("text"),
    )
}

/// The camera provides its own method factory.
pub fn camera_tweens() -> ProviderModule {
    ProviderModule::new(TypeHandle::of(&CAMERA)).with(
        FunctionDecl::instance_pair::<Camera, _>("Zoom", ValueKind::Float, |c, to, d| {
            c.started += 1;
            DemoTween::boxed("Camera::Zoom", to, d)
        })
        .with_binding_path("fov.value"),
    )
}

/// Second `Fade(float)` for widgets; loses to [`widget_tweens`].
pub fn extra_tweens() -> ProviderModule {
    ProviderModule::new(TypeHandle::of(&EXTRA_TWEENS)).with(
        FunctionDecl::static_triple::<Widget, _>("Fade", ValueKind::Float, |w, to, d| {
            w.started += 1;
            DemoTween::boxed("ExtraTweens::Fade", to, d)
        })
        .with_binding_path("alpha"),
    )
}

/// Not flagged as a provider; ignored by the default predicate.
pub fn hidden_tweens() -> ProviderModule {
    ProviderModule::unflagged(TypeHandle::of(&HIDDEN_TWEENS)).with(
        FunctionDecl::static_triple::<Widget, _>("Secret", ValueKind::Float, |_, to, d| {
            DemoTween::boxed("HiddenTweens::Secret", to, d)
        }),
    )
}

/// Declares a tween-returning function without a value parameter.
pub fn broken_tweens() -> ProviderModule {
    ProviderModule::new(TypeHandle::of(&BROKEN_TWEENS)).with(FunctionDecl::raw(
        "Pulse",
        true,
        vec![TypeHandle::of(&WIDGET)],
        ReturnKind::Tween,
        Arc::new(|_: CallArgs<'_>| {
            Err(TweenError::Config {
                reason: "never indexed".into(),
            })
        }),
    ))
}

/// A non-tween function on a provider; never indexed.
fn helper() -> FunctionDecl {
    FunctionDecl::raw(
        "Reset",
        true,
        vec![
            TypeHandle::of(&WIDGET),
            TypeHandle::of(&F32),
            TypeHandle::of(&F32),
        ],
        ReturnKind::Other,
        Arc::new(|_: CallArgs<'_>| {
            Err(TweenError::Config {
                reason: "not a tween".into(),
            })
        }),
    )
}

/// Factory with a static target declared as an instance method, so its
/// declared arity (3) disagrees with the `InstancePair` shape.
pub fn misdeclared_tweens() -> ProviderModule {
    ProviderModule::new(TypeHandle::of(&BUTTON)).with(FunctionDecl::raw(
        "Wobble",
        false,
        vec![
            TypeHandle::of(&F32),
            TypeHandle::of(&F32),
            TypeHandle::of(&F32),
        ],
        ReturnKind::Tween,
        Arc::new(|_: CallArgs<'_>| {
            Err(TweenError::Config {
                reason: "unreachable".into(),
            })
        }),
    ))
}

/// Well-formed providers in declaration order.
pub fn well_formed() -> Vec<ProviderModule> {
    vec![
        widget_tweens(),
        button_tweens(),
        label_tweens(),
        camera_tweens(),
    ]
}

/// Everything, including the unflagged, duplicate and malformed modules.
pub fn all() -> Vec<ProviderModule> {
    let mut modules = well_formed();
    modules.extend([extra_tweens(), hidden_tweens(), broken_tweens()]);
    modules
}
