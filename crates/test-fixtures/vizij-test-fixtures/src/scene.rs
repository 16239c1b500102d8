//! Demo scene types used as tween targets.
//!
//! ```text
//! vizij::Component
//!   └── demo::Widget
//!         ├── demo::Button
//!         ├── demo::Label
//!         └── demo::Panel   (no factories of its own)
//! demo::Camera              (not a component)
//! ```

use std::any::Any;

use vizij_tween_core::{impl_tween_target, Tween, TypeInfo, Value, COMPONENT};

pub static WIDGET: TypeInfo = TypeInfo::with_base("demo::Widget", &COMPONENT);
pub static BUTTON: TypeInfo = TypeInfo::with_base("demo::Button", &WIDGET);
pub static LABEL: TypeInfo = TypeInfo::with_base("demo::Label", &WIDGET);
pub static PANEL: TypeInfo = TypeInfo::with_base("demo::Panel", &WIDGET);
pub static CAMERA: TypeInfo = TypeInfo::new("demo::Camera");

#[derive(Clone, Debug, PartialEq)]
pub struct Widget {
    pub opacity: f32,
    pub position: [f32; 3],
    pub tint: [f32; 4],
    pub visible: bool,
    /// Incremented by every factory that ran against this widget.
    pub started: u32,
}

impl Default for Widget {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            position: [0.0; 3],
            tint: [1.0; 4],
            visible: true,
            started: 0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Button {
    pub widget: Widget,
    pub pressed_scale: f32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Label {
    pub widget: Widget,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Panel {
    pub widget: Widget,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub fov: f32,
    pub started: u32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov: 60.0,
            started: 0,
        }
    }
}

impl_tween_target!(Widget, WIDGET);
impl_tween_target!(Button, BUTTON, base: widget);
impl_tween_target!(Label, LABEL, base: widget);
impl_tween_target!(Panel, PANEL, base: widget);
impl_tween_target!(Camera, CAMERA);

/// Tween produced by every demo factory. Records what it was created with.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoTween {
    /// `provider::member` of the factory that created it.
    pub factory: &'static str,
    pub to: Value,
    pub duration: f32,
    pub alive: bool,
}

impl DemoTween {
    pub fn boxed(factory: &'static str, to: Value, duration: f32) -> Box<dyn Tween> {
        Box::new(Self {
            factory,
            to,
            duration,
            alive: true,
        })
    }
}

impl Tween for DemoTween {
    fn duration(&self) -> f32 {
        self.duration
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn kill(&mut self) {
        self.alive = false;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
