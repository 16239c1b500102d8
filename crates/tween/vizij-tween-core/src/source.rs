//! Sources of destination values.
//!
//! The dispatcher never guesses a value's type: it asks the source for
//! exactly the kind the resolved factory declares. Plain values answer via
//! coercion; [`ClipValue`] carries one slot per kind as authored in clip data.

use serde::{Deserialize, Serialize};

use crate::value::{Value, ValueKind};

/// Something that can produce a value of a requested kind on demand.
pub trait ValueSource {
    fn value_for(&self, kind: ValueKind) -> Option<Value>;
}

impl ValueSource for Value {
    fn value_for(&self, kind: ValueKind) -> Option<Value> {
        self.coerce_to(kind)
    }
}

impl<T: ValueSource + ?Sized> ValueSource for &T {
    fn value_for(&self, kind: ValueKind) -> Option<Value> {
        (**self).value_for(kind)
    }
}

macro_rules! primitive_source {
    ($($ty:ty => $wrap:expr),* $(,)?) => {
        $(
            impl ValueSource for $ty {
                fn value_for(&self, kind: ValueKind) -> Option<Value> {
                    let wrap: fn(&$ty) -> Value = $wrap;
                    wrap(self).coerce_to(kind)
                }
            }
        )*
    };
}

primitive_source! {
    f32 => |v| Value::Float(*v),
    i32 => |v| Value::Int(*v),
    bool => |v| Value::Bool(*v),
    String => |v| Value::Text(v.clone()),
    str => |v| Value::Text(v.to_string()),
    [f32; 2] => |v| Value::Vec2(*v),
    [f32; 3] => |v| Value::Vec3(*v),
    [f32; 4] => |v| Value::Vec4(*v),
}

/// Authored destination value with one optional slot per kind.
///
/// Clip data is edited without knowing which factory a command will resolve
/// to, so several slots may be filled. The slot matching the requested kind
/// wins; otherwise the first populated slot (in [`ValueKind::ALL`] order)
/// that coerces is used.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub float: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub int: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bool: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vec2: Option<[f32; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vec3: Option<[f32; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vec4: Option<[f32; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quat: Option<[f32; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<[f32; 4]>,
}

impl ClipValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: store `value` in its slot.
    pub fn with(mut self, value: impl Into<Value>) -> Self {
        self.set(value.into());
        self
    }

    /// Store `value` in the slot for its kind, replacing what was there.
    pub fn set(&mut self, value: Value) {
        match value {
            Value::Float(v) => self.float = Some(v),
            Value::Int(v) => self.int = Some(v),
            Value::Bool(v) => self.bool = Some(v),
            Value::Text(v) => self.text = Some(v),
            Value::Vec2(v) => self.vec2 = Some(v),
            Value::Vec3(v) => self.vec3 = Some(v),
            Value::Vec4(v) => self.vec4 = Some(v),
            Value::Quat(v) => self.quat = Some(v),
            Value::Color(v) => self.color = Some(v),
        }
    }

    /// The value stored for exactly `kind`, without coercion.
    pub fn slot(&self, kind: ValueKind) -> Option<Value> {
        match kind {
            ValueKind::Float => self.float.map(Value::Float),
            ValueKind::Int => self.int.map(Value::Int),
            ValueKind::Bool => self.bool.map(Value::Bool),
            ValueKind::Text => self.text.clone().map(Value::Text),
            ValueKind::Vec2 => self.vec2.map(Value::Vec2),
            ValueKind::Vec3 => self.vec3.map(Value::Vec3),
            ValueKind::Vec4 => self.vec4.map(Value::Vec4),
            ValueKind::Quat => self.quat.map(Value::Quat),
            ValueKind::Color => self.color.map(Value::Color),
        }
    }

    pub fn is_empty(&self) -> bool {
        ValueKind::ALL.iter().all(|k| self.slot(*k).is_none())
    }
}

impl ValueSource for ClipValue {
    fn value_for(&self, kind: ValueKind) -> Option<Value> {
        self.slot(kind).or_else(|| {
            ValueKind::ALL
                .iter()
                .filter_map(|k| self.slot(*k))
                .find_map(|v| v.coerce_to(kind))
        })
    }
}

impl From<Value> for ClipValue {
    fn from(value: Value) -> Self {
        ClipValue::new().with(value)
    }
}
