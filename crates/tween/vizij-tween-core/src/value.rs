//! Value: destination values handed to tween factories.
//! All vector-like data is f32.

use serde::{Deserialize, Serialize};

use crate::types::{TypeHandle, BOOL, COLOR, F32, I32, QUAT, STRING, VEC2, VEC3, VEC4};

/// Kind of an animatable value. Every factory declares exactly one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Float,
    Int,
    Bool,
    Text,
    Vec2,
    Vec3,
    Vec4,
    Quat,
    Color,
}

impl ValueKind {
    pub const ALL: [ValueKind; 9] = [
        ValueKind::Float,
        ValueKind::Int,
        ValueKind::Bool,
        ValueKind::Text,
        ValueKind::Vec2,
        ValueKind::Vec3,
        ValueKind::Vec4,
        ValueKind::Quat,
        ValueKind::Color,
    ];

    /// Runtime type backing this kind.
    pub fn type_handle(self) -> TypeHandle {
        match self {
            ValueKind::Float => TypeHandle::of(&F32),
            ValueKind::Int => TypeHandle::of(&I32),
            ValueKind::Bool => TypeHandle::of(&BOOL),
            ValueKind::Text => TypeHandle::of(&STRING),
            ValueKind::Vec2 => TypeHandle::of(&VEC2),
            ValueKind::Vec3 => TypeHandle::of(&VEC3),
            ValueKind::Vec4 => TypeHandle::of(&VEC4),
            ValueKind::Quat => TypeHandle::of(&QUAT),
            ValueKind::Color => TypeHandle::of(&COLOR),
        }
    }

    /// Inverse of [`ValueKind::type_handle`]; `None` for non-animatable types.
    pub fn from_type(ty: TypeHandle) -> Option<ValueKind> {
        Self::ALL.into_iter().find(|k| k.type_handle() == ty)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Value {
    /// Scalar float
    Float(f32),

    /// Signed integer (step)
    Int(i32),

    /// Boolean (step)
    Bool(bool),

    /// Text; step-only
    Text(String),

    Vec2([f32; 2]),
    Vec3([f32; 3]),
    Vec4([f32; 4]),

    /// Quaternion (x, y, z, w)
    Quat([f32; 4]),

    /// RGBA color (linear by convention)
    Color([f32; 4]),
}

impl Value {
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Float(_) => ValueKind::Float,
            Value::Int(_) => ValueKind::Int,
            Value::Bool(_) => ValueKind::Bool,
            Value::Text(_) => ValueKind::Text,
            Value::Vec2(_) => ValueKind::Vec2,
            Value::Vec3(_) => ValueKind::Vec3,
            Value::Vec4(_) => ValueKind::Vec4,
            Value::Quat(_) => ValueKind::Quat,
            Value::Color(_) => ValueKind::Color,
        }
    }

    /// Convert into `kind` using the rules in [`crate::coercion`].
    pub fn coerce_to(&self, kind: ValueKind) -> Option<Value> {
        crate::coercion::coerce(self, kind)
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}
