//! Coercion between value kinds.
//!
//! A factory accepts exactly one kind, while callers frequently hold a value
//! of a neighbouring kind (a float for a colour fade, a Vec3 for a Vec4
//! target). Rules:
//! - Float/Int convert between each other (float -> int truncates)
//! - Bool -> 1 / 0; numeric -> Bool is "non-zero"
//! - vector-like values -> scalar take the first component
//! - scalar -> VecN broadcasts, VecN -> VecM pads with zeros or truncates
//! - padding into Quat defaults `w` to 1, padding into Color defaults alpha to 1
//! - Text only converts to Text

use crate::value::{Value, ValueKind};

/// Attempt to coerce `v` into `kind`. `None` when no rule applies.
pub fn coerce(v: &Value, kind: ValueKind) -> Option<Value> {
    if v.kind() == kind {
        return Some(v.clone());
    }
    match kind {
        ValueKind::Float => to_float(v).map(Value::Float),
        ValueKind::Int => to_float(v).map(|f| Value::Int(f as i32)),
        ValueKind::Bool => to_bool(v).map(Value::Bool),
        ValueKind::Text => None,
        ValueKind::Vec2 => to_array::<2>(v, [0.0; 2]).map(Value::Vec2),
        ValueKind::Vec3 => to_array::<3>(v, [0.0; 3]).map(Value::Vec3),
        ValueKind::Vec4 => to_array::<4>(v, [0.0; 4]).map(Value::Vec4),
        ValueKind::Quat => to_quat(v).map(Value::Quat),
        ValueKind::Color => to_color(v).map(Value::Color),
    }
}

/// Scalar view of a value.
pub fn to_float(v: &Value) -> Option<f32> {
    match v {
        Value::Float(f) => Some(*f),
        Value::Int(i) => Some(*i as f32),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Text(_) => None,
        _ => components(v).and_then(|c| c.first().copied()),
    }
}

fn to_bool(v: &Value) -> Option<bool> {
    match v {
        Value::Bool(b) => Some(*b),
        Value::Float(f) => Some(*f != 0.0),
        Value::Int(i) => Some(*i != 0),
        _ => None,
    }
}

/// Components of vector-like values; `None` for scalars and text.
pub fn components(v: &Value) -> Option<&[f32]> {
    match v {
        Value::Vec2(a) => Some(&a[..]),
        Value::Vec3(a) => Some(&a[..]),
        Value::Vec4(a) | Value::Quat(a) | Value::Color(a) => Some(&a[..]),
        _ => None,
    }
}

fn to_array<const N: usize>(v: &Value, pad: [f32; N]) -> Option<[f32; N]> {
    if let Some(src) = components(v) {
        let mut out = pad;
        for (slot, c) in out.iter_mut().zip(src) {
            *slot = *c;
        }
        return Some(out);
    }
    match v {
        Value::Text(_) => None,
        _ => to_float(v).map(|s| [s; N]),
    }
}

fn to_quat(v: &Value) -> Option<[f32; 4]> {
    // No sensible rotation from a bare scalar.
    components(v)?;
    to_array::<4>(v, [0.0, 0.0, 0.0, 1.0])
}

fn to_color(v: &Value) -> Option<[f32; 4]> {
    match v {
        Value::Float(_) | Value::Int(_) | Value::Bool(_) => {
            let s = to_float(v)?;
            Some([s, s, s, 1.0])
        }
        _ => to_array::<4>(v, [0.0, 0.0, 0.0, 1.0]),
    }
}
