//! Type alias table and display-name formatting.
//!
//! Factory names are built as `member(friendly)` where `friendly` is the short
//! display name of the tweened value type. Tooling lists these names, so the
//! formatting here is part of the public surface.

use crate::types::TypeHandle;

/// Namespace shared by engine value types; elided from display names.
pub const ENGINE_NAMESPACE: &str = "vizij::";

const PRIMITIVE_ALIASES: &[(&str, &str)] = &[
    ("f32", "float"),
    ("i32", "int"),
    ("bool", "bool"),
    ("String", "string"),
];

/// Short display name for a type.
pub fn friendly_name(ty: TypeHandle) -> String {
    friendly_type_path(ty.type_path())
}

/// [`friendly_name`] over a raw type path.
pub fn friendly_type_path(path: &str) -> String {
    let aliased = PRIMITIVE_ALIASES
        .iter()
        .find(|(raw, _)| *raw == path)
        .map(|(_, alias)| *alias)
        .unwrap_or(path);
    aliased
        .strip_prefix(ENGINE_NAMESPACE)
        .unwrap_or(aliased)
        .to_string()
}

/// `member(friendly)`, the unique-per-target key a factory is registered under.
pub fn factory_name(member: &str, tweened: TypeHandle) -> String {
    format!("{}({})", member, friendly_name(tweened))
}

/// Text before the first `.`; binding paths are indexed by this segment only.
pub fn first_path_segment(path: &str) -> &str {
    match path.find('.') {
        Some(idx) => &path[..idx],
        None => path,
    }
}
