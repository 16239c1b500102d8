//! Runtime type descriptors for tween targets and tweened values.
//!
//! Rust has no class inheritance, so the ancestry that factory inheritance
//! relies on is declared explicitly: every participating type owns a
//! `static TypeInfo` naming its canonical path and (optionally) its base.
//! A [`TypeHandle`] is a cheap `Copy` reference to one of those statics and
//! is what the registry keys its maps with.
//!
//! ```text
//! vizij::Component
//!   └── demo::Widget
//!         └── demo::Button
//! ```

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Static description of a type participating in tween dispatch.
#[derive(Debug)]
pub struct TypeInfo {
    /// Canonical, fully qualified path (e.g. `"vizij::Vec3"`, `"demo::Widget"`).
    pub type_path: &'static str,
    /// Nearest ancestor, if any.
    pub base: Option<&'static TypeInfo>,
}

impl TypeInfo {
    pub const fn new(type_path: &'static str) -> Self {
        Self {
            type_path,
            base: None,
        }
    }

    pub const fn with_base(type_path: &'static str, base: &'static TypeInfo) -> Self {
        Self {
            type_path,
            base: Some(base),
        }
    }
}

/// Handle to a [`TypeInfo`] static. Identity is the canonical type path.
#[derive(Clone, Copy)]
pub struct TypeHandle(&'static TypeInfo);

impl TypeHandle {
    #[inline]
    pub const fn of(info: &'static TypeInfo) -> Self {
        TypeHandle(info)
    }

    #[inline]
    pub fn type_path(self) -> &'static str {
        self.0.type_path
    }

    #[inline]
    pub fn base(self) -> Option<TypeHandle> {
        self.0.base.map(TypeHandle)
    }

    /// Ancestors from nearest to furthest, excluding `self`.
    pub fn ancestors(self) -> Ancestors {
        Ancestors { next: self.base() }
    }

    /// True when `self` is `other` or descends from it.
    pub fn is_a(self, other: TypeHandle) -> bool {
        self == other || self.ancestors().any(|a| a == other)
    }
}

impl From<&'static TypeInfo> for TypeHandle {
    fn from(info: &'static TypeInfo) -> Self {
        TypeHandle(info)
    }
}

impl PartialEq for TypeHandle {
    fn eq(&self, other: &Self) -> bool {
        self.0.type_path == other.0.type_path
    }
}

impl Eq for TypeHandle {}

impl Hash for TypeHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.type_path.hash(state);
    }
}

impl PartialOrd for TypeHandle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeHandle {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.type_path.cmp(other.0.type_path)
    }
}

impl fmt::Debug for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHandle({})", self.0.type_path)
    }
}

impl fmt::Display for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.type_path)
    }
}

/// Iterator over a type's ancestor chain, nearest first.
#[derive(Clone, Debug)]
pub struct Ancestors {
    next: Option<TypeHandle>,
}

impl Iterator for Ancestors {
    type Item = TypeHandle;

    fn next(&mut self) -> Option<TypeHandle> {
        let cur = self.next?;
        self.next = cur.base();
        Some(cur)
    }
}

// Engine roots and primitives.
pub static COMPONENT: TypeInfo = TypeInfo::new("vizij::Component");

pub static F32: TypeInfo = TypeInfo::new("f32");
pub static I32: TypeInfo = TypeInfo::new("i32");
pub static BOOL: TypeInfo = TypeInfo::new("bool");
pub static STRING: TypeInfo = TypeInfo::new("String");
pub static VEC2: TypeInfo = TypeInfo::new("vizij::Vec2");
pub static VEC3: TypeInfo = TypeInfo::new("vizij::Vec3");
pub static VEC4: TypeInfo = TypeInfo::new("vizij::Vec4");
pub static QUAT: TypeInfo = TypeInfo::new("vizij::Quat");
pub static COLOR: TypeInfo = TypeInfo::new("vizij::Color");

/// A live object that tweens can be created against.
///
/// Subtypes embed their base by composition; `view_as_mut` walks that
/// composition so a factory registered for an ancestor can still reach the
/// ancestor part of a subtype instance.
pub trait TweenTarget: Any {
    /// Dynamic type of this instance.
    fn target_type(&self) -> TypeHandle;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Borrow the part of `self` that is an instance of `ty`.
    fn view_as_mut(&mut self, ty: TypeHandle) -> Option<&mut dyn Any> {
        if ty == self.target_type() {
            Some(self.as_any_mut())
        } else {
            None
        }
    }
}

/// Static type lookup for concrete Rust types.
pub trait Reflect {
    fn type_handle() -> TypeHandle;
}

/// Implement [`TweenTarget`] and [`Reflect`] for a concrete type.
///
/// ```ignore
/// impl_tween_target!(Widget, WIDGET);
/// impl_tween_target!(Button, BUTTON, base: widget);
/// ```
#[macro_export]
macro_rules! impl_tween_target {
    ($ty:ty, $info:path) => {
        impl $crate::Reflect for $ty {
            fn type_handle() -> $crate::TypeHandle {
                $crate::TypeHandle::of(&$info)
            }
        }

        impl $crate::TweenTarget for $ty {
            fn target_type(&self) -> $crate::TypeHandle {
                $crate::TypeHandle::of(&$info)
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }
        }
    };
    ($ty:ty, $info:path, base: $field:ident) => {
        impl $crate::Reflect for $ty {
            fn type_handle() -> $crate::TypeHandle {
                $crate::TypeHandle::of(&$info)
            }
        }

        impl $crate::TweenTarget for $ty {
            fn target_type(&self) -> $crate::TypeHandle {
                $crate::TypeHandle::of(&$info)
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }

            fn view_as_mut(
                &mut self,
                ty: $crate::TypeHandle,
            ) -> Option<&mut dyn ::std::any::Any> {
                if ty == $crate::TypeHandle::of(&$info) {
                    return Some(self);
                }
                $crate::TweenTarget::view_as_mut(&mut self.$field, ty)
            }
        }
    };
}
