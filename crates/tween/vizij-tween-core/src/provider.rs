//! Provider modules: the declared functions a rebuild scans.
//!
//! A provider module is the unit a host hands to `rebuild`: a type, a flag
//! saying whether it opts in as a tween provider, and the functions it
//! declares. Functions are described the way the scanner needs them
//! (member name, staticness, parameter types, return kind, optional binding
//! path) next to a type-erased [`Invoker`].
//!
//! Modules can be passed explicitly or submitted at link time with
//! [`submit_provider!`](crate::submit_provider) and gathered by
//! [`collect_submitted`].

use std::sync::Arc;

use crate::descriptor::InvocationShape;
use crate::error::TweenError;
use crate::tween::TweenHandle;
use crate::types::{Reflect, TweenTarget, TypeHandle, F32};
use crate::value::{Value, ValueKind};

/// What a declared function returns. Only `Tween` functions are indexed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReturnKind {
    Tween,
    Other,
}

/// Arguments for one factory call, shaped by the calling convention.
pub enum CallArgs<'a> {
    /// `(target, value, duration)` on a free function.
    Triple {
        target: &'a mut dyn TweenTarget,
        value: Value,
        duration: f32,
    },
    /// `(value, duration)` on the receiver itself.
    Pair {
        receiver: &'a mut dyn TweenTarget,
        value: Value,
        duration: f32,
    },
}

impl CallArgs<'_> {
    pub fn shape(&self) -> InvocationShape {
        match self {
            CallArgs::Triple { .. } => InvocationShape::StaticTriple,
            CallArgs::Pair { .. } => InvocationShape::InstancePair,
        }
    }
}

/// Type-erased factory callable.
pub type Invoker = Arc<dyn Fn(CallArgs<'_>) -> Result<TweenHandle, TweenError> + Send + Sync>;

/// One declared function of a provider module.
#[derive(Clone)]
pub struct FunctionDecl {
    pub member: String,
    pub is_static: bool,
    /// Declared parameter types in order. Static functions lead with the target.
    pub params: Vec<TypeHandle>,
    pub returns: ReturnKind,
    pub binding_path: Option<String>,
    pub invoker: Invoker,
}

impl FunctionDecl {
    /// Free function `fn(&mut T, value, duration) -> Tween`.
    pub fn static_triple<T, F>(member: impl Into<String>, kind: ValueKind, f: F) -> Self
    where
        T: TweenTarget + Reflect,
        F: Fn(&mut T, Value, f32) -> TweenHandle + Send + Sync + 'static,
    {
        let invoker: Invoker = Arc::new(move |args: CallArgs<'_>| match args {
            CallArgs::Triple {
                target,
                value,
                duration,
            } => {
                let target = downcast_target::<T>(target)?;
                Ok(f(target, expect_kind(value, kind)?, duration))
            }
            other => Err(wrong_shape(InvocationShape::StaticTriple, other.shape())),
        });
        Self {
            member: member.into(),
            is_static: true,
            params: vec![T::type_handle(), kind.type_handle(), TypeHandle::of(&F32)],
            returns: ReturnKind::Tween,
            binding_path: None,
            invoker,
        }
    }

    /// Method `fn(&mut self, value, duration) -> Tween` on the providing type.
    pub fn instance_pair<T, F>(member: impl Into<String>, kind: ValueKind, f: F) -> Self
    where
        T: TweenTarget + Reflect,
        F: Fn(&mut T, Value, f32) -> TweenHandle + Send + Sync + 'static,
    {
        let invoker: Invoker = Arc::new(move |args: CallArgs<'_>| match args {
            CallArgs::Pair {
                receiver,
                value,
                duration,
            } => {
                let receiver = downcast_target::<T>(receiver)?;
                Ok(f(receiver, expect_kind(value, kind)?, duration))
            }
            other => Err(wrong_shape(InvocationShape::InstancePair, other.shape())),
        });
        Self {
            member: member.into(),
            is_static: false,
            params: vec![kind.type_handle(), TypeHandle::of(&F32)],
            returns: ReturnKind::Tween,
            binding_path: None,
            invoker,
        }
    }

    /// Declaration with explicit parameters, for functions whose signature
    /// the typed constructors cannot express.
    pub fn raw(
        member: impl Into<String>,
        is_static: bool,
        params: Vec<TypeHandle>,
        returns: ReturnKind,
        invoker: Invoker,
    ) -> Self {
        Self {
            member: member.into(),
            is_static,
            params,
            returns,
            binding_path: None,
            invoker,
        }
    }

    /// Attach a binding path (only its first segment is indexed).
    pub fn with_binding_path(mut self, path: impl Into<String>) -> Self {
        self.binding_path = Some(path.into());
        self
    }

    pub fn shape(&self) -> InvocationShape {
        if self.is_static {
            InvocationShape::StaticTriple
        } else {
            InvocationShape::InstancePair
        }
    }

    /// Declared type of the destination-value parameter.
    pub fn value_param(&self) -> Option<TypeHandle> {
        self.params.get(if self.is_static { 1 } else { 0 }).copied()
    }
}

impl std::fmt::Debug for FunctionDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionDecl")
            .field("member", &self.member)
            .field("is_static", &self.is_static)
            .field("params", &self.params)
            .field("returns", &self.returns)
            .field("binding_path", &self.binding_path)
            .finish()
    }
}

fn downcast_target<T: TweenTarget + Reflect>(
    target: &mut dyn TweenTarget,
) -> Result<&mut T, TweenError> {
    let actual = target.target_type();
    target
        .view_as_mut(T::type_handle())
        .and_then(|any| any.downcast_mut::<T>())
        .ok_or_else(|| TweenError::TargetMismatch {
            expected: T::type_handle().type_path().to_string(),
            actual: actual.type_path().to_string(),
        })
}

fn expect_kind(value: Value, kind: ValueKind) -> Result<Value, TweenError> {
    if value.kind() == kind {
        Ok(value)
    } else {
        Err(TweenError::TargetMismatch {
            expected: kind.type_handle().type_path().to_string(),
            actual: value.kind().type_handle().type_path().to_string(),
        })
    }
}

fn wrong_shape(expected: InvocationShape, actual: InvocationShape) -> TweenError {
    TweenError::ShapeMismatch {
        name: String::new(),
        shape: format!("{expected:?}"),
        expected: expected.arity(),
        actual: actual.arity(),
    }
}

/// A type whose declared functions may be indexed.
#[derive(Clone, Debug)]
pub struct ProviderModule {
    pub module_type: TypeHandle,
    /// Opt-in flag; the default provider predicate reads this.
    pub tween_provider: bool,
    pub functions: Vec<FunctionDecl>,
}

impl ProviderModule {
    /// A module flagged as a tween provider.
    pub fn new(module_type: TypeHandle) -> Self {
        Self {
            module_type,
            tween_provider: true,
            functions: Vec::new(),
        }
    }

    /// A module that is not flagged; its functions are ignored by default.
    pub fn unflagged(module_type: TypeHandle) -> Self {
        Self {
            tween_provider: false,
            ..Self::new(module_type)
        }
    }

    pub fn with(mut self, function: FunctionDecl) -> Self {
        self.functions.push(function);
        self
    }

    #[inline]
    pub fn is_tween_provider(&self) -> bool {
        self.tween_provider
    }
}

/// Link-time submission of a provider module.
pub struct ProviderRegistration(pub fn() -> ProviderModule);

inventory::collect!(ProviderRegistration);

/// All modules submitted with [`submit_provider!`](crate::submit_provider).
pub fn collect_submitted() -> Vec<ProviderModule> {
    let mut modules = Vec::new();
    for reg in inventory::iter::<ProviderRegistration> {
        modules.push((reg.0)());
    }
    // Link order is unspecified; keep first-wins collisions reproducible.
    modules.sort_by_key(|m| m.module_type);
    modules
}

/// Submit a `fn() -> ProviderModule` for [`collect_submitted`].
#[macro_export]
macro_rules! submit_provider {
    ($build:path) => {
        $crate::inventory::submit! {
            $crate::ProviderRegistration($build)
        }
    };
}
