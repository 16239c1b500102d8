//! Factory descriptors: one indexed, invocable capability.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::TweenError;
use crate::provider::{CallArgs, Invoker};
use crate::tween::TweenHandle;
use crate::types::{TweenTarget, TypeHandle};
use crate::value::{Value, ValueKind};

/// Calling convention of a factory.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvocationShape {
    /// Free function taking `(target, value, duration)`.
    StaticTriple,
    /// Method on the target taking `(value, duration)`.
    InstancePair,
}

impl InvocationShape {
    /// Parameter count a well-formed factory of this shape declares.
    #[inline]
    pub fn arity(self) -> usize {
        match self {
            InvocationShape::StaticTriple => 3,
            InvocationShape::InstancePair => 2,
        }
    }
}

/// Shared reference to an indexed factory. Inherited entries point at the
/// ancestor's descriptor rather than copying it.
pub type FactoryRef = Arc<FactoryDescriptor>;

#[derive(Clone)]
pub struct FactoryDescriptor {
    pub target_type: TypeHandle,
    /// `member(friendly)`; unique per target type.
    pub name: String,
    pub member: String,
    /// Declared binding path. The index keys it by its first segment.
    pub binding_path: Option<String>,
    pub tweened_kind: ValueKind,
    pub shape: InvocationShape,
    /// Declared parameter count.
    pub arity: usize,
    /// Module the factory was declared in.
    pub provider: TypeHandle,
    pub(crate) invoker: Invoker,
}

impl FactoryDescriptor {
    /// Runtime type of the destination value this factory accepts.
    #[inline]
    pub fn tweened_type(&self) -> TypeHandle {
        self.tweened_kind.type_handle()
    }

    /// Call the factory. `value` must already be of [`Self::tweened_kind`].
    pub fn invoke(
        &self,
        target: &mut dyn TweenTarget,
        value: Value,
        duration: f32,
    ) -> Result<TweenHandle, TweenError> {
        if self.arity != self.shape.arity() {
            return Err(TweenError::ShapeMismatch {
                name: self.name.clone(),
                shape: format!("{:?}", self.shape),
                expected: self.shape.arity(),
                actual: self.arity,
            });
        }
        let args = match self.shape {
            InvocationShape::StaticTriple => CallArgs::Triple {
                target,
                value,
                duration,
            },
            InvocationShape::InstancePair => CallArgs::Pair {
                receiver: target,
                value,
                duration,
            },
        };
        (self.invoker)(args).map_err(|err| match err {
            TweenError::ShapeMismatch {
                shape,
                expected,
                actual,
                ..
            } => TweenError::ShapeMismatch {
                name: self.name.clone(),
                shape,
                expected,
                actual,
            },
            other => other,
        })
    }
}

impl fmt::Debug for FactoryDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryDescriptor")
            .field("target_type", &self.target_type)
            .field("name", &self.name)
            .field("binding_path", &self.binding_path)
            .field("tweened_kind", &self.tweened_kind)
            .field("shape", &self.shape)
            .field("arity", &self.arity)
            .field("provider", &self.provider)
            .finish()
    }
}
