//! Dispatcher: resolve a factory for a live target and invoke it.
//!
//! `create_*` are total. A missing command is an ordinary "not applicable"
//! outcome and is logged at debug level; coercion, shape and target failures
//! are logged at warn level. None of them reach the caller as errors. Use the
//! `try_*` variants to see the reason.

use log::{debug, warn};

use crate::descriptor::FactoryRef;
use crate::error::TweenError;
use crate::registry::TweenRegistry;
use crate::source::ValueSource;
use crate::tween::TweenHandle;
use crate::types::TweenTarget;

#[derive(Copy, Clone)]
enum Selector<'a> {
    Name(&'a str),
    Path(&'a str),
}

impl Selector<'_> {
    fn as_str(&self) -> &str {
        match self {
            Selector::Name(s) | Selector::Path(s) => s,
        }
    }
}

impl TweenRegistry {
    pub fn try_create_by_name<V: ValueSource + ?Sized>(
        &self,
        target: &mut dyn TweenTarget,
        name: &str,
        value: &V,
        duration: f32,
    ) -> Result<TweenHandle, TweenError> {
        self.dispatch(target, Selector::Name(name), value, duration)
    }

    pub fn try_create_by_path<V: ValueSource + ?Sized>(
        &self,
        target: &mut dyn TweenTarget,
        path: &str,
        value: &V,
        duration: f32,
    ) -> Result<TweenHandle, TweenError> {
        self.dispatch(target, Selector::Path(path), value, duration)
    }

    /// Start the factory named `name` (e.g. `"Fade(float)"`) on `target`.
    pub fn create_by_name<V: ValueSource + ?Sized>(
        &self,
        target: &mut dyn TweenTarget,
        name: &str,
        value: &V,
        duration: f32,
    ) -> Option<TweenHandle> {
        log_miss(self.try_create_by_name(target, name, value, duration))
    }

    /// Start the factory bound to the first segment `path` on `target`.
    pub fn create_by_path<V: ValueSource + ?Sized>(
        &self,
        target: &mut dyn TweenTarget,
        path: &str,
        value: &V,
        duration: f32,
    ) -> Option<TweenHandle> {
        log_miss(self.try_create_by_path(target, path, value, duration))
    }

    fn dispatch<V: ValueSource + ?Sized>(
        &self,
        target: &mut dyn TweenTarget,
        selector: Selector<'_>,
        value: &V,
        duration: f32,
    ) -> Result<TweenHandle, TweenError> {
        let ty = target.target_type();
        let found: Option<FactoryRef> = match selector {
            Selector::Name(name) => self.resolve_by_name(ty, name),
            Selector::Path(path) => self.resolve_by_path(ty, path),
        };
        let descriptor = found.ok_or_else(|| TweenError::UnresolvedSelector {
            target: ty.type_path().to_string(),
            selector: selector.as_str().to_string(),
        })?;

        let value =
            value
                .value_for(descriptor.tweened_kind)
                .ok_or_else(|| TweenError::CoercionFailed {
                    name: descriptor.name.clone(),
                    expected: descriptor.tweened_kind,
                })?;

        descriptor.invoke(target, value, duration)
    }
}

fn log_miss(result: Result<TweenHandle, TweenError>) -> Option<TweenHandle> {
    match result {
        Ok(tween) => Some(tween),
        Err(err @ TweenError::UnresolvedSelector { .. }) => {
            debug!("{err}");
            None
        }
        Err(err) => {
            warn!("[{}] {err}", err.category());
            None
        }
    }
}
