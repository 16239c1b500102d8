//! Opaque handle to a created tween.
//!
//! Interpolation, easing and playback live with whoever implements this
//! trait. The registry only hands handles back to the caller, who then owns
//! their lifecycle.

use std::any::Any;
use std::fmt::Debug;

pub trait Tween: Any + Debug + Send {
    /// Total duration in seconds.
    fn duration(&self) -> f32;

    fn is_alive(&self) -> bool;

    /// Stop the tween without completing it.
    fn kill(&mut self);

    fn as_any(&self) -> &dyn Any;
}

/// Owned tween returned by the dispatcher.
pub type TweenHandle = Box<dyn Tween>;

impl dyn Tween {
    /// Downcast to the concrete tween type produced by a factory.
    pub fn downcast_ref<T: Tween>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}
