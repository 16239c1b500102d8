//! Vizij Tween Core (engine-agnostic)
//!
//! Registry and dispatch for tween factories. Provider modules declare
//! functions that create tweens for a target type; a rebuild indexes them by
//! `member(friendly)` name and by binding-path segment, fills subtypes from
//! their ancestors, and publishes the result atomically. Callers then start
//! tweens by name or path against live targets:
//!
//! ```ignore
//! let registry = TweenRegistry::default();
//! registry.rebuild(&modules);
//! let names = registry.names_for(Widget::type_handle());
//! let tween = registry.create_by_path(&mut widget, "opacity", &0.0f32, 1.0);
//! ```
//!
//! Tween playback itself is out of scope; see [`Tween`].

pub mod alias;
pub mod clip;
pub mod coercion;
pub mod config;
pub mod descriptor;
pub mod dispatch;
pub mod error;
pub mod index;
pub mod provider;
pub mod registry;
pub mod scanner;
pub mod source;
pub mod tween;
pub mod types;
pub mod value;

// Re-exports for providers and hosts
pub use alias::{factory_name, first_path_segment, friendly_name};
pub use clip::{ClipGroup, TweenClip};
pub use config::Config;
pub use descriptor::{FactoryDescriptor, FactoryRef, InvocationShape};
pub use error::TweenError;
pub use index::{Collision, CollisionKind, FactoryIndex};
pub use provider::{
    collect_submitted, CallArgs, FunctionDecl, Invoker, ProviderModule, ProviderRegistration,
    ReturnKind,
};
pub use registry::TweenRegistry;
pub use scanner::{ScanReport, SkippedFunction};
pub use source::{ClipValue, ValueSource};
pub use tween::{Tween, TweenHandle};
pub use types::{Reflect, TweenTarget, TypeHandle, TypeInfo, COMPONENT};
pub use value::{Value, ValueKind};

// Used by `submit_provider!`.
#[doc(hidden)]
pub use inventory;
