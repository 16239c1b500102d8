//! The owned tween registry.
//!
//! All lookup state lives in a [`Snapshot`] published through an
//! [`ArcSwap`]. A rebuild scans into a fresh snapshot and swaps it in, so a
//! reader holding the previous snapshot keeps seeing a complete index until it
//! drops it. The only in-place mutation is on-demand initialization of a type
//! that was never registered against; that runs under the snapshot's
//! [`RwLock`].

use std::sync::Arc;

use arc_swap::ArcSwap;
use hashbrown::HashMap;
use parking_lot::{Mutex, RwLock, RwLockUpgradableReadGuard};

use crate::alias;
use crate::config::Config;
use crate::descriptor::FactoryRef;
use crate::index::FactoryIndex;
use crate::provider::{collect_submitted, ProviderModule};
use crate::scanner::{scan, ScanOutput, ScanReport};
use crate::types::{TypeHandle, COMPONENT};

/// One published generation of the registry.
#[derive(Debug)]
pub(crate) struct Snapshot {
    index: RwLock<FactoryIndex>,
    /// Sorted factory names per type, computed on first request.
    popup: Mutex<HashMap<TypeHandle, Arc<[String]>>>,
    component_types: Arc<[TypeHandle]>,
    report: Arc<ScanReport>,
    generation: u64,
}

impl Snapshot {
    fn empty(generation: u64) -> Self {
        Self::from_scan(
            ScanOutput {
                index: FactoryIndex::new(),
                component_types: Vec::new(),
                report: ScanReport::default(),
            },
            generation,
        )
    }

    fn from_scan(out: ScanOutput, generation: u64) -> Self {
        Self {
            index: RwLock::new(out.index),
            popup: Mutex::new(HashMap::new()),
            component_types: out.component_types.into(),
            report: Arc::new(out.report),
            generation,
        }
    }

    /// Run `f` against the index with `ty` initialized, or return `None` if
    /// `ty` is unknown and on-demand initialization is disabled.
    fn with_type<R>(
        &self,
        ty: TypeHandle,
        lazy: bool,
        f: impl FnOnce(&FactoryIndex) -> R,
    ) -> Option<R> {
        {
            let index = self.index.read();
            if index.contains_type(ty) {
                return Some(f(&index));
            }
            if !lazy {
                return None;
            }
        }
        let guard = self.index.upgradable_read();
        if guard.contains_type(ty) {
            return Some(f(&guard));
        }
        let mut index = RwLockUpgradableReadGuard::upgrade(guard);
        index.ensure_type(ty);
        Some(f(&index))
    }
}

/// Registry of tween factories with an explicit lifecycle.
///
/// ```ignore
/// let registry = TweenRegistry::new(Config::default());
/// registry.rebuild(&modules);
/// let tween = registry.create_by_name(&mut widget, "Fade(float)", 0.0, 1.0);
/// ```
#[derive(Debug)]
pub struct TweenRegistry {
    config: Config,
    snap: ArcSwap<Snapshot>,
}

impl Default for TweenRegistry {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl TweenRegistry {
    /// An empty registry. Nothing resolves until the first rebuild.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            snap: ArcSwap::from_pointee(Snapshot::empty(0)),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Rebuild from `modules` with the default predicates: a module is a
    /// provider when flagged, a type is component-like when it descends from
    /// [`COMPONENT`].
    pub fn rebuild(&self, modules: &[ProviderModule]) -> Arc<ScanReport> {
        let component = TypeHandle::of(&COMPONENT);
        self.rebuild_with(modules, ProviderModule::is_tween_provider, move |ty| {
            ty.is_a(component)
        })
    }

    /// Rebuild with caller-supplied predicates. Prior state is fully
    /// replaced; the popup cache starts empty.
    pub fn rebuild_with<P, C>(
        &self,
        modules: &[ProviderModule],
        is_provider: P,
        is_component: C,
    ) -> Arc<ScanReport>
    where
        P: Fn(&ProviderModule) -> bool,
        C: Fn(TypeHandle) -> bool,
    {
        let out = scan(modules, is_provider, is_component, &self.config);
        let generation = self.generation() + 1;
        let snap = Snapshot::from_scan(out, generation);
        let report = snap.report.clone();
        self.snap.store(Arc::new(snap));
        report
    }

    /// Rebuild from every module submitted with
    /// [`submit_provider!`](crate::submit_provider).
    pub fn rebuild_submitted(&self) -> Arc<ScanReport> {
        self.rebuild(&collect_submitted())
    }

    /// Drop all factories and cached names.
    pub fn dispose(&self) {
        let generation = self.generation() + 1;
        self.snap.store(Arc::new(Snapshot::empty(generation)));
    }

    /// Bumped by every rebuild and dispose.
    pub fn generation(&self) -> u64 {
        self.snap.load().generation
    }

    pub fn resolve_by_name(&self, ty: TypeHandle, name: &str) -> Option<FactoryRef> {
        self.snap
            .load()
            .with_type(ty, self.config.lazy_type_init, |index| {
                index.resolve_by_name(ty, name)
            })
            .flatten()
    }

    /// Resolve by binding path. Only a bare first segment matches.
    pub fn resolve_by_path(&self, ty: TypeHandle, path: &str) -> Option<FactoryRef> {
        self.snap
            .load()
            .with_type(ty, self.config.lazy_type_init, |index| {
                index.resolve_by_path(ty, path)
            })
            .flatten()
    }

    /// Sorted factory names visible on `ty`, cached until the next rebuild.
    /// A type that cannot be indexed (strict mode) gets an empty list and no
    /// cache entry.
    pub fn names_for(&self, ty: TypeHandle) -> Arc<[String]> {
        let snap = self.snap.load();
        if let Some(names) = snap.popup.lock().get(&ty) {
            return names.clone();
        }
        let Some(names) = snap.with_type(ty, self.config.lazy_type_init, |index| index.names_for(ty))
        else {
            return Arc::from(Vec::new());
        };
        let names: Arc<[String]> = names.into();
        let cached = snap
            .popup
            .lock()
            .entry(ty)
            .or_insert_with(|| names.clone())
            .clone();
        cached
    }

    /// Number of types with a cached name list in the current generation.
    pub fn cached_name_lists(&self) -> usize {
        self.snap.load().popup.lock().len()
    }

    /// Indexed types accepted by the component predicate of the last
    /// rebuild, sorted by type path.
    pub fn indexed_component_types(&self) -> Arc<[TypeHandle]> {
        self.snap.load().component_types.clone()
    }

    /// Every type with maps in the current index, sorted. Includes types
    /// initialized on demand.
    pub fn indexed_types(&self) -> Vec<TypeHandle> {
        let snap = self.snap.load();
        let mut types: Vec<TypeHandle> = snap.index.read().indexed_types().collect();
        types.sort();
        types
    }

    pub fn last_report(&self) -> Arc<ScanReport> {
        self.snap.load().report.clone()
    }

    pub fn friendly_name(&self, ty: TypeHandle) -> String {
        alias::friendly_name(ty)
    }
}
