//! Factory index: per-type name and binding-path maps with inheritance fill.
//!
//! Two parallel maps are kept per target type:
//!   by_name: type -> (name -> factory)
//!   by_path: type -> (first path segment -> factory)
//!
//! After registration, every indexed type is filled from its ancestors,
//! nearest first, without replacing keys that are already present. Direct
//! registrations therefore shadow inherited ones, and nearer ancestors shadow
//! farther ones. Filling is a merge and running it again changes nothing.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::alias::first_path_segment;
use crate::descriptor::{FactoryDescriptor, FactoryRef};
use crate::error::TweenError;
use crate::types::TypeHandle;

type FactoryMap = HashMap<String, FactoryRef>;

/// Which key collided.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionKind {
    /// Same factory name on one type. The first registration is kept.
    Name,
    /// Same first path segment on one type. The later registration is kept.
    BindingPath,
}

/// A collision observed while registering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collision {
    pub kind: CollisionKind,
    pub target_type: String,
    pub key: String,
    /// `provider::member` of the registration left in the index.
    pub kept: String,
    /// `provider::member` of the registration that lost.
    pub dropped: String,
}

#[derive(Clone, Debug, Default)]
pub struct FactoryIndex {
    by_name: HashMap<TypeHandle, FactoryMap>,
    by_path: HashMap<TypeHandle, FactoryMap>,
    collisions: Vec<Collision>,
}

fn origin(desc: &FactoryDescriptor) -> String {
    format!("{}::{}", desc.provider, desc.member)
}

impl FactoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(types: usize) -> Self {
        Self {
            by_name: HashMap::with_capacity(types),
            by_path: HashMap::with_capacity(types),
            collisions: Vec::new(),
        }
    }

    /// Insert a factory under its target type.
    ///
    /// A name already present on that type is rejected with
    /// [`TweenError::DuplicateFactory`] and the existing entry is kept.
    pub fn register(&mut self, descriptor: FactoryDescriptor) -> Result<FactoryRef, TweenError> {
        let ty = descriptor.target_type;
        let names = self.by_name.entry(ty).or_default();
        let paths = self.by_path.entry(ty).or_default();

        if let Some(existing) = names.get(&descriptor.name) {
            self.collisions.push(Collision {
                kind: CollisionKind::Name,
                target_type: ty.type_path().to_string(),
                key: descriptor.name.clone(),
                kept: origin(existing),
                dropped: origin(&descriptor),
            });
            return Err(TweenError::DuplicateFactory {
                target: ty.type_path().to_string(),
                name: descriptor.name,
                provider: descriptor.provider.type_path().to_string(),
            });
        }

        let desc = FactoryRef::new(descriptor);
        names.insert(desc.name.clone(), desc.clone());

        if let Some(path) = desc.binding_path.as_deref().filter(|p| !p.is_empty()) {
            let key = first_path_segment(path).to_string();
            if let Some(previous) = paths.insert(key.clone(), desc.clone()) {
                self.collisions.push(Collision {
                    kind: CollisionKind::BindingPath,
                    target_type: ty.type_path().to_string(),
                    key,
                    kept: origin(&desc),
                    dropped: origin(&previous),
                });
            }
        }
        Ok(desc)
    }

    /// True once maps exist for `ty` (registered against, filled, or
    /// initialized on demand).
    #[inline]
    pub fn contains_type(&self, ty: TypeHandle) -> bool {
        self.by_name.contains_key(&ty)
    }

    /// Create empty maps for `ty` and fill them from its ancestors.
    /// Returns `false` if `ty` was already indexed.
    pub fn ensure_type(&mut self, ty: TypeHandle) -> bool {
        self.by_path.entry(ty).or_default();
        if self.by_name.contains_key(&ty) {
            return false;
        }
        self.by_name.insert(ty, FactoryMap::new());
        self.fill_inherited(ty);
        true
    }

    /// Merge ancestor entries into `ty`, nearest ancestor first, keeping any
    /// key that is already present.
    pub fn fill_inherited(&mut self, ty: TypeHandle) {
        for ancestor in ty.ancestors() {
            let Some(names) = self.by_name.get(&ancestor) else {
                continue;
            };
            let names: Vec<(String, FactoryRef)> =
                names.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
            let paths: Vec<(String, FactoryRef)> = self
                .by_path
                .get(&ancestor)
                .map(|m| m.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
                .unwrap_or_default();

            let own_names = self.by_name.entry(ty).or_default();
            for (key, desc) in names {
                own_names.entry(key).or_insert(desc);
            }
            let own_paths = self.by_path.entry(ty).or_default();
            for (key, desc) in paths {
                own_paths.entry(key).or_insert(desc);
            }
        }
    }

    /// Fill every indexed type from its ancestors.
    pub fn fill_all(&mut self) {
        let types: Vec<TypeHandle> = self.by_name.keys().copied().collect();
        for ty in types {
            self.fill_inherited(ty);
        }
    }

    pub fn resolve_by_name(&self, ty: TypeHandle, name: &str) -> Option<FactoryRef> {
        self.by_name.get(&ty)?.get(name).cloned()
    }

    /// Look up by first path segment. The key is matched as given, so a
    /// dotted selector never matches.
    pub fn resolve_by_path(&self, ty: TypeHandle, path: &str) -> Option<FactoryRef> {
        self.by_path.get(&ty)?.get(path).cloned()
    }

    /// Sorted factory names visible on `ty`.
    pub fn names_for(&self, ty: TypeHandle) -> Vec<String> {
        let mut names: Vec<String> = self
            .by_name
            .get(&ty)
            .map(|m| m.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    /// Sorted binding-path keys visible on `ty`.
    pub fn paths_for(&self, ty: TypeHandle) -> Vec<String> {
        let mut paths: Vec<String> = self
            .by_path
            .get(&ty)
            .map(|m| m.keys().cloned().collect())
            .unwrap_or_default();
        paths.sort();
        paths
    }

    pub fn indexed_types(&self) -> impl Iterator<Item = TypeHandle> + '_ {
        self.by_name.keys().copied()
    }

    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    /// Number of indexed types.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::descriptor::InvocationShape;
    use crate::provider::{CallArgs, Invoker};
    use crate::types::{TypeInfo, COMPONENT};
    use crate::value::ValueKind;

    static BASE: TypeInfo = TypeInfo::with_base("test::Base", &COMPONENT);
    static MID: TypeInfo = TypeInfo::with_base("test::Mid", &BASE);
    static LEAF: TypeInfo = TypeInfo::with_base("test::Leaf", &MID);
    static PROVIDER: TypeInfo = TypeInfo::new("test::Provider");

    fn noop() -> Invoker {
        Arc::new(|_: CallArgs<'_>| {
            Err(TweenError::Config {
                reason: "not callable in index tests".into(),
            })
        })
    }

    fn desc(ty: &'static TypeInfo, member: &str, path: Option<&str>) -> FactoryDescriptor {
        FactoryDescriptor {
            target_type: TypeHandle::of(ty),
            name: format!("{member}(float)"),
            member: member.to_string(),
            binding_path: path.map(str::to_string),
            tweened_kind: ValueKind::Float,
            shape: InvocationShape::StaticTriple,
            arity: 3,
            provider: TypeHandle::of(&PROVIDER),
            invoker: noop(),
        }
    }

    #[test]
    fn duplicate_name_keeps_first() {
        let mut index = FactoryIndex::new();
        let first = index.register(desc(&BASE, "Fade", Some("opacity"))).unwrap();
        let err = index.register(desc(&BASE, "Fade", Some("alpha"))).unwrap_err();
        assert!(matches!(err, TweenError::DuplicateFactory { .. }));

        let got = index.resolve_by_name(TypeHandle::of(&BASE), "Fade(float)").unwrap();
        assert!(Arc::ptr_eq(&got, &first));
        // The rejected registration never reached the path map either.
        assert!(index.resolve_by_path(TypeHandle::of(&BASE), "alpha").is_none());
        assert_eq!(index.collisions().len(), 1);
        assert_eq!(index.collisions()[0].kind, CollisionKind::Name);
    }

    #[test]
    fn path_collision_keeps_later_and_is_recorded() {
        let mut index = FactoryIndex::new();
        index.register(desc(&BASE, "Fade", Some("opacity"))).unwrap();
        let later = index.register(desc(&BASE, "Dim", Some("opacity.value"))).unwrap();
        let got = index.resolve_by_path(TypeHandle::of(&BASE), "opacity").unwrap();
        assert!(Arc::ptr_eq(&got, &later));
        assert_eq!(index.collisions()[0].kind, CollisionKind::BindingPath);
    }

    #[test]
    fn nearer_ancestor_wins_and_direct_wins() {
        let mut index = FactoryIndex::new();
        index.register(desc(&BASE, "Fade", None)).unwrap();
        index.register(desc(&BASE, "Move", None)).unwrap();
        let mid_fade = index.register(desc(&MID, "Fade", None)).unwrap();
        let leaf_move = index.register(desc(&LEAF, "Move", None)).unwrap();
        index.fill_all();

        let leaf = TypeHandle::of(&LEAF);
        let fade = index.resolve_by_name(leaf, "Fade(float)").unwrap();
        assert!(Arc::ptr_eq(&fade, &mid_fade));
        let mv = index.resolve_by_name(leaf, "Move(float)").unwrap();
        assert!(Arc::ptr_eq(&mv, &leaf_move));
    }

    #[test]
    fn fill_is_idempotent() {
        let mut index = FactoryIndex::new();
        index.register(desc(&BASE, "Fade", Some("opacity"))).unwrap();
        index.register(desc(&LEAF, "Spin", None)).unwrap();
        index.fill_all();
        let names_once = index.names_for(TypeHandle::of(&LEAF));
        let paths_once = index.paths_for(TypeHandle::of(&LEAF));
        index.fill_all();
        assert_eq!(index.names_for(TypeHandle::of(&LEAF)), names_once);
        assert_eq!(index.paths_for(TypeHandle::of(&LEAF)), paths_once);
        assert_eq!(names_once, vec!["Fade(float)", "Spin(float)"]);
    }

    #[test]
    fn ensure_type_inherits_for_unregistered_subtype() {
        let mut index = FactoryIndex::new();
        index.register(desc(&BASE, "Fade", Some("opacity.a"))).unwrap();
        let mid = TypeHandle::of(&MID);
        assert!(!index.contains_type(mid));
        assert!(index.ensure_type(mid));
        assert!(!index.ensure_type(mid));
        assert!(index.resolve_by_name(mid, "Fade(float)").is_some());
        assert!(index.resolve_by_path(mid, "opacity").is_some());
        assert!(index.resolve_by_path(mid, "opacity.a").is_none());
    }

    #[test]
    fn names_are_sorted() {
        let mut index = FactoryIndex::new();
        for member in ["Zoom", "Alpha", "Move"] {
            index.register(desc(&BASE, member, None)).unwrap();
        }
        assert_eq!(
            index.names_for(TypeHandle::of(&BASE)),
            vec!["Alpha(float)", "Move(float)", "Zoom(float)"]
        );
        assert!(index.names_for(TypeHandle::of(&LEAF)).is_empty());
    }
}
