//! Authored clips: named commands with their destination values.
//!
//! A [`ClipGroup`] is what a state machine plays when it enters a state. Each
//! clip names a factory (e.g. `"Fade(float)"`) and carries a [`ClipValue`] so
//! the same data works whichever kind the factory turns out to accept.

use serde::{Deserialize, Serialize};

use crate::registry::TweenRegistry;
use crate::source::ClipValue;
use crate::tween::TweenHandle;
use crate::types::TweenTarget;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TweenClip {
    /// Factory name as listed by `names_for`.
    pub command: String,
    #[serde(default)]
    pub value: ClipValue,
    pub duration: f32,
}

impl TweenClip {
    pub fn new(command: impl Into<String>, value: impl Into<ClipValue>, duration: f32) -> Self {
        Self {
            command: command.into(),
            value: value.into(),
            duration,
        }
    }

    /// Start this clip on `target`. Returns `None` when the command does not
    /// apply to the target's type.
    pub fn play(&self, registry: &TweenRegistry, target: &mut dyn TweenTarget) -> Option<TweenHandle> {
        registry.create_by_name(target, &self.command, &self.value, self.duration)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClipGroup {
    pub name: String,
    /// Seconds to wait before the state is handed on to child targets.
    #[serde(default)]
    pub delay: f32,
    #[serde(default)]
    pub clips: Vec<TweenClip>,
}

impl ClipGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with(mut self, clip: TweenClip) -> Self {
        self.clips.push(clip);
        self
    }

    /// Play every clip on `target`, keeping the tweens that started.
    pub fn play(&self, registry: &TweenRegistry, target: &mut dyn TweenTarget) -> Vec<TweenHandle> {
        self.clips
            .iter()
            .filter_map(|clip| clip.play(registry, target))
            .collect()
    }

    /// Total time until the longest clip completes.
    pub fn span(&self) -> f32 {
        self.clips.iter().map(|c| c.duration).fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Value, ValueKind};

    #[test]
    fn group_parses_with_defaults() {
        let json = r#"{
            "name": "Hidden",
            "clips": [
                { "command": "Fade(float)", "value": { "float": 0.0 }, "duration": 0.25 },
                { "command": "Show(bool)", "duration": 0.5 }
            ]
        }"#;
        let group: ClipGroup = serde_json::from_str(json).unwrap();
        assert_eq!(group.delay, 0.0);
        assert_eq!(group.clips.len(), 2);
        assert_eq!(group.clips[0].value.slot(ValueKind::Float), Some(Value::Float(0.0)));
        assert!(group.clips[1].value.is_empty());
        assert_eq!(group.span(), 0.5);
    }

    #[test]
    fn unknown_command_plays_nothing() {
        struct Dummy;
        static DUMMY: crate::TypeInfo = crate::TypeInfo::new("test::Dummy");
        crate::impl_tween_target!(Dummy, DUMMY);

        let registry = TweenRegistry::default();
        let group = ClipGroup::new("Visible").with(TweenClip::new("Fade(float)", Value::Float(1.0), 0.3));
        assert!(group.play(&registry, &mut Dummy).is_empty());
    }
}
