/// Preset registry — named genre targets loaded from RON documents.
use rustc_hash::FxHashMap;
use std::path::Path;
use thiserror::Error;

use crate::schema::target::StyleTargetProfile;

/// The built-in genre table, compiled into the crate.
pub const BUILTIN_PRESETS: &str = include_str!("../../genre_data/presets.ron");

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("RON serialization error: {0}")]
    RonWrite(#[from] ron::Error),
    #[error("preset not found: {0}")]
    NotFound(String),
    #[error("preset ids '{first}' and '{second}' both normalize to '{key}'")]
    DuplicateId {
        key: String,
        first: String,
        second: String,
    },
}

/// Normalize a preset id: trimmed, lowercase, with spaces and hyphens as `_`.
pub fn preset_key(id: &str) -> String {
    id.trim().to_lowercase().replace(['-', ' '], "_")
}

/// Registry of style targets keyed by normalized preset id.
#[derive(Debug, Clone, Default)]
pub struct PresetRegistry {
    presets: FxHashMap<String, StyleTargetProfile>,
}

impl PresetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The presets shipped with the crate.
    pub fn builtin() -> Result<Self, PresetError> {
        Self::parse_ron(BUILTIN_PRESETS)
    }

    /// Parse a RON map of `id: (genre: .., expected_tone: .., ..)` entries.
    ///
    /// Two ids in one document that normalize to the same key are an error.
    pub fn parse_ron(input: &str) -> Result<Self, PresetError> {
        let raw: FxHashMap<String, StyleTargetProfile> = ron::from_str(input)?;
        let mut seen: FxHashMap<String, String> = FxHashMap::default();
        let mut registry = Self::new();
        for (id, target) in raw {
            let key = preset_key(&id);
            if let Some(other) = seen.get(&key) {
                // Map order is unspecified; name the pair in a stable order.
                let (first, second) = if *other <= id {
                    (other.clone(), id)
                } else {
                    (id, other.clone())
                };
                return Err(PresetError::DuplicateId { key, first, second });
            }
            seen.insert(key, id.clone());
            registry.register(&id, target);
        }
        Ok(registry)
    }

    /// Load presets from a RON file, overriding entries with the same id.
    /// Returns the number of presets read from the file.
    pub fn load_from_ron(&mut self, path: &Path) -> Result<usize, PresetError> {
        let contents = std::fs::read_to_string(path)?;
        let loaded = Self::parse_ron(&contents)?;
        let count = loaded.len();
        self.merge(loaded);
        Ok(count)
    }

    /// Register a target, returning any preset it replaced.
    pub fn register(&mut self, id: &str, target: StyleTargetProfile) -> Option<StyleTargetProfile> {
        self.presets.insert(preset_key(id), target)
    }

    pub fn get(&self, id: &str) -> Option<&StyleTargetProfile> {
        self.presets.get(&preset_key(id))
    }

    /// Like `get`, but a missing preset is an error.
    pub fn require(&self, id: &str) -> Result<&StyleTargetProfile, PresetError> {
        self.get(id).ok_or_else(|| PresetError::NotFound(id.to_string()))
    }

    /// Preset ids in sorted order.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.presets.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleTargetProfile)> {
        self.presets.iter().map(|(id, target)| (id.as_str(), target))
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Merge another registry into this one. Presets from `other` win.
    pub fn merge(&mut self, other: PresetRegistry) {
        self.presets.extend(other.presets);
    }
}

/// Save a user-authored target to a RON file.
pub fn save_target(target: &StyleTargetProfile, path: &Path) -> Result<(), PresetError> {
    let serialized = ron::ser::to_string_pretty(target, ron::ser::PrettyConfig::default())?;
    std::fs::write(path, serialized)?;
    Ok(())
}

/// Load a user-authored target from a RON file.
pub fn load_target(path: &Path) -> Result<StyleTargetProfile, PresetError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(ron::from_str(&contents)?)
}
