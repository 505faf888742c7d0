/// The style engine: text → profile → report against named presets.
///
/// Wires the analyzer, the comparator, and a preset registry behind one
/// facade. Built via `StyleEngine::builder()`.
use std::path::Path;
use thiserror::Error;

use crate::core::alignment;
use crate::core::analyzer::analyze_style;
use crate::core::presets::{PresetError, PresetRegistry};
use crate::schema::profile::NarrativeStyleProfile;
use crate::schema::report::StyleAlignmentReport;
use crate::schema::target::StyleTargetProfile;
use crate::schema::values::ValidationError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("preset error: {0}")]
    Preset(#[from] PresetError),
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
}

/// Analyzes scenes and scores them against registered genre presets.
///
/// Holds no per-call state; every method takes `&self`.
#[derive(Debug, Clone)]
pub struct StyleEngine {
    presets: PresetRegistry,
}

/// Builder for constructing a `StyleEngine`.
///
/// Sources are layered in order: built-in presets, `presets_dir`, each
/// `presets_file`, a directly provided registry, then single targets. Later
/// sources override earlier ones by id.
pub struct StyleEngineBuilder {
    builtin_presets: bool,
    presets_dir: Option<String>,
    presets_files: Vec<String>,
    /// Directly provided presets (for testing without files).
    presets: Option<PresetRegistry>,
    targets: Vec<(String, StyleTargetProfile)>,
}

impl StyleEngine {
    pub fn builder() -> StyleEngineBuilder {
        StyleEngineBuilder {
            builtin_presets: true,
            presets_dir: None,
            presets_files: Vec::new(),
            presets: None,
            targets: Vec::new(),
        }
    }

    pub fn presets(&self) -> &PresetRegistry {
        &self.presets
    }

    /// Profile a scene.
    pub fn analyze(&self, text: &str) -> Result<NarrativeStyleProfile, EngineError> {
        Ok(analyze_style(text)?)
    }

    /// Profile a scene and score it against the named preset.
    pub fn check(&self, text: &str, preset_id: &str) -> Result<StyleAlignmentReport, EngineError> {
        let Some(target) = self.presets.get(preset_id) else {
            tracing::warn!(preset = preset_id, "unknown preset requested");
            return Err(EngineError::UnknownPreset(preset_id.to_string()));
        };
        self.check_against(text, target)
    }

    /// Profile a scene and score it against an explicit target.
    pub fn check_against(
        &self,
        text: &str,
        target: &StyleTargetProfile,
    ) -> Result<StyleAlignmentReport, EngineError> {
        let profile = self.analyze(text)?;
        Ok(alignment::compare(&profile, target))
    }
}

impl StyleEngineBuilder {
    /// Whether to start from the built-in genre table. Defaults to true.
    pub fn builtin_presets(mut self, enabled: bool) -> Self {
        self.builtin_presets = enabled;
        self
    }

    /// Load every `.ron` file in a directory.
    pub fn presets_dir(mut self, path: &str) -> Self {
        self.presets_dir = Some(path.to_string());
        self
    }

    /// Load a single preset file. May be called more than once.
    pub fn presets_file(mut self, path: &str) -> Self {
        self.presets_files.push(path.to_string());
        self
    }

    /// Provide presets directly (for testing without files).
    pub fn with_presets(mut self, presets: PresetRegistry) -> Self {
        self.presets = Some(presets);
        self
    }

    /// Register one target under `id`.
    pub fn with_target(mut self, id: &str, target: StyleTargetProfile) -> Self {
        self.targets.push((id.to_string(), target));
        self
    }

    pub fn build(self) -> Result<StyleEngine, EngineError> {
        let mut presets = if self.builtin_presets {
            PresetRegistry::builtin()?
        } else {
            PresetRegistry::new()
        };

        if let Some(ref dir) = self.presets_dir {
            if Path::new(dir).exists() {
                load_ron_files_from_dir(dir, |path| {
                    let count = presets.load_from_ron(path)?;
                    tracing::info!(path = %path.display(), count, "loaded presets");
                    Ok(())
                })?;
            } else {
                tracing::warn!(dir = %dir, "presets directory does not exist");
            }
        }

        for file in &self.presets_files {
            let count = presets.load_from_ron(Path::new(file))?;
            tracing::info!(path = %file, count, "loaded presets");
        }

        if let Some(direct) = self.presets {
            presets.merge(direct);
        }

        for (id, target) in self.targets {
            presets.register(&id, target);
        }

        tracing::debug!(presets = presets.len(), "style engine ready");
        Ok(StyleEngine { presets })
    }
}

/// Load all .ron files from a directory, calling `loader` for each.
fn load_ron_files_from_dir<F>(dir: &str, mut loader: F) -> Result<(), EngineError>
where
    F: FnMut(&Path) -> Result<(), EngineError>,
{
    let entries = std::fs::read_dir(dir).map_err(PresetError::from)?;
    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(PresetError::from)?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("ron") {
            paths.push(path);
        }
    }
    // Directory order is unspecified; sort so overrides are reproducible.
    paths.sort();
    for path in paths {
        loader(&path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::style::{NarrativeVoice, Tone};

    fn noir() -> StyleTargetProfile {
        StyleTargetProfile::new("Noir", Tone::Dark, NarrativeVoice::Intimate, (0.3, 1.0), (0.0, 0.3))
            .unwrap()
    }

    #[test]
    fn builder_defaults_to_builtin_presets() {
        let engine = StyleEngine::builder().build().unwrap();
        assert_eq!(engine.presets().len(), 6);
    }

    #[test]
    fn builder_without_builtins() {
        let engine = StyleEngine::builder()
            .builtin_presets(false)
            .with_target("noir", noir())
            .build()
            .unwrap();
        assert_eq!(engine.presets().ids(), vec!["noir"]);
    }

    #[test]
    fn check_unknown_preset_errors() {
        let engine = StyleEngine::builder().build().unwrap();
        let err = engine
            .check("It was a dark and stormy night. The end.", "western")
            .unwrap_err();
        assert!(matches!(err, EngineError::UnknownPreset(id) if id == "western"));
    }

    #[test]
    fn check_uses_registered_target() {
        let engine = StyleEngine::builder().with_target("noir", noir()).build().unwrap();
        let report = engine
            .check("My hands shook. The grim city swallowed the last light.", "noir")
            .unwrap();
        assert_eq!(report.profile.tone.value, Tone::Dark);
        assert_eq!(report.profile.voice.value, NarrativeVoice::Intimate);
        assert_eq!(report.alignment_score.value(), 100.0);
    }

    #[test]
    fn presets_dir_overrides_builtin() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("house.ron"),
            r#"{
                "thriller": (
                    genre: "Thriller (house)",
                    expected_tone: "dark",
                    target_voice: "intimate",
                    pacing_range: (0.3, 1.0),
                    emotion_density_range: (0.0, 0.2),
                ),
            }"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a preset").unwrap();

        let engine = StyleEngine::builder()
            .presets_dir(dir.path().to_str().unwrap())
            .build()
            .unwrap();
        assert_eq!(engine.presets().get("thriller").unwrap().expected_tone, Tone::Dark);
        assert_eq!(engine.presets().len(), 6);
    }

    #[test]
    fn missing_presets_file_fails_build() {
        let result = StyleEngine::builder().presets_file("nope/missing.ron").build();
        assert!(matches!(result, Err(EngineError::Preset(PresetError::Io(_)))));
    }
}
