//! WASM bindings for narrative-style — powers the in-browser style workbench.

use wasm_bindgen::prelude::*;

use narrative_style::core::engine::StyleEngine;
use narrative_style::schema::style::NarrativeVoice;
use narrative_style::schema::target::StyleTargetProfile;

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct PresetInfo<'a> {
    id: &'a str,
    genre: &'a str,
    expected_tone: String,
    target_voice: String,
    pacing_range: (f64, f64),
    emotion_density_range: (f64, f64),
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(|e| JsError::new(&format!("Serialization error: {e}")))
}

// ---------------------------------------------------------------------------
// StyleWorkbench — the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct StyleWorkbench {
    engine: StyleEngine,
}

#[wasm_bindgen]
impl StyleWorkbench {
    /// Create a workbench loaded with the built-in genre presets.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<StyleWorkbench, JsError> {
        let engine = StyleEngine::builder()
            .build()
            .map_err(|e| JsError::new(&format!("Engine build error: {e}")))?;
        Ok(StyleWorkbench { engine })
    }

    /// Profile a scene. Returns the style profile as JSON.
    pub fn analyze(&self, text: &str) -> Result<String, JsError> {
        let profile = self
            .engine
            .analyze(text)
            .map_err(|e| JsError::new(&format!("Analysis error: {e}")))?;
        to_json(&profile)
    }

    /// Score a scene against a built-in preset. Returns the report as JSON.
    pub fn check(&self, text: &str, preset_id: &str) -> Result<String, JsError> {
        let report = self
            .engine
            .check(text, preset_id)
            .map_err(|e| JsError::new(&format!("Check error: {e}")))?;
        to_json(&report)
    }

    /// Score a scene against a target described by a JSON string.
    ///
    /// Expected JSON shape:
    /// ```json
    /// {
    ///   "genre": "Noir",
    ///   "expected_tone": "dark",
    ///   "target_voice": "intimate",
    ///   "pacing_range": [0.3, 1.0],
    ///   "emotion_density_range": [0.0, 0.3]
    /// }
    /// ```
    pub fn check_against(&self, text: &str, target_json: &str) -> Result<String, JsError> {
        let target: StyleTargetProfile = serde_json::from_str(target_json)
            .map_err(|e| JsError::new(&format!("Invalid target JSON: {e}")))?;
        let report = self
            .engine
            .check_against(text, &target)
            .map_err(|e| JsError::new(&format!("Check error: {e}")))?;
        to_json(&report)
    }

    /// Return a JSON array describing every registered preset, sorted by id.
    pub fn presets(&self) -> Result<String, JsError> {
        let registry = self.engine.presets();
        let presets: Vec<PresetInfo> = registry
            .ids()
            .into_iter()
            .filter_map(|id| registry.get(id).map(|target| (id, target)))
            .map(|(id, target)| PresetInfo {
                id,
                genre: target.genre.as_str(),
                expected_tone: target.expected_tone.to_string(),
                target_voice: target.target_voice.to_string(),
                pacing_range: (
                    target.pacing_range.min().value(),
                    target.pacing_range.max().value(),
                ),
                emotion_density_range: (
                    target.emotion_density_range.min().value(),
                    target.emotion_density_range.max().value(),
                ),
            })
            .collect();
        to_json(&presets)
    }

    /// Return JSON array of narrative voice names.
    pub fn voices() -> String {
        let names: Vec<&str> = NarrativeVoice::ALL.iter().map(|v| v.name()).collect();
        serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
    }
}
