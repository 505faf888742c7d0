/// Preset integration tests — built-in table, file layering, and user targets.
use narrative_style::core::engine::{EngineError, StyleEngine};
use narrative_style::core::presets::{load_target, save_target, PresetError, PresetRegistry, BUILTIN_PRESETS};
use narrative_style::schema::style::{NarrativeVoice, Tone};
use narrative_style::schema::target::StyleTargetProfile;
use std::path::Path;

#[test]
fn builtin_table_is_well_formed() {
    let registry = PresetRegistry::parse_ron(BUILTIN_PRESETS).unwrap();
    assert_eq!(registry.len(), 6);

    for (id, target) in registry.iter() {
        let pacing = &target.pacing_range;
        let emotion = &target.emotion_density_range;
        assert!(pacing.min() <= pacing.max(), "preset {id}");
        assert!(emotion.min() <= emotion.max(), "preset {id}");
        assert!(!target.expected_tone.is_other(), "preset {id}");
    }

    let ya = registry.require("young_adult").unwrap();
    assert_eq!(ya.genre.as_str(), "Young Adult");
    assert_eq!(ya.expected_tone, Tone::Warm);
    assert_eq!(ya.target_voice, NarrativeVoice::Casual);
}

#[test]
fn house_presets_layer_over_builtins() {
    let engine = StyleEngine::builder()
        .presets_dir("tests/fixtures/presets")
        .build()
        .unwrap();

    assert_eq!(engine.presets().len(), 7);
    assert_eq!(
        engine.presets().get("young_adult").unwrap().target_voice,
        NarrativeVoice::Intimate
    );
    let cozy = engine.presets().get("Cozy Mystery").unwrap();
    assert_eq!(cozy.genre.as_str(), "Cozy Mystery");
    assert!(engine.presets().ids().contains(&"cozy_mystery"));
}

#[test]
fn later_sources_win() {
    let late = StyleTargetProfile::new(
        "Young Adult (late)",
        Tone::Optimistic,
        NarrativeVoice::Conversational,
        (0.3, 1.0),
        (0.0, 0.3),
    )
    .unwrap();

    let engine = StyleEngine::builder()
        .presets_file("tests/fixtures/presets/house.ron")
        .with_target("young-adult", late)
        .build()
        .unwrap();

    let ya = engine.presets().get("young_adult").unwrap();
    assert_eq!(ya.expected_tone, Tone::Optimistic);
    assert_eq!(ya.genre.as_str(), "Young Adult (late)");
}

#[test]
fn missing_presets_dir_is_tolerated() {
    let engine = StyleEngine::builder()
        .presets_dir("tests/fixtures/no_such_dir")
        .build()
        .unwrap();
    assert_eq!(engine.presets().len(), 6);
}

#[test]
fn broken_preset_file_fails_with_ron_error() {
    let result = StyleEngine::builder()
        .presets_file("tests/fixtures/broken_preset.ron")
        .build();
    match result {
        Err(EngineError::Preset(PresetError::Ron(e))) => {
            assert!(e.to_string().contains("second-person"));
        }
        other => panic!("expected RON error, got {other:?}"),
    }
}

#[test]
fn user_target_survives_save_and_load() {
    let noir = load_target(Path::new("tests/fixtures/noir_target.ron")).unwrap();
    assert_eq!(noir.expected_tone, Tone::Dark);
    assert_eq!(noir.target_voice, NarrativeVoice::Intimate);
    assert_eq!(noir.emotion_density_range.max().value(), 0.2);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("noir_copy.ron");
    save_target(&noir, &path).unwrap();
    assert_eq!(load_target(&path).unwrap(), noir);
}

#[test]
fn target_json_matches_the_ron_shape() {
    let json = r#"{
        "genre": "Noir",
        "expected_tone": "dark",
        "target_voice": "intimate",
        "pacing_range": [0.3, 1.0],
        "emotion_density_range": [0.0, 0.2]
    }"#;
    let from_json: StyleTargetProfile = serde_json::from_str(json).unwrap();
    let from_ron = load_target(Path::new("tests/fixtures/noir_target.ron")).unwrap();
    assert_eq!(from_json, from_ron);

    let inverted = json.replace("[0.3, 1.0]", "[1.0, 0.3]");
    assert!(serde_json::from_str::<StyleTargetProfile>(&inverted).is_err());

    let blank_tone = json.replace(r#""dark""#, r#""""#);
    let err = serde_json::from_str::<StyleTargetProfile>(&blank_tone).unwrap_err();
    assert!(err.to_string().contains("tone must not be empty"));
}

#[test]
fn unknown_preset_is_reported_by_name() {
    let engine = StyleEngine::builder().build().unwrap();
    let err = engine
        .check("The rain fell on the roofs. Nobody came.", "space opera")
        .unwrap_err();
    assert_eq!(err.to_string(), "unknown preset: space opera");
}

#[test]
fn colliding_ids_in_one_file_fail_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dupes.ron");
    std::fs::write(
        &path,
        r#"{
            "Cozy Mystery": (
                genre: "Cozy A",
                expected_tone: "warm",
                target_voice: "omniscient",
                pacing_range: (0.3, 1.0),
                emotion_density_range: (0.0, 0.15),
            ),
            "cozy-mystery": (
                genre: "Cozy B",
                expected_tone: "warm",
                target_voice: "omniscient",
                pacing_range: (0.3, 1.0),
                emotion_density_range: (0.0, 0.15),
            ),
        }"#,
    )
    .unwrap();

    let mut registry = PresetRegistry::builtin().unwrap();
    let err = registry.load_from_ron(&path).unwrap_err();
    assert_eq!(
        err.to_string(),
        "preset ids 'Cozy Mystery' and 'cozy-mystery' both normalize to 'cozy_mystery'"
    );
    assert_eq!(registry.len(), 6);
}
