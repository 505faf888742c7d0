/// Preset Linter — validates genre preset files against what the analyzer can produce.
///
/// Usage: preset_linter <preset_file_or_dir> [--verbose]
use clap::Parser;
use narrative_style::core::analyzer::{DETECTABLE_TONES, DETECTABLE_VOICES, FAST_PACING, SLOW_PACING};
use narrative_style::core::presets::PresetRegistry;
use narrative_style::schema::target::StyleTargetProfile;
use std::path::Path;
use std::process;

/// Validate genre preset RON files.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// A preset file, or a directory searched recursively for .ron files
    path: String,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut errors = Vec::new();
    let mut presets = PresetRegistry::new();
    let preset_path = Path::new(&args.path);

    if preset_path.is_file() {
        load_file(preset_path, &mut presets, &mut errors);
    } else if preset_path.is_dir() {
        load_presets_recursive(preset_path, &mut presets, &mut errors);
    } else {
        eprintln!("ERROR: Path '{}' does not exist", args.path);
        process::exit(1);
    }

    println!("Loaded {} presets", presets.len());

    let warnings = lint_presets(&presets);

    println!("\n=== Preset Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if !errors.is_empty() {
        process::exit(1);
    }
}

fn load_file(path: &Path, presets: &mut PresetRegistry, errors: &mut Vec<String>) {
    match presets.load_from_ron(path) {
        Ok(count) => println!("  Loaded: {} ({} presets)", path.display(), count),
        Err(e) => errors.push(format!("{}: {}", path.display(), e)),
    }
}

fn load_presets_recursive(dir: &Path, presets: &mut PresetRegistry, errors: &mut Vec<String>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            errors.push(format!("{}: {}", dir.display(), e));
            return;
        }
    };
    let mut paths: Vec<_> = entries.flatten().map(|entry| entry.path()).collect();
    paths.sort();
    for path in paths {
        if path.is_dir() {
            load_presets_recursive(&path, presets, errors);
        } else if path.extension().and_then(|s| s.to_str()) == Some("ron") {
            load_file(&path, presets, errors);
        }
    }
}

fn lint_presets(presets: &PresetRegistry) -> Vec<String> {
    let mut warnings = Vec::new();
    for id in presets.ids() {
        if let Some(target) = presets.get(id) {
            lint_target(id, target, &mut warnings);
        }
    }
    warnings
}

fn lint_target(id: &str, target: &StyleTargetProfile, warnings: &mut Vec<String>) {
    if target.expected_tone.is_other() {
        warnings.push(format!(
            "Preset '{}' expects tone '{}' which is outside the known tone vocabulary",
            id, target.expected_tone
        ));
    } else if !DETECTABLE_TONES.contains(&target.expected_tone) {
        warnings.push(format!(
            "Preset '{}' expects tone '{}' which the analyzer never detects (always a tone drift)",
            id, target.expected_tone
        ));
    }

    if !DETECTABLE_VOICES.contains(&target.target_voice) {
        warnings.push(format!(
            "Preset '{}' expects voice '{}' which the analyzer never detects (always a voice drift)",
            id, target.target_voice
        ));
    }

    let pacing = &target.pacing_range;
    if pacing.min() == pacing.max() {
        warnings.push(format!("Preset '{}' has a zero-width pacing range", id));
    }
    if !pacing.contains(SLOW_PACING) && !pacing.contains(FAST_PACING) {
        warnings.push(format!(
            "Preset '{}' pacing range ({}, {}) admits neither analyzer pacing value ({} or {})",
            id,
            pacing.min(),
            pacing.max(),
            SLOW_PACING,
            FAST_PACING
        ));
    }

    let emotion = &target.emotion_density_range;
    if emotion.min() == emotion.max() {
        warnings.push(format!("Preset '{}' has a zero-width emotion density range", id));
    }
}
