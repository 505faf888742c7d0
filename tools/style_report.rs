/// Style Report — profile a scene and score it against a genre preset.
///
/// Usage: style_report --preset <id> [--presets <file.ron>] [--json] [--verbose] <scene-file | ->
use clap::Parser;
use narrative_style::core::engine::StyleEngine;
use narrative_style::schema::profile::NarrativeStyleProfile;
use narrative_style::schema::report::StyleAlignmentReport;
use std::io::Read;
use tracing_subscriber::EnvFilter;

/// Profile a scene's narrative style and report drift from a genre target.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scene text file, or `-` to read from stdin
    scene: Option<String>,

    /// Preset id to compare against (see --list)
    #[arg(short, long, default_value = "young_adult")]
    preset: String,

    /// Additional preset file(s) layered over the built-in table
    #[arg(long = "presets")]
    presets_files: Vec<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// List available presets and exit
    #[arg(long)]
    list: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut builder = StyleEngine::builder();
    for file in &args.presets_files {
        builder = builder.presets_file(file);
    }
    let engine = builder.build()?;

    if args.list {
        for id in engine.presets().ids() {
            if let Some(target) = engine.presets().get(id) {
                println!(
                    "{:<14} {} (tone: {}, voice: {})",
                    id, target.genre, target.expected_tone, target.target_voice
                );
            }
        }
        return Ok(());
    }

    let Some(ref scene) = args.scene else {
        return Err("a scene file (or `-` for stdin) is required".into());
    };
    let text = read_scene(scene)?;
    let report = engine.check(&text, &args.preset)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_profile(&report.profile);
        print_report(&args.preset, &report);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    if verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn read_scene(source: &str) -> std::io::Result<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(source)
    }
}

fn print_profile(profile: &NarrativeStyleProfile) {
    println!("=== Style Profile ===\n");
    if let Some(ref warning) = profile.warning {
        println!("WARNING: {}\n", warning);
    }
    println!(
        "  tone               {:<24} ({}%)",
        profile.tone.value, profile.tone.confidence
    );
    println!(
        "  voice              {:<24} ({}%)",
        profile.voice.value, profile.voice.confidence
    );
    println!(
        "  pacing             {:<24.2} ({}%)",
        profile.pacing_score.value.value(),
        profile.pacing_score.confidence
    );
    println!(
        "  emotion density    {:<24.3} ({}%)",
        profile.emotion_density.value.value(),
        profile.emotion_density.confidence
    );
    println!(
        "  lexical complexity {:<24.3} ({}%)",
        profile.lexical_complexity.value.value(),
        profile.lexical_complexity.confidence
    );
    println!(
        "  sentence variance  {:<24.2} ({}%)",
        profile.sentence_variance.value.value(),
        profile.sentence_variance.confidence
    );
    println!(
        "  descriptors        {} ({}%)",
        profile.key_descriptors.value.join(", "),
        profile.key_descriptors.confidence
    );
}

fn print_report(preset: &str, report: &StyleAlignmentReport) {
    println!("\n=== Alignment vs '{}' ===\n", preset);
    println!("Score: {}/100\n", report.alignment_score);
    for flag in &report.drift_flags {
        println!("DRIFT: {}", flag);
    }
    if !report.recommendations.is_empty() {
        println!();
        for (i, rec) in report.recommendations.iter().enumerate() {
            println!("{}. {}", i + 1, rec);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_default_to_young_adult() {
        let args = Args::try_parse_from(["style_report", "scene.txt"]).unwrap();
        assert_eq!(args.scene.as_deref(), Some("scene.txt"));
        assert_eq!(args.preset, "young_adult");
        assert!(args.presets_files.is_empty());
        assert!(!args.json && !args.list && !args.verbose);
    }

    #[test]
    fn args_collect_repeated_preset_files() {
        let args = Args::try_parse_from([
            "style_report",
            "--presets",
            "a.ron",
            "--presets",
            "b.ron",
            "--preset",
            "noir",
            "--json",
            "-",
        ])
        .unwrap();
        assert_eq!(args.presets_files, vec!["a.ron", "b.ron"]);
        assert_eq!(args.preset, "noir");
        assert_eq!(args.scene.as_deref(), Some("-"));
        assert!(args.json);
    }

    #[test]
    fn scene_is_read_from_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.txt");
        std::fs::write(&path, "The rain fell. Nobody came.").unwrap();
        let text = read_scene(path.to_str().unwrap()).unwrap();
        assert_eq!(text, "The rain fell. Nobody came.");
        assert!(read_scene(dir.path().join("missing.txt").to_str().unwrap()).is_err());
    }
}
