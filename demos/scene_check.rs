/// Scene Check example — scores three drafts of the same scene against a genre.
///
/// A revision pass: a bleak first draft, a warmer second draft, and a
/// fragment too short to profile. Each is checked against the built-in
/// young adult preset, then the first draft is checked against a custom
/// noir target registered on the engine.
///
/// Run with: cargo run --example scene_check
use narrative_style::core::engine::StyleEngine;
use narrative_style::schema::report::StyleAlignmentReport;
use narrative_style::schema::style::{NarrativeVoice, Tone};
use narrative_style::schema::target::StyleTargetProfile;

fn main() {
    let noir = StyleTargetProfile::new(
        "Noir",
        Tone::Dark,
        NarrativeVoice::Omniscient,
        (0.3, 1.0),
        (0.0, 0.2),
    )
    .expect("Failed to build noir target");

    let engine = StyleEngine::builder()
        .with_target("noir", noir)
        .build()
        .expect("Failed to build engine");

    let drafts = [
        (
            "Draft 1",
            "The world was bleak, every hope dashed by the endless rain. \
             The harbor lights flickered out one by one.",
        ),
        (
            "Draft 2",
            "We ran down to the harbor, laughing. A warm wind carried the smell of \
             bread from the bakery. Somebody started singing. We joined in.",
        ),
        ("Fragment", "Rain."),
    ];

    println!("=== Young Adult ===");
    for (label, text) in &drafts {
        let report = engine
            .check(text, "young_adult")
            .expect("Failed to check draft");
        print_report(label, &report);
    }

    println!("\n=== Noir ===");
    let report = engine
        .check(drafts[0].1, "noir")
        .expect("Failed to check draft");
    print_report(drafts[0].0, &report);
}

fn print_report(label: &str, report: &StyleAlignmentReport) {
    let profile = &report.profile;
    println!(
        "\n[{}] score {}/100  tone={} voice={} pacing={} emotion={:.3}",
        label,
        report.alignment_score,
        profile.tone.value,
        profile.voice.value,
        profile.pacing_score.value,
        profile.emotion_density.value.value(),
    );
    if let Some(ref warning) = profile.warning {
        println!("  ! {}", warning);
    }
    for flag in &report.drift_flags {
        println!("  - {}", flag);
    }
    for rec in &report.recommendations {
        println!("  > {}", rec);
    }
}
