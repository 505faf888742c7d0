/// Style analyzer — derives a `NarrativeStyleProfile` from raw prose.
///
/// Every field is computed by an independent lexical heuristic. Numeric
/// results are passed through their validated constructors, so an internal
/// miscalculation surfaces as a `ValidationError` rather than a corrupt
/// profile.
use rustc_hash::FxHashSet;

use crate::core::lexicon::{self, IndicatorRule, TONE_RULES, VOICE_RULES};
use crate::core::text;
use crate::schema::profile::{Measured, NarrativeStyleProfile, DESCRIPTOR_PLACEHOLDER};
use crate::schema::style::{NarrativeVoice, Tone};
use crate::schema::values::{
    clamp01, ConfidenceScore, EmotionDensity, LexicalComplexity, NonEmptyList, PacingScore,
    SentenceVariance, ValidationError,
};

/// Texts shorter than this (after trimming) get the fallback profile.
pub const MIN_TEXT_CHARS: usize = 20;

/// Emotion density above which an otherwise unmarked passage reads as emotive.
pub const EMOTIVE_DENSITY_THRESHOLD: f64 = 0.1;

/// Sentence variance below this is fast pacing; at or above it, slow.
pub const PACING_VARIANCE_THRESHOLD: f64 = 7.0;
pub const FAST_PACING: f64 = 1.0;
pub const SLOW_PACING: f64 = 0.3;

/// Every tone `analyze_style` can report.
pub const DETECTABLE_TONES: &[Tone] = &[
    Tone::Dark,
    Tone::Warm,
    Tone::Sarcastic,
    Tone::Emotive,
    Tone::Neutral,
];

/// Every voice `analyze_style` can report.
pub const DETECTABLE_VOICES: &[NarrativeVoice] = &[
    NarrativeVoice::Intimate,
    NarrativeVoice::Casual,
    NarrativeVoice::Formal,
    NarrativeVoice::Omniscient,
];

const EMOTIVE_CONFIDENCE: f64 = 80.0;
const NEUTRAL_CONFIDENCE: f64 = 70.0;
const OMNISCIENT_CONFIDENCE: f64 = 70.0;
const PACING_CONFIDENCE: f64 = 70.0;
const EMOTION_CONFIDENCE: f64 = 70.0;
const LEXICAL_CONFIDENCE: f64 = 70.0;
const VARIANCE_CONFIDENCE: f64 = 70.0;
const DESCRIPTORS_CONFIDENCE: f64 = 60.0;

/// Analyze `text` into a style profile.
///
/// Degenerate input (empty, under `MIN_TEXT_CHARS`, or without any sentence
/// delimiter) yields `NarrativeStyleProfile::fallback()`, which carries a
/// warning and depressed confidences. An `Err` means an internal invariant was
/// broken, not that the input was bad.
pub fn analyze_style(text: &str) -> Result<NarrativeStyleProfile, ValidationError> {
    let trimmed = text.trim();
    if is_degenerate(trimmed) {
        tracing::debug!(chars = trimmed.chars().count(), "degenerate input, using fallback profile");
        return Ok(NarrativeStyleProfile::fallback());
    }

    let words = text::words(trimmed);
    let sentences = text::sentences(trimmed);

    let emotion_density = emotion_density(&words);
    let lexical_complexity = lexical_complexity(&words);
    let sentence_variance = sentence_variance(&sentences);
    let key_descriptors = key_descriptors(&words);
    let (tone, tone_confidence) = classify_tone(trimmed, emotion_density);
    let (voice, voice_confidence) = classify_voice(trimmed);
    let pacing = pacing_for_variance(sentence_variance);

    tracing::debug!(
        words = words.len(),
        sentences = sentences.len(),
        %tone,
        %voice,
        emotion_density,
        lexical_complexity,
        sentence_variance,
        "analyzed passage"
    );

    Ok(NarrativeStyleProfile {
        tone: Measured::new(tone, ConfidenceScore::new(tone_confidence)?),
        voice: Measured::new(voice, ConfidenceScore::new(voice_confidence)?),
        pacing_score: Measured::new(
            PacingScore::new(pacing)?,
            ConfidenceScore::new(PACING_CONFIDENCE)?,
        ),
        emotion_density: Measured::new(
            EmotionDensity::new(emotion_density)?,
            ConfidenceScore::new(EMOTION_CONFIDENCE)?,
        ),
        lexical_complexity: Measured::new(
            LexicalComplexity::new(lexical_complexity)?,
            ConfidenceScore::new(LEXICAL_CONFIDENCE)?,
        ),
        sentence_variance: Measured::new(
            SentenceVariance::new(sentence_variance)?,
            ConfidenceScore::new(VARIANCE_CONFIDENCE)?,
        ),
        key_descriptors: Measured::new(
            NonEmptyList::or_single(key_descriptors, DESCRIPTOR_PLACEHOLDER.to_string()),
            ConfidenceScore::new(DESCRIPTORS_CONFIDENCE)?,
        ),
        warning: None,
    })
}

/// Too short to profile, or no sentence delimiter at all.
fn is_degenerate(trimmed: &str) -> bool {
    trimmed.is_empty()
        || trimmed.chars().count() < MIN_TEXT_CHARS
        || text::delimiter_segments(trimmed) < 2
}

fn emotion_density(words: &[&str]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let hits = words.iter().filter(|w| lexicon::is_emotion_word(w)).count();
    clamp01(hits as f64 / words.len() as f64)
}

fn lexical_complexity(words: &[&str]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let distinct: FxHashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
    clamp01(distinct.len() as f64 / words.len() as f64)
}

fn sentence_variance(sentences: &[&str]) -> f64 {
    let lengths: Vec<usize> = sentences.iter().map(|s| text::words(s).len()).collect();
    text::sample_std_dev(&lengths)
}

/// Distinct descriptor tokens in first-seen order, case preserved.
fn key_descriptors(words: &[&str]) -> Vec<String> {
    let mut seen = FxHashSet::default();
    words
        .iter()
        .filter(|w| lexicon::is_descriptor(w))
        .filter(|w| seen.insert(**w))
        .map(|w| w.to_string())
        .collect()
}

fn first_match<T: Clone>(rules: &[IndicatorRule<T>], text: &str) -> Option<(T, f64)> {
    rules
        .iter()
        .find(|rule| rule.pattern.is_match(text))
        .map(|rule| (rule.value.clone(), rule.confidence))
}

fn classify_tone(text: &str, emotion_density: f64) -> (Tone, f64) {
    if let Some(hit) = first_match(&TONE_RULES, text) {
        return hit;
    }
    if emotion_density > EMOTIVE_DENSITY_THRESHOLD {
        (Tone::Emotive, EMOTIVE_CONFIDENCE)
    } else {
        (Tone::Neutral, NEUTRAL_CONFIDENCE)
    }
}

fn classify_voice(text: &str) -> (NarrativeVoice, f64) {
    first_match(&VOICE_RULES, text).unwrap_or((NarrativeVoice::Omniscient, OMNISCIENT_CONFIDENCE))
}

/// A hard step at `PACING_VARIANCE_THRESHOLD`; deliberately not smoothed.
fn pacing_for_variance(variance: f64) -> f64 {
    if variance < PACING_VARIANCE_THRESHOLD {
        FAST_PACING
    } else {
        SLOW_PACING
    }
}
