/// Fixed vocabularies and indicator patterns used by the style analyzer.
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

use crate::schema::style::{NarrativeVoice, Tone};

/// Closed vocabulary of emotion-bearing words, lowercase.
const EMOTION_WORDS: &[&str] = &[
    "love", "loved", "hate", "hated", "fear", "feared", "afraid", "joy", "joyful", "happy",
    "happiness", "sad", "sadness", "sorrow", "grief", "anger", "angry", "rage", "furious",
    "despair", "hope", "hopeless", "tears", "wept", "cry", "cried", "scream", "screamed",
    "terror", "terrified", "dread", "delight", "anxious", "anxiety", "lonely", "longing",
    "heartbreak", "ache", "ached", "shame", "guilt", "jealous", "envy", "bliss", "panic",
    "horror", "miserable", "elated", "yearning", "regret",
];

/// Suffixes that mark a token as a descriptor (adjective-like).
pub const DESCRIPTOR_SUFFIXES: &[&str] = &["y", "ful", "ous", "ive", "al", "ic", "less", "able", "ible"];

static EMOTION_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| EMOTION_WORDS.iter().copied().collect());

/// Case-insensitive membership in the emotion vocabulary.
pub fn is_emotion_word(word: &str) -> bool {
    EMOTION_SET.contains(word.to_lowercase().as_str())
}

/// True if the token ends with a descriptor suffix and has a stem before it.
pub fn is_descriptor(token: &str) -> bool {
    let lower = token.to_lowercase();
    DESCRIPTOR_SUFFIXES
        .iter()
        .any(|suffix| lower.len() > suffix.len() && lower.ends_with(suffix))
}

/// A keyword rule: when `pattern` matches, the passage gets `value` at `confidence`.
pub struct IndicatorRule<T> {
    pub pattern: Regex,
    pub value: T,
    pub confidence: f64,
}

fn keyword_rule<T>(words: &[&str], value: T, confidence: f64) -> IndicatorRule<T> {
    let alt = words.join("|");
    IndicatorRule {
        pattern: Regex::new(&format!(r"(?i)\b({alt})\b")).unwrap(),
        value,
        confidence,
    }
}

/// Keyword tone rules in priority order. Density-based tones follow these.
pub static TONE_RULES: Lazy<Vec<IndicatorRule<Tone>>> = Lazy::new(|| {
    vec![
        keyword_rule(&["dark", "gloomy", "grim", "bleak"], Tone::Dark, 90.0),
        keyword_rule(&["warm", "gentle", "kind", "hopeful"], Tone::Warm, 90.0),
        keyword_rule(&["sarcastic", "ironic", "mock"], Tone::Sarcastic, 80.0),
    ]
});

/// Pronoun voice rules in priority order.
pub static VOICE_RULES: Lazy<Vec<IndicatorRule<NarrativeVoice>>> = Lazy::new(|| {
    vec![
        keyword_rule(&["i", "my", "me", "mine"], NarrativeVoice::Intimate, 90.0),
        keyword_rule(&["we", "us", "our"], NarrativeVoice::Casual, 80.0),
        keyword_rule(&["thou", "thee", "thy", "thine"], NarrativeVoice::Formal, 80.0),
    ]
});
