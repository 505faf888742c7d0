use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::style::{NarrativeVoice, Tone};
use super::values::{
    ConfidenceScore, EmotionDensity, LexicalComplexity, NonEmptyList, PacingScore,
    SentenceVariance, ValidationError,
};

/// Stand-in descriptor used when nothing in the text qualifies.
pub const DESCRIPTOR_PLACEHOLDER: &str = "none";

/// Warning attached to the fallback profile.
pub const FALLBACK_WARNING: &str =
    "Input text is too short or non-narrative for reliable style analysis.";

/// Confidence reported for every field of the fallback profile.
pub const FALLBACK_CONFIDENCE: f64 = 20.0;

/// A value paired with the analyzer's confidence in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measured<T> {
    pub value: T,
    pub confidence: ConfidenceScore,
}

impl<T> Measured<T> {
    pub fn new(value: T, confidence: ConfidenceScore) -> Self {
        Self { value, confidence }
    }
}

/// The quantified style of a passage, as produced by the analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeStyleProfile {
    pub tone: Measured<Tone>,
    pub voice: Measured<NarrativeVoice>,
    pub pacing_score: Measured<PacingScore>,
    pub emotion_density: Measured<EmotionDensity>,
    pub lexical_complexity: Measured<LexicalComplexity>,
    pub sentence_variance: Measured<SentenceVariance>,
    pub key_descriptors: Measured<NonEmptyList<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

static FALLBACK: Lazy<NarrativeStyleProfile> = Lazy::new(|| {
    build_fallback().expect("fallback profile constants are within their declared ranges")
});

fn build_fallback() -> Result<NarrativeStyleProfile, ValidationError> {
    let low = ConfidenceScore::new(FALLBACK_CONFIDENCE)?;
    Ok(NarrativeStyleProfile {
        tone: Measured::new(Tone::Neutral, low),
        voice: Measured::new(NarrativeVoice::Omniscient, low),
        pacing_score: Measured::new(PacingScore::new(0.5)?, low),
        emotion_density: Measured::new(EmotionDensity::new(0.0)?, low),
        lexical_complexity: Measured::new(LexicalComplexity::new(0.0)?, low),
        sentence_variance: Measured::new(SentenceVariance::new(0.0)?, low),
        key_descriptors: Measured::new(
            NonEmptyList::single(DESCRIPTOR_PLACEHOLDER.to_string()),
            low,
        ),
        warning: Some(FALLBACK_WARNING.to_string()),
    })
}

impl NarrativeStyleProfile {
    /// The fixed low-confidence profile returned for degenerate input.
    pub fn fallback() -> Self {
        FALLBACK.clone()
    }

    /// True when the analyzer could not profile the text with confidence.
    pub fn is_low_confidence(&self) -> bool {
        self.warning.is_some()
    }

    /// Every field confidence, in declaration order.
    pub fn confidences(&self) -> [ConfidenceScore; 7] {
        [
            self.tone.confidence,
            self.voice.confidence,
            self.pacing_score.confidence,
            self.emotion_density.confidence,
            self.lexical_complexity.confidence,
            self.sentence_variance.confidence,
            self.key_descriptors.confidence,
        ]
    }
}
