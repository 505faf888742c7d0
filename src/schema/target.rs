use serde::{Deserialize, Serialize};

use super::style::{NarrativeVoice, Tone};
use super::values::{EmotionDensity, NonEmptyString, PacingScore, ScoreRange, ValidationError};

/// A genre envelope that analyzed profiles are compared against.
///
/// Categorical dimensions carry one expected value; ranged dimensions carry
/// an inclusive `(min, max)` window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleTargetProfile {
    pub genre: NonEmptyString,
    pub expected_tone: Tone,
    pub target_voice: NarrativeVoice,
    pub pacing_range: ScoreRange<PacingScore>,
    pub emotion_density_range: ScoreRange<EmotionDensity>,
}

impl StyleTargetProfile {
    /// Build a target from raw values, validating every field.
    pub fn new(
        genre: &str,
        expected_tone: Tone,
        target_voice: NarrativeVoice,
        pacing_range: (f64, f64),
        emotion_density_range: (f64, f64),
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            genre: NonEmptyString::new(genre)?,
            expected_tone,
            target_voice,
            pacing_range: ScoreRange::new(
                PacingScore::new(pacing_range.0)?,
                PacingScore::new(pacing_range.1)?,
            )?,
            emotion_density_range: ScoreRange::new(
                EmotionDensity::new(emotion_density_range.0)?,
                EmotionDensity::new(emotion_density_range.1)?,
            )?,
        })
    }
}
