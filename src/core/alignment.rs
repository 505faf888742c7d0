/// Alignment comparator — scores a style profile against a target envelope.
///
/// Rules run in a fixed order over a running tally. Penalties are applied to
/// the running score as each rule fires; the score is clamped and rounded
/// once, after the last rule.
use crate::schema::profile::NarrativeStyleProfile;
use crate::schema::report::{StyleAlignmentReport, NO_ISSUES_FLAG};
use crate::schema::target::StyleTargetProfile;
use crate::schema::values::{clamp01, clamp100, ConfidenceScore, NonEmptyList};

/// Score every comparison starts from.
pub const PERFECT_SCORE: f64 = 100.0;

pub const TONE_PENALTY: f64 = 20.0;
pub const VOICE_PENALTY: f64 = 20.0;
pub const SLOW_PACING_PENALTY: f64 = 15.0;
pub const FAST_PACING_PENALTY: f64 = 10.0;
pub const EMOTION_PENALTY: f64 = 10.0;
pub const LEXICAL_PENALTY: f64 = 5.0;

/// Lexical complexity below this is flagged regardless of target.
pub const LEXICAL_COMPLEXITY_FLOOR: f64 = 0.2;

pub const PACING_TOO_SLOW_FLAG: &str = "pacing too slow";
pub const PACING_TOO_FAST_FLAG: &str = "pacing too fast";
pub const EMOTION_TOO_LOW_FLAG: &str = "emotional density too low";
pub const EMOTION_TOO_HIGH_FLAG: &str = "emotional density too high";
pub const VOCABULARY_TOO_SIMPLE_FLAG: &str = "vocabulary too simple";

pub const INVALID_INPUT_FLAG: &str = "invalid input: a style profile and a target profile are both required";
pub const INVALID_INPUT_RECOMMENDATION: &str =
    "Provide a valid style profile and target profile to compare.";

/// One detected mismatch.
#[derive(Debug, Clone, PartialEq)]
pub struct Drift {
    pub flag: String,
    pub recommendation: String,
    pub penalty: f64,
}

/// Running state threaded through the rules.
#[derive(Debug, Clone, PartialEq)]
pub struct Tally {
    pub score: f64,
    pub flags: Vec<String>,
    pub recommendations: Vec<String>,
}

impl Tally {
    fn new() -> Self {
        Self {
            score: PERFECT_SCORE,
            flags: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    fn apply(mut self, drift: Drift) -> Self {
        self.score -= drift.penalty;
        self.flags.push(drift.flag);
        self.recommendations.push(drift.recommendation);
        self
    }
}

/// A rule inspects the pair and reports at most one drift.
pub type AlignmentRule = fn(&NarrativeStyleProfile, &StyleTargetProfile) -> Option<Drift>;

/// The rules, in the order their flags are emitted and penalties deducted.
pub const RULES: &[AlignmentRule] = &[
    tone_rule,
    voice_rule,
    pacing_rule,
    emotion_density_rule,
    lexical_complexity_rule,
];

fn tone_rule(profile: &NarrativeStyleProfile, target: &StyleTargetProfile) -> Option<Drift> {
    let actual = &profile.tone.value;
    let expected = &target.expected_tone;
    (actual != expected).then(|| Drift {
        flag: format!("tone is {actual}, expected {expected}"),
        recommendation: format!("Adjust tone toward {expected}."),
        penalty: TONE_PENALTY,
    })
}

fn voice_rule(profile: &NarrativeStyleProfile, target: &StyleTargetProfile) -> Option<Drift> {
    let actual = profile.voice.value;
    let expected = target.target_voice;
    (actual != expected).then(|| Drift {
        flag: format!("voice is {actual}, expected {expected}"),
        recommendation: format!("Rewrite to use {expected} voice."),
        penalty: VOICE_PENALTY,
    })
}

fn pacing_rule(profile: &NarrativeStyleProfile, target: &StyleTargetProfile) -> Option<Drift> {
    let pacing = clamp01(profile.pacing_score.value.value());
    let min = target.pacing_range.min().value();
    let max = target.pacing_range.max().value();
    if pacing < min {
        tracing::debug!(pacing, min, "pacing below target range");
        Some(Drift {
            flag: PACING_TOO_SLOW_FLAG.to_string(),
            recommendation: "Shorten sentences and add more action to quicken the pace."
                .to_string(),
            penalty: SLOW_PACING_PENALTY,
        })
    } else if pacing > max {
        tracing::debug!(pacing, max, "pacing above target range");
        Some(Drift {
            flag: PACING_TOO_FAST_FLAG.to_string(),
            recommendation: "Add more description and slower transitions to ease the pace."
                .to_string(),
            penalty: FAST_PACING_PENALTY,
        })
    } else {
        None
    }
}

fn emotion_density_rule(
    profile: &NarrativeStyleProfile,
    target: &StyleTargetProfile,
) -> Option<Drift> {
    let density = profile.emotion_density.value.value();
    let min = target.emotion_density_range.min().value();
    let max = target.emotion_density_range.max().value();
    if density < min {
        tracing::debug!(density, min, "emotion density below target range");
        Some(Drift {
            flag: EMOTION_TOO_LOW_FLAG.to_string(),
            recommendation: "Add more emotional language to deepen reader engagement."
                .to_string(),
            penalty: EMOTION_PENALTY,
        })
    } else if density > max {
        tracing::debug!(density, max, "emotion density above target range");
        Some(Drift {
            flag: EMOTION_TOO_HIGH_FLAG.to_string(),
            recommendation: "Balance emotional language with neutral narration.".to_string(),
            penalty: EMOTION_PENALTY,
        })
    } else {
        None
    }
}

fn lexical_complexity_rule(
    profile: &NarrativeStyleProfile,
    _target: &StyleTargetProfile,
) -> Option<Drift> {
    let complexity = profile.lexical_complexity.value.value();
    (complexity < LEXICAL_COMPLEXITY_FLOOR).then(|| Drift {
        flag: VOCABULARY_TOO_SIMPLE_FLAG.to_string(),
        recommendation: "Use more varied vocabulary.".to_string(),
        penalty: LEXICAL_PENALTY,
    })
}

/// Run every rule in order and return the final tally, before clamping.
pub fn tally(profile: &NarrativeStyleProfile, target: &StyleTargetProfile) -> Tally {
    RULES.iter().fold(Tally::new(), |tally, rule| match rule(profile, target) {
        Some(drift) => tally.apply(drift),
        None => tally,
    })
}

/// Compare a profile against a target.
pub fn compare(profile: &NarrativeStyleProfile, target: &StyleTargetProfile) -> StyleAlignmentReport {
    let Tally {
        score,
        flags,
        recommendations,
    } = tally(profile, target);

    let alignment_score = ConfidenceScore::saturating(clamp100(score).round());
    tracing::debug!(
        genre = %target.genre,
        score = alignment_score.value(),
        drifts = flags.len(),
        "compared profile to target"
    );

    StyleAlignmentReport {
        alignment_score,
        drift_flags: NonEmptyList::or_single(flags, NO_ISSUES_FLAG.to_string()),
        recommendations,
        profile: profile.clone(),
    }
}

/// Compare with possibly-missing inputs. Never fails.
///
/// A missing profile or target yields a zero-score report with a single
/// invalid-input flag; the embedded profile is the given one if present,
/// otherwise the analyzer's fallback profile.
pub fn compare_to_target(
    profile: Option<&NarrativeStyleProfile>,
    target: Option<&StyleTargetProfile>,
) -> StyleAlignmentReport {
    match (profile, target) {
        (Some(profile), Some(target)) => compare(profile, target),
        (profile, _) => {
            tracing::warn!(
                has_profile = profile.is_some(),
                "alignment requested without both a profile and a target"
            );
            StyleAlignmentReport {
                alignment_score: ConfidenceScore::saturating(0.0),
                drift_flags: NonEmptyList::single(INVALID_INPUT_FLAG.to_string()),
                recommendations: vec![INVALID_INPUT_RECOMMENDATION.to_string()],
                profile: profile
                    .cloned()
                    .unwrap_or_else(NarrativeStyleProfile::fallback),
            }
        }
    }
}
