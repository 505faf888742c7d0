use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::values::ValidationError;

/// The emotional register of a passage.
///
/// Known tones are closed variants; anything else is carried verbatim in
/// `Other` so that targets authored against a newer vocabulary still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Tone {
    Neutral,
    Emotive,
    Dark,
    Warm,
    Sarcastic,
    Tense,
    Melancholic,
    Optimistic,
    Other(String),
}

impl Tone {
    pub fn name(&self) -> &str {
        match self {
            Self::Neutral => "neutral",
            Self::Emotive => "emotive",
            Self::Dark => "dark",
            Self::Warm => "warm",
            Self::Sarcastic => "sarcastic",
            Self::Tense => "tense",
            Self::Melancholic => "melancholic",
            Self::Optimistic => "optimistic",
            Self::Other(name) => name,
        }
    }

    /// True for every tone outside the closed vocabulary.
    pub fn is_other(&self) -> bool {
        matches!(self, Self::Other(_))
    }
}

impl FromStr for Tone {
    type Err = ValidationError;

    /// Case-insensitive; unknown names become `Other`. Blank names are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "tone" });
        }
        Ok(match trimmed.to_lowercase().as_str() {
            "neutral" => Self::Neutral,
            "emotive" => Self::Emotive,
            "dark" => Self::Dark,
            "warm" => Self::Warm,
            "sarcastic" => Self::Sarcastic,
            "tense" => Self::Tense,
            "melancholic" => Self::Melancholic,
            "optimistic" => Self::Optimistic,
            _ => Self::Other(trimmed.to_string()),
        })
    }
}

impl TryFrom<String> for Tone {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Tone> for String {
    fn from(tone: Tone) -> String {
        match tone {
            Tone::Other(name) => name,
            known => known.name().to_string(),
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown narrative voice '{0}'")]
pub struct UnknownVoice(pub String);

/// The narrating stance of a passage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NarrativeVoice {
    Formal,
    Casual,
    Omniscient,
    Intimate,
    StreamOfConsciousness,
    Conversational,
    Poetic,
}

impl NarrativeVoice {
    pub const ALL: [NarrativeVoice; 7] = [
        Self::Formal,
        Self::Casual,
        Self::Omniscient,
        Self::Intimate,
        Self::StreamOfConsciousness,
        Self::Conversational,
        Self::Poetic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Formal => "formal",
            Self::Casual => "casual",
            Self::Omniscient => "omniscient",
            Self::Intimate => "intimate",
            Self::StreamOfConsciousness => "stream-of-consciousness",
            Self::Conversational => "conversational",
            Self::Poetic => "poetic",
        }
    }
}

impl FromStr for NarrativeVoice {
    type Err = UnknownVoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        Self::ALL
            .into_iter()
            .find(|voice| voice.name() == normalized)
            .ok_or_else(|| UnknownVoice(s.to_string()))
    }
}

impl TryFrom<String> for NarrativeVoice {
    type Error = UnknownVoice;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<NarrativeVoice> for String {
    fn from(voice: NarrativeVoice) -> String {
        voice.name().to_string()
    }
}

impl fmt::Display for NarrativeVoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_parses_known_names() {
        assert_eq!("dark".parse::<Tone>().unwrap(), Tone::Dark);
        assert_eq!(" Warm ".parse::<Tone>().unwrap(), Tone::Warm);
        assert_eq!("MELANCHOLIC".parse::<Tone>().unwrap(), Tone::Melancholic);
    }

    #[test]
    fn tone_keeps_unknown_names() {
        let tone: Tone = " whimsical ".parse().unwrap();
        assert_eq!(tone, Tone::Other("whimsical".to_string()));
        assert!(tone.is_other());
        assert_eq!(tone.to_string(), "whimsical");
    }

    #[test]
    fn tone_serializes_as_string() {
        assert_eq!(ron::to_string(&Tone::Sarcastic).unwrap(), "\"sarcastic\"");
        let parsed: Tone = ron::from_str("\"noir\"").unwrap();
        assert_eq!(parsed, Tone::Other("noir".to_string()));
    }

    #[test]
    fn blank_tone_names_are_rejected() {
        assert_eq!("".parse::<Tone>(), Err(ValidationError::Empty { field: "tone" }));
        assert!("   ".parse::<Tone>().is_err());
        assert!(ron::from_str::<Tone>("\"\"").is_err());
        assert!(serde_json::from_str::<Tone>("\"  \"").is_err());
    }

    #[test]
    fn voice_round_trips_names() {
        for voice in NarrativeVoice::ALL {
            assert_eq!(voice.name().parse::<NarrativeVoice>().unwrap(), voice);
        }
    }

    #[test]
    fn voice_accepts_separator_variants() {
        assert_eq!(
            "stream_of_consciousness".parse::<NarrativeVoice>().unwrap(),
            NarrativeVoice::StreamOfConsciousness
        );
        assert_eq!(
            "Stream of Consciousness".parse::<NarrativeVoice>().unwrap(),
            NarrativeVoice::StreamOfConsciousness
        );
    }

    #[test]
    fn voice_rejects_unknown() {
        assert_eq!(
            "second-person".parse::<NarrativeVoice>(),
            Err(UnknownVoice("second-person".to_string()))
        );
        assert!(ron::from_str::<NarrativeVoice>("\"chatty\"").is_err());
    }
}
