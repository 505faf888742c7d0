//! Narrative Style — heuristic style profiling and genre alignment for prose.
//!
//! Derives a quantified style profile from a scene (tone, voice, pacing,
//! emotional density, lexical complexity, sentence variance, descriptors),
//! each field carrying a confidence score, and compares it against a genre
//! target envelope to produce a drift report with an alignment score.

pub mod core;
pub mod schema;

pub use crate::core::alignment::{compare, compare_to_target};
pub use crate::core::analyzer::analyze_style;
pub use crate::core::engine::{EngineError, StyleEngine};
pub use crate::core::presets::{PresetError, PresetRegistry};
pub use crate::schema::profile::NarrativeStyleProfile;
pub use crate::schema::report::StyleAlignmentReport;
pub use crate::schema::style::{NarrativeVoice, Tone};
pub use crate::schema::target::StyleTargetProfile;
pub use crate::schema::values::ValidationError;
