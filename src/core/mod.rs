pub mod alignment;
pub mod analyzer;
pub mod engine;
pub mod lexicon;
pub mod presets;
pub mod text;
