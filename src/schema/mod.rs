pub mod profile;
pub mod report;
pub mod style;
pub mod target;
pub mod values;
