//! Vote decision policies

mod confidence;

pub use confidence::ConfidenceScoreDecision;
