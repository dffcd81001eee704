//! Quorum voting domain
//!
//! A round collects opinions from a fixed population of workers into a
//! [`Tally`]. The first opinion that brings the accept count up to the
//! quorum decides the round; if the round's deadline passes first the
//! candidate is rejected.
//!
//! ```text
//!            ┌──────────┐  record_opinion   ┌────────┐
//!  worker ──▶│ decision │ ────────────────▶ │ Tally  │── reached_quorum_now ─▶ controller
//!  (xN)      └──────────┘                   └────────┘
//! ```

pub mod config;
pub mod outcome;
pub mod tally;

pub use config::{MIN_QUORUM, RoundConfig};
pub use outcome::{RoundOutcome, RoundState};
pub use tally::{Tally, TallyUpdate};
