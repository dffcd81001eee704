//! Candidate blocks and the input that feeds the block processor.
//!
//! - [`id::BlockId`] — a validated, non-blank block identifier
//! - [`candidate::Candidate`] — a block awaiting a voting round
//! - [`input::BlockInput`] — start height plus ordered candidate identifiers

pub mod candidate;
pub mod id;
pub mod input;
