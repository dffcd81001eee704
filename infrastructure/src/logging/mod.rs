//! Logging infrastructure — structured round logging.
//!
//! Provides [`JsonlRoundLogger`], a JSONL file writer that implements the
//! [`RoundProgressNotifier`](chain_application::RoundProgressNotifier) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlRoundLogger;
