//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ConfigError`] — invalid round/network configuration
//! - [`error::ValidationError`] — invalid block input
//! - [`error::ChainError`] — inconsistent persisted chain

pub mod error;
