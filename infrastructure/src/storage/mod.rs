//! JSON file adapters for the chain and input ports

mod json_chain_store;
mod json_input_source;

pub use json_chain_store::JsonChainStore;
pub use json_input_source::JsonInputSource;

use chain_application::PersistenceError;
use std::path::Path;

fn io_error(path: &Path, e: std::io::Error) -> PersistenceError {
    PersistenceError::Io(format!("{}: {}", path.display(), e))
}

fn malformed(path: &Path, e: serde_json::Error) -> PersistenceError {
    PersistenceError::Malformed(format!("{}: {}", path.display(), e))
}
