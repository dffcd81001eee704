//! Progress reporting for block processing

pub mod reporter;
