//! Utilities module
//!
//! Contains error handling, logging and duration parsing

pub mod duration;
pub mod error;
pub mod logging;
