//! Skill handlers module
//!
//! Contains the shared pipeline and the stdout framing

pub mod output;
pub mod skill;

pub use output::{parse_output, render_output, write_output, OUTPUT_END, OUTPUT_START};
pub use skill::{execute, respond, run_skill};
