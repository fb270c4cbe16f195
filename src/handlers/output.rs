//! Output framing
//!
//! A skill's stdout is exactly three lines: the start marker, one line of
//! compact JSON and the end marker. Anything a harness finds outside the
//! markers is ignored.

use crate::models::SkillResponse;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Write;
use tracing::error;

pub const OUTPUT_START: &str = "---SKILL_OUTPUT_START---";
pub const OUTPUT_END: &str = "---SKILL_OUTPUT_END---";

/// Render a response as the three framed lines
pub fn render_output<T: Serialize>(response: &SkillResponse<T>) -> String {
    // serde_json escapes control characters, so the body is one line
    let body = serde_json::to_string(response).unwrap_or_else(|e| {
        error!("Failed to serialize skill response: {}", e);
        fallback_body(response)
    });

    format!("{}\n{}\n{}\n", OUTPUT_START, body, OUTPUT_END)
}

/// Write a framed response and flush
pub fn write_output<W: Write, T: Serialize>(
    writer: &mut W,
    response: &SkillResponse<T>,
) -> std::io::Result<()> {
    writer.write_all(render_output(response).as_bytes())?;
    writer.flush()
}

/// Extract the response between the markers of a skill's stdout
pub fn parse_output<T: DeserializeOwned>(stdout: &str) -> Result<SkillResponse<T>> {
    let start = stdout
        .find(OUTPUT_START)
        .context("No output start marker found")?;
    let rest = &stdout[start + OUTPUT_START.len()..];
    let end = rest.find(OUTPUT_END).context("No output end marker found")?;

    let body = rest[..end].trim();
    if body.is_empty() {
        anyhow::bail!("Empty output between markers");
    }

    serde_json::from_str(body).context("Failed to parse JSON between output markers")
}

fn fallback_body<T>(response: &SkillResponse<T>) -> String {
    let (skill, version) = match response {
        SkillResponse::Success { skill, version, .. } | SkillResponse::Error { skill, version, .. } => {
            (skill.as_str(), version.as_str())
        }
    };

    serde_json::json!({
        "status": "error",
        "skill": skill,
        "version": version,
        "error": {
            "code": "INTERNAL_ERROR",
            "message": "Failed to serialize skill response",
        },
    })
    .to_string()
}
