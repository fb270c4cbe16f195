//! Skill pipeline
//!
//! request-validate → authenticate → query → normalize → respond, written
//! once for any `SearchProvider`. Every failure becomes an error envelope;
//! nothing escapes as a panic or a non-zero exit.

use super::output::write_output;
use crate::config::Settings;
use crate::models::{Metadata, SkillInput, SkillResponse, MOCK_SOURCE};
use crate::providers::SearchProvider;
use crate::services::{parser, AmadeusClient};
use crate::utils::error::{SkillError, SkillResult};
use crate::utils::logging::init_logging;
use crate::SKILL_VERSION;
use std::process::ExitCode;
use std::time::Instant;
use tokio::io::AsyncReadExt;
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

/// Run the pipeline on an already parsed input document
pub async fn run_skill<P: SearchProvider>(
    provider: &P,
    settings: &Settings,
    input: &SkillInput,
) -> SkillResponse<P::Item> {
    let skill = provider.manifest().name.as_str();

    let query = match provider.parse_query(input) {
        Ok(query) => query,
        Err(e) => {
            warn!("Rejected request: {}", e);
            return error_response(skill, &e);
        }
    };

    let started = Instant::now();

    let (results, source_api) = match settings.amadeus.credentials() {
        Some(credentials) => {
            match search_live(provider, settings, &credentials, &query).await {
                Ok(results) => (results, provider.source_api().to_string()),
                Err(e) => {
                    error!("Search failed with {}: {}", e.code(), e);
                    return error_response(skill, &e);
                }
            }
        }
        None => {
            info!("Amadeus credentials not set, serving mock results");
            (provider.mock_results(&query), MOCK_SOURCE.to_string())
        }
    };

    let metadata = Metadata {
        query_time_ms: started.elapsed().as_millis() as u64,
        source_api,
        cached: false,
    };

    info!(
        "Search completed: {} results from {} in {}ms",
        results.len(),
        metadata.source_api,
        metadata.query_time_ms
    );

    SkillResponse::success(skill, SKILL_VERSION, results, metadata)
}

/// Run the pipeline on raw stdin text
pub async fn respond<P: SearchProvider>(
    provider: &P,
    settings: &Settings,
    raw_input: &str,
) -> SkillResponse<P::Item> {
    match parser::parse_input(raw_input) {
        Ok(input) => run_skill(provider, settings, &input).await,
        Err(e) => {
            warn!("Rejected input document: {}", e);
            error_response(&provider.manifest().name, &e)
        }
    }
}

/// Binary entry point shared by every skill
///
/// Reads stdin, runs the pipeline and writes the framed response to stdout.
/// Always exits successfully once the response has been written.
pub async fn execute<P: SearchProvider>(provider: P) -> ExitCode {
    let settings = Settings::new(provider.manifest());
    init_logging(&settings.logging);

    let skill = provider.manifest().name.clone();
    let span = info_span!("skill", skill = %skill, invocation_id = %Uuid::new_v4());

    let response = async {
        for warning in &settings.warnings {
            warn!("{}", warning);
        }
        if let Err(e) = provider.manifest().validate() {
            warn!("Built-in manifest breaks harness rules: {:#}", e);
        }
        debug!("{} loaded settings: {:?}", crate::version_info(), settings);

        match read_stdin().await {
            Ok(raw) => respond(&provider, &settings, &raw).await,
            Err(e) => error_response(&skill, &e),
        }
    }
    .instrument(span)
    .await;

    let mut stdout = std::io::stdout().lock();
    match write_output(&mut stdout, &response) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to write skill output: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn search_live<P: SearchProvider>(
    provider: &P,
    settings: &Settings,
    credentials: &crate::config::Credentials,
    query: &P::Query,
) -> SkillResult<Vec<P::Item>> {
    settings.ensure_live_ready()?;
    let client = AmadeusClient::new(&settings.amadeus)?;

    let token = provider.authenticate(&client, credentials).await?;
    let offers = provider.search(&client, &token, query).await?;

    Ok(offers.iter().map(|raw| provider.normalize(raw)).collect())
}

async fn read_stdin() -> SkillResult<String> {
    let mut raw = String::new();
    tokio::io::stdin()
        .read_to_string(&mut raw)
        .await
        .map_err(|e| SkillError::InvalidParams(format!("Failed to read input: {}", e)))?;

    Ok(raw)
}

fn error_response<T>(skill: &str, err: &SkillError) -> SkillResponse<T> {
    SkillResponse::error(skill, SKILL_VERSION, err.to_error_body())
}
