//! hotel-search skill
//!
//! Searches hotel offers via the Amadeus API, or serves mock offers when
//! `AMADEUS_API_KEY`/`AMADEUS_API_SECRET` are unset.

use std::process::ExitCode;
use travel_skills::{execute, HotelSearch};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    execute(HotelSearch).await
}
