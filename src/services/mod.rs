//! Service layer module
//!
//! Contains the Amadeus HTTP client, token exchange, request parsing,
//! response normalization and mock fixtures

pub mod auth;
pub mod client;
pub mod mock;
pub mod normalizer;
pub mod parser;

pub use auth::{AccessToken, AuthClient};
pub use client::AmadeusClient;
