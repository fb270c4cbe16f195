//! Data models module
//!
//! Defines the skill request/response structures and the upstream Amadeus
//! payload shapes

pub mod amadeus;
pub mod request;
pub mod response;

pub use request::{FlightQuery, HotelQuery, SearchConfig, SkillInput};
pub use response::{
    FlightResult, HotelPrice, HotelResult, Metadata, Price, SkillResponse, MOCK_SOURCE,
};
