/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses decoded as JSON or typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod public;

pub use error::{Result, SwitcheoError};

pub use client::{ClientConfig, DEFAULT_API_VERSION, DEFAULT_BASE_URL, HttpClient, PostBody};
pub use public::PublicClient;
