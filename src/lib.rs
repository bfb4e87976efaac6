//! Adesk SDK for Rust.
//!
//! A thin, synchronous client for the Adesk accounting API. It covers both
//! the form-encoded v1 API and the JSON v2 API.
//!
//! # What This SDK Provides
//!
//! - One entry point: [`AdeskClient`]
//! - Resource wrappers such as [`resources::Projects`] and [`resources::Operations`],
//!   plus the v2 custom reports reached through [`AdeskClient::v2`]
//! - Typed models hydrated leniently from API payloads ([`models`])
//! - A pluggable HTTP layer ([`Transport`]) for tests and custom stacks
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use adesk_sdk::{AdeskClient, resources::{NewProject, ProjectFilter}};
//!
//! fn main() -> Result<(), adesk_sdk::AdeskError> {
//!     let client = AdeskClient::new("your-api-token");
//!
//!     let project = client.projects().create(&NewProject::new("Q1 Launch"))?;
//!     println!("created: {:?}", project.and_then(|p| p.id));
//!
//!     for project in client.projects().list(&ProjectFilter::default())? {
//!         println!("{:?} {:?}", project.id, project.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Calls block until the response arrives. The client never retries. Use
//! [`AdeskError::is_retryable`] to build your own backoff policy.
//!
//! # Logging
//!
//! This crate emits debug-level logs through the [`log`](https://docs.rs/log/) facade
//! for every request and response. Configure any compatible logger in your binary, then
//! set `RUST_LOG=debug` to inspect request flow. The API token is never logged.
//!
//! # Errors
//!
//! All fallible operations return [`AdeskError`]:
//!
//! - `Validation` for missing required arguments, raised before any I/O
//! - `Auth`, `PaymentRequired`, `BadRequest`, `NotFound`, `RateLimit`, `Server`
//!   mapped from the HTTP status (and the v1 in-band code 21)
//! - `Api` for everything else, including network failures
//!
//! Every remote error exposes [`AdeskError::status_code`] and [`AdeskError::response_data`].
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod params;
pub mod resources;
pub mod transport;

// Re-export primary types for convenience.
pub use client::{AdeskClient, ApiV2};
pub use config::{ApiVersion, ClientConfig, DEFAULT_BASE_URL, DEFAULT_BASE_URL_V2};
pub use errors::{AdeskError, ApiFailure};
pub use params::Params;
pub use transport::{
    HttpMethod, HttpRequest, HttpResponse, RequestBody, ReqwestTransport, Transport,
    TransportError,
};
