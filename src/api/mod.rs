//! # API Module
//!
//! HTTP endpoints served by the application.
//!
//! ## Endpoints
//!
//! - [`top_tracks`] - Accepts a playlist link, aggregates every track of
//!   the playlist through the Spotify Web API and answers with the five
//!   most popular ones. This is the one functional endpoint of the service.
//! - [`health`] - Health check endpoint returning application status and
//!   version information for monitoring systems and load balancers.
//!
//! ## Architecture
//!
//! Built on the [Axum](https://docs.rs/axum) web framework; each endpoint
//! is an async function wired into the router in [`crate::server`]. The
//! shared [`crate::management::TokenManager`] reaches the handler through
//! an axum `Extension`, which keeps the credential provider substitutable.
//!
//! ## Related Modules
//!
//! - [`crate::spotify`] - Spotify API integration
//! - [`crate::types`] - Request and response body definitions

mod health;
mod top_tracks;

pub use health::health;
pub use top_tracks::top_tracks;
