//! # marquee-api
//!
//! HTTP API for the Marquee movie catalog.
//!
//! This crate is responsible for:
//! - Exposing the `/movies` CRUD, rating, and query surface over axum
//! - Mapping catalog errors onto the `{ error, details? }` contract body
//! - Guarding every id-scoped route with a movie existence check
//! - Generating an `OpenAPI` spec served at `/openapi.json`

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]
#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod config;
pub mod error;
pub mod extract;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use server::Server;
pub use state::AppState;
