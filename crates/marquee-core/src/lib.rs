//! # marquee-core
//!
//! Domain model and in-memory store for the Marquee movie catalog.
//!
//! This crate is responsible for:
//! - The `Movie` entity and its derived rating views
//! - Field validation rules shared by create and update payloads
//! - The `MovieCatalog` store (unique ids, atomic per-request mutations)
//! - Observability initialization shared with the API binary

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]
#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod catalog;
pub mod error;
pub mod movie;
pub mod observability;
pub mod validate;

pub use catalog::MovieCatalog;
pub use error::{Error, Result};
pub use movie::{Movie, MovieUpdate};
pub use validate::{ValidationIssue, Validator};
