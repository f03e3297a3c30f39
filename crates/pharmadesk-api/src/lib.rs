#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Typed client for the pharmacy operations REST backend.
//!
//! One [`ApiClient`] owns the middleware pipeline (bearer injection included)
//! and exposes the backend contract as async methods. Auth endpoints live in
//! `auth.rs`; each entity family (`/user`, `/customer`, `/supplier`,
//! `/patient`, `/doctor`, `/medicine`, `/company`) gets its own module under
//! `endpoints/` with the camelCase wire payloads it speaks.
//!
//! Layout:
//! - `config.rs`: base URL and timeout resolution
//! - `client.rs`: `ApiClient`, request helpers, rejection classifier
//! - `auth.rs`: login / logout / session validation
//! - `endpoints/`: entity CRUD surfaces
//! - `error.rs`: `ApiError`

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;

pub use auth::{DeniedReason, SessionCheck};
pub use client::{ApiClient, NameFilter, SearchFilter};
pub use config::ClientConfig;
pub use endpoints::user::{NewUser, User};
pub use error::{ApiError, ApiResult};
