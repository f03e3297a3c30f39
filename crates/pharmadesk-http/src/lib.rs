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

//! HTTP plumbing for the Pharmadesk client.
//!
//! Every outgoing call is described by a [`RequestDescriptor`], pushed
//! through an ordered chain of [`Middleware`] augmenters, and finally handed
//! to a [`Transport`] that performs the network round trip. Cross-cutting
//! concerns (today: bearer-token injection) live in the chain so call sites
//! never touch them.
//!
//! Layout:
//! - `request.rs`: the immutable request description
//! - `response.rs`: the owned response handed back up the chain
//! - `middleware.rs`: the `Middleware` trait, `Next` continuation, `Pipeline`
//! - `bearer.rs`: Authorization-header augmenter
//! - `transport.rs`: reqwest-backed terminal stage
//! - `error.rs`: `HttpError`

pub mod bearer;
pub mod error;
pub mod middleware;
pub mod request;
pub mod response;
pub mod transport;

pub use bearer::BearerAuth;
pub use error::{HttpError, HttpResult};
pub use middleware::{Middleware, Next, Pipeline};
pub use request::RequestDescriptor;
pub use response::Response;
pub use transport::{ReqwestTransport, Transport};
