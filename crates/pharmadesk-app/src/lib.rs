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

//! Navigation policy for authenticated screens.
//!
//! Layout: `route.rs` (destinations and their requirements), `guard.rs`
//! (per-screen session checks), `elevation.rs` (admin password prompts),
//! `workflows.rs` (elevated mutations end to end).

pub mod elevation;
pub mod guard;
pub mod navigator;
pub mod route;
pub mod workflows;

pub use elevation::{ElevationGate, ElevationOutcome, ElevationPrompt, ElevationPrompts};
pub use guard::{Admission, GuardMount, RouteGuard};
pub use navigator::Navigator;
pub use route::{Route, RouteRequirement};
pub use workflows::{MutationStatus, UserAdministration};
