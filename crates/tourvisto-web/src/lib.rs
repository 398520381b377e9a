//! Tourvisto admin web server
//!
//! Serves the admin pages (dashboard, user grid, trip creation) as JSON view
//! models and handles trip draft submission.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod auth;
pub mod extractors;
pub mod form;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;
pub mod submission;
pub mod views;

// Re-export the main functions
pub use form::TripForm;
pub use server::{build_app, build_app_with_state};
pub use state::AppState;
pub use submission::{SubmissionCoordinator, SubmissionOutcome};
