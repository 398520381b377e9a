//! Clients for the services behind the Tourvisto admin
//!
//! The admin talks to three external systems: the account backend (sign-in
//! sessions and the users collection), the country list, and the trip
//! generation endpoint. Each one is a trait in [`service`] with a reqwest
//! implementation and an in-memory mock.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    missing_docs
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::multiple_crate_versions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::cast_possible_truncation,
    clippy::return_self_not_must_use,
    clippy::unused_async
)]

pub mod baas;
pub mod countries;
pub mod error;
pub mod mock;
pub mod service;
pub mod session;
pub mod trip_api;
pub mod types;

pub use baas::BaasClient;
pub use countries::RestCountriesClient;
pub use error::{ClientError, ClientResult, ErrorSeverity};
pub use service::{AccountService, CountrySource, IdentityProvider, TripApi};
pub use session::SessionIdentity;
pub use trip_api::HttpTripApi;
pub use types::{CreateTripRequest, created_trip_id};

// Re-export commonly used items
pub use mock::{MockAccountService, MockIdentity, MockTripApi, StaticCountries};
