//! View models served to the admin front end

pub mod create_trip;
pub mod dashboard;
pub mod users;

pub use create_trip::{CreateTripView, MapData, SelectField, SelectOption};
pub use dashboard::{DashboardView, StatCard, TripCard};
pub use users::{UserRow, UsersView};
