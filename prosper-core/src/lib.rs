//! Business logic of Prosper Homes.
//!
//! Everything that talks to the browser or the Google Maps JavaScript API
//! is hidden behind the traits in [`gateways`].

pub mod gateways;
pub mod loader;
pub mod plans;
pub mod resolver;
pub mod util;
pub mod wizard;
