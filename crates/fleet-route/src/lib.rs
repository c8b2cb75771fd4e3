//! `fleet-route`: route geometry input and distance resampling.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`resample`] | `resample`, `path_length_m`, `DEFAULT_STEP_M`                |
//! | [`loader`]   | `load_geometry_csv`, `load_geometry_reader`, `parse_coordinate`, `straight_route` |
//! | [`error`]    | `RouteError`, `RouteResult<T>`                               |
//!
//! Geometry arrives from a routing provider as a sparse, irregular polyline.
//! The resampler turns it into points a fixed ground distance apart so that
//! one simulated sample corresponds to a roughly constant stretch of road.

pub mod error;
pub mod loader;
pub mod resample;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use loader::{load_geometry_csv, load_geometry_reader, parse_coordinate, straight_route};
pub use resample::{DEFAULT_STEP_M, path_length_m, resample};
