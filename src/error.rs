//! Error handling.
//!
//! Everything fallible in the crate returns [`anyhow::Result`]. Rejected inputs are reported as a
//! [`ConfigError`] before any packing starts, and can be recovered with
//! `err.downcast_ref::<ConfigError>()`. Image and file-system errors pass through unchanged.

use thiserror::Error;

/// Convenient wrapper around `std::Result`.
pub type Result<T> = anyhow::Result<T>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
  #[error("canvas must have a positive size, got {width}x{height}")]
  EmptyCanvas { width: u32, height: u32 },

  #[error("invalid diameter range [{min}, {max}]")]
  DiameterRange { min: f64, max: f64 },

  #[error("packing disc of radius {disc} cannot hold a circle of diameter {diameter}")]
  DiscTooSmall { disc: f64, diameter: f64 },

  #[error("target circle count must be positive")]
  NoCircles,

  #[error("neighbour count must be positive")]
  NoNeighbours,
}
