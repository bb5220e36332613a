use {
  crate::{
    error::{ConfigError, Result},
    index::IndexKind
  }
};

/// Number of circles on a full plate.
pub const TOTAL_CIRCLES: usize = 1500;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PackingConfig {
  pub total_circles: usize,
  pub seed: u64,
  pub index: IndexKind
}

impl Default for PackingConfig {
  fn default() -> Self {
    Self {
      total_circles: TOTAL_CIRCLES,
      seed: 0,
      index: IndexKind::default()
    }}}

impl PackingConfig {
  pub fn with_total_circles(mut self, total_circles: usize) -> Self {
    self.total_circles = total_circles;
    self
  }
  /// Seed of the `Pcg64` stream driving both placement and color choice.
  pub fn with_seed(mut self, seed: u64) -> Self {
    self.seed = seed;
    self
  }
  pub fn with_index(mut self, index: IndexKind) -> Self {
    self.index = index;
    self
  }

  pub fn validate(&self) -> Result<()> {
    if self.total_circles == 0 {
      return Err(ConfigError::NoCircles.into());
    }
    if let IndexKind::Accelerated { k: 0 } = self.index {
      return Err(ConfigError::NoNeighbours.into());
    }
    Ok(())
  }
}
