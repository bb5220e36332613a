//! Randomized incremental circle packing.
//!
//! Each slot draws candidates until one clears every accepted circle it is tested against. Every
//! failed attempt lowers the allowed diameter by one pixel, down to
//! [`DiameterRange::floor`], so crowded plates keep accepting smaller and smaller circles. There is
//! no retry ceiling; attempt counts are only collected in [`PackingStats`].
//!
//! With [`IndexKind::Accelerated`](crate::index::IndexKind) a candidate is tested against its
//! `k` nearest accepted centers only. A large circle whose center ranks below `k` can still reach
//! the candidate, so in dense clusters the accelerated path may accept a slight overlap. Use
//! [`IndexKind::Exact`](crate::index::IndexKind) when the no-overlap guarantee must hold for every
//! pair.

use {
  crate::{
    cancel::CancellationToken,
    error::{ConfigError, Result},
    generator::CandidateGenerator,
    geometry::{intersects, Canvas, Circle, DiameterRange},
    index::SpatialIndex,
    palette::{Color, Side}
  },
  rand::prelude::*,
  rand_pcg::Pcg64
};

mod config;

pub use config::{PackingConfig, TOTAL_CIRCLES};

/// Decides which palette an accepted circle is painted from.
pub trait Classify {
  fn classify(&self, circle: &Circle) -> Side;
}

impl<F> Classify for F where F: Fn(&Circle) -> Side {
  fn classify(&self, circle: &Circle) -> Side { self(circle) }
}

/// Receives every accepted circle, in acceptance order, with its fill color.
pub trait Paint {
  fn paint(&mut self, placement: &Placement, color: Color);
}

impl<F> Paint for F where F: FnMut(&Placement, Color) {
  fn paint(&mut self, placement: &Placement, color: Color) { self(placement, color) }
}

/// Diameter bound of the slot being filled, shrinking on every failed attempt.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RetryState {
  current_max_diameter: f64,
  floor: f64,
  attempts: u64
}

impl RetryState {
  pub fn new(range: DiameterRange) -> Self {
    Self {
      current_max_diameter: range.max(),
      floor: range.floor(),
      attempts: 0
    }
  }

  pub fn current_max_diameter(&self) -> f64 {
    self.current_max_diameter
  }

  /// Failed attempts so far.
  pub fn attempts(&self) -> u64 {
    self.attempts
  }

  pub fn shrink(&mut self) {
    self.attempts += 1;
    self.current_max_diameter = (self.current_max_diameter - 1.0).max(self.floor);
  }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement {
  /// Position in acceptance order, starting at 0.
  pub slot: usize,
  pub circle: Circle,
  /// Failed attempts before this circle was accepted.
  pub tries: u64
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
  Completed,
  Cancelled
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PackingStats {
  pub placed: usize,
  pub failed_attempts: u64,
  pub worst_tries: u64
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Report {
  pub outcome: Outcome,
  pub stats: PackingStats
}

/// Owns the accepted circles and the index over them. Strictly sequential: every acceptance
/// changes what the next candidate is tested against.
#[derive(Debug)]
pub struct PackingEngine {
  config: PackingConfig,
  range: DiameterRange,
  generator: CandidateGenerator,
  accepted: Vec<Circle>,
  index: Box<dyn SpatialIndex>,
  rng: Pcg64,
  cancel: CancellationToken,
  stats: PackingStats
}

impl PackingEngine {
  /// Engine over `canvas` with the diameter range derived from its size.
  pub fn new(canvas: Canvas, config: PackingConfig) -> Result<Self> {
    Self::with_range(canvas, DiameterRange::for_canvas(&canvas)?, config)
  }

  pub fn with_range(canvas: Canvas, range: DiameterRange, config: PackingConfig) -> Result<Self> {
    config.validate()?;
    if canvas.packing_radius() <= range.max() / 2.0 {
      return Err(ConfigError::DiscTooSmall {
        disc: canvas.packing_radius(),
        diameter: range.max()
      }.into());
    }
    Ok(Self {
      config,
      range,
      generator: CandidateGenerator::new(canvas),
      accepted: Vec::with_capacity(config.total_circles),
      index: config.index.build(canvas.packing_bounds(), &[]),
      rng: Pcg64::seed_from_u64(config.seed),
      cancel: CancellationToken::new(),
      stats: PackingStats::default()
    })
  }

  /// Stop when `token` is cancelled instead of the engine's own token.
  pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
    self.cancel = token;
    self
  }

  /// Handle that stops this engine between two loop iterations.
  pub fn cancellation(&self) -> CancellationToken {
    self.cancel.clone()
  }

  pub fn canvas(&self) -> &Canvas { self.generator.canvas() }
  pub fn range(&self) -> DiameterRange { self.range }
  pub fn config(&self) -> &PackingConfig { &self.config }
  pub fn stats(&self) -> PackingStats { self.stats }

  /// Accepted circles in acceptance (and paint) order.
  pub fn accepted(&self) -> &[Circle] {
    &self.accepted
  }

  pub fn is_complete(&self) -> bool {
    self.accepted.len() >= self.config.total_circles
  }

  /// Whether `candidate` clears every accepted circle the index hands back for it.
  pub fn admits(&self, candidate: &Circle) -> bool {
    let k = self.index.neighbour_limit()
      .unwrap_or_else(|| self.index.len());
    !self.index.any_nearest(candidate.center, k, &mut |neighbour| intersects(candidate, neighbour))
  }

  pub(crate) fn commit(&mut self, circle: Circle) {
    self.accepted.push(circle);
    self.index.insert(circle);
  }

  /// Fill the next slot. Returns `None` once the plate is complete, or if cancelled; a
  /// cancelled slot leaves no trace.
  pub fn place_next(&mut self) -> Option<Placement> {
    if self.is_complete() {
      return None;
    }
    let mut retry = RetryState::new(self.range);
    loop {
      if self.cancel.is_cancelled() {
        return None;
      }
      let range = self.range.with_max(retry.current_max_diameter());
      match self.generator.generate(range, &mut self.rng) {
        Some(circle) if self.admits(&circle) => {
          let placement = Placement {
            slot: self.accepted.len(),
            circle,
            tries: retry.attempts()
          };
          self.commit(circle);
          self.stats.placed += 1;
          self.stats.failed_attempts += retry.attempts();
          self.stats.worst_tries = self.stats.worst_tries.max(retry.attempts());
          return Some(placement);
        }
        _ => retry.shrink()
      }
    }
  }

  /// Iterator over successive placements, without classification or painting.
  pub fn placements(&mut self) -> Placements<'_> {
    Placements { engine: self }
  }

  /// Pack the plate, classifying and painting each circle as it is accepted.
  ///
  /// Cancellation is not an error: the returned report says whether the target was reached, and
  /// everything accepted so far stays valid.
  pub fn run(&mut self, classifier: &impl Classify, painter: &mut impl Paint) -> Report {
    while let Some(placement) = self.place_next() {
      let side = classifier.classify(&placement.circle);
      let color = side.choose(&mut self.rng);
      painter.paint(&placement, color);
    }
    self.report()
  }

  pub fn report(&self) -> Report {
    Report {
      outcome: if self.is_complete() { Outcome::Completed } else { Outcome::Cancelled },
      stats: self.stats
    }
  }
}

pub struct Placements<'a> {
  engine: &'a mut PackingEngine
}

impl Iterator for Placements<'_> {
  type Item = Placement;

  fn next(&mut self) -> Option<Placement> {
    self.engine.place_next()
  }
}
