//! Nearest-neighbor queries over accepted circle centers.
//!
//! Two interchangeable variants sit behind [`SpatialIndex`]: [`ExactIndex`] scans every circle,
//! [`TreeIndex`] descends a bucketed [`Quadtree`](crate::quadtree::Quadtree). The variant is
//! picked once through [`IndexKind::build`]; the packing loop never branches on it.

use {
  crate::geometry::{Circle, PixelSpace, P2},
  euclid::Box2D,
  std::{cmp::Ordering, fmt::Debug}
};

pub mod exact;
pub mod tree;

pub use exact::ExactIndex;
pub use tree::TreeIndex;

/// Neighbour count checked by the accelerated path.
pub const NEIGHBOURS: usize = 12;

/// One entry of a nearest-neighbor answer. Answers shorter than `k` are padded with
/// [`Neighbour::VACANT`], which sits at infinite distance.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Neighbour {
  pub distance: f64,
  pub circle: Option<Circle>
}

impl Neighbour {
  pub const VACANT: Self = Self { distance: f64::INFINITY, circle: None };

  /// The neighbouring circle, unless this entry is padding.
  pub fn occupant(&self) -> Option<&Circle> {
    self.circle.as_ref().filter(|_| self.distance.is_finite())
  }
}

pub trait SpatialIndex: Debug + Send {
  /// Add one accepted circle; visible to the very next query.
  fn insert(&mut self, circle: Circle);

  /// Up to `k` circles by ascending center distance to `point`, padded to exactly `k`.
  fn query_nearest(&self, point: P2, k: usize) -> Vec<Neighbour>;

  /// Whether `hit` holds for any of the `k` nearest circles to `point`. Stops at the first hit.
  fn any_nearest(&self, point: P2, k: usize, hit: &mut dyn FnMut(&Circle) -> bool) -> bool {
    self.query_nearest(point, k)
      .iter()
      .filter_map(Neighbour::occupant)
      .any(|circle| hit(circle))
  }

  fn len(&self) -> usize;

  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// How many nearest circles a candidate has to be tested against. `None` means all of them.
  fn neighbour_limit(&self) -> Option<usize>;
}

/// Which [`SpatialIndex`] a packing run uses.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IndexKind {
  /// Brute-force scan. Always correct, O(n) per query.
  Exact,
  /// Quadtree, testing only the `k` nearest centers.
  Accelerated { k: usize }
}

impl Default for IndexKind {
  fn default() -> Self {
    IndexKind::Accelerated { k: NEIGHBOURS }
  }
}

impl IndexKind {
  /// Build the selected variant over `circles`; `bounds` should cover every center that will
  /// ever be inserted.
  pub fn build(self, bounds: Box2D<f64, PixelSpace>, circles: &[Circle]) -> Box<dyn SpatialIndex> {
    match self {
      IndexKind::Exact => Box::new(ExactIndex::build(circles)),
      IndexKind::Accelerated { k } => Box::new(TreeIndex::build(bounds, circles, k))
    }
  }
}

/// Order by distance, ties by insertion sequence, so both variants agree on ordering.
pub(crate) fn by_distance<T: Ord>(a: &(f64, T), b: &(f64, T)) -> Ordering {
  a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1))
}

/// Pad `found` with vacant entries up to `k`.
pub(crate) fn padded(found: impl Iterator<Item = Neighbour>, k: usize) -> Vec<Neighbour> {
  let mut result: Vec<_> = found.take(k).collect();
  result.resize(k, Neighbour::VACANT);
  result
}
