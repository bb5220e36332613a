use {
  super::{by_distance, padded, Neighbour, SpatialIndex},
  crate::geometry::{Circle, P2}
};

/// Every accepted circle in acceptance order, scanned in full on each query.
#[derive(Debug, Clone, Default)]
pub struct ExactIndex {
  circles: Vec<Circle>
}

impl ExactIndex {
  pub fn build(circles: &[Circle]) -> Self {
    Self { circles: circles.to_vec() }
  }
}

impl SpatialIndex for ExactIndex {
  fn insert(&mut self, circle: Circle) {
    self.circles.push(circle);
  }

  fn query_nearest(&self, point: P2, k: usize) -> Vec<Neighbour> {
    let mut found: Vec<_> = self.circles.iter()
      .enumerate()
      .map(|(seq, circle)| (circle.center.distance_to(point), seq))
      .collect();
    found.sort_by(by_distance);
    padded(
      found.into_iter().map(|(distance, seq)| Neighbour { distance, circle: Some(self.circles[seq]) }),
      k
    )
  }

  fn any_nearest(&self, point: P2, k: usize, hit: &mut dyn FnMut(&Circle) -> bool) -> bool {
    if k < self.circles.len() {
      return self.query_nearest(point, k)
        .iter()
        .filter_map(Neighbour::occupant)
        .any(|circle| hit(circle));
    }
    // every circle is a neighbour, so no ordering is needed
    self.circles.iter().any(|circle| hit(circle))
  }

  fn len(&self) -> usize {
    self.circles.len()
  }

  fn neighbour_limit(&self) -> Option<usize> {
    None
  }
}
