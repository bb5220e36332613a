//! Random circle proposals inside the packing disc.

use {
  crate::geometry::{Canvas, Circle, DiameterRange, P2},
  rand::Rng,
  std::f64::consts::PI
};

/// Inverse-CDF sample of the triangular distribution over `[low, high]` peaking at `mode`.
pub fn triangular<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64, mode: f64) -> f64 {
  if high <= low {
    return low;
  }
  let mut u = rng.gen::<f64>();
  let mut c = (mode - low) / (high - low);
  let (mut low, mut high) = (low, high);
  if u > c {
    u = 1.0 - u;
    c = 1.0 - c;
    std::mem::swap(&mut low, &mut high);
  }
  low + (high - low) * (u * c).sqrt()
}

/// Stateless apart from the canvas; all entropy comes from the caller's rng.
#[derive(Debug, Copy, Clone)]
pub struct CandidateGenerator {
  canvas: Canvas
}

impl CandidateGenerator {
  pub fn new(canvas: Canvas) -> Self {
    Self { canvas }
  }

  pub fn canvas(&self) -> &Canvas {
    &self.canvas
  }

  /// Propose a circle with a diameter in `range`, placed uniformly by angle and distance
  /// from the canvas center.
  ///
  /// Returns `None` if the drawn circle is too large to fit in the packing disc at all.
  pub fn generate<R: Rng + ?Sized>(&self, range: DiameterRange, rng: &mut R) -> Option<Circle> {
    let radius = triangular(rng, range.min(), range.max(), range.mode()) / 2.0;
    let angle = rng.gen_range(0.0..PI * 2.0);
    let reach = self.canvas.packing_radius() - radius;
    if reach <= 0.0 {
      return None;
    }
    let distance = rng.gen_range(0.0..reach);
    // polar to cartesian
    let offset = P2::from([angle.cos(), angle.sin()]).to_vector() * distance;
    Some(Circle::new(self.canvas.center() + offset, radius))
  }
}

#[cfg(test)] mod tests {
  use {
    super::*,
    crate::error::Result,
    rand::prelude::*
  };

  #[test] fn triangular_bounds_and_skew() {
    let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
    let (low, high) = (2.0, 6.0);
    let mode = high * 0.8 + low * 0.2;
    let samples: Vec<f64> = (0..10_000)
      .map(|_| triangular(&mut rng, low, high, mode))
      .collect();
    assert!(samples.iter().all(|&x| (low..=high).contains(&x)));
    // mean of a triangular distribution is (low + high + mode) / 3
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    assert!((mean - (low + high + mode) / 3.0).abs() < 0.05, "mean = {mean}");
  }

  #[test] fn triangular_degenerate() {
    let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
    assert_eq!(triangular(&mut rng, 3.0, 3.0, 3.0), 3.0);
  }

  #[test] fn first_circle_200() -> Result<()> {
    let canvas = Canvas::new(200, 200)?;
    let range = DiameterRange::for_canvas(&canvas)?;
    let generator = CandidateGenerator::new(canvas);
    let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
    for _ in 0..1000 {
      let circle = generator.generate(range, &mut rng)
        .expect("200x200 fits every radius");
      assert!((1.0..=2.667).contains(&circle.radius));
      assert!(circle.center.distance_to(P2::new(100.0, 100.0)) <= 96.0 - circle.radius + 1e-9);
      assert!(canvas.contains(&circle));
    }
    Ok(())
  }

  #[test] fn respects_lowered_max() -> Result<()> {
    let canvas = Canvas::new(400, 300)?;
    let range = DiameterRange::for_canvas(&canvas)?.with_max(4.0);
    let generator = CandidateGenerator::new(canvas);
    let mut rng = rand_pcg::Pcg64::seed_from_u64(7);
    for _ in 0..1000 {
      let circle = generator.generate(range, &mut rng).unwrap();
      assert!(circle.diameter() >= range.min() && circle.diameter() <= 4.0);
    }
    Ok(())
  }

  #[test] fn rejects_oversized() -> Result<()> {
    // disc radius 0.48 cannot hold a circle of radius 1
    let generator = CandidateGenerator::new(Canvas::new(1, 1)?);
    let range = DiameterRange::new(2.0, 2.0)?;
    let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
    assert_eq!(generator.generate(range, &mut rng), None);
    Ok(())
  }

  #[test] fn reproducible() -> Result<()> {
    let canvas = Canvas::new(300, 300)?;
    let range = DiameterRange::for_canvas(&canvas)?;
    let generator = CandidateGenerator::new(canvas);
    let draw = |seed| {
      let mut rng = rand_pcg::Pcg64::seed_from_u64(seed);
      (0..32).map(|_| generator.generate(range, &mut rng)).collect::<Vec<_>>()
    };
    assert_eq!(draw(3), draw(3));
    assert_ne!(draw(3), draw(4));
    Ok(())
  }
}
