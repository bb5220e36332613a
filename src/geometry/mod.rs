//! Plate geometry.
//!
//! Plates are measured in pixels of the motif image, with the origin in the top-left corner.
//! The packing region is not the whole canvas: plates are round, so circles live inside a disc
//! of radius `0.48 * width` around the canvas center.

use {
  crate::error::{ConfigError, Result},
  euclid::{Point2D, Box2D, Size2D, Vector2D as V2},
  num_traits::NumCast
};

#[cfg(test)] mod tests;

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;
/// Normalized coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct WorldSpace;

pub type P2 = Point2D<f64, PixelSpace>;

/// Share of the canvas width used as the radius of the packing disc.
pub const DISC_RATIO: f64 = 0.48;

/// Tolerance for the containment check, absorbing the polar to cartesian round trip.
const CONTAINMENT_EPS: f64 = 1e-9;

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// Signed distance function, negative inside.
pub trait SDF {
  fn sdf(&self, pixel: P2) -> f64;
}

/// Something inside a rectangular area.
pub trait Shape: SDF + BoundingBox<f64, PixelSpace> {
  #[cfg(feature = "drawing")]
  fn texture<T>(self, texture: T) -> crate::drawing::Texture<Self, T> where Self: Sized {
    crate::drawing::Texture { shape: self, texture }
  }
}
impl <T> Shape for T where T: SDF + BoundingBox<f64, PixelSpace> {}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
  pub center: P2,
  pub radius: f64,
}

impl Circle {
  pub fn new(center: P2, radius: f64) -> Self {
    Self { center, radius }
  }

  pub fn diameter(&self) -> f64 {
    self.radius * 2.0
  }
}

impl SDF for Circle {
  fn sdf(&self, pixel: P2) -> f64 {
    (pixel - self.center).length() - self.radius
  }
}

impl BoundingBox<f64, PixelSpace> for Circle {
  fn bounding_box(&self) -> Box2D<f64, PixelSpace> {
    Box2D::new(
      self.center - V2::splat(self.radius),
      self.center + V2::splat(self.radius)
    )
  }
}

/// `true` iff the two discs share area. Tangent circles do not intersect.
///
/// This is the only overlap test in the crate; every collision path goes through it.
pub fn intersects(a: &Circle, b: &Circle) -> bool {
  let reach = a.radius + b.radius;
  (b.center - a.center).square_length() < reach * reach
}

/// Fixed drawing surface of a run.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Canvas {
  size: Size2D<u32, PixelSpace>
}

impl Canvas {
  pub fn new(width: u32, height: u32) -> Result<Self> {
    if width == 0 || height == 0 {
      return Err(ConfigError::EmptyCanvas { width, height }.into());
    }
    Ok(Self { size: Size2D::new(width, height) })
  }

  pub fn width(&self) -> u32 { self.size.width }
  pub fn height(&self) -> u32 { self.size.height }
  pub fn size(&self) -> Size2D<u32, PixelSpace> { self.size }

  pub fn center(&self) -> P2 {
    (self.size.to_f64().to_vector() / 2.0).to_point()
  }

  pub fn packing_radius(&self) -> f64 {
    self.size.width as f64 * DISC_RATIO
  }

  /// Square around the packing disc. Every valid circle lies within it.
  pub fn packing_bounds(&self) -> Box2D<f64, PixelSpace> {
    let r = self.packing_radius();
    Box2D::new(self.center() - V2::splat(r), self.center() + V2::splat(r))
  }

  /// Whether `circle` lies entirely inside the packing disc.
  pub fn contains(&self, circle: &Circle) -> bool {
    circle.center.distance_to(self.center()) <= self.packing_radius() - circle.radius + CONTAINMENT_EPS
  }
}

/// Bounds on the diameter of generated circles.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DiameterRange {
  min: f64,
  max: f64
}

impl DiameterRange {
  pub fn new(min: f64, max: f64) -> Result<Self> {
    if !(min.is_finite() && max.is_finite()) || min <= 0.0 || max < min {
      return Err(ConfigError::DiameterRange { min, max }.into());
    }
    Ok(Self { min, max })
  }

  /// `(w + h) / 200 ..= (w + h) / 75`
  pub fn for_canvas(canvas: &Canvas) -> Result<Self> {
    let span = canvas.width() as f64 + canvas.height() as f64;
    Self::new(span / 200.0, span / 75.0)
  }

  pub fn min(&self) -> f64 { self.min }
  pub fn max(&self) -> f64 { self.max }

  /// Most likely diameter, skewed toward large circles.
  pub fn mode(&self) -> f64 {
    self.max * 0.8 + self.min * 0.2
  }

  /// Lowest upper bound a retry may shrink to: one unit above `min`, unless that already
  /// exceeds `max`.
  pub fn floor(&self) -> f64 {
    (self.min + 1.0).min(self.max)
  }

  /// Same range with the upper bound lowered to `max`, never below `min`.
  pub fn with_max(self, max: f64) -> Self {
    Self { min: self.min, max: max.clamp(self.min, self.max) }
  }
}

pub fn to_world_space<T: NumCast + Copy>(
  point: Point2D<T, PixelSpace>,
  resolution: Size2D<T, PixelSpace>
) -> Point2D<f64, WorldSpace> {
  point.to_f64().to_vector()
    .component_div(resolution.to_f64().to_vector())
    .cast_unit()
    .to_point()
}
