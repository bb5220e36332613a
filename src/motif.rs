//! Motif image and the on/off classification of circles against it.
//!
//! A circle is "on" when any of nine sample points (its center, four points on the rim and four
//! diagonal points just inside it) lands on a pixel whose color differs from the background.

use {
  crate::{
    engine::Classify,
    error::Result,
    geometry::{to_world_space, Canvas, Circle, PixelSpace, WorldSpace, P2},
    palette::{Color, Side, BACKGROUND}
  },
  euclid::{Box2D, Point2D, Size2D},
  image::{DynamicImage, Rgba, RgbaImage},
  rayon::prelude::*,
  std::path::Path
};

/// Radial position of the diagonal samples, relative to the radius.
const DIAGONAL: f64 = 0.93;

/// Side of the bundled motif, in pixels.
pub const BUNDLED_SIZE: u32 = 800;

#[derive(Debug, Clone)]
pub struct Motif {
  image: RgbaImage,
  background: Color
}

impl Motif {
  pub fn new(image: DynamicImage) -> Self {
    Self { image: image.into_rgba8(), background: BACKGROUND }
  }

  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    Ok(Self::new(image::open(path)?))
  }

  /// The number "74" in black seven-segment strokes on white, 800x800.
  pub fn bundled() -> Self {
    Self::digits("74", Size2D::splat(BUNDLED_SIZE))
  }

  /// Render `text` as seven-segment digits centered on a white canvas. Characters other than
  /// `0-9` leave a blank.
  pub fn digits(text: &str, size: Size2D<u32, PixelSpace>) -> Self {
    let strokes = layout_digits(text);
    let mut image = RgbaImage::from_pixel(size.width, size.height, Rgba([255; 4]));
    let row_len = size.width as usize * 4;
    let buffer: &mut [u8] = &mut image;
    buffer.par_chunks_mut(row_len)
      .enumerate()
      .for_each(|(y, row)| row.chunks_exact_mut(4)
        .enumerate()
        .for_each(|(x, pixel)| {
          let p = to_world_space(Point2D::new(x as f64 + 0.5, y as f64 + 0.5), size.to_f64());
          if strokes.iter().any(|stroke| stroke.contains(p)) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
          }
        })
      );
    Self::new(DynamicImage::ImageRgba8(image))
  }

  /// Color that counts as "not part of the motif".
  pub fn with_background(mut self, background: Color) -> Self {
    self.background = background;
    self
  }

  pub fn image(&self) -> &RgbaImage {
    &self.image
  }

  pub fn canvas(&self) -> Result<Canvas> {
    Canvas::new(self.image.width(), self.image.height())
  }

  /// Whether the pixel under `point` matches the background. Points off the image count as
  /// background.
  pub fn is_background(&self, point: P2) -> bool {
    let (x, y) = (point.x.floor(), point.y.floor());
    if x < 0.0 || y < 0.0 || x >= self.image.width() as f64 || y >= self.image.height() as f64 {
      return true;
    }
    self.image.get_pixel(x as u32, y as u32).0[..3] == self.background
  }
}

impl Classify for Motif {
  fn classify(&self, circle: &Circle) -> Side {
    if sample_points(circle).iter().any(|&p| !self.is_background(p)) {
      Side::On
    } else {
      Side::Off
    }
  }
}

/// Center, top, bottom, left, right, then the four diagonals.
pub fn sample_points(circle: &Circle) -> [P2; 9] {
  let Circle { center: c, radius: r } = *circle;
  let d = r * DIAGONAL;
  [
    c,
    P2::new(c.x, c.y - r),
    P2::new(c.x, c.y + r),
    P2::new(c.x - r, c.y),
    P2::new(c.x + r, c.y),
    P2::new(c.x - d, c.y - d),
    P2::new(c.x + d, c.y - d),
    P2::new(c.x - d, c.y + d),
    P2::new(c.x + d, c.y + d)
  ]
}

/// Lit segments per digit, `a` through `g` clockwise from the top with `g` in the middle.
fn segments(digit: char) -> &'static str {
  match digit {
    '0' => "abcdef",
    '1' => "bc",
    '2' => "abdeg",
    '3' => "abcdg",
    '4' => "bcfg",
    '5' => "acdfg",
    '6' => "acdefg",
    '7' => "abc",
    '8' => "abcdefg",
    '9' => "abcdfg",
    _ => ""
  }
}

/// Stroke rectangles of `text`, spread over the middle 60% of the canvas.
fn layout_digits(text: &str) -> Vec<Box2D<f64, WorldSpace>> {
  let n = text.chars().count().max(1) as f64;
  let slot = 0.6 / n;
  let (top, height) = (0.28, 0.44);
  text.chars()
    .enumerate()
    .flat_map(|(i, digit)| {
      let left = 0.2 + slot * (i as f64 + 0.1);
      let width = slot * 0.8;
      let t = width * 0.25;
      let half = height / 2.0;
      let rect = |x: f64, y: f64, w: f64, h: f64|
        Box2D::new(Point2D::new(x, y), Point2D::new(x + w, y + h));
      segments(digit).chars().map(move |segment| match segment {
        'a' => rect(left, top, width, t),
        'b' => rect(left + width - t, top, t, half),
        'c' => rect(left + width - t, top + half, t, half),
        'd' => rect(left, top + height - t, width, t),
        'e' => rect(left, top + half, t, half),
        'f' => rect(left, top, t, half),
        _ => rect(left, top + half - t / 2.0, width, t)
      })
    })
    .collect()
}
