//! Rasterizing accepted circles onto the plate.

use {
  crate::{
    engine::{Paint, Placement},
    geometry::{BoundingBox, PixelSpace, Shape, SDF, P2},
    palette::Color
  },
  euclid::Box2D,
  image::{Rgba, RgbaImage}
};

mod impl_draw_rgbaimage;

pub trait Draw<Backend>: Shape {
  fn draw(&self, image: &mut Backend);
}

#[derive(Debug, Copy, Clone)]
pub struct Texture<S, T> {
  pub shape: S,
  pub texture: T
}
impl <S, T> SDF for Texture<S, T> where S: SDF {
  fn sdf(&self, pixel: P2) -> f64 { self.shape.sdf(pixel) } }
impl <S, T> BoundingBox<f64, PixelSpace> for Texture<S, T> where S: BoundingBox<f64, PixelSpace> {
  fn bounding_box(&self) -> Box2D<f64, PixelSpace> { self.shape.bounding_box() } }

pub fn rgba(color: Color) -> Rgba<u8> {
  Rgba([color[0], color[1], color[2], 255])
}

/// Plate image that circles are painted onto as they are accepted.
#[derive(Debug, Clone)]
pub struct CanvasRenderer {
  image: RgbaImage
}

impl CanvasRenderer {
  pub fn new(width: u32, height: u32, background: Color) -> Self {
    Self { image: RgbaImage::from_pixel(width, height, rgba(background)) }
  }

  pub fn draw(&mut self, shape: impl Shape, color: Color) {
    shape.texture(rgba(color)).draw(&mut self.image);
  }

  pub fn image(&self) -> &RgbaImage {
    &self.image
  }

  pub fn into_image(self) -> RgbaImage {
    self.image
  }
}

impl Paint for CanvasRenderer {
  fn paint(&mut self, placement: &Placement, color: Color) {
    self.draw(placement.circle, color);
  }
}
