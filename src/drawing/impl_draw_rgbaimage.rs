#![allow(non_snake_case)]
use {
  euclid::{Box2D, Point2D, Size2D},
  image::{Pixel, Rgba, RgbaImage},
  crate::{
    drawing::{Draw, Texture},
    geometry::{BoundingBox, PixelSpace, Shape, SDF}
  }
};

impl <Cutie> Draw<RgbaImage> for Texture<Cutie, Rgba<u8>>
  where Cutie: Shape
{
  fn draw(&self, image: &mut RgbaImage) {
    let resolution: Size2D<_, PixelSpace> = image.dimensions().into();
    let bounding_box = match clip_bounding_box(self.bounding_box(), resolution) {
      Some(x) => x,
      None => return // bounding box has no intersection with screen at all
    };

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .map(|(y, x)| Point2D::<_, PixelSpace>::from([x, y]))
      .for_each(|pixel| {
        // sample at the pixel center
        let sdf = self.sdf(pixel.to_f64() + Size2D::splat(0.5));
        let pixel = image.get_pixel_mut(pixel.x, pixel.y);
        *pixel = sdf_overlay_aa(sdf, 1.0, *pixel, self.texture);
      });
  }
}

fn clip_bounding_box(
  bounding_box: Box2D<f64, PixelSpace>,
  resolution: Size2D<u32, PixelSpace>
) -> Option<Box2D<u32, PixelSpace>> {
  bounding_box
    .round_out()
    .intersection(&Box2D::from_size(resolution.to_f64()))
    .map(|x| x.to_u32())
}

pub(super) fn sdf_overlay_aa(sdf: f64, Δp: f64, mut col1: Rgba<u8>, mut col2: Rgba<u8>) -> Rgba<u8> {
  let Δf = (0.5 * Δp - sdf) // antialias
    .clamp(0.0, Δp);
  if Δf <= 0.0 {
    return col1;
  } else if Δf >= Δp {
    return col2;
  }
  let alpha = Δf / Δp;
  // overlay blending with premultiplied alpha
  col2.0[3] = ((col2.0[3] as f64) * alpha) as u8;
  col1.blend(&col2);
  col1
}
