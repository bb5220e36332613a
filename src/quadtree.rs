use {
  crate::geometry::PixelSpace,
  euclid::{Point2D, Rect},
  num_traits::Float
};

type Point<T> = Point2D<T, PixelSpace>;

/// Region tree over a rectangle; every node owns a `Data` payload.
#[derive(Clone)]
pub struct Quadtree<Data, Float> {
  pub rect: Rect<Float, PixelSpace>,
  pub children: Option<Box<[Quadtree<Data, Float>; 4]>>,
  pub depth: u8,
  pub max_depth: u8,
  pub data: Data
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq)]
/// 4 sections of a rectangle
pub enum Quadrant {
  TL = 0,
  TR = 1,
  BL = 2,
  BR = 3
}

fn quadrant_origin<_Float: Float>() -> [Point<_Float>; 4] {
  let half = _Float::one() / (_Float::one() + _Float::one());
  [
    Point::new(_Float::zero(), _Float::zero()),
    Point::new(half, _Float::zero()),
    Point::new(_Float::zero(), half),
    Point::new(half, half)
  ]
}

fn quadrant_rect<_Float: Float>(rect: Rect<_Float, PixelSpace>, quad: Quadrant) -> Rect<_Float, PixelSpace> {
  Rect {
    origin: rect.origin +
      quadrant_origin()[quad as usize].to_vector()
        .component_mul(rect.size.to_vector()),
    size: rect.size / (_Float::one() + _Float::one())
  }
}

impl Quadrant {
  /// determine the section of a rectangle, containing `pt`
  pub fn get<_Float: Float>(rect: Rect<_Float, PixelSpace>, pt: Point<_Float>) -> Option<Self> {
    use Quadrant::*;
    [TL, TR, BL, BR].iter()
      .find(|&&quad| quadrant_rect(rect, quad).contains(pt))
      .copied()
  }
}

impl<Data, _Float: Float> Quadtree<Data, _Float> {
  pub fn new(rect: Rect<_Float, PixelSpace>, max_depth: u8, init: Data) -> Self {
    Quadtree {
      rect,
      children: None,
      depth: 0,
      max_depth,
      data: init
    }
  }

  /// apply `f` to every node of the tree
  pub fn traverse(&self, f: &mut dyn FnMut(&Self)) {
    f(self);
    if let Some(children) = &self.children {
      for child in children.iter() {
        child.traverse(f);
      }
    }
  }

  pub fn subdivide(&mut self, f: impl Fn(Rect<_Float, PixelSpace>) -> Data) -> &mut Option<Box<[Quadtree<Data, _Float>; 4]>> {
    if self.depth < self.max_depth && self.children.is_none() {
      let rect = self.rect;
      let children: [Quadtree<Data, _Float>; 4] = [Quadrant::TL, Quadrant::TR, Quadrant::BL, Quadrant::BR]
        .map(|quad| {
          let rect = quadrant_rect(rect, quad);
          Quadtree {
            rect,
            children: None,
            depth: self.depth + 1,
            max_depth: self.max_depth,
            data: f(rect)
          }
        });
      self.children = Some(Box::new(children));
    }
    &mut self.children
  }

  /// Euclidean distance from `pt` to the closest point of this node's rectangle; zero inside.
  pub fn distance_to(&self, pt: Point<_Float>) -> _Float {
    let min = self.rect.min();
    let max = self.rect.max();
    let dx = (min.x - pt.x).max(pt.x - max.x).max(_Float::zero());
    let dy = (min.y - pt.y).max(pt.y - max.y).max(_Float::zero());
    dx.hypot(dy)
  }
}
