//! A finished (or interrupted) plate.

use {
  crate::{
    cancel::CancellationToken,
    drawing::CanvasRenderer,
    engine::{PackingConfig, PackingEngine, Placement, Report},
    error::Result,
    geometry::Circle,
    motif::Motif,
    palette::{Color, BACKGROUND}
  },
  image::RgbaImage
};

#[derive(Debug, Clone)]
pub struct Plate {
  pub image: RgbaImage,
  /// Accepted circles in paint order.
  pub circles: Vec<Circle>,
  pub report: Report
}

impl Plate {
  /// Pack and paint a plate the size of `motif`, calling `progress` after each circle is drawn.
  ///
  /// Cancelling `cancel` stops the run between two attempts; the returned plate then holds every
  /// circle accepted so far.
  pub fn generate(
    motif: &Motif,
    config: PackingConfig,
    cancel: CancellationToken,
    mut progress: impl FnMut(&Placement)
  ) -> Result<Self> {
    let canvas = motif.canvas()?;
    let mut engine = PackingEngine::new(canvas, config)?
      .with_cancellation(cancel);
    let mut renderer = CanvasRenderer::new(canvas.width(), canvas.height(), BACKGROUND);
    let report = engine.run(motif, &mut |placement: &Placement, color: Color| {
      renderer.draw(placement.circle, color);
      progress(placement);
    });
    Ok(Self {
      image: renderer.into_image(),
      circles: engine.accepted().to_vec(),
      report
    })
  }

  pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
    self.image.save(path)?;
    Ok(())
  }
}

#[cfg(test)] mod tests {
  use {
    super::*,
    crate::{
      drawing::rgba,
      engine::{Classify, Outcome},
      geometry::{intersects, P2},
      index::IndexKind,
      palette::{COLORS_OFF, COLORS_ON}
    },
    euclid::Size2D,
    image::{DynamicImage, Rgb, RgbImage},
    itertools::Itertools
  };

  /// White 300x300 with a black square in the middle.
  fn square_motif() -> Motif {
    let mut image = RgbImage::from_pixel(300, 300, Rgb([255; 3]));
    itertools::iproduct!(120..180, 120..180)
      .for_each(|(x, y)| image.put_pixel(x, y, Rgb([0; 3])));
    Motif::new(DynamicImage::ImageRgb8(image))
  }

  #[test] fn paints_every_circle() -> Result<()> {
    let motif = square_motif();
    let config = PackingConfig::default()
      .with_total_circles(400)
      .with_index(IndexKind::Exact);
    let mut seen = 0;
    let plate = Plate::generate(&motif, config, CancellationToken::new(), |_| seen += 1)?;

    assert_eq!(plate.report.outcome, Outcome::Completed);
    assert_eq!(seen, 400);
    assert_eq!(plate.circles.len(), 400);
    assert_eq!(plate.image.dimensions(), (300, 300));
    assert!(plate.circles.iter().tuple_combinations().all(|(a, b)| !intersects(a, b)));

    let (mut on, mut off) = (0, 0);
    for c in &plate.circles {
      // radius is at least 1.5 here, so the center pixel is fully covered
      let pixel = *plate.image.get_pixel(c.center.x as u32, c.center.y as u32);
      let expected: &[_] = if motif.classify(c) == crate::palette::Side::On {
        on += 1;
        &COLORS_ON
      } else {
        off += 1;
        &COLORS_OFF
      };
      assert!(expected.iter().any(|&color| rgba(color) == pixel), "{c:?}: {pixel:?}");
    }
    assert!(on > 0 && off > on);
    // corners stay outside the packing disc
    assert_eq!(*plate.image.get_pixel(0, 0), rgba(BACKGROUND));
    Ok(())
  }

  #[test] fn cancelled_plate_keeps_prefix() -> Result<()> {
    let motif = Motif::digits("8", Size2D::splat(200));
    let cancel = CancellationToken::new();
    let token = cancel.clone();
    let plate = Plate::generate(&motif, PackingConfig::default(), cancel, |placement| {
      if placement.slot == 9 {
        token.cancel();
      }
    })?;
    assert_eq!(plate.report.outcome, Outcome::Cancelled);
    assert_eq!(plate.circles.len(), 10);
    assert_eq!(plate.report.stats.placed, 10);
    Ok(())
  }

  #[test] fn same_seed_same_plate() -> Result<()> {
    let motif = Motif::digits("1", Size2D::splat(160));
    let config = PackingConfig::default().with_total_circles(150).with_seed(3);
    let a = Plate::generate(&motif, config, CancellationToken::new(), |_| ())?;
    let b = Plate::generate(&motif, config, CancellationToken::new(), |_| ())?;
    assert_eq!(a.circles, b.circles);
    assert_eq!(a.image, b.image);
    assert!(a.circles.iter().all(|c| c.center.distance_to(P2::new(80.0, 80.0)) < 80.0));
    Ok(())
  }

  #[test] #[ignore] fn bundled_plate() -> Result<()> {
    let plate = Plate::generate(&Motif::bundled(), PackingConfig::default(), CancellationToken::new(), |_| ())?;
    std::fs::create_dir_all("test")?;
    plate.save("test/plate_74.png")?;
    Ok(())
  }
}
