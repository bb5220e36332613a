use {
  super::*,
  crate::error::{ConfigError, Result}
};

fn circle(x: f64, y: f64, r: f64) -> Circle {
  Circle::new(P2::new(x, y), r)
}

#[test] fn overlap_is_strict() {
  let a = circle(0.0, 0.0, 5.0);
  assert!(intersects(&a, &circle(9.0, 0.0, 5.0)));
  assert!(!intersects(&a, &circle(12.0, 0.0, 5.0)));
  // tangent discs share a single point, not area
  assert!(!intersects(&a, &circle(10.0, 0.0, 5.0)));
  assert!(intersects(&a, &circle(10.0 - 1e-9, 0.0, 5.0)));
}

#[test] fn overlap_is_symmetric() {
  let a = circle(3.0, 4.0, 2.0);
  let b = circle(5.0, 6.5, 1.5);
  assert_eq!(intersects(&a, &b), intersects(&b, &a));
  assert!(intersects(&a, &a));
}

#[test] fn diameter_range_200() -> Result<()> {
  let canvas = Canvas::new(200, 200)?;
  let range = DiameterRange::for_canvas(&canvas)?;
  assert_eq!(range.min(), 2.0);
  assert!((range.max() - 5.333).abs() < 1e-3);
  assert_eq!(range.floor(), 3.0);
  assert_eq!(canvas.center(), P2::new(100.0, 100.0));
  assert_eq!(canvas.packing_radius(), 96.0);
  Ok(())
}

#[test] fn floor_never_exceeds_max() -> Result<()> {
  let range = DiameterRange::new(0.5, 1.2)?;
  assert_eq!(range.floor(), 1.2);
  assert_eq!(range.with_max(0.1).max(), 0.5);
  assert_eq!(range.with_max(9.0).max(), 1.2);
  Ok(())
}

#[test] fn rejects_malformed_input() {
  let err = Canvas::new(0, 10).unwrap_err();
  assert_eq!(
    err.downcast_ref::<ConfigError>(),
    Some(&ConfigError::EmptyCanvas { width: 0, height: 10 })
  );
  assert!(DiameterRange::new(0.0, 1.0).is_err());
  assert!(DiameterRange::new(3.0, 2.0).is_err());
  assert!(DiameterRange::new(1.0, f64::NAN).is_err());
  assert!(DiameterRange::new(2.0, 2.0).is_ok());
}

#[test] fn containment() -> Result<()> {
  let canvas = Canvas::new(200, 100)?;
  assert_eq!(canvas.center(), P2::new(100.0, 50.0));
  assert!(canvas.contains(&circle(100.0, 50.0, 96.0)));
  assert!(canvas.contains(&circle(190.0, 50.0, 6.0)));
  assert!(!canvas.contains(&circle(190.0, 50.0, 6.5)));
  // the disc reaches past the short edge of a wide canvas
  assert!(canvas.contains(&circle(100.0, 140.0, 2.0)));
  let bounds = canvas.packing_bounds();
  assert_eq!(bounds.min, P2::new(4.0, -46.0));
  assert_eq!(bounds.max, P2::new(196.0, 146.0));
  Ok(())
}

#[test] fn circle_box_and_sdf() {
  let c = circle(10.0, 20.0, 3.0);
  let bounds = c.bounding_box();
  assert_eq!(bounds.min, P2::new(7.0, 17.0));
  assert_eq!(bounds.max, P2::new(13.0, 23.0));
  assert_eq!(c.sdf(P2::new(10.0, 20.0)), -3.0);
  assert_eq!(c.sdf(P2::new(15.0, 20.0)), 2.0);
}
