//! Ishihara-style color plates, made by randomized incremental circle packing.
//!
//! Circles of random size are dropped one at a time into a disc centered on the canvas. A
//! candidate is kept only if it overlaps none of the circles accepted before it; each failed
//! attempt shrinks the largest allowed diameter, so the plate fills up with ever smaller circles.
//! Every accepted circle is then classified against a motif image and painted from one of two
//! palettes, which hides the motif from readers who cannot tell the palettes apart.
//!
//! The crate is split into [`engine`] for the packing itself, [`index`] for the collision
//! queries behind it, and (with the `drawing` feature) [`motif`], [`drawing`] and [`plate`] for
//! turning a packing into an image.
//!
//! # Basic usage
//! ```no_run
//! # use ishihara::{
//! #   cancel::CancellationToken,
//! #   engine::PackingConfig,
//! #   error::Result,
//! #   motif::Motif,
//! #   plate::Plate
//! # };
//! # fn main() -> Result<()> {
//! let motif = Motif::open("motif.png")?;
//! let config = PackingConfig::default()
//!   .with_total_circles(1500)
//!   .with_seed(42);
//! let plate = Plate::generate(&motif, config, CancellationToken::new(), |placement| {
//!   println!("Circle {}, {} tries", placement.slot + 1, placement.tries);
//! })?;
//! plate.save("plate.png")?;
//! #   Ok(())
//! # }
//! ```
//!
//! The engine itself is independent of images: anything implementing
//! [`Classify`](engine::Classify) and [`Paint`](engine::Paint), closures included, can drive it.
//! ```
//! # use ishihara::{
//! #   engine::{PackingConfig, PackingEngine, Placement},
//! #   geometry::{Canvas, Circle},
//! #   palette::{Color, Side}
//! # };
//! # fn main() -> anyhow::Result<()> {
//! let canvas = Canvas::new(200, 200)?;
//! let mut engine = PackingEngine::new(canvas, PackingConfig::default().with_total_circles(50))?;
//! let mut colors = vec![];
//! engine.run(
//!   &|c: &Circle| if c.center.x < 100.0 { Side::On } else { Side::Off },
//!   &mut |_: &Placement, color: Color| colors.push(color)
//! );
//! assert_eq!(colors.len(), 50);
//! #   Ok(())
//! # }
//! ```

#![allow(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod cancel;
pub mod geometry;
pub mod generator;
pub mod quadtree;
pub mod index;
pub mod engine;
pub mod palette;
#[cfg(feature = "drawing")]
pub mod motif;
#[cfg(feature = "drawing")]
pub mod drawing;
#[cfg(feature = "drawing")]
pub mod plate;

/// Time an expression, print the elapsed milliseconds under `$title` and return its value.
#[macro_export]
macro_rules! profile(
  ($title: literal, $expr: expr) => {{
    let t0 = std::time::Instant::now();
    let ret = $expr;
    println!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    ret
  }}
);
