use {
  anyhow::Context,
  clap::Parser,
  ishihara::{
    cancel::CancellationToken,
    engine::{Outcome, PackingConfig},
    error::Result,
    index::IndexKind,
    motif::Motif,
    plate::Plate,
    profile
  },
  std::path::PathBuf
};

/// Generate an Ishihara-style color plate hiding a motif image
#[derive(Parser)]
#[command(name = "ishihara", version)]
struct Args {
  /// Motif image (PNG or JPEG). Non-background pixels become the hidden figure.
  /// Defaults to a built-in "74"
  image: Option<PathBuf>,

  /// Where to write the plate
  #[arg(short, long, default_value = "plate.png")]
  output: PathBuf,

  /// Seed of the packing; a random one is drawn and printed if absent
  #[arg(long)]
  seed: Option<u64>,

  /// Number of circles on the plate
  #[arg(long, default_value_t = ishihara::engine::TOTAL_CIRCLES)]
  circles: usize,

  /// Test candidates against every accepted circle instead of the nearest 12
  #[arg(long)]
  exact: bool,

  /// Print progress every N circles (0 = silent)
  #[arg(long, default_value = "1")]
  report_every: usize,

  /// Open the plate in the default viewer once written
  #[arg(long)]
  open: bool,
}

fn main() -> Result<()> {
  let args = Args::parse();

  let motif = match &args.image {
    Some(path) => Motif::open(path)
      .with_context(|| format!("failed to load motif {}", path.display()))?,
    None => Motif::bundled()
  };
  let seed = args.seed.unwrap_or_else(rand::random);
  println!("seed: {seed}");

  let config = PackingConfig::default()
    .with_total_circles(args.circles)
    .with_seed(seed)
    .with_index(if args.exact { IndexKind::Exact } else { IndexKind::default() });

  let cancel = CancellationToken::new();
  let handler = cancel.clone();
  ctrlc::set_handler(move || handler.cancel())
    .context("failed to install the interrupt handler")?;

  let plate = profile!("pack", Plate::generate(&motif, config, cancel, |placement| {
    let i = placement.slot + 1;
    if args.report_every > 0 && (i % args.report_every == 0 || i == args.circles) {
      println!("Circle {i}/{}\n\t{} tries", args.circles, placement.tries);
    }
  })?);

  if plate.report.outcome == Outcome::Cancelled {
    println!("interrupted after {} circles, saving what is there", plate.circles.len());
  }
  println!("{:?}", plate.report.stats);

  plate.save(&args.output)
    .with_context(|| format!("failed to write {}", args.output.display()))?;
  println!("saved {}", args.output.display());
  if args.open {
    open::that(&args.output)?;
  }
  Ok(())
}
