//! Fill colors of a plate.
//!
//! Circles over the motif draw from a warm palette, the rest from a muted olive one.

use rand::Rng;

pub type Color = [u8; 3];

const fn hex(c: u32) -> Color {
  [((c >> 16) & 255) as u8, ((c >> 8) & 255) as u8, (c & 255) as u8]
}

pub const BACKGROUND: Color = hex(0xFFFFFF);

pub const COLORS_ON: [Color; 3] = [
  hex(0xF9BB82), hex(0xEBA170), hex(0xFCCD84)
];

pub const COLORS_OFF: [Color; 6] = [
  hex(0x9CA594), hex(0xACB4A5), hex(0xBBB964),
  hex(0xD7DAAA), hex(0xE5D57D), hex(0xD1D6AF)
];

/// Whether a circle covers part of the motif.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
  On,
  Off
}

impl Side {
  pub fn palette(self) -> &'static [Color] {
    match self {
      Side::On => &COLORS_ON,
      Side::Off => &COLORS_OFF,
    }
  }

  /// Uniform pick from the matching palette.
  pub fn choose<R: Rng + ?Sized>(self, rng: &mut R) -> Color {
    let palette = self.palette();
    palette[rng.gen_range(0..palette.len())]
  }
}

#[cfg(test)] mod tests {
  use {
    super::*,
    rand::prelude::*
  };

  #[test] fn hex_unpacking() {
    assert_eq!(hex(0xF9BB82), [0xF9, 0xBB, 0x82]);
    assert_eq!(BACKGROUND, [255, 255, 255]);
  }

  #[test] fn choose_stays_in_palette() {
    let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
    for _ in 0..200 {
      assert!(COLORS_ON.contains(&Side::On.choose(&mut rng)));
      assert!(COLORS_OFF.contains(&Side::Off.choose(&mut rng)));
    }
  }

  #[test] fn choose_covers_palette() {
    let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
    let seen: std::collections::HashSet<_> = (0..500)
      .map(|_| Side::Off.choose(&mut rng))
      .collect();
    assert_eq!(seen.len(), COLORS_OFF.len());
  }
}
