//! Deterministic false-colour rendering of labelled images.

use crate::labelled::LabelledImage;

/// RGB colour used for background pixels.
pub const BACKGROUND: [u8; 3] = [255, 255, 255];

/// Maps labels to colours by hashing `(seed, label)`.
///
/// The same seed and label always produce the same colour, so renders are
/// reproducible without any shared colour table.
///
/// # Examples
/// ```
/// use cclabel_core::{BACKGROUND, Palette};
///
/// let palette = Palette::default();
/// assert_eq!(palette.colour(0), BACKGROUND);
/// assert_eq!(palette.colour(3), palette.colour(3));
/// assert_ne!(palette.colour(1), palette.colour(2));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Palette {
    seed: u64,
}

impl Palette {
    /// Creates a palette whose colours are derived from `seed`.
    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// Returns the seed this palette hashes with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Colour for `label`; label `0` maps to [`BACKGROUND`].
    ///
    /// Channels are kept below 224 so no component is mistaken for
    /// background.
    #[must_use]
    pub fn colour(&self, label: u32) -> [u8; 3] {
        if label == 0 {
            return BACKGROUND;
        }
        let [r, g, b, ..] = mix(self.seed ^ u64::from(label)).to_le_bytes();
        [r % 224, g % 224, b % 224]
    }

    /// Renders `image` as row-major RGB triples.
    #[must_use]
    pub fn render(&self, image: &LabelledImage) -> Vec<[u8; 3]> {
        image
            .labels()
            .iter()
            .map(|&label| self.colour(label))
            .collect()
    }
}

// splitmix64 finaliser
fn mix(value: u64) -> u64 {
    let mut z = value.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
