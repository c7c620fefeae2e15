//! Mask generators for labeller property tests.
//!
//! Density drives the shape of the components: sparse masks are mostly
//! isolated pixels, dense masks are one or two large blobs with holes, and
//! the mid range produces the branching shapes that force provisional label
//! merges.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{BinaryMask, Connectivity};

/// Largest generated width or height.
const MAX_SIDE: usize = 32;

/// A generated mask together with the adjacency rule to label it under.
#[derive(Clone, Debug)]
pub(super) struct MaskFixture {
    pub mask: BinaryMask,
    pub connectivity: Connectivity,
}

/// Foreground density buckets for seeded fixtures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Density {
    Sparse,
    Balanced,
    Dense,
    Stripes,
}

impl Density {
    fn probability(self) -> f64 {
        match self {
            Self::Sparse => 0.1,
            Self::Balanced => 0.5,
            Self::Dense => 0.85,
            Self::Stripes => 0.0,
        }
    }
}

/// Generates fixtures with arbitrary dimensions, density and connectivity.
pub(super) fn mask_fixture_strategy() -> impl Strategy<Value = MaskFixture> {
    (
        1..=MAX_SIDE,
        1..=MAX_SIDE,
        0.0_f64..=1.0,
        any::<u64>(),
        prop_oneof![Just(Connectivity::Four), Just(Connectivity::Eight)],
    )
        .prop_map(|(width, height, probability, seed, connectivity)| {
            let mut rng = SmallRng::seed_from_u64(seed);
            MaskFixture {
                mask: random_mask(width, height, probability, &mut rng),
                connectivity,
            }
        })
}

/// Generates a fixture for a specific density bucket.
pub(super) fn generate_fixture(
    density: Density,
    connectivity: Connectivity,
    rng: &mut SmallRng,
) -> MaskFixture {
    let width = rng.gen_range(1..=MAX_SIDE);
    let height = rng.gen_range(1..=MAX_SIDE);
    let mask = match density {
        Density::Stripes => comb_mask(width, height, rng),
        other => random_mask(width, height, other.probability(), rng),
    };
    MaskFixture { mask, connectivity }
}

fn random_mask(width: usize, height: usize, probability: f64, rng: &mut SmallRng) -> BinaryMask {
    let cells = (0..width * height)
        .map(|_| rng.gen_bool(probability))
        .collect();
    BinaryMask::from_cells(width, height, cells).expect("generated dimensions are valid")
}

/// Vertical teeth joined along a random row: every tooth is minted its own
/// provisional label and only meets the others further down.
fn comb_mask(width: usize, height: usize, rng: &mut SmallRng) -> BinaryMask {
    let spine = rng.gen_range(0..height);
    let cells = (0..width * height)
        .map(|index| {
            let (x, y) = (index % width, index / width);
            y == spine || (x % 2 == 0 && y <= spine)
        })
        .collect();
    BinaryMask::from_cells(width, height, cells).expect("generated dimensions are valid")
}
