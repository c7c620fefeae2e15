//! Shared test utilities for `cclabel-core`.

use std::collections::VecDeque;

use cclabel_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{BinaryMask, Connectivity};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROPTEST_CASES` and
/// `CCLABEL_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Parses ASCII art into a mask: `#` is foreground, anything else is
/// background. Leading and trailing blank lines and indentation are ignored.
///
/// # Panics
/// Panics when the art does not describe a non-empty rectangle.
#[must_use]
pub(crate) fn mask_from_art(art: &str) -> BinaryMask {
    let rows: Vec<Vec<bool>> = art
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().map(|cell| cell == '#').collect())
        .collect();
    BinaryMask::from_rows(&rows).expect("art must describe a rectangle")
}

/// Reference labelling by breadth-first flood fill, seeded in raster order.
///
/// Components are numbered by their first pixel in row-major order, which is
/// the numbering the three-pass labeller must reproduce.
#[must_use]
pub(crate) fn flood_fill_labels(mask: &BinaryMask, connectivity: Connectivity) -> Vec<u32> {
    let (width, height) = (mask.width(), mask.height());
    let mut labels = vec![0_u32; mask.len()];
    let mut next = 0_u32;
    let mut queue = VecDeque::new();

    for start in 0..mask.len() {
        if !mask.cells()[start] || labels[start] != 0 {
            continue;
        }
        next += 1;
        labels[start] = next;
        queue.push_back(start);

        while let Some(index) = queue.pop_front() {
            let (x, y) = (index % width, index / width);
            for (dx, dy) in offsets(connectivity) {
                let (Some(nx), Some(ny)) = (x.checked_add_signed(*dx), y.checked_add_signed(*dy))
                else {
                    continue;
                };
                if nx >= width || ny >= height {
                    continue;
                }
                let neighbour = ny * width + nx;
                if mask.cells()[neighbour] && labels[neighbour] == 0 {
                    labels[neighbour] = next;
                    queue.push_back(neighbour);
                }
            }
        }
    }
    labels
}

fn offsets(connectivity: Connectivity) -> &'static [(isize, isize)] {
    const FOUR: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
    const EIGHT: [(isize, isize); 8] = [
        (-1, -1),
        (0, -1),
        (1, -1),
        (-1, 0),
        (1, 0),
        (-1, 1),
        (0, 1),
        (1, 1),
    ];
    match connectivity {
        Connectivity::Four => &FOUR,
        Connectivity::Eight => &EIGHT,
    }
}
