//! Causal neighbour lookup for the forward raster scan.
//!
//! Only neighbours already visited in row-major order are inspected:
//!
//! ```text
//! Four:        Eight:
//!     n        nw  n  ne
//!  w  x         w  x
//! ```

use crate::connectivity::Connectivity;

const MAX_CAUSAL_NEIGHBOURS: usize = 4;

/// Distinct non-zero labels found among a pixel's causal neighbours.
///
/// Holds at most four entries inline, in the order west, north, northwest,
/// northeast, skipping repeats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NeighbourLabels {
    labels: [u32; MAX_CAUSAL_NEIGHBOURS],
    len: usize,
}

impl NeighbourLabels {
    fn insert(&mut self, label: u32) {
        if label == 0 || self.as_slice().contains(&label) {
            return;
        }
        if let Some(slot) = self.labels.get_mut(self.len) {
            *slot = label;
            self.len += 1;
        }
    }

    /// The distinct labels collected so far.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.labels[..self.len]
    }

    /// Number of distinct labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no causal neighbour carries a label.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Smallest label present, if any.
    #[must_use]
    pub fn min(&self) -> Option<u32> {
        self.as_slice().iter().copied().min()
    }
}

/// Collects the labels assigned to the causal neighbours of `(x, y)`.
///
/// `labels` is a row-major grid `width` cells wide. Out-of-bounds neighbours
/// and neighbours holding `0` contribute nothing.
///
/// # Examples
/// ```
/// use cclabel_core::{Connectivity, causal_neighbours};
///
/// // 3x2 grid; pixel (1, 1) sees west = 0, north = 2, northwest = 1, northeast = 3.
/// let labels = [1, 2, 3, 0, 0, 0];
/// let four = causal_neighbours(&labels, 3, 1, 1, Connectivity::Four);
/// assert_eq!(four.as_slice(), &[2]);
/// let eight = causal_neighbours(&labels, 3, 1, 1, Connectivity::Eight);
/// assert_eq!(eight.as_slice(), &[2, 1, 3]);
/// ```
#[must_use]
pub fn causal_neighbours(
    labels: &[u32],
    width: usize,
    x: usize,
    y: usize,
    connectivity: Connectivity,
) -> NeighbourLabels {
    let at = |nx: usize, ny: usize| {
        if nx >= width {
            return 0;
        }
        labels.get(ny * width + nx).copied().unwrap_or(0)
    };

    let mut found = NeighbourLabels::default();
    if x > 0 {
        found.insert(at(x - 1, y));
    }
    if y > 0 {
        found.insert(at(x, y - 1));
    }
    if connectivity.includes_diagonals() && y > 0 {
        if x > 0 {
            found.insert(at(x - 1, y - 1));
        }
        found.insert(at(x + 1, y - 1));
    }
    found
}
