//! Labelled output grids.

use crate::mask::BinaryMask;

/// Per-pixel component labels produced by [`crate::Labeller::label`].
///
/// Background pixels hold `0`; foreground pixels hold a label in
/// `1..=component_count()`, numbered in order of first appearance in a
/// top-to-bottom, left-to-right scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelledImage {
    width: usize,
    height: usize,
    labels: Vec<u32>,
    component_count: usize,
}

impl LabelledImage {
    pub(crate) fn new(width: usize, height: usize, labels: Vec<u32>, component_count: usize) -> Self {
        Self {
            width,
            height,
            labels,
            component_count,
        }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of connected components, which is also the largest label.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// Row-major labels.
    #[must_use]
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    /// Consumes the image and returns the row-major labels.
    #[must_use]
    pub fn into_labels(self) -> Vec<u32> {
        self.labels
    }

    /// Label at `(x, y)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.labels.get(y * self.width + x).copied()
    }

    /// Iterates over the rows of the image.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u32]> + '_ {
        self.labels.chunks_exact(self.width)
    }

    /// Mask of the labelled (non-zero) pixels, discarding label identities.
    #[must_use]
    pub fn foreground_mask(&self) -> BinaryMask {
        let cells = self.labels.iter().map(|&label| label != 0).collect();
        BinaryMask::from_validated(self.width, self.height, cells)
    }
}
