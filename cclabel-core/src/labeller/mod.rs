//! Connected-component labelling over binary masks.
//!
//! Labelling runs three row-major scans:
//!
//! - Pass 1 gives each foreground pixel the smallest label among its causal
//!   neighbours, minting a fresh label when it has none, and records in a
//!   [`DisjointSetForest`] which labels meet at the pixel.
//! - Pass 2 replaces every provisional label with its class representative
//!   and numbers representatives in order of first appearance.
//! - Pass 3 swaps representatives for those dense numbers.
//!
//! Every call owns its forest and output grid, so a [`Labeller`] can be
//! shared freely between threads.

use std::time::{Duration, Instant};

use tracing::{debug, instrument};

use crate::{
    Result,
    connectivity::Connectivity,
    error::LabelError,
    forest::DisjointSetForest,
    labelled::LabelledImage,
    mask::{BinaryMask, Polarity},
    neighbours::causal_neighbours,
};

/// Labels the connected components of binary masks.
///
/// # Examples
/// ```
/// use cclabel_core::{BinaryMask, LabellerBuilder};
///
/// let mask = BinaryMask::from_rows(&[
///     [true, false, true],
///     [true, false, true],
///     [true, true, true],
/// ])?;
/// let labeller = LabellerBuilder::new().with_connectivity(4).build()?;
/// let image = labeller.label(&mask)?;
/// assert_eq!(image.component_count(), 1);
/// assert_eq!(image.labels(), &[1, 0, 1, 1, 0, 1, 1, 1, 1]);
/// # Ok::<(), cclabel_core::LabelError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Labeller {
    connectivity: Connectivity,
    polarity: Polarity,
}

impl Labeller {
    pub(crate) const fn new(connectivity: Connectivity, polarity: Polarity) -> Self {
        Self {
            connectivity,
            polarity,
        }
    }

    /// Returns the adjacency rule used when labelling.
    #[must_use]
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Returns the polarity used for integer grids.
    #[must_use]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Labels the connected components of `mask`.
    ///
    /// The mask is only read; the returned image is freshly allocated.
    ///
    /// # Errors
    /// Returns [`LabelError::LabelOverflow`] when the mask has more pixels
    /// than a `u32` label can number, and [`LabelError::Forest`] if the
    /// equivalence forest is handed a label it never registered.
    #[instrument(
        name = "core.label",
        err,
        skip(self, mask),
        fields(
            width = mask.width(),
            height = mask.height(),
            connectivity = %self.connectivity,
        ),
    )]
    pub fn label(&self, mask: &BinaryMask) -> Result<LabelledImage> {
        let started = Instant::now();
        let pixels = mask.len();
        if u32::try_from(pixels).is_err() {
            return Err(LabelError::LabelOverflow { pixels });
        }

        let mut labels = vec![0_u32; pixels];
        let mut forest = DisjointSetForest::new();

        let provisional = provisional_pass(mask, self.connectivity, &mut labels, &mut forest)?;
        debug!(
            minted = provisional.minted,
            unions = provisional.unions,
            classes = forest.set_count(),
            "provisional pass complete"
        );

        let dense = resolve_pass(&mut labels, &mut forest, provisional.minted)?;
        densify_pass(&mut labels, &dense.index);
        debug!(components = dense.count, "labelling complete");

        record_labelled(dense.count, started.elapsed());
        Ok(LabelledImage::new(
            mask.width(),
            mask.height(),
            labels,
            dense.count,
        ))
    }

    /// Classifies a flat row-major integer grid through the configured
    /// polarity and labels the result.
    ///
    /// # Errors
    /// Returns the mask construction errors of
    /// [`BinaryMask::from_intensities`] and the labelling errors of
    /// [`Self::label`].
    pub fn label_intensities(
        &self,
        width: usize,
        height: usize,
        values: &[u8],
    ) -> Result<LabelledImage> {
        let mask = BinaryMask::from_intensities(width, height, values, self.polarity)?;
        self.label(&mask)
    }

    /// Classifies nested integer rows through the configured polarity and
    /// labels the result.
    ///
    /// # Errors
    /// Returns [`LabelError::EmptyMask`] or [`LabelError::RaggedRows`] for
    /// malformed grids, plus the labelling errors of [`Self::label`].
    pub fn label_intensity_rows<R: AsRef<[u8]>>(&self, rows: &[R]) -> Result<LabelledImage> {
        let mask = BinaryMask::from_intensity_rows(rows, self.polarity)?;
        self.label(&mask)
    }

    /// Labels independent masks, in parallel when the `parallel` feature is
    /// enabled. Results keep the order of `masks`.
    #[must_use]
    pub fn label_batch(&self, masks: &[BinaryMask]) -> Vec<Result<LabelledImage>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            masks.par_iter().map(|mask| self.label(mask)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            masks.iter().map(|mask| self.label(mask)).collect()
        }
    }
}

/// Labels `mask` under the adjacency rule named by `connectivity`.
///
/// # Errors
/// Returns [`LabelError::InvalidConnectivity`] before reading the mask when
/// `connectivity` is neither 4 nor 8, otherwise the errors of
/// [`Labeller::label`].
///
/// # Examples
/// ```
/// use cclabel_core::{BinaryMask, label_components};
///
/// let mask = BinaryMask::from_rows(&[[true, false], [false, true]])?;
/// assert_eq!(label_components(&mask, 8)?.labels(), &[1, 0, 0, 1]);
/// assert_eq!(label_components(&mask, 4)?.labels(), &[1, 0, 0, 2]);
/// assert!(label_components(&mask, 5).is_err());
/// # Ok::<(), cclabel_core::LabelError>(())
/// ```
pub fn label_components(mask: &BinaryMask, connectivity: u8) -> Result<LabelledImage> {
    let connectivity = Connectivity::try_from(connectivity)?;
    Labeller::new(connectivity, Polarity::default()).label(mask)
}

struct ProvisionalPass {
    minted: u32,
    unions: usize,
}

fn provisional_pass(
    mask: &BinaryMask,
    connectivity: Connectivity,
    labels: &mut [u32],
    forest: &mut DisjointSetForest,
) -> Result<ProvisionalPass> {
    let width = mask.width();
    let mut next_label: u32 = 1;
    let mut unions = 0;

    for (index, &foreground) in mask.cells().iter().enumerate() {
        if !foreground {
            continue;
        }
        let (x, y) = (index % width, index / width);
        let neighbours = causal_neighbours(labels, width, x, y, connectivity);

        let Some(smallest) = neighbours.min() else {
            forest.make_set(next_label)?;
            labels[index] = next_label;
            next_label = next_label
                .checked_add(1)
                .ok_or(LabelError::LabelOverflow { pixels: mask.len() })?;
            continue;
        };

        labels[index] = smallest;
        if neighbours.len() > 1 {
            let keep = forest.node(smallest)?;
            for &label in neighbours.as_slice() {
                if label != smallest {
                    let other = forest.node(label)?;
                    forest.union(keep, other)?;
                    unions += 1;
                }
            }
        }
    }

    Ok(ProvisionalPass {
        minted: next_label - 1,
        unions,
    })
}

struct DenseLabels {
    index: Vec<u32>,
    count: usize,
}

fn resolve_pass(
    labels: &mut [u32],
    forest: &mut DisjointSetForest,
    minted: u32,
) -> Result<DenseLabels> {
    let mut index = vec![0_u32; minted as usize + 1];
    let mut next: u32 = 1;

    for label in labels.iter_mut().filter(|label| **label != 0) {
        let node = forest.node(*label)?;
        let representative = forest.find(node)?.label();
        *label = representative;

        let dense = &mut index[representative as usize];
        if *dense == 0 {
            *dense = next;
            next += 1;
        }
    }

    Ok(DenseLabels {
        index,
        count: (next - 1) as usize,
    })
}

fn densify_pass(labels: &mut [u32], index: &[u32]) {
    for label in labels.iter_mut().filter(|label| **label != 0) {
        *label = index[*label as usize];
    }
}

#[cfg(feature = "metrics")]
fn record_labelled(components: usize, elapsed: Duration) {
    metrics::counter!("cclabel_masks_labelled").increment(1);
    metrics::counter!("cclabel_components_found").increment(components as u64);
    metrics::histogram!("cclabel_label_latency_seconds").record(elapsed.as_secs_f64());
}

#[cfg(not(feature = "metrics"))]
fn record_labelled(_components: usize, _elapsed: Duration) {}

#[cfg(test)]
mod property;
