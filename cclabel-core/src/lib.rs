//! Connected-component labelling for binary raster masks.
//!
//! Foreground pixels are grouped under 4- or 8-connectivity and every group
//! receives a dense label in `1..=K`, numbered in top-to-bottom,
//! left-to-right order of first appearance. Background stays `0`.
//!
//! ```
//! use cclabel_core::{BinaryMask, LabellerBuilder};
//!
//! let mask = BinaryMask::from_rows(&[
//!     [true, false, false],
//!     [false, false, true],
//! ])?;
//! let labeller = LabellerBuilder::new().build()?;
//! let image = labeller.label(&mask)?;
//! assert_eq!(image.labels(), &[1, 0, 0, 0, 0, 2]);
//! # Ok::<(), cclabel_core::LabelError>(())
//! ```
//!
//! # Metrics
//!
//! With the `metrics` feature enabled, [`Labeller::label`] emits:
//!
//! - `cclabel_masks_labelled` (counter)
//! - `cclabel_components_found` (counter)
//! - `cclabel_label_latency_seconds` (histogram)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod connectivity;
mod error;
mod forest;
mod labelled;
mod labeller;
mod mask;
mod neighbours;
mod palette;
mod stats;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    builder::LabellerBuilder,
    connectivity::Connectivity,
    error::{ForestError, ForestErrorCode, LabelError, LabelErrorCode, Result},
    forest::{DisjointSetForest, Node},
    labelled::LabelledImage,
    labeller::{Labeller, label_components},
    mask::{BinaryMask, Polarity},
    neighbours::{NeighbourLabels, causal_neighbours},
    palette::{BACKGROUND, Palette},
    stats::{BoundingBox, ComponentStats, component_stats, largest_component},
};
