//! Per-component shape measurements over a [`LabelledImage`].
//!
//! Measurements are pixel based: the perimeter counts pixel edges that face
//! background or the image border, and circularity is `4 * pi * area /
//! perimeter^2`.

use std::f64::consts::PI;

use crate::labelled::LabelledImage;

/// Inclusive pixel bounds of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Leftmost column.
    pub min_x: usize,
    /// Topmost row.
    pub min_y: usize,
    /// Rightmost column.
    pub max_x: usize,
    /// Bottom row.
    pub max_y: usize,
}

impl BoundingBox {
    fn at(x: usize, y: usize) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    fn include(&mut self, x: usize, y: usize) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> usize {
        self.max_x - self.min_x + 1
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> usize {
        self.max_y - self.min_y + 1
    }
}

/// Shape measurements for one labelled component.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentStats {
    /// Component label, in `1..=component_count`.
    pub label: u32,
    /// Number of pixels.
    pub area: usize,
    /// Pixel bounds.
    pub bounding_box: BoundingBox,
    /// Mean pixel coordinate as `(x, y)`.
    pub centroid: (f64, f64),
    /// Pixel edges facing background or the image border.
    pub perimeter: usize,
}

impl ComponentStats {
    /// `4 * pi * area / perimeter^2`. Compact blobs score higher than
    /// elongated or ragged ones; a lone pixel scores `pi / 4`.
    #[must_use]
    pub fn circularity(&self) -> f64 {
        if self.perimeter == 0 {
            return 0.0;
        }
        let perimeter = self.perimeter as f64;
        4.0 * PI * self.area as f64 / (perimeter * perimeter)
    }
}

#[derive(Clone, Copy)]
struct Accumulator {
    area: usize,
    bounding_box: BoundingBox,
    sum_x: u64,
    sum_y: u64,
    perimeter: usize,
}

/// Measures every component of `image`, ordered by label.
///
/// # Examples
/// ```
/// use cclabel_core::{BinaryMask, component_stats, label_components};
///
/// let mask = BinaryMask::from_rows(&[
///     [true, true, false],
///     [true, true, false],
///     [false, false, true],
/// ])?;
/// let stats = component_stats(&label_components(&mask, 4)?);
/// assert_eq!(stats.len(), 2);
/// assert_eq!(stats[0].area, 4);
/// assert_eq!(stats[0].perimeter, 8);
/// assert_eq!(stats[0].centroid, (0.5, 0.5));
/// assert_eq!(stats[1].area, 1);
/// # Ok::<(), cclabel_core::LabelError>(())
/// ```
#[must_use]
pub fn component_stats(image: &LabelledImage) -> Vec<ComponentStats> {
    let mut slots: Vec<Option<Accumulator>> = vec![None; image.component_count()];

    for (y, row) in image.rows().enumerate() {
        for (x, &label) in row.iter().enumerate() {
            if label == 0 {
                continue;
            }
            let exposed = exposed_edges(image, x, y, label);
            let Some(slot) = slots.get_mut(label as usize - 1) else {
                continue;
            };
            let acc = slot.get_or_insert(Accumulator {
                area: 0,
                bounding_box: BoundingBox::at(x, y),
                sum_x: 0,
                sum_y: 0,
                perimeter: 0,
            });
            acc.area += 1;
            acc.bounding_box.include(x, y);
            acc.sum_x += x as u64;
            acc.sum_y += y as u64;
            acc.perimeter += exposed;
        }
    }

    slots
        .into_iter()
        .zip(1_u32..)
        .filter_map(|(slot, label)| {
            slot.map(|acc| {
                let area = acc.area as f64;
                ComponentStats {
                    label,
                    area: acc.area,
                    bounding_box: acc.bounding_box,
                    centroid: (acc.sum_x as f64 / area, acc.sum_y as f64 / area),
                    perimeter: acc.perimeter,
                }
            })
        })
        .collect()
}

/// Picks the component with the largest area; the lowest label wins ties.
#[must_use]
pub fn largest_component(stats: &[ComponentStats]) -> Option<&ComponentStats> {
    stats
        .iter()
        .reduce(|best, candidate| if candidate.area > best.area { candidate } else { best })
}

fn exposed_edges(image: &LabelledImage, x: usize, y: usize, label: u32) -> usize {
    let differs = |neighbour: Option<u32>| neighbour != Some(label);
    let west = x.checked_sub(1).and_then(|nx| image.get(nx, y));
    let north = y.checked_sub(1).and_then(|ny| image.get(x, ny));
    let east = image.get(x + 1, y);
    let south = image.get(x, y + 1);
    [west, north, east, south]
        .into_iter()
        .filter(|&neighbour| differs(neighbour))
        .count()
}
