//! Binary foreground masks consumed by the labeller.
//!
//! Masks are rectangular, non-empty, and stored row-major. Integer grids are
//! converted through an explicit [`Polarity`] so the caller always states
//! whether zero cells are foreground or background.

use crate::error::{LabelError, Result};

/// How zero and non-zero cells of an integer grid map to foreground.
///
/// # Examples
/// ```
/// use cclabel_core::Polarity;
///
/// assert!(Polarity::NonZeroForeground.is_foreground(255));
/// assert!(Polarity::from_zero_foreground(true).is_foreground(0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Non-zero cells are foreground, zero cells are background.
    #[default]
    NonZeroForeground,
    /// Zero cells are foreground, non-zero cells are background.
    ZeroForeground,
}

impl Polarity {
    /// Maps the "zero means foreground" flag onto a polarity.
    #[must_use]
    pub const fn from_zero_foreground(zero_foreground: bool) -> Self {
        if zero_foreground {
            Self::ZeroForeground
        } else {
            Self::NonZeroForeground
        }
    }

    /// Whether zero cells are treated as foreground.
    #[must_use]
    pub const fn zero_is_foreground(self) -> bool {
        matches!(self, Self::ZeroForeground)
    }

    /// Classifies a single integer cell.
    #[must_use]
    pub const fn is_foreground(self, value: u8) -> bool {
        self.classify(value != 0)
    }

    const fn classify(self, set: bool) -> bool {
        match self {
            Self::NonZeroForeground => set,
            Self::ZeroForeground => !set,
        }
    }
}

/// A rectangular grid of foreground/background pixels.
///
/// # Examples
/// ```
/// use cclabel_core::BinaryMask;
///
/// let mask = BinaryMask::from_rows(&[vec![true, false], vec![false, true]])?;
/// assert_eq!((mask.width(), mask.height()), (2, 2));
/// assert_eq!(mask.foreground_count(), 2);
/// assert!(mask.is_foreground(1, 1));
/// # Ok::<(), cclabel_core::LabelError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMask {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl BinaryMask {
    /// Builds a mask from a flat row-major buffer.
    ///
    /// # Errors
    /// Returns [`LabelError::EmptyMask`] when either dimension is zero and
    /// [`LabelError::DimensionMismatch`] when `cells` does not hold exactly
    /// `width * height` entries.
    pub fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LabelError::EmptyMask { width, height });
        }
        let expected = width.checked_mul(height);
        if expected != Some(cells.len()) {
            return Err(LabelError::DimensionMismatch {
                width,
                height,
                len: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Builds a mask from nested rows.
    ///
    /// # Errors
    /// Returns [`LabelError::EmptyMask`] when there are no rows or the first
    /// row is empty, and [`LabelError::RaggedRows`] when any row differs in
    /// width from the first.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        Self::collect_rows(rows, |cell: &bool| *cell)
    }

    /// Builds a mask from nested rows of integer cells, classified through
    /// `polarity`.
    ///
    /// # Errors
    /// Same as [`Self::from_rows`].
    pub fn from_intensity_rows<R: AsRef<[u8]>>(rows: &[R], polarity: Polarity) -> Result<Self> {
        Self::collect_rows(rows, |value: &u8| polarity.is_foreground(*value))
    }

    /// Builds a mask from a flat row-major buffer of integer cells, classified
    /// through `polarity`.
    ///
    /// # Errors
    /// Same as [`Self::from_cells`].
    pub fn from_intensities(
        width: usize,
        height: usize,
        values: &[u8],
        polarity: Polarity,
    ) -> Result<Self> {
        let cells = values
            .iter()
            .map(|&value| polarity.is_foreground(value))
            .collect();
        Self::from_cells(width, height, cells)
    }

    /// Applies a binary threshold to greyscale `values` and classifies the
    /// result through `polarity`.
    ///
    /// A value strictly above `threshold` is "set", everything else is
    /// "unset"; with [`Polarity::NonZeroForeground`] set pixels are foreground
    /// and with [`Polarity::ZeroForeground`] unset pixels are.
    ///
    /// # Errors
    /// Same as [`Self::from_cells`].
    ///
    /// # Examples
    /// ```
    /// use cclabel_core::{BinaryMask, Polarity};
    ///
    /// let luma = [10, 200, 65, 66];
    /// let bright = BinaryMask::threshold(4, 1, &luma, 65, Polarity::NonZeroForeground)?;
    /// assert_eq!(bright.cells(), &[false, true, false, true]);
    /// let dark = BinaryMask::threshold(4, 1, &luma, 65, Polarity::ZeroForeground)?;
    /// assert_eq!(dark.cells(), &[true, false, true, false]);
    /// # Ok::<(), cclabel_core::LabelError>(())
    /// ```
    pub fn threshold(
        width: usize,
        height: usize,
        values: &[u8],
        threshold: u8,
        polarity: Polarity,
    ) -> Result<Self> {
        let cells = values
            .iter()
            .map(|&value| polarity.classify(value > threshold))
            .collect();
        Self::from_cells(width, height, cells)
    }

    /// Wraps cells whose dimensions were already validated by another mask.
    pub(crate) fn from_validated(width: usize, height: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    fn collect_rows<R, T, F>(rows: &[R], mut classify: F) -> Result<Self>
    where
        R: AsRef<[T]>,
        F: FnMut(&T) -> bool,
    {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let height = rows.len();
        if width == 0 {
            return Err(LabelError::EmptyMask { width, height });
        }
        let mut cells = Vec::with_capacity(width.saturating_mul(height));
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(LabelError::RaggedRows {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }
            cells.extend(values.iter().map(&mut classify));
        }
        Ok(Self {
            width,
            height,
            cells,
        })
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

    /// Total number of pixels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; masks are non-empty by construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major pixel states.
    #[must_use]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Whether `(x, y)` is a foreground pixel. Out-of-bounds coordinates are
    /// background.
    #[must_use]
    pub fn is_foreground(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.cells.get(y * self.width + x).copied().unwrap_or(false)
    }

    /// Number of foreground pixels.
    #[must_use]
    pub fn foreground_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }
}
