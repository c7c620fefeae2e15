//! Builder utilities for configuring a [`Labeller`].
//!
//! Validates the adjacency rule before any image is touched and records the
//! foreground polarity used for integer grids.

use crate::{Result, connectivity::Connectivity, labeller::Labeller, mask::Polarity};

const DEFAULT_CONNECTIVITY: u8 = 8;

/// Configures and constructs [`Labeller`] instances.
///
/// # Examples
/// ```
/// use cclabel_core::{Connectivity, LabellerBuilder, Polarity};
///
/// let labeller = LabellerBuilder::new()
///     .with_connectivity(4)
///     .with_zero_foreground(true)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(labeller.connectivity(), Connectivity::Four);
/// assert_eq!(labeller.polarity(), Polarity::ZeroForeground);
/// ```
#[derive(Debug, Clone)]
pub struct LabellerBuilder {
    connectivity: u8,
    zero_foreground: bool,
}

impl Default for LabellerBuilder {
    fn default() -> Self {
        Self {
            connectivity: DEFAULT_CONNECTIVITY,
            zero_foreground: false,
        }
    }
}

impl LabellerBuilder {
    /// Creates a builder populated with default parameters: 8-connectivity
    /// and non-zero cells as foreground.
    ///
    /// # Examples
    /// ```
    /// use cclabel_core::LabellerBuilder;
    ///
    /// let builder = LabellerBuilder::new();
    /// assert_eq!(builder.connectivity(), 8);
    /// assert!(!builder.zero_foreground());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the neighbour count; only `4` and `8` pass [`Self::build`].
    #[must_use]
    pub fn with_connectivity(mut self, neighbours: u8) -> Self {
        self.connectivity = neighbours;
        self
    }

    /// Returns the configured neighbour count.
    #[must_use]
    pub fn connectivity(&self) -> u8 {
        self.connectivity
    }

    /// Chooses whether zero cells of integer grids are foreground.
    #[must_use]
    pub fn with_zero_foreground(mut self, zero_foreground: bool) -> Self {
        self.zero_foreground = zero_foreground;
        self
    }

    /// Returns the configured polarity flag.
    #[must_use]
    pub fn zero_foreground(&self) -> bool {
        self.zero_foreground
    }

    /// Validates the configuration and constructs a [`Labeller`].
    ///
    /// # Errors
    /// Returns [`crate::LabelError::InvalidConnectivity`] when the neighbour
    /// count is neither 4 nor 8.
    ///
    /// # Examples
    /// ```
    /// use cclabel_core::{LabelError, LabellerBuilder};
    ///
    /// let err = LabellerBuilder::new().with_connectivity(6).build().unwrap_err();
    /// assert_eq!(err, LabelError::InvalidConnectivity { got: 6 });
    /// ```
    pub fn build(self) -> Result<Labeller> {
        let connectivity = Connectivity::try_from(self.connectivity)?;
        Ok(Labeller::new(
            connectivity,
            Polarity::from_zero_foreground(self.zero_foreground),
        ))
    }
}
