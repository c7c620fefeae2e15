//! Pixel adjacency rules.

use std::fmt;

use crate::error::LabelError;

/// Which neighbouring pixels count as connected.
///
/// # Examples
/// ```
/// use cclabel_core::Connectivity;
///
/// let connectivity = Connectivity::try_from(4).expect("4 is supported");
/// assert_eq!(connectivity, Connectivity::Four);
/// assert!(Connectivity::try_from(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Connectivity {
    /// North, south, east and west neighbours.
    Four,
    /// The 4-neighbourhood plus the four diagonals.
    #[default]
    Eight,
}

impl Connectivity {
    /// Returns the neighbour count this rule is named after.
    #[must_use]
    pub const fn neighbours(self) -> u8 {
        match self {
            Self::Four => 4,
            Self::Eight => 8,
        }
    }

    /// Whether diagonal neighbours are connected.
    #[must_use]
    pub const fn includes_diagonals(self) -> bool {
        matches!(self, Self::Eight)
    }
}

impl TryFrom<u8> for Connectivity {
    type Error = LabelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Self::Four),
            8 => Ok(Self::Eight),
            got => Err(LabelError::InvalidConnectivity { got }),
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.neighbours())
    }
}
