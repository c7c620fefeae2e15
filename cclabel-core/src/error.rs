//! Error types for the cclabel core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::DisjointSetForest`] operations.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum ForestError {
    /// Label `0` marks background and can never join the forest.
    #[error("label 0 is reserved for background")]
    ReservedLabel,
    /// The label already belongs to the forest.
    #[error("label {label} is already registered")]
    DuplicateLabel {
        /// The label passed to `make_set` a second time.
        label: u32,
    },
    /// The label was never registered with `make_set`.
    #[error("label {label} has not been registered")]
    UnknownLabel {
        /// The label that could not be resolved.
        label: u32,
    },
}

define_error_codes! {
    /// Stable codes describing [`ForestError`] variants.
    enum ForestErrorCode for ForestError {
        /// Label `0` marks background and can never join the forest.
        ReservedLabel => ReservedLabel => "FOREST_RESERVED_LABEL",
        /// The label already belongs to the forest.
        DuplicateLabel => DuplicateLabel { .. } => "FOREST_DUPLICATE_LABEL",
        /// The label was never registered with `make_set`.
        UnknownLabel => UnknownLabel { .. } => "FOREST_UNKNOWN_LABEL",
    }
}

/// Error type produced when configuring a [`crate::Labeller`] or labelling a
/// mask.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum LabelError {
    /// Connectivity must name the 4- or 8-neighbourhood.
    #[error("connectivity must be 4 or 8 (got {got})")]
    InvalidConnectivity {
        /// The unsupported neighbour count supplied by the caller.
        got: u8,
    },
    /// The mask has no pixels.
    #[error("mask must have at least one pixel (got {width}x{height})")]
    EmptyMask {
        /// Width of the rejected mask.
        width: usize,
        /// Height of the rejected mask.
        height: usize,
    },
    /// A row of the input grid had a different width from the first row.
    #[error("row {row} has {actual} cells but the first row has {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Width established by the first row.
        expected: usize,
        /// Width of the offending row.
        actual: usize,
    },
    /// The flat cell buffer does not cover `width * height` pixels.
    #[error("{len} cells cannot fill a {width}x{height} mask")]
    DimensionMismatch {
        /// Declared mask width.
        width: usize,
        /// Declared mask height.
        height: usize,
        /// Number of cells supplied.
        len: usize,
    },
    /// The mask holds more pixels than a `u32` label can address.
    #[error("mask with {pixels} pixels exceeds the label range")]
    LabelOverflow {
        /// Pixel count of the rejected mask.
        pixels: usize,
    },
    /// The equivalence forest rejected an operation while labelling.
    #[error("equivalence forest failed: {error}")]
    Forest {
        /// Underlying forest error.
        #[from]
        error: ForestError,
    },
}

define_error_codes! {
    /// Stable codes describing [`LabelError`] variants.
    enum LabelErrorCode for LabelError {
        /// Connectivity must name the 4- or 8-neighbourhood.
        InvalidConnectivity => InvalidConnectivity { .. } => "CCLABEL_INVALID_CONNECTIVITY",
        /// The mask has no pixels.
        EmptyMask => EmptyMask { .. } => "CCLABEL_EMPTY_MASK",
        /// A row of the input grid had a different width from the first row.
        RaggedRows => RaggedRows { .. } => "CCLABEL_RAGGED_ROWS",
        /// The flat cell buffer does not cover `width * height` pixels.
        DimensionMismatch => DimensionMismatch { .. } => "CCLABEL_DIMENSION_MISMATCH",
        /// The mask holds more pixels than a `u32` label can address.
        LabelOverflow => LabelOverflow { .. } => "CCLABEL_LABEL_OVERFLOW",
        /// The equivalence forest rejected an operation while labelling.
        ForestFailure => Forest { .. } => "CCLABEL_FOREST_FAILURE",
    }
}

impl LabelError {
    /// Retrieve the inner [`ForestErrorCode`] when the error originated in the
    /// equivalence forest.
    pub const fn forest_code(&self) -> Option<ForestErrorCode> {
        match self {
            Self::Forest { error } => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, LabelError>;
