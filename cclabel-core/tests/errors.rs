use cclabel_core::{
    BinaryMask, DisjointSetForest, ForestError, ForestErrorCode, LabelError, LabelErrorCode,
    LabellerBuilder, Polarity,
};
use rstest::rstest;

#[rstest]
#[case(ForestError::ReservedLabel, ForestErrorCode::ReservedLabel, "FOREST_RESERVED_LABEL")]
#[case(
    ForestError::DuplicateLabel { label: 3 },
    ForestErrorCode::DuplicateLabel,
    "FOREST_DUPLICATE_LABEL",
)]
#[case(
    ForestError::UnknownLabel { label: 9 },
    ForestErrorCode::UnknownLabel,
    "FOREST_UNKNOWN_LABEL",
)]
fn forest_errors_have_stable_codes(
    #[case] error: ForestError,
    #[case] expected: ForestErrorCode,
    #[case] text: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(expected.as_str(), text);
    assert_eq!(expected.to_string(), text);
}

#[rstest]
#[case(
    LabelError::InvalidConnectivity { got: 6 },
    LabelErrorCode::InvalidConnectivity,
    None,
)]
#[case(
    LabelError::EmptyMask { width: 0, height: 3 },
    LabelErrorCode::EmptyMask,
    None,
)]
#[case(
    LabelError::RaggedRows { row: 2, expected: 4, actual: 1 },
    LabelErrorCode::RaggedRows,
    None,
)]
#[case(
    LabelError::DimensionMismatch { width: 2, height: 2, len: 3 },
    LabelErrorCode::DimensionMismatch,
    None,
)]
#[case(
    LabelError::LabelOverflow { pixels: usize::MAX },
    LabelErrorCode::LabelOverflow,
    None,
)]
#[case(
    LabelError::from(ForestError::UnknownLabel { label: 4 }),
    LabelErrorCode::ForestFailure,
    Some(ForestErrorCode::UnknownLabel),
)]
fn label_errors_have_stable_codes(
    #[case] error: LabelError,
    #[case] expected: LabelErrorCode,
    #[case] forest: Option<ForestErrorCode>,
) {
    assert_eq!(error.code(), expected);
    assert!(error.code().as_str().starts_with("CCLABEL_"));
    assert_eq!(error.forest_code(), forest);
}

#[test]
fn empty_masks_are_rejected() {
    let err = BinaryMask::from_cells(0, 0, Vec::new()).expect_err("no pixels");
    assert_eq!(err.code(), LabelErrorCode::EmptyMask);
    let err = BinaryMask::from_intensities(3, 0, &[], Polarity::default()).expect_err("no pixels");
    assert_eq!(err.code(), LabelErrorCode::EmptyMask);
}

#[test]
fn short_buffers_are_rejected() {
    let err = BinaryMask::from_cells(3, 2, vec![true; 5]).expect_err("one cell short");
    assert_eq!(
        err,
        LabelError::DimensionMismatch {
            width: 3,
            height: 2,
            len: 5,
        }
    );
}

#[test]
fn ragged_rows_are_rejected() {
    let rows: Vec<Vec<bool>> = vec![vec![true, false], vec![true]];
    let err = BinaryMask::from_rows(&rows).expect_err("ragged");
    assert_eq!(err.code(), LabelErrorCode::RaggedRows);
}

#[test]
fn unsupported_connectivity_is_rejected_at_build_time() {
    let err = LabellerBuilder::new()
        .with_connectivity(0)
        .build()
        .expect_err("zero neighbours");
    assert_eq!(err.code(), LabelErrorCode::InvalidConnectivity);
    assert_eq!(err.to_string(), "connectivity must be 4 or 8 (got 0)");
}

#[test]
fn forest_rejects_misuse() {
    let mut forest = DisjointSetForest::new();
    assert_eq!(forest.make_set(0), Err(ForestError::ReservedLabel));
    forest.make_set(5).expect("fresh label");
    assert_eq!(
        forest.make_set(5),
        Err(ForestError::DuplicateLabel { label: 5 })
    );
    assert_eq!(forest.node(2), Err(ForestError::UnknownLabel { label: 2 }));
}
