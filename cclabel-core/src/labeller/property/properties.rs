//! Property runners shared by the proptest and seeded rstest suites.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::test_utils::flood_fill_labels;
use crate::{LabelledImage, Labeller, Polarity};

use super::strategies::MaskFixture;

fn label_fixture(fixture: &MaskFixture) -> Result<LabelledImage, TestCaseError> {
    Labeller::new(fixture.connectivity, Polarity::default())
        .label(&fixture.mask)
        .map_err(|err| {
            TestCaseError::fail(format!(
                "labelling failed: {err} ({}x{}, connectivity={})",
                fixture.mask.width(),
                fixture.mask.height(),
                fixture.connectivity,
            ))
        })
}

/// The labeller and a breadth-first flood fill agree pixel for pixel.
pub(super) fn run_oracle_equivalence_property(fixture: &MaskFixture) -> TestCaseResult {
    let image = label_fixture(fixture)?;
    let oracle = flood_fill_labels(&fixture.mask, fixture.connectivity);
    if let Some(index) = image
        .labels()
        .iter()
        .zip(&oracle)
        .position(|(got, want)| got != want)
    {
        return Err(TestCaseError::fail(format!(
            "label mismatch at pixel {index}: labeller={}, oracle={} \
             ({}x{}, connectivity={})",
            image.labels()[index],
            oracle[index],
            fixture.mask.width(),
            fixture.mask.height(),
            fixture.connectivity,
        )));
    }
    Ok(())
}

/// Background stays 0, foreground is labelled, labels fill `1..=K` with no
/// gaps and each label first appears after all smaller ones.
pub(super) fn run_dense_numbering_property(fixture: &MaskFixture) -> TestCaseResult {
    let image = label_fixture(fixture)?;
    let mut highest_seen = 0_u32;
    for (index, (&cell, &label)) in fixture.mask.cells().iter().zip(image.labels()).enumerate() {
        if cell != (label != 0) {
            return Err(TestCaseError::fail(format!(
                "pixel {index} has foreground={cell} but label {label}"
            )));
        }
        if label > highest_seen + 1 {
            return Err(TestCaseError::fail(format!(
                "label {label} at pixel {index} skips past {}",
                highest_seen + 1
            )));
        }
        highest_seen = highest_seen.max(label);
    }
    if highest_seen as usize != image.component_count() {
        return Err(TestCaseError::fail(format!(
            "highest label {highest_seen} differs from component count {}",
            image.component_count()
        )));
    }
    Ok(())
}

/// Labelling is deterministic and idempotent on its own foreground.
pub(super) fn run_stability_property(fixture: &MaskFixture) -> TestCaseResult {
    let first = label_fixture(fixture)?;
    let again = label_fixture(fixture)?;
    if first != again {
        return Err(TestCaseError::fail("repeated labelling differs"));
    }
    let relabelled = label_fixture(&MaskFixture {
        mask: first.foreground_mask(),
        connectivity: fixture.connectivity,
    })?;
    if first != relabelled {
        return Err(TestCaseError::fail(
            "labelling the output's foreground changed the labels",
        ));
    }
    Ok(())
}
