//! Proptest runners and seeded rstest cases for the labeller properties.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rstest::rstest;

use crate::Connectivity;
use crate::test_utils::suite_proptest_config;

use super::properties::{
    run_dense_numbering_property, run_oracle_equivalence_property, run_stability_property,
};
use super::strategies::{Density, generate_fixture, mask_fixture_strategy};

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn labels_match_flood_fill(fixture in mask_fixture_strategy()) {
        run_oracle_equivalence_property(&fixture)?;
    }

    #[test]
    fn labels_are_dense_and_raster_ordered(fixture in mask_fixture_strategy()) {
        run_dense_numbering_property(&fixture)?;
    }

    #[test]
    fn labelling_is_stable(fixture in mask_fixture_strategy()) {
        run_stability_property(&fixture)?;
    }
}

#[rstest]
#[case::sparse_four(Density::Sparse, Connectivity::Four, 42)]
#[case::sparse_eight(Density::Sparse, Connectivity::Eight, 999)]
#[case::balanced_four(Density::Balanced, Connectivity::Four, 42)]
#[case::balanced_eight(Density::Balanced, Connectivity::Eight, 7777)]
#[case::dense_four(Density::Dense, Connectivity::Four, 999)]
#[case::dense_eight(Density::Dense, Connectivity::Eight, 42)]
#[case::stripes_four(Density::Stripes, Connectivity::Four, 42)]
#[case::stripes_eight(Density::Stripes, Connectivity::Eight, 999)]
fn seeded_fixtures_hold_every_property(
    #[case] density: Density,
    #[case] connectivity: Connectivity,
    #[case] seed: u64,
) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let fixture = generate_fixture(density, connectivity, &mut rng);
    run_oracle_equivalence_property(&fixture).expect("flood fill equivalence must hold");
    run_dense_numbering_property(&fixture).expect("dense numbering must hold");
    run_stability_property(&fixture).expect("stability must hold");
}

#[rstest]
#[case::four(Connectivity::Four)]
#[case::eight(Connectivity::Eight)]
fn comb_teeth_merge_into_one_component(#[case] connectivity: Connectivity) {
    let mut rng = SmallRng::seed_from_u64(3);
    let fixture = generate_fixture(Density::Stripes, connectivity, &mut rng);
    let image = crate::Labeller::new(connectivity, crate::Polarity::default())
        .label(&fixture.mask)
        .expect("labelling succeeds");
    assert_eq!(image.component_count(), 1);
}
