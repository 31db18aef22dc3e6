use mayer_core::rng::RngHandle;
use mayer_core::MayerError;
use mayer_graph::{all_diagrams, random_diagram, GeneratorOpts, MAX_ENUMERATED_NODES};

#[test]
fn every_bond_subset_is_enumerated() -> Result<(), MayerError> {
    let opts = GeneratorOpts::default();
    assert_eq!(all_diagrams(0, 'f', &opts)?.len(), 1);
    assert_eq!(all_diagrams(3, 'f', &opts)?.len(), 8);
    let four = all_diagrams(4, 'f', &opts)?;
    assert_eq!(four.len(), 64);
    assert_eq!(four[0].bond_count(), 0);
    assert_eq!(four[63].bond_count(), 6);
    Ok(())
}

#[test]
fn connected_labeled_counts() -> Result<(), MayerError> {
    let opts = GeneratorOpts {
        connected_only: true,
        ..GeneratorOpts::default()
    };
    assert_eq!(all_diagrams(3, 'f', &opts)?.len(), 4);
    assert_eq!(all_diagrams(4, 'f', &opts)?.len(), 38);
    assert_eq!(all_diagrams(5, 'f', &opts)?.len(), 728);
    Ok(())
}

#[test]
fn oversized_enumeration_refused() {
    let err = all_diagrams(MAX_ENUMERATED_NODES + 1, 'f', &GeneratorOpts::default()).unwrap_err();
    assert_eq!(err.code(), "enumeration-too-large");
}

#[test]
fn random_diagrams_are_reproducible() -> Result<(), MayerError> {
    let mut rng_a = RngHandle::from_seed(11);
    let mut rng_b = RngHandle::from_seed(11);
    let a = random_diagram(7, 0.4, 'f', &mut rng_a)?;
    let b = random_diagram(7, 0.4, 'f', &mut rng_b)?;
    assert_eq!(a, b);

    let full = random_diagram(5, 1.0, 'e', &mut rng_a)?;
    assert_eq!(full.bond_count(), 10);
    let empty = random_diagram(5, 0.0, 'e', &mut rng_a)?;
    assert_eq!(empty.bond_count(), 0);

    let err = random_diagram(5, 1.5, 'f', &mut rng_a).unwrap_err();
    assert_eq!(err.code(), "invalid-probability");
    Ok(())
}
