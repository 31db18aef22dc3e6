use mayer_core::{Diagram, MayerError};
use mayer_graph::{
    are_isomorphic, automorphism_count, find_isomorphism, with_root, GraphConfig, LabeledGraph,
    NodeId,
};

fn build(n: usize, bonds: &[(u64, u64)]) -> Result<LabeledGraph, MayerError> {
    build_with(n, bonds, GraphConfig::default())
}

fn build_with(
    n: usize,
    bonds: &[(u64, u64)],
    config: GraphConfig,
) -> Result<LabeledGraph, MayerError> {
    let mut graph = LabeledGraph::with_field_nodes(n, config)?;
    for &(a, b) in bonds {
        graph.connect(NodeId::from_raw(a), NodeId::from_raw(b))?;
    }
    Ok(graph)
}

#[test]
fn relabeled_path_is_isomorphic() -> Result<(), MayerError> {
    let path = build(4, &[(0, 1), (1, 2), (2, 3)])?;
    let relabeled = build(4, &[(2, 0), (0, 3), (3, 1)])?;
    assert!(path.is_isomorphic(&relabeled)?);

    let mapping = find_isomorphism(&path, &relabeled)?.expect("mapping");
    for (a, b, color) in path.bonds() {
        let ma = mapping[a.as_raw() as usize];
        let mb = mapping[b.as_raw() as usize];
        assert_eq!(relabeled.bond(ma, mb), Some(color));
    }
    Ok(())
}

#[test]
fn path_and_star_differ() -> Result<(), MayerError> {
    let path = build(4, &[(0, 1), (1, 2), (2, 3)])?;
    let star = build(4, &[(0, 1), (0, 2), (0, 3)])?;
    assert!(!are_isomorphic(&path, &star)?);
    Ok(())
}

#[test]
fn equal_invariants_still_separated() -> Result<(), MayerError> {
    let hexagon = build(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)])?;
    let triangles = build(6, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)])?;
    assert!(!are_isomorphic(&hexagon, &triangles)?);
    assert!(!are_isomorphic(&triangles, &hexagon)?);
    Ok(())
}

#[test]
fn bond_colours_and_roots_must_match() -> Result<(), MayerError> {
    let mut f_bond = build(2, &[])?;
    f_bond.add_bond(NodeId::from_raw(0), NodeId::from_raw(1), 'f')?;
    let mut e_bond = build(2, &[])?;
    e_bond.add_bond(NodeId::from_raw(0), NodeId::from_raw(1), 'e')?;
    assert!(!are_isomorphic(&f_bond, &e_bond)?);

    let path = build(3, &[(0, 1), (1, 2)])?;
    let end_rooted = with_root(&path, 0)?;
    let other_end_rooted = with_root(&path, 2)?;
    let middle_rooted = with_root(&path, 1)?;
    assert!(are_isomorphic(&end_rooted, &other_end_rooted)?);
    assert!(!are_isomorphic(&end_rooted, &middle_rooted)?);
    assert!(!are_isomorphic(&end_rooted, &path)?);
    Ok(())
}

#[test]
fn symmetry_numbers_of_small_diagrams() -> Result<(), MayerError> {
    let triangle = build(3, &[(0, 1), (1, 2), (2, 0)])?;
    let path = build(3, &[(0, 1), (1, 2)])?;
    let square = build(4, &[(0, 1), (1, 2), (2, 3), (3, 0)])?;
    let complete = build(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)])?;
    assert_eq!(automorphism_count(&triangle)?, 6);
    assert_eq!(automorphism_count(&path)?, 2);
    assert_eq!(automorphism_count(&square)?, 8);
    assert_eq!(automorphism_count(&complete)?, 24);
    assert_eq!(automorphism_count(&with_root(&triangle, 0)?)?, 2);
    assert_eq!(automorphism_count(&LabeledGraph::default())?, 1);
    Ok(())
}

#[test]
fn exhausted_budget_is_an_error() -> Result<(), MayerError> {
    let config = GraphConfig {
        iso_step_limit: Some(2),
        ..GraphConfig::default()
    };
    let hexagon = build_with(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)], config)?;
    let shifted = hexagon.relabel(&[1, 2, 3, 4, 5, 0])?;
    let err = hexagon.is_isomorphic(&shifted).unwrap_err();
    assert!(matches!(err, MayerError::Isomorphism(_)));
    assert_eq!(err.code(), "iso-budget-exceeded");
    assert_eq!(err.info().context.get("limit"), Some(&"2".to_string()));
    Ok(())
}

#[test]
fn budget_applies_in_both_directions() -> Result<(), MayerError> {
    let limited = GraphConfig {
        iso_step_limit: Some(2),
        ..GraphConfig::default()
    };
    let ring = [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)];
    let tight = build_with(6, &ring, limited)?;
    let open = build(6, &ring)?.relabel(&[3, 4, 5, 0, 1, 2])?;

    let forward = tight.is_isomorphic(&open).unwrap_err();
    let backward = open.is_isomorphic(&tight).unwrap_err();
    assert_eq!(forward.code(), "iso-budget-exceeded");
    assert_eq!(backward.code(), "iso-budget-exceeded");
    assert_eq!(backward.info().context.get("limit"), Some(&"2".to_string()));

    let relaxed = build(6, &ring)?;
    assert!(open.is_isomorphic(&relaxed)?);
    assert!(relaxed.is_isomorphic(&open)?);
    Ok(())
}
