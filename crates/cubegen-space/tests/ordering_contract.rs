use cubegen_core::{Coord, LatticeIndex};
use cubegen_space::{Cube3, Lattice, SpaceError};

#[test]
fn default_cube_walks_k_then_i_then_j() {
    let s = Cube3::new(2).unwrap();
    let order: Vec<LatticeIndex> = s.indices().collect();
    assert_eq!(order.len(), 125);
    assert_eq!(order[0], LatticeIndex::new(-2, -2, -2));
    assert_eq!(order[1], LatticeIndex::new(-2, -2, -1));
    assert_eq!(order[5], LatticeIndex::new(-2, -1, -2));
    assert_eq!(order[25], LatticeIndex::new(-1, -2, -2));
    assert_eq!(order[124], LatticeIndex::new(2, 2, 2));
}

#[test]
fn trait_object_usage() {
    let lattices: Vec<Box<dyn Lattice>> = vec![
        Box::new(Cube3::new(0).unwrap()),
        Box::new(Cube3::new(3).unwrap()),
    ];
    let counts: Vec<usize> = lattices.iter().map(|l| l.cell_count()).collect();
    assert_eq!(counts, vec![1, 343]);
    for l in &lattices {
        assert_eq!(l.ndim(), 3);
        let ordering: Vec<Coord> = l.canonical_ordering();
        assert_eq!(l.canonical_rank(&ordering[0]), Some(0));
    }
}

#[test]
fn error_display() {
    assert_eq!(
        SpaceError::NegativeExtent { value: -2 }.to_string(),
        "half extent must be non-negative, got -2"
    );
    let err = Cube3::new(i32::MAX).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("half_extent = {} overflows the cell count", i32::MAX)
    );
}
