//! Property-based tests for block volumes.
//!
//! These tests use proptest to generate random corner volumes and verify
//! the crate's geometric invariants.
//!
//! Run with: cargo test -p block-volume -- proptest

use block_volume::{BlockPos, CornerVolume, PositionSet, VolumeRelation};
use proptest::prelude::*;
use std::collections::HashSet;

// =============================================================================
// Strategies
// =============================================================================

/// Generate a position in a bounded range, safe to translate without overflow.
fn arb_pos() -> impl Strategy<Value = BlockPos> {
    (-512..512i32, -512..512i32, -512..512i32).prop_map(|(x, y, z)| BlockPos::new(x, y, z))
}

/// Generate a corner volume from two independent corners (any order).
fn arb_volume() -> impl Strategy<Value = CornerVolume> {
    (arb_pos(), arb_pos()).prop_map(|(a, b)| CornerVolume::new(a, b))
}

/// Generate a corner volume small enough to iterate exhaustively.
fn arb_small_volume() -> impl Strategy<Value = CornerVolume> {
    (arb_pos(), 0..5i32, 0..5i32, 0..5i32).prop_map(|(corner, dx, dy, dz)| {
        CornerVolume::new(corner, corner + BlockPos::new(dx, dy, dz))
    })
}

/// Generate a translation delta that cannot push a bounded volume out of range.
fn arb_delta() -> impl Strategy<Value = BlockPos> {
    (-1024..1024i32, -1024..1024i32, -1024..1024i32)
        .prop_map(|(x, y, z)| BlockPos::new(x, y, z))
}

/// Generate a non-empty list of positions for a sparse set.
fn arb_members() -> impl Strategy<Value = Vec<BlockPos>> {
    prop::collection::vec(arb_pos(), 1..32)
}

/// True iff the per-axis ranges of the two volumes overlap on every axis.
fn ranges_overlap_everywhere(a: &CornerVolume, b: &CornerVolume) -> bool {
    let (a_min, a_max) = (a.min().as_array(), a.max().as_array());
    let (b_min, b_max) = (b.min().as_array(), b.max().as_array());
    (0..3).all(|axis| a_min[axis].max(b_min[axis]) <= a_max[axis].min(b_max[axis]))
}

// =============================================================================
// Derived-bounds invariants
// =============================================================================

proptest! {
    #[test]
    fn proptest_min_leq_max(volume in arb_volume()) {
        let min = volume.min();
        let max = volume.max();
        prop_assert!(min.x <= max.x);
        prop_assert!(min.y <= max.y);
        prop_assert!(min.z <= max.z);
    }

    #[test]
    fn proptest_bounds_ignore_corner_order(a in arb_pos(), b in arb_pos()) {
        let forward = CornerVolume::new(a, b);
        let reversed = CornerVolume::new(b, a);
        prop_assert_eq!(forward.min(), reversed.min());
        prop_assert_eq!(forward.max(), reversed.max());
        // Corner identity survives either way
        prop_assert_eq!(forward.corner1, a);
        prop_assert_eq!(reversed.corner1, b);
    }

    #[test]
    fn proptest_capacity_is_span_product(volume in arb_volume()) {
        let (sx, sy, sz) = volume.span();
        prop_assert_eq!(volume.capacity().unwrap(), sx * sy * sz);

        let min = volume.min();
        let max = volume.max();
        prop_assert_eq!(sx, u64::from(max.x.abs_diff(min.x)) + 1);
        prop_assert_eq!(sy, u64::from(max.y.abs_diff(min.y)) + 1);
        prop_assert_eq!(sz, u64::from(max.z.abs_diff(min.z)) + 1);
    }

    #[test]
    fn proptest_bounds_are_inside(volume in arb_volume()) {
        prop_assert!(volume.contains(volume.min()));
        prop_assert!(volume.contains(volume.max()));
    }

    #[test]
    fn proptest_translate_round_trip(volume in arb_volume(), delta in arb_delta()) {
        let mut moved = volume;
        moved.translate(delta).unwrap();
        moved.translate(-delta).unwrap();
        prop_assert_eq!(moved, volume);
    }

    #[test]
    fn proptest_translate_shifts_bounds(volume in arb_volume(), delta in arb_delta()) {
        let mut moved = volume;
        moved.translate(delta).unwrap();
        prop_assert_eq!(moved.min(), volume.min() + delta);
        prop_assert_eq!(moved.max(), volume.max() + delta);
    }
}

// =============================================================================
// Classification invariants
// =============================================================================

proptest! {
    #[test]
    fn proptest_relation_is_reflexive(volume in arb_volume()) {
        prop_assert_eq!(volume.relation_to(&volume), VolumeRelation::Contains);
    }

    #[test]
    fn proptest_disjoint_iff_axis_separated(a in arb_volume(), b in arb_volume()) {
        let separated = !ranges_overlap_everywhere(&a, &b);
        prop_assert_eq!(a.relation_to(&b) == VolumeRelation::Disjoint, separated);
        // Disjointness is the one symmetric case
        prop_assert_eq!(
            a.relation_to(&b) == VolumeRelation::Disjoint,
            b.relation_to(&a) == VolumeRelation::Disjoint
        );
    }

    #[test]
    fn proptest_contains_is_asymmetric(volume in arb_volume()) {
        // Shrink the volume by one unit along x where possible; the outer
        // volume contains the inner one, never the other way around.
        let min = volume.min();
        let max = volume.max();
        prop_assume!(min.x < max.x);

        let inner = CornerVolume::new(BlockPos::new(min.x + 1, min.y, min.z), max);
        prop_assert_eq!(volume.relation_to(&inner), VolumeRelation::Contains);
        prop_assert_eq!(inner.relation_to(&volume), VolumeRelation::Intersects);
    }

    #[test]
    fn proptest_contains_means_every_position_inside(outer in arb_small_volume(), inner in arb_small_volume()) {
        if outer.relation_to(&inner) == VolumeRelation::Contains {
            for pos in inner.iter() {
                prop_assert!(outer.contains(pos));
            }
        }
    }
}

// =============================================================================
// Iteration invariants
// =============================================================================

proptest! {
    #[test]
    fn proptest_iter_yields_capacity_distinct_inside(volume in arb_small_volume()) {
        let positions: Vec<_> = volume.iter().collect();
        prop_assert_eq!(positions.len() as u64, volume.capacity().unwrap());

        let distinct: HashSet<_> = positions.iter().copied().collect();
        prop_assert_eq!(distinct.len(), positions.len());
        prop_assert!(positions.iter().all(|&p| volume.contains(p)));
    }

    #[test]
    fn proptest_iter_order_x_then_z_then_y(volume in arb_small_volume()) {
        let min = volume.min();
        let max = volume.max();

        let mut expected = Vec::new();
        for y in min.y..=max.y {
            for z in min.z..=max.z {
                for x in min.x..=max.x {
                    expected.push(BlockPos::new(x, y, z));
                }
            }
        }

        let actual: Vec<_> = volume.iter().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn proptest_position_at_matches_iter(volume in arb_small_volume()) {
        for (index, pos) in volume.iter().enumerate() {
            prop_assert_eq!(volume.position_at(index as u64), Some(pos));
        }
        prop_assert_eq!(volume.position_at(volume.capacity().unwrap()), None);
    }
}

// =============================================================================
// Face-adjacency invariants
// =============================================================================

proptest! {
    #[test]
    fn proptest_touches_face_excludes_inside(volume in arb_volume(), pos in arb_pos()) {
        if volume.contains(pos) {
            prop_assert!(!volume.touches_face(pos));
        }
        if volume.touches_face(pos) {
            prop_assert!(!volume.contains(pos));
        }
    }

    #[test]
    fn proptest_face_neighbors_of_boundary_touch(volume in arb_small_volume()) {
        // Every outward orthogonal neighbor of a contained block either
        // stays inside or is face-adjacent.
        for pos in volume.iter() {
            for neighbor in pos.face_neighbors() {
                prop_assert!(volume.contains(neighbor) || volume.touches_face(neighbor));
            }
        }
    }

    #[test]
    fn proptest_volume_face_touch_is_symmetric(a in arb_volume(), b in arb_volume()) {
        prop_assert_eq!(a.touches_volume_face(&b), b.touches_volume_face(&a));
    }

    #[test]
    fn proptest_face_adjacent_volumes_are_disjoint(a in arb_volume(), b in arb_volume()) {
        if a.touches_volume_face(&b) {
            prop_assert_eq!(a.relation_to(&b), VolumeRelation::Disjoint);
        }
    }
}

// =============================================================================
// Position-set invariants
// =============================================================================

proptest! {
    #[test]
    fn proptest_set_capacity_is_distinct_count(members in arb_members()) {
        let distinct: HashSet<_> = members.iter().copied().collect();
        let set = PositionSet::from(members);
        prop_assert_eq!(set.capacity(), distinct.len() as u64);
    }

    #[test]
    fn proptest_set_extremes_bound_all_members(members in arb_members()) {
        let set = PositionSet::from(members.clone());
        let min = set.min().unwrap();
        let max = set.max().unwrap();
        for pos in members {
            prop_assert!(min.x <= pos.x && pos.x <= max.x);
            prop_assert!(min.y <= pos.y && pos.y <= max.y);
            prop_assert!(min.z <= pos.z && pos.z <= max.z);
        }
    }

    #[test]
    fn proptest_set_translate_round_trip(members in arb_members(), delta in arb_delta()) {
        let original = PositionSet::from(members);
        let mut moved = original.clone();
        moved.translate(delta).unwrap();
        moved.translate(-delta).unwrap();
        prop_assert_eq!(moved, original);
    }

    #[test]
    fn proptest_set_bounds_contain_every_member(members in arb_members()) {
        let set = PositionSet::from(members);
        let bounds = set.bounds().unwrap();
        for pos in set.iter() {
            prop_assert!(bounds.contains(pos));
        }
    }

    #[test]
    fn proptest_set_iter_matches_membership(members in arb_members()) {
        let set = PositionSet::from(members.clone());
        let yielded: HashSet<_> = set.iter().collect();
        let expected: HashSet<_> = members.into_iter().collect();
        prop_assert_eq!(yielded, expected);
    }
}
