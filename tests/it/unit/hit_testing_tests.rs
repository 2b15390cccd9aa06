//! Screen coordinate to slot resolution.

use crate::helpers::*;
use slotgrid::hit_test::{GridGeometry, HitTest, SlotHitIndex};
use slotgrid::Slot;

#[test]
fn test_every_slot_center_resolves_to_itself() {
    let days = [day(0), day(1), day(2)];
    let geometry = GridGeometry::default();
    let index = SlotHitIndex::build(geometry, &days, 96);

    for (column, key) in days.iter().enumerate() {
        for slot in 0..96 {
            let (x, y) = geometry.slot_center(column, Slot(slot));
            let hit = index.slot_at(x, y).unwrap();
            assert_eq!((hit.day, hit.slot), (*key, Slot(slot)));
        }
    }
}

#[test]
fn test_outside_grid_misses() {
    let index = SlotHitIndex::build(GridGeometry::default(), &[day(0)], 96);
    assert!(index.slot_at(-1.0, 10.0).is_none());
    assert!(index.slot_at(250.0, 10.0).is_none());
    assert!(index.slot_at(10.0, 96.0 * 20.0).is_none());
}

#[test]
fn test_origin_offset() {
    let geometry = GridGeometry {
        origin: (60.0, 100.0),
        ..GridGeometry::default()
    };
    let index = SlotHitIndex::build(geometry, &[day(0)], 96);
    assert!(index.slot_at(30.0, 110.0).is_none());
    assert_eq!(index.slot_at(61.0, 141.0).unwrap().slot, Slot(2));
}

#[test]
fn test_resize_rebuilds_cells() {
    let (mut grid, _) = TestGridBuilder::new().with_days(2).build();
    let geometry = GridGeometry {
        column_width: 100.0,
        slot_height: 10.0,
        ..*grid.geometry()
    };
    grid.set_geometry(geometry);

    let hit = grid.hit_test(150.0, 35.0).unwrap();
    assert_eq!((hit.day, hit.slot), (day(1), Slot(3)));
}
