//! Snapshot tests using the insta crate.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::*;
use slotgrid::{GridSettings, Slot};

fn morning_grid() -> TestGridBuilder {
    TestGridBuilder::new().with_days(2).with_settings(GridSettings {
        granularity_minutes: 30,
        start_hour: 8,
        end_hour: 10,
        ..GridSettings::default()
    })
}

#[test]
fn snapshot_published_map() {
    let (mut grid, recorder) = morning_grid().build();
    drag(&mut grid, day(0), &[2, 1], 0);

    insta::assert_json_snapshot!(recorder.latest().unwrap(), @r###"
    {
      "2025-03-03": [
        1,
        2
      ],
      "2025-03-04": []
    }
    "###);
}

#[test]
fn snapshot_slot_views_with_hover() {
    let (mut grid, _) = morning_grid().build();
    drag(&mut grid, day(0), &[1, 2], 0);
    grid.pointer_enter(day(0), Slot(3), t(100));

    let views = grid.column(day(0)).unwrap().slot_views();
    insta::assert_json_snapshot!(views, @r###"
    [
      {
        "slot": 0,
        "visual": "idle",
        "hovered": false,
        "hour_mark": true,
        "label": "8am"
      },
      {
        "slot": 1,
        "visual": "selected",
        "hovered": false,
        "hour_mark": false,
        "label": null
      },
      {
        "slot": 2,
        "visual": "selected",
        "hovered": false,
        "hour_mark": true,
        "label": "9am"
      },
      {
        "slot": 3,
        "visual": "idle",
        "hovered": true,
        "hour_mark": false,
        "label": "9:30am"
      }
    ]
    "###);
}

#[test]
fn snapshot_default_settings() {
    insta::assert_json_snapshot!(GridSettings::default(), @r###"
    {
      "granularity_minutes": 15,
      "start_hour": 0,
      "end_hour": 24,
      "hold_ms": 300,
      "move_px": 15.0,
      "ghost_ms": 500,
      "slot_height": 20.0,
      "column_width": 200.0,
      "log_level": "info"
    }
    "###);
}
