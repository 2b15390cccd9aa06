//! Script files replayed end to end.

use crate::helpers::*;
use slotgrid::replay::{self, Script};
use slotgrid::GridSettings;
use std::fs;
use tempfile::tempdir;

const SCRIPT: &str = r#"{
    "days": ["2025-03-03", "2025-03-04"],
    "steps": [
        { "at": 0,    "event": "pointer_down",  "day": "2025-03-03", "slot": 36 },
        { "at": 20,   "event": "pointer_enter", "day": "2025-03-03", "slot": 39 },
        { "at": 40,   "event": "pointer_up" },
        { "at": 1000, "event": "touch_start",
          "touches": [{ "id": 4, "x": 300.0, "y": 250.0 }] },
        { "at": 1080, "event": "touch_end",
          "changed": [{ "id": 4, "x": 300.0, "y": 250.0 }] },
        { "at": 1100, "event": "pointer_down",  "day": "2025-03-04", "slot": 12 },
        { "at": 1120, "event": "pointer_up" }
    ]
}"#;

#[test]
fn test_replay_script_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("script.json");
    fs::write(&path, SCRIPT).unwrap();

    let script = Script::load(&path).unwrap();
    let report = replay::run(&script, GridSettings::default()).unwrap();

    // Tap on day 2 slot 12, then its ghost click is swallowed
    assert_eq!(report.commits, 2);
    assert_eq!(report.selections[&day(0)], vec![36, 37, 38, 39]);
    assert_eq!(report.selections[&day(1)], vec![12]);
}

#[test]
fn test_replay_unknown_event_fails_to_parse() {
    let result: Result<Script, _> = serde_json::from_str(
        r#"{ "days": [], "steps": [{ "at": 0, "event": "double_click" }] }"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_missing_script_is_io_error() {
    let dir = tempdir().unwrap();
    let err = Script::load(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, slotgrid::GridError::Io(_)));
}
