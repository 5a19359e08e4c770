//! Snapshot tests using the insta crate.
//!
//! Inline snapshots pin the JSON shape of settings files and the values a
//! web or native shell reads from the carousel.

use pathway_carousel::layout::indicators;
use pathway_carousel::settings::CarouselSettings;
use pathway_carousel::types::{Direction, PlaybackMode};

#[test]
fn snapshot_default_settings() {
    insta::assert_json_snapshot!(CarouselSettings::default(), @r#"
    {
      "autoplay": true,
      "autoplay_interval_ms": 5000,
      "transition_ms": 500,
      "keyboard_navigation": true
    }
    "#);
}

#[test]
fn snapshot_indicators() {
    insta::assert_json_snapshot!(indicators(Some(1), 3), @r#"
    [
      {
        "index": 0,
        "active": false
      },
      {
        "index": 1,
        "active": true
      },
      {
        "index": 2,
        "active": false
      }
    ]
    "#);
}

#[test]
fn snapshot_enums() {
    insta::assert_json_snapshot!((Direction::Backward, PlaybackMode::Manual), @r#"
    [
      "backward",
      "manual"
    ]
    "#);
}
