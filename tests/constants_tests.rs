// Host-side tests for page constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn anchor_colors_are_valid_rgb() {
    for c in [ANCHOR_START, ANCHOR_END] {
        for ch in c.to_array() {
            assert!((0.0..=255.0).contains(&ch), "channel {} out of range", ch);
            assert_eq!(ch.fract(), 0.0);
        }
    }
    assert_ne!(ANCHOR_START, ANCHOR_END);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn animation_step_is_slow() {
    assert!(CLOCK_STEP_PER_FRAME > 0.0);
    // At 60 fps a full color cycle should take close to a minute
    let frames_per_cycle = std::f64::consts::TAU / CLOCK_STEP_PER_FRAME;
    assert!(frames_per_cycle / 60.0 > 30.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn layout_thresholds_are_positive() {
    assert!(REFERENCE_BAND_PX > 0.0);
    assert!(DESKTOP_BREAKPOINT_PX > REFERENCE_BAND_PX);
}

#[test]
fn dom_ids_are_distinct() {
    let ids = [
        CANVAS_ID,
        NAV_LINKS_ID,
        MOBILE_MENU_ID,
        MENU_TOGGLE_ID,
        MENU_ICON_OPEN_ID,
        MENU_ICON_CLOSE_ID,
        BRAND_ID,
        FOOTER_YEAR_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
