// Host-side tests for the background gradient math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod palette {
    include!("../src/core/palette.rs");
}

use constants::{ANCHOR_END, ANCHOR_START, CLOCK_STEP_PER_FRAME};
use glam::Vec3;
use palette::*;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

fn assert_close(a: Vec3, b: Vec3, tol: f32) {
    assert!(
        (a - b).abs().max_element() <= tol,
        "expected {:?} ~= {:?} (tol {})",
        a,
        b,
        tol
    );
}

#[test]
fn blended_channels_stay_between_anchors() {
    let lo = ANCHOR_START.min(ANCHOR_END) - Vec3::splat(1e-3);
    let hi = ANCHOR_START.max(ANCHOR_END) + Vec3::splat(1e-3);

    let mut clock = AnimationClock::new();
    for _ in 0..20_000 {
        let c = blend_color(clock.advance());
        assert!(c.cmpge(lo).all() && c.cmple(hi).all(), "{:?} out of range", c);
    }

    // Far along the clock, where the argument to sin is large
    for t in [1.0e4, 3.3e5, 7.77e6, 1.0e9] {
        let c = blend_color(t);
        assert!(c.cmpge(lo).all() && c.cmple(hi).all(), "{:?} out of range at {}", c, t);
    }
}

#[test]
fn blend_is_periodic_in_two_pi() {
    assert_close(blend_color(0.0), blend_color(TAU), 1e-4);
    for t in [0.3, 1.7, 4.0, 123.456] {
        assert_close(blend_color(t), blend_color(t + TAU), 1e-3);
    }
}

#[test]
fn blend_hits_midpoint_and_extremes() {
    let mid = (ANCHOR_START + ANCHOR_END) * 0.5;
    assert_close(blend_color(0.0), mid, 1e-5);
    assert_close(blend_color(PI), mid, 1e-4);
    // sin = 1 reaches the end anchor, sin = -1 mirrors it around the midpoint
    assert_close(blend_color(FRAC_PI_2), ANCHOR_END, 1e-4);
    assert_close(blend_color(-FRAC_PI_2), ANCHOR_START, 1e-4);
}

#[test]
fn clock_advances_by_fixed_step() {
    let mut clock = AnimationClock::new();
    let mut prev = 0.0;
    for i in 1..=500 {
        let t = clock.advance();
        assert!(t > prev, "clock not increasing at frame {i}");
        assert!((t - prev - CLOCK_STEP_PER_FRAME).abs() < 1e-12);
        prev = t;
    }
    assert!((prev - 1.0).abs() < 1e-9);
}

#[test]
fn resize_is_idempotent_for_same_viewport() {
    let viewport = ViewportSize::new(1280, 800);
    let mut surface = ViewportSize::new(300, 150);

    let first = resize_target(surface, viewport);
    assert_eq!(first, Some(viewport));
    surface = first.unwrap();

    for _ in 0..3 {
        assert_eq!(resize_target(surface, viewport), None);
    }
    assert_eq!(surface, viewport);
}

#[test]
fn resize_follows_new_viewport() {
    let surface = ViewportSize::new(1280, 800);
    assert_eq!(
        resize_target(surface, ViewportSize::new(1280, 720)),
        Some(ViewportSize::new(1280, 720))
    );
    assert_eq!(
        resize_target(surface, ViewportSize::new(390, 800)),
        Some(ViewportSize::new(390, 800))
    );
}

#[test]
fn viewport_from_inner_truncates_and_clamps() {
    assert_eq!(
        ViewportSize::from_inner(1280.7, 799.2),
        ViewportSize::new(1280, 799)
    );
    assert_eq!(ViewportSize::from_inner(-5.0, f64::NAN), ViewportSize::new(0, 0));
}

#[test]
fn css_rgb_rounds_and_clamps() {
    assert_eq!(css_rgb(ANCHOR_START), "rgb(10, 25, 50)");
    assert_eq!(css_rgb(Vec3::new(35.4, 22.5, 64.6)), "rgb(35, 23, 65)");
    assert_eq!(css_rgb(Vec3::new(-3.0, 300.0, 255.0)), "rgb(0, 255, 255)");
}

#[test]
fn gradient_stops_start_fixed_end_blended() {
    let [(o0, c0), (o1, c1)] = gradient_stops(0.0);
    assert_eq!(o0, 0.0);
    assert_eq!(o1, 1.0);
    assert_eq!(c0, "rgb(10, 25, 50)");
    assert_eq!(c1, "rgb(35, 23, 65)");

    let [(_, start), (_, end)] = gradient_stops(FRAC_PI_2);
    assert_eq!(start, c0);
    assert_eq!(end, "rgb(60, 20, 80)");
}
