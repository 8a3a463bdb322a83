use crate::constants::{ANCHOR_END, ANCHOR_START, CLOCK_STEP_PER_FRAME};
use glam::Vec3;

/// Viewport size in CSS pixels, as reported by `innerWidth`/`innerHeight`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Build from the window's `f64` inner dimensions. Negative or NaN
    /// readings collapse to zero.
    pub fn from_inner(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0) as u32,
            height: height.max(0.0) as u32,
        }
    }
}

/// Size the drawing surface should take for `viewport`, or `None` when it
/// already matches. Writing a canvas dimension clears its bitmap even when
/// the value is unchanged, so callers skip the write on `None`.
#[inline]
pub fn resize_target(current: ViewportSize, viewport: ViewportSize) -> Option<ViewportSize> {
    if current == viewport {
        None
    } else {
        Some(viewport)
    }
}

/// Monotonic animation time, advanced once per rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationClock {
    time: f64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) -> f64 {
        self.time += CLOCK_STEP_PER_FRAME;
        self.time
    }
}

/// Far-end gradient color at `clock`.
///
/// Each channel swings sinusoidally between the two anchors:
/// `sin(t) * (end - start) / 2 + (end + start) / 2`.
pub fn blend_color(clock: f64) -> Vec3 {
    let swing = clock.sin() as f32;
    let mid = (ANCHOR_START + ANCHOR_END) * 0.5;
    let half_span = (ANCHOR_END - ANCHOR_START) * 0.5;
    mid + half_span * swing
}

/// CSS `rgb()` string for a color with 0..=255 channels.
pub fn css_rgb(color: Vec3) -> String {
    let c = color.round().clamp(Vec3::ZERO, Vec3::splat(255.0));
    format!("rgb({}, {}, {})", c.x as u8, c.y as u8, c.z as u8)
}

/// Color stops for the frame at `clock`: the fixed start anchor and the
/// blended far end.
pub fn gradient_stops(clock: f64) -> [(f32, String); 2] {
    [
        (0.0, css_rgb(ANCHOR_START)),
        (1.0, css_rgb(blend_color(clock))),
    ]
}
