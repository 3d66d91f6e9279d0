//! Body silhouette with the fuzzy outline.

use std::f64::consts::PI;

use blobsheet_spec::palette::OUTLINE;
use blobsheet_spec::{AnimationState, Palette};

use super::Pose;
use crate::draw::{ellipse, Rect};
use crate::raster::PixelBuffer;

/// Samples taken around the silhouette for the fuzz.
const OUTLINE_SAMPLES: u32 = 64;

/// Radius change per jitter unit.
const JITTER_STEP: f64 = 0.35;

/// Extra jitter on every third sample, which makes the fur spikier while
/// moving.
fn spike_boost(state: AnimationState) -> i32 {
    match state {
        AnimationState::Run1 | AnimationState::Run2 | AnimationState::Run3 | AnimationState::Run4 => 1,
        AnimationState::Jump | AnimationState::Fall => 2,
        AnimationState::Idle1
        | AnimationState::Idle2
        | AnimationState::Attack1
        | AnimationState::Attack2
        | AnimationState::Ability1
        | AnimationState::Ability2 => 0,
    }
}

/// Jitter for sample `i`, in units of `JITTER_STEP`.
fn jitter(i: u32, boost: i32) -> i32 {
    let base = ((i * 13) % 5) as i32 - 2;
    if i % 3 == 0 {
        base + boost
    } else {
        base
    }
}

/// Round half to even, so ties land on the same pixels every time.
fn snap(v: f64) -> i32 {
    v.round_ties_even() as i32
}

pub(super) fn draw_fuzzy_body(
    frame: &mut PixelBuffer,
    pose: &Pose,
    palette: &Palette,
    state: AnimationState,
) {
    let Pose { cx, cy, radius: r, .. } = *pose;
    let body = Rect::new(cx - r, cy - r, cx + r, cy + r);

    ellipse(frame, body, Some(palette.main), None);
    ellipse(
        frame,
        Rect::new(cx - r + 2, cy + 2, cx + r - 2, cy + r),
        Some(palette.dark),
        None,
    );
    ellipse(
        frame,
        Rect::new(cx - r + 3, cy - r + 2, cx - 1, cy - 1),
        Some(palette.light),
        None,
    );

    let boost = spike_boost(state);
    let (fx, fy) = (cx as f64, cy as f64);
    for i in 0..OUTLINE_SAMPLES {
        let angle = i as f64 * (2.0 * PI / OUTLINE_SAMPLES as f64);
        let (sin, cos) = angle.sin_cos();
        let reach = r as f64 + 1.0 + jitter(i, boost) as f64 * JITTER_STEP;

        frame.put(snap(fx + cos * reach), snap(fy + sin * reach), OUTLINE);
        if i % 2 == 0 {
            frame.put(
                snap(fx + cos * (reach - 1.0)),
                snap(fy + sin * (reach - 1.0)),
                palette.main,
            );
        }
    }

    ellipse(frame, body, None, Some(OUTLINE));
}
