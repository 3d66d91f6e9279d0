//! Eyes and mouth.

use blobsheet_spec::palette::{EYE_PUPIL, EYE_WHITE, MOUTH, OUTLINE};
use blobsheet_spec::AnimationState;

use super::Pose;
use crate::draw::{arc, ellipse, line, Rect};
use crate::raster::PixelBuffer;

pub(super) fn draw_eyes_and_mouth(frame: &mut PixelBuffer, pose: &Pose, state: AnimationState) {
    let (cx, cy) = (pose.cx, pose.cy);
    let eye_y = cy - 2;

    if state.blinks() {
        line(frame, (cx - 5, eye_y + 2), (cx - 2, eye_y + 2), EYE_WHITE, 1);
        line(frame, (cx + 2, eye_y + 2), (cx + 5, eye_y + 2), EYE_WHITE, 1);
    } else {
        ellipse(
            frame,
            Rect::new(cx - 6, eye_y - 2, cx - 1, eye_y + 3),
            Some(EYE_WHITE),
            Some(OUTLINE),
        );
        ellipse(
            frame,
            Rect::new(cx + 1, eye_y - 2, cx + 6, eye_y + 3),
            Some(EYE_WHITE),
            Some(OUTLINE),
        );

        let px = pose.facing.sign();
        let py = if state.squints() { 1 } else { 0 };
        frame.put(cx - 3 + px, eye_y + py, EYE_PUPIL);
        frame.put(cx + 3 + px, eye_y + py, EYE_PUPIL);
    }

    let mouth_y = cy + 5;
    match state {
        AnimationState::Jump => ellipse(
            frame,
            Rect::new(cx - 2, mouth_y - 1, cx + 2, mouth_y + 3),
            Some(MOUTH),
            Some(OUTLINE),
        ),
        AnimationState::Fall => arc(
            frame,
            Rect::new(cx - 4, mouth_y - 2, cx + 4, mouth_y + 4),
            20.0,
            160.0,
            OUTLINE,
        ),
        AnimationState::Attack1 | AnimationState::Attack2 => {
            line(frame, (cx - 2, mouth_y), (cx + 4, mouth_y + 1), OUTLINE, 1)
        }
        AnimationState::Idle1
        | AnimationState::Idle2
        | AnimationState::Run1
        | AnimationState::Run2
        | AnimationState::Run3
        | AnimationState::Run4
        | AnimationState::Ability1
        | AnimationState::Ability2 => line(frame, (cx - 3, mouth_y), (cx + 3, mouth_y), OUTLINE, 1),
    }
}
