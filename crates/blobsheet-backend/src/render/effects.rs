//! Attack and ability overlays.
//!
//! Attack frames extend an arm toward the facing side; only the yellow form
//! charges an energy ball in front of it. Ability frames are per form:
//! bubbles for blue, a flame box for red, a tethered orb for green. Yellow
//! has no ability overlay at all, not even the arm.

use blobsheet_spec::palette::OUTLINE;
use blobsheet_spec::{AnimationState, Form, Rgba};

use super::limbs::draw_limb;
use super::Pose;
use crate::draw::{ellipse, line, polygon, rectangle, Rect};
use crate::raster::PixelBuffer;

pub(crate) const ENERGY_FILL: Rgba = Rgba::new(255, 196, 100, 220);
pub(crate) const ENERGY_RIM: Rgba = Rgba::opaque(255, 130, 35);
pub(crate) const ENERGY_CORE: Rgba = Rgba::new(255, 235, 196, 210);

pub(crate) const BUBBLE_FILL: Rgba = Rgba::new(156, 233, 255, 170);
pub(crate) const BUBBLE_RIM: Rgba = Rgba::opaque(223, 250, 255);

pub(crate) const FLAME_BOX: Rgba = Rgba::opaque(124, 54, 40);
pub(crate) const FLAME_TIP: Rgba = Rgba::opaque(255, 234, 205);

pub(crate) const TETHER: Rgba = Rgba::opaque(210, 252, 255);
pub(crate) const ORB_FILL: Rgba = Rgba::opaque(117, 232, 237);
pub(crate) const ORB_RIM: Rgba = Rgba::opaque(230, 255, 255);

pub(super) fn draw_state_effects(
    frame: &mut PixelBuffer,
    pose: &Pose,
    form: Form,
    state: AnimationState,
) {
    match state {
        AnimationState::Attack1 | AnimationState::Attack2 => draw_attack(frame, pose, form, state),
        AnimationState::Ability1 | AnimationState::Ability2 => draw_ability(frame, pose, form),
        AnimationState::Idle1
        | AnimationState::Idle2
        | AnimationState::Run1
        | AnimationState::Run2
        | AnimationState::Run3
        | AnimationState::Run4
        | AnimationState::Jump
        | AnimationState::Fall => {}
    }
}

fn draw_attack(frame: &mut PixelBuffer, pose: &Pose, form: Form, state: AnimationState) {
    let (cx, cy) = (pose.cx, pose.cy);
    let arm_x = cx + pose.facing.pick(7, -9);
    draw_limb(frame, Rect::new(arm_x, cy + 1, arm_x + 4, cy + 5));

    if form != Form::Yellow {
        return;
    }

    let r = if state == AnimationState::Attack1 { 4 } else { 6 };
    let ox = cx + 12 * pose.facing.sign();
    ellipse(
        frame,
        Rect::new(ox - r, cy - r + 1, ox + r, cy + r + 1),
        Some(ENERGY_FILL),
        Some(ENERGY_RIM),
    );
    ellipse(
        frame,
        Rect::new(ox - r + 2, cy - r + 3, ox + r - 2, cy + r - 1),
        Some(ENERGY_CORE),
        None,
    );
}

fn draw_ability(frame: &mut PixelBuffer, pose: &Pose, form: Form) {
    let (cx, cy) = (pose.cx, pose.cy);
    let sign = pose.facing.sign();

    match form {
        Form::Blue => {
            let ox = cx + 9 * sign;
            draw_limb(frame, Rect::new(cx + 6, cy + 1, cx + 10, cy + 5));
            ellipse(
                frame,
                Rect::new(ox - 3, cy - 8, ox + 3, cy - 2),
                Some(BUBBLE_FILL),
                Some(BUBBLE_RIM),
            );
            ellipse(
                frame,
                Rect::new(ox + 3, cy - 11, ox + 7, cy - 7),
                Some(BUBBLE_FILL),
                Some(BUBBLE_RIM),
            );
        }
        Form::Red => {
            let ox = cx + 9 * sign;
            draw_limb(frame, Rect::new(cx + 6, cy + 1, cx + 10, cy + 5));
            rectangle(
                frame,
                Rect::new(ox - 2, cy - 1, ox + 3, cy + 5),
                Some(FLAME_BOX),
                Some(OUTLINE),
            );
            polygon(
                frame,
                &[(ox - 1, cy), (ox + 2, cy + 2), (ox - 1, cy + 4)],
                FLAME_TIP,
            );
        }
        Form::Green => {
            let ox = cx + 7 * sign;
            let tx = cx + 15 * sign;
            draw_limb(frame, Rect::new(cx + 5, cy, cx + 9, cy + 4));
            line(frame, (ox, cy - 2), (tx, cy - 9), TETHER, 2);
            ellipse(
                frame,
                Rect::new(tx - 2, cy - 11, tx + 3, cy - 6),
                Some(ORB_FILL),
                Some(ORB_RIM),
            );
        }
        Form::Yellow => {}
    }
}
