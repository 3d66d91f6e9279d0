//! Legs and arms.

use blobsheet_spec::palette::{FEET, OUTLINE};
use blobsheet_spec::AnimationState;

use super::Pose;
use crate::draw::{rounded_rectangle, Rect};
use crate::raster::PixelBuffer;

/// Corner radius of every limb.
const LIMB_RADIUS: i32 = 1;

/// Leg boxes relative to the body center, left leg first.
fn leg_offsets(state: AnimationState) -> [Rect; 2] {
    match state {
        AnimationState::Run1 => [Rect::new(-10, 7, -3, 11), Rect::new(2, 9, 9, 13)],
        AnimationState::Run2 => [Rect::new(-10, 9, -2, 13), Rect::new(3, 7, 9, 11)],
        AnimationState::Run3 => [Rect::new(-10, 7, -2, 11), Rect::new(3, 9, 9, 13)],
        AnimationState::Run4 => [Rect::new(-10, 9, -3, 13), Rect::new(2, 7, 9, 11)],
        AnimationState::Jump => [Rect::new(-6, 10, -1, 13), Rect::new(1, 10, 6, 13)],
        AnimationState::Fall => [Rect::new(-8, 11, -2, 14), Rect::new(2, 11, 8, 14)],
        AnimationState::Attack1
        | AnimationState::Attack2
        | AnimationState::Ability1
        | AnimationState::Ability2 => [Rect::new(-9, 8, -2, 12), Rect::new(1, 8, 9, 12)],
        AnimationState::Idle1 | AnimationState::Idle2 => {
            [Rect::new(-9, 8, -2, 12), Rect::new(2, 8, 9, 12)]
        }
    }
}

pub(super) fn draw_legs(frame: &mut PixelBuffer, pose: &Pose, state: AnimationState) {
    for leg in leg_offsets(state) {
        draw_limb(frame, leg.offset(pose.cx, pose.cy));
    }
}

/// One rounded limb in absolute frame coordinates.
pub(super) fn draw_limb(frame: &mut PixelBuffer, rect: Rect) {
    rounded_rectangle(frame, rect, LIMB_RADIUS, Some(FEET), Some(OUTLINE));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_cycle_poses_are_distinct() {
        let poses: Vec<[Rect; 2]> = AnimationState::ALL
            .iter()
            .filter(|s| {
                matches!(
                    s,
                    AnimationState::Run1
                        | AnimationState::Run2
                        | AnimationState::Run3
                        | AnimationState::Run4
                )
            })
            .map(|&s| leg_offsets(s))
            .collect();
        for (i, a) in poses.iter().enumerate() {
            for b in &poses[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_legs_stay_below_center() {
        for state in AnimationState::ALL {
            for leg in leg_offsets(state) {
                assert!(leg.y0 >= 7, "{} leg starts at {}", state, leg.y0);
                assert!(leg.x0 < leg.x1 && leg.y0 < leg.y1);
            }
        }
    }

    #[test]
    fn test_action_poses_share_neutral_stance() {
        let neutral = leg_offsets(AnimationState::Attack1);
        assert_eq!(leg_offsets(AnimationState::Attack2), neutral);
        assert_eq!(leg_offsets(AnimationState::Ability1), neutral);
        assert_eq!(leg_offsets(AnimationState::Ability2), neutral);
        assert_ne!(leg_offsets(AnimationState::Idle1), neutral);
    }
}
