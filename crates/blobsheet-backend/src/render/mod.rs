//! Frame renderer.
//!
//! Draws one 32×32 frame of the blob for a (subject, state) pair. A frame is
//! a pure function of its inputs: palette, state and the fixed geometry
//! below. Drawing happens in four passes, body first, then legs, then the
//! face, then the state effects on top.

mod body;
mod effects;
mod face;
mod limbs;

use blobsheet_spec::{AnimationState, Form, Subject, BASE_FRAME};

use crate::raster::PixelBuffer;

/// Body center before the per-state offset.
const ORIGIN: (i32, i32) = (16, 17);

/// Body radius in pixels.
const BODY_RADIUS: i32 = 9;

/// Horizontal orientation used to mirror pupils, arms and effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// `+1` for right, `-1` for left.
    pub fn sign(&self) -> i32 {
        match self {
            Facing::Right => 1,
            Facing::Left => -1,
        }
    }

    /// Pick the value matching this orientation.
    fn pick(&self, right: i32, left: i32) -> i32 {
        match self {
            Facing::Right => right,
            Facing::Left => left,
        }
    }
}

/// Where and how the blob is drawn in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Pose {
    pub cx: i32,
    pub cy: i32,
    pub radius: i32,
    pub facing: Facing,
}

impl Pose {
    fn new(subject: Subject, state: AnimationState, facing: Facing) -> Self {
        let (dx, dy) = center_offset(subject, state);
        Self {
            cx: ORIGIN.0 + dx,
            cy: ORIGIN.1 + dy,
            radius: BODY_RADIUS,
            facing,
        }
    }
}

/// Bounce applied to the body center.
///
/// The enemy only bounces through the run cycle; its jump and fall frames
/// stay on the baseline.
fn center_offset(subject: Subject, state: AnimationState) -> (i32, i32) {
    match (subject, state) {
        (_, AnimationState::Run1) => (-1, 0),
        (_, AnimationState::Run2) => (1, 1),
        (_, AnimationState::Run3) => (1, 0),
        (_, AnimationState::Run4) => (-1, -1),
        (Subject::Form(_), AnimationState::Jump) => (0, -2),
        (Subject::Form(_), AnimationState::Fall) => (0, 1),
        (Subject::Enemy, AnimationState::Jump | AnimationState::Fall) => (0, 0),
        (
            _,
            AnimationState::Idle1
            | AnimationState::Idle2
            | AnimationState::Attack1
            | AnimationState::Attack2
            | AnimationState::Ability1
            | AnimationState::Ability2,
        ) => (0, 0),
    }
}

/// Render one native-resolution frame facing right.
pub fn render_frame(subject: Subject, state: AnimationState) -> PixelBuffer {
    render_frame_facing(subject, state, Facing::Right)
}

/// Render one native-resolution frame with an explicit facing.
pub fn render_frame_facing(
    subject: Subject,
    state: AnimationState,
    facing: Facing,
) -> PixelBuffer {
    let mut frame = PixelBuffer::transparent(BASE_FRAME, BASE_FRAME);
    let pose = Pose::new(subject, state, facing);
    let palette = subject.palette();

    body::draw_fuzzy_body(&mut frame, &pose, &palette, state);
    limbs::draw_legs(&mut frame, &pose, state);
    face::draw_eyes_and_mouth(&mut frame, &pose, state);

    match subject {
        Subject::Form(form) => effects::draw_state_effects(&mut frame, &pose, form, state),
        Subject::Enemy => {}
    }

    frame
}

/// Convenience for a form row.
pub fn render_form(form: Form, state: AnimationState) -> PixelBuffer {
    render_frame(Subject::Form(form), state)
}
