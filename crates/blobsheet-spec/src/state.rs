//! Forms, animation states and atlas rows.
//!
//! Declaration order is significant: `Form::ALL` and `Subject::ROWS` give the
//! atlas row order, `AnimationState::ALL` gives the column order.

use crate::palette::{self, Palette};

/// Playable color variant of the blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Form {
    Yellow,
    Blue,
    Red,
    Green,
}

impl Form {
    /// All forms in atlas row order.
    pub const ALL: [Form; 4] = [Form::Yellow, Form::Blue, Form::Red, Form::Green];

    /// Returns the form name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Form::Yellow => "yellow",
            Form::Blue => "blue",
            Form::Red => "red",
            Form::Green => "green",
        }
    }

    /// Returns the three-tone palette for this form.
    pub fn palette(&self) -> Palette {
        match self {
            Form::Yellow => palette::YELLOW,
            Form::Blue => palette::BLUE,
            Form::Red => palette::RED,
            Form::Green => palette::GREEN,
        }
    }
}

impl std::fmt::Display for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One of the twelve animation poses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationState {
    Idle1,
    /// Blink frame.
    Idle2,
    Run1,
    Run2,
    Run3,
    Run4,
    Jump,
    Fall,
    Attack1,
    Attack2,
    Ability1,
    Ability2,
}

impl AnimationState {
    /// All states in atlas column order.
    pub const ALL: [AnimationState; 12] = [
        AnimationState::Idle1,
        AnimationState::Idle2,
        AnimationState::Run1,
        AnimationState::Run2,
        AnimationState::Run3,
        AnimationState::Run4,
        AnimationState::Jump,
        AnimationState::Fall,
        AnimationState::Attack1,
        AnimationState::Attack2,
        AnimationState::Ability1,
        AnimationState::Ability2,
    ];

    /// Column index in the atlas.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Returns the state name.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationState::Idle1 => "idle1",
            AnimationState::Idle2 => "idle2",
            AnimationState::Run1 => "run1",
            AnimationState::Run2 => "run2",
            AnimationState::Run3 => "run3",
            AnimationState::Run4 => "run4",
            AnimationState::Jump => "jump",
            AnimationState::Fall => "fall",
            AnimationState::Attack1 => "attack1",
            AnimationState::Attack2 => "attack2",
            AnimationState::Ability1 => "ability1",
            AnimationState::Ability2 => "ability2",
        }
    }

    /// Eyes are drawn closed.
    pub fn blinks(&self) -> bool {
        *self == AnimationState::Idle2
    }

    /// Pupils drop by one pixel.
    pub fn squints(&self) -> bool {
        matches!(self, AnimationState::Fall | AnimationState::Attack2)
    }
}

impl std::fmt::Display for AnimationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What occupies an atlas row: one of the forms, or the enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Form(Form),
    Enemy,
}

impl Subject {
    /// Atlas rows, top to bottom. The enemy row always comes last.
    pub const ROWS: [Subject; 5] = [
        Subject::Form(Form::Yellow),
        Subject::Form(Form::Blue),
        Subject::Form(Form::Red),
        Subject::Form(Form::Green),
        Subject::Enemy,
    ];

    /// Row index in the atlas.
    pub fn row(&self) -> usize {
        match self {
            Subject::Form(form) => *form as usize,
            Subject::Enemy => Form::ALL.len(),
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Subject::Form(form) => form.palette(),
            Subject::Enemy => palette::ENEMY,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Form(form) => form.as_str(),
            Subject::Enemy => "enemy",
        }
    }
}

impl From<Form> for Subject {
    fn from(form: Form) -> Self {
        Subject::Form(form)
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_state_order_matches_names() {
        let names: Vec<&str> = AnimationState::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "idle1", "idle2", "run1", "run2", "run3", "run4", "jump", "fall", "attack1",
                "attack2", "ability1", "ability2",
            ]
        );
        for (i, state) in AnimationState::ALL.iter().enumerate() {
            assert_eq!(state.index(), i);
        }
    }

    #[test]
    fn test_face_predicates() {
        assert!(AnimationState::Idle2.blinks());
        assert_eq!(AnimationState::ALL.iter().filter(|s| s.blinks()).count(), 1);

        let squinting: Vec<AnimationState> = AnimationState::ALL
            .into_iter()
            .filter(|s| s.squints())
            .collect();
        assert_eq!(squinting, vec![AnimationState::Fall, AnimationState::Attack2]);
    }

    #[test]
    fn test_rows() {
        for (i, subject) in Subject::ROWS.iter().enumerate() {
            assert_eq!(subject.row(), i);
        }
        assert_eq!(Subject::Enemy.row(), Form::ALL.len());
        assert_eq!(Subject::from(Form::Blue).as_str(), "blue");
        assert_eq!(Subject::Enemy.palette(), palette::ENEMY);
    }

    #[test]
    fn test_every_form_has_distinct_palette() {
        for (i, a) in Form::ALL.iter().enumerate() {
            for b in &Form::ALL[i + 1..] {
                assert_ne!(a.palette(), b.palette(), "{} and {} share a palette", a, b);
            }
            assert_ne!(a.palette(), palette::ENEMY);
        }
    }
}
