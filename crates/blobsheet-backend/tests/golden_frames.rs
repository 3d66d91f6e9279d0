//! Golden regression tests for the rendered art.
//!
//! The body outline, leg boxes and jitter constants all feed directly into
//! the pixels, so these tests pin concrete output: the outline mask of a few
//! frames, and the BLAKE3 hash of the raw RGBA canvas of the scale-1 atlas.
//! Hashing raw pixels instead of PNG bytes keeps the check independent of
//! the deflate implementation.
//!
//! ## Updating
//!
//! ```bash
//! BLOBSHEET_UPDATE_GOLDEN_HASHES=1 cargo test -p blobsheet-backend --test golden_frames
//! ```
//!
//! Only do this after an intentional change to the art.

use std::fs;
use std::path::PathBuf;

use blobsheet_backend::{build_atlas, render_form, PixelBuffer};
use blobsheet_spec::palette::OUTLINE;
use blobsheet_spec::{AnimationState, Form, SheetParams};
use pretty_assertions::assert_eq;

/// Whether to update expected hashes instead of comparing.
fn should_update_hashes() -> bool {
    std::env::var("BLOBSHEET_UPDATE_GOLDEN_HASHES")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn golden_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("golden")
        .join(format!("{name}.hash"))
}

/// `#` where the frame holds the outline ink, `.` elsewhere.
fn outline_mask(frame: &PixelBuffer) -> Vec<String> {
    (0..frame.height)
        .map(|y| {
            (0..frame.width)
                .map(|x| if frame.get(x, y) == OUTLINE { '#' } else { '.' })
                .collect()
        })
        .collect()
}

fn assert_outline(form: Form, state: AnimationState, expected: &[&str; 32]) {
    let actual = outline_mask(&render_form(form, state));
    let expected: Vec<String> = expected.iter().map(|row| row.to_string()).collect();
    assert_eq!(actual, expected, "{}/{} outline changed", form, state);
}

// ============================================================================
// Outline masks
// ============================================================================

const YELLOW_IDLE1_OUTLINE: [&str; 32] = [
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................#...............",
    "..............##.#.#............",
    "...........###########..........",
    ".........#.##.......###.........",
    ".........##...........#.........",
    ".......###.............#.#......",
    ".......##...............##......",
    "......#.#..####...####..##......",
    ".......#..#....#.#....#..##.....",
    "......##..#....#.#....#..#......",
    ".....#.#..#....#.#....#..#.#....",
    "......##..#....#.#....#..#......",
    "......##...####...####...##.....",
    ".......#.................#......",
    "......##.................##.....",
    "......#.#...............##......",
    ".......##....#######....#.......",
    ".......#.#.............#.#......",
    ".........##...........#.........",
    "........######.....######.......",
    ".......#......#####......#......",
    ".......#......###.#......#......",
    ".......#......#...#......#......",
    "........######.....######.......",
    "................................",
    "................................",
];

const YELLOW_RUN1_OUTLINE: [&str; 32] = [
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "...............#................",
    ".............##.#.#.............",
    "..........############..........",
    "........####.......##...........",
    ".......###...........#..........",
    "......#.#.............###.......",
    "......##...............##.......",
    ".....#.#..####...####..##.......",
    "......#..#....#.#....#..##......",
    ".....##..#....#.#....#..#.......",
    "....#.#..#....#.#....#..#.#.....",
    ".....##..#....#.#....#..##......",
    ".....##...####...####...##......",
    "......#.................#.......",
    ".....##.................#.#.....",
    ".....#.#...............##.......",
    "......##....#######....#........",
    "......#.#.............#.#.......",
    "......######.........#..........",
    ".....#......#......##.##........",
    ".....#......############........",
    ".....#......#.####......#.......",
    "......######.#...#......#.......",
    ".................#......#.......",
    "..................######........",
    "................................",
];

const YELLOW_JUMP_OUTLINE: [&str; 32] = [
    "................................",
    "................................",
    "................................",
    "................................",
    "................#..#............",
    ".............###.#..............",
    "..........#############.........",
    ".........#.##.......##..........",
    "........###...........#.#.......",
    ".......#.#.............#.#......",
    ".......##...............##......",
    "......#.#..####...####..##......",
    ".......#..#....#.#....#..##.....",
    "......##..#....#.#....#..#......",
    ".....#.#..#....#.#....#..#.#....",
    "......##..#....#.#....#..##.....",
    "......##...####...####...##.....",
    "......##.................#......",
    "......##.................#.#....",
    "......#.#......###......##......",
    ".......##.....#...#.....#.......",
    ".......#.#....#...#....#.#......",
    "..........#...#...#...#.........",
    "........##.##..###..##.##.......",
    "............########.#..........",
    "...........###########..........",
    "..........#....#.#....#.........",
    "..........#....#.#....#.........",
    "...........####...####..........",
    "................................",
    "................................",
    "................................",
];

#[test]
fn test_idle_outline_is_pinned() {
    assert_outline(Form::Yellow, AnimationState::Idle1, &YELLOW_IDLE1_OUTLINE);
}

#[test]
fn test_run_outline_is_pinned() {
    assert_outline(Form::Yellow, AnimationState::Run1, &YELLOW_RUN1_OUTLINE);
}

#[test]
fn test_jump_outline_is_pinned() {
    assert_outline(Form::Yellow, AnimationState::Jump, &YELLOW_JUMP_OUTLINE);
}

#[test]
fn test_outline_depends_on_ink_not_palette() {
    for form in Form::ALL {
        assert_outline(form, AnimationState::Idle1, &YELLOW_IDLE1_OUTLINE);
    }
}

// ============================================================================
// Atlas hash
// ============================================================================

#[test]
fn test_unit_scale_atlas_hash() {
    let atlas = build_atlas(&SheetParams::default().with_scale(1)).unwrap();
    let actual = blake3::hash(&atlas.canvas().to_rgba8()).to_hex().to_string();
    let path = golden_path("atlas_scale1");

    if should_update_hashes() {
        fs::write(&path, format!("{}\n", actual)).unwrap();
        return;
    }

    let expected = fs::read_to_string(&path).unwrap();
    assert_eq!(
        actual,
        expected.trim(),
        "scale-1 atlas pixels changed; rerun with BLOBSHEET_UPDATE_GOLDEN_HASHES=1 if intended"
    );
}
