//! Sheet parameters.
//!
//! All parameters are compiled-in. `SheetParams::default()` describes the
//! shipped sprite sheet; the builder setters exist so callers can render
//! other scales or write somewhere else.

use std::path::{Path, PathBuf};

use crate::error::SpecError;
use crate::state::{AnimationState, Subject};

/// Native frame edge length in pixels.
pub const BASE_FRAME: u32 = 32;

/// Upscale factor of the shipped sheet.
pub const DEFAULT_SCALE: u32 = 8;

/// Largest accepted upscale factor.
pub const MAX_SCALE: u32 = 64;

/// Where the shipped sheet is written, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "assets/tiny_spritesheet.png";

/// Parameters for one sprite sheet run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetParams {
    /// Nearest-neighbor upscale factor applied to every frame.
    pub scale: u32,
    /// Output PNG path.
    pub output: PathBuf,
}

impl Default for SheetParams {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl SheetParams {
    /// Sets the upscale factor.
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Edge length of one upscaled frame.
    pub fn frame_size(&self) -> u32 {
        BASE_FRAME * self.scale
    }

    /// Number of atlas columns (one per animation state).
    pub fn columns(&self) -> u32 {
        AnimationState::ALL.len() as u32
    }

    /// Number of atlas rows (one per form, plus the enemy).
    pub fn rows(&self) -> u32 {
        Subject::ROWS.len() as u32
    }

    /// Atlas `(width, height)` in pixels.
    pub fn atlas_dimensions(&self) -> (u32, u32) {
        let frame = self.frame_size();
        (frame * self.columns(), frame * self.rows())
    }

    /// Checks the parameters before any pixel is drawn.
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.scale == 0 || self.scale > MAX_SCALE {
            return Err(SpecError::InvalidScale {
                scale: self.scale,
                max: MAX_SCALE,
            });
        }
        if !has_png_extension(&self.output) {
            return Err(SpecError::OutputNotPng(
                self.output.display().to_string(),
            ));
        }
        Ok(())
    }
}

fn has_png_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_params() {
        let params = SheetParams::default();
        assert_eq!(params.scale, 8);
        assert_eq!(params.output, PathBuf::from("assets/tiny_spritesheet.png"));
        assert_eq!(params.frame_size(), 256);
        assert_eq!(params.atlas_dimensions(), (256 * 12, 256 * 5));
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_unit_scale_dimensions() {
        let params = SheetParams::default().with_scale(1);
        assert_eq!(params.frame_size(), 32);
        assert_eq!(params.atlas_dimensions(), (384, 160));
    }

    #[test]
    fn test_rejects_zero_scale() {
        let err = SheetParams::default().with_scale(0).validate().unwrap_err();
        assert_eq!(err, SpecError::InvalidScale { scale: 0, max: MAX_SCALE });
    }

    #[test]
    fn test_rejects_oversized_scale() {
        let err = SheetParams::default()
            .with_scale(MAX_SCALE + 1)
            .validate()
            .unwrap_err();
        assert!(matches!(err, SpecError::InvalidScale { .. }));
        assert!(SheetParams::default().with_scale(MAX_SCALE).validate().is_ok());
    }

    #[test]
    fn test_output_must_be_png() {
        let err = SheetParams::default()
            .with_output("out/sheet.jpg")
            .validate()
            .unwrap_err();
        assert_eq!(err, SpecError::OutputNotPng("out/sheet.jpg".to_string()));

        assert!(SheetParams::default().with_output("sheet").validate().is_err());
        assert!(SheetParams::default().with_output("SHEET.PNG").validate().is_ok());
    }
}
