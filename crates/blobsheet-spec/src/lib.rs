//! Blobsheet Data Model
//!
//! This crate defines the fixed tables the sprite sheet generator draws from:
//! colors, per-form palettes, the closed set of animation states, the atlas
//! rows, and the sheet parameters with their validation.
//!
//! Everything here is a compiled-in constant. The backend turns these tables
//! into pixels; this crate never touches an image.
//!
//! # Example
//!
//! ```
//! use blobsheet_spec::{AnimationState, Form, SheetParams, Subject};
//!
//! let params = SheetParams::default().with_scale(1);
//! params.validate().unwrap();
//! assert_eq!(params.atlas_dimensions(), (384, 160));
//!
//! assert_eq!(AnimationState::ALL[1], AnimationState::Idle2);
//! assert_eq!(Subject::Form(Form::Red).row(), 2);
//! assert_eq!(Subject::Enemy.row(), 4);
//! ```
//!
//! # Modules
//!
//! - [`color`]: 8-bit straight-alpha RGBA color and compositing
//! - [`palette`]: three-tone palettes and shared inks
//! - [`state`]: forms, animation states and atlas rows
//! - [`params`]: sheet parameters and validation
//! - [`error`]: error type for parameter validation

pub mod color;
pub mod error;
pub mod palette;
pub mod params;
pub mod state;

// Re-export commonly used types at the crate root
pub use color::Rgba;
pub use error::SpecError;
pub use palette::Palette;
pub use params::{SheetParams, BASE_FRAME, DEFAULT_OUTPUT_PATH, DEFAULT_SCALE, MAX_SCALE};
pub use state::{AnimationState, Form, Subject};
