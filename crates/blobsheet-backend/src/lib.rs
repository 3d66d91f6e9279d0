//! Blobsheet Rendering Backend
//!
//! This crate draws the blob sprite sheet: a 32×32 frame for every
//! (subject, animation state) pair, magnified with nearest-neighbor
//! sampling and composited into one RGBA atlas. Output is byte-identical
//! from run to run.
//!
//! # Pipeline
//!
//! - **Renderer**: body silhouette with a jittered outline, eyes and mouth,
//!   legs, attack and ability overlays
//! - **Upscaler**: integer nearest-neighbor magnification
//! - **Compositor**: straight-alpha placement on a fixed grid
//! - **Deterministic PNG**: fixed compression settings, BLAKE3 hash
//!
//! # Example
//!
//! ```no_run
//! use blobsheet_backend::generate_sprite_sheet;
//! use blobsheet_spec::SheetParams;
//!
//! let sheet = generate_sprite_sheet(&SheetParams::default()).unwrap();
//! println!("{}x{} {}", sheet.width, sheet.height, sheet.hash);
//! ```

pub mod atlas;
pub mod draw;
pub mod png;
pub mod raster;
pub mod render;
pub mod upscale;

// Re-export main types for convenience
pub use atlas::{build_atlas, generate_sprite_sheet, Atlas, AtlasLayout, EncodedSheet, SheetError};
pub use png::{PngConfig, PngError};
pub use raster::PixelBuffer;
pub use render::{render_form, render_frame, render_frame_facing, Facing};
pub use upscale::upscale;
