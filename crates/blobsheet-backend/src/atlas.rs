//! Sprite sheet atlas: a fixed grid of frames, one row per subject and one
//! column per animation state.
//!
//! Frames are rendered at native resolution, upscaled, then composited onto
//! the canvas with straight alpha so transparent frame pixels never wipe
//! out what the canvas already holds. The finished atlas is encoded as a
//! deterministic PNG.

use std::path::{Path, PathBuf};

use blobsheet_spec::{AnimationState, SheetParams, SpecError, Subject, BASE_FRAME};
use thiserror::Error;

use crate::png::{write_rgba_to_vec_with_hash, PngConfig, PngError};
use crate::raster::PixelBuffer;
use crate::render::render_frame;
use crate::upscale::upscale;

/// Errors that can occur while building or writing a sprite sheet.
#[derive(Debug, Error)]
pub enum SheetError {
    /// Parameters failed validation.
    #[error("Invalid sheet parameters: {0}")]
    Spec(#[from] SpecError),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    Png(#[from] PngError),

    /// Frame does not match the atlas cell size.
    #[error("Frame {width}x{height} does not fit a {frame_size}x{frame_size} atlas cell")]
    FrameSizeMismatch {
        width: u32,
        height: u32,
        frame_size: u32,
    },

    /// Cell lies outside the grid.
    #[error("Cell (row {row}, column {column}) is outside the {rows}x{columns} grid")]
    CellOutOfRange {
        row: u32,
        column: u32,
        rows: u32,
        columns: u32,
    },

    /// Output could not be written.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Grid geometry of the atlas.
///
/// The cell size always follows from the scale, so frames drawn through
/// [`Atlas::draw_row`] fit their cells by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasLayout {
    /// Upscale factor applied to every native frame.
    pub scale: u32,
    /// Number of state columns.
    pub columns: u32,
    /// Number of subject rows.
    pub rows: u32,
}

impl AtlasLayout {
    /// Layout for the given parameters.
    pub fn from_params(params: &SheetParams) -> Self {
        Self {
            scale: params.scale,
            columns: params.columns(),
            rows: params.rows(),
        }
    }

    /// Edge length of one upscaled frame.
    pub fn frame_size(&self) -> u32 {
        BASE_FRAME * self.scale
    }

    /// Canvas `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        let frame = self.frame_size();
        (frame * self.columns, frame * self.rows)
    }

    /// Top-left pixel of the cell at `(row, column)`.
    pub fn cell_origin(&self, row: u32, column: u32) -> (u32, u32) {
        let frame = self.frame_size();
        (column * frame, row * frame)
    }
}

/// PNG bytes of a finished atlas.
#[derive(Debug, Clone)]
pub struct EncodedSheet {
    /// PNG-encoded atlas image data.
    pub png_data: Vec<u8>,
    /// BLAKE3 hash of the PNG data.
    pub hash: String,
    /// Atlas width in pixels.
    pub width: u32,
    /// Atlas height in pixels.
    pub height: u32,
}

/// The canvas being assembled, together with its grid.
#[derive(Debug, Clone)]
pub struct Atlas {
    layout: AtlasLayout,
    canvas: PixelBuffer,
}

impl Atlas {
    /// Empty, fully transparent atlas for validated parameters.
    pub fn for_params(params: &SheetParams) -> Result<Self, SheetError> {
        params.validate()?;
        Ok(Self::with_layout(AtlasLayout::from_params(params)))
    }

    /// Empty atlas with an explicit layout.
    pub fn with_layout(layout: AtlasLayout) -> Self {
        let (width, height) = layout.dimensions();
        Self {
            layout,
            canvas: PixelBuffer::transparent(width, height),
        }
    }

    pub fn layout(&self) -> &AtlasLayout {
        &self.layout
    }

    pub fn canvas(&self) -> &PixelBuffer {
        &self.canvas
    }

    /// Give up the grid and keep the pixels.
    pub fn into_canvas(self) -> PixelBuffer {
        self.canvas
    }

    /// Alpha-composite `frame` over the cell at `(row, column)`.
    pub fn composite(&mut self, row: u32, column: u32, frame: &PixelBuffer) -> Result<(), SheetError> {
        let layout = self.layout;
        if row >= layout.rows || column >= layout.columns {
            return Err(SheetError::CellOutOfRange {
                row,
                column,
                rows: layout.rows,
                columns: layout.columns,
            });
        }
        let frame_size = layout.frame_size();
        if frame.width != frame_size || frame.height != frame_size {
            return Err(SheetError::FrameSizeMismatch {
                width: frame.width,
                height: frame.height,
                frame_size,
            });
        }

        let (ox, oy) = layout.cell_origin(row, column);
        for (x, y, src) in frame.pixels() {
            let (ax, ay) = (ox + x, oy + y);
            let dst = self.canvas.get(ax, ay);
            self.canvas.set(ax, ay, src.over(dst));
        }
        Ok(())
    }

    /// Render, upscale and composite every state of one subject into its row.
    pub fn draw_row(&mut self, subject: Subject) -> Result<(), SheetError> {
        let row = subject.row() as u32;
        let scale = self.layout.scale;
        for state in AnimationState::ALL {
            let frame = upscale(render_frame(subject, state), scale);
            self.composite(row, state.index() as u32, &frame)?;
        }
        Ok(())
    }

    /// Encode the canvas as PNG.
    pub fn encode(&self, config: &PngConfig) -> Result<EncodedSheet, SheetError> {
        let (png_data, hash) = write_rgba_to_vec_with_hash(&self.canvas, config)?;
        Ok(EncodedSheet {
            png_data,
            hash,
            width: self.canvas.width,
            height: self.canvas.height,
        })
    }

    /// Encode and write the atlas to `path`, replacing any existing file.
    /// Missing parent directories are created.
    pub fn save(self, path: &Path, config: &PngConfig) -> Result<EncodedSheet, SheetError> {
        let encoded = self.encode(config)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| SheetError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, &encoded.png_data).map_err(|source| SheetError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(encoded)
    }
}

/// Build the complete atlas: every form row in declared order, then the
/// enemy row.
pub fn build_atlas(params: &SheetParams) -> Result<Atlas, SheetError> {
    let mut atlas = Atlas::for_params(params)?;
    for subject in Subject::ROWS {
        atlas.draw_row(subject)?;
    }
    Ok(atlas)
}

/// Build the atlas described by `params` and write it to `params.output`.
pub fn generate_sprite_sheet(params: &SheetParams) -> Result<EncodedSheet, SheetError> {
    build_atlas(params)?.save(&params.output, &PngConfig::default())
}
