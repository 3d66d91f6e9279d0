//! Three-tone palettes and the inks shared by every subject.

use crate::color::Rgba;

/// Main, shadow and highlight tones for one subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Body fill.
    pub main: Rgba,
    /// Lower shadow.
    pub dark: Rgba,
    /// Upper-left highlight.
    pub light: Rgba,
}

impl Palette {
    const fn new(main: [u8; 3], dark: [u8; 3], light: [u8; 3]) -> Self {
        Self {
            main: Rgba::opaque(main[0], main[1], main[2]),
            dark: Rgba::opaque(dark[0], dark[1], dark[2]),
            light: Rgba::opaque(light[0], light[1], light[2]),
        }
    }
}

pub const YELLOW: Palette = Palette::new([245, 154, 32], [214, 118, 18], [255, 196, 90]);
pub const BLUE: Palette = Palette::new([62, 151, 231], [38, 105, 176], [146, 210, 255]);
pub const RED: Palette = Palette::new([226, 88, 78], [174, 54, 48], [250, 166, 138]);
pub const GREEN: Palette = Palette::new([94, 188, 96], [57, 140, 62], [174, 229, 161]);
pub const ENEMY: Palette = Palette::new([109, 206, 92], [64, 142, 58], [186, 238, 166]);

/// Silhouette edges, eye sockets and limb borders.
pub const OUTLINE: Rgba = Rgba::opaque(28, 21, 20);
/// Eye sockets and closed-eye lines.
pub const EYE_WHITE: Rgba = Rgba::opaque(245, 245, 245);
pub const EYE_PUPIL: Rgba = Rgba::opaque(30, 30, 35);
/// Legs and arms.
pub const FEET: Rgba = Rgba::opaque(232, 170, 88);
/// Open mouth interior.
pub const MOUTH: Rgba = Rgba::opaque(52, 28, 22);
