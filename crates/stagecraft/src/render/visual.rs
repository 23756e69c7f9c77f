//! Value types shared by the drawing traits

/// RGBA color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (255 = opaque)
    pub a: u8,
}

impl Color {
    /// Opaque black
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque color from RGB channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from all four channels
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Position on the drawing surface in cell coordinates
///
/// `(0, 0)` is the top-left cell. Negative coordinates are legal and mean
/// "off surface"; backends clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellPos {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl CellPos {
    /// A position from column and row
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Drawable surface dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    /// Width in cells
    pub width: u32,
    /// Height in cells
    pub height: u32,
}

impl SurfaceSize {
    /// A size from width and height
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Visual content of a single surface cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileVisual {
    /// Glyph drawn in the cell
    pub glyph: char,
    /// Glyph color
    pub fg: Color,
    /// Cell background color
    pub bg: Color,
}

impl Default for TileVisual {
    fn default() -> Self {
        Self {
            glyph: ' ',
            fg: Color::WHITE,
            bg: Color::BLACK,
        }
    }
}

/// Style applied to a run of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    /// Text color
    pub fg: Color,
    /// Background color behind the text
    pub bg: Color,
    /// Whether the text is emphasized
    pub bold: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            fg: Color::WHITE,
            bg: Color::BLACK,
            bold: false,
        }
    }
}
