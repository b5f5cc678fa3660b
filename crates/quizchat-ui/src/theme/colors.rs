//! Color definitions for the QuizChat page

use std::fmt;

/// RGBA color, 0-255 channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create opaque color from RGB hex (0xRRGGBB)
    pub const fn rgb(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            255,
        )
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// CSS notation: `#rrggbb` when opaque, `rgba(...)` otherwise
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "rgba({}, {}, {}, {:.2})",
                self.r,
                self.g,
                self.b,
                self.a as f32 / 255.0
            )
        }
    }
}

/// Theme color palette
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // === Backgrounds ===
    pub page_bg: Rgba,
    /// Card and panel background
    pub surface: Rgba,
    pub input_bg: Rgba,

    // === Brand ===
    /// Gradient start, also the welcome heading color
    pub primary: Rgba,
    /// Gradient end
    pub primary_deep: Rgba,

    // === Text ===
    pub text_primary: Rgba,
    pub text_secondary: Rgba,

    // === Answers ===
    pub incorrect: Rgba,
    pub correct: Rgba,

    // === Chat ===
    pub user_bubble: Rgba,
    pub bot_bubble: Rgba,

    pub border: Rgba,
}

impl ThemeColors {
    pub fn light() -> Self {
        Self {
            page_bg: Rgba::rgb(0xf5f7fb),
            surface: Rgba::rgb(0xffffff),
            input_bg: Rgba::rgb(0xf0f2f7),

            primary: Rgba::rgb(0x667eea),
            primary_deep: Rgba::rgb(0x764ba2),

            text_primary: Rgba::rgb(0x2d3748),
            text_secondary: Rgba::rgb(0x718096),

            incorrect: Rgba::rgb(0xe53e3e),
            correct: Rgba::rgb(0x38a169),

            user_bubble: Rgba::rgb(0x667eea),
            bot_bubble: Rgba::rgb(0xedf2f7),

            border: Rgba::rgb(0x2d3748).with_alpha(0x1f),
        }
    }
}
