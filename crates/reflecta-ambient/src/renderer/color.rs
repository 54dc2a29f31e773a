use std::fmt;

/// sRGB colour with 8-bit channels and a float alpha, the shape canvas
/// fill and stroke styles take.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with the given alpha, clamped to [0, 1].
    pub fn with_alpha(self, a: f32) -> Self {
        let a = if a.is_nan() { 0.0 } else { a.clamp(0.0, 1.0) };
        Self { a, ..self }
    }

    /// CSS `rgba(...)` string for canvas styles.
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0.0);
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}
