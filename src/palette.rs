//! Doom fire color ramp

/// A single RGBA color
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

    /// Pack as RGBA8888 (red in the most significant byte)
    pub fn packed(self) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, self.a])
    }
}

/// Number of colors in the classic ramp
pub const DOOM_COLORS: usize = 37;

const fn c(r: u8, g: u8, b: u8, a: u8) -> Rgba {
    Rgba::new(r, g, b, a)
}

/// The classic Doom fire ramp, coolest first
pub const DOOM_RAMP: [Rgba; DOOM_COLORS] = [
    c(7, 7, 7, 0),        c(31, 7, 7, 255),     c(47, 15, 7, 255),    c(71, 15, 7, 255),
    c(87, 23, 7, 255),    c(103, 31, 7, 255),   c(119, 31, 7, 255),   c(143, 39, 7, 255),
    c(159, 47, 7, 255),   c(175, 63, 7, 255),   c(191, 71, 7, 255),   c(199, 71, 7, 255),
    c(223, 79, 7, 255),   c(223, 87, 7, 255),   c(223, 87, 7, 255),   c(215, 95, 7, 255),
    c(215, 95, 7, 255),   c(215, 103, 15, 255), c(207, 111, 15, 255), c(207, 119, 15, 255),
    c(207, 127, 15, 255), c(207, 135, 23, 255), c(199, 135, 23, 255), c(199, 143, 23, 255),
    c(199, 151, 31, 255), c(191, 159, 31, 255), c(191, 159, 31, 255), c(191, 167, 39, 255),
    c(191, 167, 39, 255), c(191, 175, 47, 255), c(183, 175, 47, 255), c(183, 183, 47, 255),
    c(183, 183, 55, 255), c(207, 207, 111, 255), c(223, 223, 159, 255), c(239, 239, 199, 255),
    c(255, 255, 255, 255),
];

/// Ordered colors indexed by heat level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgba>,
}

impl Palette {
    pub fn new(colors: Vec<Rgba>) -> Self {
        Self { colors }
    }

    pub fn doom() -> Self {
        Self::new(DOOM_RAMP.to_vec())
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Hottest heat level this palette can show
    pub fn max_heat(&self) -> u8 {
        self.colors.len().saturating_sub(1).min(u8::MAX as usize) as u8
    }

    /// Color for a heat level; out-of-range levels map to the hottest color
    pub fn color(&self, heat: u8) -> Rgba {
        let idx = (heat as usize).min(self.colors.len() - 1);
        self.colors[idx]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::doom()
    }
}
