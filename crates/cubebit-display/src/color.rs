use smart_leds::RGB8;

/// 8-bit RGBA color. Alpha is only meaningful for object samples; the physical frame is opaque.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Background: an unlit voxel.
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// True when no channel is lit. Alpha is ignored.
    #[inline]
    pub fn is_background(self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }

    /// Subtract `step` from every color channel, saturating each at zero on its own.
    #[inline]
    pub fn fade(self, step: u8) -> Self {
        Self {
            r: self.r.saturating_sub(step),
            g: self.g.saturating_sub(step),
            b: self.b.saturating_sub(step),
            a: self.a,
        }
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(c: [u8; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl From<Rgba> for RGB8 {
    fn from(c: Rgba) -> Self {
        RGB8::new(c.r, c.g, c.b)
    }
}

impl From<RGB8> for Rgba {
    fn from(c: RGB8) -> Self {
        Rgba::opaque(c.r, c.g, c.b)
    }
}
