//! Compound field types with a fixed document shape.
//!
//! - [`Point`] is written as an object `{ "x": .., "y": .. }`.
//! - [`Color4f`] is written as an array `[r, g, b, a]`.

/// A 2D point.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An unpremultiplied RGBA color with float components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color4f {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color4f {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Components in document order.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Mutable components in document order.
    #[inline]
    pub fn components_mut(&mut self) -> [&mut f32; 4] {
        [&mut self.r, &mut self.g, &mut self.b, &mut self.a]
    }
}

impl Default for Color4f {
    #[inline]
    fn default() -> Self {
        Self::BLACK
    }
}
