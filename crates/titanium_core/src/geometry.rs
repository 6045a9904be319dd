//! 2D geometry primitives

use std::fmt;

/// A 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Formats as an SVG coordinate pair: `x,y`, with whole values printed
/// without a fractional part.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_svg_pair() {
        assert_eq!(Point::new(10.0, 0.0).to_string(), "10,0");
        assert_eq!(Point::new(90.5, 50.0).to_string(), "90.5,50");
        assert_eq!(Point::ZERO.to_string(), "0,0");
    }
}
