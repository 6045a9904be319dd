//! Chamfer polygon geometry
//!
//! The Titanium silhouette cuts the top-left and bottom-right corners of
//! a rectangle at 45 degrees instead of rounding them. These helpers
//! produce that hexagonal outline for a given rectangle and chamfer size,
//! in the rectangle's own coordinate space (origin top-left, y down).

use titanium_core::Point;

/// Vertices of a chamfered rectangle, clockwise from the top edge
///
/// The top-left and bottom-right corners are cut by `chamfer` logical
/// pixels along each adjacent edge. Callers keep `chamfer` at or below
/// half the smaller rectangle dimension; beyond that the outline folds
/// over itself. A `chamfer` of zero yields a plain rectangle with the
/// two cut vertices coinciding.
pub fn chamfer_vertices(width: f32, height: f32, chamfer: f32) -> [Point; 6] {
    [
        Point::new(chamfer, 0.0),
        Point::new(width, 0.0),
        Point::new(width, height - chamfer),
        Point::new(width - chamfer, height),
        Point::new(0.0, height),
        Point::new(0.0, chamfer),
    ]
}

/// SVG `points` attribute for a chamfered rectangle
///
/// Space-separated `x,y` pairs, ready to assign to a `<polygon>`:
///
/// ```
/// use titanium_theme::chamfer::chamfer_points;
///
/// assert_eq!(
///     chamfer_points(100.0, 50.0, 10.0),
///     "10,0 100,0 100,40 90,50 0,50 0,10"
/// );
/// ```
pub fn chamfer_points(width: f32, height: f32, chamfer: f32) -> String {
    chamfer_vertices(width, height, chamfer)
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertices_cut_top_left_and_bottom_right() {
        let v = chamfer_vertices(100.0, 50.0, 10.0);
        assert_eq!(v[0], Point::new(10.0, 0.0));
        assert_eq!(v[1], Point::new(100.0, 0.0));
        assert_eq!(v[2], Point::new(100.0, 40.0));
        assert_eq!(v[3], Point::new(90.0, 50.0));
        assert_eq!(v[4], Point::new(0.0, 50.0));
        assert_eq!(v[5], Point::new(0.0, 10.0));
    }

    #[test]
    fn test_points_string_is_svg_polygon_format() {
        assert_eq!(
            chamfer_points(100.0, 50.0, 10.0),
            "10,0 100,0 100,40 90,50 0,50 0,10"
        );
    }

    #[test]
    fn test_same_inputs_same_outline() {
        assert_eq!(
            chamfer_points(320.0, 180.0, 12.0),
            chamfer_points(320.0, 180.0, 12.0)
        );
    }

    #[test]
    fn test_x_coordinates_ignore_height() {
        let short = chamfer_vertices(100.0, 30.0, 8.0);
        let tall = chamfer_vertices(100.0, 300.0, 8.0);

        // Top edge pair is fully height-independent
        assert_eq!(short[0], tall[0]);
        assert_eq!(short[1], tall[1]);

        // Left edge pair keeps its x; only the y follows the height
        assert_eq!(short[4].x, tall[4].x);
        assert_eq!(short[5].x, tall[5].x);
    }

    #[test]
    fn test_zero_chamfer_degenerates_to_rectangle() {
        let v = chamfer_vertices(80.0, 40.0, 0.0);
        assert_eq!(v[0], Point::new(0.0, 0.0));
        assert_eq!(v[5], Point::new(0.0, 0.0));
        assert_eq!(
            chamfer_points(80.0, 40.0, 0.0),
            "0,0 80,0 80,40 80,40 0,40 0,0"
        );
    }
}
