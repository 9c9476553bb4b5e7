//! Shape generation for 2D primitives
//!
//! All shapes come out as triangle lists in canvas coordinates (y down).

use glam::Vec2;

use super::vertex::Vertex;
use crate::ramp_axis;

/// Corners of a rectangle given in ramp-local coordinates, rotated by the
/// ramp angle around `origin`. Order: min, (max.x, min.y), max, (min.x, max.y).
pub fn oriented_rect_corners(origin: Vec2, angle_degrees: f32, min: Vec2, max: Vec2) -> [Vec2; 4] {
    let rot = ramp_axis(angle_degrees);
    [
        min,
        Vec2::new(max.x, min.y),
        max,
        Vec2::new(min.x, max.y),
    ]
    .map(|local| origin + rot.rotate(local))
}

/// Two triangles covering a quad
pub fn quad(corners: [Vec2; 4], color: [f32; 4]) -> Vec<Vertex> {
    let [a, b, c, d] = corners;
    [a, b, c, c, d, a]
        .iter()
        .map(|p| Vertex::new(p.x, p.y, color))
        .collect()
}

/// Filled rectangle in ramp-local coordinates
pub fn oriented_rect(
    origin: Vec2,
    angle_degrees: f32,
    min: Vec2,
    max: Vec2,
    color: [f32; 4],
) -> Vec<Vertex> {
    quad(oriented_rect_corners(origin, angle_degrees, min, max), color)
}

/// Line segment with the given stroke width
pub fn line(a: Vec2, b: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (b - a).normalize_or_zero();
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);
    quad([a + perp, b + perp, b - perp, a - perp], color)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        a.distance(b) < 1e-3
    }

    #[test]
    fn test_flat_rect_is_axis_aligned() {
        let corners =
            oriented_rect_corners(Vec2::new(10.0, 20.0), 0.0, Vec2::ZERO, Vec2::new(4.0, 2.0));
        assert!(close(corners[0], Vec2::new(10.0, 20.0)));
        assert!(close(corners[2], Vec2::new(14.0, 22.0)));
    }

    #[test]
    fn test_positive_angle_lifts_far_end() {
        let corners = oriented_rect_corners(Vec2::ZERO, 30.0, Vec2::ZERO, Vec2::new(400.0, 0.0));
        let far = corners[1];
        assert!((far.x - 346.41).abs() < 1e-2);
        assert!((far.y + 200.0).abs() < 1e-2);
    }

    #[test]
    fn test_oriented_rect_triangles_share_corners() {
        let color = [0.5; 4];
        let verts = oriented_rect(Vec2::ZERO, 90.0, Vec2::ZERO, Vec2::new(10.0, 2.0), color);
        assert_eq!(verts.len(), 6);
        assert_eq!(verts[0], verts[5]);
        assert_eq!(verts[2], verts[3]);
        // 90 degrees turns the local x axis straight up the canvas
        assert!((verts[1].position[0]).abs() < 1e-4);
        assert!((verts[1].position[1] + 10.0).abs() < 1e-4);
        assert!(verts.iter().all(|v| v.color == color));
    }

    #[test]
    fn test_line_has_requested_width() {
        let verts = line(Vec2::ZERO, Vec2::new(100.0, 0.0), 2.0, [1.0; 4]);
        assert_eq!(verts.len(), 6);
        assert_eq!(verts[0].position, [0.0, 1.0]);
        assert_eq!(verts[4].position, [0.0, -1.0]);
    }
}
