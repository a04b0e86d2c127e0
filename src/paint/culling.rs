//! Back-face and viewport-bounds culling
//!
//! Two independent per-face predicates, run after projection and before
//! depth sorting to shrink the sorter's O(n^2) candidate set. Both are
//! pure and order-independent; degenerate faces (fewer than three
//! projected points) pass the back-face test untouched.

use crate::geometry::Point2;

/// True when the projected polygon faces away from the viewer
///
/// Uses the shoelace signed sum over the projected points (twice the
/// signed area in screen coordinates). With outward counter-clockwise
/// winding under the fixed isometric view, a strictly positive sum means
/// the face is seen from behind. Polygons with fewer than three points
/// are never back-facing.
pub fn is_back_facing(points: &[Point2]) -> bool {
  if points.len() < 3 {
    return false;
  }
  let mut sum = 0.0;
  for i in 0..points.len() {
    let a = points[i];
    let b = points[(i + 1) % points.len()];
    sum += a.x * b.y - b.x * a.y;
  }
  sum > 0.0
}

/// True when at least one point lies within `[0, width] x [0, height]`
///
/// A polygon entirely outside the viewport is dropped whole; there is no
/// partial clipping.
pub fn touches_viewport(points: &[Point2], width: u32, height: u32) -> bool {
  let w = width as f64;
  let h = height as f64;
  points
    .iter()
    .any(|p| p.x >= 0.0 && p.x <= w && p.y >= 0.0 && p.y <= h)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_counter_clockwise_is_front_facing() {
    // Screen space has y down, so this winding is counter-clockwise
    // visually and yields a negative shoelace sum.
    let points = [
      Point2::new(0.0, 0.0),
      Point2::new(0.0, 10.0),
      Point2::new(10.0, 10.0),
    ];
    assert!(!is_back_facing(&points));
  }

  #[test]
  fn test_clockwise_is_back_facing() {
    let points = [
      Point2::new(0.0, 0.0),
      Point2::new(10.0, 10.0),
      Point2::new(0.0, 10.0),
    ];
    assert!(is_back_facing(&points));
  }

  #[test]
  fn test_degenerate_polygon_never_culled() {
    assert!(!is_back_facing(&[]));
    assert!(!is_back_facing(&[Point2::new(1.0, 1.0)]));
    assert!(!is_back_facing(&[
      Point2::new(0.0, 0.0),
      Point2::new(5.0, 5.0)
    ]));
  }

  #[test]
  fn test_zero_area_polygon_not_culled() {
    // Collinear points give a zero sum; only strictly positive culls.
    let points = [
      Point2::new(0.0, 0.0),
      Point2::new(5.0, 0.0),
      Point2::new(10.0, 0.0),
    ];
    assert!(!is_back_facing(&points));
  }

  #[test]
  fn test_touches_viewport_one_point_inside() {
    let points = [Point2::new(-50.0, -50.0), Point2::new(10.0, 10.0)];
    assert!(touches_viewport(&points, 100, 100));
  }

  #[test]
  fn test_touches_viewport_boundary_inclusive() {
    let points = [Point2::new(100.0, 100.0)];
    assert!(touches_viewport(&points, 100, 100));
  }

  #[test]
  fn test_touches_viewport_all_outside() {
    let points = [
      Point2::new(-1.0, 50.0),
      Point2::new(101.0, 50.0),
      Point2::new(50.0, -0.5),
    ];
    assert!(!touches_viewport(&points, 100, 100));
  }

  #[test]
  fn test_touches_viewport_empty() {
    assert!(!touches_viewport(&[], 100, 100));
  }
}
