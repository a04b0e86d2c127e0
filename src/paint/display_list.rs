//! Draw commands and prepared frames
//!
//! The engine's output is a flat, ordered list of [`DrawCommand`]s
//! wrapped in a [`PreparedFrame`]. Commands are stored back-to-front:
//! painting them in order yields correct occlusion for every pair the
//! visibility sorter could resolve.

use crate::color::Color;
use crate::geometry::{Face, Point2};
use serde::Serialize;

/// Screen-space axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2 {
  pub min_x: f64,
  pub min_y: f64,
  pub max_x: f64,
  pub max_y: f64,
}

impl Bounds2 {
  /// True when the boxes share any area (edge contact counts)
  pub fn intersects(&self, other: &Bounds2) -> bool {
    self.min_x <= other.max_x
      && self.max_x >= other.min_x
      && self.min_y <= other.max_y
      && self.max_y >= other.min_y
  }

  /// True when the point lies inside or on the boundary
  pub fn contains(&self, x: f64, y: f64) -> bool {
    x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
  }
}

/// Bounding box of a point list, `None` for an empty list
pub fn polygon_bounds(points: &[Point2]) -> Option<Bounds2> {
  let first = points.first()?;
  let mut bounds = Bounds2 {
    min_x: first.x,
    min_y: first.y,
    max_x: first.x,
    max_y: first.y,
  };
  for p in &points[1..] {
    bounds.min_x = bounds.min_x.min(p.x);
    bounds.min_y = bounds.min_y.min(p.y);
    bounds.max_x = bounds.max_x.max(p.x);
    bounds.max_y = bounds.max_y.max(p.y);
  }
  Some(bounds)
}

/// One paintable polygon in screen space
///
/// Carries the projected outline and shaded fill color, plus a
/// back-reference to the model-space [`Face`] it came from (used by the
/// visibility sorter) and the id of the solid that contributed it, when
/// any.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
  /// Stable id assigned when the face was added to the scene.
  ///
  /// Ids are monotonically assigned per inserted face and reset when the
  /// scene is cleared; they are not stable across a clear.
  pub id: u64,
  /// Projected outline, same vertex order as the source face
  pub points: Vec<Point2>,
  /// Shaded fill color
  pub color: Color,
  /// The model-space face this command was projected from
  pub face: Face,
  /// Id of the source solid, when the face came in as part of one
  pub solid_id: Option<u64>,
}

impl DrawCommand {
  /// Screen-space bounding box, `None` for a command with no points
  pub fn bounds(&self) -> Option<Bounds2> {
    polygon_bounds(&self.points)
  }
}

/// Counters describing how a frame was prepared
///
/// Populated by the prepare pipeline; makes the culling and sorting
/// behavior observable without inspecting the command list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FrameStats {
  /// Faces entering the pipeline
  pub input_faces: usize,
  /// Faces dropped by the back-face test
  pub backface_culled: usize,
  /// Faces dropped by the viewport-bounds test
  pub bounds_culled: usize,
  /// Faces the sorter had to append unordered (cyclic overlap)
  pub cycle_fallback: usize,
}

/// An immutable, ready-to-paint frame
///
/// Commands are ordered back-to-front. A frame is created by
/// `SceneEngine::prepare` and never mutated afterward; the engine shares
/// it via `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedFrame {
  /// Draw commands in back-to-front paint order
  pub commands: Vec<DrawCommand>,
  /// Viewport width in pixels
  pub width: u32,
  /// Viewport height in pixels
  pub height: u32,
  /// Pipeline counters for this frame
  pub stats: FrameStats,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_polygon_bounds_empty() {
    assert_eq!(polygon_bounds(&[]), None);
  }

  #[test]
  fn test_polygon_bounds_covers_all_points() {
    let bounds = polygon_bounds(&[
      Point2::new(3.0, -1.0),
      Point2::new(-2.0, 5.0),
      Point2::new(0.0, 0.0),
    ])
    .unwrap();
    assert_eq!(bounds.min_x, -2.0);
    assert_eq!(bounds.max_x, 3.0);
    assert_eq!(bounds.min_y, -1.0);
    assert_eq!(bounds.max_y, 5.0);
  }

  #[test]
  fn test_bounds_intersects() {
    let a = Bounds2 {
      min_x: 0.0,
      min_y: 0.0,
      max_x: 10.0,
      max_y: 10.0,
    };
    let b = Bounds2 {
      min_x: 10.0,
      min_y: 5.0,
      max_x: 20.0,
      max_y: 15.0,
    };
    let c = Bounds2 {
      min_x: 11.0,
      min_y: 0.0,
      max_x: 20.0,
      max_y: 10.0,
    };
    assert!(a.intersects(&b)); // edge contact
    assert!(b.intersects(&a));
    assert!(!a.intersects(&c));
  }

  #[test]
  fn test_bounds_contains() {
    let bounds = Bounds2 {
      min_x: 0.0,
      min_y: 0.0,
      max_x: 10.0,
      max_y: 10.0,
    };
    assert!(bounds.contains(5.0, 5.0));
    assert!(bounds.contains(0.0, 10.0));
    assert!(!bounds.contains(-0.1, 5.0));
  }
}
