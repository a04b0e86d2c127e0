//! Planar polygon faces
//!
//! A [`Face`] is an ordered list of [`Point3`] vertices. Insertion order
//! is significant: it defines the winding, and the winding defines which
//! way the normal points for lighting and back-face culling.
//!
//! Faces with fewer than three points are degenerate. They are carried
//! through the pipeline as pass-through geometry: never lit, never
//! culled, and supplying no plane of their own for depth comparison
//! (their vertices can still be ordered against a regular face's plane).

use crate::geometry::{Point3, Vector3};

/// Tolerance below which a signed plane distance counts as on-plane.
const PLANE_EPSILON: f64 = 1e-9;

/// A planar polygon in model space
///
/// # Examples
///
/// ```
/// use isorender::{Face, Point3};
///
/// let triangle = Face::new(vec![
///   Point3::new(0.0, 0.0, 0.0),
///   Point3::new(1.0, 0.0, 0.0),
///   Point3::new(0.0, 1.0, 0.0),
/// ]);
/// assert_eq!(triangle.len(), 3);
/// assert!(!triangle.is_degenerate());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
  points: Vec<Point3>,
}

impl Face {
  /// Creates a face from an ordered vertex list
  pub fn new(points: Vec<Point3>) -> Self {
    Self { points }
  }

  /// The ordered vertices
  pub fn points(&self) -> &[Point3] {
    &self.points
  }

  /// Number of vertices
  pub fn len(&self) -> usize {
    self.points.len()
  }

  /// True when the face has no vertices
  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  /// True when the face has fewer than three points
  ///
  /// Degenerate faces skip lighting and culling and have no supporting
  /// plane of their own.
  pub fn is_degenerate(&self) -> bool {
    self.points.len() < 3
  }

  /// Returns this face moved by the given offsets
  pub fn translate(&self, dx: f64, dy: f64, dz: f64) -> Face {
    self.map(|p| p.translate(dx, dy, dz))
  }

  /// Scales every vertex about a pivot
  pub fn scale(&self, pivot: Point3, sx: f64, sy: f64, sz: f64) -> Face {
    self.map(|p| p.scale(pivot, sx, sy, sz))
  }

  /// Rotates every vertex about the X-parallel axis through `pivot`
  pub fn rotate_x(&self, pivot: Point3, angle: f64) -> Face {
    self.map(|p| p.rotate_x(pivot, angle))
  }

  /// Rotates every vertex about the Y-parallel axis through `pivot`
  pub fn rotate_y(&self, pivot: Point3, angle: f64) -> Face {
    self.map(|p| p.rotate_y(pivot, angle))
  }

  /// Rotates every vertex about the Z-parallel axis through `pivot`
  pub fn rotate_z(&self, pivot: Point3, angle: f64) -> Face {
    self.map(|p| p.rotate_z(pivot, angle))
  }

  /// Returns the face with reversed vertex order (flipped winding)
  ///
  /// # Examples
  ///
  /// ```
  /// use isorender::{Face, Point3};
  ///
  /// let face = Face::new(vec![
  ///   Point3::new(0.0, 0.0, 0.0),
  ///   Point3::new(1.0, 0.0, 0.0),
  ///   Point3::new(0.0, 1.0, 0.0),
  /// ]);
  /// let flipped = face.reversed();
  /// assert_eq!(flipped.normal().k, -face.normal().k);
  /// ```
  pub fn reversed(&self) -> Face {
    let mut points = self.points.clone();
    points.reverse();
    Face { points }
  }

  /// Un-normalized normal from the first three vertices
  ///
  /// Computed as `(p0 - p1) x (p1 - p2)`. Degenerate faces (and collinear
  /// leading vertices) yield the zero vector.
  pub fn normal(&self) -> Vector3 {
    if self.points.len() < 3 {
      return Vector3::ZERO;
    }
    let v1 = Vector3::between(self.points[1], self.points[0]);
    let v2 = Vector3::between(self.points[2], self.points[1]);
    v1.cross(v2)
  }

  /// Mean isometric depth of the vertices
  ///
  /// Presort hint only; an empty face reports zero depth.
  pub fn average_depth(&self) -> f64 {
    if self.points.is_empty() {
      return 0.0;
    }
    let total: f64 = self.points.iter().map(|p| p.depth()).sum();
    total / self.points.len() as f64
  }

  /// Compares depth against another face as seen from `observer`
  ///
  /// Returns a positive value when this face is closer to the observer,
  /// negative when it is farther, and zero when the plane-side test gives
  /// no constraint (ties, neither face supplying a usable plane, observer
  /// on a plane).
  ///
  /// The test counts, for each face, how many of its vertices lie on the
  /// side of the other face's supporting plane away from the observer.
  /// The face with more such "behind" vertices is the farther one. The
  /// result is antisymmetric: `a.closer_than(b, o) == -b.closer_than(a, o)`.
  ///
  /// A degenerate face supplies no plane, but its vertices still count
  /// against the other face's plane, so a degenerate/regular pair can
  /// still order (useful for lines drawn over surfaces).
  pub fn closer_than(&self, other: &Face, observer: Point3) -> i32 {
    let self_behind = vertices_behind(self, other, observer).unwrap_or(0);
    let other_behind = vertices_behind(other, self, observer).unwrap_or(0);
    other_behind as i32 - self_behind as i32
  }

  fn map(&self, f: impl Fn(Point3) -> Point3) -> Face {
    Face {
      points: self.points.iter().copied().map(f).collect(),
    }
  }
}

/// Counts how many vertices of `face` lie on the far side of
/// `plane_face`'s supporting plane, relative to `observer`.
///
/// Returns `None` when the plane is unusable: fewer than three points, a
/// degenerate normal, or the observer lying on the plane itself.
fn vertices_behind(face: &Face, plane_face: &Face, observer: Point3) -> Option<usize> {
  let normal = plane_face.normal();
  if normal == Vector3::ZERO || plane_face.len() < 3 {
    return None;
  }
  let anchor = plane_face.points()[0];
  let offset = normal.dot(Vector3::new(anchor.x, anchor.y, anchor.z));

  let signed_distance =
    |p: Point3| normal.dot(Vector3::new(p.x, p.y, p.z)) - offset;

  let observer_side = signed_distance(observer);
  if observer_side.abs() <= PLANE_EPSILON {
    return None;
  }

  let behind = face
    .points()
    .iter()
    .filter(|p| {
      let d = signed_distance(**p);
      d.abs() > PLANE_EPSILON && (d > 0.0) != (observer_side > 0.0)
    })
    .count();
  Some(behind)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn square_at_z(z: f64) -> Face {
    Face::new(vec![
      Point3::new(0.0, 0.0, z),
      Point3::new(1.0, 0.0, z),
      Point3::new(1.0, 1.0, z),
      Point3::new(0.0, 1.0, z),
    ])
  }

  #[test]
  fn test_normal_of_xy_square() {
    let face = square_at_z(0.0);
    let normal = face.normal().normalize();
    assert_eq!(normal, Vector3::new(0.0, 0.0, 1.0));
  }

  #[test]
  fn test_normal_of_degenerate_face() {
    let segment = Face::new(vec![Point3::ZERO, Point3::new(1.0, 0.0, 0.0)]);
    assert_eq!(segment.normal(), Vector3::ZERO);
  }

  #[test]
  fn test_normal_of_collinear_points() {
    let face = Face::new(vec![
      Point3::ZERO,
      Point3::new(1.0, 0.0, 0.0),
      Point3::new(2.0, 0.0, 0.0),
    ]);
    assert_eq!(face.normal(), Vector3::ZERO);
  }

  #[test]
  fn test_reversed_flips_normal() {
    let face = square_at_z(0.0);
    let flipped = face.reversed();
    assert_eq!(flipped.normal().normalize(), Vector3::new(0.0, 0.0, -1.0));
  }

  #[test]
  fn test_average_depth() {
    let face = square_at_z(1.0);
    // Vertex depths: 0-2, 1-2, 2-2, 1-2 -> mean -1
    assert!((face.average_depth() - -1.0).abs() < 1e-12);
    assert_eq!(Face::new(vec![]).average_depth(), 0.0);
  }

  #[test]
  fn test_closer_than_stacked_squares() {
    let near = square_at_z(1.0);
    let far = square_at_z(0.0);
    let observer = Point3::new(-10.0, -10.0, 20.0);

    assert!(near.closer_than(&far, observer) > 0);
    assert!(far.closer_than(&near, observer) < 0);
  }

  #[test]
  fn test_closer_than_antisymmetric() {
    let observer = Point3::new(-10.0, -10.0, 20.0);
    let a = square_at_z(0.5);
    let b = Face::new(vec![
      Point3::new(0.2, 0.2, 0.0),
      Point3::new(1.2, 0.2, 0.4),
      Point3::new(1.2, 1.2, 0.4),
      Point3::new(0.2, 1.2, 0.0),
    ]);
    assert_eq!(a.closer_than(&b, observer), -b.closer_than(&a, observer));
  }

  #[test]
  fn test_closer_than_degenerate_faces() {
    let observer = Point3::new(-10.0, -10.0, 20.0);
    let segment = Face::new(vec![Point3::ZERO, Point3::new(1.0, 0.0, 0.0)]);
    let square = square_at_z(0.0);
    // The square's plane still orders the segment's vertices one-sidedly,
    // but the segment itself contributes no plane.
    assert_eq!(
      segment.closer_than(&square, observer),
      -square.closer_than(&segment, observer)
    );

    let other_segment = Face::new(vec![Point3::ZERO, Point3::new(0.0, 1.0, 0.0)]);
    assert_eq!(segment.closer_than(&other_segment, observer), 0);
  }

  #[test]
  fn test_closer_than_coplanar_is_tie() {
    let observer = Point3::new(-10.0, -10.0, 20.0);
    let a = square_at_z(1.0);
    let b = a.translate(0.25, 0.25, 0.0);
    assert_eq!(a.closer_than(&b, observer), 0);
  }

  #[test]
  fn test_closer_than_observer_on_plane() {
    let a = square_at_z(0.0);
    let b = square_at_z(1.0);
    // Observer lying exactly on b's plane gives no constraint from b's
    // side; a's plane still counts b's vertices as in front.
    let observer = Point3::new(-10.0, -10.0, 1.0);
    assert_eq!(a.closer_than(&b, observer), -b.closer_than(&a, observer));
  }

  #[test]
  fn test_transforms_preserve_vertex_count() {
    let face = square_at_z(0.0);
    assert_eq!(face.translate(1.0, 2.0, 3.0).len(), 4);
    assert_eq!(face.rotate_z(Point3::ZERO, 1.0).len(), 4);
    assert_eq!(face.scale(Point3::ZERO, 2.0, 2.0, 2.0).len(), 4);
  }
}
