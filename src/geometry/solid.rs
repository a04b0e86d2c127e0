//! Solids as flat face lists
//!
//! A [`Solid`] is nothing more than an ordered list of [`Face`]s. The
//! parametrized shapes (boxes, pyramids, cylinders) are free functions in
//! [`crate::solids`] that produce plain `Solid` values; there is no shape
//! hierarchy.

use crate::geometry::{Face, Point3};

/// A 3-D object expressed as an ordered list of faces
///
/// # Examples
///
/// ```
/// use isorender::{Point3, solids};
///
/// let cube = solids::prism(Point3::ZERO, 1.0, 1.0, 1.0);
/// assert_eq!(cube.len(), 6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
  faces: Vec<Face>,
}

impl Solid {
  /// Creates a solid from an ordered face list
  pub fn new(faces: Vec<Face>) -> Self {
    Self { faces }
  }

  /// The faces in insertion order
  pub fn faces(&self) -> &[Face] {
    &self.faces
  }

  /// Number of faces
  pub fn len(&self) -> usize {
    self.faces.len()
  }

  /// True when the solid has no faces
  pub fn is_empty(&self) -> bool {
    self.faces.is_empty()
  }

  /// Faces sorted back-to-front by descending average isometric depth
  ///
  /// The sort is stable: faces with equal depth keep their insertion
  /// order. This is a cheap presort consumed when a solid enters the
  /// scene; the visibility sorter remains the authoritative order for
  /// overlapping faces.
  pub fn ordered_faces(&self) -> Vec<Face> {
    let mut faces = self.faces.clone();
    faces.sort_by(|a, b| f64::total_cmp(&b.average_depth(), &a.average_depth()));
    faces
  }

  /// Returns this solid moved by the given offsets
  pub fn translate(&self, dx: f64, dy: f64, dz: f64) -> Solid {
    self.map(|f| f.translate(dx, dy, dz))
  }

  /// Scales every face about a pivot
  pub fn scale(&self, pivot: Point3, sx: f64, sy: f64, sz: f64) -> Solid {
    self.map(|f| f.scale(pivot, sx, sy, sz))
  }

  /// Rotates every face about the X-parallel axis through `pivot`
  pub fn rotate_x(&self, pivot: Point3, angle: f64) -> Solid {
    self.map(|f| f.rotate_x(pivot, angle))
  }

  /// Rotates every face about the Y-parallel axis through `pivot`
  pub fn rotate_y(&self, pivot: Point3, angle: f64) -> Solid {
    self.map(|f| f.rotate_y(pivot, angle))
  }

  /// Rotates every face about the Z-parallel axis through `pivot`
  pub fn rotate_z(&self, pivot: Point3, angle: f64) -> Solid {
    self.map(|f| f.rotate_z(pivot, angle))
  }

  fn map(&self, f: impl Fn(&Face) -> Face) -> Solid {
    Solid {
      faces: self.faces.iter().map(f).collect(),
    }
  }
}
