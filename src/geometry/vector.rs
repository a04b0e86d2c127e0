//! 3-D vector math for normals and lighting

use crate::geometry::Point3;

/// A 3-D vector
///
/// Used for face normals and lighting math. Like the point types this is
/// an immutable `Copy` value; all operations return new vectors.
///
/// # Examples
///
/// ```
/// use isorender::Vector3;
///
/// let x = Vector3::new(1.0, 0.0, 0.0);
/// let y = Vector3::new(0.0, 1.0, 0.0);
/// assert_eq!(x.cross(y), Vector3::new(0.0, 0.0, 1.0));
/// assert_eq!(x.dot(y), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3 {
  pub i: f64,
  pub j: f64,
  pub k: f64,
}

impl Vector3 {
  /// The zero vector
  pub const ZERO: Self = Self {
    i: 0.0,
    j: 0.0,
    k: 0.0,
  };

  /// Creates a new vector from components
  pub const fn new(i: f64, j: f64, k: f64) -> Self {
    Self { i, j, k }
  }

  /// The vector from `a` to `b`
  pub fn between(a: Point3, b: Point3) -> Self {
    Self {
      i: b.x - a.x,
      j: b.y - a.y,
      k: b.z - a.z,
    }
  }

  /// Cross product, `self x other`
  pub fn cross(self, other: Vector3) -> Vector3 {
    Vector3 {
      i: self.j * other.k - self.k * other.j,
      j: self.k * other.i - self.i * other.k,
      k: self.i * other.j - self.j * other.i,
    }
  }

  /// Dot product
  pub fn dot(self, other: Vector3) -> f64 {
    self.i * other.i + self.j * other.j + self.k * other.k
  }

  /// Euclidean length
  pub fn magnitude(self) -> f64 {
    self.dot(self).sqrt()
  }

  /// Returns this vector scaled to unit length
  ///
  /// The zero vector (and anything with zero magnitude) normalizes to
  /// the zero vector rather than dividing by zero.
  ///
  /// # Examples
  ///
  /// ```
  /// use isorender::Vector3;
  ///
  /// let v = Vector3::new(0.0, 3.0, 4.0).normalize();
  /// assert!((v.magnitude() - 1.0).abs() < 1e-12);
  /// assert_eq!(Vector3::ZERO.normalize(), Vector3::ZERO);
  /// ```
  pub fn normalize(self) -> Vector3 {
    let magnitude = self.magnitude();
    if magnitude == 0.0 {
      return Vector3::ZERO;
    }
    Vector3 {
      i: self.i / magnitude,
      j: self.j / magnitude,
      k: self.k / magnitude,
    }
  }
}
