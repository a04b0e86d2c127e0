//! Point types in model and screen space
//!
//! [`Point3`] lives in the original right-handed model space that solids
//! are built in; [`Point2`] is a projected screen coordinate. Both are
//! immutable `Copy` value types: every transform returns a new point.

use std::fmt;

/// A point in 3-D model space
///
/// # Examples
///
/// ```
/// use isorender::Point3;
///
/// let p = Point3::new(1.0, 2.0, 3.0);
/// let moved = p.translate(1.0, 0.0, -1.0);
/// assert_eq!(moved, Point3::new(2.0, 2.0, 2.0));
/// assert_eq!(p.x, 1.0); // original untouched
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
  pub x: f64,
  pub y: f64,
  pub z: f64,
}

impl Point3 {
  /// The origin (0, 0, 0)
  pub const ZERO: Self = Self {
    x: 0.0,
    y: 0.0,
    z: 0.0,
  };

  /// Creates a new point at the given coordinates
  pub const fn new(x: f64, y: f64, z: f64) -> Self {
    Self { x, y, z }
  }

  /// Returns this point moved by the given offsets
  pub fn translate(self, dx: f64, dy: f64, dz: f64) -> Self {
    Self {
      x: self.x + dx,
      y: self.y + dy,
      z: self.z + dz,
    }
  }

  /// Scales this point about a pivot
  ///
  /// Use [`Point3::ZERO`] as the pivot for scaling about the origin.
  ///
  /// # Examples
  ///
  /// ```
  /// use isorender::Point3;
  ///
  /// let p = Point3::new(2.0, 2.0, 2.0);
  /// let scaled = p.scale(Point3::new(1.0, 1.0, 1.0), 2.0, 2.0, 2.0);
  /// assert_eq!(scaled, Point3::new(3.0, 3.0, 3.0));
  /// ```
  pub fn scale(self, pivot: Point3, sx: f64, sy: f64, sz: f64) -> Self {
    Self {
      x: pivot.x + (self.x - pivot.x) * sx,
      y: pivot.y + (self.y - pivot.y) * sy,
      z: pivot.z + (self.z - pivot.z) * sz,
    }
  }

  /// Rotates this point about the X-parallel axis through `pivot`
  ///
  /// `angle` is in radians, counter-clockwise looking down the axis
  /// from +X.
  pub fn rotate_x(self, pivot: Point3, angle: f64) -> Self {
    let (sin, cos) = angle.sin_cos();
    let y = self.y - pivot.y;
    let z = self.z - pivot.z;
    Self {
      x: self.x,
      y: pivot.y + y * cos - z * sin,
      z: pivot.z + y * sin + z * cos,
    }
  }

  /// Rotates this point about the Y-parallel axis through `pivot`
  pub fn rotate_y(self, pivot: Point3, angle: f64) -> Self {
    let (sin, cos) = angle.sin_cos();
    let x = self.x - pivot.x;
    let z = self.z - pivot.z;
    Self {
      x: pivot.x + x * cos + z * sin,
      y: self.y,
      z: pivot.z - x * sin + z * cos,
    }
  }

  /// Rotates this point about the Z-parallel axis through `pivot`
  ///
  /// # Examples
  ///
  /// ```
  /// use isorender::Point3;
  ///
  /// let p = Point3::new(1.0, 0.0, 5.0);
  /// let turned = p.rotate_z(Point3::ZERO, std::f64::consts::FRAC_PI_2);
  /// assert!((turned.x - 0.0).abs() < 1e-12);
  /// assert!((turned.y - 1.0).abs() < 1e-12);
  /// assert_eq!(turned.z, 5.0);
  /// ```
  pub fn rotate_z(self, pivot: Point3, angle: f64) -> Self {
    let (sin, cos) = angle.sin_cos();
    let x = self.x - pivot.x;
    let y = self.y - pivot.y;
    Self {
      x: pivot.x + x * cos - y * sin,
      y: pivot.y + x * sin + y * cos,
      z: self.z,
    }
  }

  /// Euclidean distance to another point
  ///
  /// # Examples
  ///
  /// ```
  /// use isorender::Point3;
  ///
  /// let a = Point3::ZERO;
  /// let b = Point3::new(3.0, 4.0, 0.0);
  /// assert_eq!(a.distance_to(b), 5.0);
  /// ```
  pub fn distance_to(self, other: Point3) -> f64 {
    let dx = other.x - self.x;
    let dy = other.y - self.y;
    let dz = other.z - self.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
  }

  /// Distance from this point to the segment `a`-`b`
  ///
  /// A zero-length segment degrades to plain point distance.
  pub fn distance_to_segment(self, a: Point3, b: Point3) -> f64 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let abz = b.z - a.z;
    let len_sq = abx * abx + aby * aby + abz * abz;
    if len_sq == 0.0 {
      return self.distance_to(a);
    }
    let t = ((self.x - a.x) * abx + (self.y - a.y) * aby + (self.z - a.z) * abz) / len_sq;
    let t = t.clamp(0.0, 1.0);
    self.distance_to(Point3::new(a.x + abx * t, a.y + aby * t, a.z + abz * t))
  }

  /// Synthetic isometric depth, `x + y - 2z`
  ///
  /// Larger values are farther from the viewer under the fixed isometric
  /// view. This is a cheap presort hint only; the visibility sorter's
  /// plane-side test is the authoritative order.
  pub fn depth(self) -> f64 {
    self.x + self.y - 2.0 * self.z
  }
}

impl fmt::Display for Point3 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {}, {})", self.x, self.y, self.z)
  }
}

/// A projected screen coordinate
///
/// Screen space has its origin at the top-left corner, with Y increasing
/// downward.
///
/// # Examples
///
/// ```
/// use isorender::Point2;
///
/// let p = Point2::new(10.0, 20.0);
/// assert_eq!(p.distance_to(Point2::new(13.0, 24.0)), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2 {
  pub x: f64,
  pub y: f64,
}

impl Point2 {
  /// The screen origin (0, 0)
  pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

  /// Creates a new screen point
  pub const fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }

  /// Euclidean distance to another screen point
  pub fn distance_to(self, other: Point2) -> f64 {
    let dx = other.x - self.x;
    let dy = other.y - self.y;
    (dx * dx + dy * dy).sqrt()
  }

  /// Distance from this point to the segment `a`-`b`
  ///
  /// A zero-length segment degrades to plain point distance.
  pub fn distance_to_segment(self, a: Point2, b: Point2) -> f64 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let len_sq = abx * abx + aby * aby;
    if len_sq == 0.0 {
      return self.distance_to(a);
    }
    let t = ((self.x - a.x) * abx + (self.y - a.y) * aby) / len_sq;
    let t = t.clamp(0.0, 1.0);
    self.distance_to(Point2::new(a.x + abx * t, a.y + aby * t))
  }
}

impl fmt::Display for Point2 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}
