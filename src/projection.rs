//! Isometric projection and Lambertian shading
//!
//! The [`Projector`] applies the fixed isometric transform that maps
//! model space onto the viewport, and shades each face by dotting its
//! normal with a light direction. The transform places the isometric
//! "floor" near the bottom of the viewport:
//!
//! ```text
//! screen_x = origin_x + x*s*cos(a) + y*s*cos(pi - a)
//! screen_y = origin_y - x*s*sin(a) - y*s*sin(pi - a) - z*s
//! ```
//!
//! with `origin_x = width / 2` and `origin_y = 0.9 * height`.

use crate::color::Color;
use crate::geometry::{Face, Point2, Point3, Vector3};
use std::f64::consts::PI;

/// Default isometric angle: 30 degrees.
pub const DEFAULT_ANGLE: f64 = PI / 6.0;

/// Default scale in pixels per model unit.
pub const DEFAULT_SCALE: f64 = 70.0;

/// Default light direction (normalized on use).
pub const DEFAULT_LIGHT_DIRECTION: Vector3 = Vector3::new(2.0, -1.0, 3.0);

/// Default fraction of lightness swung by full-on/full-off lighting.
pub const DEFAULT_COLOR_DIFFERENCE: f64 = 0.2;

/// Applies the isometric transform and per-face shading
///
/// # Examples
///
/// ```
/// use isorender::{Point3, Projector};
///
/// let projector = Projector::default();
/// let p = projector.project_point(Point3::ZERO, 800, 600);
/// assert_eq!(p.x, 400.0); // origin lands at the horizontal center
/// assert_eq!(p.y, 540.0); // and 90% down the viewport
/// ```
#[derive(Debug, Clone)]
pub struct Projector {
  angle: f64,
  scale: f64,
  light_direction: Vector3,
  light_color: Color,
  color_difference: f64,
}

impl Default for Projector {
  fn default() -> Self {
    Self {
      angle: DEFAULT_ANGLE,
      scale: DEFAULT_SCALE,
      light_direction: DEFAULT_LIGHT_DIRECTION,
      light_color: Color::WHITE,
      color_difference: DEFAULT_COLOR_DIFFERENCE,
    }
  }
}

impl Projector {
  /// Creates a projector with explicit parameters
  ///
  /// `angle` is in radians; `scale` in pixels per model unit. The light
  /// direction is normalized on use, so any magnitude works (a zero
  /// vector simply produces flat lighting).
  pub fn new(
    angle: f64,
    scale: f64,
    light_direction: Vector3,
    light_color: Color,
    color_difference: f64,
  ) -> Self {
    Self {
      angle,
      scale,
      light_direction,
      light_color,
      color_difference,
    }
  }

  /// The isometric angle in radians
  pub fn angle(&self) -> f64 {
    self.angle
  }

  /// The scale in pixels per model unit
  pub fn scale(&self) -> f64 {
    self.scale
  }

  /// Projects a single model point into screen space
  pub fn project_point(&self, p: Point3, width: u32, height: u32) -> Point2 {
    let origin_x = width as f64 / 2.0;
    let origin_y = 0.9 * height as f64;
    let s = self.scale;
    let a = self.angle;

    Point2 {
      x: origin_x + p.x * s * a.cos() + p.y * s * (PI - a).cos(),
      y: origin_y - p.x * s * a.sin() - p.y * s * (PI - a).sin() - p.z * s,
    }
  }

  /// Projects every vertex of a face
  pub fn project_face(&self, face: &Face, width: u32, height: u32) -> Vec<Point2> {
    face
      .points()
      .iter()
      .map(|p| self.project_point(*p, width, height))
      .collect()
  }

  /// Recovers the model point at a given screen position and height
  ///
  /// The isometric transform folds `z` into `screen_y`, so inversion
  /// needs `z` supplied; `x` and `y` then come back exactly (up to
  /// floating tolerance).
  pub fn unproject(&self, p: Point2, z: f64, width: u32, height: u32) -> Point3 {
    let origin_x = width as f64 / 2.0;
    let origin_y = 0.9 * height as f64;
    let s = self.scale;
    let a = self.angle;

    // screen_x - origin_x = s*cos(a)*x + s*cos(pi-a)*y
    // origin_y - screen_y - s*z = s*sin(a)*x + s*sin(pi-a)*y
    let u = p.x - origin_x;
    let v = origin_y - p.y - s * z;
    let (ca, cb) = (s * a.cos(), s * (PI - a).cos());
    let (sa, sb) = (s * a.sin(), s * (PI - a).sin());
    let det = ca * sb - cb * sa;

    Point3 {
      x: (u * sb - v * cb) / det,
      y: (v * ca - u * sa) / det,
      z,
    }
  }

  /// Computes the shaded color for a face
  ///
  /// Brightness is the cosine between the face normal and the light
  /// direction, in `[-1, 1]`; the base color's lightness is shifted by
  /// `brightness * color_difference` under the light color's tint.
  /// Degenerate faces (fewer than three points, or a zero normal) come
  /// back with the base color untouched.
  pub fn shade(&self, face: &Face, base: Color) -> Color {
    if face.is_degenerate() {
      return base;
    }
    let normal = face.normal().normalize();
    if normal == Vector3::ZERO {
      return base;
    }
    let brightness = normal.dot(self.light_direction.normalize());
    base.lighten(brightness * self.color_difference, self.light_color)
  }
}
