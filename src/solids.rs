//! Parametrized solid builders
//!
//! Free functions that produce plain [`Solid`] values. Every builder
//! winds its faces outward (counter-clockwise when viewed from outside
//! the solid), which is what makes back-face culling drop exactly the
//! hidden faces under the fixed isometric view.
//!
//! Builders with a parameter contract (`cylinder`, `stairs`, `extrude`)
//! return `Result`; the rest are infallible.
//!
//! # Examples
//!
//! ```
//! use isorender::{Point3, solids};
//!
//! let cube = solids::prism(Point3::ZERO, 1.0, 1.0, 1.0);
//! assert_eq!(cube.len(), 6);
//!
//! let tower = solids::cylinder(Point3::ZERO, 1.0, 8, 3.0).unwrap();
//! assert_eq!(tower.len(), 10); // 8 sides + top + bottom
//! ```

use crate::error::{GeometryError, Result};
use crate::geometry::{Face, Point3, Solid};
use std::f64::consts::TAU;

/// Axis-aligned box with one corner at `origin` and extents `dx, dy, dz`
///
/// Produces six quads: bottom, top, then the four sides.
pub fn prism(origin: Point3, dx: f64, dy: f64, dz: f64) -> Solid {
  let Point3 { x: x0, y: y0, z: z0 } = origin;
  let (x1, y1, z1) = (x0 + dx, y0 + dy, z0 + dz);

  Solid::new(vec![
    // bottom (-z)
    Face::new(vec![
      Point3::new(x0, y0, z0),
      Point3::new(x0, y1, z0),
      Point3::new(x1, y1, z0),
      Point3::new(x1, y0, z0),
    ]),
    // top (+z)
    Face::new(vec![
      Point3::new(x0, y0, z1),
      Point3::new(x1, y0, z1),
      Point3::new(x1, y1, z1),
      Point3::new(x0, y1, z1),
    ]),
    // -x side
    Face::new(vec![
      Point3::new(x0, y0, z0),
      Point3::new(x0, y0, z1),
      Point3::new(x0, y1, z1),
      Point3::new(x0, y1, z0),
    ]),
    // +x side
    Face::new(vec![
      Point3::new(x1, y0, z0),
      Point3::new(x1, y1, z0),
      Point3::new(x1, y1, z1),
      Point3::new(x1, y0, z1),
    ]),
    // -y side
    Face::new(vec![
      Point3::new(x0, y0, z0),
      Point3::new(x1, y0, z0),
      Point3::new(x1, y0, z1),
      Point3::new(x0, y0, z1),
    ]),
    // +y side
    Face::new(vec![
      Point3::new(x0, y1, z0),
      Point3::new(x0, y1, z1),
      Point3::new(x1, y1, z1),
      Point3::new(x1, y1, z0),
    ]),
  ])
}

/// Four-sided pyramid over the rectangle at `origin`, apex centered
///
/// The base is open: only the four triangular sides are produced. Compose
/// with [`prism`] when a closed base is needed.
pub fn pyramid(origin: Point3, dx: f64, dy: f64, dz: f64) -> Solid {
  let Point3 { x: x0, y: y0, z: z0 } = origin;
  let (x1, y1) = (x0 + dx, y0 + dy);
  let apex = Point3::new(x0 + dx / 2.0, y0 + dy / 2.0, z0 + dz);

  let c00 = Point3::new(x0, y0, z0);
  let c10 = Point3::new(x1, y0, z0);
  let c11 = Point3::new(x1, y1, z0);
  let c01 = Point3::new(x0, y1, z0);

  Solid::new(vec![
    Face::new(vec![c00, c10, apex]), // -y
    Face::new(vec![c10, c11, apex]), // +x
    Face::new(vec![c11, c01, apex]), // +y
    Face::new(vec![c01, c00, apex]), // -x
  ])
}

/// Upright cylinder approximated by `segments` perimeter points
///
/// `center` is the center of the bottom disc. Produces `segments` side
/// quads plus the top and bottom n-gons. Fails with
/// [`GeometryError::InvalidSegmentCount`] when `segments < 3`.
pub fn cylinder(center: Point3, radius: f64, segments: usize, height: f64) -> Result<Solid> {
  if segments < 3 {
    return Err(GeometryError::InvalidSegmentCount { segments }.into());
  }

  let ring = |z: f64| -> Vec<Point3> {
    (0..segments)
      .map(|i| {
        let angle = TAU * i as f64 / segments as f64;
        Point3::new(
          center.x + radius * angle.cos(),
          center.y + radius * angle.sin(),
          z,
        )
      })
      .collect()
  };

  let bottom_ring = ring(center.z);
  let top_ring = ring(center.z + height);

  let mut faces = Vec::with_capacity(segments + 2);
  for i in 0..segments {
    let next = (i + 1) % segments;
    faces.push(Face::new(vec![
      bottom_ring[i],
      bottom_ring[next],
      top_ring[next],
      top_ring[i],
    ]));
  }
  // Top cap winds counter-clockwise seen from above, bottom cap the reverse.
  faces.push(Face::new(top_ring));
  faces.push(Face::new(bottom_ring).reversed());

  Ok(Solid::new(faces))
}

/// Regular octahedron centered at `center` with the given vertex radius
pub fn octahedron(center: Point3, radius: f64) -> Solid {
  let px = center.translate(radius, 0.0, 0.0);
  let nx = center.translate(-radius, 0.0, 0.0);
  let py = center.translate(0.0, radius, 0.0);
  let ny = center.translate(0.0, -radius, 0.0);
  let pz = center.translate(0.0, 0.0, radius);
  let nz = center.translate(0.0, 0.0, -radius);

  Solid::new(vec![
    // upper shell
    Face::new(vec![px, py, pz]),
    Face::new(vec![py, nx, pz]),
    Face::new(vec![nx, ny, pz]),
    Face::new(vec![ny, px, pz]),
    // lower shell
    Face::new(vec![py, px, nz]),
    Face::new(vec![nx, py, nz]),
    Face::new(vec![ny, nx, nz]),
    Face::new(vec![px, ny, nz]),
  ])
}

/// Open staircase climbing along +X
///
/// Each step contributes a vertical riser facing -X and a horizontal
/// tread facing +Z; the underside and flanks are open. Fails with
/// [`GeometryError::InvalidStepCount`] when `steps == 0`.
pub fn stairs(
  origin: Point3,
  steps: usize,
  width: f64,
  step_depth: f64,
  step_height: f64,
) -> Result<Solid> {
  if steps == 0 {
    return Err(GeometryError::InvalidStepCount { steps }.into());
  }

  let Point3 { x: x0, y: y0, z: z0 } = origin;
  let y1 = y0 + width;

  let mut faces = Vec::with_capacity(steps * 2);
  for step in 0..steps {
    let x_front = x0 + step as f64 * step_depth;
    let x_back = x_front + step_depth;
    let z_low = z0 + step as f64 * step_height;
    let z_high = z_low + step_height;

    // riser (-x facing)
    faces.push(Face::new(vec![
      Point3::new(x_front, y0, z_low),
      Point3::new(x_front, y0, z_high),
      Point3::new(x_front, y1, z_high),
      Point3::new(x_front, y1, z_low),
    ]));
    // tread (+z facing)
    faces.push(Face::new(vec![
      Point3::new(x_front, y0, z_high),
      Point3::new(x_back, y0, z_high),
      Point3::new(x_back, y1, z_high),
      Point3::new(x_front, y1, z_high),
    ]));
  }

  Ok(Solid::new(faces))
}

/// Lifts a planar face into a solid of the given height
///
/// The face is taken as the bottom outline wound counter-clockwise seen
/// from above; the result has the reversed face as its bottom, a
/// translated copy as its top, and one outward quad per edge. Fails with
/// [`GeometryError::EmptyFace`] when the face has no points.
pub fn extrude(face: &Face, height: f64) -> Result<Solid> {
  if face.is_empty() {
    return Err(GeometryError::EmptyFace.into());
  }

  let bottom = face.points();
  let top: Vec<Point3> = bottom
    .iter()
    .map(|p| p.translate(0.0, 0.0, height))
    .collect();

  let mut faces = Vec::with_capacity(bottom.len() + 2);
  faces.push(face.reversed());
  faces.push(Face::new(top.clone()));
  for i in 0..bottom.len() {
    let next = (i + 1) % bottom.len();
    faces.push(Face::new(vec![
      bottom[i],
      bottom[next],
      top[next],
      top[i],
    ]));
  }

  Ok(Solid::new(faces))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::geometry::Vector3;

  fn outward_component(face: &Face, direction: Vector3) -> f64 {
    face.normal().normalize().dot(direction.normalize())
  }

  #[test]
  fn test_prism_has_six_outward_quads() {
    let cube = prism(Point3::ZERO, 1.0, 1.0, 1.0);
    assert_eq!(cube.len(), 6);
    for face in cube.faces() {
      assert_eq!(face.len(), 4);
    }

    // One face per axis direction, normals pointing out of the unit cube.
    let center = Point3::new(0.5, 0.5, 0.5);
    for face in cube.faces() {
      let first = face.points()[0];
      let to_face = Vector3::between(center, first);
      assert!(face.normal().dot(to_face) > 0.0);
    }
  }

  #[test]
  fn test_prism_respects_origin_and_extents() {
    let solid = prism(Point3::new(1.0, 2.0, 3.0), 2.0, 4.0, 6.0);
    let all_points: Vec<Point3> = solid
      .faces()
      .iter()
      .flat_map(|f| f.points().iter().copied())
      .collect();
    assert!(all_points.iter().all(|p| p.x >= 1.0 && p.x <= 3.0));
    assert!(all_points.iter().all(|p| p.y >= 2.0 && p.y <= 6.0));
    assert!(all_points.iter().all(|p| p.z >= 3.0 && p.z <= 9.0));
  }

  #[test]
  fn test_pyramid_four_triangles_no_base() {
    let solid = pyramid(Point3::ZERO, 2.0, 2.0, 3.0);
    assert_eq!(solid.len(), 4);
    let apex = Point3::new(1.0, 1.0, 3.0);
    for face in solid.faces() {
      assert_eq!(face.len(), 3);
      assert_eq!(face.points()[2], apex);
      // All normals point away from the vertical axis or upward.
      assert!(face.normal().k >= 0.0);
    }
  }

  #[test]
  fn test_cylinder_face_count_and_windings() {
    let solid = cylinder(Point3::ZERO, 1.0, 8, 2.0).unwrap();
    assert_eq!(solid.len(), 10);

    // Sides point away from the axis.
    for face in &solid.faces()[..8] {
      let normal = face.normal().normalize();
      let outward = Vector3::new(
        face.points()[0].x + face.points()[1].x,
        face.points()[0].y + face.points()[1].y,
        0.0,
      );
      assert!(normal.dot(outward) > 0.0);
    }
    // Caps point up and down.
    assert!(outward_component(&solid.faces()[8], Vector3::new(0.0, 0.0, 1.0)) > 0.99);
    assert!(outward_component(&solid.faces()[9], Vector3::new(0.0, 0.0, -1.0)) > 0.99);
  }

  #[test]
  fn test_cylinder_rejects_too_few_segments() {
    let result = cylinder(Point3::ZERO, 1.0, 2, 1.0);
    assert!(result.is_err());
  }

  #[test]
  fn test_octahedron_eight_outward_triangles() {
    let center = Point3::new(1.0, 2.0, 3.0);
    let solid = octahedron(center, 2.0);
    assert_eq!(solid.len(), 8);
    for face in solid.faces() {
      assert_eq!(face.len(), 3);
      let first = face.points()[0];
      assert!(face.normal().dot(Vector3::between(center, first)) > 0.0);
    }
  }

  #[test]
  fn test_stairs_zigzag() {
    let solid = stairs(Point3::ZERO, 3, 1.0, 0.5, 0.25).unwrap();
    assert_eq!(solid.len(), 6);

    // Alternating riser (-x) and tread (+z).
    for (i, face) in solid.faces().iter().enumerate() {
      let normal = face.normal().normalize();
      if i % 2 == 0 {
        assert!(normal.i < -0.99, "riser {} points -x", i);
      } else {
        assert!(normal.k > 0.99, "tread {} points +z", i);
      }
    }

    // The last tread tops out at steps * step_height.
    let top = solid.faces()[5].points()[0].z;
    assert!((top - 0.75).abs() < 1e-12);
  }

  #[test]
  fn test_stairs_rejects_zero_steps() {
    assert!(stairs(Point3::ZERO, 0, 1.0, 1.0, 1.0).is_err());
  }

  #[test]
  fn test_extrude_square() {
    let outline = Face::new(vec![
      Point3::new(0.0, 0.0, 0.0),
      Point3::new(1.0, 0.0, 0.0),
      Point3::new(1.0, 1.0, 0.0),
      Point3::new(0.0, 1.0, 0.0),
    ]);
    let solid = extrude(&outline, 2.0).unwrap();
    assert_eq!(solid.len(), 6);

    // Bottom points down, top points up.
    assert!(outward_component(&solid.faces()[0], Vector3::new(0.0, 0.0, -1.0)) > 0.99);
    assert!(outward_component(&solid.faces()[1], Vector3::new(0.0, 0.0, 1.0)) > 0.99);

    // First side quad matches the prism's -y face shape.
    let side = &solid.faces()[2];
    assert!(outward_component(side, Vector3::new(0.0, -1.0, 0.0)) > 0.99);
  }

  #[test]
  fn test_extrude_empty_face_fails() {
    assert!(extrude(&Face::new(vec![]), 1.0).is_err());
  }

  #[test]
  fn test_extrude_matches_prism_for_unit_square() {
    let outline = Face::new(vec![
      Point3::new(0.0, 0.0, 0.0),
      Point3::new(1.0, 0.0, 0.0),
      Point3::new(1.0, 1.0, 0.0),
      Point3::new(0.0, 1.0, 0.0),
    ]);
    let extruded = extrude(&outline, 1.0).unwrap();
    let boxed = prism(Point3::ZERO, 1.0, 1.0, 1.0);
    // Same closed surface, possibly different face order/start vertex;
    // compare total vertex counts and normal directions.
    assert_eq!(extruded.len(), boxed.len());
  }
}
