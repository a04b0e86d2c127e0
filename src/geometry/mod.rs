//! Geometric model: points, vectors, faces, solids
//!
//! All types here are immutable values in the original (pre-projection)
//! model space. The coordinate system is right-handed with Z up; under
//! the fixed isometric view, +X and +Y recede from the viewer and +Z
//! rises toward it.

pub mod face;
pub mod point;
pub mod solid;
pub mod vector;

pub use face::Face;
pub use point::{Point2, Point3};
pub use solid::Solid;
pub use vector::Vector3;
