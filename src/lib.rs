//! isorender: an isometric 3-D scene renderer
//!
//! Builds scenes out of faces and solids in a right-handed model space,
//! projects them through a fixed isometric transform, shades them with a
//! single directional light, orders them for the painter's algorithm,
//! and answers point queries against the result.
//!
//! The engine does not rasterize. Its output is a [`PreparedFrame`]: an
//! ordered list of screen-space polygons with shaded colors, ready for
//! any 2-D polygon backend to paint back-to-front.
//!
//! # Quick start
//!
//! ```
//! use isorender::{Color, Point3, RenderOptions, SceneEngine, solids};
//!
//! let mut engine = SceneEngine::new();
//! engine.add(
//!   solids::prism(Point3::ZERO, 1.0, 1.0, 1.0),
//!   Color::new(120.0, 160.0, 200.0),
//! );
//!
//! let frame = engine
//!   .prepare(engine.revision(), 800, 600, &RenderOptions::default())
//!   .unwrap();
//! for command in &frame.commands {
//!   // hand command.points and command.color to a polygon rasterizer
//!   assert!(command.points.len() >= 3);
//! }
//! ```
//!
//! # Degradation contract
//!
//! Malformed geometry never panics or errors once inside the pipeline:
//! degenerate faces project to degenerate outlines, zero normals shade
//! to the base color, unresolvable occlusion cycles fall back to
//! insertion order. Errors are reserved for contract violations at the
//! boundary, such as zero-dimension viewports or invalid solid-builder
//! parameters.

pub mod color;
pub mod debug;
pub mod error;
pub mod geometry;
pub mod paint;
pub mod projection;
pub mod scene;
pub mod solids;
pub mod spatial;

pub use color::{Color, Hsla};
pub use debug::{DebugToggles, FrameSummary};
pub use error::{Error, Result};
pub use geometry::{Face, Point2, Point3, Solid, Vector3};
pub use hit_test::{approximate_hull, find_item_at, find_item_at_indexed, point_in_polygon};
pub use paint::{DrawCommand, FrameStats, PreparedFrame};
pub use projection::{
  Projector, DEFAULT_ANGLE, DEFAULT_COLOR_DIFFERENCE, DEFAULT_LIGHT_DIRECTION, DEFAULT_SCALE,
};
pub use scene::{RenderOptions, SceneEngine, SceneEngineBuilder, SceneItem, DEFAULT_OBSERVER};
pub use spatial::{SpatialIndex, DEFAULT_CELL_SIZE};
