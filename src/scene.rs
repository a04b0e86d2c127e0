//! Scene assembly and frame preparation
//!
//! The [`SceneEngine`] owns the model: an ordered list of colored faces,
//! some grouped into solids. `prepare` runs the full pipeline over that
//! list (project, shade, cull, depth-sort) and returns an immutable
//! [`PreparedFrame`] behind an `Arc`, memoizing the last frame so that
//! repeated prepares with an unchanged scene and identical parameters
//! are free.
//!
//! Engines are configured through [`SceneEngine::builder`]; per-frame
//! behavior (which pipeline stages run, whether the cache is consulted)
//! travels in [`RenderOptions`] so one engine can serve callers with
//! different needs.

use crate::color::Color;
use crate::debug::{self, DebugToggles};
use crate::error::{FrameError, Result};
use crate::geometry::{Face, Point3, Solid, Vector3};
use crate::paint::culling::{is_back_facing, touches_viewport};
use crate::paint::depth_sort::sort_back_to_front;
use crate::paint::display_list::{DrawCommand, FrameStats, PreparedFrame};
use crate::projection::Projector;
use std::sync::Arc;

/// Default observer position for visibility ordering.
pub const DEFAULT_OBSERVER: Point3 = Point3::new(-10.0, -10.0, 20.0);

/// Something that can be added to a scene
///
/// Lets [`SceneEngine::add`] accept a bare face or a whole solid through
/// one entry point.
#[derive(Debug, Clone)]
pub enum SceneItem {
  Face(Face),
  Solid(Solid),
}

impl From<Face> for SceneItem {
  fn from(face: Face) -> Self {
    SceneItem::Face(face)
  }
}

impl From<Solid> for SceneItem {
  fn from(solid: Solid) -> Self {
    SceneItem::Solid(solid)
  }
}

/// One face in the scene, with its assigned ids and fill color
#[derive(Debug, Clone)]
struct SceneEntry {
  id: u64,
  face: Face,
  color: Color,
  solid_id: Option<u64>,
}

/// Per-frame pipeline switches
///
/// All stages default to on. Disabling a stage changes the output, not
/// just the cost: without depth sorting faces paint in insertion order,
/// without culling hidden faces survive into the command list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderOptions {
  /// Run the painter's-algorithm visibility sort
  pub enable_depth_sorting: bool,
  /// Drop faces seen from behind
  pub enable_backface_culling: bool,
  /// Drop faces entirely outside the viewport
  pub enable_bounds_checking: bool,
  /// Reuse the memoized frame when scene and parameters are unchanged
  pub enable_prepared_frame_cache: bool,
}

impl Default for RenderOptions {
  fn default() -> Self {
    Self {
      enable_depth_sorting: true,
      enable_backface_culling: true,
      enable_bounds_checking: true,
      enable_prepared_frame_cache: true,
    }
  }
}

/// Everything the memoized frame depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrameKey {
  content_version: u64,
  width: u32,
  height: u32,
  options: RenderOptions,
}

/// The single cache slot: a key and the frame it produced
///
/// Replaced wholesale on every miss, so the key and frame can never
/// disagree.
#[derive(Debug, Clone)]
struct FrameCache {
  key: FrameKey,
  frame: Arc<PreparedFrame>,
}

/// Builds and memoizes frames from an ordered set of colored faces
///
/// # Examples
///
/// ```
/// use isorender::{Color, RenderOptions, SceneEngine, solids, Point3};
///
/// let mut engine = SceneEngine::new();
/// engine.add(
///   solids::prism(Point3::ZERO, 1.0, 1.0, 1.0),
///   Color::new(100.0, 140.0, 180.0),
/// );
///
/// let version = engine.revision();
/// let frame = engine
///   .prepare(version, 800, 600, &RenderOptions::default())
///   .unwrap();
/// assert_eq!(frame.commands.len(), 3); // visible faces of the cube
/// ```
#[derive(Debug)]
pub struct SceneEngine {
  entries: Vec<SceneEntry>,
  next_id: u64,
  next_solid_id: u64,
  revision: u64,
  projector: Projector,
  observer: Point3,
  cache: Option<FrameCache>,
  toggles: DebugToggles,
}

impl Default for SceneEngine {
  fn default() -> Self {
    Self::builder().build()
  }
}

impl SceneEngine {
  /// Creates an engine with default projection, lighting, and observer
  pub fn new() -> Self {
    Self::default()
  }

  /// Starts configuring an engine
  pub fn builder() -> SceneEngineBuilder {
    SceneEngineBuilder::default()
  }

  /// Adds a face or a solid to the scene
  ///
  /// Returns the assigned id: the face id for a bare face, the shared
  /// solid id for a solid. A solid's faces are inserted in back-to-front
  /// order by depth hint, so scenes of non-overlapping solids paint
  /// correctly even with depth sorting disabled.
  pub fn add(&mut self, item: impl Into<SceneItem>, color: Color) -> u64 {
    self.revision += 1;
    match item.into() {
      SceneItem::Face(face) => self.push_entry(face, color, None),
      SceneItem::Solid(solid) => {
        let solid_id = self.next_solid_id;
        self.next_solid_id += 1;
        for face in solid.ordered_faces() {
          self.push_entry(face, color, Some(solid_id));
        }
        solid_id
      }
    }
  }

  fn push_entry(&mut self, face: Face, color: Color, solid_id: Option<u64>) -> u64 {
    let id = self.next_id;
    self.next_id += 1;
    self.entries.push(SceneEntry {
      id,
      face,
      color,
      solid_id,
    });
    id
  }

  /// Removes every face and resets id assignment
  pub fn clear(&mut self) {
    self.entries.clear();
    self.next_id = 0;
    self.next_solid_id = 0;
    self.revision += 1;
    self.cache = None;
  }

  /// Number of faces currently in the scene
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// True when the scene holds no faces
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Monotonic counter bumped by every mutation
  ///
  /// Usable directly as the `content_version` for [`SceneEngine::prepare`]
  /// when the engine is the only writer. Callers with out-of-band scene
  /// state can supply their own version instead.
  pub fn revision(&self) -> u64 {
    self.revision
  }

  /// The projector this engine shades and projects with
  pub fn projector(&self) -> &Projector {
    &self.projector
  }

  /// The observer position used for visibility ordering
  pub fn observer(&self) -> Point3 {
    self.observer
  }

  /// Runs the pipeline, or returns the memoized frame
  ///
  /// The returned `Arc` is the cache's own handle: two calls with the
  /// same `content_version`, viewport, and options yield the same
  /// allocation (observable via `Arc::ptr_eq`). With the cache disabled
  /// in `options`, the slot is neither read nor written.
  ///
  /// Fails on a zero-dimension viewport.
  pub fn prepare(
    &mut self,
    content_version: u64,
    width: u32,
    height: u32,
    options: &RenderOptions,
  ) -> Result<Arc<PreparedFrame>> {
    if width == 0 || height == 0 {
      return Err(FrameError::InvalidViewport { width, height }.into());
    }

    let key = FrameKey {
      content_version,
      width,
      height,
      options: *options,
    };
    if options.enable_prepared_frame_cache {
      if let Some(cache) = &self.cache {
        if cache.key == key {
          return Ok(Arc::clone(&cache.frame));
        }
      }
    }

    let mut stats = FrameStats {
      input_faces: self.entries.len(),
      ..FrameStats::default()
    };

    let mut commands: Vec<DrawCommand> = Vec::with_capacity(self.entries.len());
    for entry in &self.entries {
      let points = self.projector.project_face(&entry.face, width, height);
      if options.enable_backface_culling && is_back_facing(&points) {
        stats.backface_culled += 1;
        continue;
      }
      if options.enable_bounds_checking && !touches_viewport(&points, width, height) {
        stats.bounds_culled += 1;
        continue;
      }
      commands.push(DrawCommand {
        id: entry.id,
        color: self.projector.shade(&entry.face, entry.color),
        points,
        face: entry.face.clone(),
        solid_id: entry.solid_id,
      });
    }

    if options.enable_depth_sorting {
      stats.cycle_fallback = sort_back_to_front(&mut commands, self.observer);
    }

    let frame = Arc::new(PreparedFrame {
      commands,
      width,
      height,
      stats,
    });
    debug::report_frame(&self.toggles, &frame);

    if options.enable_prepared_frame_cache {
      self.cache = Some(FrameCache {
        key,
        frame: Arc::clone(&frame),
      });
    }
    Ok(frame)
  }
}

/// Configures a [`SceneEngine`]
///
/// Every knob has a sensible default; set only what differs.
///
/// # Examples
///
/// ```
/// use isorender::{Point3, SceneEngine};
///
/// let engine = SceneEngine::builder()
///   .scale(40.0)
///   .observer(Point3::new(-5.0, -5.0, 10.0))
///   .build();
/// assert_eq!(engine.projector().scale(), 40.0);
/// ```
#[derive(Debug, Clone)]
pub struct SceneEngineBuilder {
  angle: f64,
  scale: f64,
  light_direction: Vector3,
  light_color: Color,
  color_difference: f64,
  observer: Point3,
  toggles: Option<DebugToggles>,
}

impl Default for SceneEngineBuilder {
  fn default() -> Self {
    let projector = Projector::default();
    Self {
      angle: projector.angle(),
      scale: projector.scale(),
      light_direction: crate::projection::DEFAULT_LIGHT_DIRECTION,
      light_color: Color::WHITE,
      color_difference: crate::projection::DEFAULT_COLOR_DIFFERENCE,
      observer: DEFAULT_OBSERVER,
      toggles: None,
    }
  }
}

impl SceneEngineBuilder {
  /// Isometric angle in radians
  pub fn angle(mut self, angle: f64) -> Self {
    self.angle = angle;
    self
  }

  /// Scale in pixels per model unit
  pub fn scale(mut self, scale: f64) -> Self {
    self.scale = scale;
    self
  }

  /// Light direction (any magnitude; normalized on use)
  pub fn light_direction(mut self, light_direction: Vector3) -> Self {
    self.light_direction = light_direction;
    self
  }

  /// Light color used to tint shaded faces
  pub fn light_color(mut self, light_color: Color) -> Self {
    self.light_color = light_color;
    self
  }

  /// Fraction of lightness swung by full-on/full-off lighting
  pub fn color_difference(mut self, color_difference: f64) -> Self {
    self.color_difference = color_difference;
    self
  }

  /// Observer position for visibility ordering
  pub fn observer(mut self, observer: Point3) -> Self {
    self.observer = observer;
    self
  }

  /// Explicit debug toggles instead of reading the environment
  pub fn debug_toggles(mut self, toggles: DebugToggles) -> Self {
    self.toggles = Some(toggles);
    self
  }

  /// Finishes configuration
  pub fn build(self) -> SceneEngine {
    SceneEngine {
      entries: Vec::new(),
      next_id: 0,
      next_solid_id: 0,
      revision: 0,
      projector: Projector::new(
        self.angle,
        self.scale,
        self.light_direction,
        self.light_color,
        self.color_difference,
      ),
      observer: self.observer,
      cache: None,
      toggles: self.toggles.unwrap_or_else(DebugToggles::from_env),
    }
  }
}
