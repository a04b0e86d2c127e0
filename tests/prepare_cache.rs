//! Frame memoization across scene edits and parameter changes.

use isorender::{solids, Color, Point3, RenderOptions, SceneEngine};
use std::sync::Arc;

fn engine_with_cube() -> SceneEngine {
  let mut engine = SceneEngine::new();
  engine.add(solids::prism(Point3::ZERO, 1.0, 1.0, 1.0), Color::WHITE);
  engine
}

#[test]
fn repeated_prepare_returns_the_same_frame() {
  let mut engine = engine_with_cube();
  let options = RenderOptions::default();
  let version = engine.revision();

  let first = engine.prepare(version, 800, 600, &options).unwrap();
  let second = engine.prepare(version, 800, 600, &options).unwrap();
  let third = engine.prepare(version, 800, 600, &options).unwrap();

  assert!(Arc::ptr_eq(&first, &second));
  assert!(Arc::ptr_eq(&second, &third));
}

#[test]
fn scene_edit_invalidates_via_revision() {
  let mut engine = engine_with_cube();
  let options = RenderOptions::default();

  let before = engine.prepare(engine.revision(), 800, 600, &options).unwrap();

  engine.add(
    solids::prism(Point3::new(0.5, 0.5, 0.5), 1.0, 1.0, 1.0),
    Color::WHITE,
  );
  let after = engine.prepare(engine.revision(), 800, 600, &options).unwrap();

  assert!(!Arc::ptr_eq(&before, &after));
  assert!(after.commands.len() > before.commands.len());
}

#[test]
fn viewport_resize_invalidates() {
  let mut engine = engine_with_cube();
  let options = RenderOptions::default();
  let version = engine.revision();

  let small = engine.prepare(version, 800, 600, &options).unwrap();
  let large = engine.prepare(version, 1600, 1200, &options).unwrap();
  assert!(!Arc::ptr_eq(&small, &large));

  // Going back to the first size is a fresh build: only the last frame
  // is remembered.
  let small_again = engine.prepare(version, 800, 600, &options).unwrap();
  assert!(!Arc::ptr_eq(&small, &small_again));
  assert_eq!(small.commands, small_again.commands);
}

#[test]
fn option_change_invalidates() {
  let mut engine = engine_with_cube();
  let version = engine.revision();

  let sorted = engine
    .prepare(version, 800, 600, &RenderOptions::default())
    .unwrap();
  let unsorted = engine
    .prepare(
      version,
      800,
      600,
      &RenderOptions {
        enable_depth_sorting: false,
        ..RenderOptions::default()
      },
    )
    .unwrap();
  assert!(!Arc::ptr_eq(&sorted, &unsorted));
}

#[test]
fn disabled_cache_neither_reads_nor_writes() {
  let mut engine = engine_with_cube();
  let version = engine.revision();
  let cached_options = RenderOptions::default();
  let uncached_options = RenderOptions {
    enable_prepared_frame_cache: false,
    ..RenderOptions::default()
  };

  let cached = engine.prepare(version, 800, 600, &cached_options).unwrap();

  // An uncached prepare with an otherwise identical key builds fresh.
  let uncached = engine.prepare(version, 800, 600, &uncached_options).unwrap();
  assert!(!Arc::ptr_eq(&cached, &uncached));

  // And it must not have clobbered the slot: the cached key still hits.
  let cached_again = engine.prepare(version, 800, 600, &cached_options).unwrap();
  assert!(Arc::ptr_eq(&cached, &cached_again));
}

#[test]
fn clear_bumps_revision_so_stale_frames_cannot_hit() {
  let mut engine = engine_with_cube();
  let options = RenderOptions::default();
  let before_version = engine.revision();
  let before = engine.prepare(before_version, 800, 600, &options).unwrap();
  assert!(!before.commands.is_empty());

  engine.clear();
  assert_ne!(engine.revision(), before_version);

  let after = engine.prepare(engine.revision(), 800, 600, &options).unwrap();
  assert!(after.commands.is_empty());
}
