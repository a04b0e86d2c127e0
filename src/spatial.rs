//! Uniform-grid spatial index for hit-test acceleration
//!
//! The grid covers the viewport with fixed-size square cells; each
//! command is registered in every cell its screen-space bounding box
//! overlaps. Queries return the bucket for the single cell containing
//! the point, trading recall precision (bounding boxes over-approximate
//! polygons, so buckets contain false positives for the exact hull test
//! to filter) for O(1) average-case lookup versus the hit-tester's O(n)
//! linear scan.

use crate::error::{FrameError, Result};
use crate::paint::display_list::{DrawCommand, PreparedFrame};
use rustc_hash::FxHashMap;

/// Default grid cell size in pixels.
pub const DEFAULT_CELL_SIZE: f64 = 50.0;

/// Uniform grid mapping screen cells to command slots
///
/// Buckets hold indexes into the prepared frame's command list. A
/// command can appear in several buckets; a single bucket never holds
/// the same slot twice.
///
/// # Examples
///
/// ```
/// use isorender::SpatialIndex;
///
/// let index = SpatialIndex::new(100, 100, 50.0).unwrap();
/// assert!(index.query(10.0, 10.0).is_empty());
/// assert!(index.query(1000.0, 1000.0).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct SpatialIndex {
  width: u32,
  height: u32,
  cell_size: f64,
  columns: u32,
  rows: u32,
  buckets: FxHashMap<(u32, u32), Vec<usize>>,
}

impl SpatialIndex {
  /// Creates an empty grid over a viewport
  ///
  /// Fails loudly on a zero dimension or non-positive cell size; those
  /// are programmer errors at the boundary, not degradable geometry.
  pub fn new(width: u32, height: u32, cell_size: f64) -> Result<Self> {
    if width == 0 || height == 0 {
      return Err(FrameError::InvalidIndexSize { width, height }.into());
    }
    if !(cell_size > 0.0) {
      return Err(FrameError::InvalidCellSize { cell_size }.into());
    }
    let columns = (width as f64 / cell_size).ceil().max(1.0) as u32;
    let rows = (height as f64 / cell_size).ceil().max(1.0) as u32;
    Ok(Self {
      width,
      height,
      cell_size,
      columns,
      rows,
      buckets: FxHashMap::default(),
    })
  }

  /// Builds a grid from every command in a prepared frame
  ///
  /// Slots match positions in `frame.commands`, so paint order can be
  /// recovered from slot order when scanning a bucket.
  pub fn from_frame(frame: &PreparedFrame, cell_size: f64) -> Result<Self> {
    let mut index = Self::new(frame.width, frame.height, cell_size)?;
    for (slot, command) in frame.commands.iter().enumerate() {
      index.insert(slot, command);
    }
    Ok(index)
  }

  /// Registers a command under every cell its bounding box overlaps
  ///
  /// Commands whose box lies entirely outside the viewport register
  /// nowhere; commands with no points are skipped.
  pub fn insert(&mut self, slot: usize, command: &DrawCommand) {
    let Some(bounds) = command.bounds() else {
      return;
    };
    if bounds.max_x < 0.0
      || bounds.max_y < 0.0
      || bounds.min_x > self.width as f64
      || bounds.min_y > self.height as f64
    {
      return;
    }

    let min_col = self.column_of(bounds.min_x.max(0.0));
    let max_col = self.column_of(bounds.max_x.min(self.width as f64));
    let min_row = self.row_of(bounds.min_y.max(0.0));
    let max_row = self.row_of(bounds.max_y.min(self.height as f64));

    for col in min_col..=max_col {
      for row in min_row..=max_row {
        self.buckets.entry((col, row)).or_default().push(slot);
      }
    }
  }

  /// The unsorted bucket for the cell containing `(x, y)`
  ///
  /// Out-of-range coordinates return an empty slice.
  pub fn query(&self, x: f64, y: f64) -> &[usize] {
    if x < 0.0 || y < 0.0 || x > self.width as f64 || y > self.height as f64 {
      return &[];
    }
    let cell = (self.column_of(x), self.row_of(y));
    self.buckets.get(&cell).map(Vec::as_slice).unwrap_or(&[])
  }

  /// Slots registered in every cell the rectangle overlaps
  ///
  /// The rectangle is clamped to the viewport; one entirely outside it
  /// yields nothing. Slots registered in several of the covered cells
  /// appear once per cell, so callers that need uniqueness dedup.
  pub fn query_region(&self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Vec<usize> {
    if max_x < 0.0 || max_y < 0.0 || min_x > self.width as f64 || min_y > self.height as f64 {
      return Vec::new();
    }
    let min_col = self.column_of(min_x.max(0.0));
    let max_col = self.column_of(max_x.min(self.width as f64));
    let min_row = self.row_of(min_y.max(0.0));
    let max_row = self.row_of(max_y.min(self.height as f64));

    let mut slots = Vec::new();
    for col in min_col..=max_col {
      for row in min_row..=max_row {
        if let Some(bucket) = self.buckets.get(&(col, row)) {
          slots.extend_from_slice(bucket);
        }
      }
    }
    slots
  }

  /// Empties every bucket, keeping the grid geometry
  pub fn clear(&mut self) {
    self.buckets.clear();
  }

  /// Grid cell size in pixels
  pub fn cell_size(&self) -> f64 {
    self.cell_size
  }

  fn column_of(&self, x: f64) -> u32 {
    ((x / self.cell_size) as u32).min(self.columns - 1)
  }

  fn row_of(&self, y: f64) -> u32 {
    ((y / self.cell_size) as u32).min(self.rows - 1)
  }
}
