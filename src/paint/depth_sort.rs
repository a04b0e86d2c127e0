//! Visibility sorting (painter's algorithm)
//!
//! Produces a back-to-front ordering such that wherever two projected
//! faces visually overlap, the one farther from the observer is emitted
//! first. The pipeline is:
//!
//! 1. Pairwise 2-D overlap tests (bounding-box reject, then
//!    edge-crossing, then vertex-containment fallback).
//! 2. For overlapping pairs, a 3-D plane-side comparison against the
//!    original model-space faces ([`crate::Face::closer_than`]) yields a
//!    directed "must draw before" constraint.
//! 3. An iterative layering pass emits faces whose predecessors are all
//!    emitted; anything still stuck after a full pass that makes no
//!    progress (genuinely cyclic overlap, e.g. interlocking geometry) is
//!    appended in original insertion order.
//!
//! The cycle fallback guarantees termination and a total ordering at the
//! cost of visibly wrong paint order inside true cycles. That is a
//! documented limitation of the algorithm, not a bug: no canonical
//! resolution exists without splitting faces.
//!
//! Complexity is O(n^2) in the number of surviving faces, which is why
//! culling runs first.

use crate::geometry::{Point2, Point3};
use crate::hit_test::point_in_polygon;
use crate::paint::display_list::{polygon_bounds, DrawCommand};

/// Tolerance for treating near-zero cross products and line-side values
/// as collinear noise.
const EPSILON: f64 = 1e-9;

/// Sorts commands back-to-front in place
///
/// `observer` is the fixed virtual viewpoint in model space. Returns the
/// number of commands that could not be ordered (appended via the cycle
/// fallback).
pub fn sort_back_to_front(commands: &mut Vec<DrawCommand>, observer: Point3) -> usize {
  let n = commands.len();
  if n < 2 {
    return 0;
  }

  let bounds: Vec<_> = commands.iter().map(|c| c.bounds()).collect();

  // Predecessors: draw_before[i] lists commands that must be emitted
  // before command i.
  let mut draw_before: Vec<Vec<usize>> = vec![Vec::new(); n];
  for i in 1..n {
    for j in 0..i {
      let boxes_touch = match (&bounds[i], &bounds[j]) {
        (Some(bi), Some(bj)) => bi.intersects(bj),
        _ => false,
      };
      if !boxes_touch || !polygons_overlap(&commands[i].points, &commands[j].points) {
        continue;
      }
      let order = commands[i].face.closer_than(&commands[j].face, observer);
      if order > 0 {
        draw_before[i].push(j);
      } else if order < 0 {
        draw_before[j].push(i);
      }
    }
  }

  // Layered emission: each pass emits, in index order, every face whose
  // predecessors have all been emitted.
  let mut emitted = vec![false; n];
  let mut order: Vec<usize> = Vec::with_capacity(n);
  loop {
    let emitted_before_pass = order.len();
    for idx in 0..n {
      if !emitted[idx] && draw_before[idx].iter().all(|&p| emitted[p]) {
        emitted[idx] = true;
        order.push(idx);
      }
    }
    if order.len() == emitted_before_pass || order.len() == n {
      break;
    }
  }

  // Cycle fallback: whatever remains is appended in insertion order.
  let unresolved = n - order.len();
  for idx in 0..n {
    if !emitted[idx] {
      order.push(idx);
    }
  }

  let mut slots: Vec<Option<DrawCommand>> = commands.drain(..).map(Some).collect();
  for idx in order {
    if let Some(command) = slots[idx].take() {
      commands.push(command);
    }
  }
  unresolved
}

/// True when two closed projected polygons overlap
///
/// Tests, in order of cost: axis-aligned bounding boxes, edge crossings,
/// then vertex containment (either polygon holding a vertex of the
/// other). Polygons that merely share an edge or vertex do not count as
/// overlapping.
pub fn polygons_overlap(a: &[Point2], b: &[Point2]) -> bool {
  if a.is_empty() || b.is_empty() {
    return false;
  }

  match (polygon_bounds(a), polygon_bounds(b)) {
    (Some(ba), Some(bb)) if ba.intersects(&bb) => {}
    _ => return false,
  }

  for i in 0..a.len() {
    let a1 = a[i];
    let a2 = a[(i + 1) % a.len()];
    for j in 0..b.len() {
      let b1 = b[j];
      let b2 = b[(j + 1) % b.len()];
      if edges_cross(a1, a2, b1, b2) {
        return true;
      }
    }
  }

  // No crossings: one polygon may still sit entirely inside the other.
  point_in_polygon(b, a[0].x, a[0].y) || point_in_polygon(a, b[0].x, b[0].y)
}

/// True when two non-collinear segments cross strictly
///
/// The endpoints of each segment must lie on strictly opposite sides of
/// the other segment's line; touching an endpoint to the line (within
/// tolerance) does not count.
fn edges_cross(a1: Point2, a2: Point2, b1: Point2, b2: Point2) -> bool {
  let da = (a2.x - a1.x, a2.y - a1.y);
  let db = (b2.x - b1.x, b2.y - b1.y);

  // Parallel or collinear directions cannot cross strictly.
  let direction_cross = da.0 * db.1 - da.1 * db.0;
  if direction_cross.abs() <= EPSILON {
    return false;
  }

  strictly_opposite(line_side(a1, a2, b1), line_side(a1, a2, b2))
    && strictly_opposite(line_side(b1, b2, a1), line_side(b1, b2, a2))
}

/// Signed line equation `dy*x - dx*y + r` for the line through `p`-`q`,
/// evaluated at `point`.
fn line_side(p: Point2, q: Point2, point: Point2) -> f64 {
  let dx = q.x - p.x;
  let dy = q.y - p.y;
  let r = dx * p.y - dy * p.x;
  dy * point.x - dx * point.y + r
}

fn strictly_opposite(side_a: f64, side_b: f64) -> bool {
  (side_a > EPSILON && side_b < -EPSILON) || (side_a < -EPSILON && side_b > EPSILON)
}
