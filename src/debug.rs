//! Runtime diagnostics
//!
//! Debug behavior is driven by `ISORENDER_*` environment variables,
//! captured once into a [`DebugToggles`] value and reused for the life
//! of an engine. There is no log facade: tracing is a toggle-gated
//! `eprintln!` line per prepared frame, and frame dumps are
//! serde-serialized JSON summaries.
//!
//! Recognized toggles:
//! - `ISORENDER_TRACE_PREPARE` — print one stats line per `prepare`.
//! - `ISORENDER_DUMP_FRAME` — print a JSON [`FrameSummary`] per frame.
//!
//! A toggle is truthy when set to anything other than `0`, `false`, or
//! `off` (case-insensitive).

use crate::paint::display_list::{FrameStats, PreparedFrame};
use serde::Serialize;
use std::collections::HashMap;

const TRACE_PREPARE_KEY: &str = "ISORENDER_TRACE_PREPARE";
const DUMP_FRAME_KEY: &str = "ISORENDER_DUMP_FRAME";

/// Parsed diagnostic toggles
///
/// Captured from the environment via [`DebugToggles::from_env`], or
/// constructed from an explicit map in tests and embedders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugToggles {
  trace_prepare: bool,
  dump_frame: bool,
}

impl DebugToggles {
  /// Parses all `ISORENDER_*` environment variables
  pub fn from_env() -> Self {
    let raw: HashMap<String, String> = std::env::vars()
      .filter(|(k, _)| k.starts_with("ISORENDER_"))
      .collect();
    Self::from_map(&raw)
  }

  /// Constructs toggles from a provided key/value map
  pub fn from_map(raw: &HashMap<String, String>) -> Self {
    Self {
      trace_prepare: truthy(raw.get(TRACE_PREPARE_KEY)),
      dump_frame: truthy(raw.get(DUMP_FRAME_KEY)),
    }
  }

  /// True when per-prepare stats tracing is enabled
  pub fn trace_prepare(&self) -> bool {
    self.trace_prepare
  }

  /// True when JSON frame dumping is enabled
  pub fn dump_frame(&self) -> bool {
    self.dump_frame
  }
}

fn truthy(value: Option<&String>) -> bool {
  match value {
    Some(v) => {
      let lower = v.trim().to_ascii_lowercase();
      !matches!(lower.as_str(), "0" | "false" | "off")
    }
    None => false,
  }
}

/// Serializable snapshot of one draw command
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CommandSnapshot {
  pub id: u64,
  pub point_count: usize,
  pub solid_id: Option<u64>,
  pub color: ColorSnapshot,
}

/// Serializable snapshot of a color
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ColorSnapshot {
  pub r: f64,
  pub g: f64,
  pub b: f64,
  pub a: f64,
}

/// Serializable snapshot of a prepared frame
///
/// A diagnostic surface, not part of the stable rendering API.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FrameSummary {
  pub width: u32,
  pub height: u32,
  pub command_count: usize,
  pub stats: FrameStats,
  pub commands: Vec<CommandSnapshot>,
}

impl FrameSummary {
  /// Snapshots a prepared frame
  pub fn from_frame(frame: &PreparedFrame) -> Self {
    Self {
      width: frame.width,
      height: frame.height,
      command_count: frame.commands.len(),
      stats: frame.stats,
      commands: frame
        .commands
        .iter()
        .map(|c| CommandSnapshot {
          id: c.id,
          point_count: c.points.len(),
          solid_id: c.solid_id,
          color: ColorSnapshot {
            r: c.color.r,
            g: c.color.g,
            b: c.color.b,
            a: c.color.a,
          },
        })
        .collect(),
    }
  }

  /// Renders the summary as a JSON string
  pub fn to_json(&self) -> serde_json::Result<String> {
    serde_json::to_string(self)
  }
}

/// Emits the per-frame diagnostics selected by `toggles`
pub(crate) fn report_frame(toggles: &DebugToggles, frame: &PreparedFrame) {
  if toggles.trace_prepare() {
    eprintln!(
      "isorender: prepare {}x{} faces={} backface_culled={} bounds_culled={} cycle_fallback={} commands={}",
      frame.width,
      frame.height,
      frame.stats.input_faces,
      frame.stats.backface_culled,
      frame.stats.bounds_culled,
      frame.stats.cycle_fallback,
      frame.commands.len(),
    );
  }
  if toggles.dump_frame() {
    if let Ok(json) = FrameSummary::from_frame(frame).to_json() {
      eprintln!("{}", json);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::color::Color;
  use crate::geometry::{Face, Point2};
  use crate::paint::display_list::DrawCommand;

  fn map_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect()
  }

  #[test]
  fn test_toggles_default_off() {
    let toggles = DebugToggles::from_map(&HashMap::new());
    assert!(!toggles.trace_prepare());
    assert!(!toggles.dump_frame());
  }

  #[test]
  fn test_toggles_truthy_values() {
    let toggles = DebugToggles::from_map(&map_of(&[
      ("ISORENDER_TRACE_PREPARE", "1"),
      ("ISORENDER_DUMP_FRAME", "yes"),
    ]));
    assert!(toggles.trace_prepare());
    assert!(toggles.dump_frame());
  }

  #[test]
  fn test_toggles_falsy_values() {
    for falsy in ["0", "false", "off", " OFF ", "False"] {
      let toggles = DebugToggles::from_map(&map_of(&[("ISORENDER_TRACE_PREPARE", falsy)]));
      assert!(!toggles.trace_prepare(), "{:?} should be falsy", falsy);
    }
  }

  #[test]
  fn test_frame_summary_snapshot() {
    let frame = PreparedFrame {
      commands: vec![DrawCommand {
        id: 3,
        points: vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)],
        color: Color::new(10.0, 20.0, 30.0),
        face: Face::new(vec![]),
        solid_id: Some(1),
      }],
      width: 640,
      height: 480,
      stats: FrameStats {
        input_faces: 4,
        backface_culled: 2,
        bounds_culled: 1,
        cycle_fallback: 0,
      },
    };

    let summary = FrameSummary::from_frame(&frame);
    assert_eq!(summary.command_count, 1);
    assert_eq!(summary.commands[0].id, 3);
    assert_eq!(summary.commands[0].point_count, 2);
    assert_eq!(summary.commands[0].solid_id, Some(1));
    assert_eq!(summary.stats.input_faces, 4);

    let json = summary.to_json().unwrap();
    assert!(json.contains("\"width\":640"));
    assert!(json.contains("\"backface_culled\":2"));
  }
}
