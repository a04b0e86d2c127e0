//! The paint pipeline: display lists, culling, and visibility sorting

pub mod culling;
pub mod depth_sort;
pub mod display_list;

pub use culling::{is_back_facing, touches_viewport};
pub use depth_sort::{polygons_overlap, sort_back_to_front};
pub use display_list::{polygon_bounds, Bounds2, DrawCommand, FrameStats, PreparedFrame};
