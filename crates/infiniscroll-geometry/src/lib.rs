//! Pure geometry for infiniscroll
//!
//! This crate contains the small set of primitives the windowing engine
//! works with: sizes, rects, padding, and the vertical edge predicates that
//! decide whether a cell lies inside, above or below its container.

mod edges;
mod geometry;

pub use edges::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::edges::{Edge, VerticalSpan};
    pub use crate::geometry::{Padding, Point, Rect, Size};
}
