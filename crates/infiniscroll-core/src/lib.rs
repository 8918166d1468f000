//! Windowing and placement engine for virtualized vertical lists
//!
//! Only the data items that intersect the viewport (plus a small lookahead
//! band) are materialized into views rented from a [`CellPool`]. As the list
//! scrolls, a [`VisibilityMaintainer`] evicts cells that left the viewport and
//! creates the neighbours that are about to enter it, one change per tick.

mod config;
mod error;
mod placement;
mod pool;
mod view;
mod visibility;
mod window;

pub use config::*;
pub use error::*;
pub use placement::*;
pub use pool::*;
pub use view::*;
pub use visibility::*;
pub use window::*;

pub use infiniscroll_geometry::{Edge, Padding, Point, Rect, Size, VerticalSpan};
pub use infiniscroll_physics::{MovementType, PhysicsConfig};

pub mod prelude {
    pub use crate::config::ScrollViewConfig;
    pub use crate::error::ScrollError;
    pub use crate::placement::Placement;
    pub use crate::pool::{CellPool, CellView, KeyedPool, StackPool};
    pub use crate::view::{ListenerId, PointerButton, ScrollView, VisibleCell};
    pub use infiniscroll_geometry::{Padding, Point, Size};
    pub use infiniscroll_physics::{MovementType, PhysicsConfig};
}

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;
