//! Scroll physics for infiniscroll
//!
//! Owns the scroll position of a list and moves it under one of three
//! movement models: unrestricted, elastic (rubber-band overscroll with a
//! critically damped snap back) and clamped. Boundary knowledge is not owned
//! here; callers pass a closure that reports how far a candidate position
//! overruns the content bounds.

mod frame_clock;
mod movement;
mod scroll_physics;

pub use frame_clock::*;
pub use movement::*;
pub use scroll_physics::*;

pub mod prelude {
    pub use crate::frame_clock::FrameClock;
    pub use crate::movement::{MovementType, PhysicsConfig};
    pub use crate::scroll_physics::{PositionChange, ScrollPhysics};
}
