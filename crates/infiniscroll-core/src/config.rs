use infiniscroll_geometry::Padding;
use infiniscroll_physics::PhysicsConfig;

use crate::placement::Placement;

/// Configuration for a [`ScrollView`](crate::ScrollView).
///
/// Build with struct update syntax:
///
/// ```
/// use infiniscroll_core::{Padding, Placement, ScrollViewConfig};
///
/// let config = ScrollViewConfig {
///     placement: Placement::TopToBottom,
///     spacing: 8.0,
///     padding: Padding::symmetric(12.0, 4.0),
///     ..Default::default()
/// };
/// assert_eq!(config.physics.elasticity, 0.1);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollViewConfig {
    /// Inset between the container and its cells. Top and bottom padding
    /// also set the rest position of the terminal cells.
    pub padding: Padding,

    /// Gap between adjacent cells.
    pub spacing: f32,

    /// Which end of the data the list grows from.
    pub placement: Placement,

    pub physics: PhysicsConfig,
}
