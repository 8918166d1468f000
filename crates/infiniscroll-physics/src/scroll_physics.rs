//! Scroll position state machine: drag tracking, inertia and boundary response.

use crate::movement::{
    approximately, lerp_clamped, rubber_delta, smooth_damp, MovementType, PhysicsConfig, EPSILON,
    VELOCITY_BLEND_RATE,
};

/// Result of assigning a new scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionChange {
    pub previous: f32,
    pub current: f32,
}

impl PositionChange {
    pub fn delta(&self) -> f32 {
        self.current - self.previous
    }

    /// Whether observers should hear about this change.
    pub fn is_significant(&self) -> bool {
        self.delta().abs() > EPSILON
    }
}

/// Scroll state of one list plus the rules that move it.
///
/// Every method that writes the position returns a [`PositionChange`] so the
/// owner can reposition cells and decide whether to notify listeners. The
/// boundary offset is supplied by the owner as a closure, since only the
/// owner knows which cells are materialized.
#[derive(Debug, Clone)]
pub struct ScrollPhysics {
    config: PhysicsConfig,
    position: f32,
    velocity: f32,
    dragging: bool,
    drag_start_position: f32,
    drag_start_pointer: f32,
    last_drag_pointer: f32,
}

impl Default for ScrollPhysics {
    fn default() -> Self {
        Self::new(PhysicsConfig::default())
    }
}

impl ScrollPhysics {
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            config,
            position: 0.0,
            velocity: 0.0,
            dragging: false,
            drag_start_position: 0.0,
            drag_start_pointer: 0.0,
            last_drag_pointer: 0.0,
        }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Programmatic jump. Cancels any residual velocity.
    pub fn set_position(&mut self, position: f32) -> PositionChange {
        self.velocity = 0.0;
        self.assign(position)
    }

    /// Moves the position by `delta` without touching velocity.
    ///
    /// Used to compensate content inserted at the anchor end so that the
    /// visible cells stay put on screen.
    pub fn offset_by(&mut self, delta: f32) -> PositionChange {
        self.assign(self.position + delta)
    }

    /// Returns to the neutral state: position zero, at rest, not dragging.
    pub fn reset(&mut self) -> PositionChange {
        self.velocity = 0.0;
        self.dragging = false;
        self.drag_start_position = 0.0;
        self.drag_start_pointer = 0.0;
        self.last_drag_pointer = 0.0;
        self.assign(0.0)
    }

    pub fn pointer_down(&mut self) {
        self.velocity = 0.0;
    }

    /// Starts a drag with the pointer at local height `pointer_y`.
    pub fn begin_drag(&mut self, pointer_y: f32) {
        self.dragging = true;
        self.velocity = 0.0;
        self.drag_start_position = self.position;
        self.drag_start_pointer = pointer_y;
        self.last_drag_pointer = pointer_y;
    }

    /// Follows the pointer during a drag.
    ///
    /// Returns `None` when no drag is in progress.
    pub fn drag(
        &mut self,
        pointer_y: f32,
        dt: f32,
        viewport_extent: f32,
        mut bounds: impl FnMut(f32) -> f32,
    ) -> Option<PositionChange> {
        if !self.dragging {
            return None;
        }

        let sensitivity = self.config.scroll_sensitivity;
        let total_delta = (pointer_y - self.drag_start_pointer) * sensitivity;
        let mut target = self.drag_start_position + total_delta;
        let offset = self.offset_at(&mut bounds, target);

        match self.config.movement {
            MovementType::Elastic if !approximately(offset, 0.0) => {
                target += offset - rubber_delta(offset, viewport_extent);
            }
            MovementType::Clamped => target += offset,
            _ => {}
        }

        if dt > 0.0 {
            let frame_delta = (pointer_y - self.last_drag_pointer) * sensitivity;
            let frame_velocity = frame_delta / dt;
            self.velocity = lerp_clamped(self.velocity, frame_velocity, dt * VELOCITY_BLEND_RATE);
        }

        self.last_drag_pointer = pointer_y;
        Some(self.assign(target))
    }

    /// Ends the drag. A release with a negligible last-frame movement means
    /// the finger stopped before lifting, so no fling follows.
    pub fn end_drag(&mut self, frame_delta: f32) {
        self.dragging = false;
        if frame_delta.abs() < EPSILON {
            self.velocity = 0.0;
        }
    }

    /// Advances free movement by `dt` seconds.
    ///
    /// Returns `None` while dragging or when already at rest inside bounds.
    pub fn tick(&mut self, dt: f32, mut bounds: impl FnMut(f32) -> f32) -> Option<PositionChange> {
        if self.dragging {
            return None;
        }

        let offset = self.offset_at(&mut bounds, self.position);
        if offset.abs() <= EPSILON && self.velocity.abs() <= EPSILON {
            return None;
        }

        let elastic = self.config.movement == MovementType::Elastic;
        let change = if elastic && !approximately(offset, 0.0) {
            let target = self.position + offset;
            let next = smooth_damp(
                self.position,
                target,
                &mut self.velocity,
                self.config.elasticity,
                f32::INFINITY,
                dt,
            );
            self.assign(next)
        } else if self.config.inertia {
            self.velocity *= self.config.deceleration_rate.powf(dt);
            if self.velocity.abs() < EPSILON {
                self.velocity = 0.0;
            }

            let mut next = self.position + self.velocity * dt;
            if self.config.movement == MovementType::Clamped {
                let overrun = self.offset_at(&mut bounds, next);
                next += overrun;
                if !approximately(overrun, 0.0) {
                    self.velocity = 0.0;
                }
            }
            self.assign(next)
        } else {
            self.velocity = 0.0;
            if approximately(offset, 0.0) {
                return None;
            }
            self.assign(self.position + offset)
        };

        log::trace!(
            "scroll tick: {:.3} -> {:.3} (offset {:.3}, velocity {:.3})",
            change.previous,
            change.current,
            offset,
            self.velocity
        );
        Some(change)
    }

    fn offset_at(&self, bounds: &mut impl FnMut(f32) -> f32, position: f32) -> f32 {
        match self.config.movement {
            MovementType::Unrestricted => 0.0,
            MovementType::Elastic | MovementType::Clamped => bounds(position),
        }
    }

    fn assign(&mut self, position: f32) -> PositionChange {
        let previous = self.position;
        self.position = position;
        PositionChange {
            previous,
            current: position,
        }
    }
}

#[cfg(test)]
#[path = "tests/scroll_physics_tests.rs"]
mod tests;
