//! Movement models and the curves they are built from.

/// Position changes at or below this threshold are treated as noise.
pub const EPSILON: f32 = 0.001;

/// Damping constant of the rubber-band curve.
const RUBBER_BAND_DAMPING: f32 = 0.55;

/// Blend factor per second for the drag velocity moving average.
pub const VELOCITY_BLEND_RATE: f32 = 10.0;

/// How the scroll position reacts when content is pushed past its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovementType {
    /// No boundary offset is ever applied.
    Unrestricted,
    /// Overrun is attenuated while dragging and springs back afterwards.
    #[default]
    Elastic,
    /// Overrun is subtracted outright; content hard-stops at the edge.
    Clamped,
}

/// Configuration for scroll physics.
#[derive(Clone, Debug, PartialEq)]
pub struct PhysicsConfig {
    pub movement: MovementType,

    /// Smooth time of the elastic snap back, in seconds.
    pub elasticity: f32,

    /// Whether released drags keep moving with decaying velocity.
    pub inertia: bool,

    /// Fraction of velocity left after one second of free movement.
    pub deceleration_rate: f32,

    /// Multiplier applied to pointer deltas while dragging.
    pub scroll_sensitivity: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            movement: MovementType::Elastic,
            elasticity: 0.1,
            inertia: true,
            deceleration_rate: 0.03,
            scroll_sensitivity: 1.0,
        }
    }
}

/// Rubber-band attenuation of an overrun against a view of `view_size`.
///
/// Grows roughly linearly for small overruns and saturates at `view_size`.
pub fn rubber_delta(overrun: f32, view_size: f32) -> f32 {
    if view_size <= 0.0 {
        return 0.0;
    }
    (1.0 - 1.0 / (overrun.abs() * RUBBER_BAND_DAMPING / view_size + 1.0))
        * view_size
        * sign(overrun)
}

/// Critically damped spring step from `current` toward `target`.
///
/// `velocity` is carried between calls. The result never overshoots the
/// target.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    max_speed: f32,
    dt: f32,
) -> f32 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(0.0001);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let max_change = max_speed * smooth_time;
    let change = (current - target).clamp(-max_change, max_change);
    let limited_target = current - change;

    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = limited_target + (change + temp) * decay;

    // Prevent overshooting the original target.
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = (output - target) / dt;
    }

    output
}

/// Linear interpolation with `t` clamped to `[0, 1]`.
#[inline]
pub fn lerp_clamped(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t.clamp(0.0, 1.0)
}

/// Float comparison tolerant of accumulated rounding.
#[inline]
pub fn approximately(a: f32, b: f32) -> bool {
    (b - a).abs() < (1e-6 * a.abs().max(b.abs())).max(f32::EPSILON * 8.0)
}

/// Sign that maps zero to +1, matching the rubber-band curve's needs.
#[inline]
fn sign(value: f32) -> f32 {
    if value >= 0.0 {
        1.0
    } else {
        -1.0
    }
}
