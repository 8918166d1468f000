use super::*;

const FRAME: f32 = 1.0 / 60.0;
const VIEWPORT: f32 = 500.0;

/// Content may not move up past zero: any positive position overruns.
fn anchored_at_zero(position: f32) -> f32 {
    if position > 0.0 {
        -position
    } else {
        0.0
    }
}

fn physics(movement: MovementType) -> ScrollPhysics {
    ScrollPhysics::new(PhysicsConfig {
        movement,
        ..Default::default()
    })
}

#[test]
fn set_position_cancels_velocity() {
    let mut physics = physics(MovementType::Unrestricted);
    physics.begin_drag(0.0);
    physics.drag(10.0, FRAME, VIEWPORT, |_| 0.0);
    assert!(physics.velocity() > 0.0);

    let change = physics.set_position(42.0);
    assert_eq!(physics.velocity(), 0.0);
    assert_eq!(change.current, 42.0);
    assert!(change.is_significant());
}

#[test]
fn tiny_changes_are_not_significant() {
    let mut physics = physics(MovementType::Unrestricted);
    physics.set_position(1.0);
    assert!(!physics.set_position(1.0005).is_significant());
    assert!(physics.set_position(1.01).is_significant());
}

#[test]
fn drag_follows_pointer_with_sensitivity() {
    let mut physics = ScrollPhysics::new(PhysicsConfig {
        movement: MovementType::Unrestricted,
        scroll_sensitivity: 2.0,
        ..Default::default()
    });
    physics.set_position(5.0);
    physics.begin_drag(100.0);
    let change = physics.drag(90.0, FRAME, VIEWPORT, |_| 0.0).expect("dragging");
    assert_eq!(change.current, 5.0 - 20.0);
}

#[test]
fn drag_without_begin_is_ignored() {
    let mut physics = physics(MovementType::Unrestricted);
    assert!(physics.drag(10.0, FRAME, VIEWPORT, |_| 0.0).is_none());
    assert_eq!(physics.position(), 0.0);
}

#[test]
fn clamped_drag_stops_at_bound() {
    let mut physics = physics(MovementType::Clamped);
    physics.begin_drag(0.0);
    let change = physics.drag(50.0, FRAME, VIEWPORT, anchored_at_zero).expect("dragging");
    assert_eq!(change.current, 0.0);
}

#[test]
fn elastic_drag_is_attenuated() {
    let mut physics = physics(MovementType::Elastic);
    physics.begin_drag(0.0);
    let change = physics.drag(50.0, FRAME, VIEWPORT, anchored_at_zero).expect("dragging");
    assert!(change.current > 0.0);
    assert!(change.current < 50.0);
}

#[test]
fn drag_velocity_is_a_moving_average() {
    let mut physics = physics(MovementType::Unrestricted);
    physics.begin_drag(0.0);
    physics.drag(10.0, 0.016, VIEWPORT, |_| 0.0);
    // lerp(0, 10 / 0.016, 0.16)
    assert!((physics.velocity() - 100.0).abs() < 1e-3);
}

#[test]
fn end_drag_keeps_fling_only_when_moving() {
    let mut physics = physics(MovementType::Unrestricted);
    physics.begin_drag(0.0);
    physics.drag(10.0, 0.016, VIEWPORT, |_| 0.0);
    physics.end_drag(5.0);
    assert!(!physics.is_dragging());
    assert!(physics.velocity() > 0.0);

    physics.begin_drag(10.0);
    physics.drag(20.0, 0.016, VIEWPORT, |_| 0.0);
    physics.end_drag(0.0);
    assert_eq!(physics.velocity(), 0.0);
}

#[test]
fn tick_is_skipped_while_dragging() {
    let mut physics = physics(MovementType::Elastic);
    physics.set_position(80.0);
    physics.begin_drag(0.0);
    assert!(physics.tick(FRAME, anchored_at_zero).is_none());
    assert_eq!(physics.position(), 80.0);
}

#[test]
fn tick_at_rest_does_nothing() {
    let mut physics = physics(MovementType::Elastic);
    physics.set_position(-10.0);
    assert!(physics.tick(FRAME, anchored_at_zero).is_none());
}

#[test]
fn inertia_decays_velocity() {
    let mut physics = physics(MovementType::Unrestricted);
    physics.begin_drag(0.0);
    physics.drag(10.0, 0.016, VIEWPORT, |_| 0.0);
    physics.end_drag(10.0);

    let change = physics.tick(0.1, |_| 0.0).expect("moving");
    let expected_velocity = 100.0 * 0.03f32.powf(0.1);
    assert!((physics.velocity() - expected_velocity).abs() < 1e-3);
    assert!((change.current - (10.0 + expected_velocity * 0.1)).abs() < 1e-3);
}

#[test]
fn inertia_eventually_stops() {
    let mut physics = physics(MovementType::Unrestricted);
    physics.begin_drag(0.0);
    physics.drag(10.0, 0.016, VIEWPORT, |_| 0.0);
    physics.end_drag(10.0);

    let mut ticks = 0;
    while physics.tick(FRAME, |_| 0.0).is_some() {
        ticks += 1;
        assert!(ticks < 10_000, "fling never settled");
    }
    assert_eq!(physics.velocity(), 0.0);
}

#[test]
fn elastic_springs_back_without_overshoot() {
    let mut physics = physics(MovementType::Elastic);
    physics.set_position(100.0);
    for _ in 0..240 {
        physics.tick(FRAME, anchored_at_zero);
        assert!(physics.position() > -1e-3, "overshot to {}", physics.position());
    }
    assert!(physics.position().abs() < 0.01);
}

#[test]
fn clamped_inertia_snaps_and_stops() {
    let mut physics = physics(MovementType::Clamped);
    physics.set_position(-5.0);
    physics.begin_drag(0.0);
    physics.drag(4.0, 0.016, VIEWPORT, anchored_at_zero);
    physics.end_drag(4.0);
    assert!(physics.velocity() > 0.0);

    physics.tick(0.1, anchored_at_zero);
    assert!(physics.position().abs() < 1e-4);
    assert_eq!(physics.velocity(), 0.0);
}

#[test]
fn no_inertia_jumps_by_offset() {
    let mut physics = ScrollPhysics::new(PhysicsConfig {
        movement: MovementType::Clamped,
        inertia: false,
        ..Default::default()
    });
    physics.set_position(30.0);
    let change = physics.tick(FRAME, anchored_at_zero).expect("overrun");
    assert_eq!(change.current, 0.0);
}

#[test]
fn unrestricted_never_consults_bounds() {
    let mut physics = physics(MovementType::Unrestricted);
    physics.set_position(1_000.0);
    let bounds = |_: f32| -> f32 { panic!("bounds queried") };
    assert!(physics.tick(FRAME, bounds).is_none());
}

#[test]
fn offset_by_preserves_velocity() {
    let mut physics = physics(MovementType::Unrestricted);
    physics.begin_drag(0.0);
    physics.drag(10.0, 0.016, VIEWPORT, |_| 0.0);
    physics.end_drag(10.0);
    let velocity = physics.velocity();

    physics.offset_by(-50.0);
    assert_eq!(physics.position(), -40.0);
    assert_eq!(physics.velocity(), velocity);
}

#[test]
fn reset_returns_to_neutral() {
    let mut physics = physics(MovementType::Elastic);
    physics.set_position(12.0);
    physics.begin_drag(3.0);
    let change = physics.reset();
    assert_eq!(change.previous, 12.0);
    assert_eq!(physics.position(), 0.0);
    assert!(!physics.is_dragging());
    assert_eq!(physics.velocity(), 0.0);
}
