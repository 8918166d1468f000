//! Assertion utilities for scroll view tests
//!
//! Window checks work on the stacking invariants rather than on exact
//! coordinates, so they hold for any data and configuration.

use std::ops::RangeInclusive;

use infiniscroll_core::{CellWindow, Rect};

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert that the window holds a run of consecutive indices, each exactly
/// one step from its neighbour, with no duplicates.
pub fn assert_contiguous<V>(window: &CellWindow<V>, msg: &str) {
    let indices: Vec<usize> = window.iter().map(|entry| entry.index).collect();
    for pair in indices.windows(2) {
        assert_eq!(
            pair[0].abs_diff(pair[1]),
            1,
            "{}: window indices {:?} are not contiguous",
            msg,
            indices
        );
    }
    if let (Some(first), Some(second)) = (indices.first(), indices.get(1)) {
        let ascending = second > first;
        assert!(
            indices
                .windows(2)
                .all(|pair| (pair[1] > pair[0]) == ascending),
            "{}: window indices {:?} change direction",
            msg,
            indices
        );
    }
}

/// Assert that neighbouring cells touch, separated by exactly `spacing`.
pub fn assert_adjacent<V>(window: &CellWindow<V>, spacing: f32, tolerance: f32, msg: &str) {
    let entries: Vec<_> = window.iter().collect();
    for pair in entries.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let distance = (a.reference_position - b.reference_position).abs();
        let expected = a.height * 0.5 + spacing + b.height * 0.5;
        assert_approx_eq(
            distance,
            expected,
            tolerance,
            &format!("{} - cells {} and {}", msg, a.index, b.index),
        );
    }
}

/// Assert the lowest and highest materialized index.
pub fn assert_window_indices<V>(window: &CellWindow<V>, expected: RangeInclusive<usize>, msg: &str) {
    assert_eq!(
        window.indices(),
        Some(expected.clone()),
        "{}: expected window {:?}, got {:?}",
        msg,
        expected,
        window.indices()
    );
}

/// Assert that a collection has an expected count.
pub fn assert_count<T>(items: &[T], expected: usize, msg: &str) {
    assert_eq!(
        items.len(),
        expected,
        "{}: expected {} items, got {}",
        msg,
        expected,
        items.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_eq_accepts_within_tolerance() {
        assert_approx_eq(1.0, 1.05, 0.1, "close enough");
    }

    #[test]
    #[should_panic(expected = "too far")]
    fn approx_eq_rejects_outside_tolerance() {
        assert_approx_eq(1.0, 2.0, 0.1, "too far");
    }

    #[test]
    fn empty_window_is_contiguous() {
        let window: CellWindow<()> = CellWindow::new();
        assert_contiguous(&window, "empty");
        assert_adjacent(&window, 4.0, 0.0, "empty");
    }
}
