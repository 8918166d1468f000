use infiniscroll_core::{Placement, ScrollViewConfig, Size};
use infiniscroll_testing::prelude::*;

fn robot(placement: Placement, viewport_height: f32) -> ScrollRobot<f32, HeightPool> {
    let config = ScrollViewConfig {
        placement,
        ..Default::default()
    };
    ScrollRobot::new(config, height_pool(), Size::new(100.0, viewport_height))
}

#[test]
fn populate_stops_once_the_anchor_cell_fills_the_viewport() {
    let mut robot = robot(Placement::BottomToTop, 35.0);
    robot.view_mut().set(vec![10.0, 20.0, 30.0, 40.0, 50.0]);

    let window = robot.view().window();
    assert_eq!(window.len(), 1);
    assert_window_indices(window, 4..=4, "after populate");
    assert_eq!(window.occupied_extent(), 50.0);
}

#[test]
fn populate_mirrors_for_top_anchored_list() {
    let mut robot = robot(Placement::TopToBottom, 35.0);
    robot.view_mut().set(vec![50.0, 40.0, 30.0, 20.0, 10.0]);

    let window = robot.view().window();
    assert_window_indices(window, 0..=0, "after populate");
    assert_eq!(window.occupied_extent(), 50.0);
}

#[test]
fn add_shifts_scroll_by_new_item_height() {
    let mut robot = robot(Placement::BottomToTop, 35.0);
    robot.view_mut().set(vec![50.0]);
    let seen = robot.record_scroll();

    robot.view_mut().add(50.0);

    assert_eq!(*seen.borrow(), vec![-50.0]);
    assert_eq!(robot.view().scroll_position(), -50.0);

    // Back at rest the new item is the only cell, sitting on the anchor.
    robot.scroll_to(0.0);
    let window = robot.view().window();
    assert_window_indices(window, 1..=1, "new item at anchor");
    let cells = robot.view().visible_cells();
    let cell = &cells[0];
    assert_approx_eq(cell.rect.bottom(), -17.5, 1e-4, "anchored to bottom edge");
    assert_eq!(robot.view().pool().outstanding(), 1);
}

#[test]
fn scroll_to_cell_leaves_index_at_anchor_edge() {
    let mut robot = robot(Placement::BottomToTop, 35.0);
    robot.view_mut().set(vec![10.0, 20.0, 30.0, 40.0, 50.0]);

    robot.view_mut().scroll_to_cell(2).expect("index in range");

    let window = robot.view().window();
    assert_eq!(window.near().map(|entry| entry.index), Some(2));
    assert!(window.iter().all(|entry| entry.index <= 2));
    assert_contiguous(window, "after scroll_to_cell");
    assert_eq!(robot.view().data().len(), 5);
}

#[test]
fn scroll_to_cell_out_of_range_reports_error() {
    let mut robot = robot(Placement::BottomToTop, 35.0);
    robot.view_mut().set(vec![10.0, 20.0, 30.0, 40.0, 50.0]);
    let before = robot.view().window().indices();

    let err = robot.view_mut().scroll_to_cell(5);

    assert!(err.is_err());
    assert_eq!(robot.view().window().indices(), before);
    assert_eq!(robot.view().data().len(), 5);
}

#[test]
fn empty_data_is_a_quiet_state() {
    let mut robot = robot(Placement::TopToBottom, 100.0);
    robot.view_mut().set(Vec::new());
    robot.drag(0.0, 40.0, 4);
    robot.wait_for_idle();

    assert!(robot.view().window().is_empty());
    assert!(robot.visible_indices().is_empty());
    assert_eq!(robot.view().pool().rents(), 0);
}
