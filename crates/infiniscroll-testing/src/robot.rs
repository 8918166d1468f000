//! Robot-style driver for scroll view tests.
//!
//! The robot owns a [`ScrollView`] and feeds it the same input a host would:
//! pointer gestures in container space and fixed-length frame ticks.
//!
//! # Example
//!
//! ```
//! use infiniscroll_core::{ScrollViewConfig, Size};
//! use infiniscroll_testing::{height_pool, uniform_heights, ScrollRobot};
//!
//! let mut robot = ScrollRobot::new(ScrollViewConfig::default(), height_pool(), Size::new(100.0, 50.0));
//! robot.view_mut().set(uniform_heights(40, 10.0));
//! robot.drag(0.0, -60.0, 6);
//! robot.wait_for_idle();
//!
//! assert!(robot.view().window().len() > 0);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use infiniscroll_core::{CellPool, Point, PointerButton, ScrollView, ScrollViewConfig, Size};

/// Frame length the robot ticks with, in seconds.
pub const FRAME: f32 = 1.0 / 60.0;

/// Upper bound on frames [`ScrollRobot::wait_for_idle`] will pump.
pub const MAX_IDLE_FRAMES: usize = 10_000;

/// Drives a [`ScrollView`] frame by frame.
pub struct ScrollRobot<T, P: CellPool<T>> {
    view: ScrollView<T, P>,
    frames: usize,
}

impl<T, P: CellPool<T>> ScrollRobot<T, P> {
    pub fn new(config: ScrollViewConfig, pool: P, viewport: Size) -> Self {
        Self::from_view(ScrollView::with_viewport(config, pool, viewport))
    }

    pub fn from_view(view: ScrollView<T, P>) -> Self {
        Self { view, frames: 0 }
    }

    pub fn view(&self) -> &ScrollView<T, P> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ScrollView<T, P> {
        &mut self.view
    }

    pub fn into_view(self) -> ScrollView<T, P> {
        self.view
    }

    /// Frames ticked so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Ticks `count` frames.
    pub fn advance_frames(&mut self, count: usize) {
        for _ in 0..count {
            self.frame();
        }
    }

    /// Ticks until neither physics nor window maintenance has anything left
    /// to do. Returns the number of frames it took.
    ///
    /// # Panics
    ///
    /// Panics when the view is still moving after [`MAX_IDLE_FRAMES`].
    pub fn wait_for_idle(&mut self) -> usize {
        for frame in 0..MAX_IDLE_FRAMES {
            let before = self.view.scroll_position();
            self.frame();
            if !self.view.is_visibility_dirty() && self.view.scroll_position() == before {
                return frame + 1;
            }
        }
        panic!(
            "scroll view still busy after {MAX_IDLE_FRAMES} frames (position {}, window {:?})",
            self.view.scroll_position(),
            self.view.window().indices()
        );
    }

    /// Drags from `from_y` to `to_y` in `steps` frames and lets go while the
    /// pointer is still moving, so the release flings.
    pub fn drag(&mut self, from_y: f32, to_y: f32, steps: usize) {
        let last_delta = self.drag_path(from_y, to_y, steps);
        self.view.end_drag(PointerButton::Primary, last_delta);
    }

    /// Drags like [`drag`](Self::drag) but stops the pointer before
    /// releasing, so no fling follows.
    pub fn drag_and_hold(&mut self, from_y: f32, to_y: f32, steps: usize) {
        self.drag_path(from_y, to_y, steps);
        self.view.end_drag(PointerButton::Primary, 0.0);
    }

    /// Jumps to `position` and waits until the window has caught up.
    pub fn scroll_to(&mut self, position: f32) -> usize {
        self.view.set_scroll_position(position);
        self.wait_for_idle()
    }

    /// Indices of the visible cells from top to bottom.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.view.visible_cells().iter().map(|cell| cell.index).collect()
    }

    /// Collects every scroll position reported to listeners from now on.
    pub fn record_scroll(&mut self) -> Rc<RefCell<Vec<f32>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        self.view
            .on_scroll_changed(move |position| sink.borrow_mut().push(position));
        seen
    }

    fn drag_path(&mut self, from_y: f32, to_y: f32, steps: usize) -> f32 {
        let steps = steps.max(1);
        self.view.pointer_down(PointerButton::Primary);
        self.view
            .begin_drag(PointerButton::Primary, Point::new(0.0, from_y));

        let mut previous = from_y;
        let mut last_delta = 0.0;
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let y = from_y + (to_y - from_y) * t;
            self.view.drag(PointerButton::Primary, Point::new(0.0, y), FRAME);
            last_delta = y - previous;
            previous = y;
            self.frame();
        }
        log::trace!("robot drag {from_y:.1} -> {to_y:.1} in {steps} steps");
        last_delta
    }

    fn frame(&mut self) {
        self.view.tick(FRAME);
        self.frames += 1;
    }
}
