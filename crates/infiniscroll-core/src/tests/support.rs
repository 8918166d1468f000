//! Fixtures shared by the unit test suites.

use infiniscroll_geometry::VerticalSpan;

use crate::placement::{Layout, PlacementContext};
use crate::pool::{CellView, StackPool};
use crate::window::CellWindow;

/// A cell whose height is the item it is bound to.
#[derive(Debug, Default)]
pub(crate) struct TestCell {
    pub height: f32,
    pub active: bool,
    pub binds: usize,
}

impl CellView<f32> for TestCell {
    fn bind(&mut self, item: &f32) {
        self.height = *item;
        self.binds += 1;
    }

    fn measure_height(&self, _width: f32) -> f32 {
        self.height
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

pub(crate) type TestPool = StackPool<f32, TestCell>;

pub(crate) fn pool() -> TestPool {
    StackPool::with_factory(|_: &f32| TestCell::default())
}

pub(crate) fn layout(viewport_height: f32) -> Layout {
    Layout {
        viewport: VerticalSpan::of_container(viewport_height),
        content_width: 100.0,
        ..Default::default()
    }
}

pub(crate) fn context<'a>(
    data: &'a [f32],
    pool: &'a mut TestPool,
    layout: Layout,
    scroll_position: f32,
) -> PlacementContext<'a, f32, TestPool> {
    PlacementContext {
        data,
        pool,
        layout,
        scroll_position,
    }
}

/// Indices in window order, anchor end first.
pub(crate) fn indices<V>(window: &CellWindow<V>) -> Vec<usize> {
    window.iter().map(|entry| entry.index).collect()
}

/// Reference position of `index`, panicking when it is not materialized.
pub(crate) fn position_of<V>(window: &CellWindow<V>, index: usize) -> f32 {
    window
        .get(index)
        .map(|entry| entry.reference_position)
        .unwrap_or_else(|| panic!("index {index} not materialized"))
}
