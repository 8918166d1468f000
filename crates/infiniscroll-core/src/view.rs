//! The scroll view: data, window, physics and listeners in one owner.

use smallvec::SmallVec;

use infiniscroll_geometry::{Point, Rect, Size, VerticalSpan};
use infiniscroll_physics::{FrameClock, PositionChange, ScrollPhysics, EPSILON};

use crate::config::ScrollViewConfig;
use crate::error::ScrollError;
use crate::placement::{Layout, Placement, PlacementContext, PlacementStrategy};
use crate::pool::CellPool;
use crate::visibility::VisibilityMaintainer;
use crate::window::CellWindow;

/// Pointer buttons as delivered by the host. Only the primary button
/// scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Handle returned by [`ScrollView::on_scroll_changed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// A materialized cell as the host should draw it.
#[derive(Debug)]
pub struct VisibleCell<'a, V> {
    pub index: usize,
    /// Displayed bounds in container space, y axis up.
    pub rect: Rect,
    pub view: &'a V,
}

type ScrollListener = Box<dyn FnMut(f32)>;

/// Virtualized vertical list.
///
/// Owns the data, the window of materialized cells and the scroll state.
/// The host forwards pointer input and calls [`tick`](Self::tick) once per
/// frame; each tick runs physics first and then at most one window change.
pub struct ScrollView<T, P: CellPool<T>> {
    config: ScrollViewConfig,
    pool: P,
    data: Vec<T>,
    window: CellWindow<P::View>,
    strategy: PlacementStrategy,
    maintainer: VisibilityMaintainer,
    physics: ScrollPhysics,
    clock: FrameClock,
    viewport: Size,
    content_width: f32,
    listeners: Vec<(ListenerId, ScrollListener)>,
    next_listener_id: u64,
}

impl<T, P: CellPool<T>> ScrollView<T, P> {
    /// Creates an empty view with a zero-sized viewport. Call
    /// [`set_viewport`](Self::set_viewport) once the host knows its size.
    pub fn new(config: ScrollViewConfig, pool: P) -> Self {
        let strategy = PlacementStrategy::new(config.placement);
        let physics = ScrollPhysics::new(config.physics.clone());
        Self {
            config,
            pool,
            data: Vec::new(),
            window: CellWindow::new(),
            strategy,
            maintainer: VisibilityMaintainer::new(),
            physics,
            clock: FrameClock::new(),
            viewport: Size::ZERO,
            content_width: 0.0,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// Creates a view and sizes it in one go.
    pub fn with_viewport(config: ScrollViewConfig, pool: P, viewport: Size) -> Self {
        let mut view = Self::new(config, pool);
        view.set_viewport(viewport);
        view
    }

    pub fn config(&self) -> &ScrollViewConfig {
        &self.config
    }

    pub fn placement(&self) -> Placement {
        self.strategy.placement()
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn window(&self) -> &CellWindow<P::View> {
        &self.window
    }

    pub fn pool(&self) -> &P {
        &self.pool
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Width cells are measured at: viewport width less horizontal padding.
    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    pub fn scroll_position(&self) -> f32 {
        self.physics.position()
    }

    pub fn velocity(&self) -> f32 {
        self.physics.velocity()
    }

    pub fn is_dragging(&self) -> bool {
        self.physics.is_dragging()
    }

    pub fn is_visibility_dirty(&self) -> bool {
        self.maintainer.is_dirty()
    }

    /// Replaces the data and rebuilds the window from the anchor edge.
    pub fn set(&mut self, items: Vec<T>) {
        self.release_cells();
        self.data = items;
        self.populate();
        self.maintainer.mark_dirty();
    }

    /// Appends `item` to the end of the data.
    pub fn add(&mut self, item: T) {
        self.data.push(item);
        let layout = self.layout();
        let mut ctx = PlacementContext {
            data: &self.data,
            pool: &mut self.pool,
            layout,
            scroll_position: self.physics.position(),
        };
        let delta = self.strategy.on_add(&mut self.window, &mut ctx);
        self.apply_offset(delta);
        self.maintainer.mark_dirty();
    }

    /// Inserts `item` at data index 0.
    pub fn add_front(&mut self, item: T) {
        self.data.insert(0, item);
        let layout = self.layout();
        let mut ctx = PlacementContext {
            data: &self.data,
            pool: &mut self.pool,
            layout,
            scroll_position: self.physics.position(),
        };
        let delta = self.strategy.on_add_front(&mut self.window, &mut ctx);
        self.apply_offset(delta);
        self.maintainer.mark_dirty();
    }

    /// Drops all data and cells and returns to a neutral scroll state.
    pub fn clear(&mut self) {
        self.release_cells();
        self.data.clear();
        let change = self.physics.reset();
        self.notify_if_significant(change);
        self.maintainer.idle();
    }

    /// Rebuilds the list so that `index` sits at the anchor edge.
    ///
    /// Items beyond `index` in the growth direction are re-added one by one,
    /// so the window immediately after this call ends at `index`.
    pub fn scroll_to_cell(&mut self, index: usize) -> Result<(), ScrollError> {
        let len = self.data.len();
        if index >= len {
            return Err(ScrollError::IndexOutOfRange { index, len });
        }

        let mut data = std::mem::take(&mut self.data);
        self.clear();

        match self.placement() {
            Placement::BottomToTop => {
                let rest = data.split_off(index + 1);
                self.set(data);
                for item in rest {
                    self.add(item);
                }
            }
            Placement::TopToBottom => {
                let rest = data.split_off(index);
                self.set(rest);
                for item in data.into_iter().rev() {
                    self.add_front(item);
                }
            }
        }

        log::debug!("scrolled to cell {index} of {len}");
        Ok(())
    }

    /// Jumps to `position`, cancelling any fling.
    pub fn set_scroll_position(&mut self, position: f32) {
        let change = self.physics.set_position(position);
        self.on_position_changed(change);
    }

    /// Applies a new viewport size. A width change re-measures everything;
    /// a height change only re-runs window maintenance.
    pub fn set_viewport(&mut self, size: Size) {
        if !size.width.is_finite() || !size.height.is_finite() {
            log::warn!("ignoring non-finite viewport {size:?}");
            return;
        }
        let size = Size::new(size.width.max(0.0), size.height.max(0.0));
        let width_changed = (size.width - self.viewport.width).abs() > EPSILON;
        let height_changed = (size.height - self.viewport.height).abs() > EPSILON;

        self.viewport = size;
        self.content_width = (size.width - self.config.padding.horizontal()).max(0.0);

        if width_changed {
            log::debug!("viewport width now {:.1}; rebuilding cells", size.width);
            self.release_cells();
            let change = self.physics.reset();
            self.notify_if_significant(change);
            self.populate();
            self.maintainer.mark_dirty();
        } else if height_changed {
            self.maintainer.mark_dirty();
        }
    }

    pub fn pointer_down(&mut self, button: PointerButton) {
        if button == PointerButton::Primary {
            self.physics.pointer_down();
        }
    }

    /// Starts a drag at `point` in container space.
    pub fn begin_drag(&mut self, button: PointerButton, point: Point) {
        if button == PointerButton::Primary {
            self.physics.begin_drag(point.y);
        }
    }

    /// Follows a drag to `point`; `dt` is the time since the previous drag
    /// event in seconds.
    pub fn drag(&mut self, button: PointerButton, point: Point, dt: f32) {
        if button != PointerButton::Primary {
            return;
        }
        let layout = self.layout();
        let item_count = self.data.len();
        let strategy = &self.strategy;
        let window = &self.window;
        let bounds = |candidate: f32| {
            strategy
                .boundary_offset(window, &layout, item_count, candidate)
                .unwrap_or(0.0)
        };
        if let Some(change) = self.physics.drag(point.y, dt, self.viewport.height, bounds) {
            self.on_position_changed(change);
        }
    }

    /// Ends a drag. `frame_delta` is the pointer movement of the last frame;
    /// a negligible one cancels the fling.
    pub fn end_drag(&mut self, button: PointerButton, frame_delta: f32) {
        if button == PointerButton::Primary {
            self.physics.end_drag(frame_delta);
        }
    }

    /// Advances the view by `dt` seconds: physics, then one window change.
    pub fn tick(&mut self, dt: f32) {
        let layout = self.layout();
        let item_count = self.data.len();
        let strategy = &self.strategy;
        let window = &self.window;
        let bounds = |candidate: f32| {
            strategy
                .boundary_offset(window, &layout, item_count, candidate)
                .unwrap_or(0.0)
        };
        if let Some(change) = self.physics.tick(dt, bounds) {
            self.on_position_changed(change);
        }
        self.update_visibility();
    }

    /// [`tick`](Self::tick) with the time measured since the previous call.
    pub fn tick_now(&mut self) {
        let dt = self.clock.delta();
        self.tick(dt);
    }

    /// Registers `listener` for scroll position changes larger than
    /// [`EPSILON`].
    pub fn on_scroll_changed(&mut self, listener: impl FnMut(f32) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns whether a listener was registered under `id`.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Materialized cells from top to bottom with their displayed bounds.
    pub fn visible_cells(&self) -> SmallVec<[VisibleCell<'_, P::View>; 16]> {
        let scroll = self.physics.position();
        let left = -self.viewport.width * 0.5 + self.config.padding.left;
        let mut cells: SmallVec<[VisibleCell<'_, P::View>; 16]> = self
            .window
            .iter()
            .map(|entry| {
                let span = entry.span_at(scroll);
                VisibleCell {
                    index: entry.index,
                    rect: Rect::new(left, span.bottom, self.content_width, entry.height),
                    view: &entry.view,
                }
            })
            .collect();
        if self.placement() == Placement::BottomToTop {
            cells.reverse();
        }
        cells
    }

    /// Releases every cell and hands the pool back to the caller.
    pub fn into_pool(mut self) -> P {
        self.release_cells();
        self.pool
    }

    /// Releases every cell and disposes the pool.
    pub fn dispose(mut self) {
        self.release_cells();
        self.pool.dispose();
    }

    fn layout(&self) -> Layout {
        Layout {
            viewport: VerticalSpan::of_container(self.viewport.height),
            padding: self.config.padding,
            spacing: self.config.spacing,
            content_width: self.content_width,
        }
    }

    fn populate(&mut self) {
        let layout = self.layout();
        let mut ctx = PlacementContext {
            data: &self.data,
            pool: &mut self.pool,
            layout,
            scroll_position: self.physics.position(),
        };
        self.strategy
            .populate_initial(&mut self.window, &mut ctx, self.viewport.height);
    }

    fn update_visibility(&mut self) {
        let layout = self.layout();
        let mut ctx = PlacementContext {
            data: &self.data,
            pool: &mut self.pool,
            layout,
            scroll_position: self.physics.position(),
        };
        if let Some(change) = self
            .maintainer
            .run(&self.strategy, &mut self.window, &mut ctx)
        {
            log::trace!("visibility: {change:?}");
        }
    }

    fn release_cells(&mut self) {
        for entry in self.window.drain() {
            self.pool.release(entry.view);
        }
        self.strategy.reset(&mut self.window);
    }

    fn apply_offset(&mut self, delta: f32) {
        if delta != 0.0 {
            let change = self.physics.offset_by(delta);
            self.on_position_changed(change);
        }
    }

    fn on_position_changed(&mut self, change: PositionChange) {
        self.maintainer.mark_dirty();
        self.notify_if_significant(change);
    }

    fn notify_if_significant(&mut self, change: PositionChange) {
        if !change.is_significant() {
            return;
        }
        for (_, listener) in self.listeners.iter_mut() {
            listener(change.current);
        }
    }
}

#[cfg(test)]
#[path = "tests/scroll_view_tests.rs"]
mod tests;
