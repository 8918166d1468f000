//! Placement of cells along the stacking axis.
//!
//! Both growth directions run the same algorithm. Positions are worked out in
//! growth-axis units `u = dir * y`, where `dir` is +1 when the list grows
//! upward from the bottom edge and -1 when it grows downward from the top
//! edge. In those units the anchor edge is always at the low end of the
//! container, so one formula serves both directions.
//!
//! Data index 0 is always the top-most item on screen. The anchor terminal is
//! the index seeded first: the last index for [`Placement::BottomToTop`], the
//! first for [`Placement::TopToBottom`].

use infiniscroll_geometry::{gap_to, is_fully_outside, reaches_into, Edge, Padding, VerticalSpan};

use crate::pool::{CellPool, CellView};
use crate::window::{CellEntry, CellWindow};

/// Which end of the data a list grows from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Placement {
    /// Anchored at the bottom edge, newest item last (chat logs).
    #[default]
    BottomToTop,
    /// Anchored at the top edge, first item first (feeds, tables).
    TopToBottom,
}

impl Placement {
    /// Edge the list is anchored to.
    pub fn near_edge(self) -> Edge {
        match self {
            Placement::BottomToTop => Edge::Bottom,
            Placement::TopToBottom => Edge::Top,
        }
    }

    /// Edge the list grows toward.
    pub fn far_edge(self) -> Edge {
        self.near_edge().opposite()
    }

    /// +1 when growing up, -1 when growing down.
    pub fn direction(self) -> f32 {
        match self {
            Placement::BottomToTop => 1.0,
            Placement::TopToBottom => -1.0,
        }
    }

    /// Index seeded first, at the anchor edge.
    pub fn anchor_index(self, len: usize) -> Option<usize> {
        let last = len.checked_sub(1)?;
        Some(match self {
            Placement::BottomToTop => last,
            Placement::TopToBottom => 0,
        })
    }

    /// Index at the growth end.
    pub fn far_index(self, len: usize) -> Option<usize> {
        let last = len.checked_sub(1)?;
        Some(match self {
            Placement::BottomToTop => 0,
            Placement::TopToBottom => last,
        })
    }

    /// Whether `index` sits closer to the anchor than `other`.
    pub fn is_nearer(self, index: usize, other: usize) -> bool {
        match self {
            Placement::BottomToTop => index > other,
            Placement::TopToBottom => index < other,
        }
    }

    /// Neighbour of `index` one step toward the anchor.
    fn nearer_neighbour(self, index: usize, len: usize) -> Option<usize> {
        step(index, self.near_edge(), len)
    }

    /// Neighbour of `index` one step away from the anchor.
    fn farther_neighbour(self, index: usize, len: usize) -> Option<usize> {
        step(index, self.far_edge(), len)
    }
}

/// Index next to `index` on the side of `edge`, if it exists. Index 0 is at
/// the top, so moving toward the top decrements.
fn step(index: usize, edge: Edge, len: usize) -> Option<usize> {
    match edge {
        Edge::Top => index.checked_sub(1),
        Edge::Bottom => Some(index + 1).filter(|&next| next < len),
    }
}

/// Container geometry the placement math needs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Layout {
    /// Vertical extent of the container in its own space.
    pub viewport: VerticalSpan,
    pub padding: Padding,
    pub spacing: f32,
    /// Width cells are measured at.
    pub content_width: f32,
}

impl Layout {
    /// Gap between a cell at `index` and its neighbour toward the far end.
    /// The two terminal cells of the data carry no gap.
    fn spacing_for(&self, index: usize, len: usize) -> f32 {
        if index == 0 || index + 1 == len {
            0.0
        } else {
            self.spacing
        }
    }
}

/// Everything a strategy operation needs besides the window itself.
pub struct PlacementContext<'a, T, P> {
    pub data: &'a [T],
    pub pool: &'a mut P,
    pub layout: Layout,
    pub scroll_position: f32,
}

/// Direction-parameterized windowing algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlacementStrategy {
    placement: Placement,
}

impl PlacementStrategy {
    pub fn new(placement: Placement) -> Self {
        Self { placement }
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Fills the window from the anchor edge until the occupied extent covers
    /// `viewport_extent` less the far padding, or the data runs out.
    ///
    /// Continues from the current far entry, so calling it again with the
    /// same inputs adds nothing.
    pub fn populate_initial<T, P: CellPool<T>>(
        &self,
        window: &mut CellWindow<P::View>,
        ctx: &mut PlacementContext<'_, T, P>,
        viewport_extent: f32,
    ) {
        let len = ctx.data.len();
        let limit = viewport_extent - ctx.layout.padding.at(self.placement.far_edge());

        while window.occupied_extent() < limit {
            let next = match window.far() {
                None => self.placement.anchor_index(len),
                Some(far) => self.placement.farther_neighbour(far.index, len),
            };
            let Some(index) = next else {
                break;
            };
            self.materialize(window, ctx, index);
        }

        log::debug!(
            "populated {} cells, occupied extent {:.1} of {:.1}",
            window.len(),
            window.occupied_extent(),
            limit
        );
    }

    /// Adjusts the window after an item was pushed to the end of the data.
    ///
    /// Returns the scroll-position delta that keeps the visible cells in
    /// place. Only the bottom-anchored list needs one, since the new item
    /// lands at its anchor.
    pub fn on_add<T, P: CellPool<T>>(
        &self,
        window: &mut CellWindow<P::View>,
        ctx: &mut PlacementContext<'_, T, P>,
    ) -> f32 {
        if self.placement != Placement::BottomToTop {
            return 0.0;
        }
        let data = ctx.data;
        let Some(item) = data.last() else {
            return 0.0;
        };
        let shift = measure_transient(ctx, item, data.len() - 1) + ctx.layout.spacing;
        window.shift_positions(shift);
        -shift
    }

    /// Adjusts the window after an item was inserted at data index 0.
    ///
    /// Every materialized index moves up by one. For the top-anchored list the
    /// new item lands at the anchor, so positions shift as well and the
    /// returned delta compensates.
    pub fn on_add_front<T, P: CellPool<T>>(
        &self,
        window: &mut CellWindow<P::View>,
        ctx: &mut PlacementContext<'_, T, P>,
    ) -> f32 {
        window.shift_indices(1);
        if self.placement != Placement::TopToBottom {
            return 0.0;
        }
        let data = ctx.data;
        let Some(item) = data.first() else {
            return 0.0;
        };
        let shift = measure_transient(ctx, item, 0) + ctx.layout.spacing;
        window.shift_positions(-shift);
        shift
    }

    /// Forgets the occupied extent.
    pub fn reset<V>(&self, window: &mut CellWindow<V>) {
        window.reset_extent();
    }

    pub fn try_evict_far_cell<T, P: CellPool<T>>(
        &self,
        window: &mut CellWindow<P::View>,
        ctx: &mut PlacementContext<'_, T, P>,
    ) -> bool {
        self.evict_at(window, ctx, self.placement.far_edge()).is_some()
    }

    pub fn try_evict_near_cell<T, P: CellPool<T>>(
        &self,
        window: &mut CellWindow<P::View>,
        ctx: &mut PlacementContext<'_, T, P>,
    ) -> bool {
        self.evict_at(window, ctx, self.placement.near_edge()).is_some()
    }

    pub fn try_create_far_cell<T, P: CellPool<T>>(
        &self,
        window: &mut CellWindow<P::View>,
        ctx: &mut PlacementContext<'_, T, P>,
    ) -> bool {
        self.create_at(window, ctx, self.placement.far_edge()).is_some()
    }

    pub fn try_create_near_cell<T, P: CellPool<T>>(
        &self,
        window: &mut CellWindow<P::View>,
        ctx: &mut PlacementContext<'_, T, P>,
    ) -> bool {
        self.create_at(window, ctx, self.placement.near_edge()).is_some()
    }

    /// Evicts the window entry at `edge` if it lies entirely beyond that edge
    /// of the viewport, extended by the creation lookahead plus one spacing
    /// gap. The extra band is what a freshly created neighbour may occupy, so
    /// a cell is never evicted on the tick after it was created.
    ///
    /// The last remaining entry is never evicted. Returns the evicted index.
    pub fn evict_at<T, P: CellPool<T>>(
        &self,
        window: &mut CellWindow<P::View>,
        ctx: &mut PlacementContext<'_, T, P>,
        edge: Edge,
    ) -> Option<usize> {
        if window.len() <= 1 {
            return None;
        }
        let entry = self.entry_at(window, edge)?;
        let band = ctx.layout.padding.at(edge) + ctx.layout.spacing;
        let region = ctx.layout.viewport.extend(edge, band);
        if !is_fully_outside(entry.span_at(ctx.scroll_position), region, edge) {
            return None;
        }

        let entry = if edge == self.placement.near_edge() {
            window.pop_near()
        } else {
            window.pop_far()
        }?;
        log::debug!("evicted cell {} past {:?} edge", entry.index, edge);
        let index = entry.index;
        ctx.pool.release(entry.view);
        Some(index)
    }

    /// Materializes the neighbour beyond the window entry at `edge` once that
    /// entry reaches into the viewport extended by the padding on that edge.
    /// An empty window is seeded with the anchor terminal instead.
    ///
    /// Returns the created index.
    pub fn create_at<T, P: CellPool<T>>(
        &self,
        window: &mut CellWindow<P::View>,
        ctx: &mut PlacementContext<'_, T, P>,
        edge: Edge,
    ) -> Option<usize> {
        let len = ctx.data.len();
        let index = match self.entry_at(window, edge) {
            None => self.placement.anchor_index(len)?,
            Some(entry) => {
                let next = step(entry.index, edge, len)?;
                let lookahead = ctx.layout.padding.at(edge);
                let span = entry.span_at(ctx.scroll_position);
                if !reaches_into(span, ctx.layout.viewport, edge, lookahead) {
                    return None;
                }
                next
            }
        };
        self.materialize(window, ctx, index);
        Some(index)
    }

    /// Offset that would bring `candidate` back inside the scrollable range.
    ///
    /// Zero while in range; `None` for an empty window, where the range is
    /// undefined.
    pub fn boundary_offset<V>(
        &self,
        window: &CellWindow<V>,
        layout: &Layout,
        item_count: usize,
        candidate: f32,
    ) -> Option<f32> {
        if window.is_empty() {
            return None;
        }
        let dir = self.placement.direction();
        let toward_far = dir * candidate;

        // Pushed away from the anchor past its rest position: full resistance.
        let anchor = self.placement.anchor_index(item_count)?;
        if window.contains(anchor) && toward_far > 0.0 {
            return Some(-candidate);
        }

        let far = self.placement.far_index(item_count)?;
        let Some(entry) = window.get(far) else {
            return Some(0.0);
        };
        let far_edge = self.placement.far_edge();
        let gap = gap_to(entry.span_at(candidate), layout.viewport, far_edge)
            - layout.padding.at(far_edge);
        if gap > 0.0 {
            // Never pull past the anchor rest position: a list shorter than
            // the viewport stays against its anchor.
            Some(dir * gap.min((-toward_far).max(0.0)))
        } else {
            Some(0.0)
        }
    }

    /// Rest position of a new cell at `index` with `height`, stacked against
    /// whichever neighbour is materialized.
    pub fn reference_position_for<V>(
        &self,
        window: &CellWindow<V>,
        layout: &Layout,
        item_count: usize,
        index: usize,
        height: f32,
    ) -> f32 {
        let dir = self.placement.direction();
        let near_edge = self.placement.near_edge();
        let anchor_rest =
            dir * layout.viewport.edge(near_edge) + layout.padding.at(near_edge) + height * 0.5;

        let u = if self.placement.anchor_index(item_count) == Some(index) {
            anchor_rest
        } else if let Some(nearer) = self
            .placement
            .nearer_neighbour(index, item_count)
            .and_then(|i| window.get(i))
        {
            dir * nearer.reference_position + nearer.height * 0.5 + layout.spacing + height * 0.5
        } else if let Some(farther) = self
            .placement
            .farther_neighbour(index, item_count)
            .and_then(|i| window.get(i))
        {
            dir * farther.reference_position - farther.height * 0.5 - layout.spacing - height * 0.5
        } else {
            log::warn!("cell {index} has no materialized neighbour; placing it at the anchor");
            anchor_rest
        };

        dir * u
    }

    fn entry_at<'w, V>(&self, window: &'w CellWindow<V>, edge: Edge) -> Option<&'w CellEntry<V>> {
        if edge == self.placement.near_edge() {
            window.near()
        } else {
            window.far()
        }
    }

    fn materialize<T, P: CellPool<T>>(
        &self,
        window: &mut CellWindow<P::View>,
        ctx: &mut PlacementContext<'_, T, P>,
        index: usize,
    ) {
        let data = ctx.data;
        let len = data.len();
        let item = &data[index];

        let mut view = ctx.pool.rent(item);
        view.bind(item);
        let height = sanitize_height(view.measure_height(ctx.layout.content_width), index);
        let reference_position = self.reference_position_for(window, &ctx.layout, len, index, height);
        let extent = height + ctx.layout.spacing_for(index, len);

        let nearer = window
            .near()
            .map_or(true, |near| self.placement.is_nearer(index, near.index));
        window.insert(
            CellEntry::new(index, height, reference_position, view, extent),
            nearer,
        );
        log::debug!("created cell {index} (height {height:.1}) at {reference_position:.1}");
    }
}

/// Rents a throwaway view to learn the height of `item`.
fn measure_transient<T, P: CellPool<T>>(
    ctx: &mut PlacementContext<'_, T, P>,
    item: &T,
    index: usize,
) -> f32 {
    let mut view = ctx.pool.rent(item);
    view.bind(item);
    let height = sanitize_height(view.measure_height(ctx.layout.content_width), index);
    ctx.pool.release(view);
    height
}

fn sanitize_height(height: f32, index: usize) -> f32 {
    if height.is_finite() && height >= 0.0 {
        height
    } else {
        log::warn!("cell {index} measured an invalid height {height}; using 0");
        0.0
    }
}

#[cfg(test)]
#[path = "tests/placement_tests.rs"]
mod tests;
