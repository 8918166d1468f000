//! Incremental window maintenance.

use infiniscroll_geometry::Edge;

use crate::placement::{PlacementContext, PlacementStrategy};
use crate::pool::CellPool;
use crate::window::CellWindow;

/// One structural change made by [`VisibilityMaintainer::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityChange {
    Evicted { index: usize, edge: Edge },
    Created { index: usize, edge: Edge },
}

/// Brings the window in line with the viewport, one cell per run.
///
/// Spreading the work keeps each frame bounded: after a large jump the window
/// catches up over several ticks. The maintainer stays armed until a run finds
/// nothing to do.
#[derive(Debug, Clone, Default)]
pub struct VisibilityMaintainer {
    dirty: bool,
}

impl VisibilityMaintainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Disarms without running.
    pub fn idle(&mut self) {
        self.dirty = false;
    }

    /// Evicts or creates at most one cell, trying far eviction, near
    /// eviction, far creation and near creation in that order.
    pub fn run<T, P: CellPool<T>>(
        &mut self,
        strategy: &PlacementStrategy,
        window: &mut CellWindow<P::View>,
        ctx: &mut PlacementContext<'_, T, P>,
    ) -> Option<VisibilityChange> {
        if !self.dirty {
            return None;
        }

        let far = strategy.placement().far_edge();
        let near = far.opposite();

        let change = strategy
            .evict_at(window, ctx, far)
            .map(|index| VisibilityChange::Evicted { index, edge: far })
            .or_else(|| {
                strategy
                    .evict_at(window, ctx, near)
                    .map(|index| VisibilityChange::Evicted { index, edge: near })
            })
            .or_else(|| {
                strategy
                    .create_at(window, ctx, far)
                    .map(|index| VisibilityChange::Created { index, edge: far })
            })
            .or_else(|| {
                strategy
                    .create_at(window, ctx, near)
                    .map(|index| VisibilityChange::Created { index, edge: near })
            });

        if change.is_none() {
            self.dirty = false;
        }
        change
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::Placement;
    use crate::test_support::{context, indices, layout, pool};

    #[test]
    fn idle_maintainer_does_nothing() {
        let data = [10.0; 3];
        let mut pool = pool();
        let mut window = CellWindow::new();
        let strategy = PlacementStrategy::new(Placement::BottomToTop);
        let mut ctx = context(&data, &mut pool, layout(100.0), 0.0);

        let mut maintainer = VisibilityMaintainer::new();
        assert_eq!(maintainer.run(&strategy, &mut window, &mut ctx), None);
        assert!(window.is_empty());
    }

    #[test]
    fn makes_one_change_per_run_then_idles() {
        let data = [10.0; 3];
        let mut pool = pool();
        let mut window = CellWindow::new();
        let strategy = PlacementStrategy::new(Placement::BottomToTop);
        let mut ctx = context(&data, &mut pool, layout(100.0), 0.0);

        let mut maintainer = VisibilityMaintainer::new();
        maintainer.mark_dirty();

        // Seeding happens through the far-edge creation slot.
        assert_eq!(
            maintainer.run(&strategy, &mut window, &mut ctx),
            Some(VisibilityChange::Created {
                index: 2,
                edge: Edge::Top
            })
        );
        assert_eq!(indices(&window), vec![2]);

        assert_eq!(
            maintainer.run(&strategy, &mut window, &mut ctx),
            Some(VisibilityChange::Created {
                index: 1,
                edge: Edge::Top
            })
        );
        assert!(maintainer.run(&strategy, &mut window, &mut ctx).is_some());
        assert!(maintainer.is_dirty());

        assert_eq!(maintainer.run(&strategy, &mut window, &mut ctx), None);
        assert!(!maintainer.is_dirty());
        assert_eq!(indices(&window), vec![2, 1, 0]);
    }

    #[test]
    fn eviction_wins_over_creation() {
        let data = [10.0; 40];
        let mut pool = pool();
        let mut window = CellWindow::new();
        let strategy = PlacementStrategy::new(Placement::TopToBottom);
        {
            let mut ctx = context(&data, &mut pool, layout(100.0), 0.0);
            strategy.populate_initial(&mut window, &mut ctx, 100.0);
        }

        // Scrolled up by more than a cell: index 0 left through the top while
        // index 10 is due at the bottom.
        let mut ctx = context(&data, &mut pool, layout(100.0), 15.0);
        let mut maintainer = VisibilityMaintainer::new();
        maintainer.mark_dirty();
        assert_eq!(
            maintainer.run(&strategy, &mut window, &mut ctx),
            Some(VisibilityChange::Evicted {
                index: 0,
                edge: Edge::Top
            })
        );
        assert_eq!(
            maintainer.run(&strategy, &mut window, &mut ctx),
            Some(VisibilityChange::Created {
                index: 10,
                edge: Edge::Bottom
            })
        );
    }
}
