//! Cells and pools for driving the engine without a UI toolkit.

use infiniscroll_core::{CellPool, CellView, StackPool};

/// A cell bound to an `f32` item that is its own height.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct HeightCell {
    pub height: f32,
    pub active: bool,
    pub binds: usize,
}

impl CellView<f32> for HeightCell {
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

/// Pool wrapper that counts traffic in and out of the inner pool.
///
/// `outstanding()` is the number of views currently held by the caller, which
/// for a scroll view at rest must equal its window length.
#[derive(Debug)]
pub struct CountingPool<P> {
    inner: P,
    rents: usize,
    releases: usize,
    disposals: usize,
}

impl<P> CountingPool<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            rents: 0,
            releases: 0,
            disposals: 0,
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn rents(&self) -> usize {
        self.rents
    }

    pub fn releases(&self) -> usize {
        self.releases
    }

    pub fn disposals(&self) -> usize {
        self.disposals
    }

    pub fn outstanding(&self) -> usize {
        self.rents.saturating_sub(self.releases)
    }
}

impl<T, P: CellPool<T>> CellPool<T> for CountingPool<P> {
    type View = P::View;

    fn rent(&mut self, item: &T) -> Self::View {
        self.rents += 1;
        self.inner.rent(item)
    }

    fn release(&mut self, view: Self::View) {
        self.releases += 1;
        self.inner.release(view);
    }

    fn dispose(&mut self) {
        self.disposals += 1;
        self.inner.dispose();
    }
}

pub type HeightPool = CountingPool<StackPool<f32, HeightCell>>;

/// Counting pool of [`HeightCell`]s.
pub fn height_pool() -> HeightPool {
    CountingPool::new(StackPool::with_factory(|_: &f32| HeightCell::default()))
}

/// `count` items that all measure `height`.
pub fn uniform_heights(count: usize, height: f32) -> Vec<f32> {
    vec![height; count]
}

/// Heights cycling through `pattern`, handy for lists with uneven rows.
pub fn cycled_heights(count: usize, pattern: &[f32]) -> Vec<f32> {
    if pattern.is_empty() {
        return Vec::new();
    }
    pattern.iter().copied().cycle().take(count).collect()
}
