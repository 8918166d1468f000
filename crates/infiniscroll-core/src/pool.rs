//! Recycling pools for cell views.
//!
//! The engine never creates views itself. It rents one from a [`CellPool`]
//! when a data item becomes visible and hands it back when the item scrolls
//! out. Views move into and out of the pool by value, so a view can only be
//! released once.

use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;

/// A view that can display one data item at a time.
pub trait CellView<T> {
    /// Shows `item` in this view, replacing whatever it showed before.
    fn bind(&mut self, item: &T);

    /// Height the bound item needs when laid out at `width`.
    fn measure_height(&self, width: f32) -> f32;

    /// Called by pools when the view enters or leaves use.
    fn set_active(&mut self, _active: bool) {}
}

/// Source of reusable views.
pub trait CellPool<T> {
    type View: CellView<T>;

    /// Hands out an active view suitable for `item`. The caller binds it.
    fn rent(&mut self, item: &T) -> Self::View;

    /// Deactivates `view` and keeps it for a later [`rent`](Self::rent).
    fn release(&mut self, view: Self::View);

    /// Destroys every pooled view. Calling it again is a no-op.
    fn dispose(&mut self);
}

/// LIFO pool backed by create and destroy callbacks.
pub struct StackPool<T, V> {
    stack: Vec<V>,
    create: Box<dyn FnMut(&T) -> V>,
    destroy: Box<dyn FnMut(V)>,
    created: usize,
    outstanding: usize,
}

impl<T, V: CellView<T>> StackPool<T, V> {
    pub fn new(create: impl FnMut(&T) -> V + 'static, destroy: impl FnMut(V) + 'static) -> Self {
        Self {
            stack: Vec::new(),
            create: Box::new(create),
            destroy: Box::new(destroy),
            created: 0,
            outstanding: 0,
        }
    }

    /// Pool whose views are simply dropped on disposal.
    pub fn with_factory(create: impl FnMut(&T) -> V + 'static) -> Self {
        Self::new(create, |_view: V| {})
    }

    /// Views waiting in the pool.
    pub fn pooled(&self) -> usize {
        self.stack.len()
    }

    /// Views ever produced by the create callback.
    pub fn created(&self) -> usize {
        self.created
    }

    /// Views currently rented out.
    pub fn outstanding(&self) -> usize {
        self.outstanding
    }
}

impl<T, V: CellView<T>> CellPool<T> for StackPool<T, V> {
    type View = V;

    fn rent(&mut self, item: &T) -> V {
        let mut view = match self.stack.pop() {
            Some(view) => view,
            None => {
                self.created += 1;
                (self.create)(item)
            }
        };
        view.set_active(true);
        self.outstanding += 1;
        view
    }

    fn release(&mut self, mut view: V) {
        view.set_active(false);
        self.outstanding = self.outstanding.saturating_sub(1);
        self.stack.push(view);
    }

    fn dispose(&mut self) {
        for view in self.stack.drain(..) {
            (self.destroy)(view);
        }
    }
}

impl<T, V> fmt::Debug for StackPool<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackPool")
            .field("pooled", &self.stack.len())
            .field("created", &self.created)
            .field("outstanding", &self.outstanding)
            .finish()
    }
}

/// A view rented from a [`KeyedPool`], tagged with the key of the inner pool
/// it came from.
#[derive(Debug)]
pub struct KeyedView<K, V> {
    key: K,
    view: V,
}

impl<K, V> KeyedView<K, V> {
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}

impl<T, K, V: CellView<T>> CellView<T> for KeyedView<K, V> {
    fn bind(&mut self, item: &T) {
        self.view.bind(item);
    }

    fn measure_height(&self, width: f32) -> f32 {
        self.view.measure_height(width)
    }

    fn set_active(&mut self, active: bool) {
        self.view.set_active(active);
    }
}

/// Pool that keeps a separate inner pool per kind of cell.
///
/// A selector maps each item to a key; views rented for one key are only
/// ever reused for items with the same key.
pub struct KeyedPool<T, K, P> {
    pools: IndexMap<K, P>,
    select: Box<dyn Fn(&T) -> K>,
    make_pool: Box<dyn FnMut(&K) -> P>,
}

impl<T, K, P> KeyedPool<T, K, P>
where
    K: Hash + Eq + Clone,
    P: CellPool<T>,
{
    pub fn new(
        select: impl Fn(&T) -> K + 'static,
        make_pool: impl FnMut(&K) -> P + 'static,
    ) -> Self {
        Self {
            pools: IndexMap::new(),
            select: Box::new(select),
            make_pool: Box::new(make_pool),
        }
    }

    /// Inner pool for `key`, if any item with that key was ever rented.
    pub fn pool(&self, key: &K) -> Option<&P> {
        self.pools.get(key)
    }

    /// Keys in the order their pools were first needed.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.pools.keys()
    }
}

impl<T, K, P> CellPool<T> for KeyedPool<T, K, P>
where
    K: Hash + Eq + Clone,
    P: CellPool<T>,
{
    type View = KeyedView<K, P::View>;

    fn rent(&mut self, item: &T) -> Self::View {
        let key = (self.select)(item);
        let pool = self
            .pools
            .entry(key.clone())
            .or_insert_with(|| (self.make_pool)(&key));
        KeyedView {
            view: pool.rent(item),
            key,
        }
    }

    fn release(&mut self, view: Self::View) {
        let KeyedView { key, view } = view;
        match self.pools.get_mut(&key) {
            Some(pool) => pool.release(view),
            None => log::warn!("released a keyed view whose pool no longer exists; dropping it"),
        }
    }

    fn dispose(&mut self) {
        for pool in self.pools.values_mut() {
            pool.dispose();
        }
    }
}

impl<T, K: fmt::Debug, P: fmt::Debug> fmt::Debug for KeyedPool<T, K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedPool")
            .field("pools", &self.pools)
            .finish()
    }
}
