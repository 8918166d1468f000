//! The run of materialized cells.

use std::collections::vec_deque::{self, VecDeque};
use std::ops::RangeInclusive;

use infiniscroll_geometry::{span_in_parent, VerticalSpan};

/// One materialized cell.
#[derive(Debug)]
pub struct CellEntry<V> {
    /// Data index shown by this cell.
    pub index: usize,
    /// Height measured when the cell was created.
    pub height: f32,
    /// Centre of the cell before the scroll position is added.
    pub reference_position: f32,
    pub view: V,
    extent: f32,
}

impl<V> CellEntry<V> {
    pub(crate) fn new(
        index: usize,
        height: f32,
        reference_position: f32,
        view: V,
        extent: f32,
    ) -> Self {
        Self {
            index,
            height,
            reference_position,
            view,
            extent,
        }
    }

    /// Space this cell added to the occupied extent (height plus any spacing).
    pub fn extent(&self) -> f32 {
        self.extent
    }

    /// Where the cell's centre is drawn at `scroll_position`.
    pub fn displayed_position(&self, scroll_position: f32) -> f32 {
        self.reference_position + scroll_position
    }

    /// Vertical extent of the cell in container space at `scroll_position`.
    ///
    /// The content frame's origin sits at `scroll_position` in the container.
    pub fn span_at(&self, scroll_position: f32) -> VerticalSpan {
        let local = VerticalSpan::of_cell(self.reference_position, self.height);
        span_in_parent(local, scroll_position)
    }
}

/// Contiguous run of materialized cells, ordered from the anchor edge
/// outward.
///
/// The window does not know which edge is the anchor; it only keeps the
/// order the placement strategy inserts in. Indices are contiguous, so the
/// entry for an index is found by its distance from the front.
#[derive(Debug)]
pub struct CellWindow<V> {
    entries: VecDeque<CellEntry<V>>,
    occupied_extent: f32,
}

impl<V> Default for CellWindow<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> CellWindow<V> {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            occupied_extent: 0.0,
        }
    }

    pub fn entries(&self) -> &VecDeque<CellEntry<V>> {
        &self.entries
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, CellEntry<V>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry closest to the anchor edge.
    pub fn near(&self) -> Option<&CellEntry<V>> {
        self.entries.front()
    }

    /// Entry furthest from the anchor edge.
    pub fn far(&self) -> Option<&CellEntry<V>> {
        self.entries.back()
    }

    /// Materialized entry for `index`, if any.
    pub fn get(&self, index: usize) -> Option<&CellEntry<V>> {
        let range = self.indices()?;
        if !range.contains(&index) {
            return None;
        }
        let near = self.entries.front()?.index;
        self.entries.get(near.abs_diff(index))
    }

    pub fn contains(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Lowest and highest materialized index.
    pub fn indices(&self) -> Option<RangeInclusive<usize>> {
        let near = self.entries.front()?.index;
        let far = self.entries.back()?.index;
        Some(near.min(far)..=near.max(far))
    }

    /// Height plus spacing of everything materialized since the last reset.
    pub fn occupied_extent(&self) -> f32 {
        self.occupied_extent
    }

    /// Adds `entry` at the anchor end when `nearer`, else at the far end.
    pub fn insert(&mut self, entry: CellEntry<V>, nearer: bool) {
        self.occupied_extent += entry.extent;
        if nearer {
            self.entries.push_front(entry);
        } else {
            self.entries.push_back(entry);
        }
    }

    pub fn pop_near(&mut self) -> Option<CellEntry<V>> {
        let entry = self.entries.pop_front()?;
        self.occupied_extent -= entry.extent;
        Some(entry)
    }

    pub fn pop_far(&mut self) -> Option<CellEntry<V>> {
        let entry = self.entries.pop_back()?;
        self.occupied_extent -= entry.extent;
        Some(entry)
    }

    /// Moves every reference position by `delta`.
    pub fn shift_positions(&mut self, delta: f32) {
        for entry in self.entries.iter_mut() {
            entry.reference_position += delta;
        }
    }

    /// Moves every data index up by `by`.
    pub fn shift_indices(&mut self, by: usize) {
        for entry in self.entries.iter_mut() {
            entry.index += by;
        }
    }

    /// Removes every entry. The occupied extent is reset as well.
    pub fn drain(&mut self) -> vec_deque::Drain<'_, CellEntry<V>> {
        self.occupied_extent = 0.0;
        self.entries.drain(..)
    }

    pub fn reset_extent(&mut self) {
        self.occupied_extent = 0.0;
    }
}
