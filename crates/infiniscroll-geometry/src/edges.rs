//! Vertical edge tests between a child span and its parent.
//!
//! All comparisons are strict: a child whose edge lies exactly on the
//! parent's edge is neither fully inside nor fully outside.

/// One of the two vertical edges of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
}

impl Edge {
    /// Returns the opposite edge.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Edge::Top => Edge::Bottom,
            Edge::Bottom => Edge::Top,
        }
    }
}

/// Vertical extent of a rectangle, y axis pointing up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VerticalSpan {
    pub bottom: f32,
    pub top: f32,
}

impl VerticalSpan {
    pub const fn new(bottom: f32, top: f32) -> Self {
        Self { bottom, top }
    }

    /// Span of a cell of `height` whose centre sits at `position`.
    pub fn of_cell(position: f32, height: f32) -> Self {
        let half = height * 0.5;
        Self {
            bottom: position - half,
            top: position + half,
        }
    }

    /// Span of a container of `height` centred on its own origin.
    pub fn of_container(height: f32) -> Self {
        Self::of_cell(0.0, height)
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    pub fn translate(&self, dy: f32) -> Self {
        Self {
            bottom: self.bottom + dy,
            top: self.top + dy,
        }
    }

    /// Same span with `edge` pushed outward by `amount`.
    pub fn extend(&self, edge: Edge, amount: f32) -> Self {
        match edge {
            Edge::Top => Self {
                top: self.top + amount,
                ..*self
            },
            Edge::Bottom => Self {
                bottom: self.bottom - amount,
                ..*self
            },
        }
    }

    /// Coordinate of the given edge.
    #[inline]
    pub fn edge(&self, edge: Edge) -> f32 {
        match edge {
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
        }
    }
}

/// Maps a span expressed in a child frame into the parent frame, given
/// where the child frame's origin sits in the parent.
pub fn span_in_parent(child_local: VerticalSpan, child_origin_y: f32) -> VerticalSpan {
    child_local.translate(child_origin_y)
}

/// Child's bottom is above the parent's bottom extended downward by `margin`.
#[inline]
pub fn is_fully_above_parent_bottom(child: VerticalSpan, parent: VerticalSpan, margin: f32) -> bool {
    child.bottom > parent.bottom - margin
}

/// Child's top is below the parent's top extended upward by `margin`.
#[inline]
pub fn is_fully_below_parent_top(child: VerticalSpan, parent: VerticalSpan, margin: f32) -> bool {
    child.top < parent.top + margin
}

/// Child lies entirely below the parent's bottom edge.
#[inline]
pub fn is_fully_below_parent_bottom(child: VerticalSpan, parent: VerticalSpan) -> bool {
    child.top < parent.bottom
}

/// Child lies entirely above the parent's top edge.
#[inline]
pub fn is_fully_above_parent_top(child: VerticalSpan, parent: VerticalSpan) -> bool {
    child.bottom > parent.top
}

/// Distance from the child's top down from the parent's top.
/// Positive while the child's top is below the parent's top.
#[inline]
pub fn distance_from_top_to_parent_top(child: VerticalSpan, parent: VerticalSpan) -> f32 {
    parent.top - child.top
}

/// Distance from the child's bottom up from the parent's bottom.
/// Positive while the child's bottom is above the parent's bottom.
#[inline]
pub fn distance_from_bottom_to_parent_bottom(child: VerticalSpan, parent: VerticalSpan) -> f32 {
    child.bottom - parent.bottom
}

/// Child has left the parent entirely across `edge`.
pub fn is_fully_outside(child: VerticalSpan, parent: VerticalSpan, edge: Edge) -> bool {
    match edge {
        Edge::Top => is_fully_above_parent_top(child, parent),
        Edge::Bottom => is_fully_below_parent_bottom(child, parent),
    }
}

/// Child's edge facing `edge` lies inside the parent extended by `margin`
/// on that side, leaving room for a neighbour beyond it.
pub fn reaches_into(child: VerticalSpan, parent: VerticalSpan, edge: Edge, margin: f32) -> bool {
    match edge {
        Edge::Top => is_fully_below_parent_top(child, parent, margin),
        Edge::Bottom => is_fully_above_parent_bottom(child, parent, margin),
    }
}

/// Gap between the child's edge facing `edge` and the parent's `edge`.
/// Positive while the child has pulled away from that edge.
pub fn gap_to(child: VerticalSpan, parent: VerticalSpan, edge: Edge) -> f32 {
    match edge {
        Edge::Top => distance_from_top_to_parent_top(child, parent),
        Edge::Bottom => distance_from_bottom_to_parent_bottom(child, parent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> VerticalSpan {
        VerticalSpan::of_container(100.0)
    }

    #[test]
    fn cell_span_is_centred() {
        let span = VerticalSpan::of_cell(10.0, 20.0);
        assert_eq!(span.bottom, 0.0);
        assert_eq!(span.top, 20.0);
        assert_eq!(span.height(), 20.0);
    }

    #[test]
    fn fully_outside_is_strict() {
        // Touching the top edge exactly is not outside.
        let touching = VerticalSpan::new(50.0, 70.0);
        assert!(!is_fully_outside(touching, viewport(), Edge::Top));

        let above = VerticalSpan::new(50.5, 70.0);
        assert!(is_fully_outside(above, viewport(), Edge::Top));

        let touching_bottom = VerticalSpan::new(-70.0, -50.0);
        assert!(!is_fully_outside(touching_bottom, viewport(), Edge::Bottom));
        let below = VerticalSpan::new(-70.5, -50.5);
        assert!(is_fully_outside(below, viewport(), Edge::Bottom));
    }

    #[test]
    fn reaches_into_uses_margin_as_lookahead() {
        // Child sits just below the viewport bottom.
        let child = VerticalSpan::new(-60.0, -52.0);
        assert!(!reaches_into(child, viewport(), Edge::Bottom, 0.0));
        assert!(reaches_into(child, viewport(), Edge::Bottom, 20.0));

        let near_top = VerticalSpan::new(40.0, 55.0);
        assert!(!reaches_into(near_top, viewport(), Edge::Top, 0.0));
        assert!(reaches_into(near_top, viewport(), Edge::Top, 10.0));
    }

    #[test]
    fn gaps_are_positive_when_pulled_away() {
        let child = VerticalSpan::new(-30.0, 30.0);
        assert_eq!(gap_to(child, viewport(), Edge::Top), 20.0);
        assert_eq!(gap_to(child, viewport(), Edge::Bottom), 20.0);

        let overflowing = VerticalSpan::new(-80.0, 60.0);
        assert_eq!(gap_to(overflowing, viewport(), Edge::Top), -10.0);
        assert_eq!(gap_to(overflowing, viewport(), Edge::Bottom), -30.0);
    }

    #[test]
    fn span_in_parent_translates_by_origin() {
        let local = VerticalSpan::new(-5.0, 5.0);
        assert_eq!(span_in_parent(local, 12.0), VerticalSpan::new(7.0, 17.0));
    }

    #[test]
    fn extend_moves_one_edge_outward() {
        let span = viewport().extend(Edge::Bottom, 5.0);
        assert_eq!(span, VerticalSpan::new(-55.0, 50.0));
        assert_eq!(viewport().extend(Edge::Top, 5.0).top, 55.0);
    }

    #[test]
    fn opposite_edges() {
        assert_eq!(Edge::Top.opposite(), Edge::Bottom);
        assert_eq!(Edge::Bottom.opposite(), Edge::Top);
    }
}
