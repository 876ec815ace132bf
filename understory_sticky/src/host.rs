// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator ports implemented by the host list container.
//!
//! The host owns layout, measurement, and recycling. Once per frame it exposes
//! a read-only snapshot of its visible children through [`ListHost`]; the
//! decorations in this crate only ever read from it.

use kurbo::{Insets, Point, Rect, Size, Vec2};

/// Predicate deciding which positions start a new section.
///
/// Implemented for any `Fn(usize) -> bool`:
///
/// ```rust
/// use understory_sticky::SectionCondition;
///
/// let every_tenth = |position: usize| position % 10 == 0;
/// assert!(every_tenth.is_section_start(20));
/// assert!(!every_tenth.is_section_start(21));
/// ```
pub trait SectionCondition {
    /// Returns `true` if the item at `position` begins a section.
    fn is_section_start(&self, position: usize) -> bool;
}

impl<F> SectionCondition for F
where
    F: Fn(usize) -> bool,
{
    fn is_section_start(&self, position: usize) -> bool {
        self(position)
    }
}

/// Layout snapshot of one visible child for the current frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChildLayout {
    /// Adapter position, or `None` for transient children (for example one
    /// that is animating out after removal).
    pub position: Option<usize>,
    /// Layout box including margins and decoration insets, in container coordinates.
    pub decorated_bounds: Rect,
    /// Drawing box without decoration insets, in container coordinates, before
    /// [`ChildLayout::translation`] is applied.
    pub view_bounds: Rect,
    /// In-flight translation contributed by item animations.
    pub translation: Vec2,
}

impl ChildLayout {
    /// Creates a child layout with no translation.
    #[must_use]
    pub fn new(position: Option<usize>, decorated_bounds: Rect, view_bounds: Rect) -> Self {
        Self {
            position,
            decorated_bounds,
            view_bounds,
            translation: Vec2::ZERO,
        }
    }

    /// Returns a copy with the given translation.
    #[must_use]
    pub fn with_translation(mut self, translation: Vec2) -> Self {
        self.translation = translation;
        self
    }

    /// View bounds shifted by the current translation.
    #[must_use]
    pub fn translated_view_bounds(&self) -> Rect {
        self.view_bounds + self.translation
    }
}

/// Read-only view of the host list container for one frame.
pub trait ListHost {
    /// Number of items in the adapter's data set.
    fn item_count(&self) -> usize;

    /// Number of currently visible children.
    fn child_count(&self) -> usize;

    /// The visible child at `index` in visible order, if any.
    fn child(&self, index: usize) -> Option<ChildLayout>;

    /// Container size in logical pixels.
    fn size(&self) -> Size;

    /// Container padding. Defaults to none.
    fn padding(&self) -> Insets {
        Insets::new(0.0, 0.0, 0.0, 0.0)
    }

    /// The topmost visible child under `point`, using translated view bounds
    /// with inclusive edges.
    ///
    /// The default walks children from last to first, so later children in
    /// visible order win on overlap.
    fn child_under(&self, point: Point) -> Option<ChildLayout> {
        (0..self.child_count())
            .rev()
            .filter_map(|index| self.child(index))
            .find(|child| {
                let bounds = child.translated_view_bounds();
                point.x >= bounds.x0
                    && point.x <= bounds.x1
                    && point.y >= bounds.y0
                    && point.y <= bounds.y1
            })
    }
}

/// Iterates over the visible children of `host` in visible order.
pub fn children<H>(host: &H) -> impl Iterator<Item = ChildLayout> + '_
where
    H: ListHost + ?Sized,
{
    (0..host.child_count()).filter_map(|index| host.child(index))
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::{Point, Rect, Size, Vec2};

    use super::{ChildLayout, ListHost, children};

    struct Strip(Vec<ChildLayout>);

    impl ListHost for Strip {
        fn item_count(&self) -> usize {
            self.0.len()
        }

        fn child_count(&self) -> usize {
            self.0.len()
        }

        fn child(&self, index: usize) -> Option<ChildLayout> {
            self.0.get(index).copied()
        }

        fn size(&self) -> Size {
            Size::new(100.0, 100.0)
        }
    }

    fn row(position: usize, top: f64) -> ChildLayout {
        let bounds = Rect::new(0.0, top, 100.0, top + 20.0);
        ChildLayout::new(Some(position), bounds, bounds)
    }

    #[test]
    fn child_under_uses_translated_bounds_with_inclusive_edges() {
        let strip = Strip(vec![
            row(0, 0.0).with_translation(Vec2::new(0.0, 30.0)),
            row(1, 20.0),
        ]);

        // Row 0 has moved down to 30..50, so nothing covers y = 10.
        assert_eq!(strip.child_under(Point::new(0.0, 10.0)), None);
        // Both rows cover y = 40; row 1 is scanned first and its bottom edge
        // is inclusive.
        let hit = strip.child_under(Point::new(0.0, 40.0)).map(|c| c.position);
        assert_eq!(hit, Some(Some(1)));
        let hit = strip.child_under(Point::new(0.0, 45.0)).map(|c| c.position);
        assert_eq!(hit, Some(Some(0)));
    }

    #[test]
    fn children_iterates_in_visible_order() {
        let strip = Strip(vec![row(3, 0.0), row(4, 20.0), row(5, 40.0)]);
        let positions: Vec<_> = children(&strip).filter_map(|c| c.position).collect();
        assert_eq!(positions, vec![3, 4, 5]);
    }

    #[test]
    fn closures_are_section_conditions() {
        use super::SectionCondition;

        let condition = |position: usize| position == 2;
        assert!(condition.is_section_start(2));
        assert!(!condition.is_section_start(3));
    }
}
