// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conditional item decoration: the per-frame driver.
//!
//! [`ConditionDecorator`] pairs a [`SectionCondition`] with a [`Decor`] and
//! exposes the two entry points a host list calls:
//!
//! - [`ConditionDecorator::item_offsets`] during layout, once per item, to learn
//!   how much space to reserve around it.
//! - [`ConditionDecorator::draw_over`] after the children are drawn, once per
//!   frame.
//!
//! ```rust
//! use kurbo::{Insets, Rect, Size};
//! use understory_sticky::{ChildLayout, ConditionDecorator, Decor, Frame, ItemInsets, ListHost};
//!
//! struct OneRow;
//!
//! impl ListHost for OneRow {
//!     fn item_count(&self) -> usize { 1 }
//!     fn child_count(&self) -> usize { 1 }
//!     fn child(&self, _: usize) -> Option<ChildLayout> {
//!         let bounds = Rect::new(0.0, 0.0, 100.0, 20.0);
//!         Some(ChildLayout::new(Some(0), bounds, bounds))
//!     }
//!     fn size(&self) -> Size { Size::new(100.0, 100.0) }
//! }
//!
//! /// Counts decorated children per frame.
//! #[derive(Default)]
//! struct Counter(usize);
//!
//! impl<H: ListHost + ?Sized> Decor<H, Vec<usize>> for Counter {
//!     fn prepare(&mut self, _: &mut Frame<'_, H, Vec<usize>>) {
//!         self.0 = 0;
//!     }
//!     fn draw_item(&mut self, _: &mut Frame<'_, H, Vec<usize>>, _: &ChildLayout, _: usize) {
//!         self.0 += 1;
//!     }
//!     fn post_draw(&mut self, frame: &mut Frame<'_, H, Vec<usize>>) {
//!         frame.surface.push(self.0);
//!     }
//! }
//!
//! impl ItemInsets for Counter {
//!     fn section_inset(&mut self, _: usize) -> Insets {
//!         Insets::new(0.0, 12.0, 0.0, 0.0)
//!     }
//! }
//!
//! let mut decorator = ConditionDecorator::new(|p: usize| p == 0, Counter::default());
//! let mut frames: Vec<usize> = Vec::new();
//! decorator.draw_over(&OneRow, &mut frames);
//! assert_eq!(frames, [1]);
//! assert_eq!(decorator.item_offsets(&OneRow, Some(0)).y0, 12.0);
//! ```

use kurbo::Insets;
use tracing::trace;

use crate::host::{ChildLayout, ListHost, SectionCondition, children};

/// Context handed to every [`Decor`] hook during one frame.
#[derive(Debug)]
pub struct Frame<'a, H: ?Sized, S: ?Sized> {
    /// The host list, read-only for the frame.
    pub host: &'a H,
    /// The drawing target.
    pub surface: &'a mut S,
}

impl<'a, H: ?Sized, S: ?Sized> Frame<'a, H, S> {
    /// Creates a frame context.
    pub fn new(host: &'a H, surface: &'a mut S) -> Self {
        Self { host, surface }
    }
}

/// Space a decoration reserves around items, queried during layout.
///
/// Both hooks default to no reservation.
pub trait ItemInsets {
    /// Space to reserve around a position that satisfies the condition.
    fn section_inset(&mut self, position: usize) -> Insets {
        let _ = position;
        Insets::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Space to reserve around any position.
    fn item_inset(&mut self, position: usize, item_count: usize) -> Insets {
        let _ = (position, item_count);
        Insets::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Decoration hooks driven by [`ConditionDecorator`].
///
/// Every hook has a no-op default.
pub trait Decor<H: ListHost + ?Sized, S: ?Sized>: ItemInsets {
    /// Called once per frame before any item is visited.
    fn prepare(&mut self, frame: &mut Frame<'_, H, S>) {
        let _ = frame;
    }

    /// Called for each visible child whose position satisfies the condition.
    fn draw_item(&mut self, frame: &mut Frame<'_, H, S>, child: &ChildLayout, position: usize) {
        let _ = (frame, child, position);
    }

    /// Called once per frame after all items are visited.
    fn post_draw(&mut self, frame: &mut Frame<'_, H, S>) {
        let _ = frame;
    }
}

/// Applies a [`Decor`] to the items selected by a [`SectionCondition`].
#[derive(Clone, Debug)]
pub struct ConditionDecorator<C, D> {
    condition: C,
    decor: D,
}

impl<C, D> ConditionDecorator<C, D>
where
    C: SectionCondition,
{
    /// Creates a decorator.
    pub fn new(condition: C, decor: D) -> Self {
        Self { condition, decor }
    }

    /// Returns the condition.
    pub fn condition(&self) -> &C {
        &self.condition
    }

    /// Returns the decoration.
    pub fn decor(&self) -> &D {
        &self.decor
    }

    /// Returns the decoration mutably.
    pub fn decor_mut(&mut self) -> &mut D {
        &mut self.decor
    }

    /// Splits the decorator into its condition and decoration.
    pub fn into_parts(self) -> (C, D) {
        (self.condition, self.decor)
    }

    /// Space to reserve around the item at `position`.
    ///
    /// Transient children without a position get no reservation.
    pub fn item_offsets<H>(&mut self, host: &H, position: Option<usize>) -> Insets
    where
        H: ListHost + ?Sized,
        D: ItemInsets,
    {
        let Some(position) = position else {
            return Insets::new(0.0, 0.0, 0.0, 0.0);
        };
        let mut insets = if self.condition.is_section_start(position) {
            self.decor.section_inset(position)
        } else {
            Insets::new(0.0, 0.0, 0.0, 0.0)
        };
        let extra = self.decor.item_inset(position, host.item_count());
        insets.x0 += extra.x0;
        insets.y0 += extra.y0;
        insets.x1 += extra.x1;
        insets.y1 += extra.y1;
        insets
    }

    /// Runs one decoration frame over the visible children of `host`.
    pub fn draw_over<H, S>(&mut self, host: &H, surface: &mut S)
    where
        H: ListHost + ?Sized,
        S: ?Sized,
        D: Decor<H, S>,
    {
        if host.item_count() == 0 {
            trace!("empty list, nothing to decorate");
            return;
        }
        let mut frame = Frame::new(host, surface);
        self.decor.prepare(&mut frame);
        for child in children(host) {
            let Some(position) = child.position else {
                continue;
            };
            if self.condition.is_section_start(position) {
                self.decor.draw_item(&mut frame, &child, position);
            }
        }
        self.decor.post_draw(&mut frame);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::{Insets, Rect, Size};

    use super::{ConditionDecorator, Decor, Frame, ItemInsets};
    use crate::host::{ChildLayout, ListHost};

    struct Rows {
        count: usize,
        visible: Vec<ChildLayout>,
    }

    impl ListHost for Rows {
        fn item_count(&self) -> usize {
            self.count
        }

        fn child_count(&self) -> usize {
            self.visible.len()
        }

        fn child(&self, index: usize) -> Option<ChildLayout> {
            self.visible.get(index).copied()
        }

        fn size(&self) -> Size {
            Size::new(100.0, 100.0)
        }
    }

    #[derive(Default)]
    struct Log(Vec<&'static str>, Vec<usize>);

    impl<H: ListHost + ?Sized> Decor<H, ()> for Log {
        fn prepare(&mut self, _: &mut Frame<'_, H, ()>) {
            self.0.push("prepare");
        }

        fn draw_item(&mut self, _: &mut Frame<'_, H, ()>, _: &ChildLayout, position: usize) {
            self.0.push("item");
            self.1.push(position);
        }

        fn post_draw(&mut self, _: &mut Frame<'_, H, ()>) {
            self.0.push("post");
        }
    }

    impl ItemInsets for Log {
        fn section_inset(&mut self, _: usize) -> Insets {
            Insets::new(0.0, 10.0, 0.0, 0.0)
        }

        fn item_inset(&mut self, position: usize, item_count: usize) -> Insets {
            if position + 1 == item_count {
                Insets::new(0.0, 5.0, 0.0, 1.0)
            } else {
                Insets::new(0.0, 0.0, 0.0, 0.0)
            }
        }
    }

    fn row(position: Option<usize>, top: f64) -> ChildLayout {
        let bounds = Rect::new(0.0, top, 100.0, top + 20.0);
        ChildLayout::new(position, bounds, bounds)
    }

    #[test]
    fn frame_visits_matching_children_between_prepare_and_post() {
        let rows = Rows {
            count: 10,
            visible: vec![row(Some(4), 0.0), row(None, 20.0), row(Some(5), 40.0)],
        };
        let mut decorator = ConditionDecorator::new(|p: usize| p % 5 == 0, Log::default());
        decorator.draw_over(&rows, &mut ());

        assert_eq!(decorator.decor().0, vec!["prepare", "item", "post"]);
        assert_eq!(decorator.decor().1, vec![5]);
    }

    #[test]
    fn empty_list_skips_the_frame() {
        let rows = Rows {
            count: 0,
            visible: vec![],
        };
        let mut decorator = ConditionDecorator::new(|_: usize| true, Log::default());
        decorator.draw_over(&rows, &mut ());
        assert!(decorator.decor().0.is_empty());
    }

    #[test]
    fn offsets_sum_section_and_item_insets() {
        let rows = Rows {
            count: 10,
            visible: vec![],
        };
        let mut decorator = ConditionDecorator::new(|p: usize| p % 5 == 0, Log::default());

        assert_eq!(decorator.item_offsets(&rows, Some(3)).y0, 0.0);
        assert_eq!(decorator.item_offsets(&rows, Some(5)).y0, 10.0);
        let last = decorator.item_offsets(&rows, Some(9));
        assert_eq!((last.y0, last.y1), (5.0, 1.0));
        assert_eq!(decorator.item_offsets(&rows, None).y0, 0.0);
    }
}
