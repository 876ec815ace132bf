// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fake list host for the integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use kurbo::{Rect, Size};
use understory_sticky::{
    ChildLayout, ConditionDecorator, Drawable, ItemInsets, ListHost, SectionCondition,
    SectionDrawables, SectionLabels, StickyDrawables,
};

/// A list of fixed-height rows scrolled by a plain offset.
///
/// Rows are stacked top-down from `-scroll`, or bottom-up from
/// `viewport + scroll` when reversed. Each row's decorated box is its view box
/// grown upward by the top inset the decorator asked for. Only rows
/// overlapping the viewport are reported, always in ascending position order.
pub(crate) struct FakeList {
    heights: Vec<f64>,
    width: f64,
    viewport: f64,
    reversed: bool,
    visible: Vec<ChildLayout>,
}

impl FakeList {
    pub(crate) fn new(heights: Vec<f64>, width: f64, viewport: f64) -> Self {
        Self {
            heights,
            width,
            viewport,
            reversed: false,
            visible: Vec::new(),
        }
    }

    pub(crate) fn uniform(count: usize, height: f64) -> Self {
        Self::new(vec![height; count], 100.0, 100.0)
    }

    pub(crate) fn reversed(mut self) -> Self {
        self.reversed = true;
        self
    }

    /// Lays the rows out at `scroll` with per-position top insets. Missing
    /// insets count as zero.
    pub(crate) fn layout(&mut self, scroll: f64, insets: &[f64]) {
        self.visible.clear();
        let mut cursor = if self.reversed {
            self.viewport + scroll
        } else {
            -scroll
        };
        for (position, &height) in self.heights.iter().enumerate() {
            let inset = insets.get(position).copied().unwrap_or(0.0);
            let decorated = if self.reversed {
                let top = cursor - inset - height;
                let bounds = Rect::new(0.0, top, self.width, cursor);
                cursor = top;
                bounds
            } else {
                let bounds = Rect::new(0.0, cursor, self.width, cursor + inset + height);
                cursor = bounds.y1;
                bounds
            };
            if decorated.y1 > 0.0 && decorated.y0 < self.viewport {
                let view = Rect::new(0.0, decorated.y0 + inset, self.width, decorated.y1);
                self.visible
                    .push(ChildLayout::new(Some(position), decorated, view));
            }
        }
    }

    /// Asks `decorator` for every row's reservation, then lays out at `scroll`.
    pub(crate) fn layout_with<C, D>(
        &mut self,
        decorator: &mut ConditionDecorator<C, D>,
        scroll: f64,
    ) where
        C: SectionCondition,
        D: ItemInsets,
    {
        let insets: Vec<f64> = (0..self.heights.len())
            .map(|position| decorator.item_offsets(&*self, Some(position)).y0)
            .collect();
        self.layout(scroll, &insets);
    }

    pub(crate) fn visible(&self) -> &[ChildLayout] {
        &self.visible
    }
}

impl ListHost for FakeList {
    fn item_count(&self) -> usize {
        self.heights.len()
    }

    fn child_count(&self) -> usize {
        self.visible.len()
    }

    fn child(&self, index: usize) -> Option<ChildLayout> {
        self.visible.get(index).copied()
    }

    fn size(&self) -> Size {
        Size::new(self.width, self.viewport)
    }
}

/// What a procedural decoration painted.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Paint {
    Section(usize, Rect),
    Header(usize, Rect),
}

/// Fixed-height labels that record themselves as [`Paint`]s.
pub(crate) struct Labels {
    height: f64,
    header: bool,
    position: usize,
    bounds: Rect,
}

impl Labels {
    pub(crate) fn new(height: f64) -> Self {
        Self {
            height,
            header: false,
            position: 0,
            bounds: Rect::ZERO,
        }
    }
}

impl Drawable<Vec<Paint>> for Labels {
    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn draw(&self, surface: &mut Vec<Paint>) {
        surface.push(if self.header {
            Paint::Header(self.position, self.bounds)
        } else {
            Paint::Section(self.position, self.bounds)
        });
    }
}

impl SectionLabels for Labels {
    fn section_height(&mut self, _: usize) -> f64 {
        self.height
    }
}

impl SectionDrawables<Vec<Paint>> for Labels {
    fn section_drawable(
        &mut self,
        position: usize,
        _: Rect,
        _: &ChildLayout,
    ) -> &mut dyn Drawable<Vec<Paint>> {
        self.header = false;
        self.position = position;
        self
    }
}

impl StickyDrawables<Vec<Paint>> for Labels {
    fn header_drawable(&mut self, position: usize, _: Rect) -> &mut dyn Drawable<Vec<Paint>> {
        self.header = true;
        self.position = position;
        self
    }
}

pub(crate) fn every_fifth(position: usize) -> bool {
    position % 5 == 0
}
