// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sticky header scroll trace.
//!
//! Scroll a headless 30-row list in 4px steps and print where the sticky
//! header lands each frame. Per-frame decisions are logged at `trace` level.
//!
//! Run:
//! - `cargo run -p understory_sticky --example scroll_trace`

use kurbo::{Rect, Size};
use understory_sticky::{
    ChildLayout, ConditionDecorator, Drawable, ListHost, Margins, SectionDrawables, SectionLabels,
    StickyConfig, StickyDrawables, StickySectionDecor,
};

const ROW: f64 = 32.0;
const ROWS: usize = 30;

/// Every seventh row starts a section.
fn section_start(position: usize) -> bool {
    position % 7 == 0
}

/// 30 rows in a 320x200 viewport.
struct List {
    scroll: f64,
    insets: Vec<f64>,
    children: Vec<ChildLayout>,
}

impl List {
    fn layout(&mut self) {
        self.children.clear();
        let mut y = -self.scroll;
        for (position, inset) in self.insets.iter().enumerate() {
            let decorated = Rect::new(0.0, y, 320.0, y + inset + ROW);
            let view = Rect::new(0.0, y + inset, 320.0, decorated.y1);
            y = decorated.y1;
            if decorated.y1 > 0.0 && decorated.y0 < 200.0 {
                self.children
                    .push(ChildLayout::new(Some(position), decorated, view));
            }
        }
    }
}

impl ListHost for List {
    fn item_count(&self) -> usize {
        ROWS
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child(&self, index: usize) -> Option<ChildLayout> {
        self.children.get(index).copied()
    }

    fn size(&self) -> Size {
        Size::new(320.0, 200.0)
    }
}

/// Prints instead of painting.
#[derive(Default)]
struct Printer {
    text: &'static str,
    position: usize,
    bounds: Rect,
}

impl Drawable<Vec<String>> for Printer {
    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn draw(&self, surface: &mut Vec<String>) {
        surface.push(format!(
            "{} {} at y {:.0}..{:.0}",
            self.text, self.position, self.bounds.y0, self.bounds.y1
        ));
    }
}

impl SectionLabels for Printer {
    fn section_height(&mut self, _: usize) -> f64 {
        18.0
    }
}

impl SectionDrawables<Vec<String>> for Printer {
    fn section_drawable(
        &mut self,
        position: usize,
        _: Rect,
        _: &ChildLayout,
    ) -> &mut dyn Drawable<Vec<String>> {
        self.text = "label";
        self.position = position / 7;
        self
    }
}

impl StickyDrawables<Vec<String>> for Printer {
    fn header_drawable(&mut self, position: usize, _: Rect) -> &mut dyn Drawable<Vec<String>> {
        self.text = "header";
        self.position = position / 7;
        self
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let config = StickyConfig::new().with_section_margins(Margins::symmetric(3.0));
    let mut decorator = ConditionDecorator::new(
        section_start,
        StickySectionDecor::new(Printer::default(), config),
    );

    let mut list = List {
        scroll: 0.0,
        insets: Vec::new(),
        children: Vec::new(),
    };
    let insets = (0..ROWS)
        .map(|position| decorator.item_offsets(&list, Some(position)).y0)
        .collect();
    list.insets = insets;

    for step in 0..60 {
        list.scroll = f64::from(step) * 4.0;
        list.layout();

        let mut lines: Vec<String> = Vec::new();
        decorator.draw_over(&list, &mut lines);
        println!("scroll {:>3}: {}", list.scroll, lines.join(", "));
    }
}
