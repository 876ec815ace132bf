// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size, Vec2};
use understory_sticky::{
    ChildLayout, ConditionDecorator, Constraints, Drawable, HeaderAdapter, HeaderLayout,
    HeaderView, ListHost, SectionDrawables, SectionLabels, StickyConfig, StickyDrawables,
    StickySectionDecor, ViewStickyBuilder,
};

/// Visible rows of a list scrolled to `scroll`, with a 12px gap above every
/// eighth row.
struct Strip {
    children: Vec<ChildLayout>,
    count: usize,
    viewport: f64,
}

impl Strip {
    fn new(visible: usize, scroll: f64) -> Self {
        let count = visible * 4;
        let viewport = visible as f64 * 24.0;
        let mut children = Vec::with_capacity(visible + 1);
        let mut y = -scroll;
        for position in 0..count {
            let inset = if position % 8 == 0 { 12.0 } else { 0.0 };
            let decorated = Rect::new(0.0, y, 400.0, y + inset + 24.0);
            y = decorated.y1;
            if decorated.y1 > 0.0 && decorated.y0 < viewport {
                let view = Rect::new(0.0, decorated.y0 + inset, 400.0, decorated.y1);
                children.push(ChildLayout::new(Some(position), decorated, view));
            }
        }
        Self {
            children,
            count,
            viewport,
        }
    }
}

impl ListHost for Strip {
    fn item_count(&self) -> usize {
        self.count
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child(&self, index: usize) -> Option<ChildLayout> {
        self.children.get(index).copied()
    }

    fn size(&self) -> Size {
        Size::new(400.0, self.viewport)
    }
}

#[derive(Default)]
struct Sink {
    bounds: Rect,
}

impl Drawable<f64> for Sink {
    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn draw(&self, surface: &mut f64) {
        *surface += self.bounds.y0;
    }
}

impl SectionLabels for Sink {
    fn section_height(&mut self, _: usize) -> f64 {
        12.0
    }
}

impl SectionDrawables<f64> for Sink {
    fn section_drawable(&mut self, _: usize, _: Rect, _: &ChildLayout) -> &mut dyn Drawable<f64> {
        self
    }
}

impl StickyDrawables<f64> for Sink {
    fn header_drawable(&mut self, _: usize, _: Rect) -> &mut dyn Drawable<f64> {
        self
    }
}

struct Row(Rect);

impl HeaderLayout for Row {
    fn measure(&mut self, constraints: Constraints) -> Size {
        Size::new(constraints.max_width, 24.0)
    }

    fn layout(&mut self, bounds: Rect) {
        self.0 = bounds;
    }

    fn bounds(&self) -> Rect {
        self.0
    }
}

impl HeaderView<f64> for Row {
    fn draw(&self, surface: &mut f64, offset: Vec2) {
        *surface += offset.y;
    }
}

struct Rows(usize);

impl HeaderAdapter for Rows {
    type View = Row;
    type ContentType = u8;

    fn item_count(&self) -> usize {
        self.0
    }

    fn content_type(&self, _: usize) -> u8 {
        0
    }

    fn bind_header(&mut self, _: usize, _: u8) -> Row {
        Row(Rect::ZERO)
    }
}

fn every_eighth(position: usize) -> bool {
    position % 8 == 0
}

fn bench_procedural_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("sticky/procedural_frame");

    for visible in [16usize, 64, 256] {
        // Mid-section, with the next label pushing the header.
        let strip = Strip::new(visible, 300.0);
        let mut decorator = ConditionDecorator::new(
            every_eighth,
            StickySectionDecor::new(Sink::default(), StickyConfig::new()),
        );

        group.bench_with_input(BenchmarkId::from_parameter(visible), &strip, |b, strip| {
            b.iter(|| {
                let mut surface = 0.0_f64;
                decorator.draw_over(black_box(strip), &mut surface);
                black_box(surface);
            });
        });
    }

    group.finish();
}

fn bench_view_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("sticky/view_frame");

    for visible in [16usize, 64, 256] {
        let strip = Strip::new(visible, 300.0);
        let Ok(mut decor) = ViewStickyBuilder::new()
            .condition(every_eighth as fn(usize) -> bool)
            .adapter(Rows(strip.count))
            .build()
        else {
            return;
        };

        // Cached header: steady-state frames never rebind.
        group.bench_with_input(BenchmarkId::new("cached", visible), &strip, |b, strip| {
            b.iter(|| {
                let mut surface = 0.0_f64;
                black_box(decor.draw_over(black_box(strip), &mut surface));
            });
        });

        // Invalidated every frame, as after a data set change.
        group.bench_with_input(BenchmarkId::new("rebind", visible), &strip, |b, strip| {
            b.iter(|| {
                decor.on_data_set_changed();
                let mut surface = 0.0_f64;
                black_box(decor.draw_over(black_box(strip), &mut surface));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_procedural_frame, bench_view_frame);
criterion_main!(benches);
