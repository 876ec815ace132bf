// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Procedural sticky headers.

use kurbo::{Insets, Rect};

use crate::config::StickyConfig;
use crate::decorator::{Decor, Frame, ItemInsets};
use crate::geometry::SectionGeometry;
use crate::host::{ChildLayout, ListHost, children};
use crate::section::{Drawable, SectionDrawables, SectionLabels, draw_in};
use crate::tracker::{ContactTracker, HeaderPlacement};

/// Supplies header drawables for a [`StickySectionDecor`].
pub trait StickyDrawables<S: ?Sized>: SectionDrawables<S> {
    /// Adjusts the computed header bounds. The default keeps them.
    fn header_bounds(&mut self, position: usize, bounds: Rect) -> Rect {
        let _ = position;
        bounds
    }

    /// The drawable for the header showing the content of `position`.
    fn header_drawable(&mut self, position: usize, bounds: Rect) -> &mut dyn Drawable<S>;
}

/// Section labels plus a sticky header pinned at the top of the list.
///
/// Each frame the labels of visible sections are drawn in their reserved gap
/// (except when they have slid under the header), and one header is drawn on
/// top: pinned flush at the top margin, or pushed upward by the next section
/// label as it arrives.
#[derive(Clone, Debug)]
pub struct StickySectionDecor<P> {
    geometry: SectionGeometry,
    tracker: ContactTracker,
    drawables: P,
    last_header: Option<HeaderPlacement>,
}

impl<P> StickySectionDecor<P> {
    /// Creates a sticky decoration.
    pub fn new(drawables: P, config: StickyConfig) -> Self {
        Self {
            geometry: SectionGeometry::new(config.section_margins),
            tracker: ContactTracker::new(&config),
            drawables,
            last_header: None,
        }
    }

    /// Returns the geometry resolver.
    pub fn geometry(&self) -> &SectionGeometry {
        &self.geometry
    }

    /// Returns the geometry resolver mutably.
    pub fn geometry_mut(&mut self) -> &mut SectionGeometry {
        &mut self.geometry
    }

    /// Returns the contact tracker.
    pub fn tracker(&self) -> &ContactTracker {
        &self.tracker
    }

    /// Returns the drawables.
    pub fn drawables(&self) -> &P {
        &self.drawables
    }

    /// Returns the drawables mutably.
    pub fn drawables_mut(&mut self) -> &mut P {
        &mut self.drawables
    }

    /// Header drawn in the most recent frame, after the drawables' bounds
    /// adjustment. `None` if that frame drew no header.
    pub fn last_header(&self) -> Option<HeaderPlacement> {
        self.last_header
    }
}

impl<P> ItemInsets for StickySectionDecor<P>
where
    P: SectionLabels,
{
    fn section_inset(&mut self, position: usize) -> Insets {
        let height = self.drawables.section_height(position);
        self.geometry.section_inset(height)
    }

    fn item_inset(&mut self, position: usize, item_count: usize) -> Insets {
        self.tracker.header_inset(position, item_count)
    }
}

impl<H, S, P> Decor<H, S> for StickySectionDecor<P>
where
    H: ListHost + ?Sized,
    S: ?Sized,
    P: StickyDrawables<S>,
{
    fn prepare(&mut self, frame: &mut Frame<'_, H, S>) {
        self.tracker.prepare(frame.host.size().width);
        self.last_header = None;
    }

    fn draw_item(&mut self, frame: &mut Frame<'_, H, S>, child: &ChildLayout, position: usize) {
        let bounds = self.geometry.resolve(child);
        let bounds = self.drawables.section_bounds(position, bounds);
        if self.tracker.observe_section(position, bounds) {
            let drawable = self.drawables.section_drawable(position, bounds, child);
            draw_in(drawable, frame.surface, bounds);
        }
    }

    fn post_draw(&mut self, frame: &mut Frame<'_, H, S>) {
        for child in children(frame.host) {
            self.tracker
                .observe_child(child.position, child.decorated_bounds);
        }
        let Some(mut placement) = self.tracker.resolve(frame.host.item_count()) else {
            return;
        };
        placement.bounds = self
            .drawables
            .header_bounds(placement.position, placement.bounds);
        let drawable = self
            .drawables
            .header_drawable(placement.position, placement.bounds);
        draw_in(drawable, frame.surface, placement.bounds);
        self.last_header = Some(placement);
    }
}
