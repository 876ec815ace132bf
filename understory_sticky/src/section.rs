// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Procedural section labels drawn into the gap above section-start items.

use kurbo::{Insets, Rect};

use crate::config::Margins;
use crate::decorator::{Decor, Frame, ItemInsets};
use crate::geometry::SectionGeometry;
use crate::host::{ChildLayout, ListHost};

/// A shape that draws itself inside bounds assigned right before drawing.
pub trait Drawable<S: ?Sized> {
    /// Assigns the bounds for the next [`Drawable::draw`].
    fn set_bounds(&mut self, bounds: Rect);

    /// Draws into `surface`.
    fn draw(&self, surface: &mut S);
}

/// Surface-independent description of section labels.
///
/// Layout queries the label height before anything is drawn, so it lives
/// apart from the drawing half in [`SectionDrawables`].
pub trait SectionLabels {
    /// Label height for the section starting at `position`, without margins.
    fn section_height(&mut self, position: usize) -> f64;

    /// Adjusts the computed label bounds, for example to shrink the label to
    /// its content. The default keeps the full gap.
    fn section_bounds(&mut self, position: usize, bounds: Rect) -> Rect {
        let _ = position;
        bounds
    }
}

/// Supplies section label drawables for a [`SectionDecor`] or a
/// [`StickySectionDecor`](crate::StickySectionDecor).
pub trait SectionDrawables<S: ?Sized>: SectionLabels {
    /// The drawable for the section starting at `position`.
    fn section_drawable(
        &mut self,
        position: usize,
        bounds: Rect,
        child: &ChildLayout,
    ) -> &mut dyn Drawable<S>;
}

/// Draws `drawable` into `surface` at `bounds`.
pub(crate) fn draw_in<S: ?Sized>(drawable: &mut dyn Drawable<S>, surface: &mut S, bounds: Rect) {
    drawable.set_bounds(bounds);
    drawable.draw(surface);
}

/// Non-sticky section labels.
///
/// Reserves `section_height + margins` above every section-start item and
/// draws the section's drawable there every frame.
#[derive(Clone, Debug)]
pub struct SectionDecor<P> {
    geometry: SectionGeometry,
    drawables: P,
}

impl<P> SectionDecor<P> {
    /// Creates a section decoration with the given label margins.
    pub fn new(drawables: P, margins: Margins) -> Self {
        Self {
            geometry: SectionGeometry::new(margins),
            drawables,
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

    /// Returns the drawables.
    pub fn drawables(&self) -> &P {
        &self.drawables
    }

    /// Returns the drawables mutably.
    pub fn drawables_mut(&mut self) -> &mut P {
        &mut self.drawables
    }
}

impl<P> ItemInsets for SectionDecor<P>
where
    P: SectionLabels,
{
    fn section_inset(&mut self, position: usize) -> Insets {
        let height = self.drawables.section_height(position);
        self.geometry.section_inset(height)
    }
}

impl<H, S, P> Decor<H, S> for SectionDecor<P>
where
    H: ListHost + ?Sized,
    S: ?Sized,
    P: SectionDrawables<S>,
{
    fn draw_item(&mut self, frame: &mut Frame<'_, H, S>, child: &ChildLayout, position: usize) {
        let bounds = self.geometry.resolve(child);
        let bounds = self.drawables.section_bounds(position, bounds);
        let drawable = self.drawables.section_drawable(position, bounds, child);
        draw_in(drawable, frame.surface, bounds);
    }
}
