// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sticky --heading-base-level=0

//! Understory Sticky: section labels and sticky headers for vertically
//! scrolling lists.
//!
//! As a list scrolls, the header of the section currently at the top stays
//! pinned to the viewport edge until the next section's label arrives and
//! pushes it out. This crate owns the per-frame geometry and tracking behind
//! that effect and leaves layout, recycling and painting to the host:
//!
//! - [`ListHost`]: read-only snapshot of the host list's visible children.
//! - [`SectionCondition`]: decides which positions start a section.
//! - [`ConditionDecorator`]: the per-frame driver. The host calls
//!   [`ConditionDecorator::item_offsets`] during layout and
//!   [`ConditionDecorator::draw_over`] after drawing its children.
//! - [`SectionGeometry`]: the gap reserved above section starts and the label
//!   bounds inside it.
//! - [`ContactTracker`]: which section touches the sticky boundary this frame,
//!   the header bounds, and the push transition.
//!
//! Two rendering strategies sit on top:
//!
//! - Procedural: [`SectionDecor`] draws labels only, [`StickySectionDecor`]
//!   adds the pinned header. Callers hand out [`Drawable`]s per section.
//! - View based: [`ViewStickyDecor`] binds, measures and caches a detached copy
//!   of the section-start row through a [`HeaderAdapter`] and draws it pinned,
//!   sliding it up as the next section-start row arrives.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_sticky::{
//!     ChildLayout, ConditionDecorator, Drawable, ListHost, SectionDrawables, SectionLabels,
//!     StickyConfig, StickyDrawables, StickySectionDecor,
//! };
//!
//! /// Records what would be painted.
//! #[derive(Default)]
//! struct Label {
//!     position: usize,
//!     bounds: Rect,
//! }
//!
//! impl Drawable<Vec<(usize, Rect)>> for Label {
//!     fn set_bounds(&mut self, bounds: Rect) {
//!         self.bounds = bounds;
//!     }
//!     fn draw(&self, surface: &mut Vec<(usize, Rect)>) {
//!         surface.push((self.position, self.bounds));
//!     }
//! }
//!
//! impl SectionLabels for Label {
//!     fn section_height(&mut self, _: usize) -> f64 {
//!         10.0
//!     }
//! }
//!
//! impl SectionDrawables<Vec<(usize, Rect)>> for Label {
//!     fn section_drawable(
//!         &mut self,
//!         position: usize,
//!         _: Rect,
//!         _: &ChildLayout,
//!     ) -> &mut dyn Drawable<Vec<(usize, Rect)>> {
//!         self.position = position;
//!         self
//!     }
//! }
//!
//! impl StickyDrawables<Vec<(usize, Rect)>> for Label {
//!     fn header_drawable(&mut self, position: usize, _: Rect) -> &mut dyn Drawable<Vec<(usize, Rect)>> {
//!         self.position = position;
//!         self
//!     }
//! }
//!
//! /// Item 4 is scrolled half out of view; item 5 starts a section.
//! struct Snapshot;
//!
//! impl ListHost for Snapshot {
//!     fn item_count(&self) -> usize { 20 }
//!     fn child_count(&self) -> usize { 2 }
//!     fn child(&self, index: usize) -> Option<ChildLayout> {
//!         match index {
//!             0 => {
//!                 let row = Rect::new(0.0, -5.0, 100.0, 15.0);
//!                 Some(ChildLayout::new(Some(4), row, row))
//!             }
//!             1 => Some(ChildLayout::new(
//!                 Some(5),
//!                 Rect::new(0.0, 15.0, 100.0, 45.0),
//!                 Rect::new(0.0, 25.0, 100.0, 45.0),
//!             )),
//!             _ => None,
//!         }
//!     }
//!     fn size(&self) -> Size { Size::new(100.0, 100.0) }
//! }
//!
//! let decor = StickySectionDecor::new(Label::default(), StickyConfig::new());
//! let mut decorator = ConditionDecorator::new(|p: usize| p % 5 == 0, decor);
//!
//! // Layout reserves the label gap above section starts.
//! assert_eq!(decorator.item_offsets(&Snapshot, Some(5)).y0, 10.0);
//!
//! let mut painted: Vec<(usize, Rect)> = Vec::new();
//! decorator.draw_over(&Snapshot, &mut painted);
//! assert_eq!(
//!     painted,
//!     [
//!         // Section 5's label in its gap.
//!         (5, Rect::new(0.0, 15.0, 100.0, 25.0)),
//!         // Item 4 has reached the top, so its content is pinned there.
//!         (4, Rect::new(0.0, 0.0, 100.0, 10.0)),
//!     ]
//! );
//! ```
//!
//! Per-frame conditions never fail: an empty list, a child without a
//! position, or a header that cannot be resolved just means no header is
//! drawn for that frame. Decisions are reported through `tracing` at `trace`
//! level and header view binds at `debug` level. The only error is
//! [`ConfigurationError`], returned when a [`ViewStickyBuilder`] is missing a
//! collaborator.
//!
//! All coordinates are logical pixels in the host container's space with `y`
//! growing downward. This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod decorator;
mod error;
mod geometry;
mod host;
mod measure;
mod section;
mod sticky;
mod tracker;
mod view;

pub use config::{Margins, Orientation, StickyConfig};
pub use decorator::{ConditionDecorator, Decor, Frame, ItemInsets};
pub use error::ConfigurationError;
pub use geometry::{SectionGeometry, TranslationMode};
pub use host::{ChildLayout, ListHost, SectionCondition, children};
pub use measure::{Constraints, Dimension, LayoutParams, child_constraints};
pub use section::{Drawable, SectionDecor, SectionDrawables, SectionLabels};
pub use sticky::{StickyDrawables, StickySectionDecor};
pub use tracker::{ContactState, ContactTracker, HeaderPlacement, SectionContact};
pub use view::{
    HeaderAdapter, HeaderCache, HeaderLayout, HeaderView, PinnedHeader, ViewStickyBuilder,
    ViewStickyDecor,
};
