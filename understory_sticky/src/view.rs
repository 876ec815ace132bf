// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View-based sticky headers.
//!
//! Instead of drawing a label into a reserved gap, this strategy treats the
//! section-start rows themselves as headers. Each frame it finds the header
//! for the item at the top of the viewport, binds and measures a detached
//! copy of that header through the [`HeaderAdapter`], and draws it pinned to
//! the top edge. When the next section-start row reaches the bottom of the
//! pinned copy, the copy slides up with it.
//!
//! The bound view is cached and reused until the header position or its
//! content type changes, or until [`ViewStickyDecor::on_data_set_changed`] or
//! [`ViewStickyDecor::on_bounds_changed`] drops it.

use core::fmt;

use kurbo::{Point, Rect, Size, Vec2};
use tracing::{debug, trace};

use crate::config::Orientation;
use crate::decorator::{Decor, Frame, ItemInsets};
use crate::error::ConfigurationError;
use crate::host::{ListHost, SectionCondition, children};
use crate::measure::{Constraints, LayoutParams, child_constraints};

/// Layout half of a detached header view.
pub trait HeaderLayout {
    /// Requested sizing. Defaults to [`LayoutParams::FILL_WIDTH`].
    fn layout_params(&self) -> LayoutParams {
        LayoutParams::FILL_WIDTH
    }

    /// Measures the view and returns its desired size.
    fn measure(&mut self, constraints: Constraints) -> Size;

    /// Places the view at `bounds`, relative to the container origin.
    fn layout(&mut self, bounds: Rect);

    /// Bounds assigned by the last [`HeaderLayout::layout`].
    fn bounds(&self) -> Rect;
}

/// A header view that can draw itself into `S`.
pub trait HeaderView<S: ?Sized>: HeaderLayout {
    /// Draws the view at its bounds shifted by `offset`.
    fn draw(&self, surface: &mut S, offset: Vec2);
}

/// Data source that binds detached header views.
pub trait HeaderAdapter {
    /// The bound view type.
    type View: HeaderLayout;

    /// Tag distinguishing header layouts. A cached view is only reused for
    /// the same position with the same tag.
    type ContentType: Copy + PartialEq + fmt::Debug;

    /// Number of items in the data set.
    fn item_count(&self) -> usize;

    /// Content type of the item at `position`.
    fn content_type(&self, position: usize) -> Self::ContentType;

    /// Creates a view bound to the item at `position`.
    fn bind_header(&mut self, position: usize, content_type: Self::ContentType) -> Self::View;
}

/// Single-entry cache of a bound header view.
#[derive(Clone, Debug)]
pub struct HeaderCache<V, T> {
    entry: Option<(usize, T, V)>,
}

impl<V, T> Default for HeaderCache<V, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, T> HeaderCache<V, T> {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self { entry: None }
    }

    /// Position of the cached header, if any.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        self.entry.as_ref().map(|(position, ..)| *position)
    }

    /// The cached view, if any.
    #[must_use]
    pub fn view(&self) -> Option<&V> {
        self.entry.as_ref().map(|(.., view)| view)
    }

    /// Replaces the cached entry.
    pub fn insert(&mut self, position: usize, content_type: T, view: V) {
        self.entry = Some((position, content_type, view));
    }

    /// Drops the cached entry. Returns `true` if there was one.
    pub fn invalidate(&mut self) -> bool {
        self.entry.take().is_some()
    }
}

impl<V, T: PartialEq> HeaderCache<V, T> {
    /// The cached view if it was bound for `position` with `content_type`.
    #[must_use]
    pub fn get(&self, position: usize, content_type: T) -> Option<&V> {
        match &self.entry {
            Some((p, t, view)) if *p == position && *t == content_type => Some(view),
            _ => None,
        }
    }
}

/// Header drawn by one [`ViewStickyDecor::draw_over`] call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PinnedHeader {
    /// Position of the header item.
    pub position: usize,
    /// Translation applied to the header view; zero while pinned, negative
    /// `y` while pushed.
    pub offset: Vec2,
    /// Height of the header view.
    pub height: f64,
    /// Drawn bounds: the view bounds shifted by `offset`.
    pub bounds: Rect,
    /// The section-start item pushing the header, if any.
    pub pushed_by: Option<usize>,
}

/// Builder for [`ViewStickyDecor`].
///
/// ```rust
/// use understory_sticky::{ConfigurationError, ViewStickyBuilder};
/// # use kurbo::{Rect, Size};
/// # use understory_sticky::{Constraints, HeaderAdapter, HeaderLayout};
/// # struct Rows;
/// # struct Row(Rect);
/// # impl HeaderLayout for Row {
/// #     fn measure(&mut self, c: Constraints) -> Size { Size::new(c.max_width, 24.0) }
/// #     fn layout(&mut self, bounds: Rect) { self.0 = bounds; }
/// #     fn bounds(&self) -> Rect { self.0 }
/// # }
/// # impl HeaderAdapter for Rows {
/// #     type View = Row;
/// #     type ContentType = u8;
/// #     fn item_count(&self) -> usize { 10 }
/// #     fn content_type(&self, _: usize) -> u8 { 0 }
/// #     fn bind_header(&mut self, _: usize, _: u8) -> Row { Row(Rect::ZERO) }
/// # }
///
/// let missing = ViewStickyBuilder::<fn(usize) -> bool, Rows>::new()
///     .condition(|p| p % 5 == 0)
///     .build();
/// assert_eq!(missing.err(), Some(ConfigurationError::MissingAdapter));
///
/// let decor = ViewStickyBuilder::new()
///     .condition(|p: usize| p % 5 == 0)
///     .adapter(Rows)
///     .build()
///     .unwrap();
/// assert_eq!(decor.header_position(7), Some(5));
/// ```
#[derive(Clone, Debug)]
pub struct ViewStickyBuilder<C, A> {
    condition: Option<C>,
    adapter: Option<A>,
    orientation: Orientation,
}

impl<C, A> Default for ViewStickyBuilder<C, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, A> ViewStickyBuilder<C, A> {
    /// Creates an empty builder with normal orientation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            condition: None,
            adapter: None,
            orientation: Orientation::Normal,
        }
    }

    /// Sets the section condition.
    #[must_use]
    pub fn condition(mut self, condition: C) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Sets the header adapter.
    #[must_use]
    pub fn adapter(mut self, adapter: A) -> Self {
        self.adapter = Some(adapter);
        self
    }

    /// Sets the list orientation.
    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Shorthand for `orientation(Orientation::Reversed)`.
    #[must_use]
    pub fn reversed(self) -> Self {
        self.orientation(Orientation::Reversed)
    }

    /// Builds the decoration.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::MissingAdapter`] if no adapter was set, then
    /// [`ConfigurationError::MissingCondition`] if no condition was set.
    pub fn build(self) -> Result<ViewStickyDecor<C, A>, ConfigurationError>
    where
        C: SectionCondition,
        A: HeaderAdapter,
    {
        let adapter = self.adapter.ok_or(ConfigurationError::MissingAdapter)?;
        let condition = self.condition.ok_or(ConfigurationError::MissingCondition)?;
        Ok(ViewStickyDecor {
            condition,
            adapter,
            orientation: self.orientation,
            cache: HeaderCache::new(),
            last_header: None,
        })
    }
}

/// Sticky headers drawn from detached, measured header views.
pub struct ViewStickyDecor<C, A: HeaderAdapter> {
    condition: C,
    adapter: A,
    orientation: Orientation,
    cache: HeaderCache<A::View, A::ContentType>,
    last_header: Option<PinnedHeader>,
}

impl<C, A: HeaderAdapter> fmt::Debug for ViewStickyDecor<C, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewStickyDecor")
            .field("orientation", &self.orientation)
            .field("cached_position", &self.cache.position())
            .field("last_header", &self.last_header)
            .finish_non_exhaustive()
    }
}

impl<C, A> ViewStickyDecor<C, A>
where
    C: SectionCondition,
    A: HeaderAdapter,
{
    /// Returns the adapter.
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Returns the adapter mutably.
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// List orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the header view cache.
    pub fn cache(&self) -> &HeaderCache<A::View, A::ContentType> {
        &self.cache
    }

    /// Header drawn by the most recent frame, if any.
    pub fn last_header(&self) -> Option<PinnedHeader> {
        self.last_header
    }

    /// The header position for the item at `position`: the nearest section
    /// start at or before it, or at or after it in reversed lists.
    pub fn header_position(&self, position: usize) -> Option<usize> {
        let count = self.adapter.item_count();
        if position >= count {
            return None;
        }
        match self.orientation {
            Orientation::Normal => (0..=position)
                .rev()
                .find(|&p| self.condition.is_section_start(p)),
            Orientation::Reversed => {
                (position..count).find(|&p| self.condition.is_section_start(p))
            }
        }
    }

    /// The measured header view for the item at `position`.
    ///
    /// Reuses the cached view when the header position and content type are
    /// unchanged; otherwise binds, measures, and lays out a fresh one against
    /// the container size of `host`.
    pub fn resolve_header_view<H>(&mut self, host: &H, position: usize) -> Option<&A::View>
    where
        H: ListHost + ?Sized,
    {
        self.ensure_header(host, position)?;
        self.cache.view()
    }

    /// Drops the cached header view after a data set change.
    pub fn on_data_set_changed(&mut self) {
        if self.cache.invalidate() {
            debug!("data set changed, header view dropped");
        }
    }

    /// Drops the cached header view after the container bounds changed.
    pub fn on_bounds_changed(&mut self) {
        if self.cache.invalidate() {
            debug!("bounds changed, header view dropped");
        }
    }

    /// Draws the sticky header for the current frame.
    ///
    /// Returns the drawn header, or `None` if the frame has none: an empty
    /// list, no child at the top edge, a top child without a position, no
    /// section start in scan direction, or no child at the header's bottom.
    pub fn draw_over<H, S>(&mut self, host: &H, surface: &mut S) -> Option<PinnedHeader>
    where
        H: ListHost + ?Sized,
        S: ?Sized,
        A::View: HeaderView<S>,
    {
        self.last_header = None;
        if host.item_count() == 0 {
            return None;
        }
        let top = match self.orientation {
            Orientation::Normal => host.child(0),
            Orientation::Reversed => host.child_under(Point::ZERO),
        };
        let Some(top_position) = top.and_then(|child| child.position) else {
            trace!("no positioned child at the top edge");
            return None;
        };
        let position = self.ensure_header(host, top_position)?;
        let bounds = self.cache.view()?.bounds();

        let contact_point = bounds.y1;
        let Some(contact) = children(host).find(|child| {
            let decorated = child.decorated_bounds;
            decorated.y0 <= contact_point && contact_point < decorated.y1
        }) else {
            trace!(contact_point, "no child at the header's bottom edge");
            return None;
        };

        let pushed_by = contact
            .position
            .filter(|&p| p != position && self.condition.is_section_start(p));
        // The decorated top includes any reserved gap and never sits below the
        // contact point, so the offset is never positive.
        let offset = match pushed_by {
            Some(_) => Vec2::new(0.0, contact.decorated_bounds.y0 - bounds.height()),
            None => Vec2::ZERO,
        };
        trace!(position, offset = offset.y, "sticky header");

        let view = self.cache.view()?;
        view.draw(surface, offset);
        let pinned = PinnedHeader {
            position,
            offset,
            height: bounds.height(),
            bounds: bounds + offset,
            pushed_by,
        };
        self.last_header = Some(pinned);
        Some(pinned)
    }

    /// Makes sure the cache holds the header for `position` and returns the
    /// header position.
    fn ensure_header<H>(&mut self, host: &H, position: usize) -> Option<usize>
    where
        H: ListHost + ?Sized,
    {
        let Some(header) = self.header_position(position) else {
            trace!(position, "no section start in scan direction");
            return None;
        };
        let content_type = self.adapter.content_type(header);
        if self.cache.get(header, content_type).is_some() {
            return Some(header);
        }

        let mut view = self.adapter.bind_header(header, content_type);
        let constraints = child_constraints(host.size(), host.padding(), view.layout_params());
        let size = constraints.constrain(view.measure(constraints));
        view.layout(Rect::from_origin_size(Point::ZERO, size));
        debug!(
            position = header,
            content_type = ?content_type,
            width = size.width,
            height = size.height,
            "header view bound"
        );
        self.cache.insert(header, content_type, view);
        Some(header)
    }
}

impl<C, A> ItemInsets for ViewStickyDecor<C, A> where A: HeaderAdapter {}

impl<H, S, C, A> Decor<H, S> for ViewStickyDecor<C, A>
where
    H: ListHost + ?Sized,
    S: ?Sized,
    C: SectionCondition,
    A: HeaderAdapter,
    A::View: HeaderView<S>,
{
    fn post_draw(&mut self, frame: &mut Frame<'_, H, S>) {
        self.draw_over(frame.host, frame.surface);
    }
}
