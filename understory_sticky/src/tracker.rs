// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sticky contact tracking.
//!
//! [`ContactTracker`] decides, once per frame, which section currently touches
//! the sticky boundary at the top of the viewport and where the pinned header
//! goes. A frame looks like this:
//!
//! 1. [`ContactTracker::prepare`] clears the per-frame state.
//! 2. [`ContactTracker::observe_section`] is called for every visible
//!    section-start item with its label bounds.
//! 3. [`ContactTracker::observe_child`] is called for every visible child.
//! 4. [`ContactTracker::resolve`] produces the header placement, if any.
//!
//! The *contact point* is the distance from the boundary at which a section
//! label is considered to touch the pinned header:
//! `header height + top margin + bottom margin`. While a label straddles it
//! the header is pushed up ahead of the label; otherwise the header sits
//! flush at the top margin and shows the item nearest to the boundary.

use kurbo::{Insets, Rect};
use tracing::trace;

use crate::config::{Margins, Orientation, StickyConfig};

/// Section currently in contact with the sticky boundary.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SectionContact {
    /// Position of the section-start item.
    pub position: usize,
    /// Top of the section label bounds.
    pub top: f64,
}

/// What the header is anchored to in the current frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ContactState {
    /// Nothing touches the boundary; no header is drawn.
    NoContact,
    /// A section label straddles the contact point and pushes the header.
    Section {
        /// Position of the section-start item.
        position: usize,
        /// Top of its label bounds.
        top: f64,
    },
    /// No label straddles the contact point, but an item has scrolled past it.
    Item {
        /// Position of the nearest such item.
        position: usize,
    },
}

/// Resolved sticky header for one frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HeaderPlacement {
    /// Position of the item whose content the header shows.
    pub position: usize,
    /// Header bounds in container coordinates.
    pub bounds: Rect,
    /// Contact that produced this placement.
    pub contact: ContactState,
}

/// Per-frame sticky contact state plus the cross-frame header height memory.
///
/// One tracker serves one list surface; it is not meant to be shared between
/// lists that render concurrently.
#[derive(Clone, Debug)]
pub struct ContactTracker {
    margins: Margins,
    fixed_height: Option<f64>,
    last_height: f64,
    orientation: Orientation,
    section: Option<SectionContact>,
    contact_position: Option<usize>,
    span: Option<(f64, f64)>,
    container_width: f64,
}

impl ContactTracker {
    /// Creates a tracker from the header settings of `config`.
    #[must_use]
    pub fn new(config: &StickyConfig) -> Self {
        Self {
            margins: config.resolved_header_margins(),
            fixed_height: config.header_height.map(|h| h.max(0.0)),
            last_height: 0.0,
            orientation: config.orientation,
            section: None,
            contact_position: None,
            span: None,
            container_width: 0.0,
        }
    }

    /// Header margins.
    #[must_use]
    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// List orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Header height used this frame: the fixed height if configured,
    /// otherwise the height of the last observed section.
    #[must_use]
    pub fn header_height(&self) -> f64 {
        self.fixed_height.unwrap_or(self.last_height)
    }

    /// Distance from the boundary at which a section label touches the header.
    #[must_use]
    pub fn contact_point(&self) -> f64 {
        self.header_height() + self.margins.total()
    }

    /// Threshold below which a child's decorated top counts as having
    /// reached the pinned header.
    fn item_contact_point(&self) -> f64 {
        self.header_height() + self.margins.top
    }

    /// Clears per-frame state.
    ///
    /// `container_width` is used as the header span when no child is
    /// observed this frame.
    pub fn prepare(&mut self, container_width: f64) {
        self.section = None;
        self.contact_position = None;
        self.span = None;
        self.container_width = container_width;
    }

    /// Records a visible section label.
    ///
    /// Returns `true` if the label should be drawn in place: labels that have
    /// scrolled into the header's top margin are left to the pinned header.
    pub fn observe_section(&mut self, position: usize, bounds: Rect) -> bool {
        let draw = bounds.y0 > self.margins.top;

        self.last_height = bounds.height().max(0.0);
        let contact_point = self.contact_point();
        if contact_point >= bounds.y0 && contact_point < bounds.y1 + self.margins.bottom {
            self.section = Some(SectionContact {
                position,
                top: bounds.y0,
            });
        }
        draw
    }

    /// Records a visible child.
    ///
    /// Children without a position are skipped. The last observed child whose
    /// decorated top has reached the header becomes the item-contact fallback.
    pub fn observe_child(&mut self, position: Option<usize>, decorated: Rect) {
        self.span = Some((decorated.x0, decorated.x1));
        let Some(position) = position else {
            return;
        };
        if decorated.y0 <= self.item_contact_point() {
            self.contact_position = Some(position);
        }
    }

    /// The contact state accumulated so far this frame.
    #[must_use]
    pub fn state(&self) -> ContactState {
        if let Some(SectionContact { position, top }) = self.section {
            ContactState::Section { position, top }
        } else if let Some(position) = self.contact_position {
            ContactState::Item { position }
        } else {
            ContactState::NoContact
        }
    }

    /// Resolves the header placement for the frame.
    ///
    /// Returns `None` when nothing is in contact, or when the first section of
    /// a normally oriented list is still fully on screen.
    #[must_use]
    pub fn resolve(&self, item_count: usize) -> Option<HeaderPlacement> {
        if item_count == 0 {
            return None;
        }
        let contact = self.state();
        match contact {
            ContactState::Section { position, top } => {
                let bottom = top - self.margins.bottom;
                let bounds = self.header_bounds(bottom);
                if !self.orientation.is_reversed()
                    && position == 0
                    && bounds.y0 - self.margins.top < 0.0
                {
                    trace!(top, "first section still on screen, header suppressed");
                    return None;
                }
                let position = self.adjacent_position(position, item_count);
                trace!(position, y0 = bounds.y0, "header pushed by section");
                Some(HeaderPlacement {
                    position,
                    bounds,
                    contact,
                })
            }
            ContactState::Item { position } => {
                let bottom = self.margins.top + self.header_height();
                let bounds = self.header_bounds(bottom);
                trace!(position, "header pinned to item");
                Some(HeaderPlacement {
                    position,
                    bounds,
                    contact,
                })
            }
            ContactState::NoContact => None,
        }
    }

    /// Extra inset for `position` independent of sections.
    ///
    /// In reversed lists the last item reserves room for the pinned header so
    /// the tail of the list can scroll clear of it.
    #[must_use]
    pub fn header_inset(&self, position: usize, item_count: usize) -> Insets {
        if self.orientation.is_reversed() && position + 1 == item_count {
            Insets::new(0.0, self.contact_point(), 0.0, 0.0)
        } else {
            Insets::new(0.0, 0.0, 0.0, 0.0)
        }
    }

    /// Item that supplies header content while `section` is in contact: the
    /// one just before the section in scroll order.
    fn adjacent_position(&self, section: usize, item_count: usize) -> usize {
        match self.orientation {
            Orientation::Normal => section.saturating_sub(1),
            Orientation::Reversed => (section + 1).min(item_count - 1),
        }
    }

    fn header_bounds(&self, bottom: f64) -> Rect {
        let (x0, x1) = self.span.unwrap_or((0.0, self.container_width));
        Rect::new(x0, bottom - self.header_height(), x1, bottom)
    }
}
