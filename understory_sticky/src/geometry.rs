// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Section geometry: the reserved gap above a section-start item and the
//! label bounds inside it.

use kurbo::{Insets, Rect};

use crate::config::Margins;
use crate::host::ChildLayout;

/// Whether per-child animation translation is folded into view bounds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TranslationMode {
    /// Shift view bounds by the child's translation so labels follow items
    /// while they animate.
    #[default]
    Compensate,
    /// Use the laid-out view bounds as reported.
    Ignore,
}

/// Resolves section label bounds and the inset reserved for them.
///
/// A section label occupies the gap directly above its section-start item:
///
/// ```text
///  decorated.y0 ─┬─────────────── top margin
///                │  section label
///                ├─────────────── bottom margin
///  view.y0      ─┼───────────────
///                │  item
/// ```
///
/// ```rust
/// use kurbo::Rect;
/// use understory_sticky::{Margins, SectionGeometry};
///
/// let geometry = SectionGeometry::new(Margins::new(2.0, 3.0));
///
/// // A 10px label reserves 15px above the item.
/// assert_eq!(geometry.section_inset(10.0).y0, 15.0);
///
/// let decorated = Rect::new(0.0, 100.0, 320.0, 135.0);
/// let view = Rect::new(0.0, 115.0, 320.0, 135.0);
/// assert_eq!(
///     geometry.section_bounds(decorated, view),
///     Rect::new(0.0, 102.0, 320.0, 112.0),
/// );
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SectionGeometry {
    margins: Margins,
    translation: TranslationMode,
}

impl SectionGeometry {
    /// Creates a resolver with the given label margins.
    #[must_use]
    pub fn new(margins: Margins) -> Self {
        Self {
            margins: margins.clamped(),
            translation: TranslationMode::default(),
        }
    }

    /// Returns the label margins.
    #[must_use]
    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// Sets the label margins.
    pub fn set_margins(&mut self, margins: Margins) {
        self.margins = margins.clamped();
    }

    /// Returns the translation mode.
    #[must_use]
    pub fn translation_mode(&self) -> TranslationMode {
        self.translation
    }

    /// Sets the translation mode.
    pub fn set_translation_mode(&mut self, mode: TranslationMode) {
        self.translation = mode;
    }

    /// Inset reserved above a section-start item whose label is
    /// `section_height` tall.
    #[must_use]
    pub fn section_inset(&self, section_height: f64) -> Insets {
        let top = section_height.max(0.0) + self.margins.total();
        Insets::new(0.0, top, 0.0, 0.0)
    }

    /// Undecorated bounds of `child`, honoring the translation mode.
    #[must_use]
    pub fn view_bounds(&self, child: &ChildLayout) -> Rect {
        match self.translation {
            TranslationMode::Compensate => child.translated_view_bounds(),
            TranslationMode::Ignore => child.view_bounds,
        }
    }

    /// Label bounds for a section-start item.
    ///
    /// The label spans the item's own width and sits between the top of the
    /// decorated box (plus top margin) and the top of the view (minus bottom
    /// margin), so it never overlaps the item.
    #[must_use]
    pub fn section_bounds(&self, decorated: Rect, view: Rect) -> Rect {
        Rect::new(
            view.x0,
            decorated.y0 + self.margins.top,
            view.x1,
            view.y0 - self.margins.bottom,
        )
    }

    /// Label bounds for `child`, combining [`Self::view_bounds`] and
    /// [`Self::section_bounds`].
    #[must_use]
    pub fn resolve(&self, child: &ChildLayout) -> Rect {
        self.section_bounds(child.decorated_bounds, self.view_bounds(child))
    }
}
