// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration shared by the section and sticky header strategies.

/// Vertical margins around a section label or a sticky header.
///
/// Both values are in logical pixels. Negative values are treated as zero
/// when resolved by the geometry and tracking code.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Margins {
    /// Space reserved above the label.
    pub top: f64,
    /// Space reserved between the label and the item it belongs to.
    pub bottom: f64,
}

impl Margins {
    /// Zero margins.
    pub const ZERO: Self = Self {
        top: 0.0,
        bottom: 0.0,
    };

    /// Creates margins from explicit top and bottom values.
    #[must_use]
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Creates margins with the same value above and below.
    #[must_use]
    pub const fn symmetric(value: f64) -> Self {
        Self::new(value, value)
    }

    /// Returns the margins with negative components clamped to zero.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self::new(self.top.max(0.0), self.bottom.max(0.0))
    }

    /// Sum of the top and bottom margins.
    #[must_use]
    pub fn total(self) -> f64 {
        self.top + self.bottom
    }
}

/// Orientation of the decorated list.
///
/// In [`Orientation::Reversed`] lists position `0` sits at the far end of the
/// scroll range (for example chat transcripts that grow from the bottom). The
/// sticky header still occupies the viewport's leading edge, but header
/// content is taken from the *next* position instead of the previous one and
/// header searches walk forward through the positions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Positions increase in the scroll direction.
    #[default]
    Normal,
    /// Positions decrease in the scroll direction.
    Reversed,
}

impl Orientation {
    /// Returns `true` for [`Orientation::Reversed`].
    #[must_use]
    pub fn is_reversed(self) -> bool {
        matches!(self, Self::Reversed)
    }
}

/// Configuration for a sticky section decoration.
///
/// ```rust
/// use understory_sticky::{Margins, Orientation, StickyConfig};
///
/// let config = StickyConfig::new()
///     .with_section_margins(Margins::new(4.0, 2.0))
///     .with_header_height(24.0)
///     .with_orientation(Orientation::Reversed);
///
/// // Header margins follow the section margins unless set explicitly.
/// assert_eq!(config.resolved_header_margins(), Margins::new(4.0, 2.0));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct StickyConfig {
    /// Margins around each in-list section label.
    pub section_margins: Margins,
    /// Margins around the pinned header; `None` reuses [`StickyConfig::section_margins`].
    pub header_margins: Option<Margins>,
    /// Fixed header height.
    ///
    /// When `None`, the tracker adopts the height of the most recently
    /// observed section bounds and keeps it across frames.
    pub header_height: Option<f64>,
    /// List orientation.
    pub orientation: Orientation,
}

impl StickyConfig {
    /// Creates a configuration with zero margins, adaptive header height and
    /// normal orientation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the section label margins.
    #[must_use]
    pub fn with_section_margins(mut self, margins: Margins) -> Self {
        self.section_margins = margins;
        self
    }

    /// Sets the pinned header margins.
    #[must_use]
    pub fn with_header_margins(mut self, margins: Margins) -> Self {
        self.header_margins = Some(margins);
        self
    }

    /// Fixes the pinned header height instead of inferring it from sections.
    #[must_use]
    pub fn with_header_height(mut self, height: f64) -> Self {
        self.header_height = Some(height);
        self
    }

    /// Sets the list orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Header margins after applying the section-margin fallback and clamping.
    #[must_use]
    pub fn resolved_header_margins(&self) -> Margins {
        self.header_margins.unwrap_or(self.section_margins).clamped()
    }
}
