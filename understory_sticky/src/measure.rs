// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Header view measurement against the list container.

use kurbo::{Insets, Size};

/// Size bounds a header view is measured against.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Constraints {
    /// Smallest acceptable width.
    pub min_width: f64,
    /// Largest acceptable width.
    pub max_width: f64,
    /// Smallest acceptable height.
    pub min_height: f64,
    /// Largest acceptable height, possibly infinite.
    pub max_height: f64,
}

impl Constraints {
    /// Exactly `width` by `height`.
    #[must_use]
    pub fn tight(width: f64, height: f64) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// Anything from zero up to `max_width` by `max_height`.
    #[must_use]
    pub fn loose(max_width: f64, max_height: f64) -> Self {
        Self {
            min_width: 0.0,
            max_width,
            min_height: 0.0,
            max_height,
        }
    }

    /// Returns `true` if exactly one size satisfies the constraints.
    #[must_use]
    pub fn is_tight(&self) -> bool {
        self.min_width == self.max_width && self.min_height == self.max_height
    }

    /// Clamps `size` into the constraints.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.max(self.min_width).min(self.max_width),
            size.height.max(self.min_height).min(self.max_height),
        )
    }
}

/// How a header view wants one axis to be sized.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Dimension {
    /// Fill the container minus its padding.
    MatchParent,
    /// As large as the content needs.
    #[default]
    WrapContent,
    /// A fixed size in logical pixels.
    Exact(f64),
}

/// Requested sizing of a header view.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutParams {
    /// Horizontal sizing.
    pub width: Dimension,
    /// Vertical sizing.
    pub height: Dimension,
}

impl LayoutParams {
    /// Full container width, content height. Used for headers that do not
    /// ask for anything else.
    pub const FILL_WIDTH: Self = Self {
        width: Dimension::MatchParent,
        height: Dimension::WrapContent,
    };

    /// Creates layout params.
    #[must_use]
    pub const fn new(width: Dimension, height: Dimension) -> Self {
        Self { width, height }
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self::FILL_WIDTH
    }
}

/// Constraints for a header view laid out in a container of `container`
/// size with `padding`.
///
/// Widths are bounded by the container's inner width. Heights are unbounded
/// unless exact, since the header is measured before it is placed.
///
/// ```rust
/// use kurbo::{Insets, Size};
/// use understory_sticky::{Dimension, LayoutParams, child_constraints};
///
/// let padding = Insets::new(8.0, 0.0, 8.0, 0.0);
/// let c = child_constraints(Size::new(320.0, 480.0), padding, LayoutParams::FILL_WIDTH);
/// assert_eq!((c.min_width, c.max_width), (304.0, 304.0));
/// assert_eq!(c.max_height, f64::INFINITY);
///
/// let exact = LayoutParams::new(Dimension::Exact(100.0), Dimension::Exact(24.0));
/// assert!(child_constraints(Size::new(320.0, 480.0), padding, exact).is_tight());
/// ```
#[must_use]
pub fn child_constraints(container: Size, padding: Insets, params: LayoutParams) -> Constraints {
    let available = (container.width - padding.x0 - padding.x1).max(0.0);
    let (min_width, max_width) = match params.width {
        Dimension::Exact(width) => {
            let width = width.max(0.0);
            (width, width)
        }
        Dimension::MatchParent => (available, available),
        Dimension::WrapContent => (0.0, available),
    };
    let (min_height, max_height) = match params.height {
        Dimension::Exact(height) => {
            let height = height.max(0.0);
            (height, height)
        }
        Dimension::MatchParent | Dimension::WrapContent => (0.0, f64::INFINITY),
    };
    Constraints {
        min_width,
        max_width,
        min_height,
        max_height,
    }
}
