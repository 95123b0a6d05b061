//! Raw per-element measurements and the provider that supplies them.
//!
//! Nothing in this crate talks to a rendering surface. Everything it knows
//! about an element comes through [`MetricsProvider`]; the host implements
//! it over its live tree, tests use [`crate::scene::Scene`].

use std::fmt;

use crate::errors::MeasureError;
use crate::types::{Axis, NumericError, Rect, check_finite, check_size};

/// Sizes of one box ring (padding, border or margin) on all four sides.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sides {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Sides {
    pub const ZERO: Sides = Sides { top: 0.0, right: 0.0, bottom: 0.0, left: 0.0 };

    /// Same size on every side.
    pub const fn uniform(size: f64) -> Self {
        Sides { top: size, right: size, bottom: size, left: size }
    }

    /// CSS shorthand order: vertical then horizontal.
    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Sides { top: vertical, right: horizontal, bottom: vertical, left: horizontal }
    }

    /// Left or top.
    #[inline]
    pub fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// Right or bottom.
    #[inline]
    pub fn end(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }

    fn check(&self, allow_negative: bool) -> Result<(), NumericError> {
        for v in [self.top, self.right, self.bottom, self.left] {
            if allow_negative {
                check_finite(v)?;
            } else {
                check_size(v)?;
            }
        }
        Ok(())
    }
}

/// How the element is positioned.
///
/// [CSS Positioned Layout § 2](https://www.w3.org/TR/css-position-3/#position-property)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionMode {
    /// Laid out in normal flow; insets do not apply.
    #[default]
    Static,
    /// Normal flow, then shifted by its insets.
    Relative,
    /// Placed against its offset parent.
    Absolute,
    /// Placed against the viewport (or a transformed ancestor).
    Fixed,
    /// Normal flow, clamped against the nearest scroller.
    Sticky,
}

impl PositionMode {
    /// Whether the element's static offset is computed from its offset parent.
    ///
    /// Only `static` and `relative` elements are measured from their own box.
    pub fn uses_offset_parent(self) -> bool {
        !matches!(self, PositionMode::Static | PositionMode::Relative)
    }
}

/// Resolved `left`/`right`/`top`/`bottom` properties; `None` is `auto`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub left: Option<f64>,
}

impl Insets {
    /// Left or top.
    #[inline]
    pub fn start(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// Right or bottom.
    #[inline]
    pub fn end(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }

    /// How far a relatively positioned box has been pushed along `axis`.
    ///
    /// The start inset wins when both are set; with only the end inset set
    /// the shift is its negation.
    pub fn relative_shift(&self, axis: Axis) -> f64 {
        match (self.start(axis), self.end(axis)) {
            (Some(start), _) => start,
            (None, Some(end)) => -end,
            (None, None) => 0.0,
        }
    }
}

/// Everything the measurement code needs to know about one element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxMetrics {
    /// Border box in document space (fractional).
    pub border_box: Rect,
    /// Padding box minus scrollbars, as integers reported by the host.
    pub client_width: f64,
    pub client_height: f64,
    /// Full scrollable content size.
    pub scroll_width: f64,
    pub scroll_height: f64,
    pub padding: Sides,
    pub border: Sides,
    /// Margins may be negative.
    pub margin: Sides,
    pub position: PositionMode,
    pub insets: Insets,
    /// The document's root element. Its scrollbars belong to the viewport.
    pub is_root: bool,
}

impl BoxMetrics {
    /// Client width or height.
    #[inline]
    pub fn client_size(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.client_width,
            Axis::Vertical => self.client_height,
        }
    }

    /// Reject values a real layout engine can never produce.
    pub fn validate(&self) -> Result<(), NumericError> {
        let b = self.border_box;
        Rect::try_new(b.left, b.top, b.width, b.height)?;
        for v in [self.client_width, self.client_height, self.scroll_width, self.scroll_height] {
            check_size(v)?;
        }
        self.padding.check(false)?;
        self.border.check(false)?;
        self.margin.check(true)?;
        for v in [self.insets.top, self.insets.right, self.insets.bottom, self.insets.left]
            .into_iter()
            .flatten()
        {
            check_finite(v)?;
        }
        Ok(())
    }
}

/// The visual viewport, as seen from the window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportMetrics {
    /// Viewport size including scrollbars.
    pub inner_width: f64,
    pub inner_height: f64,
    /// Viewport size excluding scrollbars (the root element's client size).
    pub client_width: f64,
    pub client_height: f64,
    /// Current scroll position of the document.
    pub scroll_x: f64,
    pub scroll_y: f64,
}

impl ViewportMetrics {
    #[inline]
    pub fn inner_size(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.inner_width,
            Axis::Vertical => self.inner_height,
        }
    }

    #[inline]
    pub fn client_size(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.client_width,
            Axis::Vertical => self.client_height,
        }
    }

    /// Size of the viewport scrollbar on the far side of `axis`.
    #[inline]
    pub fn scrollbar_size(&self, axis: Axis) -> f64 {
        self.inner_size(axis) - self.client_size(axis)
    }
}

/// Scrollable sizes of the root and body elements.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DocumentMetrics {
    pub root_scroll_width: f64,
    pub root_scroll_height: f64,
    pub body_scroll_width: f64,
    pub body_scroll_height: f64,
}

impl DocumentMetrics {
    #[inline]
    pub fn root_scroll_size(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.root_scroll_width,
            Axis::Vertical => self.root_scroll_height,
        }
    }

    #[inline]
    pub fn body_scroll_size(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.body_scroll_width,
            Axis::Vertical => self.body_scroll_height,
        }
    }
}

/// What an element's offset is measured against.
///
/// The document itself is represented by `None` wherever an
/// `Option<OffsetParent<_>>` appears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OffsetParent<E> {
    /// A positioned or transformed ancestor.
    Element(E),
    /// Fixed elements with no transformed ancestor.
    Window,
}

/// Source of raw box metrics.
///
/// Implementations read a snapshot of the host's layout; callers quiesce
/// layout before measuring.
pub trait MetricsProvider {
    /// Handle to an element in the host tree.
    type Element: Clone + fmt::Debug;

    /// Raw metrics for `element`.
    fn box_metrics(&self, element: &Self::Element) -> Result<BoxMetrics, MeasureError>;

    /// The element `element`'s offset is measured against, or `None` for the document.
    fn offset_parent(
        &self,
        element: &Self::Element,
    ) -> Result<Option<OffsetParent<Self::Element>>, MeasureError>;

    /// Whether `element` is `position: fixed`.
    fn is_position_fixed(&self, element: &Self::Element) -> Result<bool, MeasureError> {
        Ok(self.box_metrics(element)?.position == PositionMode::Fixed)
    }

    fn viewport(&self) -> ViewportMetrics;

    fn document(&self) -> DocumentMetrics;
}
