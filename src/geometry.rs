//! Box-model measurement: width, height and offset of an element, the
//! viewport or the whole document at a chosen [`Edge`].
//!
//! Element measurements start from the host's border box and walk
//! [`Layer::ALL`]: a layer inside the border box that the edge excludes is
//! taken away, an outside layer (margin) that the edge includes is added.
//! Offsets follow the same table using only the start-side extents.

use crate::edge::{Edge, Layer};
use crate::errors::MeasureError;
use crate::metrics::{BoxMetrics, MetricsProvider, OffsetParent, ViewportMetrics};
use crate::types::{Axis, Offset, Rect};

/// Anything that can be measured.
#[derive(Debug, Clone, PartialEq)]
pub enum Subject<E> {
    /// An element of the host tree.
    Element(E),
    /// The viewport. Offset is the scroll position.
    Window,
    /// The whole document. Offset is always the origin.
    Document,
    /// An already resolved rectangle, returned as is at every edge once its
    /// values are checked to be finite with a non-negative size.
    Rect(Rect),
}

impl<E> From<Rect> for Subject<E> {
    fn from(rect: Rect) -> Self {
        Subject::Rect(rect)
    }
}

impl<E> From<OffsetParent<E>> for Subject<E> {
    fn from(parent: OffsetParent<E>) -> Self {
        match parent {
            OffsetParent::Element(el) => Subject::Element(el),
            OffsetParent::Window => Subject::Window,
        }
    }
}

/// A subject and the edge to measure it at.
#[derive(Debug, Clone, PartialEq)]
pub struct Region<E> {
    pub subject: Subject<E>,
    pub edge: Edge,
}

impl<E> Region<E> {
    pub fn new(subject: Subject<E>, edge: Edge) -> Self {
        Region { subject, edge }
    }

    /// An element measured at its border edge.
    pub fn element(element: E) -> Self {
        Region { subject: Subject::Element(element), edge: Edge::default() }
    }

    pub fn window() -> Self {
        Region { subject: Subject::Window, edge: Edge::default() }
    }

    pub fn document() -> Self {
        Region { subject: Subject::Document, edge: Edge::default() }
    }

    pub fn rect(rect: Rect) -> Self {
        Region { subject: Subject::Rect(rect), edge: Edge::default() }
    }

    /// Same subject, different edge.
    pub fn at(mut self, edge: Edge) -> Self {
        self.edge = edge;
        self
    }
}

impl<E> From<Rect> for Region<E> {
    fn from(rect: Rect) -> Self {
        Region::rect(rect)
    }
}

/// Fetch and sanity-check an element's metrics.
pub(crate) fn element_metrics<P: MetricsProvider + ?Sized>(
    provider: &P,
    element: &P::Element,
) -> Result<BoxMetrics, MeasureError> {
    let metrics = provider.box_metrics(element)?;
    metrics
        .validate()
        .map_err(|source| MeasureError::invalid(element, source))?;
    Ok(metrics)
}

/// Width of `subject` at `edge`.
pub fn width<P: MetricsProvider + ?Sized>(
    provider: &P,
    subject: &Subject<P::Element>,
    edge: Edge,
) -> Result<f64, MeasureError> {
    size(provider, subject, edge, Axis::Horizontal)
}

/// Height of `subject` at `edge`.
pub fn height<P: MetricsProvider + ?Sized>(
    provider: &P,
    subject: &Subject<P::Element>,
    edge: Edge,
) -> Result<f64, MeasureError> {
    size(provider, subject, edge, Axis::Vertical)
}

fn literal(rect: &Rect) -> Result<Rect, MeasureError> {
    Rect::try_new(rect.left, rect.top, rect.width, rect.height).map_err(|source| MeasureError::invalid(rect, source))
}

fn size<P: MetricsProvider + ?Sized>(
    provider: &P,
    subject: &Subject<P::Element>,
    edge: Edge,
    axis: Axis,
) -> Result<f64, MeasureError> {
    let viewport = provider.viewport();
    Ok(match subject {
        Subject::Window => window_size(&viewport, edge, axis),
        Subject::Document => document_size(provider, &viewport, edge, axis),
        Subject::Rect(rect) => literal(rect)?.size(axis),
        Subject::Element(el) => {
            let metrics = element_metrics(provider, el)?;
            element_size(&metrics, &viewport, edge, axis)
        }
    })
}

/// Northwest corner of `subject` at `edge`, in document space.
pub fn offset<P: MetricsProvider + ?Sized>(
    provider: &P,
    subject: &Subject<P::Element>,
    edge: Edge,
) -> Result<Offset, MeasureError> {
    Ok(match subject {
        Subject::Document => Offset::ZERO,
        Subject::Window => window_offset(&provider.viewport()),
        Subject::Rect(rect) => literal(rect)?.offset(),
        Subject::Element(el) => element_offset(&element_metrics(provider, el)?, edge),
    })
}

/// Offset and size of `subject` at `edge` in one go.
///
/// An element's metrics are fetched once and shared by all four values, so
/// the result is consistent even if the provider's snapshot is live.
pub fn rect<P: MetricsProvider + ?Sized>(
    provider: &P,
    subject: &Subject<P::Element>,
    edge: Edge,
) -> Result<Rect, MeasureError> {
    let viewport = provider.viewport();
    let rect = match subject {
        Subject::Rect(rect) => literal(rect)?,
        Subject::Window => Rect::from_offset(
            window_offset(&viewport),
            window_size(&viewport, edge, Axis::Horizontal),
            window_size(&viewport, edge, Axis::Vertical),
        ),
        Subject::Document => Rect::from_offset(
            Offset::ZERO,
            document_size(provider, &viewport, edge, Axis::Horizontal),
            document_size(provider, &viewport, edge, Axis::Vertical),
        ),
        Subject::Element(el) => {
            let metrics = element_metrics(provider, el)?;
            Rect::from_offset(
                element_offset(&metrics, edge),
                element_size(&metrics, &viewport, edge, Axis::Horizontal),
                element_size(&metrics, &viewport, edge, Axis::Vertical),
            )
        }
    };
    crate::log::debug!(?subject, %edge, %rect, "measured");
    Ok(rect)
}

/// [`rect`] for a [`Region`].
pub fn measure<P: MetricsProvider + ?Sized>(
    provider: &P,
    region: &Region<P::Element>,
) -> Result<Rect, MeasureError> {
    rect(provider, &region.subject, region.edge)
}

// ============================================================================
// Window and document
// ============================================================================

/// Only `content` and `scroll` are meaningful for the viewport: anything
/// below `scroll` leaves out the scrollbar, anything else keeps it.
fn window_size(viewport: &ViewportMetrics, edge: Edge, axis: Axis) -> f64 {
    if edge.includes(Layer::Scrollbar) {
        viewport.inner_size(axis)
    } else {
        viewport.client_size(axis)
    }
}

fn window_offset(viewport: &ViewportMetrics) -> Offset {
    Offset::new(viewport.scroll_x, viewport.scroll_y)
}

/// The larger of the root and body scroll sizes, never smaller than the
/// viewport itself.
fn document_size<P: MetricsProvider + ?Sized>(
    provider: &P,
    viewport: &ViewportMetrics,
    edge: Edge,
    axis: Axis,
) -> f64 {
    let doc = provider.document();
    let root = doc.root_scroll_size(axis);
    let body = doc.body_scroll_size(axis);
    if edge.includes(Layer::Scrollbar) {
        let scrollbar = viewport.scrollbar_size(axis);
        (root + scrollbar).max(body + scrollbar).max(viewport.inner_size(axis))
    } else {
        root.max(body).max(viewport.client_size(axis))
    }
}

// ============================================================================
// Elements
// ============================================================================

/// Both-sides extent of `layer` along `axis`.
fn layer_extent(metrics: &BoxMetrics, viewport: &ViewportMetrics, layer: Layer, axis: Axis) -> f64 {
    match layer {
        Layer::Padding => metrics.padding.start(axis) + metrics.padding.end(axis),
        Layer::Border => metrics.border.start(axis) + metrics.border.end(axis),
        Layer::Margin => metrics.margin.start(axis).max(0.0) + metrics.margin.end(axis).max(0.0),
        Layer::Scrollbar => scrollbar_extent(metrics, viewport, axis),
    }
}

/// Start-side extent of `layer` along `axis`. Scrollbars sit on the end side.
fn layer_start_extent(metrics: &BoxMetrics, layer: Layer, axis: Axis) -> f64 {
    match layer {
        Layer::Padding => metrics.padding.start(axis),
        Layer::Border => metrics.border.start(axis),
        Layer::Margin => metrics.margin.start(axis).max(0.0),
        Layer::Scrollbar => 0.0,
    }
}

/// Space the scrollbar takes inside the border box.
///
/// The root element's scrollbars are the viewport's. For other elements the
/// client size is an integer, so the border box is rounded before the
/// client size and borders are taken away from it.
fn scrollbar_extent(metrics: &BoxMetrics, viewport: &ViewportMetrics, axis: Axis) -> f64 {
    let extent = if metrics.is_root {
        viewport.scrollbar_size(axis)
    } else {
        metrics.border_box.size(axis).round()
            - metrics.client_size(axis)
            - metrics.border.start(axis)
            - metrics.border.end(axis)
    };
    extent.max(0.0)
}

pub(crate) fn element_size(
    metrics: &BoxMetrics,
    viewport: &ViewportMetrics,
    edge: Edge,
    axis: Axis,
) -> f64 {
    let mut size = metrics.border_box.size(axis);
    for layer in Layer::ALL {
        let included = edge.includes(layer);
        if layer.in_border_box() && !included {
            size -= layer_extent(metrics, viewport, layer, axis);
        } else if !layer.in_border_box() && included {
            size += layer_extent(metrics, viewport, layer, axis);
        }
    }
    size
}

pub(crate) fn element_offset(metrics: &BoxMetrics, edge: Edge) -> Offset {
    let mut offset = metrics.border_box.offset();
    for axis in Axis::BOTH {
        let coord = offset.along_mut(axis);
        for layer in Layer::ALL {
            let included = edge.includes(layer);
            if layer.in_border_box() && !included {
                *coord += layer_start_extent(metrics, layer, axis);
            } else if !layer.in_border_box() && included {
                *coord -= layer_start_extent(metrics, layer, axis);
            }
        }
    }
    offset
}
