//! Placing one box relative to another.
//!
//! A [`PlaceRequest`] describes which point of the target ("my") goes on
//! which point of the anchor ("at"), an optional extra offset, and an
//! optional container with per-side [`CollisionPolicy`]. [`place`] answers
//! with the value to give the target's positioning origin (its `left` and
//! `top` properties), not a document coordinate.

mod align;
mod collision;
mod static_offset;

pub use align::{Align, AlignmentCode, AxisPlacement};
pub use collision::{Collision, CollisionPolicy, correction};

use std::fmt;

use crate::defaults;
use crate::edge::Edge;
use crate::errors::MeasureError;
use crate::geometry::{Region, element_metrics, element_size, measure};
use crate::metrics::MetricsProvider;
use crate::spatial::overlap;
use crate::types::{Axis, Offset, Rect};

use align::base_position;
use static_offset::static_offset;

/// Extra offset along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OffsetValue {
    /// Plain pixels.
    Px(f64),
    /// Percent of the target's own size along the same axis.
    Percent(f64),
}

impl OffsetValue {
    /// Pixels for a target of `size` along this axis. Non-finite values count as zero.
    pub fn resolve(self, size: f64) -> f64 {
        let px = match self {
            OffsetValue::Px(px) => px,
            OffsetValue::Percent(pct) => pct / 100.0 * size,
        };
        if px.is_finite() { px } else { 0.0 }
    }
}

impl Default for OffsetValue {
    fn default() -> Self {
        OffsetValue::Px(0.0)
    }
}

impl From<f64> for OffsetValue {
    fn from(px: f64) -> Self {
        OffsetValue::Px(px)
    }
}

impl fmt::Display for OffsetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OffsetValue::Px(px) => write!(f, "{px}"),
            OffsetValue::Percent(pct) => write!(f, "{pct}%"),
        }
    }
}

/// What to place the target against, and how.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceRequest<E> {
    /// Point of the target being placed.
    pub my: AlignmentCode,
    /// Point of the anchor it is placed on.
    pub at: AlignmentCode,
    /// The anchor.
    pub of: Region<E>,
    /// Container to keep the target inside.
    pub within: Option<Region<E>>,
    /// Per-side rules for `within`. No container correction without one.
    pub collision: Option<CollisionPolicy>,
    pub offset_x: OffsetValue,
    pub offset_y: OffsetValue,
}

impl<E> Default for PlaceRequest<E> {
    fn default() -> Self {
        PlaceRequest {
            my: defaults::ALIGNMENT,
            at: defaults::ALIGNMENT,
            of: Region::window(),
            within: None,
            collision: Some(defaults::COLLISION),
            offset_x: OffsetValue::default(),
            offset_y: OffsetValue::default(),
        }
    }
}

impl<E> PlaceRequest<E> {
    /// Default request anchored to `of`.
    pub fn new(of: Region<E>) -> Self {
        PlaceRequest { of, ..PlaceRequest::default() }
    }

    pub fn my(mut self, my: AlignmentCode) -> Self {
        self.my = my;
        self
    }

    pub fn at(mut self, at: AlignmentCode) -> Self {
        self.at = at;
        self
    }

    /// Keep the target inside `within` using `collision`.
    pub fn within(mut self, within: Region<E>, collision: CollisionPolicy) -> Self {
        self.within = Some(within);
        self.collision = Some(collision);
        self
    }

    pub fn offset(mut self, x: impl Into<OffsetValue>, y: impl Into<OffsetValue>) -> Self {
        self.offset_x = x.into();
        self.offset_y = y.into();
        self
    }

    fn offset_along(&self, axis: Axis) -> OffsetValue {
        match axis {
            Axis::Horizontal => self.offset_x,
            Axis::Vertical => self.offset_y,
        }
    }
}

/// New `left`/`top` for the target's positioning origin.
pub type PlaceResult = Offset;

/// Compute where `target`, measured at `edge`, has to go to satisfy `request`.
pub fn place<P: MetricsProvider + ?Sized>(
    provider: &P,
    target: &P::Element,
    edge: Edge,
    request: &PlaceRequest<P::Element>,
) -> Result<PlaceResult, MeasureError> {
    let anchor = measure(provider, &request.of)?;
    let metrics = element_metrics(provider, target)?;
    let viewport = provider.viewport();
    let origin = static_offset(provider, target, &metrics, edge)?;
    let width = element_size(&metrics, &viewport, edge, Axis::Horizontal);
    let height = element_size(&metrics, &viewport, edge, Axis::Vertical);
    crate::log::debug!(%anchor, %origin, width, height, "placing");

    let mut position = Offset::ZERO;
    for axis in Axis::BOTH {
        let size = match axis {
            Axis::Horizontal => width,
            Axis::Vertical => height,
        };
        let placement = AxisPlacement::resolve(request.my.along(axis), request.at.along(axis), axis);
        *position.along_mut(axis) = base_position(
            placement,
            anchor.start(axis),
            anchor.size(axis),
            origin.along(axis),
            size,
            request.offset_along(axis).resolve(size),
        );
    }
    crate::log::debug!(%position, "base position");

    if let (Some(within), Some(policy)) = (&request.within, &request.collision) {
        let container = measure(provider, within)?;
        let placed = Rect::from_offset(origin + position, width, height);
        let o = overlap(&placed, &container);
        for axis in Axis::BOTH {
            *position.along_mut(axis) += correction(policy, &o, axis);
        }
    }

    Ok(position)
}
