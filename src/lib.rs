//! Box-model measurement and collision-aware placement.
//!
//! Measure elements, the viewport or the whole document at any box
//! [`Edge`], relate rectangles to each other, and compute where to put a
//! positioned element so it lines up with an anchor and stays inside a
//! container:
//!
//! ```
//! use boxplace::{AlignmentCode, Edge, PlaceRequest, Rect, Region, place};
//! use boxplace::metrics::{BoxMetrics, PositionMode, ViewportMetrics};
//! use boxplace::scene::{Node, Scene};
//!
//! let mut scene = Scene::new(ViewportMetrics::default());
//! let tooltip = scene.insert(Node::new(BoxMetrics {
//!     border_box: Rect::new(0.0, 0.0, 50.0, 50.0),
//!     position: PositionMode::Absolute,
//!     ..BoxMetrics::default()
//! }));
//!
//! let request = PlaceRequest::new(Region::rect(Rect::new(10.0, 10.0, 200.0, 100.0)))
//!     .my(AlignmentCode::CENTER)
//!     .at(AlignmentCode::CENTER);
//! let pos = place(&scene, &tooltip, Edge::Border, &request)?;
//! assert_eq!((pos.left, pos.top), (85.0, 35.0));
//! # Ok::<(), boxplace::MeasureError>(())
//! ```
//!
//! The crate never touches a rendering surface itself. Raw numbers come
//! from a [`MetricsProvider`]; [`scene::Scene`] is an in-memory one.

pub mod defaults;
pub mod edge;
pub mod errors;
pub mod geometry;
mod log;
pub mod metrics;
pub mod parse;
pub mod placement;
pub mod scene;
pub mod spatial;
pub mod types;

pub use defaults::Settings;
pub use edge::Edge;
pub use errors::{MeasureError, ParseError};
pub use geometry::{Region, Subject, height, measure, offset, rect, width};
pub use metrics::{MetricsProvider, OffsetParent};
pub use placement::{
    Align, AlignmentCode, Collision, CollisionPolicy, OffsetValue, PlaceRequest, PlaceResult, place,
};
pub use types::{Axis, Offset, Overlap, Rect};

/// What `element`'s offset is measured against: an ancestor, the window,
/// or the document (`None`).
pub fn offset_parent<P: MetricsProvider + ?Sized>(
    provider: &P,
    element: &P::Element,
) -> Result<Option<OffsetParent<P::Element>>, MeasureError> {
    provider.offset_parent(element)
}

/// [`spatial::overlap`] of two measured regions.
pub fn overlap<P: MetricsProvider + ?Sized>(
    provider: &P,
    a: &Region<P::Element>,
    b: &Region<P::Element>,
) -> Result<Overlap, MeasureError> {
    Ok(spatial::overlap(&measure(provider, a)?, &measure(provider, b)?))
}

/// [`spatial::intersection`] of two measured regions.
pub fn intersection<P: MetricsProvider + ?Sized>(
    provider: &P,
    a: &Region<P::Element>,
    b: &Region<P::Element>,
) -> Result<Option<Rect>, MeasureError> {
    Ok(spatial::intersection(&measure(provider, a)?, &measure(provider, b)?))
}

/// [`spatial::distance`] between two measured regions; `-1.0` when they intersect.
pub fn distance<P: MetricsProvider + ?Sized>(
    provider: &P,
    a: &Region<P::Element>,
    b: &Region<P::Element>,
) -> Result<f64, MeasureError> {
    Ok(spatial::distance(&measure(provider, a)?, &measure(provider, b)?))
}
