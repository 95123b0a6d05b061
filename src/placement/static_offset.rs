//! Where a box would sit if its positioning origin were reset to zero.

use crate::edge::Edge;
use crate::errors::MeasureError;
use crate::geometry::{self, Subject, element_offset};
use crate::metrics::{BoxMetrics, MetricsProvider, PositionMode};
use crate::types::{Axis, Offset};

/// Static offset of the element described by `metrics`, at `edge`.
///
/// In-flow boxes are measured from their own border box; a relative box
/// has its inset shift undone. Out-of-flow boxes start from their offset
/// parent's padding edge (the document origin when there is none) and
/// then account for their own margin, border and padding.
pub(crate) fn static_offset<P: MetricsProvider + ?Sized>(
    provider: &P,
    element: &P::Element,
    metrics: &BoxMetrics,
    edge: Edge,
) -> Result<Offset, MeasureError> {
    if metrics.position.uses_offset_parent() {
        let parent = match provider.offset_parent(element)? {
            Some(parent) => Subject::from(parent),
            None => Subject::Document,
        };
        let origin = geometry::offset(provider, &parent, Edge::Padding)?;
        return Ok(out_of_flow_offset(origin, metrics, edge));
    }

    let mut offset = element_offset(metrics, edge);
    if metrics.position == PositionMode::Relative {
        for axis in Axis::BOTH {
            *offset.along_mut(axis) -= metrics.insets.relative_shift(axis);
        }
    }
    Ok(offset)
}

fn out_of_flow_offset(origin: Offset, metrics: &BoxMetrics, edge: Edge) -> Offset {
    let mut offset = origin;
    for axis in Axis::BOTH {
        let coord = offset.along_mut(axis);
        let margin = metrics.margin.start(axis);
        if edge == Edge::Margin {
            *coord += margin.min(0.0);
        } else {
            *coord += margin;
        }
        if edge < Edge::Border {
            *coord += metrics.border.start(axis);
        }
        if edge == Edge::Content {
            *coord += metrics.padding.start(axis);
        }
    }
    offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{Insets, Sides};
    use crate::types::Rect;

    fn positioned(margin: f64) -> BoxMetrics {
        BoxMetrics {
            border_box: Rect::new(300.0, 400.0, 50.0, 50.0),
            padding: Sides::uniform(4.0),
            border: Sides::uniform(1.0),
            margin: Sides::uniform(margin),
            position: PositionMode::Absolute,
            ..BoxMetrics::default()
        }
    }

    #[test]
    fn out_of_flow_edges() {
        let origin = Offset::new(100.0, 200.0);
        let m = positioned(6.0);
        assert_eq!(out_of_flow_offset(origin, &m, Edge::Margin), Offset::new(100.0, 200.0));
        assert_eq!(out_of_flow_offset(origin, &m, Edge::Border), Offset::new(106.0, 206.0));
        assert_eq!(out_of_flow_offset(origin, &m, Edge::Scroll), Offset::new(107.0, 207.0));
        assert_eq!(out_of_flow_offset(origin, &m, Edge::Padding), Offset::new(107.0, 207.0));
        assert_eq!(out_of_flow_offset(origin, &m, Edge::Content), Offset::new(111.0, 211.0));
    }

    #[test]
    fn negative_margin_moves_margin_edge() {
        let origin = Offset::new(100.0, 200.0);
        let m = positioned(-6.0);
        assert_eq!(out_of_flow_offset(origin, &m, Edge::Margin), Offset::new(94.0, 194.0));
        assert_eq!(out_of_flow_offset(origin, &m, Edge::Border), Offset::new(94.0, 194.0));
    }

    #[test]
    fn relative_insets_are_undone() {
        use crate::scene::{Node, Scene};

        let m = BoxMetrics {
            border_box: Rect::new(30.0, 40.0, 10.0, 10.0),
            position: PositionMode::Relative,
            insets: Insets { left: Some(5.0), bottom: Some(8.0), ..Insets::default() },
            ..BoxMetrics::default()
        };
        let mut scene = Scene::new(Default::default());
        let el = scene.insert(Node::new(m));
        let offset = static_offset(&scene, &el, &m, Edge::Border).unwrap();
        assert_eq!(offset, Offset::new(25.0, 48.0));
    }

    #[test]
    fn sticky_starts_from_offset_parent() {
        use crate::scene::{Node, Scene};

        let m = BoxMetrics { position: PositionMode::Sticky, ..positioned(6.0) };
        let mut scene = Scene::new(Default::default());
        let el = scene.insert(Node::new(m));
        // no offset parent: measured from the document origin, not its own box
        let offset = static_offset(&scene, &el, &m, Edge::Border).unwrap();
        assert_eq!(offset, Offset::new(6.0, 6.0));
    }
}
