//! Relations between axis-aligned rectangles: overlap, intersection and
//! distance. Pure functions, no provider involved.

use glam::DVec2;

use crate::types::{Overlap, Rect};

/// How far `a` sits inside `b` on each side.
///
/// Negative `left`/`top` means `a` sticks out past `b`'s start edge,
/// negative `right`/`bottom` past its end edge.
pub fn overlap(a: &Rect, b: &Rect) -> Overlap {
    Overlap {
        left: a.left - b.left,
        right: b.right() - a.right(),
        top: a.top - b.top,
        bottom: b.bottom() - a.bottom(),
    }
}

/// The shared area of `a` and `b`, or `None` when they only touch or are apart.
///
/// Zero-area rectangles never intersect anything.
pub fn intersection(a: &Rect, b: &Rect) -> Option<Rect> {
    let o = overlap(a, b);
    let width = (a.width + o.left.min(0.0) + o.right.min(0.0)).max(0.0);
    let height = (a.height + o.top.min(0.0) + o.bottom.min(0.0)).max(0.0);

    if width > 0.0 && height > 0.0 {
        Some(Rect {
            left: a.left + o.left.min(0.0).abs(),
            top: a.top + o.top.min(0.0).abs(),
            width,
            height,
        })
    } else {
        None
    }
}

/// Straight-line distance between two points.
#[inline]
pub fn point_distance(a: DVec2, b: DVec2) -> f64 {
    a.distance(b)
}

/// Distance between the closest points of `a` and `b`, or `-1.0` when they
/// intersect.
pub fn distance(a: &Rect, b: &Rect) -> f64 {
    if intersection(a, b).is_some() {
        -1.0
    } else {
        gap(a, b)
    }
}

/// Distance between two rectangles assumed not to intersect.
///
/// Apart on both axes, the answer is the corner-to-corner distance; apart
/// on one axis, it is the gap along that axis. Touching rectangles are 0
/// apart.
fn gap(a: &Rect, b: &Rect) -> f64 {
    let apart_x = b.left > a.right() || b.right() < a.left;
    let apart_y = b.top > a.bottom() || b.bottom() < a.top;

    if apart_x && apart_y {
        let a_x = if b.left > a.right() { a.right() } else { a.left };
        let b_x = if b.left > a.right() { b.left } else { b.right() };
        let a_y = if b.bottom() < a.top { a.top } else { a.bottom() };
        let b_y = if b.bottom() < a.top { b.bottom() } else { b.top };
        return point_distance(DVec2::new(a_x, a_y), DVec2::new(b_x, b_y));
    }

    if b.bottom() < a.top {
        a.top - b.bottom()
    } else if b.left > a.right() {
        b.left - a.right()
    } else if b.top > a.bottom() {
        b.top - a.bottom()
    } else {
        (a.left - b.right()).max(0.0)
    }
}
