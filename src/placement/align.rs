//! Alignment codes and the nine ways two of them combine on one axis.

use std::fmt;

use crate::types::Axis;

/// Where along an axis a box is grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Align {
    /// Left or top.
    Start,
    Center,
    /// Right or bottom.
    End,
}

impl Align {
    /// Map a single-letter code: `l|c|r` horizontally, `t|c|b` vertically.
    pub fn from_code(code: char, axis: Axis) -> Option<Align> {
        match (axis, code) {
            (_, 'c') => Some(Align::Center),
            (Axis::Horizontal, 'l') | (Axis::Vertical, 't') => Some(Align::Start),
            (Axis::Horizontal, 'r') | (Axis::Vertical, 'b') => Some(Align::End),
            _ => None,
        }
    }

    /// The single-letter code for this alignment on `axis`.
    pub fn code(self, axis: Axis) -> char {
        match (self, axis) {
            (Align::Center, _) => 'c',
            (Align::Start, Axis::Horizontal) => 'l',
            (Align::Start, Axis::Vertical) => 't',
            (Align::End, Axis::Horizontal) => 'r',
            (Align::End, Axis::Vertical) => 'b',
        }
    }
}

/// One alignment per axis, e.g. `left top`.
///
/// `None` on an axis is an unrecognized code. It survives until placement,
/// where it centers that axis no matter what the other box asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlignmentCode {
    pub x: Option<Align>,
    pub y: Option<Align>,
}

impl AlignmentCode {
    pub const LEFT_TOP: AlignmentCode = AlignmentCode::new(Align::Start, Align::Start);
    pub const CENTER: AlignmentCode = AlignmentCode::new(Align::Center, Align::Center);
    pub const RIGHT_BOTTOM: AlignmentCode = AlignmentCode::new(Align::End, Align::End);
    /// Unrecognized on both axes.
    pub const UNKNOWN: AlignmentCode = AlignmentCode { x: None, y: None };

    pub const fn new(x: Align, y: Align) -> Self {
        AlignmentCode { x: Some(x), y: Some(y) }
    }

    #[inline]
    pub fn along(self, axis: Axis) -> Option<Align> {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

impl Default for AlignmentCode {
    fn default() -> Self {
        AlignmentCode::LEFT_TOP
    }
}

impl fmt::Display for AlignmentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = |align: Option<Align>, axis| align.map_or('?', |a: Align| a.code(axis));
        write!(f, "{}{}", code(self.x, Axis::Horizontal), code(self.y, Axis::Vertical))
    }
}

/// How the placed box ("my") lines up with the anchor ("at") on one axis.
///
/// Variants are named `<My><At>`: `EndStart` puts the placed box's end
/// against the anchor's start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisPlacement {
    StartStart,
    StartCenter,
    StartEnd,
    CenterStart,
    CenterCenter,
    CenterEnd,
    EndStart,
    EndCenter,
    EndEnd,
}

impl AxisPlacement {
    pub fn new(my: Align, at: Align) -> Self {
        match (my, at) {
            (Align::Start, Align::Start) => AxisPlacement::StartStart,
            (Align::Start, Align::Center) => AxisPlacement::StartCenter,
            (Align::Start, Align::End) => AxisPlacement::StartEnd,
            (Align::Center, Align::Start) => AxisPlacement::CenterStart,
            (Align::Center, Align::Center) => AxisPlacement::CenterCenter,
            (Align::Center, Align::End) => AxisPlacement::CenterEnd,
            (Align::End, Align::Start) => AxisPlacement::EndStart,
            (Align::End, Align::Center) => AxisPlacement::EndCenter,
            (Align::End, Align::End) => AxisPlacement::EndEnd,
        }
    }

    /// From a pair of raw codes. Anything unrecognized lines the centers up.
    pub fn from_codes(my: char, at: char, axis: Axis) -> Self {
        Self::resolve(Align::from_code(my, axis), Align::from_code(at, axis), axis)
    }

    /// From a pair of possibly unrecognized alignments. If either is
    /// unrecognized the axis lines the centers up.
    pub fn resolve(my: Option<Align>, at: Option<Align>, axis: Axis) -> Self {
        match (my, at) {
            (Some(my), Some(at)) => AxisPlacement::new(my, at),
            _ => {
                crate::log::warn!(?my, ?at, ?axis, "unrecognized alignment, centering");
                AxisPlacement::CenterCenter
            }
        }
    }

    /// How far the placed box's start sits from the anchor's start.
    pub fn shift(self, anchor_size: f64, target_size: f64) -> f64 {
        match self {
            AxisPlacement::StartStart => 0.0,
            AxisPlacement::StartCenter => anchor_size / 2.0,
            AxisPlacement::StartEnd => anchor_size,
            AxisPlacement::CenterStart => -(target_size / 2.0),
            AxisPlacement::CenterCenter => anchor_size / 2.0 - target_size / 2.0,
            AxisPlacement::CenterEnd => anchor_size - target_size / 2.0,
            AxisPlacement::EndStart => -target_size,
            AxisPlacement::EndCenter => -target_size + anchor_size / 2.0,
            AxisPlacement::EndEnd => -target_size + anchor_size,
        }
    }
}

/// The value to give the placed box's positioning origin along one axis.
///
/// `static_start` is where the box would sit with that origin at zero.
pub(crate) fn base_position(
    placement: AxisPlacement,
    anchor_start: f64,
    anchor_size: f64,
    static_start: f64,
    target_size: f64,
    extra: f64,
) -> f64 {
    anchor_start + extra - static_start + placement.shift(anchor_size, target_size)
}
