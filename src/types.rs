//! Geometric primitives shared by measurement, spatial relations and placement.
//!
//! All values are CSS pixels in document space: `left`/`top` grow right and
//! down from the document origin. Fractions are kept as-is, nothing here rounds.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};

use glam::DVec2;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative when a size was expected
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Reject NaN and infinities.
#[inline]
pub(crate) fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Reject NaN, infinities and negative values.
#[inline]
pub(crate) fn check_size(val: f64) -> Result<f64, NumericError> {
    let val = check_finite(val)?;
    if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// One of the two layout axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// left/right, width
    Horizontal,
    /// top/bottom, height
    Vertical,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];
}

/// A point in document space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub left: f64,
    pub top: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { left: 0.0, top: 0.0 };

    pub const fn new(left: f64, top: f64) -> Self {
        Offset { left, top }
    }

    /// The coordinate along `axis`.
    #[inline]
    pub fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// Mutable access to the coordinate along `axis`.
    #[inline]
    pub fn along_mut(&mut self, axis: Axis) -> &mut f64 {
        match axis {
            Axis::Horizontal => &mut self.left,
            Axis::Vertical => &mut self.top,
        }
    }

    #[inline]
    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.left, self.top)
    }
}

impl From<DVec2> for Offset {
    fn from(v: DVec2) -> Self {
        Offset { left: v.x, top: v.y }
    }
}

impl Add for Offset {
    type Output = Offset;
    fn add(self, rhs: Offset) -> Offset {
        Offset { left: self.left + rhs.left, top: self.top + rhs.top }
    }
}

impl AddAssign for Offset {
    fn add_assign(&mut self, rhs: Offset) {
        self.left += rhs.left;
        self.top += rhs.top;
    }
}

impl Sub for Offset {
    type Output = Offset;
    fn sub(self, rhs: Offset) -> Offset {
        Offset { left: self.left - rhs.left, top: self.top - rhs.top }
    }
}

impl Neg for Offset {
    type Output = Offset;
    fn neg(self) -> Offset {
        Offset { left: -self.left, top: -self.top }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.left, self.top)
    }
}

/// Axis-aligned rectangle in document space.
///
/// `width` and `height` are never negative when built through
/// [`Rect::try_new`]; the plain constructor trusts its caller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a rectangle (unchecked, for literals).
    /// Use `try_new` for values coming from outside the crate.
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Rect { left, top, width, height }
    }

    /// Create a rectangle with validation (finite values, non-negative size)
    pub fn try_new(left: f64, top: f64, width: f64, height: f64) -> Result<Self, NumericError> {
        Ok(Rect {
            left: check_finite(left)?,
            top: check_finite(top)?,
            width: check_size(width)?,
            height: check_size(height)?,
        })
    }

    /// Build a rectangle from an origin and a size.
    pub fn from_offset(offset: Offset, width: f64, height: f64) -> Self {
        Rect { left: offset.left, top: offset.top, width, height }
    }

    /// `left + width`
    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// `top + height`
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// The northwest corner.
    #[inline]
    pub fn offset(&self) -> Offset {
        Offset { left: self.left, top: self.top }
    }

    /// Start coordinate along `axis` (left or top).
    #[inline]
    pub fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// End coordinate along `axis` (right or bottom).
    #[inline]
    pub fn end(&self, axis: Axis) -> f64 {
        self.start(axis) + self.size(axis)
    }

    /// Extent along `axis` (width or height).
    #[inline]
    pub fn size(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Same size, moved by `delta`.
    pub fn translate(self, delta: Offset) -> Self {
        Rect { left: self.left + delta.left, top: self.top + delta.top, ..self }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} at ({}, {})", self.width, self.height, self.left, self.top)
    }
}

/// Signed penetration of one rectangle's edges past another's.
///
/// Negative means the measured rectangle sticks out of the reference
/// rectangle on that side.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Overlap {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Overlap {
    /// Overlap on the start side of `axis` (left or top).
    #[inline]
    pub fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// Overlap on the end side of `axis` (right or bottom).
    #[inline]
    pub fn end(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }

    /// True when no side protrudes.
    pub fn is_contained(&self) -> bool {
        self.left >= 0.0 && self.right >= 0.0 && self.top >= 0.0 && self.bottom >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_try_new_valid() {
        assert!(Rect::try_new(-10.0, 5.5, 0.0, 20.25).is_ok());
    }

    #[test]
    fn rect_try_new_rejects_negative_size() {
        assert_eq!(Rect::try_new(0.0, 0.0, -1.0, 10.0), Err(NumericError::Negative));
        assert_eq!(Rect::try_new(0.0, 0.0, 1.0, -0.5), Err(NumericError::Negative));
    }

    #[test]
    fn rect_try_new_rejects_nan_and_infinity() {
        assert_eq!(Rect::try_new(f64::NAN, 0.0, 1.0, 1.0), Err(NumericError::NaN));
        assert_eq!(Rect::try_new(0.0, f64::INFINITY, 1.0, 1.0), Err(NumericError::Infinite));
        assert_eq!(Rect::try_new(0.0, 0.0, f64::NEG_INFINITY, 1.0), Err(NumericError::Infinite));
    }

    #[test]
    fn rect_edges_and_axes() {
        let r = Rect::new(10.0, 20.0, 30.5, 40.0);
        assert_eq!(r.right(), 40.5);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.start(Axis::Vertical), 20.0);
        assert_eq!(r.end(Axis::Horizontal), 40.5);
        assert_eq!(r.size(Axis::Vertical), 40.0);
    }

    #[test]
    fn rect_translate_keeps_size() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0).translate(Offset::new(-1.0, 8.0));
        assert_eq!(r, Rect::new(0.0, 10.0, 3.0, 4.0));
    }

    #[test]
    fn offset_arithmetic() {
        let a = Offset::new(3.0, 4.0);
        let b = Offset::new(1.0, -2.0);
        assert_eq!(a + b, Offset::new(4.0, 2.0));
        assert_eq!(a - b, Offset::new(2.0, 6.0));
        assert_eq!(-a, Offset::new(-3.0, -4.0));

        let mut c = a;
        c += b;
        *c.along_mut(Axis::Vertical) += 1.0;
        assert_eq!(c, Offset::new(4.0, 3.0));
    }

    #[test]
    fn offset_dvec2_conversion() {
        let v = Offset::new(1.5, -2.0).to_dvec2();
        assert_eq!(Offset::from(v), Offset::new(1.5, -2.0));
    }

    #[test]
    fn overlap_containment() {
        let inside = Overlap { left: 0.0, right: 1.0, top: 2.0, bottom: 0.0 };
        let outside = Overlap { left: -0.5, ..inside };
        assert!(inside.is_contained());
        assert!(!outside.is_contained());
        assert_eq!(outside.start(Axis::Horizontal), -0.5);
        assert_eq!(outside.end(Axis::Vertical), 0.0);
    }
}
