//! Keeping a placed box inside its container.
//!
//! Each side of the container has a [`Collision`] rule. Axes are resolved
//! independently from the placed box's [`Overlap`] with the container.

use std::fmt;
use std::str::FromStr;

use crate::types::{Axis, Overlap};

/// What happens when the placed box sticks out on one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Collision {
    /// Leave it sticking out.
    #[default]
    None,
    /// Push it back in, sharing the correction with the opposite side when
    /// both sides push.
    Push,
    /// Push it back in, even at the cost of the opposite side.
    ForcePush,
}

impl Collision {
    #[inline]
    pub fn pushes(self) -> bool {
        !matches!(self, Collision::None)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Collision::None => "none",
            Collision::Push => "push",
            Collision::ForcePush => "forcePush",
        }
    }
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Collision::None),
            "push" => Ok(Collision::Push),
            "forcePush" => Ok(Collision::ForcePush),
            other => Err(format!("unknown collision rule: {other}")),
        }
    }
}

/// One collision rule per container side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CollisionPolicy {
    pub left: Collision,
    pub right: Collision,
    pub top: Collision,
    pub bottom: Collision,
}

impl CollisionPolicy {
    /// Same rule on all four sides.
    pub const fn uniform(rule: Collision) -> Self {
        CollisionPolicy { left: rule, right: rule, top: rule, bottom: rule }
    }

    /// One rule for left/right, another for top/bottom.
    pub const fn axes(horizontal: Collision, vertical: Collision) -> Self {
        CollisionPolicy { left: horizontal, right: horizontal, top: vertical, bottom: vertical }
    }

    #[inline]
    pub fn start(&self, axis: Axis) -> Collision {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    #[inline]
    pub fn end(&self, axis: Axis) -> Collision {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }
}

/// How far to move the placed box along `axis` to honour `policy`.
///
/// When both sides push and at least one protrudes, the side that sticks
/// out further is corrected first. If the box is larger than the container
/// the excess is then split evenly between the two sides. Equal overlaps
/// need no shift: the box is already centered over the container. After
/// that, a lone `ForcePush` side that still protrudes is fully corrected,
/// even if that pushes the box out on the other side.
pub fn correction(policy: &CollisionPolicy, overlap: &Overlap, axis: Axis) -> f64 {
    let start_rule = policy.start(axis);
    let end_rule = policy.end(axis);
    let mut start = overlap.start(axis);
    let mut end = overlap.end(axis);
    let excess = start + end;
    let mut delta = 0.0;

    if start_rule.pushes() && end_rule.pushes() && (start < 0.0 || end < 0.0) {
        if start < end {
            delta -= if excess < 0.0 { start + (excess / 2.0).abs() } else { start };
        }
        if end < start {
            delta += if excess < 0.0 { end + (excess / 2.0).abs() } else { end };
        }

        start += delta;
        end -= delta;

        if start_rule == Collision::ForcePush && end_rule != Collision::ForcePush && start < 0.0 {
            delta -= start;
        }
        if end_rule == Collision::ForcePush && start_rule != Collision::ForcePush && end < 0.0 {
            delta += end;
        }
    } else if start_rule.pushes() && start < 0.0 {
        delta -= start;
    } else if end_rule.pushes() && end < 0.0 {
        delta += end;
    }

    if delta != 0.0 {
        crate::log::debug!(?axis, start, end, delta, "collision correction");
    }
    delta
}
