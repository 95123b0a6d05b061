//! Default values and process-wide settings.

use crate::edge::Edge;
use crate::placement::{AlignmentCode, Collision, CollisionPolicy};

/// Edge used when none is given.
pub const EDGE: Edge = Edge::Border;

/// `my` and `at` of a default placement: `left top`.
pub const ALIGNMENT: AlignmentCode = AlignmentCode::LEFT_TOP;

/// Collision rule of a default placement: push on every side.
pub const COLLISION: CollisionPolicy = CollisionPolicy::uniform(Collision::Push);

/// Supplied once by the host when it builds its provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Whether a transformed ancestor becomes the containing block of its
    /// `position: fixed` descendants, as CSS Transforms requires. A few
    /// older engines do not.
    pub local_coordinates_for_fixed: bool,
    /// Edge that regions built by the provider are measured at.
    pub default_edge: Edge,
}

impl Default for Settings {
    fn default() -> Self {
        Settings { local_coordinates_for_fixed: true, default_edge: EDGE }
    }
}
