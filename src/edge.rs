//! Box edges and the layers they include.
//!
//! ```text
//! content ⊂ padding ⊂ scroll ⊂ border ⊂ margin
//! ```
//!
//! Each [`Layer`] becomes part of a measurement from one edge onwards.
//! Measurement code walks [`Layer::ALL`] instead of branching per edge, so
//! a larger edge can only ever add layers.

use std::fmt;
use std::str::FromStr;

/// Which box layers a measurement includes.
///
/// The ordering is meaningful: `Edge::Content < Edge::Margin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Edge {
    /// The content box only.
    Content,
    /// Content plus padding.
    Padding,
    /// Padding box plus scrollbar allowance.
    Scroll,
    /// Scroll box plus borders (what the host reports as the element's box).
    #[default]
    Border,
    /// Border box plus positive margins.
    Margin,
}

impl Edge {
    pub const ALL: [Edge; 5] = [Edge::Content, Edge::Padding, Edge::Scroll, Edge::Border, Edge::Margin];

    /// Whether measuring at this edge counts `layer`.
    #[inline]
    pub fn includes(self, layer: Layer) -> bool {
        self >= layer.from_edge()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Edge::Content => "content",
            Edge::Padding => "padding",
            Edge::Scroll => "scroll",
            Edge::Border => "border",
            Edge::Margin => "margin",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`Edge::from_str`] for an unknown edge name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEdge(pub String);

impl fmt::Display for UnknownEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown edge: {}", self.0)
    }
}

impl std::error::Error for UnknownEdge {}

impl FromStr for Edge {
    type Err = UnknownEdge;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "content" => Ok(Edge::Content),
            "padding" => Ok(Edge::Padding),
            "scroll" => Ok(Edge::Scroll),
            "border" => Ok(Edge::Border),
            "margin" => Ok(Edge::Margin),
            other => Err(UnknownEdge(other.to_string())),
        }
    }
}

/// One ring of the box model around the content box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Padding,
    /// Space taken by a scrollbar on the end side.
    Scrollbar,
    Border,
    /// Only positive margins ever count.
    Margin,
}

impl Layer {
    /// Inner to outer.
    pub const ALL: [Layer; 4] = [Layer::Padding, Layer::Scrollbar, Layer::Border, Layer::Margin];

    /// The smallest edge that includes this layer.
    #[inline]
    pub const fn from_edge(self) -> Edge {
        match self {
            Layer::Padding => Edge::Padding,
            Layer::Scrollbar => Edge::Scroll,
            Layer::Border => Edge::Border,
            Layer::Margin => Edge::Margin,
        }
    }

    /// Whether the host's border-box measurement already contains the layer.
    #[inline]
    pub const fn in_border_box(self) -> bool {
        !matches!(self, Layer::Margin)
    }
}
