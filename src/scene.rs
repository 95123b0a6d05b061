//! An in-memory element tree implementing [`MetricsProvider`].
//!
//! Hosts without a live layout engine (tests, server-side renderers, replays
//! of captured metrics) describe their boxes as [`Node`]s and hand the
//! [`Scene`] to the measurement and placement functions.

use std::collections::HashMap;
use std::fmt;

use crate::defaults::Settings;
use crate::errors::MeasureError;
use crate::geometry::Region;
use crate::metrics::{
    BoxMetrics, DocumentMetrics, MetricsProvider, OffsetParent, PositionMode, ViewportMetrics,
};

/// Handle to a node in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The node's outer display type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Block,
    Inline,
    InlineBlock,
    Flex,
    Grid,
    /// Not rendered at all.
    None,
}

/// One element: its metrics and where it hangs in the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub metrics: BoxMetrics,
    /// `None` for top-level nodes.
    pub parent: Option<NodeId>,
    pub display: DisplayMode,
    /// Has a transform other than `none`.
    pub transformed: bool,
    attached: bool,
}

impl Node {
    pub fn new(metrics: BoxMetrics) -> Self {
        Node {
            metrics,
            parent: None,
            display: DisplayMode::default(),
            transformed: false,
            attached: true,
        }
    }

    pub fn child_of(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn transformed(mut self) -> Self {
        self.transformed = true;
        self
    }

    pub fn display(mut self, display: DisplayMode) -> Self {
        self.display = display;
        self
    }

    /// A transform only takes effect on boxes that are rendered and not inline.
    pub fn establishes_transform(&self) -> bool {
        self.transformed && !matches!(self.display, DisplayMode::Inline | DisplayMode::None)
    }
}

/// A captured element tree plus the viewport it is shown in.
#[derive(Debug, Clone)]
pub struct Scene {
    nodes: HashMap<NodeId, Node>,
    next_id: u64,
    viewport: ViewportMetrics,
    settings: Settings,
    root: Option<NodeId>,
    body: Option<NodeId>,
}

impl Scene {
    pub fn new(viewport: ViewportMetrics) -> Self {
        Self::with_settings(viewport, Settings::default())
    }

    pub fn with_settings(viewport: ViewportMetrics, settings: Settings) -> Self {
        Scene {
            nodes: HashMap::new(),
            next_id: 0,
            viewport,
            settings,
            root: None,
            body: None,
        }
    }

    /// Add a node.
    pub fn insert(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, node);
        id
    }

    /// Add the document's root element. Any previous root stays in the tree
    /// but is no longer treated as the root.
    pub fn insert_root(&mut self, metrics: BoxMetrics) -> NodeId {
        if let Some(old) = self.root.and_then(|id| self.nodes.get_mut(&id)) {
            old.metrics.is_root = false;
        }
        let id = self.insert(Node::new(BoxMetrics { is_root: true, ..metrics }));
        self.root = Some(id);
        id
    }

    /// Mark `id` as the body element. Its scroll size counts towards the document's.
    pub fn set_body(&mut self, id: NodeId) {
        self.body = Some(id);
    }

    /// Take a node and its subtree out of the document. Their handles stay valid
    /// but measuring them fails.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.attached = false;
        }
    }

    /// Put a detached node back.
    pub fn reattach(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.attached = true;
        }
    }

    /// Forget a node entirely. Later lookups report an unknown element.
    pub fn remove(&mut self, id: NodeId) -> Option<Node> {
        if self.root == Some(id) {
            self.root = None;
        }
        if self.body == Some(id) {
            self.body = None;
        }
        self.nodes.remove(&id)
    }

    /// `id` measured at the configured default edge.
    pub fn region(&self, id: NodeId) -> Region<NodeId> {
        Region::element(id).at(self.settings.default_edge)
    }

    fn node(&self, id: NodeId) -> Result<&Node, MeasureError> {
        self.nodes.get(&id).ok_or_else(|| MeasureError::unknown(&id))
    }

    /// `id` followed by its ancestors, nearest first. Stops early on a
    /// parent cycle.
    fn lineage(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), |cur| self.nodes.get(cur).and_then(|n| n.parent))
            .take(self.nodes.len() + 1)
    }

    /// `id`, provided neither it nor any ancestor has been detached or removed.
    fn connected(&self, id: NodeId) -> Result<&Node, MeasureError> {
        let node = self.node(id)?;
        for cur in self.lineage(id) {
            match self.nodes.get(&cur) {
                Some(ancestor) if ancestor.attached => {}
                _ => return Err(MeasureError::detached(&id)),
            }
        }
        Ok(node)
    }

    fn is_root(&self, id: NodeId, node: &Node) -> bool {
        self.root == Some(id) || node.metrics.is_root
    }
}

impl MetricsProvider for Scene {
    type Element = NodeId;

    fn box_metrics(&self, element: &NodeId) -> Result<BoxMetrics, MeasureError> {
        let node = self.connected(*element)?;
        Ok(BoxMetrics { is_root: self.is_root(*element, node), ..node.metrics })
    }

    fn offset_parent(&self, element: &NodeId) -> Result<Option<OffsetParent<NodeId>>, MeasureError> {
        let node = self.connected(*element)?;
        let fixed = node.metrics.position == PositionMode::Fixed;

        if fixed && !self.settings.local_coordinates_for_fixed {
            return Ok(Some(OffsetParent::Window));
        }

        let ancestors = if self.is_root(*element, node) { 0 } else { usize::MAX };
        for id in self.lineage(*element).skip(1).take(ancestors) {
            let ancestor = self.node(id)?;
            let found = if fixed {
                ancestor.establishes_transform()
            } else {
                ancestor.metrics.position != PositionMode::Static || ancestor.establishes_transform()
            };
            if found {
                crate::log::debug!(%element, parent = %id, "offset parent");
                return Ok(Some(OffsetParent::Element(id)));
            }
        }

        Ok(fixed.then_some(OffsetParent::Window))
    }

    fn is_position_fixed(&self, element: &NodeId) -> Result<bool, MeasureError> {
        Ok(self.connected(*element)?.metrics.position == PositionMode::Fixed)
    }

    fn viewport(&self) -> ViewportMetrics {
        self.viewport
    }

    fn document(&self) -> DocumentMetrics {
        let root = self.root.and_then(|id| self.nodes.get(&id));
        let body = self.body.and_then(|id| self.nodes.get(&id));
        DocumentMetrics {
            root_scroll_width: root.map_or(self.viewport.client_width, |n| n.metrics.scroll_width),
            root_scroll_height: root.map_or(self.viewport.client_height, |n| n.metrics.scroll_height),
            body_scroll_width: body.map_or(0.0, |n| n.metrics.scroll_width),
            body_scroll_height: body.map_or(0.0, |n| n.metrics.scroll_height),
        }
    }
}
