//! Retained node tree implementing [`RenderSurface`]

use super::{RenderSurface, SurfaceHandle};
use tracing::warn;

/// Kind of node held by a [`SurfaceTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Clickable,
    Label,
    Container,
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    text: String,
    hint: Option<String>,
    active: bool,
    disabled: bool,
    children: Vec<SurfaceHandle>,
}

impl Node {
    fn new(kind: NodeKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
            hint: None,
            active: false,
            disabled: false,
            children: Vec::new(),
        }
    }
}

/// In-memory surface: every node a control creates lives here and can be inspected.
///
/// Interactive front-ends wrap it and only add drawing; headless hosts and
/// tests use it directly.
#[derive(Debug, Clone, Default)]
pub struct SurfaceTree {
    nodes: Vec<Node>,
}

impl SurfaceTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes created so far
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, node: Node) -> SurfaceHandle {
        let handle = SurfaceHandle::from_raw(self.nodes.len() as u32);
        self.nodes.push(node);
        handle
    }

    fn node(&self, handle: SurfaceHandle) -> Option<&Node> {
        self.nodes.get(handle.raw() as usize)
    }

    fn node_mut(&mut self, handle: SurfaceHandle) -> Option<&mut Node> {
        let node = self.nodes.get_mut(handle.raw() as usize);
        if node.is_none() {
            warn!("Ignoring update for unknown surface {}", handle);
        }
        node
    }

    /// Kind of the node, if it exists
    pub fn kind(&self, handle: SurfaceHandle) -> Option<NodeKind> {
        self.node(handle).map(|n| n.kind)
    }

    /// Displayed text of a label or clickable
    pub fn text(&self, handle: SurfaceHandle) -> Option<&str> {
        self.node(handle).map(|n| n.text.as_str())
    }

    /// Hover text, if any was attached
    pub fn hint(&self, handle: SurfaceHandle) -> Option<&str> {
        self.node(handle).and_then(|n| n.hint.as_deref())
    }

    pub fn is_active(&self, handle: SurfaceHandle) -> bool {
        self.node(handle).map(|n| n.active).unwrap_or(false)
    }

    pub fn is_disabled(&self, handle: SurfaceHandle) -> bool {
        self.node(handle).map(|n| n.disabled).unwrap_or(false)
    }

    /// Children of a container in display order
    pub fn children(&self, handle: SurfaceHandle) -> &[SurfaceHandle] {
        self.node(handle).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Simulate pressing a node.
    ///
    /// Returns the handle to route to the owning control, or `None` when the
    /// node is not an enabled clickable.
    pub fn click(&self, handle: SurfaceHandle) -> Option<SurfaceHandle> {
        match self.node(handle) {
            Some(node) if node.kind == NodeKind::Clickable && !node.disabled => Some(handle),
            _ => None,
        }
    }
}

impl RenderSurface for SurfaceTree {
    fn clickable(&mut self, label: &str, disabled: bool) -> SurfaceHandle {
        let mut node = Node::new(NodeKind::Clickable, label);
        node.disabled = disabled;
        self.push(node)
    }

    fn label(&mut self, text: &str) -> SurfaceHandle {
        self.push(Node::new(NodeKind::Label, text))
    }

    fn container(&mut self) -> SurfaceHandle {
        self.push(Node::new(NodeKind::Container, ""))
    }

    fn set_text(&mut self, handle: SurfaceHandle, text: &str) {
        if let Some(node) = self.node_mut(handle) {
            node.text.clear();
            node.text.push_str(text);
        }
    }

    fn set_hint(&mut self, handle: SurfaceHandle, hint: &str) {
        if let Some(node) = self.node_mut(handle) {
            node.hint = Some(hint.to_string());
        }
    }

    fn set_active(&mut self, handle: SurfaceHandle, active: bool) {
        if let Some(node) = self.node_mut(handle) {
            node.active = active;
        }
    }

    fn set_disabled(&mut self, handle: SurfaceHandle, disabled: bool) {
        if let Some(node) = self.node_mut(handle) {
            node.disabled = disabled;
        }
    }

    fn compose(&mut self, container: SurfaceHandle, children: &[SurfaceHandle]) {
        if let Some(node) = self.node_mut(container) {
            node.children.extend_from_slice(children);
        }
    }
}
