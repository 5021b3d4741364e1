//! Arena-based DOM for HTML parsing and rewriting.
//!
//! html5ever parses into this arena through [`ArenaSink`](super::ArenaSink);
//! the normalizer then restructures it in place. Children are kept as index
//! vectors so a pass can splice replacement nodes at a position instead of
//! patching sibling pointers.

use html5ever::{LocalName, QualName, ns};

/// Unique identifier for a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArenaNodeId(pub u32);

impl ArenaNodeId {
    /// Sentinel value for no node.
    pub const NONE: ArenaNodeId = ArenaNodeId(u32::MAX);

    /// Check if this is a valid node ID.
    pub fn is_some(&self) -> bool {
        self.0 != u32::MAX
    }

    /// Check if this is the sentinel value.
    pub fn is_none(&self) -> bool {
        self.0 == u32::MAX
    }
}

/// Node type in the arena DOM.
#[derive(Debug, Clone)]
pub enum ArenaNodeData {
    /// Document root.
    Document,
    /// Element with name and attributes. The name is boxed so its address
    /// stays put while the arena grows (see `ArenaSink::elem_name`).
    Element {
        name: Box<QualName>,
        attrs: Vec<Attribute>,
    },
    /// Text content.
    Text(String),
    /// Comment (kept so it can be re-emitted, ignored by classification).
    Comment(String),
    /// Document type declaration.
    Doctype,
}

/// HTML attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: QualName,
    pub value: String,
}

impl Attribute {
    /// Build a null-namespace attribute, the kind html5ever produces for HTML.
    pub fn new(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.into(),
        }
    }
}

/// A node in the arena DOM.
#[derive(Debug)]
pub struct ArenaNode {
    pub data: ArenaNodeData,
    pub parent: ArenaNodeId,
    pub children: Vec<ArenaNodeId>,
}

impl ArenaNode {
    fn new(data: ArenaNodeData) -> Self {
        Self {
            data,
            parent: ArenaNodeId::NONE,
            children: Vec::new(),
        }
    }
}

/// Arena-based DOM tree.
///
/// Nodes are never freed; detached nodes simply become unreachable from the
/// document root. Each parse gets its own arena, so this costs nothing beyond
/// the lifetime of one normalization call.
pub struct ArenaDom {
    nodes: Vec<ArenaNode>,
    document: ArenaNodeId,
}

impl ArenaDom {
    /// Create a new empty DOM with a document root.
    pub fn new() -> Self {
        let mut dom = Self {
            nodes: Vec::new(),
            document: ArenaNodeId::NONE,
        };
        dom.document = dom.alloc(ArenaNode::new(ArenaNodeData::Document));
        dom
    }

    fn alloc(&mut self, node: ArenaNode) -> ArenaNodeId {
        let id = ArenaNodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the document root ID.
    pub fn document(&self) -> ArenaNodeId {
        self.document
    }

    /// Get a node by ID.
    pub fn get(&self, id: ArenaNodeId) -> Option<&ArenaNode> {
        if id.is_none() {
            return None;
        }
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID.
    pub fn get_mut(&mut self, id: ArenaNodeId) -> Option<&mut ArenaNode> {
        if id.is_none() {
            return None;
        }
        self.nodes.get_mut(id.0 as usize)
    }

    /// Create a new element node.
    pub fn create_element(&mut self, name: QualName, attrs: Vec<Attribute>) -> ArenaNodeId {
        self.alloc(ArenaNode::new(ArenaNodeData::Element {
            name: Box::new(name),
            attrs,
        }))
    }

    /// Create a new HTML-namespace element by tag name.
    pub fn create_html_element(&mut self, tag: &str, attrs: Vec<Attribute>) -> ArenaNodeId {
        let name = QualName::new(None, ns!(html), LocalName::from(tag));
        self.create_element(name, attrs)
    }

    /// Create a new text node.
    pub fn create_text(&mut self, text: String) -> ArenaNodeId {
        self.alloc(ArenaNode::new(ArenaNodeData::Text(text)))
    }

    /// Create a new comment node.
    pub fn create_comment(&mut self, text: String) -> ArenaNodeId {
        self.alloc(ArenaNode::new(ArenaNodeData::Comment(text)))
    }

    /// Create a doctype node.
    pub fn create_doctype(&mut self) -> ArenaNodeId {
        self.alloc(ArenaNode::new(ArenaNodeData::Doctype))
    }

    /// Append a child to a parent node, detaching it from any previous parent.
    pub fn append(&mut self, parent: ArenaNodeId, child: ArenaNodeId) {
        self.detach(child);
        if let Some(child_node) = self.get_mut(child) {
            child_node.parent = parent;
        }
        if let Some(parent_node) = self.get_mut(parent) {
            parent_node.children.push(child);
        }
    }

    /// Insert a node before a sibling.
    pub fn insert_before(&mut self, sibling: ArenaNodeId, new_node: ArenaNodeId) {
        self.detach(new_node);
        let parent = self.parent(sibling);
        let Some(index) = self.index_in_parent(sibling) else {
            return;
        };
        if let Some(par) = self.get_mut(parent) {
            par.children.insert(index, new_node);
        }
        if let Some(new) = self.get_mut(new_node) {
            new.parent = parent;
        }
    }

    /// Append text to an existing text node, or create new if last child isn't text.
    pub fn append_text(&mut self, parent: ArenaNodeId, text: &str) {
        let last_child = self
            .get(parent)
            .and_then(|n| n.children.last().copied())
            .unwrap_or(ArenaNodeId::NONE);

        if let Some(last) = self.get_mut(last_child)
            && let ArenaNodeData::Text(ref mut existing) = last.data
        {
            existing.push_str(text);
            return;
        }

        let text_node = self.create_text(text.to_string());
        self.append(parent, text_node);
    }

    /// Remove a node from its parent's child list.
    pub fn detach(&mut self, id: ArenaNodeId) {
        let parent = self.parent(id);
        if parent.is_none() {
            return;
        }
        if let Some(par) = self.get_mut(parent) {
            par.children.retain(|&c| c != id);
        }
        if let Some(node) = self.get_mut(id) {
            node.parent = ArenaNodeId::NONE;
        }
    }

    /// Detach and return all children of a node, in order.
    pub fn take_children(&mut self, id: ArenaNodeId) -> Vec<ArenaNodeId> {
        let children = self
            .get_mut(id)
            .map(|n| std::mem::take(&mut n.children))
            .unwrap_or_default();
        for &child in &children {
            if let Some(c) = self.get_mut(child) {
                c.parent = ArenaNodeId::NONE;
            }
        }
        children
    }

    /// Replace `node` in its parent's child list with `replacements`, in order.
    ///
    /// The first replacement takes the node's index, so a walker that stays at
    /// that index visits it next. An empty list simply removes the node.
    pub fn replace(&mut self, node: ArenaNodeId, replacements: Vec<ArenaNodeId>) {
        let parent = self.parent(node);
        let Some(index) = self.index_in_parent(node) else {
            return;
        };
        for &r in &replacements {
            self.detach(r);
            if let Some(n) = self.get_mut(r) {
                n.parent = parent;
            }
        }
        if let Some(par) = self.get_mut(parent) {
            par.children.splice(index..=index, replacements);
        }
        if let Some(n) = self.get_mut(node) {
            n.parent = ArenaNodeId::NONE;
        }
    }

    /// Parent of a node, or `NONE` for the root and detached nodes.
    pub fn parent(&self, id: ArenaNodeId) -> ArenaNodeId {
        self.get(id).map(|n| n.parent).unwrap_or(ArenaNodeId::NONE)
    }

    fn index_in_parent(&self, id: ArenaNodeId) -> Option<usize> {
        let parent = self.get(self.parent(id))?;
        parent.children.iter().position(|&c| c == id)
    }

    /// Get the number of nodes ever allocated.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the DOM is empty (only has document root).
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Children of a node.
    pub fn children(&self, parent: ArenaNodeId) -> &[ArenaNodeId] {
        self.get(parent).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Find the first node matching a predicate (pre-order DFS).
    pub fn find<F>(&self, predicate: F) -> Option<ArenaNodeId>
    where
        F: Fn(&ArenaNode) -> bool,
    {
        let mut stack = vec![self.document];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.get(id) {
                if predicate(node) {
                    return Some(id);
                }
                stack.extend(node.children.iter().rev());
            }
        }
        None
    }

    /// Find element by tag name (first match).
    pub fn find_by_tag(&self, tag: &str) -> Option<ArenaNodeId> {
        self.find(|node| match &node.data {
            ArenaNodeData::Element { name, .. } => name.local.as_ref() == tag,
            _ => false,
        })
    }

    /// The `<body>` element of a parsed document.
    pub fn body(&self) -> Option<ArenaNodeId> {
        self.find_by_tag("body")
    }
}

impl Default for ArenaDom {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience methods for element nodes.
impl ArenaDom {
    /// Get element's local name (tag), lower-cased by the parser.
    pub fn tag_name(&self, id: ArenaNodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            ArenaNodeData::Element { name, .. } => Some(&*name.local),
            _ => None,
        })
    }

    /// Get an attribute value.
    pub fn get_attr(&self, id: ArenaNodeId, attr_name: &str) -> Option<&str> {
        self.attrs(id)
            .iter()
            .find(|a| a.name.local.as_ref() == attr_name)
            .map(|a| a.value.as_str())
    }

    /// All attributes of an element, in source order.
    pub fn attrs(&self, id: ArenaNodeId) -> &[Attribute] {
        self.get(id)
            .and_then(|n| match &n.data {
                ArenaNodeData::Element { attrs, .. } => Some(attrs.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    /// Check if node is an element.
    pub fn is_element(&self, id: ArenaNodeId) -> bool {
        self.get(id)
            .is_some_and(|n| matches!(n.data, ArenaNodeData::Element { .. }))
    }

    /// Check if node is a text node.
    pub fn is_text(&self, id: ArenaNodeId) -> bool {
        self.get(id)
            .is_some_and(|n| matches!(n.data, ArenaNodeData::Text(_)))
    }

    /// Get text content of a text node.
    pub fn text_content(&self, id: ArenaNodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            ArenaNodeData::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }
}
