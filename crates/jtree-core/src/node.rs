//! The node tree produced by the decoder and consumed by the encoder.
//!
//! A document is a single owned [`Node`]. Containers own their children by
//! value, so a tree is acyclic and never aliased; dropping the root drops
//! everything below it.

use std::collections::HashMap;
use std::fmt;

/// The six JSON value shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Object,
    Array,
    String,
    Number,
    Bool,
    Null,
}

impl NodeKind {
    pub const ALL: [NodeKind; 6] = [
        NodeKind::Object,
        NodeKind::Array,
        NodeKind::String,
        NodeKind::Number,
        NodeKind::Bool,
        NodeKind::Null,
    ];

    /// Lowercase name, as used in error messages and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Object => "object",
            NodeKind::Array => "array",
            NodeKind::String => "string",
            NodeKind::Number => "number",
            NodeKind::Bool => "bool",
            NodeKind::Null => "null",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A JSON value. Numbers are single precision.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    Object(Object),
    Array(Vec<Node>),
    String(String),
    Number(f32),
    Bool(bool),
    #[default]
    Null,
}

impl Node {
    /// An empty object node.
    pub fn object() -> Self {
        Node::Object(Object::new())
    }

    /// An empty array node.
    pub fn array() -> Self {
        Node::Array(Vec::new())
    }

    /// The default node of a kind: empty container, empty string, `0`, `false` or `null`.
    pub fn default_of(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Object => Node::object(),
            NodeKind::Array => Node::array(),
            NodeKind::String => Node::String(String::new()),
            NodeKind::Number => Node::Number(0.0),
            NodeKind::Bool => Node::Bool(false),
            NodeKind::Null => Node::Null,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Object(_) => NodeKind::Object,
            Node::Array(_) => NodeKind::Array,
            Node::String(_) => NodeKind::String,
            Node::Number(_) => NodeKind::Number,
            Node::Bool(_) => NodeKind::Bool,
            Node::Null => NodeKind::Null,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Node::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Node::Array(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Node::String(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Node::Number(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Node::Bool(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Node::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Node::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Node>> {
        match self {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f32> {
        match self {
            Node::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Member lookup; `None` for missing keys and for non-objects.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_object().and_then(|object| object.get(key))
    }

    /// Element lookup; `None` when out of range and for non-arrays.
    pub fn at(&self, index: usize) -> Option<&Node> {
        self.as_array().and_then(|items| items.get(index))
    }

    // The `into_*` conversions hand the payload back on a variant match and
    // return the node unchanged otherwise, so nothing is lost on a miss.

    pub fn into_object(self) -> Result<Object, Node> {
        match self {
            Node::Object(object) => Ok(object),
            other => Err(other),
        }
    }

    pub fn into_array(self) -> Result<Vec<Node>, Node> {
        match self {
            Node::Array(items) => Ok(items),
            other => Err(other),
        }
    }

    pub fn into_string(self) -> Result<String, Node> {
        match self {
            Node::String(s) => Ok(s),
            other => Err(other),
        }
    }

    /// Render this node (and its descendants) as JSON text.
    pub fn render(&self) -> String {
        crate::encoder::render(self)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Bool(value)
    }
}

impl From<f32> for Node {
    fn from(value: f32) -> Self {
        Node::Number(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::String(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::String(value)
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Self {
        Node::Array(value)
    }
}

impl From<Object> for Node {
    fn from(value: Object) -> Self {
        Node::Object(value)
    }
}

impl From<()> for Node {
    fn from(_: ()) -> Self {
        Node::Null
    }
}

/// A JSON object with unique keys.
///
/// Entries are kept in insertion order (so rendering is reproducible) next to
/// a key-to-position index. Equality ignores order.
#[derive(Debug, Clone, Default)]
pub struct Object {
    entries: Vec<(String, Node)>,
    index: HashMap<String, usize>,
}

impl Object {
    pub fn new() -> Self {
        Object::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        match self.index.get(key) {
            Some(&i) => Some(&mut self.entries[i].1),
            None => None,
        }
    }

    /// Insert or overwrite. An overwritten key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: Node) -> Option<Node> {
        let key = key.into();
        if let Some(&i) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[i].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Insert only if `key` is absent; on a duplicate the pair is handed back.
    pub fn try_insert(&mut self, key: String, value: Node) -> Result<(), (String, Node)> {
        if self.index.contains_key(&key) {
            return Err((key, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        Ok(())
    }

    /// Remove a key, keeping the relative order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Node> {
        let i = self.index.remove(key)?;
        let (_, value) = self.entries.remove(i);
        for slot in self.index.values_mut() {
            if *slot > i {
                *slot -= 1;
            }
        }
        Some(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Node> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl IntoIterator for Object {
    type Item = (String, Node);
    type IntoIter = std::vec::IntoIter<(String, Node)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Later pairs overwrite earlier ones with the same key.
impl<K: Into<String>> FromIterator<(K, Node)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, Node)>>(iter: I) -> Self {
        let mut object = Object::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}
