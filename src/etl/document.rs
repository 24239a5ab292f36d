use crate::Result;

use quick_xml::events::attributes::AttrError;
use quick_xml::events::Event;
use quick_xml::Reader;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed attribute: {0}")]
    Attr(#[from] AttrError),

    #[error("Document contains no root element")]
    NoRoot,
}

/// A namespace-stripped element tree. ISO 20022 messages carry a
/// version-specific default namespace on every element; correlation only ever
/// cares about local tag names, so prefixes and namespaces are dropped while
/// the tree is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    pub tag: String,
    pub text: Option<String>,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Node {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr_name, _)| attr_name == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Finds the first full match of a `/`-separated local-name path, where
    /// the first segment matches any descendant (document order) and the
    /// remaining segments match direct children, backtracking across
    /// candidate anchors until the whole path matches.
    pub fn find(&self, path: &str) -> Option<&Node> {
        let segments: Vec<&str> = path.split('/').collect();
        let (anchor, rest) = segments.split_first()?;

        for node in self.descendants() {
            if node.tag == *anchor {
                if let Some(found) = node.child_chain(rest) {
                    return Some(found);
                }
            }
        }

        None
    }

    /// All descendants with the given local tag name, in document order
    pub fn find_all(&self, tag: &str) -> Vec<&Node> {
        self.descendants()
            .into_iter()
            .filter(|node| node.tag == tag)
            .collect()
    }

    /// Trimmed text content of the first node matching `path`
    pub fn text(&self, path: &str) -> Option<&str> {
        self.find(path).and_then(|node| node.text.as_deref())
    }

    fn child_chain(&self, segments: &[&str]) -> Option<&Node> {
        let Some((next, rest)) = segments.split_first() else {
            return Some(self);
        };

        for child in &self.children {
            if child.tag == *next {
                if let Some(found) = child.child_chain(rest) {
                    return Some(found);
                }
            }
        }

        None
    }

    fn descendants(&self) -> Vec<&Node> {
        let mut nodes = vec![];
        for child in &self.children {
            child.collect_into(&mut nodes);
        }

        nodes
    }

    fn collect_into<'a>(&'a self, nodes: &mut Vec<&'a Node>) {
        nodes.push(self);
        for child in &self.children {
            child.collect_into(nodes);
        }
    }
}

/// Parses a whole document into its root `Node`
pub fn parse(xml: &str) -> Result<Node> {
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<Node> = vec![];
    let mut root: Option<Node> = None;

    loop {
        match reader.read_event().map_err(DocumentError::Xml)? {
            Event::Start(start) => {
                stack.push(build_node(&start)?);
            }
            Event::Empty(start) => {
                let node = build_node(&start)?;
                attach(node, &mut stack, &mut root);
            }
            Event::End(_) => {
                if let Some(node) = stack.pop() {
                    attach(node, &mut stack, &mut root);
                }
            }
            Event::Text(text) => {
                let unescaped = text.unescape().map_err(DocumentError::Xml)?;
                append_text(&unescaped, &mut stack);
            }
            Event::CData(cdata) => {
                let raw = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                append_text(&raw, &mut stack);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let root = root.ok_or(DocumentError::NoRoot)?;
    Ok(root)
}

fn build_node(start: &quick_xml::events::BytesStart) -> Result<Node> {
    let tag = local_name(start.name().local_name().as_ref());

    let mut attrs = vec![];
    for attr in start.attributes() {
        let attr = attr.map_err(DocumentError::Attr)?;
        let name = local_name(attr.key.local_name().as_ref());
        let value = attr.unescape_value().map_err(DocumentError::Xml)?;
        attrs.push((name, value.into_owned()));
    }

    Ok(Node {
        tag,
        text: None,
        attrs,
        children: vec![],
    })
}

fn local_name(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn attach(node: Node, stack: &mut Vec<Node>, root: &mut Option<Node>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => {
            if root.is_none() {
                *root = Some(node);
            }
        }
    }
}

fn append_text(raw: &str, stack: &mut Vec<Node>) {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }

    if let Some(node) = stack.last_mut() {
        match node.text.as_mut() {
            Some(existing) => existing.push_str(trimmed),
            None => node.text = Some(trimmed.to_string()),
        }
    }
}
