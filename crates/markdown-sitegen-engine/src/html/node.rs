use super::{Attributes, HtmlError};

/// A node in the HTML output tree.
///
/// Nodes are immutable once built; serialization borrows the tree and
/// never changes it, so rendering the same tree twice gives the same bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// A node without children.
    ///
    /// No tag means `value` is raw text. A tag with no value is a void element.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attributes: Attributes,
    },
    /// A node whose content is exclusively other nodes.
    Parent {
        tag: Option<String>,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    /// A tagged leaf such as `<b>value</b>`.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// A tagless leaf, emitted verbatim.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// A void element such as `<hr>`.
    pub fn void(tag: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: None,
            attributes: Attributes::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.into()),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Adds an attribute, keeping insertion order.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => {
                attributes.insert(name, value)
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => attributes,
        }
    }

    /// Children of a parent node; leaves have none.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Parent { children, .. } => children,
        }
    }

    /// Serializes this node and its descendants to markup.
    ///
    /// Fails on the first structurally invalid node; no partial output is returned.
    pub fn to_html(&self) -> Result<String, HtmlError> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<(), HtmlError> {
        match self {
            HtmlNode::Leaf {
                tag: None,
                value: Some(value),
                ..
            } => out.push_str(value),
            HtmlNode::Leaf {
                tag: None,
                value: None,
                ..
            } => return Err(HtmlError::MissingValue),
            HtmlNode::Leaf {
                tag: Some(tag),
                value,
                attributes,
            } => {
                open_tag(out, tag, attributes);
                if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                    out.push_str(value);
                    close_tag(out, tag);
                }
            }
            HtmlNode::Parent { tag: None, .. } => return Err(HtmlError::MissingTag),
            HtmlNode::Parent {
                tag: Some(tag),
                children,
                attributes,
            } => {
                if children.is_empty() {
                    return Err(HtmlError::MissingChildren { tag: tag.clone() });
                }
                open_tag(out, tag, attributes);
                for child in children {
                    child.write_html(out)?;
                }
                close_tag(out, tag);
            }
        }
        Ok(())
    }
}

fn open_tag(out: &mut String, tag: &str, attributes: &Attributes) {
    out.push('<');
    out.push_str(tag);
    attributes.write_html(out);
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
