use crate::html::HtmlNode;

/// The kind of an inline fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    /// Text that isn't part of any special construct.
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
    Email,
}

impl FragmentKind {
    /// Whether fragments of this kind carry a URL.
    pub fn has_url(self) -> bool {
        matches!(
            self,
            FragmentKind::Link | FragmentKind::Image | FragmentKind::Email
        )
    }
}

/// A typed span of inline text produced by the tokenizer.
///
/// Two fragments are equal when text, kind and url are all equal; a missing
/// url never equals a present one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineFragment {
    /// Visible text (alt text for images, the bare address for emails).
    pub text: String,
    pub kind: FragmentKind,
    /// Target of links, images and emails.
    pub url: Option<String>,
}

impl InlineFragment {
    pub fn new(text: impl Into<String>, kind: FragmentKind) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, FragmentKind::Plain)
    }

    pub fn with_url(text: impl Into<String>, kind: FragmentKind, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            url: Some(url.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == FragmentKind::Plain
    }

    /// Copy of this fragment with text and url HTML-escaped.
    ///
    /// Image text ends up in `alt`, so it gets attribute escaping like urls.
    #[must_use]
    pub fn escaped(&self) -> Self {
        let text = match self.kind {
            FragmentKind::Image => html_escape::encode_double_quoted_attribute(&self.text),
            _ => html_escape::encode_text(&self.text),
        };
        Self {
            text: text.into_owned(),
            kind: self.kind,
            url: self
                .url
                .as_deref()
                .map(|url| html_escape::encode_double_quoted_attribute(url).into_owned()),
        }
    }

    /// Converts this fragment to its HTML leaf.
    ///
    /// A url on a kind that doesn't use one is ignored.
    pub fn to_html_node(&self) -> HtmlNode {
        let url = if self.kind.has_url() {
            self.url.clone().unwrap_or_default()
        } else {
            String::new()
        };
        match self.kind {
            FragmentKind::Plain => HtmlNode::text(self.text.clone()),
            FragmentKind::Bold => HtmlNode::leaf("b", self.text.clone()),
            FragmentKind::Italic => HtmlNode::leaf("i", self.text.clone()),
            FragmentKind::Code => HtmlNode::leaf("code", self.text.clone()),
            FragmentKind::Link | FragmentKind::Email => {
                HtmlNode::leaf("a", self.text.clone()).with_attribute("href", url)
            }
            FragmentKind::Image => HtmlNode::void("img")
                .with_attribute("src", url)
                .with_attribute("alt", self.text.clone()),
        }
    }
}
