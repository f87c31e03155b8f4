/// Node kinds the sanitizer never keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtherKind {
    Comment,
    Doctype,
    ProcessingInstruction,
    Document,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
    /// Lower-cased local name.
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<MarkupNode>,
}

impl ElementNode {
    pub fn new(name: &str) -> Self {
        ElementNode {
            name: name.to_ascii_lowercase(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_child(mut self, child: MarkupNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn attr_names(&self) -> Vec<String> {
        self.attrs.iter().map(|(n, _)| n.clone()).collect()
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
    }

    /// Removes every attribute, one name at a time.
    pub fn strip_attributes(&mut self) {
        for name in self.attr_names() {
            self.remove_attr(&name);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    Element(ElementNode),
    Text(String),
    Other(OtherKind),
}

impl MarkupNode {
    pub fn text(s: &str) -> Self {
        MarkupNode::Text(s.to_string())
    }

    /// Concatenated text of this node and its descendants, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(node: &MarkupNode, out: &mut String) {
    match node {
        MarkupNode::Text(t) => out.push_str(t),
        MarkupNode::Element(el) => {
            for child in &el.children {
                collect_text(child, out);
            }
        }
        MarkupNode::Other(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_attributes_removes_all() {
        let mut el = ElementNode::new("B")
            .with_attr("class", "y")
            .with_attr("onclick", "x()");
        assert_eq!(el.name, "b");
        el.strip_attributes();
        assert!(el.attrs.is_empty());
    }

    #[test]
    fn text_content_walks_in_order() {
        let node = MarkupNode::Element(
            ElementNode::new("p")
                .with_child(MarkupNode::text("a"))
                .with_child(MarkupNode::Element(
                    ElementNode::new("b").with_child(MarkupNode::text("b")),
                ))
                .with_child(MarkupNode::Other(OtherKind::Comment))
                .with_child(MarkupNode::text("c")),
        );
        assert_eq!(node.text_content(), "abc");
    }
}
