use super::node::{ElementNode, MarkupNode, OtherKind};
use super::sanitize::drops_content;
use scraper::node::Node;
use scraper::{ElementRef, Html};

/// Elements nested deeper than this are flattened to their text.
/// Browsers stop nesting at a similar depth; it also bounds every
/// recursive walk over the converted tree.
pub const MAX_ELEMENT_DEPTH: usize = 512;

/// Parse `input` as an HTML body fragment and return the children of the
/// fragment container. Never fails: html5ever recovers from any input.
pub fn parse_fragment(input: &str) -> Vec<MarkupNode> {
    if input.is_empty() {
        return Vec::new();
    }
    let html = Html::parse_fragment(input);
    convert_children(html.root_element(), 0)
}

fn convert_children(parent: ElementRef<'_>, depth: usize) -> Vec<MarkupNode> {
    let mut out = Vec::new();
    for child in parent.children() {
        let node = match child.value() {
            Node::Text(t) => MarkupNode::Text(String::from(&**t)),
            Node::Element(_) => match ElementRef::wrap(child) {
                Some(el) => convert_element(el, depth + 1),
                None => continue,
            },
            Node::Comment(_) => MarkupNode::Other(OtherKind::Comment),
            Node::Doctype(_) => MarkupNode::Other(OtherKind::Doctype),
            Node::ProcessingInstruction(_) => {
                MarkupNode::Other(OtherKind::ProcessingInstruction)
            }
            Node::Document | Node::Fragment => MarkupNode::Other(OtherKind::Document),
        };
        out.push(node);
    }
    out
}

fn convert_element(el: ElementRef<'_>, depth: usize) -> MarkupNode {
    let value = el.value();
    let mut node = ElementNode::new(value.name());
    for (name, val) in value.attrs() {
        node.attrs.push((name.to_string(), val.to_string()));
    }

    if depth >= MAX_ELEMENT_DEPTH {
        if drops_content(&node.name) {
            return MarkupNode::Element(node);
        }
        let text = flattened_text(el);
        if !text.is_empty() {
            node.children.push(MarkupNode::Text(text));
        }
        return MarkupNode::Element(node);
    }

    node.children = convert_children(el, depth);
    MarkupNode::Element(node)
}

// Iterative over the subtree; skips text that sits under a content-dropping element.
fn flattened_text(el: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in el.descendants() {
        if let Node::Text(t) = node.value() {
            let hidden = node
                .ancestors()
                .take_while(|a| a.id() != el.id())
                .any(|a| matches!(a.value(), Node::Element(e) if drops_content(e.name())));
            if !hidden {
                out.push_str(t);
            }
        }
    }
    out
}
