use super::node::MarkupNode;
use super::parse::parse_fragment;
use super::serialize::to_inner_html;
use std::fmt;

/// Formatting tags that survive sanitization.
pub const ALLOWED_TAGS: [&str; 10] = ["br", "b", "strong", "i", "em", "u", "ul", "ol", "li", "p"];

/// Disallowed elements removed together with their content instead of unwrapped.
pub const DROPPED_WITH_CONTENT: [&str; 2] = ["script", "style"];

pub fn is_allowed(tag: &str) -> bool {
    ALLOWED_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

pub fn drops_content(tag: &str) -> bool {
    DROPPED_WITH_CONTENT.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

/// Markup reduced to the allow-list, with no attributes on any element.
/// Only produced by [`sanitize_html`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SanitizedMarkup {
    content: String,
}

impl SanitizedMarkup {
    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn into_string(self) -> String {
        self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl fmt::Display for SanitizedMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// Upper bound on re-sanitizing passes; real inputs settle in one or two.
const MAX_PASSES: usize = 4;

/// Sanitize untrusted markup. Never fails.
///
/// A single pass can emit markup the parser restructures on the next read
/// (an allowed `<p>` that sat inside an unwrapped `<button>` ends up nested
/// in another `<p>`), so passes repeat until the output is a fixed point.
pub fn sanitize_html(dirty: &str) -> SanitizedMarkup {
    let mut current = sanitize_pass(dirty);
    for _ in 1..MAX_PASSES {
        let next = sanitize_pass(&current);
        if next == current {
            break;
        }
        current = next;
    }
    SanitizedMarkup { content: current }
}

fn sanitize_pass(dirty: &str) -> String {
    to_inner_html(&clean_nodes(parse_fragment(dirty)))
}

/// Walks `nodes` depth-first and returns the allowed subset.
///
/// Disallowed elements are replaced in place by their own cleaned children,
/// so text under any number of wrappers keeps its position.
pub fn clean_nodes(nodes: Vec<MarkupNode>) -> Vec<MarkupNode> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            MarkupNode::Element(mut el) => {
                if is_allowed(&el.name) {
                    el.strip_attributes();
                    el.children = clean_nodes(el.children);
                    out.push(MarkupNode::Element(el));
                } else if drops_content(&el.name) {
                    log::debug!("[markup] dropped <{}> with content", el.name);
                } else {
                    out.extend(clean_nodes(el.children));
                }
            }
            MarkupNode::Text(t) => out.push(MarkupNode::Text(t)),
            MarkupNode::Other(_) => {}
        }
    }
    out
}
