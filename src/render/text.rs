//! Inline text extraction from documentation fragments.
//!
//! `<see cref>`, `<paramref name>` and `<c>` become backtick-quoted code
//! spans; every other element is flattened to its text.

use crate::format::format_cref;
use crate::model::{Element, Node};
use regex::Regex;
use std::sync::LazyLock;

static RE_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +").unwrap());

/// Text content of an element, inline markup rendered.
pub fn extract_element_text(element: &Element) -> String {
    extract_text(&element.children)
}

/// Concatenate a run of fragment nodes. Runs of spaces collapse to one;
/// newlines are kept.
pub fn extract_text(nodes: &[Node]) -> String {
    let mut parts: Vec<String> = Vec::new();

    for node in nodes {
        match node {
            Node::Text(text) => parts.push(text.clone()),
            Node::Element(el) => {
                if let Some(rendered) = render_inline(el) {
                    parts.push(rendered);
                }
            }
        }
    }

    RE_SPACES.replace_all(&parts.concat(), " ").into_owned()
}

fn render_inline(el: &Element) -> Option<String> {
    let rendered = match el.tag.as_str() {
        "see" => {
            let cref = el.attr("cref").filter(|c| !c.is_empty())?;
            format!("`{}`", format_cref(cref))
        }
        "paramref" => {
            let name = el.attr("name").filter(|n| !n.is_empty())?;
            format!("`{}`", name)
        }
        "c" => {
            let code = extract_element_text(el);
            if code.is_empty() {
                return None;
            }
            format!("`{}`", code)
        }
        _ => extract_element_text(el),
    };
    Some(rendered)
}
