//! Parser module — XML documentation loading and identifier parsing.

pub mod identifier;

use crate::model::{Corpus, Element, Node, Record};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),
}

/// Read and parse an XML documentation file.
pub fn load_file(path: &Path) -> Result<Corpus, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content)
}

/// Parse XML documentation text into a Corpus.
///
/// Only `doc/assembly/name` and `doc/members/member[@name]` are read; a
/// member without a (non-empty) `name` attribute is dropped here.
pub fn parse(input: &str) -> Result<Corpus, LoadError> {
    let doc = roxmltree::Document::parse(input)?;
    let root = doc.root_element();

    let assembly_name = child_element(root, "assembly")
        .and_then(|asm| child_element(asm, "name"))
        .and_then(|name| name.text())
        .map(str::to_string);

    let mut records = Vec::new();
    if let Some(members) = child_element(root, "members") {
        for member in members
            .children()
            .filter(|n| n.is_element() && n.tag_name().name() == "member")
        {
            let Some(raw_identifier) = member.attribute("name").filter(|n| !n.is_empty()) else {
                tracing::debug!("skipping member without a name attribute");
                continue;
            };
            records.push(Record {
                raw_identifier: raw_identifier.to_string(),
                content: convert_children(member),
            });
        }
    }

    tracing::debug!(
        assembly = assembly_name.as_deref().unwrap_or("Unknown"),
        records = records.len(),
        "loaded corpus"
    );

    Ok(Corpus {
        assembly_name,
        records,
    })
}

fn child_element<'a, 'input>(
    node: roxmltree::Node<'a, 'input>,
    tag: &str,
) -> Option<roxmltree::Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == tag)
}

/// Convert an XML element's children into fragment nodes.
///
/// Comments and processing instructions are dropped; the text around them
/// stays, so adjacent text runs are merged into one node.
fn convert_children(node: roxmltree::Node) -> Vec<Node> {
    let mut out: Vec<Node> = Vec::new();
    for child in node.children() {
        if child.is_element() {
            out.push(Node::Element(convert_element(child)));
        } else if child.is_text() {
            let text = child.text().unwrap_or_default();
            match out.last_mut() {
                Some(Node::Text(prev)) => prev.push_str(text),
                _ => out.push(Node::Text(text.to_string())),
            }
        }
    }
    out
}

fn convert_element(node: roxmltree::Node) -> Element {
    let mut el = Element::new(node.tag_name().name());
    for attr in node.attributes() {
        el = el.with_attr(attr.name(), attr.value());
    }
    el.children = convert_children(node);
    el
}
