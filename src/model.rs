//! Data model for a loaded documentation corpus — format-agnostic.

use std::collections::HashMap;

/// Raw identifier → record, over every record of a corpus.
pub type Lookup<'a> = HashMap<&'a str, &'a Record>;

/// Build the lookup for a record set. Later duplicates replace earlier ones.
pub fn build_lookup(records: &[Record]) -> Lookup<'_> {
    records
        .iter()
        .map(|r| (r.raw_identifier.as_str(), r))
        .collect()
}

/// Complete parsed corpus from a single XML documentation file.
#[derive(Debug, Default)]
pub struct Corpus {
    /// `doc/assembly/name`
    pub assembly_name: Option<String>,
    /// `doc/members/member` entries in source order
    pub records: Vec<Record>,
}

/// A single documented member.
#[derive(Debug, Clone)]
pub struct Record {
    /// Raw `name` attribute, e.g. `M:Grad.Foo.Bar(System.String)`
    pub raw_identifier: String,
    /// Children of the `<member>` element
    pub content: Vec<Node>,
}

impl Record {
    /// First direct child element with the given tag.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        self.content.iter().find_map(|node| match node {
            Node::Element(el) if el.tag == tag => Some(el),
            _ => None,
        })
    }

    /// All direct child elements with the given tag, in document order.
    pub fn find_all<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.content.iter().filter_map(move |node| match node {
            Node::Element(el) if el.tag == tag => Some(el),
            _ => None,
        })
    }

    /// Target of this record's `<inheritdoc cref="..."/>`, if it names one.
    pub fn inherit_target(&self) -> Option<&str> {
        self.find("inheritdoc")
            .and_then(|el| el.attr("cref"))
            .filter(|cref| !cref.is_empty())
    }
}

#[cfg(test)]
impl Record {
    pub fn new(id: &str, elements: Vec<Element>) -> Self {
        Record {
            raw_identifier: id.to_string(),
            content: elements.into_iter().map(Node::Element).collect(),
        }
    }

    /// A record whose only content is `<inheritdoc cref="target"/>`.
    pub fn inheriting(id: &str, target: &str) -> Self {
        Record::new(id, vec![Element::new("inheritdoc").with_attr("cref", target)])
    }
}

/// Documentation fragment: text or inline markup.
///
/// The text following an element inside its parent (its "tail") is the
/// `Text` node that comes right after it in the parent's children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Element(Element),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub tag: String,
    /// Attributes in source order
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Element {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    #[cfg(test)]
    pub fn with_text(mut self, text: &str) -> Self {
        self.children.push(Node::Text(text.to_string()));
        self
    }

    #[cfg(test)]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }
}

/// Member kind, from the one-letter identifier prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Type,
    Method,
    Property,
    Field,
    Event,
    /// Any other uppercase prefix (e.g. `N:` namespaces)
    Other(char),
}

impl Kind {
    pub fn from_prefix(c: char) -> Self {
        match c {
            'T' => Kind::Type,
            'M' => Kind::Method,
            'P' => Kind::Property,
            'F' => Kind::Field,
            'E' => Kind::Event,
            other => Kind::Other(other),
        }
    }

    /// Label used in rendered header blocks.
    pub fn label(&self) -> String {
        match self {
            Kind::Type => "Type".to_string(),
            Kind::Method => "Method".to_string(),
            Kind::Property => "Property".to_string(),
            Kind::Field => "Field".to_string(),
            Kind::Event => "Event".to_string(),
            Kind::Other(c) => c.to_string(),
        }
    }
}
