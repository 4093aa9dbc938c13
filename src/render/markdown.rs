//! Markdown document assembly for a whole corpus.
//!
//! Two passes: the first indexes every member (compiler-generated and
//! out-of-namespace ones included, since `<inheritdoc>` targets and extension
//! blocks live there); the second renders the members that pass the filters,
//! in source order.

use super::docs;
use crate::extension::ExtensionMap;
use crate::format::format_member_header;
use crate::model::{build_lookup, Corpus, Kind};
use crate::parser::identifier::parse_member_name;
use regex::Regex;
use std::sync::LazyLock;

/// Default root namespace of rendered members.
pub const DEFAULT_NAMESPACE: &str = "Grad";

// `<G>$…` containers from C# extension blocks and similar unspeakable names.
static RE_COMPILER_GENERATED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^<>]*>\$").unwrap());

/// Options for [`assemble`].
#[derive(Debug, Clone)]
pub struct AssembleOptions {
    /// Only members under this namespace are rendered
    pub namespace: String,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        AssembleOptions {
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl AssembleOptions {
    /// Namespace with a trailing dot, the form qualified names are matched against.
    pub fn namespace_prefix(&self) -> String {
        format!("{}.", self.namespace.trim_end_matches('.'))
    }
}

/// Render a corpus as a Markdown document.
///
/// `source_name` is shown in the provenance line, usually the input file name.
pub fn assemble(corpus: &Corpus, source_name: &str, options: &AssembleOptions) -> String {
    let lookup = build_lookup(&corpus.records);
    let extensions = ExtensionMap::detect(&corpus.records, &lookup);
    tracing::debug!(
        members = lookup.len(),
        extension_methods = extensions.len(),
        "indexed corpus"
    );

    let prefix = options.namespace_prefix();
    let mut markdown: Vec<String> = vec![
        format!("# {}\n", corpus.assembly_name.as_deref().unwrap_or("Unknown")),
        format!("*Generated from {}*\n", source_name),
    ];

    for record in &corpus.records {
        let Some((kind, full_name)) = parse_member_name(&record.raw_identifier) else {
            tracing::debug!(member = %record.raw_identifier, "not a member identifier");
            continue;
        };
        if is_compiler_generated(full_name) {
            tracing::trace!(member = %record.raw_identifier, "compiler-generated");
            continue;
        }
        if !full_name.starts_with(&prefix) {
            tracing::trace!(member = %record.raw_identifier, "outside namespace");
            continue;
        }
        // Properties are covered by their type's section.
        if kind == Kind::Property {
            continue;
        }

        let header = format_member_header(kind, full_name, &record.raw_identifier, &extensions);
        markdown.push(format!("\n{}\n", header));
        markdown.push(docs::resolve(record, &lookup));
        markdown.push("\n---\n".to_string());
    }

    markdown.join("\n")
}

/// Names the compiler invents: extension-block containers and nested `+` types.
pub fn is_compiler_generated(full_name: &str) -> bool {
    full_name.contains('+') || RE_COMPILER_GENERATED.is_match(full_name)
}
