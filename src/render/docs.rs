//! Member documentation body: summary, parameters, returns, remarks, exceptions.

use super::text::extract_element_text;
use crate::format::format_type_name;
use crate::model::{Element, Lookup, Record};

pub const NO_DOCUMENTATION: &str = "*No documentation available.*";

/// Resolve the documentation body of a record.
///
/// A record with a resolvable `<inheritdoc cref>` is documented entirely by
/// its target. A link back into the chain being followed is ignored, and the
/// record renders its own sections instead.
pub fn resolve(record: &Record, lookup: &Lookup) -> String {
    let mut chain: Vec<&str> = Vec::new();
    resolve_chain(record, lookup, &mut chain)
}

fn resolve_chain<'a>(record: &'a Record, lookup: &Lookup<'a>, chain: &mut Vec<&'a str>) -> String {
    chain.push(&record.raw_identifier);

    if let Some(target) = record.inherit_target() {
        if let Some(&inherited) = lookup.get(target) {
            if chain.contains(&inherited.raw_identifier.as_str()) {
                tracing::warn!(
                    member = %record.raw_identifier,
                    inherits = target,
                    "inheritdoc cycle, using the member's own documentation"
                );
            } else {
                return resolve_chain(inherited, lookup, chain);
            }
        }
    }

    render_sections(record)
}

fn render_sections(record: &Record) -> String {
    let mut docs: Vec<String> = Vec::new();

    if let Some(summary) = record.find("summary") {
        let text = section_text(summary);
        if !text.is_empty() {
            docs.push(text);
        }
    }

    for param in record.find_all("param") {
        let name = param.attr("name").unwrap_or_default();
        let text = section_text(param);
        if !text.is_empty() {
            docs.push(format!("**{}**: {}", name, text));
        }
    }

    if let Some(returns) = record.find("returns") {
        let text = section_text(returns);
        if !text.is_empty() {
            docs.push(format!("**Returns**: {}", text));
        }
    }

    if let Some(remarks) = record.find("remarks") {
        let text = section_text(remarks);
        if !text.is_empty() {
            docs.push(format!("**Remarks**: {}", text));
        }
    }

    for exception in record.find_all("exception") {
        let exception_type = exception.attr("cref").unwrap_or_default();
        let text = section_text(exception);
        if !text.is_empty() {
            docs.push(format!("**Throws {}**: {}", format_type_name(exception_type), text));
        }
    }

    if docs.is_empty() {
        NO_DOCUMENTATION.to_string()
    } else {
        docs.join("\n\n")
    }
}

fn section_text(el: &Element) -> String {
    extract_element_text(el).trim().to_string()
}
