//! Member header blocks: title line plus `**Label**: \`value\`` lines.

use super::type_name::format_type_name;
use crate::extension::ExtensionMap;
use crate::model::Kind;
use crate::parser::identifier::top_level_comma;
use regex::Regex;
use std::sync::LazyLock;

const CTOR_MARKER: &str = "#ctor";

static RE_CTOR_PARAMS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#ctor\(([^)]*)\)").unwrap());

static RE_METHOD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(.+?)(\(.*\))?$").unwrap());

static RE_METHOD_ARITY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"``\d+").unwrap());

static RE_TYPE_ARITY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`\d+").unwrap());

/// Render the Markdown header block for a member.
pub fn format_member_header(
    kind: Kind,
    full_name: &str,
    raw_identifier: &str,
    extensions: &ExtensionMap,
) -> String {
    match kind {
        Kind::Type => format!(
            "## {}\n\n**Type**: `{}`",
            format_type_name(last_segment(full_name)),
            format_type_name(full_name)
        ),
        Kind::Method => {
            let signature = format_method_signature(full_name, raw_identifier, extensions);
            let qualified = format_type_name(&format_full_method_name(full_name));
            match extensions.extended_type(raw_identifier) {
                Some(extended) => format!(
                    "### {}\n\n**Extends**: `{}`\n\n**Method**: `{}`",
                    format_type_name(&signature),
                    format_type_name(extended),
                    qualified
                ),
                None => format!(
                    "### {}\n\n**Method**: `{}`",
                    format_type_name(&signature),
                    qualified
                ),
            }
        }
        Kind::Property | Kind::Field | Kind::Event => format!(
            "### {}\n\n**{}**: `{}`",
            last_segment(full_name),
            kind.label(),
            format_type_name(full_name)
        ),
        Kind::Other(_) => format!("### {}\n\n**{}**: `{}`", full_name, kind.label(), full_name),
    }
}

/// Display signature of a method or constructor, e.g. `OrderByPath(string)`.
pub fn format_method_signature(
    full_name: &str,
    raw_identifier: &str,
    extensions: &ExtensionMap,
) -> String {
    if let Some(signature) = format_constructor(full_name) {
        return signature;
    }

    let Some(caps) = RE_METHOD.captures(full_name) else {
        return full_name.to_string();
    };
    let base = caps.get(1).map_or(full_name, |m| m.as_str());
    let params = caps.get(2).map_or("()", |m| m.as_str());

    let method_name = RE_METHOD_ARITY.replace_all(last_segment(base), "");

    if extensions.extended_type(raw_identifier).is_some() {
        // The receiver is shown on the Extends line instead.
        let inner = params
            .strip_prefix('(')
            .and_then(|p| p.strip_suffix(')'))
            .unwrap_or(params);
        return match top_level_comma(inner) {
            Some(idx) => format!("{}({})", method_name, format_type_name(&inner[idx + 1..])),
            None => format!("{}()", method_name),
        };
    }

    format!("{}{}", method_name, format_type_name(params))
}

/// `Grad.Widget.#ctor(System.String)` → `Widget(string)`.
fn format_constructor(full_name: &str) -> Option<String> {
    if !full_name.contains(CTOR_MARKER) {
        return None;
    }

    let parts: Vec<&str> = full_name.split('.').collect();
    let ctor_idx = parts.iter().position(|p| p.contains(CTOR_MARKER))?;
    let class_name = parts[..ctor_idx].last()?;

    Some(match RE_CTOR_PARAMS.captures(full_name) {
        Some(caps) => format!("{}({})", class_name, format_type_name(&caps[1])),
        None => format!("{}()", class_name),
    })
}

/// Qualified method name with generic arity markers stripped from the part
/// before the parameter list.
pub fn format_full_method_name(full_name: &str) -> String {
    let (before, params) = match full_name.find('(') {
        Some(idx) => full_name.split_at(idx),
        None => (full_name, ""),
    };

    let before = RE_METHOD_ARITY.replace_all(before, "");
    let before = RE_TYPE_ARITY.replace_all(&before, "");

    format!("{}{}", before, format_type_name(params))
}

fn last_segment(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}
