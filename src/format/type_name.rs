//! Readable type names: `System.Collections.Generic.List{System.String}` →
//! `System.Collections.Generic.List<string>`.

use regex::Regex;
use std::sync::LazyLock;

/// Generic parameter placeholders. Method-level (double backtick) entries
/// must be replaced before the type-level ones.
const GENERIC_PLACEHOLDERS: &[(&str, &str)] = &[
    ("``0", "T"),
    ("``1", "T2"),
    ("``2", "T3"),
    ("``3", "T4"),
    ("`0", "T"),
    ("`1", "T2"),
    ("`2", "T3"),
    ("`3", "T4"),
];

/// Plain substring replacement, so it must run after brace conversion.
const TYPE_ALIASES: &[(&str, &str)] = &[
    ("System.String", "string"),
    ("System.Int32", "int"),
    ("System.Int64", "long"),
    ("System.Boolean", "bool"),
    ("System.Double", "double"),
    ("System.Decimal", "decimal"),
    ("System.Object", "object"),
    ("System.Void", "void"),
    ("System.Func", "Func"),
    ("System.Action", "Action"),
];

const MAX_BRACE_PASSES: usize = 10;

// Innermost generic argument list only.
static RE_INNER_BRACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").unwrap());

/// Format a raw type reference for display.
pub fn format_type_name(type_name: &str) -> String {
    if type_name.is_empty() {
        return String::new();
    }

    let mut result = type_name.to_string();
    for (placeholder, readable) in GENERIC_PLACEHOLDERS {
        result = result.replace(placeholder, readable);
    }

    result = braces_to_angles(&result);

    for (full, alias) in TYPE_ALIASES {
        result = result.replace(full, alias);
    }
    result
}

/// Rewrite `{...}` generic lists to `<...>`, innermost first.
fn braces_to_angles(text: &str) -> String {
    let mut result = text.to_string();
    for _ in 0..MAX_BRACE_PASSES {
        let next = RE_INNER_BRACES.replace_all(&result, "<${1}>").into_owned();
        if next == result {
            break;
        }
        result = next;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stays_empty() {
        assert_eq!(format_type_name(""), "");
    }

    #[test]
    fn generic_braces() {
        assert_eq!(
            format_type_name("System.Collections.Generic.List{System.String}"),
            "System.Collections.Generic.List<string>"
        );
    }

    #[test]
    fn nested_generics() {
        assert_eq!(
            format_type_name("System.Func{System.Collections.Generic.Dictionary{System.String,System.Int32},System.Boolean}"),
            "Func<System.Collections.Generic.Dictionary<string,int>,bool>"
        );
    }

    #[test]
    fn placeholders() {
        assert_eq!(
            format_type_name("(System.Linq.IQueryable{``0},System.String)"),
            "(System.Linq.IQueryable<T>,string)"
        );
        assert_eq!(format_type_name("Grad.Result`1"), "Grad.ResultT2");
        assert_eq!(format_type_name("Grad.Map{``0,``1}"), "Grad.Map<T,T2>");
    }

    #[test]
    fn aliases_are_substrings() {
        assert_eq!(format_type_name("System.Int64"), "long");
        assert_eq!(format_type_name("System.Void"), "void");
        assert_eq!(format_type_name("System.Action{System.Object}"), "Action<object>");
        assert_eq!(format_type_name("System.StringComparison"), "stringComparison");
    }

    #[test]
    fn idempotent_on_formatted_input() {
        for raw in [
            "System.Collections.Generic.List{System.String}",
            "(System.Linq.IQueryable{``0},System.String)",
            "Grad.Thing",
            "System.Func{System.Int32,System.Boolean}",
        ] {
            let once = format_type_name(raw);
            assert_eq!(format_type_name(&once), once, "input: {}", raw);
        }
    }

    #[test]
    fn deep_nesting_converges() {
        for depth in 1..=9 {
            let mut raw = "X".to_string();
            for _ in 0..depth {
                raw = format!("G{{{}}}", raw);
            }
            let formatted = format_type_name(&raw);
            assert!(!formatted.contains('{') && !formatted.contains('}'), "depth {}: {}", depth, formatted);
            assert_eq!(formatted.matches('<').count(), depth);
        }
    }

    #[test]
    fn unbalanced_input_terminates() {
        assert_eq!(format_type_name("Grad.Broken{System.String"), "Grad.Broken{string");
    }
}
