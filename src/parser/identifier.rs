//! Documentation-ID parsing: `T:Grad.Foo`, `M:Grad.Foo.Bar(System.String)`.

use crate::model::Kind;
use regex::Regex;
use std::sync::LazyLock;

static RE_MEMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([A-Z]):(.+)$").unwrap());

// First parenthesized group; `+` variant requires a non-empty list.
static RE_PARAMS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(([^)]*)\)").unwrap());
static RE_PARAMS_NONEMPTY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(([^)]+)\)").unwrap());

/// Split a documentation ID into its kind and qualified name.
///
/// Returns `None` when the ID doesn't match `X:name` with an uppercase `X`.
pub fn parse_member_name(id: &str) -> Option<(Kind, &str)> {
    let caps = RE_MEMBER.captures(id)?;
    let prefix = caps.get(1)?.as_str().chars().next()?;
    let name = caps.get(2)?.as_str();
    Some((Kind::from_prefix(prefix), name))
}

/// Number of parameters in a method ID. Commas nested in `{...}` generic
/// argument lists don't separate parameters.
pub fn count_parameters(id: &str) -> usize {
    let Some(caps) = RE_PARAMS.captures(id) else {
        return 0;
    };
    let params = &caps[1];
    if params.is_empty() {
        return 0;
    }
    let mut depth = 0i32;
    let mut count = 1;
    for c in params.chars() {
        match c {
            '{' => depth += 1,
            '}' => depth -= 1,
            ',' if depth == 0 => count += 1,
            _ => {}
        }
    }
    count
}

/// Raw type of the first parameter, e.g. `System.Linq.IQueryable{``0}`.
pub fn first_parameter_type(id: &str) -> Option<&str> {
    let params = RE_PARAMS_NONEMPTY.captures(id)?.get(1)?.as_str();
    Some(match top_level_comma(params) {
        Some(idx) => &params[..idx],
        None => params,
    })
}

/// Byte index of the first comma outside any `{...}` nesting.
pub fn top_level_comma(params: &str) -> Option<usize> {
    let mut depth = 0i32;
    for (i, c) in params.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth -= 1,
            ',' if depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_kind_and_name() {
        assert_eq!(
            parse_member_name("T:Grad.Widget"),
            Some((Kind::Type, "Grad.Widget"))
        );
        assert_eq!(
            parse_member_name("M:Grad.Widget.Run(System.String)"),
            Some((Kind::Method, "Grad.Widget.Run(System.String)"))
        );
        assert_eq!(
            parse_member_name("N:Grad"),
            Some((Kind::Other('N'), "Grad"))
        );
    }

    #[test]
    fn rejects_malformed_ids() {
        assert_eq!(parse_member_name("Grad.Widget"), None);
        assert_eq!(parse_member_name("t:Grad.Widget"), None);
        assert_eq!(parse_member_name("!:Grad.Widget"), None);
        assert_eq!(parse_member_name("T:"), None);
        assert_eq!(parse_member_name(""), None);
    }

    #[test]
    fn counts_parameters() {
        assert_eq!(count_parameters("M:X.Y(A,B,C)"), 3);
        assert_eq!(count_parameters("M:X.Y()"), 0);
        assert_eq!(count_parameters("M:X.Y"), 0);
        assert_eq!(count_parameters("M:X.Y(A)"), 1);
    }

    #[test]
    fn nested_commas_are_not_separators() {
        assert_eq!(count_parameters("M:X.Y(A{B,C},D)"), 2);
        assert_eq!(
            count_parameters("M:X.Y(System.Func{System.Collections.Generic.Dictionary{System.String,System.Int32},System.Boolean})"),
            1
        );
    }

    #[test]
    fn first_parameter() {
        assert_eq!(first_parameter_type("M:X.Y(A,B)"), Some("A"));
        assert_eq!(first_parameter_type("M:X.Y(A{B,C},D)"), Some("A{B,C}"));
        assert_eq!(
            first_parameter_type("M:X.Y(System.Linq.IQueryable{``0})"),
            Some("System.Linq.IQueryable{``0}")
        );
        assert_eq!(first_parameter_type("M:X.Y()"), None);
        assert_eq!(first_parameter_type("M:X.Y"), None);
    }

    #[test]
    fn finds_top_level_comma() {
        assert_eq!(top_level_comma("A{B,C},D"), Some(6));
        assert_eq!(top_level_comma("A{B,C}"), None);
    }
}
