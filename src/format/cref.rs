//! `cref` attribute formatting for inline references.

use super::type_name::format_type_name;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_TYPE_ARITY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(\d+)").unwrap());

/// Format a cref value for display.
///
/// ``T:Grad.Result`1`` → `Grad.Result<T>`, ``T:Grad.Map`2`` → `Grad.Map<T1, T2>`.
pub fn format_cref(cref: &str) -> String {
    if cref.is_empty() {
        return String::new();
    }

    let name = match cref.split_once(':') {
        Some((_, rest)) => rest,
        None => cref,
    };

    // Arity has to be expanded before the placeholder pass sees the backticks.
    let expanded = RE_TYPE_ARITY.replace_all(name, |caps: &Captures| {
        let count: usize = caps[1].parse().unwrap_or(0);
        if count == 1 {
            "<T>".to_string()
        } else {
            let params: Vec<String> = (1..=count).map(|i| format!("T{}", i)).collect();
            format!("<{}>", params.join(", "))
        }
    });

    format_type_name(&expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_kind_prefix() {
        assert_eq!(format_cref("T:Grad.CsLib.Errors.NotFoundException"), "Grad.CsLib.Errors.NotFoundException");
        assert_eq!(format_cref("Grad.Widget"), "Grad.Widget");
    }

    #[test]
    fn expands_type_arity() {
        assert_eq!(format_cref("T:System.Linq.IQueryable`1"), "System.Linq.IQueryable<T>");
        assert_eq!(
            format_cref("T:System.Collections.Generic.Dictionary`2"),
            "System.Collections.Generic.Dictionary<T1, T2>"
        );
        assert_eq!(format_cref("T:Grad.Tuple`3"), "Grad.Tuple<T1, T2, T3>");
    }

    #[test]
    fn applies_type_formatting() {
        assert_eq!(
            format_cref("M:Grad.Db.Query(System.String,System.Int32)"),
            "Grad.Db.Query(string,int)"
        );
        assert_eq!(
            format_cref("M:Grad.Db.Map(System.Collections.Generic.List{System.String})"),
            "Grad.Db.Map(System.Collections.Generic.List<string>)"
        );
    }

    #[test]
    fn empty_cref() {
        assert_eq!(format_cref(""), "");
    }
}
