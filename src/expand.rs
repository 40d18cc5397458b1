//! Argument tokenization and placeholder expansion for template bodies.
//!
//! # Syntax
//!
//! - `$1`, `$2`, ... - The n-th argument (1-based), empty when absent
//! - `$ARGUMENTS` - All arguments joined by single spaces
//! - `$@` - Same as `$ARGUMENTS`
//!
//! Arguments come from a single free-text string split on spaces and tabs.
//! Single or double quotes group words into one argument:
//!
//! ```
//! use modelpin::expand::{expand, tokenize};
//!
//! let args = tokenize(r#"src/lib.rs "error handling""#);
//! assert_eq!(args, vec!["src/lib.rs", "error handling"]);
//!
//! let text = expand("Review $1 focusing on $2.", &args);
//! assert_eq!(text, "Review src/lib.rs focusing on error handling.");
//! ```

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// All placeholder forms, matched in a single pass.
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(\d+)|\$ARGUMENTS|\$@").expect("Invalid placeholder regex")
});

/// Split an argument string into arguments.
///
/// Quotes open a span closed only by the same quote character; quote
/// characters themselves are dropped. Outside quotes, spaces and tabs separate
/// arguments. Empty arguments are never produced, so `""` alone yields nothing.
pub fn tokenize(input: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for ch in input.chars() {
        match (quote, ch) {
            (Some(open), c) if c == open => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => quote = Some(ch),
            (None, ' ' | '\t') => {
                if !current.is_empty() {
                    args.push(std::mem::take(&mut current));
                }
            }
            (None, c) => current.push(c),
        }
    }

    if !current.is_empty() {
        args.push(current);
    }

    args
}

/// Substitute argument placeholders in a template body.
///
/// Every placeholder is replaced in one pass over `body`, so argument values
/// containing `$1` or `$@` are inserted literally.
pub fn expand(body: &str, args: &[String]) -> String {
    let all_args = args.join(" ");

    PLACEHOLDER_REGEX
        .replace_all(body, |caps: &Captures| match caps.get(1) {
            Some(index) => index
                .as_str()
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| args.get(i))
                .cloned()
                .unwrap_or_default(),
            None => all_args.clone(),
        })
        .into_owned()
}

/// Tokenize `raw_args` and expand `body` with the result.
pub fn render(body: &str, raw_args: &str) -> String {
    expand(body, &tokenize(raw_args))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_tokenize_quoted_span() {
        assert_eq!(tokenize(r#"a "b c" d"#), args(&["a", "b c", "d"]));
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t  ").is_empty());
    }

    #[test]
    fn test_tokenize_collapses_separators() {
        assert_eq!(tokenize("  a\t\tb  "), args(&["a", "b"]));
    }

    #[test]
    fn test_tokenize_single_quotes() {
        assert_eq!(tokenize("say 'hello world'"), args(&["say", "hello world"]));
    }

    #[test]
    fn test_tokenize_mismatched_quote_is_literal() {
        assert_eq!(tokenize(r#""it's here" x"#), args(&["it's here", "x"]));
        assert_eq!(tokenize(r#"'say "hi"'"#), args(&[r#"say "hi""#]));
    }

    #[test]
    fn test_tokenize_quotes_join_adjacent_text() {
        assert_eq!(tokenize(r#"pre"fix suf"fix"#), args(&["prefix suffix"]));
    }

    #[test]
    fn test_tokenize_empty_quotes_dropped() {
        assert_eq!(tokenize(r#"a "" b"#), args(&["a", "b"]));
    }

    #[test]
    fn test_tokenize_unterminated_quote() {
        assert_eq!(tokenize(r#"a "b c"#), args(&["a", "b c"]));
    }

    #[test]
    fn test_tokenize_newline_is_not_separator() {
        assert_eq!(tokenize("a\nb c"), args(&["a\nb", "c"]));
    }

    #[test]
    fn test_expand_positional_out_of_range() {
        assert_eq!(expand("Hi $1 and $2", &args(&["x"])), "Hi x and ");
    }

    #[test]
    fn test_expand_all_arguments() {
        assert_eq!(expand("$@ / $ARGUMENTS", &args(&["a", "b"])), "a b / a b");
    }

    #[test]
    fn test_expand_zero_is_empty() {
        assert_eq!(expand("[$0]", &args(&["a"])), "[]");
    }

    #[test]
    fn test_expand_multi_digit() {
        let values: Vec<String> = (1..=12).map(|n| format!("v{}", n)).collect();
        assert_eq!(expand("$10-$12-$1", &values), "v10-v12-v1");
    }

    #[test]
    fn test_expand_does_not_rescan_arguments() {
        let result = expand("$1 | $@", &args(&["$@", "$2"]));
        assert_eq!(result, "$@ | $@ $2");
    }

    #[test]
    fn test_expand_no_placeholders() {
        assert_eq!(expand("plain $ text $x", &args(&["a"])), "plain $ text $x");
    }

    #[test]
    fn test_expand_empty_args() {
        assert_eq!(expand("Do: $ARGUMENTS.", &[]), "Do: .");
    }

    #[test]
    fn test_expand_huge_index() {
        assert_eq!(expand("$99999999999999999999999", &args(&["a"])), "");
    }

    #[test]
    fn test_render() {
        assert_eq!(
            render("Fix $1 in $2", r#"bug "src/main.rs""#),
            "Fix bug in src/main.rs"
        );
    }
}
