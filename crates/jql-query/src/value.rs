//! Value formatting shared by the builders.

use jql_core::{JqlError, Result};

/// Wrap a value in double quotes, escaping embedded `\` and `"`.
pub(crate) fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Render `(a, b, c)`.
pub(crate) fn list<I>(items: I) -> Result<String>
where
    I: IntoIterator<Item = String>,
{
    let items: Vec<String> = items.into_iter().collect();
    if items.is_empty() {
        return Err(JqlError::InvalidArgument(
            "an 'in' list needs at least one value".to_string(),
        ));
    }
    Ok(format!("({})", items.join(", ")))
}

/// Render a JQL function call such as `releasedVersions(BUG)`.
pub(crate) fn call(name: &str, args: &str) -> String {
    format!("{name}({args})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn quote_plain_value() {
        assert_eq!(quote("Open"), "\"Open\"");
        assert_eq!(quote(""), "\"\"");
    }

    #[test]
    fn quote_escapes_quotes_and_backslashes() {
        assert_eq!(quote(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(quote(r"C:\temp"), r#""C:\\temp""#);
    }

    #[test]
    fn list_joins_with_comma_space() {
        let rendered = list(vec!["a".to_string(), "b".to_string(), "c".to_string()]).unwrap();
        assert_eq!(rendered, "(a, b, c)");
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(
            list(Vec::new()).unwrap_err(),
            JqlError::InvalidArgument(_)
        ));
    }

    #[test]
    fn call_with_and_without_args() {
        assert_eq!(call("currentUser", ""), "currentUser()");
        assert_eq!(call("linkedIssues", "BUG-1"), "linkedIssues(BUG-1)");
    }

    proptest! {
        #[test]
        fn quoted_value_has_exactly_one_unescaped_pair(value in ".*") {
            let quoted = quote(&value);
            prop_assert!(quoted.starts_with('"'));
            prop_assert!(quoted.ends_with('"'));

            let inner = &quoted[1..quoted.len() - 1];
            let mut escaped = false;
            for c in inner.chars() {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else {
                    prop_assert_ne!(c, '"');
                }
            }
            prop_assert!(!escaped);
        }
    }
}
