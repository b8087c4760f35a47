//! Response template rendering.
//!
//! Templates reference the whole match as `$0` and capture groups as `$1`,
//! `$2`, ... Rendering is a single left-to-right pass: text inserted for a
//! placeholder is never scanned again.

use regex::Captures;

/// Render `template`, replacing every placeholder with its captured text.
///
/// - A placeholder is `$` followed by exactly one digit, so `$10` is `$1`
///   followed by `0` whatever the number of groups.
/// - Groups that did not participate in the match render as empty text.
/// - A `$` that does not start a valid placeholder is kept literally.
pub fn render_template(template: &str, captures: &Captures<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        match group_reference(after, captures.len()) {
            Some(index) => {
                out.push_str(captures.get(index).map_or("", |m| m.as_str()));
                rest = &after[1..];
            }
            None => {
                out.push('$');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Group index named by the single digit starting `after`, if that group
/// exists.
fn group_reference(after: &str, group_count: usize) -> Option<usize> {
    after
        .chars()
        .next()
        .and_then(|c| c.to_digit(10))
        .map(|digit| digit as usize)
        .filter(|&index| index < group_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn render(pattern: &str, template: &str, message: &str) -> String {
        let regex = Regex::new(pattern).unwrap();
        let captures = regex.captures(message).unwrap();
        render_template(template, &captures)
    }

    #[test]
    fn test_first_group_substitution() {
        assert_eq!(
            render("(.*)name(.*)", "id=$1", "what is your name?"),
            "id=what is your "
        );
    }

    #[test]
    fn test_whole_match_and_repeated_placeholders() {
        assert_eq!(
            render(r"(\w+) (\w+)", "$0 / $2 $1 / $1", "hello world"),
            "hello world / world hello / hello"
        );
    }

    #[test]
    fn test_no_placeholders() {
        assert_eq!(render("hello", "Hi there!", "hello"), "Hi there!");
    }

    #[test]
    fn test_inserted_text_is_not_rescanned() {
        // The captured "$1" must come out verbatim, not be expanded again.
        assert_eq!(render(r"say (.*)", "you said $1", "say $1 now"), "you said $1 now");
    }

    #[test]
    fn test_unknown_group_is_literal() {
        assert_eq!(render("(a)", "cost: $5", "a"), "cost: $5");
        assert_eq!(render("(a)", "just $", "a"), "just $");
        assert_eq!(render("(a)", "$x", "a"), "$x");
    }

    #[test]
    fn test_placeholder_index_is_one_digit() {
        assert_eq!(render("(a)(b)(c)", "$12", "abc"), "a2");
        assert_eq!(render("(a)", "$01", "a"), "a1");
        // Even with eleven groups, `$10` is group 1 followed by `0`.
        assert_eq!(
            render("(a)(b)(c)(d)(e)(f)(g)(h)(i)(j)(k)", "[$10]", "abcdefghijk"),
            "[a0]"
        );
    }

    #[test]
    fn test_unmatched_optional_group_renders_empty() {
        assert_eq!(render("(x)?(y)", "[$1][$2]", "y"), "[][y]");
    }

    #[test]
    fn test_multibyte_text_around_placeholders() {
        assert_eq!(render("(.+)", "«$1» ✓", "héllo"), "«héllo» ✓");
    }
}
