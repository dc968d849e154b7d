//! Escaping for text export formats.
//!
//! Customer names, reasons and actions are free text; a stray pipe or quote
//! must not break a Markdown table or shift CSV columns.

/// Escape a string for a double-quoted CSV field (RFC 4180), flattening
/// newlines.
///
/// # Examples
///
/// ```
/// use renewals_dash::reports::escape::escape_csv;
///
/// assert_eq!(escape_csv("say \"hi\""), "say \"\"hi\"\"");
/// ```
#[must_use]
pub fn escape_csv(s: &str) -> String {
    s.replace('"', "\"\"").replace(['\n', '\r'], " ")
}

/// Escape a string for a Markdown table cell.
///
/// # Examples
///
/// ```
/// use renewals_dash::reports::escape::escape_markdown_table;
///
/// assert_eq!(escape_markdown_table("a | b"), "a \\| b");
/// assert_eq!(escape_markdown_table("line1\nline2"), "line1 line2");
/// ```
#[must_use]
pub fn escape_markdown_table(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '|' => result.push_str("\\|"),
            '\n' => result.push(' '),
            '\r' => {}
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for inline Markdown such as headings.
#[must_use]
pub fn escape_markdown_inline(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' => result.push_str("\\*"),
            '_' => result.push_str("\\_"),
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            '#' => result.push_str("\\#"),
            '|' => result.push_str("\\|"),
            '<' => result.push_str("\\<"),
            '>' => result.push_str("\\>"),
            '\n' => result.push(' '),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a \"quoted\" word"), "a \"\"quoted\"\" word");
        assert_eq!(escape_csv("two\nlines"), "two lines");
    }

    #[test]
    fn test_escape_markdown_table_malicious() {
        assert_eq!(
            escape_markdown_table("row1\n| new | row |"),
            "row1 \\| new \\| row \\|"
        );
        assert_eq!(
            escape_markdown_table("[evil](http://example.com)"),
            "\\[evil\\](http://example.com)"
        );
    }

    #[test]
    fn test_escape_markdown_inline() {
        assert_eq!(escape_markdown_inline("**bold**"), "\\*\\*bold\\*\\*");
        assert_eq!(escape_markdown_inline("# heading"), "\\# heading");
    }

    #[test]
    fn test_unicode_preserved() {
        assert_eq!(escape_csv("₹25,000"), "₹25,000");
        assert_eq!(escape_markdown_table("Rajesh Kumar ✓"), "Rajesh Kumar ✓");
    }
}
