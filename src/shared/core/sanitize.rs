/// Trims surrounding whitespace and escapes the five HTML-significant
/// characters, so stored free text can be rendered verbatim.
pub fn sanitize_text(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut escaped = String::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod sanitize_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("  Acme Corp  ", "Acme Corp")]
    #[case("<script>alert('x')</script>", "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;")]
    #[case("Tom & \"Jerry\"", "Tom &amp; &#34;Jerry&#34;")]
    #[case("面接", "面接")]
    #[case("", "")]
    fn it_should_trim_and_escape(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(sanitize_text(raw), expected);
    }
}
