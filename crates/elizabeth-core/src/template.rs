/// Replace `{key}` tokens in `template` with their values.
///
/// Unknown tokens and unmatched braces are copied through unchanged.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let Some(end) = tail.find('}') else {
            out.push_str(tail);
            return out;
        };
        let key = &tail[1..end];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&tail[..=end]),
        }
        rest = &tail[end + 1..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_named_tokens() {
        let out = render("{st_num} {st_name} {st_sfx}", &[
            ("st_num", "12"),
            ("st_name", "Abbey"),
            ("st_sfx", "Road"),
        ]);
        assert_eq!(out, "12 Abbey Road");
    }

    #[test]
    fn keeps_unknown_tokens_and_stray_braces() {
        assert_eq!(render("{a}-{b}", &[("a", "1")]), "1-{b}");
        assert_eq!(render("open { brace", &[]), "open { brace");
        assert_eq!(render("", &[("a", "1")]), "");
    }

    #[test]
    fn values_are_not_re_expanded() {
        assert_eq!(render("{a}{b}", &[("a", "{b}"), ("b", "x")]), "{b}x");
    }
}
