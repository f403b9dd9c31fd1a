// Shared prompt-building utilities.
// Each feature that needs LLM calls keeps its own templates in its prompts.rs;
// this file holds what they have in common.

/// Single-pass `{name}` substitution. Unknown placeholders are left as written,
/// and substituted values are never scanned again.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 512);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replacement = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_keeps_unknown_and_unclosed_braces() {
        let out = fill_template("a {x} {y} {", &[("x", "1")]);
        assert_eq!(out, "a 1 {y} {");
    }

    #[test]
    fn test_fill_template_repeats_and_does_not_rescan() {
        let out = fill_template("{a}-{a}-{b}", &[("a", "{b}"), ("b", "2")]);
        assert_eq!(out, "{b}-{b}-2");
    }
}
