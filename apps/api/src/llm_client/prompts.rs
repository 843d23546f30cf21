// Shared prompt fragments and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting pieces.

/// Persona preamble shared by the résumé prompts.
pub const CAREER_ADVISOR_PERSONA: &str =
    "You are an expert career advisor and resume writer with 20 years of experience.";

/// Forbids chatty framing around the generated content.
pub const NO_PREAMBLE_INSTRUCTION: &str = "\
    Do not add any introductory or concluding sentences like \
    \"Here are the rewritten bullet points...\".";

/// Replaces every `{key}` placeholder in `template` with its value.
///
/// Substitution is single-pass over the template: placeholder-like text
/// inside a substituted value is left untouched.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let replaced = after.find('}').and_then(|end| {
            let key = &after[..end];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, end))
        });
        match replaced {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 1..];
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
    fn test_fill_template_replaces_known_keys() {
        let out = fill_template(
            "Role: {job_title}. Again: {job_title}.",
            &[("job_title", "Data Scientist")],
        );
        assert_eq!(out, "Role: Data Scientist. Again: Data Scientist.");
    }

    #[test]
    fn test_fill_template_leaves_unknown_braces() {
        let out = fill_template("keep {unknown} and {", &[("job_title", "x")]);
        assert_eq!(out, "keep {unknown} and {");
    }

    #[test]
    fn test_fill_template_does_not_expand_inside_values() {
        let out = fill_template(
            "{a} then {b}",
            &[("a", "{b}"), ("b", "B")],
        );
        assert_eq!(out, "{b} then B");
    }
}
