//! String template rendering utilities.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{Error, Result};

pub struct TemplateVars;

impl TemplateVars {
    pub const COPYRIGHT: &'static str = "copyright";
    pub const LICENSE: &'static str = "license";
    pub const CMD_PACKAGE: &'static str = "cmdPackage";
    pub const PARENT_NAME: &'static str = "parentName";
    pub const CMD_NAME: &'static str = "cmdName";
}

// Matches `{{key}}` and `{{ key }}` where key is an identifier
static PLACEHOLDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap());

/// Render `{{key}}` placeholders in a single pass, failing on unknown keys.
///
/// Substituted values are not rescanned, so a value containing `{{...}}`
/// is emitted as-is.
pub fn render_strict(template: &str, variables: &HashMap<&str, String>) -> Result<String> {
    let mut missing: Vec<String> = Vec::new();

    let rendered = PLACEHOLDER_PATTERN.replace_all(template, |caps: &Captures| {
        let key = &caps[1];
        match variables.get(key) {
            Some(value) => value.clone(),
            None => {
                if !missing.iter().any(|m| m == key) {
                    missing.push(key.to_string());
                }
                caps[0].to_string()
            }
        }
    });

    if !missing.is_empty() {
        return Err(Error::template_render_failed(missing, None));
    }

    Ok(rendered.into_owned())
}

pub fn is_present(template: &str, key: &str) -> bool {
    PLACEHOLDER_PATTERN
        .captures_iter(template)
        .any(|caps| &caps[1] == key)
}

/// Turn text into line comments: `// ` before every line, `//` for blank ones.
pub fn comment(text: &str) -> String {
    text.trim_end_matches(['\n', '\r'])
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                "//".to_string()
            } else {
                format!("// {}", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&'static str, &str)]) -> HashMap<&'static str, String> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn render_strict_substitutes() {
        let out = render_strict("var {{ cmdName }}Cmd", &vars(&[("cmdName", "serve")])).unwrap();
        assert_eq!(out, "var serveCmd");
    }

    #[test]
    fn render_strict_reports_each_missing_key_once() {
        let err = render_strict("{{a}} {{b}} {{b}}", &vars(&[("a", "1")])).unwrap_err();
        assert_eq!(err.code.as_str(), "template.render_failed");
        assert_eq!(err.details["missing"], serde_json::json!(["b"]));
    }

    #[test]
    fn render_strict_does_not_rescan_values() {
        let out = render_strict("{{a}}", &vars(&[("a", "{{b}}")])).unwrap();
        assert_eq!(out, "{{b}}");
    }

    #[test]
    fn render_strict_ignores_non_identifier_braces() {
        let out = render_strict("map[string]int{{1: 2}}", &HashMap::new()).unwrap();
        assert_eq!(out, "map[string]int{{1: 2}}");
    }

    #[test]
    fn is_present_detects_spaced_placeholder() {
        assert!(is_present("x {{ license }} y", "license"));
        assert!(!is_present("x {{ license }} y", "copyright"));
    }

    #[test]
    fn comment_prefixes_lines() {
        assert_eq!(comment("one\n\ntwo\n"), "// one\n//\n// two");
    }

    #[test]
    fn comment_empty_is_empty() {
        assert_eq!(comment(""), "");
    }
}
