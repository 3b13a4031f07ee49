//! Best-effort repair of model output into a JSON object.
//!
//! Order: strip markdown fences → slice from the first `{` to the last `}` → strict
//! parse. If that fails: normalize typographic quotes, drop trailing commas that sit
//! outside strings, parse again.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepairError {
    #[error("no JSON object found in model output")]
    NoObject,

    #[error("model output is not valid JSON after repair: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Returns the repaired JSON object, or why it could not be recovered.
pub fn repair_json(text: &str) -> Result<Value, RepairError> {
    let candidate = extract_object(strip_json_fences(text)).ok_or(RepairError::NoObject)?;

    if let Ok(value) = serde_json::from_str::<Value>(candidate) {
        return Ok(value);
    }

    let repaired = remove_trailing_commas(&normalize_quotes(candidate));
    Ok(serde_json::from_str(&repaired)?)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match inner {
        Some(stripped) => {
            let stripped = stripped.trim_start();
            stripped
                .strip_suffix("```")
                .map(str::trim)
                .unwrap_or(stripped)
        }
        None => text,
    }
}

fn extract_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

fn normalize_quotes(text: &str) -> String {
    text.replace(['\u{201C}', '\u{201D}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'")
}

/// Removes `,` directly followed (modulo whitespace) by `}` or `]`, outside strings.
fn remove_trailing_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;

    for (i, &c) in chars.iter().enumerate() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            ',' => {
                let next = chars[i + 1..].iter().find(|ch| !ch.is_whitespace());
                if !matches!(next, Some('}') | Some(']')) {
                    out.push(c);
                }
            }
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_clean_json_passes_through() {
        let value = repair_json(r#"{"name": "Ada", "skills": ["Rust"]}"#).unwrap();
        assert_eq!(value, json!({"name": "Ada", "skills": ["Rust"]}));
    }

    #[test]
    fn test_prose_around_object_is_dropped() {
        let value = repair_json("Here is your resume:\n{\"name\": \"Ada\"}\nGood luck!").unwrap();
        assert_eq!(value, json!({"name": "Ada"}));
    }

    #[test]
    fn test_trailing_commas_removed() {
        let text = "```json\n{\"skills\": [\"Rust\", \"Go\",], \"name\": \"Ada\",\n}\n```";
        let value = repair_json(text).unwrap();
        assert_eq!(value, json!({"skills": ["Rust", "Go"], "name": "Ada"}));
    }

    #[test]
    fn test_commas_inside_strings_kept() {
        assert_eq!(
            remove_trailing_commas(r#"{"a": "x,}", "b": "y\",]",}"#),
            r#"{"a": "x,}", "b": "y\",]"}"#
        );
    }

    #[test]
    fn test_smart_quotes_normalized() {
        let value = repair_json("{\u{201C}name\u{201D}: \u{201C}Ada\u{201D},}").unwrap();
        assert_eq!(value, json!({"name": "Ada"}));
    }

    #[test]
    fn test_no_object_is_error() {
        assert!(matches!(repair_json("I cannot help with that."), Err(RepairError::NoObject)));
        assert!(matches!(repair_json("[1, 2, 3]"), Err(RepairError::NoObject)));
        assert!(matches!(repair_json("} {"), Err(RepairError::NoObject)));
    }

    #[test]
    fn test_unrepairable_is_error() {
        assert!(matches!(repair_json("{\"name\": }"), Err(RepairError::Invalid(_))));
    }
}
