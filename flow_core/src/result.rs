//! # Backend Result
//!
//! The three-part response produced atomically by the backend: pseudocode,
//! a textual flowchart, and a per-language map of generated source. The UI
//! treats a received result as immutable; a new submission replaces it whole.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::languages::Language;

/// Parsed `200` response from the backend processing endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformResult {
    /// Pseudocode rendering of the submitted logic
    pub pseudocode: String,

    /// Flowchart as annotated text (cleaned before display, never laid out)
    pub flowchart: String,

    /// Generated source keyed by language wire key ("python", "cpp", ...)
    #[serde(default)]
    pub code_outputs: HashMap<String, String>,
}

impl TransformResult {
    /// Generated code for a catalog language.
    ///
    /// A language the backend did not populate yields an empty string; the
    /// display degrades to an empty code block rather than failing.
    pub fn code_for(&self, language: Language) -> &str {
        self.code_outputs
            .get(language.key())
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TransformResult {
        let mut code_outputs = HashMap::new();
        code_outputs.insert(
            "python".to_string(),
            "def reverse(s): return s[::-1]".to_string(),
        );
        TransformResult {
            pseudocode: "REVERSE the string".to_string(),
            flowchart: "Start --> End".to_string(),
            code_outputs,
        }
    }

    #[test]
    fn test_code_lookup_exact() {
        let result = sample();
        assert_eq!(
            result.code_for(Language::Python),
            "def reverse(s): return s[::-1]"
        );
    }

    #[test]
    fn test_missing_language_yields_empty() {
        let result = sample();
        for lang in Language::ALL {
            // Every catalog key resolves without panicking
            let code = result.code_for(lang);
            if lang != Language::Python {
                assert_eq!(code, "");
            }
        }
    }

    #[test]
    fn test_deserialize_without_code_outputs() {
        let json = r#"{"pseudocode":"p","flowchart":"f"}"#;
        let result: TransformResult = serde_json::from_str(json).unwrap();
        assert!(result.code_outputs.is_empty());
    }
}
