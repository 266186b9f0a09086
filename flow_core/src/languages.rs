//! # Target Language Catalog
//!
//! The fixed, ordered set of ten languages the backend generates code for.
//! The catalog drives both the results-panel language selector and download
//! filename resolution. It is static and never mutated at runtime.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Extension used when a language key is unknown to the catalog, so the
/// export path degrades to a readable filename instead of failing.
pub const FALLBACK_EXTENSION: &str = "txt";

/// A code generation target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
    Java,
    Cpp,
    CSharp,
    Go,
    Rust,
    TypeScript,
    Swift,
    Kotlin,
}

impl Language {
    /// All catalog entries, in selector display order.
    pub const ALL: [Language; 10] = [
        Language::Python,
        Language::JavaScript,
        Language::Java,
        Language::Cpp,
        Language::CSharp,
        Language::Go,
        Language::Rust,
        Language::TypeScript,
        Language::Swift,
        Language::Kotlin,
    ];

    /// The wire key used in `code_outputs` maps.
    pub fn key(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::CSharp => "csharp",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::TypeScript => "typescript",
            Language::Swift => "swift",
            Language::Kotlin => "kotlin",
        }
    }

    /// Human-readable selector label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::CSharp => "C#",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::TypeScript => "TypeScript",
            Language::Swift => "Swift",
            Language::Kotlin => "Kotlin",
        }
    }

    /// Source file extension for downloads.
    pub fn extension(&self) -> &'static str {
        match self {
            Language::Python => "py",
            Language::JavaScript => "js",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::CSharp => "cs",
            Language::Go => "go",
            Language::Rust => "rs",
            Language::TypeScript => "ts",
            Language::Swift => "swift",
            Language::Kotlin => "kt",
        }
    }

    /// Look up a catalog entry by wire key.
    pub fn from_key(key: &str) -> Option<Language> {
        Language::ALL.iter().copied().find(|l| l.key() == key)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Extension for an arbitrary (possibly unknown) language key.
///
/// Unknown keys resolve to [`FALLBACK_EXTENSION`] so download filenames are
/// never extensionless.
pub fn extension_for_key(key: &str) -> &'static str {
    Language::from_key(key)
        .map(|l| l.extension())
        .unwrap_or(FALLBACK_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_ten_entries() {
        assert_eq!(Language::ALL.len(), 10);
    }

    #[test]
    fn test_key_roundtrip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_key(lang.key()), Some(lang));
        }
    }

    #[test]
    fn test_wire_key_serialization() {
        let json = serde_json::to_string(&Language::CSharp).unwrap();
        assert_eq!(json, "\"csharp\"");
        let roundtrip: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, Language::CSharp);
    }

    #[test]
    fn test_extension_lookup() {
        assert_eq!(extension_for_key("python"), "py");
        assert_eq!(extension_for_key("kotlin"), "kt");
        assert_eq!(extension_for_key("cobol"), FALLBACK_EXTENSION);
    }
}
