//! # Flowchart Text Cleanup
//!
//! The backend returns flowcharts as markdown-fenced mermaid-style text. No
//! diagram layout happens on this side. The text is displayed verbatim after
//! stripping the fence markers and normalizing typographic quotes that LLM
//! output tends to contain. Cleaning is idempotent.

/// Strip markdown code fences and normalize smart quotes for display.
pub fn clean(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    for ch in raw.replace("```mermaid", "").replace("```", "").chars() {
        match ch {
            '\u{2018}' | '\u{2019}' => cleaned.push('\''),
            '\u{201C}' | '\u{201D}' => cleaned.push('"'),
            other => cleaned.push(other),
        }
    }
    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_mermaid_fence() {
        let raw = "```mermaid\ngraph TD\nA-->B\n```";
        assert_eq!(clean(raw), "graph TD\nA-->B");
    }

    #[test]
    fn test_strips_bare_fence() {
        let raw = "```\nStart --> End\n```\n";
        assert_eq!(clean(raw), "Start --> End");
    }

    #[test]
    fn test_normalizes_smart_quotes() {
        let raw = "A[\u{201C}start\u{201D}] --> B[\u{2018}end\u{2019}]";
        assert_eq!(clean(raw), "A[\"start\"] --> B['end']");
    }

    #[test]
    fn test_idempotent_on_clean_input() {
        let once = clean("```mermaid\ngraph TD\nA[\u{201C}x\u{201D}]-->B\n```");
        assert_eq!(clean(&once), once);
    }

    #[test]
    fn test_plain_text_unchanged() {
        let plain = "1. read input\n2. reverse\n3. print";
        assert_eq!(clean(plain), plain);
    }
}
