//! Prompt templates

use super::operation::Operation;

/// Build the full prompt for an operation.
///
/// `max_items` is only used by tags and glossary.
pub fn build_prompt(operation: Operation, text: &str, max_items: usize) -> String {
    let instruction = match operation {
        Operation::Summary => "Summarize the following text in 2-4 sentences".to_string(),
        Operation::Tags => format!(
            "Suggest up to {} relevant tags (keywords) for this text. \
             Return only the tags separated by commas",
            max_items
        ),
        Operation::Grammar => "Check the grammar and spelling of the following text and provide \
                               ONLY the corrected version without any explanations or additional text"
            .to_string(),
        Operation::Glossary => format!(
            "Extract up to {} key terms and concise definitions from this text. \
             Format as: Term: Definition (one per line)",
            max_items
        ),
    };
    format!("{}:\n\n{}", instruction, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_prompt_includes_limit_and_text() {
        let prompt = build_prompt(Operation::Tags, "Rust is fast.", 7);
        assert!(prompt.starts_with("Suggest up to 7 relevant tags (keywords) for this text."));
        assert!(prompt.contains("Return only the tags separated by commas"));
        assert!(prompt.ends_with("\n\nRust is fast."));
    }

    #[test]
    fn test_glossary_prompt() {
        let prompt = build_prompt(Operation::Glossary, "body", 20);
        assert!(prompt.starts_with("Extract up to 20 key terms and concise definitions"));
        assert!(prompt.contains("Format as: Term: Definition (one per line)"));
    }

    #[test]
    fn test_fixed_prompts_ignore_limit() {
        assert_eq!(
            build_prompt(Operation::Summary, "x", 3),
            build_prompt(Operation::Summary, "x", 99)
        );
        assert!(build_prompt(Operation::Grammar, "x", 0).contains("ONLY the corrected version"));
    }
}
