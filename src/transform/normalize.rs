//! Model output normalization
//!
//! Turns the free text returned by the model into the typed result for
//! each operation. These functions never fail: unusable output yields an
//! empty list, or for grammar the caller's original text.

use regex_lite::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::types::GlossaryTerm;

static RE_PREAMBLE: OnceLock<Regex> = OnceLock::new();
static RE_ORIGINAL_HEADING: OnceLock<Regex> = OnceLock::new();
static RE_CORRECTED_HEADING: OnceLock<Regex> = OnceLock::new();

/// Leading labels the model likes to put before a correction, optionally in bold
fn preamble() -> &'static Regex {
    RE_PREAMBLE.get_or_init(|| {
        Regex::new(
            r"(?i)^\s*(?:\*\*)?\s*(?:here(?:'|’)?s the corrected (?:version|text)|here is the corrected (?:version|text)|corrected (?:version|text)|fixed (?:version|text)|original text)\s*(?:\*\*\s*:|:\s*\*\*|:)\s*",
        )
        .unwrap()
    })
}

fn original_heading() -> &'static Regex {
    RE_ORIGINAL_HEADING.get_or_init(|| {
        Regex::new(r"(?i)^\s*(?:\*\*)?\s*original text\s*(?:\*\*\s*:|:\s*\*\*|:)").unwrap()
    })
}

fn corrected_heading() -> &'static Regex {
    RE_CORRECTED_HEADING.get_or_init(|| {
        Regex::new(r"(?i)(?:\*\*)?\s*corrected (?:version|text)\s*(?:\*\*\s*:|:\s*\*\*|:)").unwrap()
    })
}

/// Comma-separated tags: trimmed, blanks and repeats dropped, model order kept,
/// at most `max` entries.
pub fn parse_tags(raw: &str, max: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .filter(|tag| seen.insert(*tag))
        .take(max)
        .map(str::to_string)
        .collect()
}

/// `Term: Definition` lines, split on the first colon. Lines without a colon,
/// or with an empty side, are discarded. At most `max` entries.
pub fn parse_glossary(raw: &str, max: usize) -> Vec<GlossaryTerm> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let (term, definition) = line.split_once(':')?;
            let (term, definition) = (term.trim(), definition.trim());
            if term.is_empty() || definition.is_empty() {
                None
            } else {
                Some(GlossaryTerm::new(term, definition))
            }
        })
        .take(max)
        .collect()
}

/// Strip correction preambles from grammar output.
///
/// When the model echoes an "Original Text:" section followed by a
/// "Corrected Text:" section, only the part after the last corrected heading
/// is kept. Falls back to `original` if nothing is left.
pub fn clean_grammar(raw: &str, original: &str) -> String {
    let mut text = raw.trim();

    if original_heading().is_match(text) {
        if let Some(heading) = corrected_heading().find_iter(text).last() {
            text = &text[heading.end()..];
        }
    }

    while let Some(m) = preamble().find(text) {
        text = text[m.end()..].trim_start();
    }

    let text = text.trim();
    if text.is_empty() {
        original.to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_drop_blanks_keep_order() {
        assert_eq!(
            parse_tags("ai, climate , , policy", 10),
            vec!["ai", "climate", "policy"]
        );
    }

    #[test]
    fn test_tags_dedupe_and_cap() {
        assert_eq!(parse_tags("a, b, a, c, d", 3), vec!["a", "b", "c"]);
        assert!(parse_tags(" , ,", 10).is_empty());
    }

    #[test]
    fn test_glossary_discards_lines_without_colon() {
        let raw = "Photosynthesis: process plants use to convert light to energy\n\
                   bad line without colon\n\
                   Carbon: an element";
        let terms = parse_glossary(raw, 20);
        assert_eq!(
            terms,
            vec![
                GlossaryTerm::new("Photosynthesis", "process plants use to convert light to energy"),
                GlossaryTerm::new("Carbon", "an element"),
            ]
        );
    }

    #[test]
    fn test_glossary_splits_on_first_colon_only() {
        let terms = parse_glossary("Ratio: 3:1 mix\n\n  :orphan\nEmpty:   \n", 20);
        assert_eq!(terms, vec![GlossaryTerm::new("Ratio", "3:1 mix")]);
    }

    #[test]
    fn test_glossary_cap() {
        let terms = parse_glossary("a: 1\nb: 2\nc: 3", 2);
        assert_eq!(terms.len(), 2);
        assert_eq!(terms[1].term, "b");
    }

    #[test]
    fn test_grammar_strips_preambles() {
        let original = "the cat sat on teh mat";
        assert_eq!(
            clean_grammar("Corrected text: The cat sat on the mat.", original),
            "The cat sat on the mat."
        );
        assert_eq!(
            clean_grammar("Here's the corrected version:\n\nThe cat sat on the mat.", original),
            "The cat sat on the mat."
        );
        assert_eq!(
            clean_grammar("**Fixed version:** The cat sat on the mat.", original),
            "The cat sat on the mat."
        );
        assert_eq!(
            clean_grammar("HERE IS THE CORRECTED TEXT: The cat.", original),
            "The cat."
        );
    }

    #[test]
    fn test_grammar_takes_corrected_section() {
        let raw = "Original Text: the cat sat on teh mat\n\nCorrected Text: The cat sat on the mat.";
        assert_eq!(clean_grammar(raw, "x"), "The cat sat on the mat.");

        let bold = "**Original Text:** teh cat\n**Corrected Text:** The cat.";
        assert_eq!(clean_grammar(bold, "x"), "The cat.");
    }

    #[test]
    fn test_grammar_leaves_plain_text_alone() {
        assert_eq!(
            clean_grammar("  Corrected versions are rare.  ", "x"),
            "Corrected versions are rare."
        );
    }

    #[test]
    fn test_grammar_falls_back_to_original() {
        assert_eq!(clean_grammar("Corrected text:", "keep me"), "keep me");
        assert_eq!(clean_grammar("   ", "keep me"), "keep me");
    }
}
