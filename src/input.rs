use crate::models::TaggedWord;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Tagged words read from a file, plus the lines that could not be split.
#[derive(Debug, Clone, Default)]
pub struct TaggedInput {
    pub words: Vec<TaggedWord>,
    pub malformed: Vec<(usize, String)>,
}

pub fn read_word_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list: {:?}", path))?;
    Ok(parse_word_list(&content))
}

/// One word or phrase per line. Blank lines are skipped; inner spaces are kept.
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

pub fn read_tagged_words(path: &Path) -> Result<TaggedInput> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read tagged word file: {:?}", path))?;
    Ok(parse_tagged_words(&content))
}

/// Accepts `word<TAB>tag` or `word/tag` per line. Line numbers in
/// `malformed` are 1-based.
pub fn parse_tagged_words(content: &str) -> TaggedInput {
    let mut input = TaggedInput::default();

    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let pair = line.split_once('\t').or_else(|| line.rsplit_once('/'));
        match pair {
            Some((word, tag)) if !word.trim().is_empty() && !tag.trim().is_empty() => {
                input.words.push(TaggedWord::new(word.trim(), tag.trim()));
            }
            _ => input.malformed.push((idx + 1, line.to_string())),
        }
    }

    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_word_list() {
        let words = parse_word_list("sun\n\n  \nbig cat\nmoon\n");
        assert_eq!(words, vec!["sun", "big cat", "moon"]);
    }

    #[test]
    fn test_read_word_list() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Alpha").unwrap();
        writeln!(file, "Beta!").unwrap();

        let words = read_word_list(file.path()).unwrap();
        assert_eq!(words, vec!["Alpha", "Beta!"]);
        assert!(read_word_list(Path::new("/nonexistent/words.txt")).is_err());
    }

    #[test]
    fn test_parse_tagged_words() {
        let input = parse_tagged_words("run\tVB\ndog/NN\nbroken\n\nand/or/CC\n/NN\n");
        assert_eq!(
            input.words,
            vec![
                TaggedWord::new("run", "VB"),
                TaggedWord::new("dog", "NN"),
                TaggedWord::new("and/or", "CC"),
            ]
        );
        assert_eq!(
            input.malformed,
            vec![(3, "broken".to_string()), (6, "/NN".to_string())]
        );
    }
}
