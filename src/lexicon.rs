use anyhow::{Context, Result};
use rust_stemmers::{Algorithm, Stemmer};
use std::borrow::Cow;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// English stop words as shipped with the NLTK corpus.
static ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
    "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "she's", "her", "hers", "herself", "it", "it's",
    "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "that'll", "these", "those", "am", "is", "are",
    "was", "were", "be", "been", "being", "have", "has", "had", "having", "do",
    "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because",
    "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below",
    "to", "from", "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t",
    "can", "will", "just", "don", "don't", "should", "should've", "now", "d", "ll",
    "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't",
    "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't",
    "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't", "mustn",
    "mustn't", "needn", "needn't", "shan", "shan't", "shouldn", "shouldn't",
    "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
];

/// Terms that may come out of synonym expansion and must never become names.
pub static BAD_WORDS: &[&str] = &["nigger", "wop", "kike", "faggot", "fuck", "pussy", "cunt"];

/// Lowercase word set used by `remove_stop_words`.
#[derive(Debug, Clone)]
pub struct StopWordCorpus {
    words: HashSet<String>,
}

impl StopWordCorpus {
    pub fn english() -> Self {
        Self::from_list(ENGLISH_STOP_WORDS)
    }

    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        StopWordCorpus {
            words: words.iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Loads a corpus with one word per line. Blank lines and `#` comments are skipped.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read stop word file: {:?}", path))?;
        let words: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();
        Ok(Self::from_list(&words))
    }

    /// Expects an already lowercased word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWordCorpus {
    fn default() -> Self {
        Self::english()
    }
}

#[derive(Debug, Clone)]
pub struct BadWordList {
    words: HashSet<&'static str>,
}

impl BadWordList {
    pub fn new() -> Self {
        BadWordList {
            words: BAD_WORDS.iter().copied().collect(),
        }
    }

    /// Exact, case-insensitive match.
    pub fn is_bad(&self, word: &str) -> bool {
        self.words.contains(word.to_lowercase().as_str())
    }
}

impl Default for BadWordList {
    fn default() -> Self {
        Self::new()
    }
}

/// Reduces a word to its stem. Implementations must be deterministic and
/// must accept the empty string.
pub trait WordStemmer: Send + Sync {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str>;
}

/// Snowball English (Porter2) stemmer.
pub struct PorterStemmer {
    inner: Stemmer,
}

impl PorterStemmer {
    pub fn new() -> Self {
        PorterStemmer {
            inner: Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for PorterStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl WordStemmer for PorterStemmer {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if word.is_empty() {
            return Cow::Borrowed(word);
        }
        self.inner.stem(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_english_corpus() {
        let corpus = StopWordCorpus::english();
        assert!(corpus.contains("the"));
        assert!(corpus.contains("and"));
        assert!(corpus.contains("is"));
        assert!(!corpus.contains("cat"));
        assert!(!corpus.is_empty());
    }

    #[test]
    fn test_corpus_from_list_lowercases() {
        let corpus = StopWordCorpus::from_list(&["Foo", "BAR"]);
        assert!(corpus.contains("foo"));
        assert!(corpus.contains("bar"));
        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn test_corpus_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# custom list").unwrap();
        writeln!(file, "alpha").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  Beta  ").unwrap();

        let corpus = StopWordCorpus::from_file(file.path()).unwrap();
        assert_eq!(corpus.len(), 2);
        assert!(corpus.contains("alpha"));
        assert!(corpus.contains("beta"));
    }

    #[test]
    fn test_corpus_missing_file() {
        assert!(StopWordCorpus::from_file(Path::new("/nonexistent/stop.txt")).is_err());
    }

    #[test]
    fn test_bad_words_exact_match() {
        let list = BadWordList::new();
        assert!(list.is_bad("Fuck"));
        assert!(list.is_bad("CUNT"));
        assert!(!list.is_bad("fucking"));
        assert!(!list.is_bad("woppa"));
    }

    #[test]
    fn test_porter_stemmer() {
        let stemmer = PorterStemmer::new();
        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("cats"), "cat");
        assert_eq!(stemmer.stem(""), "");
    }
}
