use crate::lexicon::{BadWordList, PorterStemmer, StopWordCorpus, WordStemmer};
use crate::models::PosIndex;
use crate::odd_sounds::OddSoundRules;
use crate::settings::NormalizerConfig;
use anyhow::{Context, Result};
use regex::Regex;
use std::collections::HashSet;

/// Punctuation and digits removed by `clean_sort`.
const STRIP_PATTERN: &str = r##"[!"#$%'()*+,._/:;<=>?@\[\\\]^`{|}~0-9]"##;

/// Word list transforms for turning seed words into a candidate pool.
///
/// Every transform borrows its input and returns a fresh list. The
/// normalizer itself is immutable after construction and can be shared
/// between threads.
pub struct Normalizer {
    config: NormalizerConfig,
    strip_pattern: Regex,
    stop_words: StopWordCorpus,
    bad_words: BadWordList,
    stemmer: Box<dyn WordStemmer>,
    odd_sounds: OddSoundRules,
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Result<Self> {
        config.validate().context("Invalid normalizer config")?;
        Ok(Normalizer {
            config,
            strip_pattern: Regex::new(STRIP_PATTERN)
                .context("Failed to compile strip pattern")?,
            stop_words: StopWordCorpus::english(),
            bad_words: BadWordList::new(),
            stemmer: Box::new(PorterStemmer::new()),
            odd_sounds: OddSoundRules::new().context("Failed to create odd sound rules")?,
        })
    }

    pub fn with_stop_words(mut self, stop_words: StopWordCorpus) -> Self {
        self.stop_words = stop_words;
        self
    }

    pub fn with_stemmer(mut self, stemmer: Box<dyn WordStemmer>) -> Self {
        self.stemmer = stemmer;
        self
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    pub fn odd_sounds(&self) -> &OddSoundRules {
        &self.odd_sounds
    }

    /// Trims, lowercases and strips punctuation and digits from every word,
    /// dropping words that are a single character before or after cleaning.
    pub fn clean_sort<S: AsRef<str>>(&self, words: Option<&[S]>) -> Option<Vec<String>> {
        let words = words?;
        Some(
            words
                .iter()
                .map(AsRef::as_ref)
                .filter(|word| word.chars().count() > 1)
                .map(|word| self.clean_word(word))
                .filter(|word| word.chars().count() > 1)
                .collect(),
        )
    }

    fn clean_word(&self, word: &str) -> String {
        let lowered = word.trim().to_lowercase();
        self.strip_pattern.replace_all(&lowered, "").trim().to_string()
    }

    pub fn remove_stop_words<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        words
            .iter()
            .map(AsRef::as_ref)
            .filter(|word| !self.stop_words.contains(&word.to_lowercase()))
            .map(str::to_string)
            .collect()
    }

    pub fn remove_bad_words<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        words
            .iter()
            .map(AsRef::as_ref)
            .filter(|word| !self.bad_words.is_bad(word))
            .map(str::to_string)
            .collect()
    }

    pub fn stem_words<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        words
            .iter()
            .map(|word| self.stemmer.stem(word.as_ref()).into_owned())
            .collect()
    }

    /// Keeps single words within `min_length..=max_length`. A phrase keeps
    /// only its chunks within `min_length..=spaced_max_length`, rejoined as
    /// one entry that may end up empty.
    pub fn filter_words<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        let min = self.config.min_length;
        let mut filtered = Vec::with_capacity(words.len());

        for word in words.iter().map(AsRef::as_ref) {
            if word.contains(' ') {
                let kept: Vec<&str> = word
                    .split(' ')
                    .filter(|chunk| {
                        let len = chunk.chars().count();
                        len >= min && len <= self.config.spaced_max_length
                    })
                    .collect();
                filtered.push(kept.join(" "));
            } else {
                let len = word.chars().count();
                if len >= min && len <= self.config.max_length {
                    filtered.push(word.to_string());
                }
            }
        }

        filtered
    }

    pub fn remove_odd_sounding_words<S: AsRef<str>>(
        &self,
        words: Option<&[S]>,
    ) -> Option<Vec<String>> {
        let words = words?;
        Some(
            words
                .iter()
                .map(AsRef::as_ref)
                .filter(|word| !self.odd_sounds.is_odd(word))
                .map(str::to_string)
                .collect(),
        )
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NormalizerConfig::default()).expect("default normalizer config is valid")
    }
}

/// Removes duplicates, keeping the first occurrence of each word.
pub fn uniquify<S: AsRef<str>>(words: Option<&[S]>) -> Option<Vec<String>> {
    let words = words?;
    let mut seen: HashSet<&str> = HashSet::with_capacity(words.len());
    Some(
        words
            .iter()
            .map(AsRef::as_ref)
            .filter(|word| seen.insert(*word))
            .map(str::to_string)
            .collect(),
    )
}

/// Drops one letter from each end that repeats its neighbour.
///
/// Each end is trimmed at most once: `"sssun"` becomes `"ssun"`.
pub fn chop_duplicate_ends(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    if chars.len() >= 2 && chars[0] == chars[1] {
        chars.remove(0);
    }
    let len = chars.len();
    if len >= 2 && chars[len - 2] == chars[len - 1] {
        chars.pop();
    }
    chars.into_iter().collect()
}

pub fn chop_duplicate_ends_all<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    words
        .iter()
        .map(|word| chop_duplicate_ends(word.as_ref()))
        .collect()
}

pub fn key_words_by_pos_tag<I, W, T>(words: I) -> PosIndex
where
    I: IntoIterator<Item = (W, T)>,
    W: Into<String>,
    T: Into<String>,
{
    let mut index = PosIndex::new();
    for (word, tag) in words {
        index.entry(tag.into()).or_default().push(word.into());
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_sort() {
        let normalizer = Normalizer::default();
        let cleaned = normalizer.clean_sort(Some(&["  Foo1!  ", "a"][..])).unwrap();
        assert_eq!(cleaned, vec!["foo"]);
    }

    #[test]
    fn test_clean_sort_none_and_empty() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.clean_sort::<&str>(None), None);
        let empty: &[&str] = &[];
        assert_eq!(normalizer.clean_sort(Some(empty)), Some(vec![]));
    }

    #[test]
    fn test_clean_sort_keeps_hyphen_and_ampersand() {
        let normalizer = Normalizer::default();
        let cleaned = normalizer
            .clean_sort(Some(&["Rock-Solid", "R&D", "[Brand]", "42"][..]))
            .unwrap();
        assert_eq!(cleaned, vec!["rock-solid", "r&d", "brand"]);
    }

    #[test]
    fn test_clean_sort_preserves_inner_spaces() {
        let normalizer = Normalizer::default();
        let cleaned = normalizer.clean_sort(Some(&["Big Cat 9"][..])).unwrap();
        assert_eq!(cleaned, vec!["big cat"]);
    }

    #[test]
    fn test_uniquify() {
        assert_eq!(
            uniquify(Some(&["a", "b", "a", "c"][..])),
            Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
        assert_eq!(uniquify::<String>(None), None);
        assert_eq!(
            uniquify(Some(&["Sun", "sun"][..])).unwrap(),
            vec!["Sun", "sun"]
        );
    }

    #[test]
    fn test_remove_stop_words() {
        let normalizer = Normalizer::default();
        assert_eq!(
            normalizer.remove_stop_words(&["the", "cat", "sat"]),
            vec!["cat", "sat"]
        );
        assert_eq!(normalizer.remove_stop_words(&["The", "Cat"]), vec!["Cat"]);
    }

    #[test]
    fn test_custom_stop_words() {
        let normalizer =
            Normalizer::default().with_stop_words(StopWordCorpus::from_list(&["cat"]));
        assert_eq!(
            normalizer.remove_stop_words(&["the", "cat", "sat"]),
            vec!["the", "sat"]
        );
    }

    #[test]
    fn test_remove_bad_words() {
        let normalizer = Normalizer::default();
        assert_eq!(
            normalizer.remove_bad_words(&["Fuck", "fucking", "brand"]),
            vec!["fucking", "brand"]
        );
    }

    #[test]
    fn test_stem_words() {
        let normalizer = Normalizer::default();
        let stemmed = normalizer.stem_words(&["running", "cats", "", "run"]);
        assert_eq!(stemmed, vec!["run", "cat", "", "run"]);
    }

    #[test]
    fn test_filter_words() {
        let normalizer = Normalizer::default();
        let filtered = normalizer.filter_words(&[
            "ab",
            "abcd",
            "a b c d e f g h i j k l m n o p q r s t u v w x y z",
        ]);
        assert_eq!(filtered, vec!["abcd", ""]);
    }

    #[test]
    fn test_filter_words_bounds() {
        let normalizer = Normalizer::default();
        let filtered = normalizer.filter_words(&[
            "abcdefghijklm",
            "abcdefghijklmn",
            "tiny word here",
            "supercalifragilistic expialidocious",
        ]);
        assert_eq!(
            filtered,
            vec!["abcdefghijklm", "tiny word here", "supercalifragilistic expialidocious"]
        );
    }

    #[test]
    fn test_filter_words_custom_config() {
        let normalizer = Normalizer::new(NormalizerConfig::new(2, 3, 3)).unwrap();
        assert_eq!(
            normalizer.filter_words(&["a", "ab", "abcd", "ab abcd x"]),
            vec!["ab", "ab"]
        );
    }

    #[test]
    fn test_remove_odd_sounding_words() {
        let normalizer = Normalizer::default();
        let kept = normalizer
            .remove_odd_sounding_words(Some(&["brand", "bkar", "zteam", "skate", "yyyes"][..]))
            .unwrap();
        assert_eq!(kept, vec!["brand", "skate"]);
        assert_eq!(normalizer.remove_odd_sounding_words::<&str>(None), None);
    }

    #[test]
    fn test_odd_sounding_rejects_every_vowel_initial_word() {
        // Leading-vowel alternation quirk: ordinary words like these are dropped.
        let normalizer = Normalizer::default();
        let kept = normalizer
            .remove_odd_sounding_words(Some(&["apple", "eagle", "ocean", "umbrella", "iris"][..]))
            .unwrap();
        assert!(kept.is_empty());
    }

    #[test]
    fn test_chop_duplicate_ends() {
        assert_eq!(chop_duplicate_ends("ssun"), "sun");
        assert_eq!(chop_duplicate_ends("sunn"), "sun");
        assert_eq!(chop_duplicate_ends("ssunn"), "sun");
        assert_eq!(chop_duplicate_ends("sssun"), "ssun");
        assert_eq!(chop_duplicate_ends("ssloganss"), "slogans");
        assert_eq!(chop_duplicate_ends("brand"), "brand");
    }

    #[test]
    fn test_chop_duplicate_ends_short_words() {
        assert_eq!(chop_duplicate_ends(""), "");
        assert_eq!(chop_duplicate_ends("a"), "a");
        assert_eq!(chop_duplicate_ends("aa"), "a");
        assert_eq!(chop_duplicate_ends_all(&["ssun", "moon"]), vec!["sun", "moon"]);
    }

    #[test]
    fn test_key_words_by_pos_tag() {
        let index = key_words_by_pos_tag(vec![("run", "V"), ("dog", "N"), ("jump", "V")]);
        assert_eq!(index.len(), 2);
        assert_eq!(index["V"], vec!["run", "jump"]);
        assert_eq!(index["N"], vec!["dog"]);
        assert!(!index.contains_key("ADJ"));

        let empty: Vec<(&str, &str)> = Vec::new();
        assert!(key_words_by_pos_tag(empty).is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(Normalizer::new(NormalizerConfig::new(9, 3, 22)).is_err());
    }
}
