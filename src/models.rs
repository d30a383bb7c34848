use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A word paired with its part-of-speech label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedWord {
    pub word: String,
    pub tag: String,
}

impl TaggedWord {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        TaggedWord {
            word: word.into(),
            tag: tag.into(),
        }
    }
}

/// Words grouped by part-of-speech label, in encounter order per label.
pub type PosIndex = BTreeMap<String, Vec<String>>;

/// One list-to-list transform the pipeline can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum NormalizationStep {
    CleanSort,
    Uniquify,
    RemoveStopWords,
    RemoveBadWords,
    StemWords,
    FilterWords,
    RemoveOddSoundingWords,
    ChopDuplicateEnds,
}

impl NormalizationStep {
    /// Order used when the caller does not choose one.
    pub fn default_order() -> Vec<NormalizationStep> {
        vec![
            NormalizationStep::CleanSort,
            NormalizationStep::Uniquify,
            NormalizationStep::RemoveStopWords,
            NormalizationStep::RemoveBadWords,
            NormalizationStep::FilterWords,
            NormalizationStep::RemoveOddSoundingWords,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            NormalizationStep::CleanSort => "clean_sort",
            NormalizationStep::Uniquify => "uniquify",
            NormalizationStep::RemoveStopWords => "remove_stop_words",
            NormalizationStep::RemoveBadWords => "remove_bad_words",
            NormalizationStep::StemWords => "stem_words",
            NormalizationStep::FilterWords => "filter_words",
            NormalizationStep::RemoveOddSoundingWords => "remove_odd_sounding_words",
            NormalizationStep::ChopDuplicateEnds => "chop_duplicate_ends",
        }
    }
}

impl fmt::Display for NormalizationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Word counts around a single step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepStats {
    pub step: NormalizationStep,
    pub words_in: usize,
    pub words_out: usize,
}

/// Result of running a word list through the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedWords {
    pub words: Vec<String>,
    pub steps: Vec<StepStats>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_names_match_serde() {
        for step in NormalizationStep::value_variants() {
            let json = serde_json::to_string(step).unwrap();
            assert_eq!(json, format!("\"{}\"", step.name()));
        }
    }

    #[test]
    fn test_default_order_starts_with_clean_sort() {
        let order = NormalizationStep::default_order();
        assert_eq!(order.first(), Some(&NormalizationStep::CleanSort));
        assert!(!order.contains(&NormalizationStep::StemWords));
    }
}
