use crate::input::TaggedInput;
use crate::logger::*;
use crate::models::*;
use crate::normalization::{self, Normalizer};
use anyhow::{Context, Result};
use std::path::Path;

/// Runs word lists through a caller-chosen sequence of normalization steps
/// and records what each step did.
pub struct NormalizationPipeline {
    pub normalizer: Normalizer,
    pub logger: DiagnosticLogger,
}

impl NormalizationPipeline {
    pub fn new(normalizer: Normalizer, log_dir: &Path) -> Result<Self> {
        Ok(NormalizationPipeline {
            normalizer,
            logger: DiagnosticLogger::new(log_dir)
                .context("Failed to create DiagnosticLogger")?,
        })
    }

    pub fn with_logger(normalizer: Normalizer, logger: DiagnosticLogger) -> Self {
        NormalizationPipeline { normalizer, logger }
    }

    pub fn apply_step(&self, step: NormalizationStep, words: &[String]) -> Vec<String> {
        let n = &self.normalizer;
        match step {
            NormalizationStep::CleanSort => n.clean_sort(Some(words)).unwrap_or_default(),
            NormalizationStep::Uniquify => normalization::uniquify(Some(words)).unwrap_or_default(),
            NormalizationStep::RemoveStopWords => n.remove_stop_words(words),
            NormalizationStep::RemoveBadWords => n.remove_bad_words(words),
            NormalizationStep::StemWords => n.stem_words(words),
            NormalizationStep::FilterWords => n.filter_words(words),
            NormalizationStep::RemoveOddSoundingWords => {
                n.remove_odd_sounding_words(Some(words)).unwrap_or_default()
            }
            NormalizationStep::ChopDuplicateEnds => normalization::chop_duplicate_ends_all(words),
        }
    }

    pub fn process(&self, words: &[String], steps: &[NormalizationStep]) -> NormalizedWords {
        self.logger.info(format!(
            "Normalizing {} word(s) through {} step(s)",
            words.len(),
            steps.len()
        ));

        let mut current = words.to_vec();
        let mut stats = Vec::with_capacity(steps.len());

        for &step in steps {
            let words_in = current.len();
            current = self.apply_step(step, &current);

            self.logger.info_with(
                format!("{}: {} -> {}", step, words_in, current.len()),
                serde_json::json!({
                    "step": step.name(),
                    "words_in": words_in,
                    "words_out": current.len(),
                }),
            );

            if words_in > 0 && current.is_empty() {
                self.logger.warning(
                    format!("{} removed every remaining word", step),
                    Some(serde_json::json!({ "step": step.name() })),
                );
            }

            stats.push(StepStats {
                step,
                words_in,
                words_out: current.len(),
            });
        }

        let blank = current.iter().filter(|w| w.is_empty()).count();
        if blank > 0 {
            self.logger.warning(
                format!("{} phrase(s) lost every chunk to the length filter", blank),
                None,
            );
        }

        NormalizedWords {
            words: current,
            steps: stats,
        }
    }

    pub fn index_tagged(&self, input: &TaggedInput) -> PosIndex {
        for (line, text) in &input.malformed {
            self.logger.warning(
                format!("Skipping malformed tagged line {}", line),
                Some(serde_json::json!({ "line": line, "text": text })),
            );
        }

        let index = normalization::key_words_by_pos_tag(
            input.words.iter().map(|t| (t.word.as_str(), t.tag.as_str())),
        );

        self.logger.info(format!(
            "Indexed {} tagged word(s) under {} tag(s)",
            input.words.len(),
            index.len()
        ));

        index
    }

    pub fn finalize(&self, stats: ProcessingStats) -> Result<RunReport> {
        self.logger
            .generate_report(stats)
            .context("Failed to generate run report")
    }

    pub fn rotate_logs(&self, max_runs: usize) -> Result<()> {
        self.logger.rotate_logs(max_runs)
    }
}
