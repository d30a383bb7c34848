mod cli;

use crate::cli::Cli;
use anyhow::{Context, Result};
use namebot::input;
use namebot::lexicon::StopWordCorpus;
use namebot::logger::ProcessingStats;
use namebot::models::{NormalizationStep, PosIndex};
use namebot::pipeline::NormalizationPipeline;
use namebot::settings::{NormalizerConfig, Settings};
use namebot::Normalizer;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let base_config = match &cli.config {
        Some(path) => NormalizerConfig::from_file(path).context("Failed to load config")?,
        None => NormalizerConfig::default(),
    };
    let config =
        base_config.with_overrides(cli.min_length, cli.max_length, cli.spaced_max_length);
    config.validate().context("Invalid length settings")?;

    if cli.dump_settings {
        let settings = Settings::new(config);
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    let mut normalizer = Normalizer::new(config).context("Failed to create normalizer")?;
    if let Some(path) = &cli.stop_words {
        let corpus = StopWordCorpus::from_file(path).context("Failed to load stop words")?;
        normalizer = normalizer.with_stop_words(corpus);
    }

    let log_dir = cli.log_dir.as_deref().unwrap_or_else(|| Path::new("logs"));
    let pipeline = NormalizationPipeline::new(normalizer, log_dir)
        .context("Failed to create normalization pipeline")?;

    if let Some(path) = &cli.tagged {
        let tagged = input::read_tagged_words(path)?;
        let index = pipeline.index_tagged(&tagged);
        print_index(&index, cli.json)?;
    }

    let mut words = cli.words.clone();
    if let Some(path) = &cli.input {
        words.extend(input::read_word_list(path)?);
    }

    if words.is_empty() {
        if cli.tagged.is_some() {
            return finish(&pipeline, ProcessingStats::default(), cli.max_logs);
        }
        return Err(anyhow::anyhow!(
            "No seed words provided. Use --words or --input to specify them."
        ));
    }

    let steps = if cli.steps.is_empty() {
        NormalizationStep::default_order()
    } else {
        cli.steps.clone()
    };

    eprintln!("Normalizing {} word(s)...", words.len());
    let result = pipeline.process(&words, &steps);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for word in &result.words {
            println!("{}", word);
        }
    }

    let stats = ProcessingStats {
        words_in: words.len(),
        words_out: result.words.len(),
        steps: result.steps.len(),
    };
    finish(&pipeline, stats, cli.max_logs)
}

fn print_index(index: &PosIndex, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(index)?);
    } else {
        for (tag, words) in index {
            println!("{}: {}", tag, words.join(", "));
        }
    }
    Ok(())
}

fn finish(pipeline: &NormalizationPipeline, stats: ProcessingStats, max_logs: usize) -> Result<()> {
    let report = pipeline.finalize(stats)?;
    pipeline
        .rotate_logs(max_logs)
        .context("Failed to rotate run logs")?;

    eprintln!(
        "Done: {} -> {} word(s). Errors: {}, Warnings: {}",
        report.summary.processed.words_in,
        report.summary.processed.words_out,
        report.summary.errors,
        report.summary.warnings
    );
    Ok(())
}
