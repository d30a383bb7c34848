use clap::Parser;
use namebot::models::NormalizationStep;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "namebot")]
#[command(about = "Clean and filter seed words into a candidate pool for name generation", long_about = None)]
pub struct Cli {
    #[arg(long, num_args = 1.., help = "Seed words (can be specified multiple times)")]
    pub words: Vec<String>,

    #[arg(long, help = "File with one seed word or phrase per line")]
    pub input: Option<PathBuf>,

    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        help = "Normalization steps to apply, in order (defaults to the standard pipeline)"
    )]
    pub steps: Vec<NormalizationStep>,

    #[arg(long, help = "JSON config file with min_length, max_length, spaced_max_length")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Minimum word length")]
    pub min_length: Option<usize>,

    #[arg(long, help = "Maximum length of a single word")]
    pub max_length: Option<usize>,

    #[arg(long, help = "Maximum length of each chunk of a multi-word phrase")]
    pub spaced_max_length: Option<usize>,

    #[arg(long, help = "Stop word file (one word per line) replacing the built-in English list")]
    pub stop_words: Option<PathBuf>,

    #[arg(long, help = "File of word<TAB>tag lines to group by part-of-speech tag")]
    pub tagged: Option<PathBuf>,

    #[arg(long, help = "Print results as JSON")]
    pub json: bool,

    #[arg(long, help = "Print the effective settings and exit")]
    pub dump_settings: bool,

    #[arg(long, help = "Log directory")]
    pub log_dir: Option<PathBuf>,

    #[arg(long, default_value_t = 10, help = "Number of run logs to keep")]
    pub max_logs: usize,
}

impl Cli {
    pub fn parse() -> Self {
        Parser::parse()
    }
}
