//! Luhn CLI - Extractive Text Summarization
//!
//! Command-line interface for summarizing text files.

use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use luhn::storage::{read_document, summary_path, write_atomic};
use luhn::summary::clamp_count;
use luhn::{
    Config, FrequencyBound, Language, LuhnError, Result, SentenceBudget, Summarizer, Summary,
    WordFrequencyTable,
};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "luhn")]
#[command(author = "Luhn Contributors")]
#[command(version)]
#[command(about = "Extractive summarization with Luhn's method", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a .txt file
    Summarize(SummarizeArgs),
}

/// Options of the `summarize` subcommand.
#[derive(Args, Debug)]
struct SummarizeArgs {
    /// Input text file
    #[arg(short, long)]
    path: PathBuf,

    /// Document language (en, ru, or auto to detect from the first line)
    #[arg(short, long, default_value = "auto")]
    language: String,

    /// Sentences per summary; negative values select nothing (overrides --ratio)
    #[arg(short = 'n', long, allow_hyphen_values = true)]
    sentences: Option<i64>,

    /// Share of input lines turned into summary sentences, in (0, 1] (default: 0.3)
    #[arg(short, long)]
    ratio: Option<f64>,

    /// Minimum word frequency for significance: a count, fraction or percent (default: 2)
    #[arg(long)]
    lower_bound: Option<FrequencyBound>,

    /// Maximum word frequency for significance (default: unbounded)
    #[arg(long)]
    upper_bound: Option<FrequencyBound>,

    /// Maximum non-significant words between clustered significant words (default: 4)
    #[arg(short = 'd', long)]
    max_distance: Option<usize>,

    /// Lines per independently summarized chunk (default: 1000)
    #[arg(long)]
    buffer_lines: Option<usize>,

    /// Reduce words to their stems before counting
    #[arg(long)]
    stem: bool,

    /// Extra stop-word file, one word per line
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// JSON configuration file; command-line options take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file (default: <input>_abstract.txt next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the summary instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Treat an empty summary as an error
    #[arg(long)]
    strict: bool,

    /// Show significant words and sentence scores
    #[arg(long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let result = match cli.command {
        Commands::Summarize(args) => summarize_file(args),
    };

    if let Err(e) = result {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Builds the configuration from the optional file and command-line overrides.
fn build_config(args: &SummarizeArgs) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if !args.language.eq_ignore_ascii_case("auto") {
        config.text.language = Some(args.language.parse::<Language>()?);
    }

    if let Some(ratio) = args.ratio {
        config.summary.budget = SentenceBudget::LineRatio(ratio);
    }
    if let Some(sentences) = args.sentences {
        config.summary.budget = SentenceBudget::Count(clamp_count(sentences, usize::MAX));
    }
    if let Some(bound) = args.lower_bound {
        config.significance.lower_bound = bound;
    }
    if args.upper_bound.is_some() {
        config.significance.upper_bound = args.upper_bound;
    }
    if let Some(distance) = args.max_distance {
        config.scoring.max_word_distance = distance;
    }
    if let Some(lines) = args.buffer_lines {
        config.summary.buffer_lines = lines;
    }
    if args.stem {
        config.text.stem = true;
    }

    config.validate()?;
    Ok(config)
}

fn summarize_file(args: SummarizeArgs) -> Result<()> {
    let start_time = Instant::now();

    // Language and option errors surface before the input is touched.
    let config = build_config(&args)?;

    let text = read_document(&args.path)?;
    info!("Read {} bytes from {}", text.len(), args.path.display());

    let mut summarizer = Summarizer::for_text(config, &text)?;
    if let Some(path) = &args.stopwords {
        let added = summarizer.stopwords_mut().extend_from_file(path)?;
        info!("Added {} stop words from {}", added, path.display());
    }

    if args.debug {
        print_analysis(&summarizer, &text)?;
    }

    let line_count = text.lines().count();
    let progress = if line_count > summarizer.config().summary.buffer_lines {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} chunks",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░  "),
        );
        Some(pb)
    } else {
        None
    };

    let summaries = summarizer.summarize_chunks(&text, progress.as_ref())?;
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    let selected = check_selection(&summaries, args.strict, &args.path)?;

    let rendered = summarizer.render_chunks(&summaries);

    if args.stdout {
        print!("{}", rendered);
        return Ok(());
    }

    let output = args.output.clone().unwrap_or_else(|| summary_path(&args.path));
    write_atomic(&output, &rendered)?;

    let total: usize = summaries.iter().map(|s| s.total_sentences).sum();
    println!(
        "✓ Summarized {} ({}, {} of {} sentences) in {:.2?}",
        args.path.display(),
        summarizer.language(),
        selected,
        total,
        start_time.elapsed()
    );
    println!("   Output: {}", output.display());

    Ok(())
}

/// Counts the selected sentences; an empty summary is an error under `strict`.
fn check_selection(summaries: &[Summary], strict: bool, path: &Path) -> Result<usize> {
    let selected: usize = summaries.iter().map(Summary::len).sum();
    if selected == 0 {
        if strict {
            return Err(LuhnError::EmptyDocument(format!(
                "no sentences selected from {}",
                path.display()
            )));
        }
        warn!("Summary of {} is empty", path.display());
    }
    Ok(selected)
}

/// Prints significant words and per-sentence scores for each chunk.
fn print_analysis(summarizer: &Summarizer, text: &str) -> Result<()> {
    let chunks = luhn::pipeline::split_into_chunks(text, summarizer.config().summary.buffer_lines);

    println!("=== Luhn Analysis ===");
    println!("Language: {}", summarizer.language());
    println!("Stop words: {}", summarizer.stopwords().len());

    for (i, chunk) in chunks.iter().enumerate() {
        let analysis = summarizer.analyze(chunk)?;

        println!(
            "\n--- Chunk {} ({} sentences, {} words) ---",
            i,
            analysis.document.len(),
            analysis.document.word_count()
        );
        println!(
            "Significant words ({}): {}",
            analysis.significant.len(),
            analysis.significant.sorted().join(", ")
        );

        let table = WordFrequencyTable::from_document(&analysis.document);
        let frequent: Vec<String> = table
            .most_common(10)
            .into_iter()
            .map(|(word, count)| format!("{} ({})", word, count))
            .collect();
        println!("Most frequent: {}", frequent.join(", "));

        for sentence in analysis.document.sentences() {
            println!("  [{:>4}] {:>7.4}  {}", sentence.index, sentence.score, sentence.text);
        }
    }

    println!("\n=== Summary ===\n");
    Ok(())
}
