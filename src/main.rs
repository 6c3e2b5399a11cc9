use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use jp_textnorm::scanner::scan_corpus;
use jp_textnorm::{CleanerConfig, TextCleaner, normalize_number, normalize_text_with_report};
use jp_textnorm_types::{BatchReport, FileReport, NormalizedLine};

const REPORT_FILE: &str = "report.json";

#[derive(Parser)]
#[command(
    name = "jp_textnorm",
    about = "Normalize Japanese numerals and dates to YYYY-MM-DD"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert numeral tokens to integers, e.g. "三万二千一", "二〇二三", "元"
    Number {
        #[arg(required = true)]
        tokens: Vec<String>,
    },
    /// Rewrite dates in text (arguments, or stdin line by line)
    Text {
        text: Vec<String>,
        /// Run the text cleaner before rewriting dates
        #[arg(long)]
        clean: bool,
        /// Emit one JSON object per line with the rewritten dates
        #[arg(long)]
        json: bool,
    },
    /// Clean text only (NFKC, URLs, mentions, symbols, emojis, whitespace)
    Clean {
        text: Vec<String>,
        #[arg(long)]
        keep_emojis: bool,
    },
    /// Normalize every .txt file under a directory
    Batch {
        /// Corpus root directory
        root: PathBuf,
        /// Output directory for normalized files and report.json
        #[arg(long, default_value = "output")]
        out: PathBuf,
        /// Run the text cleaner before rewriting dates
        #[arg(long)]
        clean: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Command::Number { tokens } => run_number(&tokens),
        Command::Text { text, clean, json } => run_text(&text, clean, json),
        Command::Clean { text, keep_emojis } => run_clean(&text, keep_emojis),
        Command::Batch { root, out, clean } => run_batch(&root, &out, clean),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

// ═══════════════════════════════════════════════════════════════════════
//  INPUT HELPERS
// ═══════════════════════════════════════════════════════════════════════

/// Joined arguments as a single line, or stdin lines when no arguments
/// were given.
fn input_lines(args: &[String]) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(vec![args.join(" ")]);
    }
    io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("cannot read stdin")
}

// ═══════════════════════════════════════════════════════════════════════
//  SUBCOMMANDS
// ═══════════════════════════════════════════════════════════════════════

fn run_number(tokens: &[String]) -> Result<()> {
    let mut stdout = io::stdout().lock();
    for token in tokens {
        writeln!(stdout, "{token}\t{}", normalize_number(token))?;
    }
    Ok(())
}

fn run_text(args: &[String], clean: bool, json: bool) -> Result<()> {
    let cleaner = clean.then(TextCleaner::default);
    let mut stdout = io::stdout().lock();

    for line in input_lines(args)? {
        let prepared = match &cleaner {
            Some(c) => c.clean(&line),
            None => line.clone(),
        };
        let (output, dates) = normalize_text_with_report(&prepared);
        log::info!("{} date(s) rewritten", dates.len());

        if json {
            let record = NormalizedLine {
                input: line,
                output,
                dates,
            };
            let encoded = serde_json::to_string(&record).context("JSON serialization failed")?;
            writeln!(stdout, "{encoded}")?;
        } else {
            writeln!(stdout, "{output}")?;
        }
    }
    Ok(())
}

fn run_clean(args: &[String], keep_emojis: bool) -> Result<()> {
    let cleaner = TextCleaner::new(CleanerConfig { keep_emojis });
    let mut stdout = io::stdout().lock();
    for line in input_lines(args)? {
        writeln!(stdout, "{}", cleaner.clean(&line))?;
    }
    Ok(())
}

fn run_batch(root: &Path, out: &Path, clean: bool) -> Result<()> {
    let files = scan_corpus(root);
    if files.is_empty() {
        log::warn!("no .txt files under {}", root.display());
    }
    log::info!("normalizing {} file(s) from {}", files.len(), root.display());

    let cleaner = clean.then(TextCleaner::default);
    let mut reports = Vec::with_capacity(files.len());

    for file in &files {
        let content = fs::read_to_string(&file.path)
            .with_context(|| format!("cannot read {}", file.path.display()))?;
        let prepared = match &cleaner {
            Some(c) => c.clean(&content),
            None => content.clone(),
        };
        let (output, dates) = normalize_text_with_report(&prepared);

        let target = out.join(&file.relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("cannot create {}", parent.display()))?;
        }
        fs::write(&target, &output)
            .with_context(|| format!("cannot write {}", target.display()))?;
        log::debug!(
            "{} → {} ({} date(s))",
            file.path.display(),
            target.display(),
            dates.len()
        );

        reports.push(FileReport {
            file: file.relative.display().to_string(),
            output_file: target.display().to_string(),
            chars_in: content.chars().count(),
            chars_out: output.chars().count(),
            dates,
        });
    }

    let report = BatchReport::new(root.display().to_string(), reports);
    write_json(&out.join(REPORT_FILE), &report)?;
    eprintln!(
        "{} file(s), {} date(s) rewritten → {}",
        report.files.len(),
        report.total_dates,
        out.display()
    );
    Ok(())
}

fn write_json<T: serde::Serialize>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("cannot create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(data).context("JSON serialization failed")?;
    fs::write(path, &json).with_context(|| format!("cannot write {}", path.display()))?;
    log::info!("{} ({} bytes)", path.display(), json.len());
    Ok(())
}
