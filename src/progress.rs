//! Progress display module
//!
//! Styled console output, a stage spinner and the end-of-run summary.

use crate::error::VocabError;
use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════════════════════════════════════╗
║                          VOCABULARY GENERATOR                                ║
║          Sorted word lists from plain text, zipped and checksummed           ║
║                                                              v1.0.0          ║
╚══════════════════════════════════════════════════════════════════════════════╝
"#;

    println!("{}", banner.green());
}

/// Print a section header
pub fn print_header(text: &str) {
    println!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    println!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    println!("  {} {}", "✔".green(), text.green());
}

/// Print a warning message
pub fn print_warning(text: &str) {
    println!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Error line prefixed with the failure kind
///
/// With `with_causes` the source chain is appended on the same line.
pub fn error_headline(err: &anyhow::Error, with_causes: bool) -> String {
    let kind = err.downcast_ref::<VocabError>().map_or("Error", VocabError::kind);

    if with_causes {
        format!("{}: {:#}", kind, err)
    } else {
        format!("{}: {}", kind, err)
    }
}

/// Print a bullet point
pub fn print_bullet(text: &str) {
    println!("  {} {}", "•".green(), text);
}

/// Create a styled spinner for a pipeline stage
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();

    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
        pb.set_style(style.tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "));
    }

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Counters for a whole pipeline run
#[derive(Debug, Clone)]
pub struct RunStats {
    pub input_bytes: u64,
    pub total_lines: u64,
    pub total_tokens: u64,
    pub matched_words: u64,
    pub duplicate_words: u64,
    pub unique_words: u64,
    pub archive_bytes: u64,
    pub start_time: Instant,
    pub finished: Option<Duration>,
}

impl RunStats {
    pub fn new() -> Self {
        Self {
            input_bytes: 0,
            total_lines: 0,
            total_tokens: 0,
            matched_words: 0,
            duplicate_words: 0,
            unique_words: 0,
            archive_bytes: 0,
            start_time: Instant::now(),
            finished: None,
        }
    }

    /// Fold one pass into the run totals
    pub fn add_pass(&mut self, lines: u64, tokens: u64, matched: u64, duplicates: u64, unique: u64) {
        self.total_lines += lines;
        self.total_tokens += tokens;
        self.matched_words += matched;
        self.duplicate_words += duplicates;
        self.unique_words += unique;
    }

    pub fn finish(&mut self) {
        self.finished = Some(self.start_time.elapsed());
    }

    pub fn elapsed(&self) -> Duration {
        self.finished.unwrap_or_else(|| self.start_time.elapsed())
    }

    pub fn tokens_per_second(&self) -> f64 {
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.total_tokens as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Print final statistics
    pub fn print_summary(&self) {
        println!();
        println!("{}", "═".repeat(60).green());
        println!("{}", "                    GENERATION COMPLETE".green().bold());
        println!("{}", "═".repeat(60).green());
        println!();

        println!("  {} {}", "Input size:     ".green(), ByteSize(self.input_bytes));
        println!("  {} {}", "Lines read:     ".green(), format_number(self.total_lines));
        println!("  {} {}", "Tokens scanned: ".green(), format_number(self.total_tokens));
        println!("  {} {}", "Matched words:  ".green(), format_number(self.matched_words));
        println!("  {} {}", "Duplicates:     ".yellow(), format_number(self.duplicate_words));
        println!("  {} {}", "Unique words:   ".green().bold(),
            format_number(self.unique_words).green().bold());
        println!("  {} {}", "Archive size:   ".green(), ByteSize(self.archive_bytes));

        println!();
        println!("  {} {}", "Duration:       ".green(), format_duration(self.elapsed()));
        println!("  {} {:.2} tokens/sec", "Throughput:     ".green(), self.tokens_per_second());
        println!();
        println!("{}", "═".repeat(60).green());
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousand separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else if secs < 3600 {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    } else {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        format!("{}h {}m", hours, mins)
    }
}
