//! Command-line interface definition for vocab-generator
//!
//! Provides argument parsing and the interactive fallback used when the
//! input file or minimum length is not given on the command line.

use crate::filter::WordPolicy;
use clap::{Parser, ValueEnum};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Vocabulary list generator
///
/// Extract sorted, deduplicated vocabulary lists from a plain text file,
/// package them with the input into a zip archive and write its SHA-512.
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "vocab-generator",
    author = "m0h1nd4",
    version,
    about = "Generate sorted vocabulary lists from plain text",
    long_about = r#"
Create a vocabulary list for any plain text input file. Words made only of
lowercase letters are always collected; words in capitals can be collected
into a second list. The lists are stored, together with the input, in a zip
archive named after the input file with a .zip extension, and a SHA-512
checksum of that archive is written next to it.

OUTPUT FILES:
    <input>.zip          Archive with the input and the generated lists
    <input>.zip.sha512   Lowercase hex SHA-512 of the archive

    Inside the archive:
    <input>.words.output     Lowercase words, one per line
    <input>.allCaps.output   Capital words, one per line (with --caps)

EXAMPLES:
    # Lowercase words of at least 5 letters
    vocab-generator -i moby-dick.txt -l 5

    # Also collect acronyms and shouted words
    vocab-generator -i moby-dick.txt -l 3 --caps

    # Collect capitalized words (names, sentence starts) instead
    vocab-generator -i moby-dick.txt -l 3 --caps --caps-policy capitalized

    # Ask for everything interactively
    vocab-generator
"#
)]
pub struct Args {
    /// Input text file (prompted for when omitted)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Minimum word length (prompted for when omitted)
    #[arg(short = 'l', long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub min_length: Option<u64>,

    /// Include the uppercase word list
    #[arg(short, long, default_value_t = false)]
    pub caps: bool,

    /// Which words the uppercase list collects
    #[arg(long, value_enum, default_value_t = CapsPolicy::AllCaps)]
    pub caps_policy: CapsPolicy,

    /// Keep the word list files next to the input after archiving
    #[arg(long, default_value_t = false)]
    pub keep_intermediate: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging and full error chains
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Character-class policy of the uppercase list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CapsPolicy {
    /// Whole-token uppercase words (NASA, BANANA)
    #[default]
    AllCaps,
    /// Capital letter followed by letters of any case (Apple, McDonald)
    Capitalized,
}

impl From<CapsPolicy> for WordPolicy {
    fn from(policy: CapsPolicy) -> Self {
        match policy {
            CapsPolicy::AllCaps => WordPolicy::AllCaps,
            CapsPolicy::Capitalized => WordPolicy::Capitalized,
        }
    }
}

/// Inputs of a run after command line and prompts are combined
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub input: PathBuf,
    pub min_length: usize,
    pub include_caps: bool,
}

impl Args {
    /// Whether any required value has to be asked for
    pub fn needs_prompt(&self) -> bool {
        self.input.is_none() || self.min_length.is_none()
    }

    /// Fill in missing values by prompting on `reader`/`writer`
    ///
    /// The caps question is only asked when prompting happens at all and
    /// `--caps` was not passed.
    pub fn resolve<R: BufRead, W: Write>(&self, mut reader: R, mut writer: W) -> anyhow::Result<RunOptions> {
        let prompting = self.needs_prompt();

        let input = match self.input {
            Some(ref path) => path.clone(),
            None => {
                let answer = prompt(
                    &mut reader,
                    &mut writer,
                    "Please enter the location of the file you wish to generate vocabulary lists for: ",
                )?;
                if answer.is_empty() {
                    anyhow::bail!("No input file given");
                }
                PathBuf::from(answer)
            }
        };

        let include_caps = if self.caps || !prompting {
            self.caps
        } else {
            let answer = prompt(
                &mut reader,
                &mut writer,
                "Do you want fully uppercase words in the output? (yes or no) ",
            )?;
            answer.eq_ignore_ascii_case("yes")
        };

        let min_length = match self.min_length {
            Some(n) => usize::try_from(n)?,
            None => {
                let answer = prompt(
                    &mut reader,
                    &mut writer,
                    "Please enter the minimum word length you want (1, 2... 10... 12...): ",
                )?;
                parse_min_length(&answer)?
            }
        };

        Ok(RunOptions { input, min_length, include_caps })
    }
}

fn prompt<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, question: &str) -> anyhow::Result<String> {
    write!(writer, "{}", question)?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        anyhow::bail!("Unexpected end of input while waiting for an answer");
    }
    Ok(line.trim().to_string())
}

/// Parse a minimum word length answer
pub fn parse_min_length(value: &str) -> anyhow::Result<usize> {
    let length: usize = value.trim().parse()
        .map_err(|_| anyhow::anyhow!("Invalid minimum word length: '{}'", value.trim()))?;

    if length == 0 {
        anyhow::bail!("Minimum word length must be at least 1");
    }

    Ok(length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn resolve(args: &Args, answers: &str) -> anyhow::Result<(RunOptions, String)> {
        let mut out = Vec::new();
        let options = args.resolve(Cursor::new(answers.as_bytes().to_vec()), &mut out)?;
        Ok((options, String::from_utf8(out).unwrap()))
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "vocab-generator", "-i", "book.txt", "-l", "4", "--caps", "--caps-policy", "capitalized",
        ]).unwrap();

        assert_eq!(args.input, Some(PathBuf::from("book.txt")));
        assert_eq!(args.min_length, Some(4));
        assert!(args.caps);
        assert_eq!(WordPolicy::from(args.caps_policy), WordPolicy::Capitalized);
        assert!(!args.needs_prompt());
    }

    #[test]
    fn test_zero_length_flag_rejected() {
        assert!(Args::try_parse_from(["vocab-generator", "-i", "book.txt", "-l", "0"]).is_err());
    }

    #[test]
    fn test_default_caps_policy() {
        let args = Args::try_parse_from(["vocab-generator"]).unwrap();

        assert_eq!(args.caps_policy, CapsPolicy::AllCaps);
        assert!(args.needs_prompt());
    }

    #[test]
    fn test_resolve_without_prompt() {
        let args = Args {
            input: Some(PathBuf::from("book.txt")),
            min_length: Some(3),
            ..Args::default()
        };

        let (options, printed) = resolve(&args, "").unwrap();
        assert_eq!(options, RunOptions { input: PathBuf::from("book.txt"), min_length: 3, include_caps: false });
        assert!(printed.is_empty());
    }

    #[test]
    fn test_resolve_all_prompts() {
        let (options, printed) = resolve(&Args::default(), "notes.txt\nYES\n6\n").unwrap();

        assert_eq!(options, RunOptions { input: PathBuf::from("notes.txt"), min_length: 6, include_caps: true });
        assert!(printed.contains("minimum word length"));
    }

    #[test]
    fn test_resolve_caps_flag_skips_question() {
        let args = Args {
            input: Some(PathBuf::from("book.txt")),
            caps: true,
            ..Args::default()
        };

        let (options, printed) = resolve(&args, "2\n").unwrap();
        assert_eq!(options.min_length, 2);
        assert!(options.include_caps);
        assert!(!printed.contains("uppercase"));
    }

    #[test]
    fn test_resolve_rejects_bad_length() {
        assert!(resolve(&Args::default(), "notes.txt\nno\nten\n").is_err());
        assert!(resolve(&Args::default(), "notes.txt\nno\n0\n").is_err());
    }

    #[test]
    fn test_resolve_eof() {
        assert!(resolve(&Args::default(), "notes.txt\n").is_err());
    }

    #[test]
    fn test_parse_min_length() {
        assert_eq!(parse_min_length(" 12 ").unwrap(), 12);
        assert!(parse_min_length("-1").is_err());
    }
}
