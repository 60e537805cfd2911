//! Command-line interface for snipcheck.

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

use crate::report;
use crate::review::{self, ReviewError};
use crate::sentiment;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Default cap on input size; bounds worst-case latency on hostile input.
pub const DEFAULT_MAX_BYTES: usize = 1_048_576;

/// Heuristic static review for Python snippets.
///
/// Snipcheck parses a snippet into a syntax tree, derives structural
/// metrics (functions, classes, imports, loops, recursion) and emits
/// rule-based improvement suggestions. It never executes the analyzed
/// code.
#[derive(Parser)]
#[command(name = "snipcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Review a Python snippet for structural issues
    Review(ReviewArgs),
    /// Shallow sentiment analysis of plain text
    Sentiment(SentimentArgs),
}

/// Arguments for the review command.
#[derive(Parser)]
pub struct ReviewArgs {
    /// Input file ("-" or absent reads stdin)
    pub path: Option<PathBuf>,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Maximum accepted input size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_BYTES)]
    pub max_bytes: usize,
}

/// Arguments for the sentiment command.
#[derive(Parser)]
pub struct SentimentArgs {
    /// Input file ("-" or absent reads stdin)
    pub path: Option<PathBuf>,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Maximum accepted input size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_BYTES)]
    pub max_bytes: usize,
}

/// Read the input text from a file or stdin, enforcing the size cap.
fn read_input(path: &Option<PathBuf>, max_bytes: usize) -> anyhow::Result<String> {
    let text = match path {
        Some(p) if p.as_os_str() != "-" => std::fs::read_to_string(p)
            .map_err(|e| anyhow::anyhow!("cannot read {}: {}", p.display(), e))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    if text.len() > max_bytes {
        anyhow::bail!("input exceeds {} bytes", max_bytes);
    }
    Ok(text)
}

fn validate_format(format: &str) -> bool {
    format == "pretty" || format == "json"
}

/// Run the review command.
pub fn run_review(args: &ReviewArgs) -> anyhow::Result<i32> {
    if !validate_format(&args.format) {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let code = match read_input(&args.path, args.max_bytes) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_FAILED);
        }
    };

    match review::review(&code) {
        Ok(report) => {
            if args.format == "json" {
                println!("{}", report::review_json(&report)?);
            } else {
                print!("{}", report::review_pretty(&report));
            }
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.is_client_error() {
                Ok(EXIT_FAILED)
            } else {
                Ok(EXIT_ERROR)
            }
        }
    }
}

/// Run the sentiment command.
pub fn run_sentiment(args: &SentimentArgs) -> anyhow::Result<i32> {
    if !validate_format(&args.format) {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let text = match read_input(&args.path, args.max_bytes) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_FAILED);
        }
    };

    // Same boundary contract as review: empty input never reaches the
    // analyzer.
    if text.is_empty() {
        eprintln!("Error: {}", ReviewError::MissingInput);
        return Ok(EXIT_FAILED);
    }

    let report = sentiment::analyze(&text);
    if args.format == "json" {
        println!("{}", report::sentiment_json(&report)?);
    } else {
        print!("{}", report::sentiment_pretty(&report));
    }
    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validate_format() {
        assert!(validate_format("pretty"));
        assert!(validate_format("json"));
        assert!(!validate_format("sarif"));
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "def f():\n    pass\n").expect("write");
        let path = Some(file.path().to_path_buf());
        let text = read_input(&path, DEFAULT_MAX_BYTES).expect("readable");
        assert!(text.starts_with("def f()"));
    }

    #[test]
    fn test_read_input_enforces_cap() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{}", "x = 1\n".repeat(100)).expect("write");
        let path = Some(file.path().to_path_buf());
        let err = read_input(&path, 16).expect_err("over the cap");
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn test_read_input_missing_file() {
        let path = Some(PathBuf::from("/no/such/snippet.py"));
        let err = read_input(&path, DEFAULT_MAX_BYTES).expect_err("missing");
        assert!(err.to_string().contains("cannot read"));
    }
}
