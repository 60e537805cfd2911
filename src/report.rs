//! Output formatting for review and sentiment results.
//!
//! Two formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption; the review
//!   payload is `{"analysis": {...}}` with exactly function_count,
//!   class_count, imports, complexity_warning, suggestions.

use colored::*;
use serde::Serialize;

use crate::review::Report;
use crate::sentiment::SentimentReport;

/// JSON envelope for a review report.
#[derive(Serialize)]
struct ReviewEnvelope<'a> {
    analysis: &'a Report,
}

/// JSON envelope for a sentiment report.
#[derive(Serialize)]
struct SentimentEnvelope<'a> {
    analysis: SentimentAnalysis<'a>,
    original_text: &'a str,
}

#[derive(Serialize)]
struct SentimentAnalysis<'a> {
    sentiment: String,
    confidence: f64,
    word_count: usize,
    summary: &'a str,
    keywords: &'a [String],
}

/// Render a review report as JSON.
pub fn review_json(report: &Report) -> anyhow::Result<String> {
    let envelope = ReviewEnvelope { analysis: report };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Render a review report for the terminal.
pub fn review_pretty(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Snippet review".bold()));
    out.push_str(&format!("  functions: {}\n", report.function_count));
    out.push_str(&format!("  classes:   {}\n", report.class_count));
    let imports = if report.imports.is_empty() {
        "(none)".to_string()
    } else {
        report.imports.join(", ")
    };
    out.push_str(&format!("  imports:   {}\n", imports));
    let complexity = if report.complexity_warning {
        "warning".yellow().to_string()
    } else {
        "ok".green().to_string()
    };
    out.push_str(&format!("  complexity: {}\n", complexity));

    if report.suggestions.is_empty() {
        out.push_str(&format!("\n{}\n", "No suggestions.".green()));
    } else {
        out.push_str(&format!("\n{}\n", "Suggestions:".bold()));
        for suggestion in &report.suggestions {
            out.push_str(&format!("  - {}\n", suggestion));
        }
    }
    out
}

/// Render a sentiment report as JSON, matching the service response shape.
pub fn sentiment_json(report: &SentimentReport) -> anyhow::Result<String> {
    let envelope = SentimentEnvelope {
        analysis: SentimentAnalysis {
            sentiment: report.sentiment.to_string(),
            confidence: report.confidence,
            word_count: report.word_count,
            summary: &report.summary,
            keywords: &report.keywords,
        },
        original_text: &report.original_text,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Render a sentiment report for the terminal.
pub fn sentiment_pretty(report: &SentimentReport) -> String {
    let name = report.sentiment.to_string();
    let label = match report.sentiment {
        crate::sentiment::Sentiment::Positive => name.as_str().green().to_string(),
        crate::sentiment::Sentiment::Negative => name.as_str().red().to_string(),
        crate::sentiment::Sentiment::Neutral => name.clone(),
    };
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Text analysis".bold()));
    out.push_str(&format!(
        "  sentiment:  {} (confidence {:.2})\n",
        label, report.confidence
    ));
    out.push_str(&format!("  words:      {}\n", report.word_count));
    out.push_str(&format!("  summary:    {}\n", report.summary));
    if !report.keywords.is_empty() {
        out.push_str(&format!("  keywords:   {}\n", report.keywords.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review;
    use crate::sentiment;

    #[test]
    fn test_review_json_shape() {
        let report = review::review("import os\n\ndef f():\n    pass\n").expect("valid");
        let json = review_json(&report).expect("serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        let analysis = value.get("analysis").expect("analysis object");
        for field in [
            "function_count",
            "class_count",
            "imports",
            "complexity_warning",
            "suggestions",
        ] {
            assert!(analysis.get(field).is_some(), "missing field {}", field);
        }
        assert_eq!(analysis["function_count"], serde_json::json!(1));
        assert_eq!(analysis["imports"], serde_json::json!(["os"]));
        assert_eq!(analysis["complexity_warning"], serde_json::json!(false));
    }

    #[test]
    fn test_sentiment_json_shape() {
        let report = sentiment::analyze("what a great day for everyone involved");
        let json = sentiment_json(&report).expect("serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["analysis"]["sentiment"], "Positive");
        assert!(value["original_text"].is_string());
    }

    #[test]
    fn test_pretty_lists_suggestions() {
        let report = review::review("def f():\n    return f()\n").expect("valid");
        let text = review_pretty(&report);
        assert!(text.contains("Recursion detected. Validate termination conditions."));
    }
}
