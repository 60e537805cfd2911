//! Keyword-lexicon sentiment analysis over plain text.
//!
//! A deliberately shallow heuristic: fixed positive/negative lexicons are
//! matched by substring containment against the lowercased text, and the
//! score gap picks the label. No tree structure is involved. Empty input is
//! rejected at the boundary (CLI), not here; analyzing an empty string is
//! well-defined and yields a neutral report.

use serde::Serialize;

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "happy", "love", "amazing", "best",
];
const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "sad", "hate", "worst", "awful", "poor",
];

/// Words shorter than this never become keywords.
const KEYWORD_MIN_LEN: usize = 6;
/// At most this many keywords are reported.
const KEYWORD_MAX: usize = 3;
/// Echoed original text is truncated beyond this many characters.
const ECHO_MAX_CHARS: usize = 100;

/// Sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Negative => write!(f, "Negative"),
            Sentiment::Neutral => write!(f, "Neutral"),
        }
    }
}

/// The immutable outcome of one text analysis.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SentimentReport {
    pub sentiment: Sentiment,
    /// Confidence in [0.70, 1.0], rounded to two decimals.
    pub confidence: f64,
    pub word_count: usize,
    pub summary: String,
    /// First few words longer than five characters.
    pub keywords: Vec<String>,
    /// The input echoed back, truncated with an ellipsis past 100 chars.
    pub original_text: String,
}

/// Analyze a piece of plain text.
pub fn analyze(text: &str) -> SentimentReport {
    let words: Vec<&str> = text.split_whitespace().collect();
    let word_count = words.len();

    let lower = text.to_lowercase();
    let pos_score = POSITIVE_WORDS.iter().filter(|w| lower.contains(*w)).count();
    let neg_score = NEGATIVE_WORDS.iter().filter(|w| lower.contains(*w)).count();

    let (sentiment, confidence) = if pos_score > neg_score {
        (Sentiment::Positive, ramp(pos_score))
    } else if neg_score > pos_score {
        (Sentiment::Negative, ramp(neg_score))
    } else {
        (Sentiment::Neutral, 0.70)
    };

    let summary = if word_count > 5 {
        format!("User is discussing {}...", words[0])
    } else {
        "Short text analysis.".to_string()
    };

    let keywords = words
        .iter()
        .filter(|w| w.chars().count() >= KEYWORD_MIN_LEN)
        .take(KEYWORD_MAX)
        .map(|w| w.to_string())
        .collect();

    SentimentReport {
        sentiment,
        confidence: round2(confidence),
        word_count,
        summary,
        keywords,
        original_text: truncate_echo(text),
    }
}

/// 0.85 base plus 0.05 per matched lexicon word, capped at three.
fn ramp(score: usize) -> f64 {
    0.85 + (score.min(3) as f64) * 0.05
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn truncate_echo(text: &str) -> String {
    if text.chars().count() > ECHO_MAX_CHARS {
        let prefix: String = text.chars().take(ECHO_MAX_CHARS).collect();
        format!("{}...", prefix)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_confidence_ramp() {
        let report = analyze("This is a good day");
        assert_eq!(report.sentiment, Sentiment::Positive);
        assert_eq!(report.confidence, 0.90);

        let report = analyze("good great excellent happy love");
        assert_eq!(report.sentiment, Sentiment::Positive);
        // Five matches, but the ramp caps at three.
        assert_eq!(report.confidence, 1.00);
    }

    #[test]
    fn test_negative_sentiment() {
        let report = analyze("what a terrible, awful day");
        assert_eq!(report.sentiment, Sentiment::Negative);
        assert_eq!(report.confidence, 0.95);
    }

    #[test]
    fn test_tie_is_neutral() {
        let report = analyze("good and bad in equal measure");
        assert_eq!(report.sentiment, Sentiment::Neutral);
        assert_eq!(report.confidence, 0.70);
    }

    #[test]
    fn test_word_count_and_summary() {
        let short = analyze("just five little words here");
        assert_eq!(short.word_count, 5);
        assert_eq!(short.summary, "Short text analysis.");

        let long = analyze("weather today looks fine to me indeed");
        assert_eq!(long.word_count, 7);
        assert_eq!(long.summary, "User is discussing weather...");
    }

    #[test]
    fn test_keywords_are_first_three_long_words() {
        let report = analyze("shorter keywords appear before anything lengthy otherwise");
        assert_eq!(report.keywords, vec!["shorter", "keywords", "appear"]);
    }

    #[test]
    fn test_echo_truncation() {
        let text = "x".repeat(150);
        let report = analyze(&text);
        assert_eq!(report.original_text.chars().count(), 103);
        assert!(report.original_text.ends_with("..."));

        let short = analyze("short text");
        assert_eq!(short.original_text, "short text");
    }

    #[test]
    fn test_empty_text_is_neutral() {
        let report = analyze("");
        assert_eq!(report.word_count, 0);
        assert_eq!(report.sentiment, Sentiment::Neutral);
        assert_eq!(report.summary, "Short text analysis.");
    }
}
