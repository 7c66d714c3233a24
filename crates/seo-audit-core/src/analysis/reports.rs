//! Report structs for SEO content analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in CLI JSON output and by downstream web consumers. Field names
//! serialize in camelCase to match the wire shape the original score-card
//! UI consumes (`overallScore`, `titleScore.hasKeyword`, ...).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Full SEO analysis report combining the six facet analyses.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeoReport {
    /// Weighted aggregate score in `[0, 100]`.
    pub overall_score: u8,
    /// Headline analysis.
    pub title_score: TitleAnalysis,
    /// Meta title / meta description analysis.
    pub meta_score: MetaAnalysis,
    /// Body length and paragraph analysis.
    pub content_score: ContentAnalysis,
    /// Keyword placement and density analysis.
    pub keyword_score: KeywordAnalysis,
    /// Sentence length and kanji-ratio analysis.
    pub readability_score: ReadabilityAnalysis,
    /// Heading structure analysis.
    pub structure_score: StructureAnalysis,
    /// All facet issues, concatenated in facet order
    /// (title, meta, content, keyword, readability, structure).
    pub suggestions: Vec<String>,
}

/// Headline analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TitleAnalysis {
    /// Facet score in `[0, 100]`.
    pub score: u8,
    /// Title length in characters.
    pub length: usize,
    /// Whether the keyword appears in the title (case-insensitive).
    pub has_keyword: bool,
    /// Operator-facing improvement suggestions.
    pub issues: Vec<String>,
}

/// Meta title / meta description analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetaAnalysis {
    /// Facet score in `[0, 100]`.
    pub score: u8,
    /// Meta title length in characters (0 when absent).
    pub title_length: usize,
    /// Meta description length in characters (0 when absent).
    pub description_length: usize,
    /// Whether the keyword appears in either meta field.
    pub has_keyword: bool,
    /// Operator-facing improvement suggestions.
    pub issues: Vec<String>,
}

/// Body length and paragraph analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalysis {
    /// Facet score in `[0, 100]`.
    pub score: u8,
    /// Whitespace-stripped character count of the body.
    pub word_count: usize,
    /// Number of blank-line-separated paragraphs.
    pub paragraph_count: usize,
    /// Average paragraph length in characters (0 with no paragraphs).
    pub average_paragraph_length: usize,
    /// Operator-facing improvement suggestions.
    pub issues: Vec<String>,
}

/// Keyword placement and density analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysis {
    /// Facet score in `[0, 100]`.
    pub score: u8,
    /// Keyword density as a percentage, rounded to 2 decimals.
    pub density: f64,
    /// Non-overlapping case-insensitive occurrences in the body.
    pub occurrences: usize,
    /// Whether the keyword appears in the title.
    pub in_title: bool,
    /// Whether the keyword appears in any H1/H2 heading line.
    pub in_headings: bool,
    /// Operator-facing improvement suggestions.
    pub issues: Vec<String>,
}

/// Sentence length and kanji-ratio analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityAnalysis {
    /// Facet score in `[0, 100]`.
    pub score: u8,
    /// Average sentence length in characters, rounded.
    pub average_sentence_length: usize,
    /// Kanji share of non-whitespace characters, as a percentage
    /// rounded to 1 decimal.
    pub kanji_ratio: f64,
    /// Operator-facing improvement suggestions.
    pub issues: Vec<String>,
}

/// Heading structure analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StructureAnalysis {
    /// Facet score in `[0, 100]`.
    pub score: u8,
    /// Number of `## ` heading lines.
    pub h2_count: usize,
    /// Number of `### ` heading lines.
    pub h3_count: usize,
    /// Whether no H3 appears before the first H2 (shallow check).
    pub has_proper_hierarchy: bool,
    /// Operator-facing improvement suggestions.
    pub issues: Vec<String>,
}
