//! Body length and paragraph analysis.

use crate::score::Scorecard;
use crate::text;

use super::reports::ContentAnalysis;

/// Analyze the article body for overall length and paragraph structure.
#[tracing::instrument(skip_all, fields(content_len = content.len()))]
pub fn analyze_content(content: &str) -> ContentAnalysis {
    let mut card = Scorecard::new();

    let word_count = text::stripped_len(content);
    let paragraph_count = text::split_paragraphs(content).len();

    let average_paragraph_length = if paragraph_count > 0 {
        (word_count as f64 / paragraph_count as f64).round() as usize
    } else {
        0
    };

    if word_count < 500 {
        card.flag(30, "コンテンツが短すぎます（500文字以上推奨）");
    } else if word_count < 1000 {
        card.flag(15, "SEO効果を高めるには1000文字以上を推奨します");
    } else if word_count > 10000 {
        card.flag(10, "コンテンツが長すぎる可能性があります（適切に分割を検討）");
    }

    if paragraph_count < 3 {
        card.flag(15, "段落が少なすぎます（読みやすさ向上のため段落分けを推奨）");
    }

    if average_paragraph_length > 300 {
        card.flag(10, "段落が長すぎます（200文字程度で段落分けを推奨）");
    }

    let (score, issues) = card.into_parts();
    ContentAnalysis {
        score,
        word_count,
        paragraph_count,
        average_paragraph_length,
        issues,
    }
}
