//! Sentence length and kanji-ratio readability analysis.
//!
//! Japanese heuristics: sentences end at `。`/`！`/`？` or a newline, and
//! the share of kanji among non-whitespace characters serves as a proxy
//! for formality. Too many kanji reads as dense; too few reads as
//! insufficiently professional for medical content.

use crate::score::Scorecard;
use crate::text;

use super::reports::ReadabilityAnalysis;

/// Analyze the article body for sentence length and kanji ratio.
#[tracing::instrument(skip_all, fields(content_len = content.len()))]
pub fn analyze_readability(content: &str) -> ReadabilityAnalysis {
    let mut card = Scorecard::new();

    let sentences = text::split_sentences(content);
    let total_length: usize = sentences.iter().map(|s| text::stripped_len(s)).sum();
    let average_sentence_length = if sentences.is_empty() {
        0
    } else {
        (total_length as f64 / sentences.len() as f64).round() as usize
    };

    let total_chars = text::stripped_len(content);
    let kanji_ratio = if total_chars > 0 {
        text::kanji_count(content) as f64 / total_chars as f64 * 100.0
    } else {
        0.0
    };

    if average_sentence_length > 80 {
        card.flag(20, "文が長すぎます（1文40-60文字程度を推奨）");
    } else if average_sentence_length > 60 {
        card.flag(10, "文がやや長めです（読みやすさ向上のため短めの文を推奨）");
    }

    if kanji_ratio > 40.0 {
        card.flag(15, "漢字率が高すぎます（読みやすさ向上のため30%程度を推奨）");
    } else if kanji_ratio < 15.0 {
        card.flag(10, "漢字率が低すぎます（専門性を示すため適度な漢字使用を推奨）");
    }

    let (score, issues) = card.into_parts();
    ReadabilityAnalysis {
        score,
        average_sentence_length,
        kanji_ratio: (kanji_ratio * 10.0).round() / 10.0,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_text_scores_full() {
        // 6 kanji of 18 visible chars per sentence: ratio ~33%
        let content = "歯科の定期検診はとてもたいせつです。".repeat(10);
        let a = analyze_readability(&content);
        assert_eq!(a.average_sentence_length, 17);
        assert!(a.kanji_ratio >= 15.0 && a.kanji_ratio <= 40.0);
        assert_eq!(a.score, 100);
    }

    #[test]
    fn mildly_long_sentences_flagged() {
        // One 70-char sentence
        let content = format!("{}。", "あ".repeat(55) + &"予防".repeat(7) + "です");
        let a = analyze_readability(&content);
        assert!(a.average_sentence_length > 60 && a.average_sentence_length <= 80);
        assert_eq!(a.score, 90);
    }

    #[test]
    fn very_long_sentences_flagged_harder() {
        let content = format!("{}。", "あ".repeat(70) + &"予防".repeat(10) + "です");
        let a = analyze_readability(&content);
        assert!(a.average_sentence_length > 80);
        assert_eq!(a.score, 80);
    }

    #[test]
    fn kanji_dense_text_flagged() {
        let content = "歯周病治療専門医院紹介。".repeat(5);
        let a = analyze_readability(&content);
        assert!(a.kanji_ratio > 40.0);
        assert!(a.issues.iter().any(|i| i.contains("高すぎます")));
    }

    #[test]
    fn kana_only_text_flagged_as_informal() {
        let content = "はみがきはたいせつです。まいにちみがきましょう。";
        let a = analyze_readability(&content);
        assert!(a.kanji_ratio < 15.0);
        assert_eq!(a.score, 90);
    }

    #[test]
    fn empty_content_guards_both_ratios() {
        let a = analyze_readability("");
        assert_eq!(a.average_sentence_length, 0);
        assert_eq!(a.kanji_ratio, 0.0);
        // Zero sentences is fine; zero kanji ratio is below 15%
        assert_eq!(a.score, 90);
    }

    #[test]
    fn kanji_ratio_rounded_to_one_decimal() {
        // 1 kanji in 3 chars: 33.333...% -> 33.3
        let a = analyze_readability("歯とは");
        assert_eq!(a.kanji_ratio, 33.3);
    }
}
