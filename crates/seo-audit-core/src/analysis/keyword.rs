//! Keyword placement and density analysis.

use crate::score::Scorecard;
use crate::text;

use super::reports::KeywordAnalysis;

/// Analyze keyword usage: occurrence count, density, and placement in
/// the title and headings.
///
/// The keyword is matched as a literal substring, case-insensitively.
/// Density is the share of body characters attributable to keyword
/// occurrences, so a two-character keyword appearing 5 times in a
/// 1000-character body has a density of 1%.
#[tracing::instrument(skip_all, fields(content_len = content.len()))]
pub fn analyze_keyword(content: &str, title: &str, keyword: &str) -> KeywordAnalysis {
    let mut card = Scorecard::new();

    let occurrences = text::count_occurrences_ci(content, keyword);
    let word_count = text::stripped_len(content);
    let keyword_length = text::stripped_len(keyword);

    let density = if word_count > 0 {
        (occurrences * keyword_length) as f64 / word_count as f64 * 100.0
    } else {
        0.0
    };

    let in_title = text::contains_ci(title, keyword);
    let in_headings = text::extract_headings(content)
        .iter()
        .any(|h| text::contains_ci(h, keyword));

    if occurrences == 0 {
        card.flag(40, "キーワードがコンテンツ内に含まれていません");
    } else if occurrences < 3 {
        card.flag(20, "キーワードの出現回数が少なすぎます（3回以上推奨）");
    }

    if density > 5.0 {
        card.flag(25, "キーワード密度が高すぎます（過剰なSEOと判断される可能性）");
    } else if density < 0.5 && occurrences > 0 {
        card.flag(15, "キーワード密度が低すぎます（1-3%推奨）");
    }

    if !in_headings && occurrences > 0 {
        card.flag(15, "見出し（H2/H3）にもキーワードを含めることを推奨します");
    }

    let (score, issues) = card.into_parts();
    KeywordAnalysis {
        score,
        density: (density * 100.0).round() / 100.0,
        occurrences,
        in_title,
        in_headings,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_keyword_flagged_hard() {
        let a = analyze_keyword("インプラントの費用について。", "費用のはなし", "歯科");
        assert_eq!(a.occurrences, 0);
        assert_eq!(a.density, 0.0);
        assert!(!a.in_title);
        assert!(!a.in_headings);
        // Only the absence rule fires (density/heading rules need occurrences > 0)
        assert_eq!(a.score, 60);
        assert!(a.issues.iter().any(|i| i.contains("含まれていません")));
    }

    #[test]
    fn well_placed_keyword_scores_full() {
        // 5 occurrences of a 2-char keyword in ~1000 chars: density 1%
        let filler = "むし歯をふせぐには毎日の手入れがたいせつです。".repeat(41);
        let content = format!(
            "## 歯科の定期検診\n\n歯科に通う目安。歯科で相談。歯科の役割。歯科と予防。\n\n{filler}"
        );
        let a = analyze_keyword(&content, "歯科の定期検診のすすめ", "歯科");
        assert_eq!(a.occurrences, 5);
        assert!(a.in_title);
        assert!(a.in_headings);
        assert!(a.density >= 0.5 && a.density <= 5.0);
        assert_eq!(a.score, 100);
    }

    #[test]
    fn few_occurrences_penalized() {
        let filler = "むし歯をふせぐには毎日の手入れがたいせつです。".repeat(10);
        let content = format!("## 歯科の検診\n\n歯科はたいせつ。\n\n{filler}");
        let a = analyze_keyword(&content, "歯科", "歯科");
        assert_eq!(a.occurrences, 2);
        // -20 few occurrences; density 4/~250 = 1.6% fine; in headings
        assert_eq!(a.score, 80);
    }

    #[test]
    fn stuffing_detected_above_five_percent() {
        let content = "## 歯科\n\n歯科。歯科。歯科。歯科。歯科。歯科。歯科。歯科。";
        let a = analyze_keyword(content, "歯科", "歯科");
        assert!(a.density > 5.0);
        assert!(a.issues.iter().any(|i| i.contains("高すぎます")));
    }

    #[test]
    fn reducing_density_clears_only_the_stuffing_issue() {
        let dense = "## 歯科\n\n歯科。歯科。歯科。歯科。";
        let diluted = format!(
            "## 歯科\n\n歯科。歯科。歯科。歯科。\n\n{}",
            "むし歯をふせぐには毎日の手入れがたいせつです。".repeat(20)
        );
        let a = analyze_keyword(dense, "", "歯科");
        let b = analyze_keyword(&diluted, "", "歯科");
        assert!(a.density > 5.0);
        assert!(b.density <= 5.0);
        assert!(a.issues.iter().any(|i| i.contains("高すぎます")));
        assert!(!b.issues.iter().any(|i| i.contains("高すぎます")));
        // Other facets of the keyword analysis stay stable
        assert!(a.in_headings && b.in_headings);
    }

    #[test]
    fn low_density_penalized() {
        // 3 occurrences of a 2-char keyword in ~3000 chars: density 0.2%
        let filler = "むし歯をふせぐには毎日の手入れがたいせつです。".repeat(130);
        let content = format!("## 歯科の検診\n\n歯科へ。歯科で。\n\n{filler}");
        let a = analyze_keyword(&content, "", "歯科");
        assert_eq!(a.occurrences, 3);
        assert!(a.density < 0.5);
        assert_eq!(a.score, 85);
    }

    #[test]
    fn missing_from_headings_penalized() {
        let content = "## 予防のはなし\n\n歯科はたいせつ。歯科に通う。歯科で相談。";
        let a = analyze_keyword(content, "", "歯科");
        assert_eq!(a.occurrences, 3);
        assert!(!a.in_headings);
        // density is also above 5% in this tiny body
        assert!(a.issues.iter().any(|i| i.contains("見出し")));
    }

    #[test]
    fn empty_content_guards_density() {
        let a = analyze_keyword("", "歯科", "歯科");
        assert_eq!(a.occurrences, 0);
        assert_eq!(a.density, 0.0);
        assert_eq!(a.score, 60);
    }

    #[test]
    fn empty_keyword_counts_as_absent() {
        let a = analyze_keyword("本文です。", "タイトル", "");
        assert_eq!(a.occurrences, 0);
        assert_eq!(a.score, 60);
    }
}
