//! Heading structure analysis.

use crate::score::Scorecard;
use crate::text;

use super::reports::StructureAnalysis;

/// Analyze the article's ATX heading structure.
///
/// The hierarchy check is deliberately shallow: it scans top to bottom
/// and only detects an `### ` line appearing before any `## ` line,
/// stopping at the first violation. An `### ` directly following another
/// `### ` is never flagged. Known limitation, preserved because the
/// downstream score expectations depend on it.
#[tracing::instrument(skip_all, fields(content_len = content.len()))]
pub fn analyze_structure(content: &str) -> StructureAnalysis {
    let mut card = Scorecard::new();

    let h2_count = text::count_h2(content);
    let h3_count = text::count_h3(content);

    let mut has_proper_hierarchy = true;
    let mut last_level = 1u8;
    for line in content.split('\n') {
        if line.starts_with("### ") {
            if last_level < 2 {
                has_proper_hierarchy = false;
                break;
            }
            last_level = 3;
        } else if line.starts_with("## ") {
            last_level = 2;
        }
    }

    if h2_count == 0 {
        card.flag(30, "H2見出しがありません（記事構成にH2見出しを使用してください）");
    } else if h2_count < 2 {
        card.flag(15, "H2見出しが少なすぎます（2つ以上推奨）");
    } else if h2_count > 10 {
        card.flag(10, "H2見出しが多すぎます（記事を分割することを検討）");
    }

    if h2_count >= 2 && h3_count == 0 {
        card.flag(10, "H3見出しがありません（詳細な構成にはH3も使用を推奨）");
    }

    if !has_proper_hierarchy {
        card.flag(20, "見出しの階層構造が不適切です（H2の下にH3を配置してください）");
    }

    let (score, issues) = card.into_parts();
    StructureAnalysis {
        score,
        h2_count,
        h3_count,
        has_proper_hierarchy,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_structure_scores_full() {
        let content = "## 第一章\n### 詳細\n## 第二章\n### 詳細\n## まとめ\n";
        let a = analyze_structure(content);
        assert_eq!(a.h2_count, 3);
        assert_eq!(a.h3_count, 2);
        assert!(a.has_proper_hierarchy);
        assert_eq!(a.score, 100);
    }

    #[test]
    fn no_h2_heavily_penalized() {
        let a = analyze_structure("本文だけの記事です。\n\n見出しはありません。");
        assert_eq!(a.h2_count, 0);
        assert!(a.issues.iter().any(|i| i.contains("H2見出しがありません")));
        assert_eq!(a.score, 70);
        assert!(a.score <= 70);
    }

    #[test]
    fn single_h2_penalized() {
        let a = analyze_structure("## 唯一の見出し\n本文。");
        assert_eq!(a.h2_count, 1);
        // -15 few H2; the H3 rule needs h2_count >= 2
        assert_eq!(a.score, 85);
    }

    #[test]
    fn too_many_h2_penalized() {
        let content = (1..=11)
            .map(|i| format!("## 見出し{i}\n### 補足\n"))
            .collect::<String>();
        let a = analyze_structure(&content);
        assert_eq!(a.h2_count, 11);
        assert_eq!(a.score, 90);
    }

    #[test]
    fn missing_h3_under_multiple_h2() {
        let a = analyze_structure("## 第一章\n本文。\n## 第二章\n本文。");
        assert_eq!(a.h3_count, 0);
        assert_eq!(a.score, 90);
    }

    #[test]
    fn h3_before_any_h2_breaks_hierarchy() {
        let a = analyze_structure("### 先走った見出し\n## 第一章\n## 第二章\n### 詳細");
        assert!(!a.has_proper_hierarchy);
        // -20 hierarchy only: two H2s and H3s present
        assert_eq!(a.score, 80);
    }

    #[test]
    fn shallow_check_misses_h3_after_h3() {
        // The scan never demotes back below level 2, so an H3 chain after
        // the first H2 passes even without an intervening H2.
        let a = analyze_structure("## 第一章\n### 詳細\n### さらに詳細\n### もっと詳細");
        assert!(a.has_proper_hierarchy);
    }

    #[test]
    fn empty_content_degrades_not_errors() {
        let a = analyze_structure("");
        assert_eq!(a.h2_count, 0);
        assert_eq!(a.h3_count, 0);
        assert!(a.has_proper_hierarchy);
        assert_eq!(a.score, 70);
    }
}
