//! Headline analysis.

use crate::score::Scorecard;
use crate::text;

use super::reports::TitleAnalysis;

/// Analyze the article headline for length and keyword placement.
#[tracing::instrument(skip_all)]
pub fn analyze_title(title: &str, keyword: &str) -> TitleAnalysis {
    let mut card = Scorecard::new();

    let length = title.chars().count();
    let has_keyword = text::contains_ci(title, keyword);

    if length < 20 {
        card.flag(20, "タイトルが短すぎます（20文字以上推奨）");
    } else if length > 60 {
        card.flag(15, "タイトルが長すぎます（60文字以内推奨）");
    }

    if !has_keyword {
        card.flag(25, "タイトルにキーワードが含まれていません");
    }

    // Leading placement: the title should open with the keyword's first
    // whitespace-delimited token.
    let keyword_lower = keyword.to_lowercase();
    let first_token = keyword_lower.split(' ').next().unwrap_or_default();
    if has_keyword && !title.to_lowercase().starts_with(first_token) {
        card.flag(10, "キーワードをタイトル先頭に配置するとより効果的です");
    }

    let (score, issues) = card.into_parts();
    TitleAnalysis {
        score,
        length,
        has_keyword,
        issues,
    }
}
