//! Meta title / meta description analysis.

use crate::score::Scorecard;
use crate::text;

use super::reports::MetaAnalysis;

/// Analyze the SEO meta fields for presence, length, and keyword use.
///
/// Both fields are optional; absence is a valid (penalized) state. An
/// empty keyword disables the keyword rules.
#[tracing::instrument(skip_all)]
pub fn analyze_meta(
    meta_title: Option<&str>,
    meta_description: Option<&str>,
    keyword: &str,
) -> MetaAnalysis {
    let mut card = Scorecard::new();

    let title_length = meta_title.map_or(0, |t| t.chars().count());
    let description_length = meta_description.map_or(0, |d| d.chars().count());
    let has_keyword = !keyword.is_empty()
        && (meta_title.is_some_and(|t| text::contains_ci(t, keyword))
            || meta_description.is_some_and(|d| text::contains_ci(d, keyword)));

    if meta_title.is_none() {
        card.flag(25, "SEOタイトルが設定されていません");
    } else if title_length < 30 {
        card.flag(15, "SEOタイトルが短すぎます（30-60文字推奨）");
    } else if title_length > 60 {
        card.flag(10, "SEOタイトルが長すぎます（60文字以内推奨）");
    }

    if meta_description.is_none() {
        card.flag(25, "メタディスクリプションが設定されていません");
    } else if description_length < 80 {
        card.flag(15, "メタディスクリプションが短すぎます（80-120文字推奨）");
    } else if description_length > 160 {
        card.flag(10, "メタディスクリプションが長すぎます（160文字以内推奨）");
    }

    if !keyword.is_empty() && !has_keyword {
        card.flag(15, "メタ情報にキーワードを含めることを推奨します");
    }

    let (score, issues) = card.into_parts();
    MetaAnalysis {
        score,
        title_length,
        description_length,
        has_keyword,
        issues,
    }
}
