//! SEO content analysis.
//!
//! Decomposes article scoring into six independent facets, orchestrated
//! by [`analyze_seo`]: title, meta, content, keyword, readability, and
//! structure. Each facet is a pure function in its own module and can
//! also be invoked individually.
//!
//! Facets are order-independent and share no state; only the order of
//! the combined `suggestions` list is fixed by convention.

pub mod content;
pub mod keyword;
pub mod meta;
pub mod readability;
pub mod reports;
pub mod structure;
pub mod title;

pub use reports::{
    ContentAnalysis, KeywordAnalysis, MetaAnalysis, ReadabilityAnalysis, SeoReport,
    StructureAnalysis, TitleAnalysis,
};

/// Aggregate weights per facet. They sum to 1.00 exactly.
const TITLE_WEIGHT: f64 = 0.15;
const META_WEIGHT: f64 = 0.15;
const CONTENT_WEIGHT: f64 = 0.20;
const KEYWORD_WEIGHT: f64 = 0.20;
const READABILITY_WEIGHT: f64 = 0.15;
const STRUCTURE_WEIGHT: f64 = 0.15;

/// Run the full SEO analysis for one article.
///
/// Pure and total: any combination of strings (including empty) produces
/// a complete report; degenerate input degrades scores instead of
/// erroring. Two calls with identical arguments yield identical reports.
///
/// # Arguments
///
/// * `content` — Full article body, markdown-like (`##`/`###` headings).
/// * `title` — Article headline.
/// * `keyword` — Target SEO keyword, matched as a literal substring.
/// * `meta_title` — Optional SEO title tag.
/// * `meta_description` — Optional meta description tag.
#[tracing::instrument(skip_all, fields(content_len = content.len()))]
pub fn analyze_seo(
    content: &str,
    title: &str,
    keyword: &str,
    meta_title: Option<&str>,
    meta_description: Option<&str>,
) -> SeoReport {
    let title_score = title::analyze_title(title, keyword);
    let meta_score = meta::analyze_meta(meta_title, meta_description, keyword);
    let content_score = content::analyze_content(content);
    let keyword_score = keyword::analyze_keyword(content, title, keyword);
    let readability_score = readability::analyze_readability(content);
    let structure_score = structure::analyze_structure(content);

    let overall_score = (f64::from(title_score.score) * TITLE_WEIGHT
        + f64::from(meta_score.score) * META_WEIGHT
        + f64::from(content_score.score) * CONTENT_WEIGHT
        + f64::from(keyword_score.score) * KEYWORD_WEIGHT
        + f64::from(readability_score.score) * READABILITY_WEIGHT
        + f64::from(structure_score.score) * STRUCTURE_WEIGHT)
        .round() as u8;

    let suggestions = title_score
        .issues
        .iter()
        .chain(&meta_score.issues)
        .chain(&content_score.issues)
        .chain(&keyword_score.issues)
        .chain(&readability_score.issues)
        .chain(&structure_score.issues)
        .cloned()
        .collect();

    SeoReport {
        overall_score,
        title_score,
        meta_score,
        content_score,
        keyword_score,
        readability_score,
        structure_score,
        suggestions,
    }
}
