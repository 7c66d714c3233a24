//! Analyze command — score an article against the SEO rubric.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use seo_audit_core::grade::{Grade, score_grade};
use seo_audit_core::{analyze_seo, text};

use super::read_input_file;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Article file to analyze (markdown-like body).
    pub file: Utf8PathBuf,

    /// Target SEO keyword (matched as a literal substring).
    #[arg(short, long)]
    pub keyword: String,

    /// Article headline. Defaults to the file's first `# ` heading.
    #[arg(long)]
    pub title: Option<String>,

    /// SEO meta title tag.
    #[arg(long)]
    pub meta_title: Option<String>,

    /// SEO meta description tag.
    #[arg(long)]
    pub meta_description: Option<String>,

    /// Minimum acceptable overall score (0–100); exit nonzero below it.
    #[arg(long)]
    pub min_score: Option<u8>,
}

/// Run the SEO analysis on an article file.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config_min_score: Option<u8>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, keyword = %args.keyword, "executing analyze command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    let title = args
        .title
        .as_deref()
        .or_else(|| text::first_h1(&content))
        .unwrap_or_default();
    let min_score = args.min_score.or(config_min_score);

    let report = analyze_seo(
        &content,
        title,
        &args.keyword,
        args.meta_title.as_deref(),
        args.meta_description.as_deref(),
    );

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let tier = score_grade(i32::from(report.overall_score));
        println!("{}", args.file.bold());
        println!(
            "\n  {} {}/100 ({} {})",
            "Overall:".cyan(),
            tint(report.overall_score, tier.grade),
            tier.grade,
            tier.label,
        );

        let t = &report.title_score;
        println!(
            "\n  {} {}/100, {} chars{}",
            "Title:".cyan(),
            t.score,
            t.length,
            if t.has_keyword { "" } else { ", no keyword" },
        );

        let m = &report.meta_score;
        println!(
            "\n  {} {}/100, title {} chars, description {} chars",
            "Meta:".cyan(),
            m.score,
            m.title_length,
            m.description_length,
        );

        let c = &report.content_score;
        println!(
            "\n  {} {}/100, {} chars in {} paragraphs (avg {})",
            "Content:".cyan(),
            c.score,
            c.word_count,
            c.paragraph_count,
            c.average_paragraph_length,
        );

        let k = &report.keyword_score;
        println!(
            "\n  {} {}/100, {} occurrences, density {:.2}%",
            "Keyword:".cyan(),
            k.score,
            k.occurrences,
            k.density,
        );

        let r = &report.readability_score;
        println!(
            "\n  {} {}/100, avg sentence {} chars, kanji {:.1}%",
            "Readability:".cyan(),
            r.score,
            r.average_sentence_length,
            r.kanji_ratio,
        );

        let s = &report.structure_score;
        println!(
            "\n  {} {}/100, {} H2 / {} H3{}",
            "Structure:".cyan(),
            s.score,
            s.h2_count,
            s.h3_count,
            if s.has_proper_hierarchy {
                ""
            } else {
                ", broken hierarchy"
            },
        );

        if !report.suggestions.is_empty() {
            println!("\n  {}", "Suggestions:".yellow());
            for suggestion in &report.suggestions {
                println!("    - {suggestion}");
            }
        }
    }

    // Quality gate
    if let Some(min) = min_score
        && report.overall_score < min
    {
        bail!(
            "{} scores {} (min: {}). Address the suggestions to raise the score.",
            args.file,
            report.overall_score,
            min,
        );
    }

    Ok(())
}

/// Colorize a score by its grade tier's display tint.
fn tint(score: u8, grade: Grade) -> String {
    match grade {
        Grade::A => score.green().to_string(),
        Grade::B => score.blue().to_string(),
        Grade::C => score.yellow().to_string(),
        Grade::D => score.bright_red().to_string(),
        Grade::F => score.red().to_string(),
    }
}
