//! Grade command — map an overall score to its display tier.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use seo_audit_core::grade::{Grade, score_grade};

/// Arguments for the `grade` subcommand.
#[derive(Args, Debug)]
pub struct GradeArgs {
    /// Overall score (0–100; out-of-range values clamp to the boundary tiers).
    pub score: i32,
}

/// Print the grade tier for a score.
#[instrument(name = "cmd_grade", skip_all, fields(score = args.score))]
pub fn cmd_grade(args: &GradeArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(score = args.score, "executing grade command");

    let tier = score_grade(args.score);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&tier)?);
        return Ok(());
    }

    let letter = match tier.grade {
        Grade::A => tier.grade.green().to_string(),
        Grade::B => tier.grade.blue().to_string(),
        Grade::C => tier.grade.yellow().to_string(),
        Grade::D => tier.grade.bright_red().to_string(),
        Grade::F => tier.grade.red().to_string(),
    };
    println!("{letter} {}", tier.label);

    Ok(())
}
