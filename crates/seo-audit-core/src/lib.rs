//! Core library for seo-audit.
//!
//! This crate provides the SEO content-scoring engine used by the
//! `seo-audit` CLI and any downstream consumers: six independent facet
//! analyzers (title, meta, content, keyword, readability, structure),
//! a weighted aggregate score, and a grade mapper for display.
//!
//! The engine targets Japanese articles: character counts are
//! whitespace-stripped `char` counts (CJK text has no word boundaries),
//! sentences end at `。`/`！`/`？` or a newline, and the kanji ratio is
//! used as a formality proxy.
//!
//! # Modules
//!
//! - [`analysis`] - The six analyzers and the [`analyze_seo`] orchestrator
//! - [`grade`] - Score-to-grade-tier mapping
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use seo_audit_core::{analyze_seo, score_grade};
//!
//! let report = analyze_seo(
//!     "## 歯科の定期検診\n\n歯科の定期検診はたいせつです。",
//!     "歯科の定期検診のすすめ",
//!     "歯科",
//!     None,
//!     None,
//! );
//! let grade = score_grade(i32::from(report.overall_score));
//! println!("{} ({})", report.overall_score, grade.grade);
//! ```
#![deny(unsafe_code)]

pub mod analysis;

pub mod config;

pub mod error;

pub mod grade;

pub mod score;

pub mod text;

pub use analysis::{SeoReport, analyze_seo};

pub use config::{Config, ConfigLoader, LogLevel};

pub use error::{ConfigError, ConfigResult};

pub use grade::{Grade, ScoreGrade, score_grade};

/// Default maximum input size in bytes (5 MiB).
///
/// Guards against resource exhaustion from oversized article files.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
