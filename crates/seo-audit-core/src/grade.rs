//! Score-to-grade-tier mapping for display.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Discrete grade letter summarizing an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Grade {
    /// 90 and above.
    A,
    /// 75–89.
    B,
    /// 60–74.
    C,
    /// 40–59.
    D,
    /// Below 40.
    F,
}

impl Grade {
    /// Returns the grade letter as a string slice.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grade tier for an overall score: letter, operator-facing label, and a
/// display tint identifier for UI hinting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ScoreGrade {
    /// Grade letter.
    pub grade: Grade,
    /// Operator-facing label.
    pub label: &'static str,
    /// Display tint identifier (UI hint only).
    pub color: &'static str,
}

/// Map an overall score to its grade tier.
///
/// Pure lookup, total over any integer: out-of-range input lands in the
/// nearest boundary tier (negative scores are F, scores above 100 are A).
pub const fn score_grade(score: i32) -> ScoreGrade {
    if score >= 90 {
        ScoreGrade {
            grade: Grade::A,
            label: "優秀",
            color: "green",
        }
    } else if score >= 75 {
        ScoreGrade {
            grade: Grade::B,
            label: "良好",
            color: "blue",
        }
    } else if score >= 60 {
        ScoreGrade {
            grade: Grade::C,
            label: "普通",
            color: "yellow",
        }
    } else if score >= 40 {
        ScoreGrade {
            grade: Grade::D,
            label: "改善推奨",
            color: "orange",
        }
    } else {
        ScoreGrade {
            grade: Grade::F,
            label: "要改善",
            color: "red",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(score_grade(95).grade, Grade::A);
        assert_eq!(score_grade(90).grade, Grade::A);
        assert_eq!(score_grade(89).grade, Grade::B);
        assert_eq!(score_grade(80).grade, Grade::B);
        assert_eq!(score_grade(75).grade, Grade::B);
        assert_eq!(score_grade(74).grade, Grade::C);
        assert_eq!(score_grade(65).grade, Grade::C);
        assert_eq!(score_grade(60).grade, Grade::C);
        assert_eq!(score_grade(59).grade, Grade::D);
        assert_eq!(score_grade(45).grade, Grade::D);
        assert_eq!(score_grade(40).grade, Grade::D);
        assert_eq!(score_grade(39).grade, Grade::F);
        assert_eq!(score_grade(10).grade, Grade::F);
    }

    #[test]
    fn out_of_range_clamps_to_boundary_tiers() {
        assert_eq!(score_grade(150).grade, Grade::A);
        assert_eq!(score_grade(-5).grade, Grade::F);
    }

    #[test]
    fn labels_and_tints() {
        let g = score_grade(92);
        assert_eq!(g.label, "優秀");
        assert_eq!(g.color, "green");
        assert_eq!(score_grade(0).color, "red");
    }

    #[test]
    fn grade_displays_as_letter() {
        assert_eq!(score_grade(95).grade.to_string(), "A");
    }
}
