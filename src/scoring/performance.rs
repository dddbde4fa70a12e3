use crate::domain::GradeRecord;

use super::rounding::safe_ratio;
use super::types::{GradeContext, PerformanceIndices};

/// Stand-in for a bowling average or economy that was never recorded.
const MISSING_BOWLING_FIGURE: f64 = 99.0;

pub fn batting_contribution(grade: &GradeRecord, ccm: f64) -> f64 {
    let raw = grade.average.unwrap_or(0.0) * 0.60
        + grade.high_score.unwrap_or(0.0) * 0.25
        + grade.runs.unwrap_or(0.0) * 0.01
        + grade.matches * 0.50;
    raw * ccm * ccm
}

pub fn bowling_contribution(grade: &GradeRecord, ccm: f64) -> f64 {
    let bowling_average = grade.bowling_average.unwrap_or(MISSING_BOWLING_FIGURE);
    let economy = grade.economy.unwrap_or(MISSING_BOWLING_FIGURE);
    let raw = (40.0 - bowling_average) * 0.5
        + (6.0 - economy) * 3.0
        + grade.wickets.unwrap_or(0.0) * 0.3
        + grade.overs.unwrap_or(0.0) * 0.05;
    raw * ccm * ccm
}

/// CCM-weighted batting and bowling indices across all grades.
///
/// `grades` and `contexts` are parallel slices. A discipline with no activity
/// in any grade stays `None` instead of contributing a zero.
pub fn performance_indices(grades: &[GradeRecord], contexts: &[GradeContext]) -> PerformanceIndices {
    let mut batting = Accumulator::default();
    let mut bowling = Accumulator::default();

    for (grade, ctx) in grades.iter().zip(contexts) {
        if grade.has_batting() {
            batting.add(batting_contribution(grade, ctx.ccm), ctx.ccm);
        }
        if grade.has_bowling() {
            bowling.add(bowling_contribution(grade, ctx.ccm), ctx.ccm);
        }
    }

    PerformanceIndices {
        batting: batting.index(),
        bowling: bowling.index(),
    }
}

#[derive(Default)]
struct Accumulator {
    numerator: f64,
    denominator: f64,
    grades: usize,
}

impl Accumulator {
    fn add(&mut self, contribution: f64, ccm: f64) {
        self.numerator += contribution;
        self.denominator += ccm;
        self.grades += 1;
    }

    fn index(&self) -> Option<f64> {
        (self.grades > 0).then(|| safe_ratio(self.numerator, self.denominator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(ccm: f64) -> GradeContext {
        GradeContext {
            tier_code: "test".to_string(),
            known_tier: true,
            tier_value: ccm,
            arm: 1.0,
            format_modifier: 1.0,
            ccm,
        }
    }

    fn batting_grade(average: f64, high_score: f64, runs: f64, matches: f64) -> GradeRecord {
        GradeRecord {
            matches,
            runs: Some(runs),
            high_score: Some(high_score),
            average: Some(average),
            ..GradeRecord::default()
        }
    }

    #[test]
    fn test_batting_contribution_squares_ccm() {
        let grade = batting_grade(28.5, 67.0, 285.0, 12.0);
        assert!((batting_contribution(&grade, 1.0) - 42.7).abs() < 1e-9);
        assert!((batting_contribution(&grade, 0.5) - 42.7 * 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_bowling_can_go_negative() {
        let grade = GradeRecord {
            overs: Some(4.0),
            wickets: Some(0.0),
            bowling_average: Some(80.0),
            economy: Some(11.0),
            ..GradeRecord::default()
        };
        assert!(bowling_contribution(&grade, 1.0) < 0.0);
    }

    #[test]
    fn test_missing_disciplines_stay_absent() {
        let grades = vec![batting_grade(20.0, 40.0, 100.0, 5.0)];
        let indices = performance_indices(&grades, &[context(0.75)]);
        assert!(indices.batting.is_some());
        assert_eq!(indices.bowling, None);

        let empty = performance_indices(&[], &[]);
        assert!(!empty.has_data());
    }

    #[test]
    fn test_zero_ccm_does_not_divide_by_zero() {
        let grades = vec![batting_grade(20.0, 40.0, 100.0, 5.0)];
        let indices = performance_indices(&grades, &[context(0.0)]);
        assert_eq!(indices.batting, Some(0.0));
    }
}
