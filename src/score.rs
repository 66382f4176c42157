use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::filter::drop_unchanged_text;
use crate::transition::TransitionCounts;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum ZeroDivision {
    #[default]
    Warn,
    Fallback(f64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseZeroDivisionError {
    raw: String,
}

impl fmt::Display for ParseZeroDivisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid zero-division policy {:?}: expected \"warn\" or a number",
            self.raw
        )
    }
}

impl std::error::Error for ParseZeroDivisionError {}

impl FromStr for ZeroDivision {
    type Err = ParseZeroDivisionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.eq_ignore_ascii_case("warn") {
            return Ok(Self::Warn);
        }

        raw.parse::<f64>()
            .map(Self::Fallback)
            .map_err(|_| ParseZeroDivisionError {
                raw: raw.to_string(),
            })
    }
}

impl fmt::Display for ZeroDivision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warn => f.write_str("warn"),
            Self::Fallback(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Metric {
    R1,
    R13,
    R13Plus,
    R12,
    R123,
    R123Plus,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::R1,
        Metric::R13,
        Metric::R13Plus,
        Metric::R12,
        Metric::R123,
        Metric::R123Plus,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::R1 => "r1",
            Self::R13 => "r13",
            Self::R13Plus => "r13p",
            Self::R12 => "r12",
            Self::R123 => "r123",
            Self::R123Plus => "r123p",
        }
    }

    // The robust/non-robust partition per metric. Categories absent from both
    // sides are irrelevant and excluded from the denominator.
    fn robust(self, counts: &TransitionCounts) -> usize {
        match self {
            Self::R1 | Self::R13 => counts.const_correct,
            Self::R13Plus => counts.const_correct + counts.incorrect_to_correct,
            Self::R12 | Self::R123 => counts.const_correct + counts.const_incorrect,
            Self::R123Plus => {
                counts.const_correct + counts.const_incorrect + counts.incorrect_to_correct
            }
        }
    }

    fn non_robust(self, counts: &TransitionCounts) -> usize {
        match self {
            Self::R1 | Self::R13Plus => counts.correct_to_incorrect,
            Self::R13 => counts.correct_to_incorrect + counts.incorrect_to_correct,
            Self::R12 | Self::R123Plus => {
                counts.correct_to_incorrect + counts.incorrect_to_incorrect
            }
            Self::R123 => {
                counts.correct_to_incorrect
                    + counts.incorrect_to_incorrect
                    + counts.incorrect_to_correct
            }
        }
    }

    pub fn score_counts(self, counts: &TransitionCounts, zero_division: ZeroDivision) -> f64 {
        aggregate(
            self,
            self.robust(counts),
            self.non_robust(counts),
            zero_division,
        )
    }

    pub fn score<Y>(
        self,
        y_true: &[Y],
        y_before: &[Y],
        y_after: &[Y],
        zero_division: ZeroDivision,
    ) -> f64
    where
        Y: PartialEq,
    {
        let counts = TransitionCounts::tally(
            y_true
                .iter()
                .zip(y_before)
                .zip(y_after)
                .map(|((truth, before), after)| (truth, before, after)),
        );
        self.score_counts(&counts, zero_division)
    }

    pub fn score_with_text<Y, X>(
        self,
        y_true: &[Y],
        y_before: &[Y],
        y_after: &[Y],
        x_before: &[X],
        x_after: &[X],
        zero_division: ZeroDivision,
    ) -> f64
    where
        Y: PartialEq,
        X: PartialEq,
    {
        let retained = drop_unchanged_text(y_true, y_before, y_after, x_before, x_after);
        let counts = TransitionCounts::tally(retained);
        self.score_counts(&counts, zero_division)
    }
}

pub fn aggregate(
    metric: Metric,
    robust: usize,
    non_robust: usize,
    zero_division: ZeroDivision,
) -> f64 {
    let denominator = robust + non_robust;
    if denominator == 0 {
        return match zero_division {
            ZeroDivision::Warn => {
                warn!(
                    metric = metric.as_str(),
                    "score ill-defined and being set to 0.0"
                );
                0.0
            }
            ZeroDivision::Fallback(value) => value,
        };
    }

    robust as f64 / denominator as f64
}

// robust: const-C, non-robust: C->I
pub fn r1_score<Y: PartialEq>(
    y_true: &[Y],
    y_before: &[Y],
    y_after: &[Y],
    zero_division: ZeroDivision,
) -> f64 {
    Metric::R1.score(y_true, y_before, y_after, zero_division)
}

// robust: const-C, non-robust: C->I, I->C
pub fn r13_score<Y: PartialEq>(
    y_true: &[Y],
    y_before: &[Y],
    y_after: &[Y],
    zero_division: ZeroDivision,
) -> f64 {
    Metric::R13.score(y_true, y_before, y_after, zero_division)
}

// robust: const-C, I->C, non-robust: C->I
pub fn r13p_score<Y: PartialEq>(
    y_true: &[Y],
    y_before: &[Y],
    y_after: &[Y],
    zero_division: ZeroDivision,
) -> f64 {
    Metric::R13Plus.score(y_true, y_before, y_after, zero_division)
}

// robust: const-C, const-I, non-robust: C->I, I->I
pub fn r12_score<Y: PartialEq>(
    y_true: &[Y],
    y_before: &[Y],
    y_after: &[Y],
    zero_division: ZeroDivision,
) -> f64 {
    Metric::R12.score(y_true, y_before, y_after, zero_division)
}

// robust: const-C, const-I, non-robust: C->I, I->I, I->C
pub fn r123_score<Y: PartialEq>(
    y_true: &[Y],
    y_before: &[Y],
    y_after: &[Y],
    zero_division: ZeroDivision,
) -> f64 {
    Metric::R123.score(y_true, y_before, y_after, zero_division)
}

// robust: const-C, const-I, I->C, non-robust: C->I, I->I
pub fn r123p_score<Y: PartialEq>(
    y_true: &[Y],
    y_before: &[Y],
    y_after: &[Y],
    zero_division: ZeroDivision,
) -> f64 {
    Metric::R123Plus.score(y_true, y_before, y_after, zero_division)
}
