pub mod counts;
pub mod filter;
pub mod score;
pub mod transition;

pub use counts::{
    change_count, const_correct_count, const_count, const_incorrect_count,
    correct_to_incorrect_count, incorrect_to_correct_count, incorrect_to_incorrect_count,
};
pub use filter::drop_unchanged_text;
pub use score::{
    Metric, ParseZeroDivisionError, ZeroDivision, aggregate, r1_score, r12_score, r13_score,
    r13p_score, r123_score, r123p_score,
};
pub use transition::{Transition, TransitionCounts};
