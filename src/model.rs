use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetFile {
    pub y_true: Vec<String>,
    pub y_before: Vec<String>,
    pub y_after: Vec<String>,
    #[serde(default)]
    pub x_before: Option<Vec<String>>,
    #[serde(default)]
    pub x_after: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransitionBreakdown {
    pub const_correct: usize,
    pub const_incorrect: usize,
    pub correct_to_incorrect: usize,
    pub incorrect_to_incorrect: usize,
    pub incorrect_to_correct: usize,
    pub unchanged_labels: usize,
    pub changed_labels: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricScores {
    pub r1: f64,
    pub r13: f64,
    pub r13p: f64,
    pub r12: f64,
    pub r123: f64,
    pub r123p: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub dataset_path: String,
    pub sample_count: usize,
    pub scored_sample_count: usize,
    pub text_filter_applied: bool,
    pub zero_division: String,
    pub transitions: TransitionBreakdown,
    pub scores: MetricScores,
}
