use std::fs;

use anyhow::{Context, Result};
use tracing::{info, warn};

use btrobust::{Metric, TransitionCounts, change_count, const_count, drop_unchanged_text};

use crate::cli::ScoreArgs;
use crate::model::{DatasetFile, MetricScores, ScoreReport, TransitionBreakdown};
use crate::util::write_json_pretty;

pub fn run(args: ScoreArgs) -> Result<()> {
    let raw = fs::read(&args.dataset_path)
        .with_context(|| format!("failed to read dataset: {}", args.dataset_path.display()))?;
    let dataset: DatasetFile = serde_json::from_slice(&raw)
        .with_context(|| format!("failed to parse dataset: {}", args.dataset_path.display()))?;

    let sample_count = dataset
        .y_true
        .len()
        .min(dataset.y_before.len())
        .min(dataset.y_after.len());
    if dataset.y_true.len() != sample_count
        || dataset.y_before.len() != sample_count
        || dataset.y_after.len() != sample_count
    {
        warn!(
            y_true = dataset.y_true.len(),
            y_before = dataset.y_before.len(),
            y_after = dataset.y_after.len(),
            "label arrays differ in length, pairing truncates to the shortest"
        );
    }

    let text_filter_applied = match (&dataset.x_before, &dataset.x_after) {
        (Some(_), Some(_)) => true,
        (None, None) => false,
        _ => {
            warn!("only one of x_before/x_after supplied, text filter disabled");
            false
        }
    };

    let retained: Vec<(&String, &String, &String)> = if text_filter_applied {
        let x_before = dataset.x_before.as_deref().unwrap_or_default();
        let x_after = dataset.x_after.as_deref().unwrap_or_default();
        drop_unchanged_text(
            &dataset.y_true,
            &dataset.y_before,
            &dataset.y_after,
            x_before,
            x_after,
        )
    } else {
        dataset
            .y_true
            .iter()
            .zip(&dataset.y_before)
            .zip(&dataset.y_after)
            .map(|((truth, before), after)| (truth, before, after))
            .collect()
    };

    let scored_sample_count = retained.len();
    let counts = TransitionCounts::tally(retained);

    info!(
        dataset = %args.dataset_path.display(),
        sample_count,
        scored_sample_count,
        text_filter_applied,
        unchanged_labels = const_count(&dataset.y_before, &dataset.y_after),
        changed_labels = change_count(&dataset.y_before, &dataset.y_after),
        "dataset loaded"
    );

    let scores = MetricScores {
        r1: Metric::R1.score_counts(&counts, args.zero_division),
        r13: Metric::R13.score_counts(&counts, args.zero_division),
        r13p: Metric::R13Plus.score_counts(&counts, args.zero_division),
        r12: Metric::R12.score_counts(&counts, args.zero_division),
        r123: Metric::R123.score_counts(&counts, args.zero_division),
        r123p: Metric::R123Plus.score_counts(&counts, args.zero_division),
    };

    info!(
        r1 = scores.r1,
        r13 = scores.r13,
        r13p = scores.r13p,
        r12 = scores.r12,
        r123 = scores.r123,
        r123p = scores.r123p,
        "robustness scores computed"
    );

    let report = ScoreReport {
        dataset_path: args.dataset_path.display().to_string(),
        sample_count,
        scored_sample_count,
        text_filter_applied,
        zero_division: args.zero_division.to_string(),
        transitions: TransitionBreakdown {
            const_correct: counts.const_correct,
            const_incorrect: counts.const_incorrect,
            correct_to_incorrect: counts.correct_to_incorrect,
            incorrect_to_incorrect: counts.incorrect_to_incorrect,
            incorrect_to_correct: counts.incorrect_to_correct,
            unchanged_labels: counts.const_correct + counts.const_incorrect,
            changed_labels: counts.correct_to_incorrect
                + counts.incorrect_to_incorrect
                + counts.incorrect_to_correct,
        },
        scores,
    };

    if let Some(report_path) = &args.report_path {
        write_json_pretty(report_path, &report)?;
        info!(report = %report_path.display(), "score report written");
    }

    if args.json {
        let rendered = serde_json::to_string_pretty(&report)
            .context("failed to render score report as json")?;
        println!("{rendered}");
    }

    Ok(())
}
