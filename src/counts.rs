use crate::transition::TransitionCounts;

fn tally<T: PartialEq>(y_true: &[T], y_before: &[T], y_after: &[T]) -> TransitionCounts {
    TransitionCounts::tally(
        y_true
            .iter()
            .zip(y_before)
            .zip(y_after)
            .map(|((truth, before), after)| (truth, before, after)),
    )
}

pub fn const_correct_count<T: PartialEq>(y_true: &[T], y_before: &[T], y_after: &[T]) -> usize {
    tally(y_true, y_before, y_after).const_correct
}

pub fn const_incorrect_count<T: PartialEq>(y_true: &[T], y_before: &[T], y_after: &[T]) -> usize {
    tally(y_true, y_before, y_after).const_incorrect
}

pub fn correct_to_incorrect_count<T: PartialEq>(
    y_true: &[T],
    y_before: &[T],
    y_after: &[T],
) -> usize {
    tally(y_true, y_before, y_after).correct_to_incorrect
}

pub fn incorrect_to_incorrect_count<T: PartialEq>(
    y_true: &[T],
    y_before: &[T],
    y_after: &[T],
) -> usize {
    tally(y_true, y_before, y_after).incorrect_to_incorrect
}

pub fn incorrect_to_correct_count<T: PartialEq>(
    y_true: &[T],
    y_before: &[T],
    y_after: &[T],
) -> usize {
    tally(y_true, y_before, y_after).incorrect_to_correct
}

// Label stability regardless of ground truth.
pub fn const_count<T: PartialEq>(y_before: &[T], y_after: &[T]) -> usize {
    y_before
        .iter()
        .zip(y_after)
        .filter(|(before, after)| before == after)
        .count()
}

pub fn change_count<T: PartialEq>(y_before: &[T], y_after: &[T]) -> usize {
    y_before
        .iter()
        .zip(y_after)
        .filter(|(before, after)| before != after)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const Y_TRUE: [&str; 5] = ["Inform", "Request", "Inform", "Deny", "Deny"];
    const Y_BEFORE: [&str; 5] = ["Inform", "Request", "Request", "Inform", "Inform"];
    const Y_AFTER: [&str; 5] = ["Inform", "Confirm", "Confirm", "Inform", "Deny"];

    #[test]
    fn per_category_counts_agree_with_classification() {
        assert_eq!(const_correct_count(&Y_TRUE, &Y_BEFORE, &Y_AFTER), 1);
        assert_eq!(correct_to_incorrect_count(&Y_TRUE, &Y_BEFORE, &Y_AFTER), 1);
        assert_eq!(incorrect_to_incorrect_count(&Y_TRUE, &Y_BEFORE, &Y_AFTER), 1);
        assert_eq!(const_incorrect_count(&Y_TRUE, &Y_BEFORE, &Y_AFTER), 1);
        assert_eq!(incorrect_to_correct_count(&Y_TRUE, &Y_BEFORE, &Y_AFTER), 1);
    }

    #[test]
    fn const_and_change_counts_split_the_dataset() {
        assert_eq!(const_count(&Y_BEFORE, &Y_AFTER), 2);
        assert_eq!(change_count(&Y_BEFORE, &Y_AFTER), 3);
        assert_eq!(
            const_count(&Y_BEFORE, &Y_AFTER) + change_count(&Y_BEFORE, &Y_AFTER),
            Y_BEFORE.len()
        );
    }

    #[test]
    fn mismatched_lengths_truncate_to_shortest() {
        let y_before = ["Inform", "Request", "Deny"];
        let y_after = ["Inform", "Confirm"];
        assert_eq!(const_count(&y_before, &y_after), 1);
        assert_eq!(change_count(&y_before, &y_after), 1);
    }
}
