pub fn drop_unchanged_text<'a, Y, X>(
    y_true: &'a [Y],
    y_before: &'a [Y],
    y_after: &'a [Y],
    x_before: &[X],
    x_after: &[X],
) -> Vec<(&'a Y, &'a Y, &'a Y)>
where
    X: PartialEq,
{
    // Positional pairing: mismatched lengths truncate to the shortest input.
    y_true
        .iter()
        .zip(y_before)
        .zip(y_after)
        .zip(x_before)
        .zip(x_after)
        .filter(|&((_, before_text), after_text)| before_text != after_text)
        .map(|((((truth, before), after), _), _)| (truth, before, after))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::drop_unchanged_text;

    #[test]
    fn retains_only_samples_whose_text_changed() {
        let y_true = ["Inform", "Request", "Deny"];
        let y_before = ["Inform", "Request", "Deny"];
        let y_after = ["Inform", "Confirm", "Deny"];
        let x_before = ["turn it on", "play some jazz", "stop"];
        let x_after = ["turn it on", "play sum jazz", "stop"];

        let retained = drop_unchanged_text(&y_true, &y_before, &y_after, &x_before, &x_after);
        assert_eq!(retained, vec![(&"Request", &"Request", &"Confirm")]);
    }

    #[test]
    fn identical_texts_drop_every_sample() {
        let y_true = ["Inform", "Request"];
        let y_before = ["Request", "Request"];
        let y_after = ["Inform", "Confirm"];
        let texts = ["a", "b"];

        let retained = drop_unchanged_text(&y_true, &y_before, &y_after, &texts, &texts);
        assert!(retained.is_empty());
    }

    #[test]
    fn mismatched_lengths_truncate_to_shortest() {
        let y_true = ["Inform", "Request", "Deny"];
        let y_before = ["Inform", "Request", "Deny"];
        let y_after = ["Inform", "Confirm", "Confirm"];
        let x_before = ["a", "b"];
        let x_after = ["x", "y", "z"];

        let retained = drop_unchanged_text(&y_true, &y_before, &y_after, &x_before, &x_after);
        assert_eq!(
            retained,
            vec![
                (&"Inform", &"Inform", &"Inform"),
                (&"Request", &"Request", &"Confirm"),
            ]
        );
    }
}
