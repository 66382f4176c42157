#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Transition {
    ConstCorrect,
    ConstIncorrect,
    CorrectToIncorrect,
    IncorrectToIncorrect,
    IncorrectToCorrect,
}

impl Transition {
    pub fn classify<T: PartialEq>(truth: &T, before: &T, after: &T) -> Self {
        match (before == truth, after == truth) {
            (true, true) => Self::ConstCorrect,
            (true, false) => Self::CorrectToIncorrect,
            (false, true) => Self::IncorrectToCorrect,
            (false, false) if before == after => Self::ConstIncorrect,
            (false, false) => Self::IncorrectToIncorrect,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ConstCorrect => "const_correct",
            Self::ConstIncorrect => "const_incorrect",
            Self::CorrectToIncorrect => "correct_to_incorrect",
            Self::IncorrectToIncorrect => "incorrect_to_incorrect",
            Self::IncorrectToCorrect => "incorrect_to_correct",
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct TransitionCounts {
    pub const_correct: usize,
    pub const_incorrect: usize,
    pub correct_to_incorrect: usize,
    pub incorrect_to_incorrect: usize,
    pub incorrect_to_correct: usize,
}

impl TransitionCounts {
    pub fn tally<'a, T, I>(samples: I) -> Self
    where
        T: PartialEq + 'a,
        I: IntoIterator<Item = (&'a T, &'a T, &'a T)>,
    {
        let mut counts = Self::default();
        for (truth, before, after) in samples {
            counts.record(Transition::classify(truth, before, after));
        }
        counts
    }

    pub fn record(&mut self, transition: Transition) {
        match transition {
            Transition::ConstCorrect => self.const_correct += 1,
            Transition::ConstIncorrect => self.const_incorrect += 1,
            Transition::CorrectToIncorrect => self.correct_to_incorrect += 1,
            Transition::IncorrectToIncorrect => self.incorrect_to_incorrect += 1,
            Transition::IncorrectToCorrect => self.incorrect_to_correct += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.const_correct
            + self.const_incorrect
            + self.correct_to_incorrect
            + self.incorrect_to_incorrect
            + self.incorrect_to_correct
    }
}
