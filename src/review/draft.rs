use std::fmt;
use std::time::{Duration, Instant};

use crate::debounce::Debouncer;

/// Why the submit button is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocker {
    AlreadyReviewed,
    MissingTextAndRating,
    MissingText,
    MissingRating,
}

impl SubmitBlocker {
    /// First reason a submission with this input must be rejected, if any.
    pub fn check(text: &str, rating: u8, has_reviewed: bool) -> Option<SubmitBlocker> {
        let missing_text = text.trim().is_empty();
        let missing_rating = rating == 0;

        if has_reviewed {
            Some(SubmitBlocker::AlreadyReviewed)
        } else if missing_text && missing_rating {
            Some(SubmitBlocker::MissingTextAndRating)
        } else if missing_text {
            Some(SubmitBlocker::MissingText)
        } else if missing_rating {
            Some(SubmitBlocker::MissingRating)
        } else {
            None
        }
    }

    /// Tooltip shown over the disabled button.
    pub fn hint(&self) -> &'static str {
        match self {
            SubmitBlocker::AlreadyReviewed => "Вы уже оставили отзыв",
            SubmitBlocker::MissingTextAndRating => "Введите комментарий и поставьте оценку",
            SubmitBlocker::MissingText => "Введите комментарий",
            SubmitBlocker::MissingRating => "Поставьте оценку",
        }
    }
}

impl fmt::Display for SubmitBlocker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hint())
    }
}

/// Review form state.
///
/// The text field echoes every keystroke and is what gets validated and
/// submitted. The committed copy follows it through a debouncer and is the
/// value a host persists as the unsent draft, so saving does not run on
/// every keystroke.
#[derive(Debug)]
pub struct ReviewDraft {
    text: String,
    committed: String,
    rating: u8,
    debouncer: Debouncer<String>,
}

impl ReviewDraft {
    pub fn new(quiet: Duration) -> Self {
        ReviewDraft {
            text: String::new(),
            committed: String::new(),
            rating: 0,
            debouncer: Debouncer::new(quiet),
        }
    }

    pub fn input(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        self.debouncer.push(text.clone(), now);
        self.text = text;
    }

    /// Commit the debounced text if its quiet period is over.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(text) => {
                self.committed = text;
                true
            }
            None => false,
        }
    }

    /// Star rating, clamped to `0..=5`. Zero means "not rated".
    pub fn set_rating(&mut self, rating: u8) {
        self.rating = rating.min(super::MAX_RATING);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Debounced copy of the text, for persisting the draft between visits.
    pub fn committed_text(&self) -> &str {
        &self.committed
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn blocker(&self, has_reviewed: bool) -> Option<SubmitBlocker> {
        SubmitBlocker::check(&self.text, self.rating, has_reviewed)
    }

    pub fn clear(&mut self) {
        self.debouncer.cancel();
        self.text.clear();
        self.committed.clear();
        self.rating = 0;
    }
}
