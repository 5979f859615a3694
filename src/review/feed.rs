use std::time::{SystemTime, UNIX_EPOCH};

#[cfg(feature = "emitter")]
use event_emitter_rs::EventEmitter;

use super::draft::{ReviewDraft, SubmitBlocker};
use super::error::ReviewStoreError;
use super::store::ReviewStore;
use super::{Review, MAX_RATING, USER_AUTHOR};

/// Event name listeners receive after a successful submission.
pub const REVIEW_SUBMITTED: &str = "ReviewSubmitted";

/// Result of a submission attempt. A rejection appends nothing to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted(Review),
    Rejected(SubmitBlocker),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}

/// The review list shown on a movie's detail page.
///
/// Visible order is newest first: saved entries from the store, latest
/// first, followed by the reviews shipped with the movie.
pub struct ReviewFeed<S: ReviewStore> {
    store: S,
    seed: Vec<Review>,
    visible: Vec<Review>,
    has_user_reviewed: bool,
    #[cfg(feature = "emitter")]
    emitter: EventEmitter,
}

impl<S: ReviewStore> ReviewFeed<S> {
    /// Build the feed from the movie's own reviews and the shared log.
    pub fn load(seed: Vec<Review>, store: S) -> Result<Self, ReviewStoreError> {
        let mut feed = ReviewFeed {
            store,
            seed,
            visible: Vec::new(),
            has_user_reviewed: false,
            #[cfg(feature = "emitter")]
            emitter: EventEmitter::new(),
        };
        feed.refresh()?;
        Ok(feed)
    }

    /// Re-read the log, e.g. after another view appended to it.
    ///
    /// Entries that fail to parse are skipped.
    pub fn refresh(&mut self) -> Result<(), ReviewStoreError> {
        let entries = self.store.entries()?;
        let mut saved = Vec::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            match Review::from_entry(entry) {
                Ok(review) => saved.push(review),
                Err(err) => {
                    tracing::warn!(position, error = %err, "skipping malformed review entry");
                }
            }
        }

        self.has_user_reviewed = saved.iter().any(Review::is_by_user);
        self.visible = saved.into_iter().rev().chain(self.seed.iter().cloned()).collect();
        Ok(())
    }

    pub fn reviews(&self) -> &[Review] {
        &self.visible
    }

    pub fn has_user_reviewed(&self) -> bool {
        self.has_user_reviewed
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Submit a review as the synthetic user.
    ///
    /// The log is re-read first, so a review saved through another view
    /// sharing the store counts. Empty text, a zero rating, or an earlier
    /// submission by the user make this a no-op that reports the reason.
    pub fn submit(&mut self, text: &str, rating: u8) -> Result<SubmitOutcome, ReviewStoreError> {
        self.refresh()?;
        if let Some(blocker) = SubmitBlocker::check(text, rating, self.has_user_reviewed) {
            tracing::debug!(reason = ?blocker, "review submission rejected");
            return Ok(SubmitOutcome::Rejected(blocker));
        }

        let id = self.next_id();
        let review = Review {
            id,
            author: USER_AUTHOR.to_string(),
            rating: rating.min(MAX_RATING),
            text: text.to_string(),
            avatar: format!("https://picsum.photos/50/50?random={}", id),
            date: chrono::Local::now().format("%d.%m.%Y").to_string(),
        };

        let entry = review.to_entry()?;
        self.store.append(entry.clone())?;
        self.visible.insert(0, review.clone());
        self.has_user_reviewed = true;

        tracing::info!(id = review.id, rating = review.rating, "review submitted");
        self.emit_submitted(entry);

        Ok(SubmitOutcome::Submitted(review))
    }

    /// Submit the draft's current text and rating; clears the draft on success.
    pub fn submit_draft(
        &mut self,
        draft: &mut ReviewDraft,
    ) -> Result<SubmitOutcome, ReviewStoreError> {
        let outcome = self.submit(draft.text(), draft.rating())?;
        if outcome.is_submitted() {
            draft.clear();
        }
        Ok(outcome)
    }

    /// Register a listener that receives each submitted review as JSON.
    #[cfg(feature = "emitter")]
    pub fn on_submitted<F>(&mut self, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(REVIEW_SUBMITTED, listener);
    }

    #[cfg(feature = "emitter")]
    fn emit_submitted(&mut self, entry: String) {
        self.emitter.emit(REVIEW_SUBMITTED, entry);
    }

    #[cfg(not(feature = "emitter"))]
    fn emit_submitted(&mut self, _entry: String) {}

    /// Millisecond timestamp, bumped past every id already shown.
    fn next_id(&self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or_default();
        let highest = self.visible.iter().map(|review| review.id).max().unwrap_or(0);
        now.max(highest.saturating_add(1))
    }
}
