//! Reviews - User reviews on the movie detail page.
//!
//! Saved reviews live in an injected [`ReviewStore`] as JSON entries. A
//! [`ReviewFeed`] merges them with the reviews shipped with the movie and
//! enforces one review per user; a [`ReviewDraft`] is the form state.
//!
//! ## Example
//!
//! ```ignore
//! use kinoteka::{fixtures, InMemoryReviewStore, ReviewFeed};
//!
//! let store = InMemoryReviewStore::new();
//! let detail = fixtures::sample_detail("18.10.2026");
//! let mut feed = ReviewFeed::load(detail.reviews, store.clone())?;
//!
//! feed.submit("Шедевр", 5)?;
//! assert!(feed.has_user_reviewed());
//! ```

mod draft;
mod error;
mod feed;
mod store;

use serde::{Deserialize, Serialize};

pub use draft::{ReviewDraft, SubmitBlocker};
pub use error::ReviewStoreError;
pub use feed::{ReviewFeed, SubmitOutcome, REVIEW_SUBMITTED};
pub use store::{InMemoryReviewStore, ReviewStore};

/// Author name every review written through the form is saved under.
pub const USER_AUTHOR: &str = "Пользователь";

/// Highest star rating.
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: u64,
    pub author: String,
    pub rating: u8,
    pub text: String,
    pub avatar: String,
    pub date: String,
}

impl Review {
    pub fn is_by_user(&self) -> bool {
        self.author == USER_AUTHOR
    }

    pub fn to_entry(&self) -> Result<String, ReviewStoreError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_entry(entry: &str) -> Result<Review, ReviewStoreError> {
        Ok(serde_json::from_str(entry)?)
    }
}
