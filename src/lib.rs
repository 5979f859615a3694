mod catalog;
mod config;
mod debounce;
mod engine;
mod filter;
mod review;

pub use catalog::fixtures;
pub use catalog::fixtures::{FixtureRng, MovieDetail};
pub use catalog::{Genre, Movie};
pub use config::{CatalogConfig, ConfigError};
pub use debounce::Debouncer;
pub use engine::{CatalogEngine, CatalogView, ViewStatus};
pub use filter::{
    apply_filters, paginate, FilterState, Page, PageState, DEFAULT_PAGE_SIZE,
    DEFAULT_RATING_RANGE, DEFAULT_YEAR_RANGE,
};
pub use review::{
    InMemoryReviewStore, Review, ReviewDraft, ReviewFeed, ReviewStore, ReviewStoreError,
    SubmitBlocker, SubmitOutcome, MAX_RATING, REVIEW_SUBMITTED, USER_AUTHOR,
};

#[cfg(feature = "runtime")]
pub use debounce::DebounceDriver;

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
