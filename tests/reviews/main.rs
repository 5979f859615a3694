//! Integration tests for review submission over a shared review log.

use std::time::{Duration, Instant};

use kinoteka::{
    fixtures, CatalogConfig, InMemoryReviewStore, Review, ReviewDraft, ReviewFeed, ReviewStore,
    SubmitBlocker, SubmitOutcome, USER_AUTHOR,
};

const TODAY: &str = "18.10.2026";

// =============================================================================
// Detail page flow
// =============================================================================

#[test]
fn detail_page_review_flow() {
    let config = CatalogConfig::default();
    let detail = fixtures::sample_detail(TODAY);
    let store = InMemoryReviewStore::new();

    let mut feed = ReviewFeed::load(detail.reviews.clone(), store.clone()).unwrap();
    let mut draft = ReviewDraft::new(config.review_debounce());
    let t0 = Instant::now();

    assert_eq!(feed.reviews().len(), 2);
    assert_eq!(
        draft.blocker(feed.has_user_reviewed()),
        Some(SubmitBlocker::MissingTextAndRating)
    );

    draft.input("Сон", t0);
    draft.input("Сон во сне", t0 + Duration::from_millis(100));
    assert!(draft.tick(t0 + Duration::from_millis(400)));
    assert_eq!(draft.committed_text(), "Сон во сне");
    assert_eq!(
        draft.blocker(feed.has_user_reviewed()),
        Some(SubmitBlocker::MissingRating)
    );

    draft.set_rating(5);
    assert_eq!(draft.blocker(feed.has_user_reviewed()), None);

    let outcome = feed.submit_draft(&mut draft).unwrap();
    let SubmitOutcome::Submitted(review) = outcome else {
        panic!("expected the review to be submitted");
    };

    assert_eq!(review.author, USER_AUTHOR);
    assert_eq!(review.text, "Сон во сне");
    assert_eq!(review.rating, 5);
    assert_eq!(feed.reviews().len(), 3);
    assert_eq!(feed.reviews()[0], review);
    assert_eq!(draft.text(), "");
    assert_eq!(
        draft.blocker(feed.has_user_reviewed()),
        Some(SubmitBlocker::AlreadyReviewed)
    );
    assert_eq!(store.len().unwrap(), 1);
}

#[test]
fn second_view_sees_the_shared_log() {
    let detail = fixtures::sample_detail(TODAY);
    let store = InMemoryReviewStore::new();

    let mut first = ReviewFeed::load(detail.reviews.clone(), store.clone()).unwrap();
    let mut second = ReviewFeed::load(detail.reviews.clone(), store.clone()).unwrap();

    assert!(first.submit("Пересмотрю ещё раз", 4).unwrap().is_submitted());

    // no manual refresh: submit re-reads the shared log
    assert_eq!(
        second.submit("Ещё один", 3).unwrap(),
        SubmitOutcome::Rejected(SubmitBlocker::AlreadyReviewed)
    );
    assert!(second.has_user_reviewed());
    assert_eq!(second.reviews().len(), 3);
    assert_eq!(second.reviews()[0].text, "Пересмотрю ещё раз");
    assert_eq!(store.len().unwrap(), 1);

    let user_entries = store
        .entries()
        .unwrap()
        .iter()
        .filter_map(|entry| Review::from_entry(entry).ok())
        .filter(Review::is_by_user)
        .count();
    assert_eq!(user_entries, 1);
}

#[test]
fn reload_orders_saved_reviews_newest_first() {
    let older = Review {
        id: 100,
        author: "Гость".to_string(),
        rating: 3,
        text: "Старый отзыв".to_string(),
        avatar: String::new(),
        date: TODAY.to_string(),
    };
    let newer = Review {
        id: 200,
        text: "Новый отзыв".to_string(),
        ..older.clone()
    };
    let store = InMemoryReviewStore::with_entries(vec![
        older.to_entry().unwrap(),
        "garbage".to_string(),
        newer.to_entry().unwrap(),
    ]);

    let detail = fixtures::sample_detail(TODAY);
    let feed = ReviewFeed::load(detail.reviews.clone(), store).unwrap();
    let ids: Vec<u64> = feed.reviews().iter().map(|r| r.id).collect();

    assert_eq!(ids, vec![200, 100, 1, 2]);
}

#[test]
fn saved_user_review_blocks_resubmission_after_reload() {
    let mine = Review {
        id: 5,
        author: USER_AUTHOR.to_string(),
        rating: 4,
        text: "Мой отзыв".to_string(),
        avatar: String::new(),
        date: TODAY.to_string(),
    };
    let store = InMemoryReviewStore::with_entries(vec![mine.to_entry().unwrap()]);

    let mut feed = ReviewFeed::load(Vec::new(), store.clone()).unwrap();
    assert!(feed.has_user_reviewed());
    assert!(!feed.submit("Снова", 5).unwrap().is_submitted());
    assert_eq!(store.len().unwrap(), 1);
}

// =============================================================================
// Listeners
// =============================================================================

#[cfg(feature = "emitter")]
#[test]
fn listeners_receive_submitted_reviews() {
    use std::sync::mpsc;

    let mut feed = ReviewFeed::load(Vec::new(), InMemoryReviewStore::new()).unwrap();

    let (tx, rx) = mpsc::channel();
    feed.on_submitted(move |entry: String| {
        tx.send(entry).unwrap();
    });

    assert!(!feed.submit("", 5).unwrap().is_submitted());
    assert!(feed.submit("Звук отправки", 5).unwrap().is_submitted());

    let entry = rx.recv_timeout(Duration::from_secs(1)).unwrap();
    let review = Review::from_entry(&entry).unwrap();
    assert_eq!(review.text, "Звук отправки");
    assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
}
