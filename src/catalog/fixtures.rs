//! Seeded fixture data for the catalog and detail pages.
//!
//! The same seed always yields the same collection, so tests and demo
//! sessions are reproducible.

use super::{Genre, Movie};
use crate::review::Review;

/// Small deterministic generator (SplitMix64).
#[derive(Debug, Clone)]
pub struct FixtureRng {
    state: u64,
}

impl FixtureRng {
    pub fn new(seed: u64) -> Self {
        FixtureRng { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in `[0, bound)`. A zero bound yields 0.
    pub fn below(&mut self, bound: u64) -> u64 {
        self.next_u64().checked_rem(bound).unwrap_or(0)
    }
}

/// Generate `count` catalog movies with ids `1..=count`.
///
/// Years fall in 2020..=2023, ratings in 3.0..=5.0 rounded to one decimal.
pub fn generate_movies(seed: u64, count: usize) -> Vec<Movie> {
    let mut rng = FixtureRng::new(seed);

    (0..count)
        .map(|i| {
            let id = i as u64 + 1;
            let year = 2020 + rng.below(4) as i32;
            let rating = round_tenth(3.0 + rng.next_f64() * 2.0);
            let genre = Genre::ALL[rng.below(Genre::ALL.len() as u64) as usize];

            Movie::new(id, format!("Фильм {}", id), year, rating, genre)
                .with_image(format!("https://picsum.photos/300/450?random={}", i))
        })
        .collect()
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Everything the movie detail page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetail {
    pub movie: Movie,
    pub director: String,
    pub description: String,
    pub cast: Vec<String>,
    /// Reviews shipped with the movie, before any user submissions.
    pub reviews: Vec<Review>,
}

/// The detail page fixture. `date` is stamped on the seed reviews.
pub fn sample_detail(date: &str) -> MovieDetail {
    MovieDetail {
        movie: Movie::new(1, "Inception", 2010, 4.8, Genre::SciFi)
            .with_image("https://picsum.photos/800/500?random=1"),
        director: "Кристофер Нолан".to_string(),
        description: "\"Inception\" - захватывающий научно-фантастический триллер о мире \
                      осознанных сновидений. Доминик Кобб, вор, извлекающий секреты из \
                      подсознания спящих, получает шанс вернуться к нормальной жизни, если \
                      сумеет не украсть идею, а внедрить её."
            .to_string(),
        cast: vec![
            "Леонардо ДиКаприо".to_string(),
            "Эллен Пейдж".to_string(),
            "Том Харди".to_string(),
            "Джозеф Гордон-Левитт".to_string(),
        ],
        reviews: vec![
            Review {
                id: 1,
                author: "Алексей".to_string(),
                rating: 5,
                text: "Потрясающий фильм, который заставляет задуматься о природе \
                       реальности. Визуальные эффекты и сюжет просто великолепны!"
                    .to_string(),
                avatar: "https://picsum.photos/50/50?random=1".to_string(),
                date: date.to_string(),
            },
            Review {
                id: 2,
                author: "Мария".to_string(),
                rating: 4,
                text: "Сложный для понимания, но очень интересный фильм. Пересматривала \
                       несколько раз, каждый раз открывая что-то новое."
                    .to_string(),
                avatar: "https://picsum.photos/50/50?random=2".to_string(),
                date: date.to_string(),
            },
        ],
    }
}
