//! Catalog - Movie records and the fixed genre set.
//!
//! Movies are immutable once generated and the collection is fixed for the
//! lifetime of a session. "Genre" is the one name used for the category a
//! movie belongs to.
//!
//! ## Example
//!
//! ```ignore
//! use kinoteka::{fixtures, Genre};
//!
//! let movies = fixtures::generate_movies(42, 20);
//! let dramas = movies.iter().filter(|m| m.genre == Genre::Drama).count();
//! ```

pub mod fixtures;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six genres a movie can belong to.
///
/// Serialized and displayed with their Russian labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Genre {
    #[serde(rename = "Боевик")]
    Action,
    #[serde(rename = "Драма")]
    Drama,
    #[serde(rename = "Комедия")]
    Comedy,
    #[serde(rename = "Триллер")]
    Thriller,
    #[serde(rename = "Ужасы")]
    Horror,
    #[serde(rename = "Фантастика")]
    SciFi,
}

impl Genre {
    /// Every genre, in the order the genre picker lists them.
    pub const ALL: [Genre; 6] = [
        Genre::Action,
        Genre::Drama,
        Genre::Comedy,
        Genre::Thriller,
        Genre::Horror,
        Genre::SciFi,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Genre::Action => "Боевик",
            Genre::Drama => "Драма",
            Genre::Comedy => "Комедия",
            Genre::Thriller => "Триллер",
            Genre::Horror => "Ужасы",
            Genre::SciFi => "Фантастика",
        }
    }

    /// Look a genre up by its display label.
    pub fn from_label(label: &str) -> Option<Genre> {
        Genre::ALL.into_iter().find(|genre| genre.label() == label)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub year: i32,
    /// Average rating on a 0..=5 scale, one decimal place.
    pub rating: f64,
    pub genre: Genre,
    pub image: String,
}

impl Movie {
    pub fn new(id: u64, title: impl Into<String>, year: i32, rating: f64, genre: Genre) -> Self {
        Movie {
            id,
            title: title.into(),
            year,
            rating,
            genre,
            image: String::new(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}
