use serde::{Deserialize, Serialize};
use validator::Validate;

/// A nominated film as loaded from the movie list dataset.
///
/// `winner` carries the raw dataset flag: `Some("yes")` marks an award
/// winner, anything else (empty column included) a plain nominee.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Movie {
    pub id: Option<i64>,
    #[validate(range(min = 1900, max = 2100))]
    pub year: i64,
    #[validate(length(min = 1))]
    pub title: String,
    pub studios: String,
    pub producers: String,
    pub winner: Option<String>,
}

impl Movie {
    pub fn new(
        year: i64,
        title: String,
        studios: String,
        producers: String,
        winner: Option<String>,
    ) -> Self {
        Self {
            id: None,
            year,
            title,
            studios,
            producers,
            winner,
        }
    }

    pub fn is_winner(&self) -> bool {
        self.winner.as_deref() == Some("yes")
    }
}
