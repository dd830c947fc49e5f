use crate::domain::error::{AppError, Result};
use crate::infrastructure::csv::read_movielist;
use crate::infrastructure::db::movies::MovieRepository;
use std::path::Path;
use std::sync::Arc;
use validator::Validate;

pub struct IngestMoviesUseCase {
    repository: Arc<MovieRepository>,
}

impl IngestMoviesUseCase {
    pub fn new(repository: Arc<MovieRepository>) -> Self {
        Self { repository }
    }

    /// Load the dataset into the movie store. Returns the number of rows
    /// inserted.
    pub async fn execute(&self, path: &Path) -> Result<usize> {
        let movies = read_movielist(path)?;

        let mut inserted = 0;
        let mut winners = 0;
        for mut movie in movies {
            movie.validate().map_err(|e| {
                AppError::ValidationError(format!("Invalid movie {:?}: {}", movie.title, e))
            })?;
            if movie.is_winner() {
                winners += 1;
            }
            self.repository.insert_movie(&mut movie).await?;
            inserted += 1;
        }

        tracing::info!(
            "Loaded {} movies ({} award winners) from {}",
            inserted,
            winners,
            path.display()
        );

        Ok(inserted)
    }
}
