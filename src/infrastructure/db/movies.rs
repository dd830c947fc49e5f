use crate::domain::awards::WinningCredit;
use crate::domain::error::{AppError, Result};
use crate::domain::movie::Movie;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

pub struct MovieRepository {
    pool: SqlitePool,
}

impl MovieRepository {
    pub async fn init(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to parse connection string: {}", e))
            })?
            .create_if_missing(true);

        // An in-memory SQLite database exists per connection, so the pool
        // must hold exactly one and never recycle it.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to connect: {}", e)))?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS movies (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                year INTEGER NOT NULL,
                title TEXT NOT NULL,
                studios TEXT NOT NULL,
                producers TEXT NOT NULL,
                winner TEXT
            )",
        )
        .execute(&pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to create table: {}", e)))?;

        Ok(Self { pool })
    }

    pub async fn insert_movie(&self, movie: &mut Movie) -> Result<()> {
        let result = sqlx::query(
            "INSERT INTO movies (year, title, studios, producers, winner)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(movie.year)
        .bind(&movie.title)
        .bind(&movie.studios)
        .bind(&movie.producers)
        .bind(&movie.winner)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to insert movie: {}", e)))?;

        movie.id = Some(result.last_insert_rowid());
        Ok(())
    }

    pub async fn list_movies(&self) -> Result<Vec<Movie>> {
        sqlx::query_as::<_, MovieEntity>(
            "SELECT id, year, title, studios, producers, winner FROM movies ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch movies: {}", e)))
        .map(|entities| entities.into_iter().map(|e| e.into()).collect())
    }

    pub async fn get_movie(&self, id: i64) -> Result<Option<Movie>> {
        sqlx::query_as::<_, MovieEntity>(
            "SELECT id, year, title, studios, producers, winner FROM movies WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch movie: {}", e)))
        .map(|entity| entity.map(|e| e.into()))
    }

    pub async fn list_winning_credits(&self) -> Result<Vec<WinningCredit>> {
        sqlx::query_as::<_, CreditEntity>(
            "SELECT year, producers FROM movies WHERE winner = 'yes' ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch winners: {}", e)))
        .map(|entities| entities.into_iter().map(|e| e.into()).collect())
    }

    pub async fn count_movies(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM movies")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to count movies: {}", e)))
    }
}

// Internal entities for database mapping
#[derive(sqlx::FromRow)]
struct MovieEntity {
    id: i64,
    year: i64,
    title: String,
    studios: String,
    producers: String,
    winner: Option<String>,
}

impl From<MovieEntity> for Movie {
    fn from(e: MovieEntity) -> Self {
        Self {
            id: Some(e.id),
            year: e.year,
            title: e.title,
            studios: e.studios,
            producers: e.producers,
            winner: e.winner,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CreditEntity {
    year: i64,
    producers: String,
}

impl From<CreditEntity> for WinningCredit {
    fn from(e: CreditEntity) -> Self {
        Self {
            year: e.year,
            producers: e.producers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repository_with_fixtures() -> MovieRepository {
        let repository = MovieRepository::init("sqlite::memory:").await.unwrap();
        let rows = [
            (1980, "Can't Stop the Music", "Associated Film Distribution", "Allan Carr", Some("yes")),
            (1980, "Cruising", "Lorimar Productions, United Artists", "Jerry Weintraub", None),
            (1981, "Mommie Dearest", "Paramount Pictures", "Frank Yablans", Some("yes")),
            (1984, "Bolero", "Cannon Films", "Bo Derek", Some("yes")),
            (1990, "Ghosts Can't Do It", "Triumph Releasing", "Bo Derek", Some("yes")),
        ];
        for (year, title, studios, producers, winner) in rows {
            let mut movie = Movie::new(
                year,
                title.to_string(),
                studios.to_string(),
                producers.to_string(),
                winner.map(str::to_string),
            );
            repository.insert_movie(&mut movie).await.unwrap();
        }
        repository
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repository = MovieRepository::init("sqlite::memory:").await.unwrap();
        let mut first = Movie::new(
            1980,
            "Xanadu".to_string(),
            "Universal Studios".to_string(),
            "Lawrence Gordon".to_string(),
            None,
        );
        let mut second = first.clone();
        repository.insert_movie(&mut first).await.unwrap();
        repository.insert_movie(&mut second).await.unwrap();
        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
    }

    #[tokio::test]
    async fn test_list_returns_rows_in_insertion_order() {
        let repository = repository_with_fixtures().await;
        let movies = repository.list_movies().await.unwrap();
        assert_eq!(movies.len(), 5);
        assert_eq!(movies[0].title, "Can't Stop the Music");
        assert_eq!(movies[4].title, "Ghosts Can't Do It");
        assert_eq!(repository.count_movies().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_get_absent_movie_is_none() {
        let repository = repository_with_fixtures().await;
        assert!(repository.get_movie(999).await.unwrap().is_none());

        let found = repository.get_movie(3).await.unwrap().unwrap();
        assert_eq!(found.title, "Mommie Dearest");
    }

    #[tokio::test]
    async fn test_winning_credits_filter_out_nominees() {
        let repository = repository_with_fixtures().await;
        let credits = repository.list_winning_credits().await.unwrap();
        let producers: Vec<&str> = credits.iter().map(|c| c.producers.as_str()).collect();
        assert_eq!(
            producers,
            vec!["Allan Carr", "Frank Yablans", "Bo Derek", "Bo Derek"]
        );
    }
}
