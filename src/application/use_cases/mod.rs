pub mod award_intervals;
pub mod ingest_movies;
