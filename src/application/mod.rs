pub mod use_cases;

pub use use_cases::award_intervals::{analyze_award_intervals, split_producer_credits};
pub use use_cases::ingest_movies::IngestMoviesUseCase;
