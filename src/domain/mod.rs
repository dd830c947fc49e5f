pub mod awards;
pub mod error;
pub mod movie;
