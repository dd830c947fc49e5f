// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Movie list parsing with encoding fallback

mod movielist;

pub use movielist::{parse_movielist, read_movielist};
